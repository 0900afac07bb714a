//! dnstamper domain layer: value types, errors and name rules shared by the
//! resolver and its callers.
pub mod config;
pub mod dns_name;
pub mod dns_query;
pub mod dns_record;
pub mod dns_response;
pub mod errors;

pub use config::{CheckConfig, CliOverrides, Config, ConfigError, LoggingConfig, ResolverConfig};
pub use dns_query::DnsQuery;
pub use dns_record::{AnswerRecord, RecordType, ResourceRecord};
pub use dns_response::{Answer, DnsResponse, Question, ResponseCode};
pub use errors::{DomainError, ErrorKind};
