//! DNS wire codec backed by `hickory-proto`.

pub mod message_builder;
pub mod record_type_map;
pub mod response_parser;

pub use message_builder::MessageBuilder;
pub use record_type_map::RecordTypeMapper;
pub use response_parser::ResponseParser;

use dnstamper_application::ports::{CodecError, DnsCodec};
use dnstamper_domain::{DnsQuery, DnsResponse};

/// [`DnsCodec`] speaking RFC 1035 wire format.
#[derive(Debug, Default, Clone, Copy)]
pub struct HickoryCodec;

impl DnsCodec for HickoryCodec {
    fn encode(&self, query: &DnsQuery) -> Result<Vec<u8>, CodecError> {
        MessageBuilder::build_query(query)
    }

    fn decode(&self, message: &[u8]) -> Result<DnsResponse, CodecError> {
        ResponseParser::parse(message)
    }
}
