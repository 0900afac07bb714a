pub mod check;
pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;

pub use check::CheckConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
