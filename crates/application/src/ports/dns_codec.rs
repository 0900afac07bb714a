use dnstamper_domain::{DnsQuery, DnsResponse};

#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct CodecError(pub String);

/// DNS wire format.
pub trait DnsCodec: Send + Sync {
    fn encode(&self, query: &DnsQuery) -> Result<Vec<u8>, CodecError>;

    /// Must fail, never panic, on truncated or malformed input.
    fn decode(&self, message: &[u8]) -> Result<DnsResponse, CodecError>;
}
