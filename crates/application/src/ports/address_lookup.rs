use async_trait::async_trait;
use dnstamper_domain::DomainError;
use std::net::IpAddr;

#[async_trait]
pub trait AddressLookup: Send + Sync {
    /// All IPv4 then IPv6 addresses of `hostname` as seen by `resolver`.
    async fn lookup_ip(&self, resolver: &str, hostname: &str) -> Result<Vec<IpAddr>, DomainError>;
}
