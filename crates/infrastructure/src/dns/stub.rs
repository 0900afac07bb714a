//! Production wiring of the stub resolver.

use super::codec::HickoryCodec;
use super::query_id::RandomQueryIds;
use super::transport::UdpDialer;
use async_trait::async_trait;
use dnstamper_application::ports::{AddressLookup, DatagramDialer, DnsCodec, QueryIdSource};
use dnstamper_application::use_cases::dns::{AddressResolver, NameResolver};
use dnstamper_domain::{DomainError, ResolverConfig};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::debug;

/// Address lookups against a caller-named resolver over UDP.
pub struct StubResolver {
    addresses: AddressResolver,
}

impl StubResolver {
    /// UDP transport, hickory wire codec and random query ids.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> StubResolverBuilder {
        StubResolverBuilder::new()
    }

    /// IPv4 then IPv6 addresses of `hostname` at `resolver`, with the
    /// default session parameters.
    pub async fn lookup_ip(&self, resolver: &str, hostname: &str) -> Result<Vec<IpAddr>, DomainError> {
        self.addresses.resolve(resolver, hostname).await
    }

    pub async fn lookup_ip_with_config(
        &self,
        config: &ResolverConfig,
        hostname: &str,
    ) -> Result<Vec<IpAddr>, DomainError> {
        self.addresses.resolve_with_config(config, hostname).await
    }
}

impl Default for StubResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AddressLookup for StubResolver {
    async fn lookup_ip(&self, resolver: &str, hostname: &str) -> Result<Vec<IpAddr>, DomainError> {
        StubResolver::lookup_ip(self, resolver, hostname).await
    }
}

pub struct StubResolverBuilder {
    dialer: Arc<dyn DatagramDialer>,
    codec: Arc<dyn DnsCodec>,
    ids: Arc<dyn QueryIdSource>,
}

impl StubResolverBuilder {
    pub fn new() -> Self {
        Self {
            dialer: Arc::new(UdpDialer),
            codec: Arc::new(HickoryCodec),
            ids: Arc::new(RandomQueryIds),
        }
    }

    pub fn with_dialer(mut self, dialer: Arc<dyn DatagramDialer>) -> Self {
        self.dialer = dialer;
        self
    }

    pub fn with_codec(mut self, codec: Arc<dyn DnsCodec>) -> Self {
        self.codec = codec;
        self
    }

    pub fn with_query_ids(mut self, ids: Arc<dyn QueryIdSource>) -> Self {
        self.ids = ids;
        self
    }

    pub fn build(self) -> StubResolver {
        debug!("Building stub resolver");
        StubResolver {
            addresses: AddressResolver::new(NameResolver::new(self.dialer, self.codec, self.ids)),
        }
    }
}

impl Default for StubResolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves `hostname` at `resolver` (an IP address, port 53 implied, or a
/// socket address) with a freshly wired [`StubResolver`].
pub async fn resolve_addresses(resolver: &str, hostname: &str) -> Result<Vec<IpAddr>, DomainError> {
    StubResolver::new().lookup_ip(resolver, hostname).await
}
