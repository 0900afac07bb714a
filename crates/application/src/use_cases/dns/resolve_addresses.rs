use super::lookup_name::NameResolver;
use crate::ports::AddressLookup;
use async_trait::async_trait;
use dnstamper_domain::{DomainError, RecordType, ResolverConfig, ResourceRecord};
use std::net::IpAddr;
use tracing::{debug, warn};

/// Resolves a hostname to its IPv4 and IPv6 addresses at one resolver.
pub struct AddressResolver {
    names: NameResolver,
}

impl AddressResolver {
    pub fn new(names: NameResolver) -> Self {
        Self { names }
    }

    /// Resolves with the default session parameters for `resolver`.
    pub async fn resolve(&self, resolver: &str, hostname: &str) -> Result<Vec<IpAddr>, DomainError> {
        let config = ResolverConfig::new(resolver);
        self.resolve_with_config(&config, hostname).await
    }

    /// A records first, then AAAA records for the name the A records were
    /// found under: the rooted hostname, or its alias.
    ///
    /// An A failure is returned as is and AAAA is never asked. An AAAA
    /// failure is dropped when the A lookup already produced addresses.
    pub async fn resolve_with_config(
        &self,
        config: &ResolverConfig,
        hostname: &str,
    ) -> Result<Vec<IpAddr>, DomainError> {
        let v4 = self.names.lookup(config, hostname, RecordType::A).await?;
        let mut addresses = to_addresses(&v4.records, RecordType::A);

        // Rooted, so the AAAA lookup goes straight to the form that answered.
        let name = v4.name.as_str();

        match self.names.lookup(config, name, RecordType::AAAA).await {
            Ok(v6) => {
                addresses.extend(to_addresses(&v6.records, RecordType::AAAA));
            }
            Err(e) if !addresses.is_empty() => {
                debug!(name = %name, error = %e, "Ignoring AAAA failure, A lookup succeeded");
            }
            Err(e) => return Err(e),
        }

        debug!(
            hostname = %hostname,
            resolver = %config.resolver(),
            addresses = addresses.len(),
            "Resolved addresses"
        );
        Ok(addresses)
    }
}

fn to_addresses(records: &[ResourceRecord], record_type: RecordType) -> Vec<IpAddr> {
    records
        .iter()
        .filter_map(|record| {
            if !record.matches(record_type) {
                warn!(
                    expected = %record_type,
                    found = record.type_code(),
                    "Skipping record of unexpected type"
                );
                return None;
            }
            record.address()
        })
        .collect()
}

#[async_trait]
impl AddressLookup for AddressResolver {
    async fn lookup_ip(&self, resolver: &str, hostname: &str) -> Result<Vec<IpAddr>, DomainError> {
        self.resolve(resolver, hostname).await
    }
}
