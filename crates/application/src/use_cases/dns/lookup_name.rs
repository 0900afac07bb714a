use super::exchange::Exchanger;
use crate::ports::{DatagramDialer, DnsCodec, QueryIdSource};
use dnstamper_domain::dns_name::{count_dots, is_domain_name, is_rooted, to_rooted, MAX_NAME_LEN};
use dnstamper_domain::{Answer, DomainError, RecordType, ResolverConfig};
use std::sync::Arc;
use tracing::debug;

/// Looks up a single name, choosing which literal form to put on the wire.
///
/// There is no search list: a name with at least `ndots` dots is tried as
/// a fully qualified name first, and every name ends up queried in rooted
/// form. Each form tried gets its own connection.
pub struct NameResolver {
    dialer: Arc<dyn DatagramDialer>,
    exchanger: Exchanger,
}

impl NameResolver {
    pub fn new(
        dialer: Arc<dyn DatagramDialer>,
        codec: Arc<dyn DnsCodec>,
        ids: Arc<dyn QueryIdSource>,
    ) -> Self {
        Self {
            dialer,
            exchanger: Exchanger::new(codec, ids),
        }
    }

    pub async fn lookup(
        &self,
        config: &ResolverConfig,
        name: &str,
        record_type: RecordType,
    ) -> Result<Answer, DomainError> {
        if name.len() > MAX_NAME_LEN {
            return Err(DomainError::NameTooLong {
                name: name.to_string(),
            });
        }
        if !is_domain_name(name) {
            return Err(DomainError::InvalidName {
                name: name.to_string(),
            });
        }

        let rooted = is_rooted(name);
        let fqdn = to_rooted(name);
        if fqdn.len() > MAX_NAME_LEN {
            return Err(DomainError::NameTooLong { name: fqdn });
        }

        if rooted || count_dots(name) >= config.ndots() {
            match self.try_one_name(config, &fqdn, record_type).await {
                Ok(answer) => return Ok(answer),
                Err(e) if rooted || !e.allows_fallback() => return Err(e),
                Err(e) => {
                    debug!(name = %name, error = %e, "Lookup as fully qualified name failed, retrying");
                }
            }
        }

        self.try_one_name(config, &fqdn, record_type).await
    }

    async fn try_one_name(
        &self,
        config: &ResolverConfig,
        name: &str,
        record_type: RecordType,
    ) -> Result<Answer, DomainError> {
        // The resolver must be an address; dialing a host name would recurse
        // into DNS.
        let server = config.server_addr().ok_or_else(|| DomainError::Dial {
            name: name.to_string(),
            server: config.resolver().to_string(),
            reason: "resolver is not an IP address".to_string(),
        })?;

        let conn = self
            .dialer
            .dial(server)
            .await
            .map_err(|e| DomainError::Dial {
                name: name.to_string(),
                server: server.to_string(),
                reason: e.to_string(),
            })?;

        debug!(name = %name, record_type = %record_type, server = %server, "Querying resolver");

        let response = self
            .exchanger
            .exchange(config, conn.as_ref(), name, record_type)
            .await;
        drop(conn);

        response?.answer(name, &server.to_string(), record_type)
    }
}
