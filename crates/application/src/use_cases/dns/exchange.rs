use crate::ports::{DatagramConn, DnsCodec, QueryIdSource};
use dnstamper_domain::dns_name::MAX_NAME_LEN;
use dnstamper_domain::{DnsQuery, DnsResponse, DomainError, RecordType, ResolverConfig};
use std::io;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Largest DNS message carried over UDP without EDNS(0) (RFC 1035 §4.2.1).
const DNS_UDP_PAYLOAD_LIMIT: usize = 512;

/// Largest reply accepted from a server; anything bigger is discarded.
pub const MAX_DATAGRAM_SIZE: usize = 4 * DNS_UDP_PAYLOAD_LIMIT;

/// Sends one query over an open connection and waits for the matching reply,
/// retrying up to `attempts` times.
pub struct Exchanger {
    codec: Arc<dyn DnsCodec>,
    ids: Arc<dyn QueryIdSource>,
}

impl Exchanger {
    pub fn new(codec: Arc<dyn DnsCodec>, ids: Arc<dyn QueryIdSource>) -> Self {
        Self { codec, ids }
    }

    /// Replies that fail to decode, carry another transaction id or echo
    /// another question cost an attempt, exactly like a timeout. Write errors and non-timeout read
    /// errors end the exchange at once.
    pub async fn exchange(
        &self,
        config: &ResolverConfig,
        conn: &dyn DatagramConn,
        name: &str,
        record_type: RecordType,
    ) -> Result<DnsResponse, DomainError> {
        if name.len() > MAX_NAME_LEN {
            return Err(DomainError::NameTooLong {
                name: name.to_string(),
            });
        }

        let query = DnsQuery::new(self.ids.next_id(), name, record_type);
        let message = self.codec.encode(&query).map_err(|e| DomainError::Encode {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

        // One spare byte to detect replies that did not fit.
        let mut buf = vec![0u8; MAX_DATAGRAM_SIZE + 1];

        for attempt in 1..=config.attempts() {
            conn.send(&message)
                .await
                .map_err(|e| transport_error(name, conn, e))?;

            let deadline = config.read_timeout().map(|timeout| Instant::now() + timeout);

            let len = match conn.recv(&mut buf, deadline).await {
                Ok(len) => len,
                Err(e) if is_timeout(&e) => {
                    debug!(name = %name, record_type = %record_type, attempt, "DNS query timed out");
                    continue;
                }
                Err(e) => return Err(transport_error(name, conn, e)),
            };

            if len > MAX_DATAGRAM_SIZE {
                debug!(name = %name, attempt, "Discarding oversized DNS reply");
                continue;
            }

            let response = match self.codec.decode(&buf[..len]) {
                Ok(response) => response,
                Err(e) => {
                    debug!(name = %name, attempt, error = %e, "Discarding undecodable DNS reply");
                    continue;
                }
            };

            if response.id != query.id {
                warn!(
                    name = %name,
                    attempt,
                    expected_id = query.id,
                    received_id = response.id,
                    "Discarding DNS reply with mismatched transaction id"
                );
                continue;
            }

            if !response.answers_query(&query) {
                warn!(
                    name = %name,
                    record_type = %record_type,
                    attempt,
                    questions = ?response.questions,
                    "Discarding DNS reply to a different question"
                );
                continue;
            }

            debug!(
                name = %name,
                record_type = %record_type,
                attempt,
                rcode = %response.response_code,
                answers = response.answers.len(),
                "DNS reply received"
            );
            return Ok(response);
        }

        Err(DomainError::NoAnswer {
            name: name.to_string(),
            server: conn.remote_addr().map(|addr| addr.to_string()),
        })
    }
}

fn is_timeout(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock
    )
}

fn transport_error(name: &str, conn: &dyn DatagramConn, error: io::Error) -> DomainError {
    DomainError::Transport {
        name: name.to_string(),
        server: conn.remote_addr().map(|addr| addr.to_string()),
        reason: error.to_string(),
    }
}
