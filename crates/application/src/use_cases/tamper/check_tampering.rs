use crate::ports::AddressLookup;
use dnstamper_domain::{CheckConfig, DomainError};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Same address set as the control resolver.
    Consistent { addresses: Vec<IpAddr> },

    Divergent {
        expected: Vec<IpAddr>,
        got: Vec<IpAddr>,
    },

    LookupFailed(DomainError),

    /// The control resolver itself failed; nothing was compared.
    ControlFailed(DomainError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TamperReport {
    pub hostname: String,
    pub resolver: String,
    pub verdict: Verdict,
}

impl TamperReport {
    pub fn is_consistent(&self) -> bool {
        matches!(self.verdict, Verdict::Consistent { .. })
    }
}

/// Compares each resolver's view of each hostname against a control
/// resolver.
pub struct CheckTamperingUseCase {
    lookup: Arc<dyn AddressLookup>,
}

impl CheckTamperingUseCase {
    pub fn new(lookup: Arc<dyn AddressLookup>) -> Self {
        Self { lookup }
    }

    pub async fn execute(&self, config: &CheckConfig) -> Vec<TamperReport> {
        let mut reports = Vec::new();

        for hostname in config.hostnames.iter().map(|h| h.trim()).filter(|h| !h.is_empty()) {
            info!(hostname = %hostname, control = %config.control_resolver, "Resolving at control");

            let expected = match self
                .lookup
                .lookup_ip(&config.control_resolver, hostname)
                .await
            {
                Ok(addresses) => addresses,
                Err(e) => {
                    warn!(hostname = %hostname, error = %e, "Control resolver failed");
                    reports.push(TamperReport {
                        hostname: hostname.to_string(),
                        resolver: config.control_resolver.clone(),
                        verdict: Verdict::ControlFailed(e),
                    });
                    continue;
                }
            };

            for resolver in config.resolvers.iter().map(|r| r.trim()).filter(|r| !r.is_empty()) {
                info!(hostname = %hostname, resolver = %resolver, "Resolving");

                let verdict = match self.lookup.lookup_ip(resolver, hostname).await {
                    Ok(got) if same_addresses(&expected, &got) => {
                        Verdict::Consistent { addresses: got }
                    }
                    Ok(got) => {
                        warn!(
                            hostname = %hostname,
                            resolver = %resolver,
                            expected = ?expected,
                            got = ?got,
                            "Resolver answer diverges from control"
                        );
                        Verdict::Divergent {
                            expected: expected.clone(),
                            got,
                        }
                    }
                    Err(e) => Verdict::LookupFailed(e),
                };

                reports.push(TamperReport {
                    hostname: hostname.to_string(),
                    resolver: resolver.to_string(),
                    verdict,
                });
            }
        }

        reports
    }
}

/// Order-insensitive: resolvers rotate record order between replies.
fn same_addresses(a: &[IpAddr], b: &[IpAddr]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort();
    a.dedup();
    b.sort();
    b.dedup();
    a == b
}
