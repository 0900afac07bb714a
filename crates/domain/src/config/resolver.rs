use crate::DomainError;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

pub const DNS_PORT: u16 = 53;

pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_NDOTS: usize = 2;
pub const DEFAULT_ATTEMPTS: usize = 2;

/// Parameters of one resolution session against one server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    resolver: String,
    timeout_secs: u64,
    ndots: usize,
    attempts: usize,
}

impl ResolverConfig {
    /// Config for `resolver` with the fixed defaults: 5s timeout, ndots 2,
    /// 2 attempts.
    pub fn new(resolver: impl Into<String>) -> Self {
        Self {
            resolver: resolver.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            ndots: DEFAULT_NDOTS,
            attempts: DEFAULT_ATTEMPTS,
        }
    }

    pub fn try_new(
        resolver: impl Into<String>,
        timeout_secs: u64,
        ndots: usize,
        attempts: usize,
    ) -> Result<Self, DomainError> {
        if attempts == 0 {
            return Err(DomainError::Config(
                "attempts must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            resolver: resolver.into(),
            timeout_secs,
            ndots,
            attempts,
        })
    }

    pub fn resolver(&self) -> &str {
        &self.resolver
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    /// Read deadline per attempt; `None` means wait indefinitely.
    pub fn read_timeout(&self) -> Option<Duration> {
        match self.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    pub fn ndots(&self) -> usize {
        self.ndots
    }

    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// UDP endpoint of the resolver.
    ///
    /// Accepts a bare IP literal (port 53 implied) or a full socket address.
    /// Host names are refused: resolving the resolver would itself need DNS.
    pub fn server_addr(&self) -> Option<SocketAddr> {
        let resolver = self.resolver.trim();
        if let Ok(ip) = resolver.parse::<IpAddr>() {
            return Some(SocketAddr::new(ip, DNS_PORT));
        }
        resolver.parse::<SocketAddr>().ok()
    }
}
