//! Synchronous entry points. Each call occupies the calling thread until the
//! lookup finishes.
//!
//! Calls made from inside a tokio runtime fail with [`DomainError::Io`]
//! instead of blocking one of its threads.

use crate::dns::StubResolver;
use dnstamper_domain::{DomainError, ResolverConfig};
use std::net::IpAddr;
use tokio::runtime::{Builder, Handle, Runtime};

/// A [`StubResolver`] driven by its own current-thread runtime.
pub struct BlockingStubResolver {
    inner: StubResolver,
    runtime: Runtime,
}

impl BlockingStubResolver {
    pub fn new() -> Result<Self, DomainError> {
        Self::with_resolver(StubResolver::new())
    }

    pub fn with_resolver(inner: StubResolver) -> Result<Self, DomainError> {
        // A runtime dropped inside another runtime panics.
        ensure_outside_runtime()?;
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| DomainError::Io(format!("failed to start runtime: {}", e)))?;
        Ok(Self { inner, runtime })
    }

    pub fn lookup_ip(&self, resolver: &str, hostname: &str) -> Result<Vec<IpAddr>, DomainError> {
        ensure_outside_runtime()?;
        self.runtime.block_on(self.inner.lookup_ip(resolver, hostname))
    }

    pub fn lookup_ip_with_config(
        &self,
        config: &ResolverConfig,
        hostname: &str,
    ) -> Result<Vec<IpAddr>, DomainError> {
        ensure_outside_runtime()?;
        self.runtime
            .block_on(self.inner.lookup_ip_with_config(config, hostname))
    }
}

pub fn resolve_addresses(resolver: &str, hostname: &str) -> Result<Vec<IpAddr>, DomainError> {
    BlockingStubResolver::new()?.lookup_ip(resolver, hostname)
}

fn ensure_outside_runtime() -> Result<(), DomainError> {
    if Handle::try_current().is_ok() {
        return Err(DomainError::Io(
            "blocking lookup called from within an async runtime".to_string(),
        ));
    }
    Ok(())
}
