#![allow(dead_code)]
use async_trait::async_trait;
use dnstamper_application::ports::AddressLookup;
use dnstamper_domain::DomainError;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};

/// Canned per-resolver answers; unknown pairs are "no such host".
pub struct MockAddressLookup {
    answers: Arc<Mutex<HashMap<(String, String), Result<Vec<IpAddr>, DomainError>>>>,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockAddressLookup {
    pub fn new() -> Self {
        Self {
            answers: Arc::new(Mutex::new(HashMap::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn set_addresses(&self, resolver: &str, hostname: &str, addresses: &[&str]) {
        let addresses = addresses.iter().map(|a| a.parse().unwrap()).collect();
        self.answers
            .lock()
            .unwrap()
            .insert((resolver.to_string(), hostname.to_string()), Ok(addresses));
    }

    pub fn set_error(&self, resolver: &str, hostname: &str, error: DomainError) {
        self.answers
            .lock()
            .unwrap()
            .insert((resolver.to_string(), hostname.to_string()), Err(error));
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockAddressLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AddressLookup for MockAddressLookup {
    async fn lookup_ip(&self, resolver: &str, hostname: &str) -> Result<Vec<IpAddr>, DomainError> {
        let key = (resolver.to_string(), hostname.to_string());
        self.calls.lock().unwrap().push(key.clone());
        self.answers
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_else(|| {
                Err(DomainError::NoSuchHost {
                    name: hostname.to_string(),
                    server: Some(resolver.to_string()),
                })
            })
    }
}
