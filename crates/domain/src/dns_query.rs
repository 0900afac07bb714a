use super::RecordType;
use serde::{Deserialize, Serialize};

/// A single-question query as handed to the codec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsQuery {
    pub id: u16,
    pub name: String,
    pub record_type: RecordType,
    pub recursion_desired: bool,
}

impl DnsQuery {
    /// Recursive query, the only kind a stub resolver sends.
    pub fn new(id: u16, name: impl Into<String>, record_type: RecordType) -> Self {
        Self {
            id,
            name: name.into(),
            record_type,
            recursion_desired: true,
        }
    }
}
