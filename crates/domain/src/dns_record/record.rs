use super::RecordType;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Decoded record data. Only address and alias records carry meaning for a
/// lookup; everything else is kept as its wire type code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceRecord {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Cname(String),
    Other { record_type: u16 },
}

impl ResourceRecord {
    pub fn type_code(&self) -> u16 {
        match self {
            ResourceRecord::A(_) => RecordType::A.to_u16(),
            ResourceRecord::Aaaa(_) => RecordType::AAAA.to_u16(),
            ResourceRecord::Cname(_) => 5,
            ResourceRecord::Other { record_type } => *record_type,
        }
    }

    pub fn matches(&self, record_type: RecordType) -> bool {
        match (self, record_type) {
            (ResourceRecord::A(_), RecordType::A) => true,
            (ResourceRecord::Aaaa(_), RecordType::AAAA) => true,
            (ResourceRecord::A(_), RecordType::AAAA)
            | (ResourceRecord::Aaaa(_), RecordType::A)
            | (ResourceRecord::Cname(_), _)
            | (ResourceRecord::Other { .. }, _) => false,
        }
    }

    pub fn address(&self) -> Option<IpAddr> {
        match self {
            ResourceRecord::A(a) => Some(IpAddr::V4(*a)),
            ResourceRecord::Aaaa(aaaa) => Some(IpAddr::V6(*aaaa)),
            ResourceRecord::Cname(_) | ResourceRecord::Other { .. } => None,
        }
    }
}

/// One entry of a response's answer section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub name: String,

    pub ttl: u32,

    pub data: ResourceRecord,
}

impl AnswerRecord {
    pub fn new(name: impl Into<String>, ttl: u32, data: ResourceRecord) -> Self {
        Self {
            name: name.into(),
            ttl,
            data,
        }
    }
}
