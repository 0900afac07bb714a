//! DNS Message Builder
//!
//! Constructs DNS query messages in wire format using `hickory-proto`.

use super::record_type_map::RecordTypeMapper;
use dnstamper_application::ports::CodecError;
use dnstamper_domain::DnsQuery;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Serialize `query` as a single-question message of class IN.
    ///
    /// The id and RD flag are taken from the query as given.
    pub fn build_query(query: &DnsQuery) -> Result<Vec<u8>, CodecError> {
        let name = Name::from_str(&query.name)
            .map_err(|e| CodecError(format!("invalid domain '{}': {}", query.name, e)))?;

        let mut question = Query::new();
        question.set_name(name);
        question.set_query_type(RecordTypeMapper::to_hickory(query.record_type));
        question.set_query_class(DNSClass::IN);

        let mut message = Message::new(query.id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(query.recursion_desired);
        message.add_query(question);

        Self::serialize_message(&message)
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, CodecError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message
            .emit(&mut encoder)
            .map_err(|e| CodecError(format!("failed to serialize DNS message: {}", e)))?;

        Ok(buf)
    }
}
