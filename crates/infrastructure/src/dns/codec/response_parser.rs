use dnstamper_application::ports::CodecError;
use dnstamper_domain::{AnswerRecord, DnsResponse, Question, ResourceRecord, ResponseCode};
use hickory_proto::op::{Message, ResponseCode as HickoryResponseCode};
use hickory_proto::rr::{RData, Record};
use tracing::debug;

/// RA bit in the second flags byte of the header.
const RECURSION_AVAILABLE: u8 = 0x80;

pub struct ResponseParser;

impl ResponseParser {
    /// Decodes a wire message into the domain response.
    ///
    /// Only the header, question and answer sections are kept; authority and
    /// additional records play no part in address lookups.
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, CodecError> {
        let id = match response_bytes {
            [hi, lo, ..] => u16::from_be_bytes([*hi, *lo]),
            _ => return Err(CodecError("DNS message shorter than its header".to_string())),
        };

        let message = Message::from_vec(response_bytes)
            .map_err(|e| CodecError(format!("failed to parse DNS response: {}", e)))?;
        let recursion_available = response_bytes
            .get(3)
            .is_some_and(|flags| flags & RECURSION_AVAILABLE != 0);

        let questions = message
            .queries()
            .iter()
            .map(|query| Question {
                name: query.name().to_utf8(),
                record_type: u16::from(query.query_type()),
            })
            .collect();

        let answers: Vec<AnswerRecord> = message.answers().iter().map(Self::to_answer).collect();
        let response_code = Self::map_rcode(message.response_code());

        debug!(
            id,
            rcode = %response_code,
            recursion_available,
            answers = answers.len(),
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id,
            response_code,
            recursion_available,
            questions,
            answers,
        })
    }

    fn to_answer(record: &Record) -> AnswerRecord {
        let data = match record.data() {
            RData::A(a) => ResourceRecord::A(a.0),
            RData::AAAA(aaaa) => ResourceRecord::Aaaa(aaaa.0),
            RData::CNAME(canonical) => ResourceRecord::Cname(canonical.to_utf8()),
            _ => ResourceRecord::Other {
                record_type: u16::from(record.record_type()),
            },
        };
        AnswerRecord::new(record.name().to_utf8(), record.ttl(), data)
    }

    pub fn map_rcode(rcode: HickoryResponseCode) -> ResponseCode {
        match rcode {
            HickoryResponseCode::NoError => ResponseCode::NoError,
            HickoryResponseCode::FormErr => ResponseCode::FormErr,
            HickoryResponseCode::ServFail => ResponseCode::ServFail,
            HickoryResponseCode::NXDomain => ResponseCode::NXDomain,
            HickoryResponseCode::NotImp => ResponseCode::NotImp,
            HickoryResponseCode::Refused => ResponseCode::Refused,
            other => ResponseCode::Other(u16::from(other)),
        }
    }
}
