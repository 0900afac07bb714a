use crate::dns_name::{names_equal, to_rooted};
use crate::{AnswerRecord, DnsQuery, DomainError, RecordType, ResourceRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest CNAME chain followed inside a single response.
pub const MAX_CNAME_HOPS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResponseCode {
    NoError,
    FormErr,
    ServFail,
    NXDomain,
    NotImp,
    Refused,
    Other(u16),
}

impl ResponseCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormErr => "FORMERR",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::Other(_) => "UNKNOWN",
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseCode::Other(code) => write!(f, "{}({})", self.as_str(), code),
            _ => f.write_str(self.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub name: String,
    pub record_type: u16,
}

/// A decoded response message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsResponse {
    pub id: u16,

    pub response_code: ResponseCode,

    /// RA header bit. NXDOMAIN only means "no such host" from a server
    /// that offers recursion.
    #[serde(default)]
    pub recursion_available: bool,

    #[serde(default)]
    pub questions: Vec<Question>,

    #[serde(default)]
    pub answers: Vec<AnswerRecord>,
}

/// Records found for a name, plus the alias they were found under.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Answer {
    /// Rooted name the records were found under.
    pub name: String,

    /// Target of the last CNAME followed, if any was.
    pub cname: Option<String>,

    pub records: Vec<ResourceRecord>,
}

impl DnsResponse {
    /// Response from a recursive server (RA set) with no sections filled.
    pub fn new(id: u16, response_code: ResponseCode) -> Self {
        Self {
            id,
            response_code,
            recursion_available: true,
            questions: vec![],
            answers: vec![],
        }
    }

    /// Echoes the question of `query`, as a server does.
    pub fn for_query(query: &DnsQuery, response_code: ResponseCode) -> Self {
        let mut response = Self::new(query.id, response_code);
        response.questions.push(Question {
            name: query.name.clone(),
            record_type: query.record_type.to_u16(),
        });
        response
    }

    pub fn with_recursion_available(mut self, recursion_available: bool) -> Self {
        self.recursion_available = recursion_available;
        self
    }

    pub fn with_answer(mut self, record: AnswerRecord) -> Self {
        self.answers.push(record);
        self
    }

    /// Whether this reply belongs to `query`: same id and, when the server
    /// echoed a question section, exactly the question that was asked.
    pub fn answers_query(&self, query: &DnsQuery) -> bool {
        if self.id != query.id {
            return false;
        }
        match self.questions.as_slice() {
            [] => true,
            [question] => {
                question.record_type == query.record_type.to_u16()
                    && names_equal(&question.name, &query.name)
            }
            _ => false,
        }
    }

    /// Interprets this response as the answer to `name`/`record_type`.
    ///
    /// A recursive server is expected to have put the whole CNAME chain in
    /// this one message, so aliases are followed within the answer section
    /// only. NXDOMAIN from a recursive server and an empty result both
    /// classify as [`DomainError::NoSuchHost`]; NXDOMAIN without RA is a
    /// misbehaving server.
    ///
    /// [`Answer::name`] is the owner of the returned records: the rooted
    /// query name, or the last alias followed.
    pub fn answer(
        &self,
        name: &str,
        server: &str,
        record_type: RecordType,
    ) -> Result<Answer, DomainError> {
        match self.response_code {
            ResponseCode::NoError => {}
            ResponseCode::NXDomain if self.recursion_available => {
                return Err(DomainError::NoSuchHost {
                    name: name.to_string(),
                    server: Some(server.to_string()),
                });
            }
            other => {
                return Err(DomainError::ServerMisbehaving {
                    name: name.to_string(),
                    server: server.to_string(),
                    rcode: other.to_string(),
                });
            }
        }

        let mut current = name.to_string();
        let mut cname = None;

        'chain: for _ in 0..MAX_CNAME_HOPS {
            let mut records = Vec::new();

            for answer in &self.answers {
                if !names_equal(&answer.name, &current) {
                    continue;
                }
                match &answer.data {
                    ResourceRecord::Cname(target) => {
                        current = target.clone();
                        cname = Some(target.clone());
                        continue 'chain;
                    }
                    data @ (ResourceRecord::A(_) | ResourceRecord::Aaaa(_)) => {
                        if data.matches(record_type) {
                            records.push(data.clone());
                        }
                    }
                    ResourceRecord::Other { .. } => {}
                }
            }

            if records.is_empty() {
                return Err(DomainError::NoSuchHost {
                    name: current,
                    server: Some(server.to_string()),
                });
            }
            return Ok(Answer {
                name: to_rooted(&current),
                cname,
                records,
            });
        }

        Err(DomainError::TooManyRedirects {
            name: name.to_string(),
            server: server.to_string(),
        })
    }
}
