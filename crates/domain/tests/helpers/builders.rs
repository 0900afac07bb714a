#![allow(dead_code)]
use dnstamper_domain::{AnswerRecord, DnsResponse, Question, ResourceRecord, ResponseCode};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

pub struct DnsResponseBuilder {
    id: u16,
    response_code: ResponseCode,
    recursion_available: bool,
    questions: Vec<Question>,
    answers: Vec<AnswerRecord>,
}

impl DnsResponseBuilder {
    pub fn new() -> Self {
        Self {
            id: 0x1234,
            response_code: ResponseCode::NoError,
            recursion_available: true,
            questions: vec![],
            answers: vec![],
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn response_code(mut self, response_code: ResponseCode) -> Self {
        self.response_code = response_code;
        self
    }

    pub fn recursion_available(mut self, recursion_available: bool) -> Self {
        self.recursion_available = recursion_available;
        self
    }

    pub fn question(mut self, name: &str, record_type: u16) -> Self {
        self.questions.push(Question {
            name: name.to_string(),
            record_type,
        });
        self
    }

    pub fn a(mut self, name: &str, address: &str) -> Self {
        self.answers.push(AnswerRecord::new(
            name,
            300,
            ResourceRecord::A(Ipv4Addr::from_str(address).unwrap()),
        ));
        self
    }

    pub fn aaaa(mut self, name: &str, address: &str) -> Self {
        self.answers.push(AnswerRecord::new(
            name,
            300,
            ResourceRecord::Aaaa(Ipv6Addr::from_str(address).unwrap()),
        ));
        self
    }

    pub fn cname(mut self, name: &str, target: &str) -> Self {
        self.answers.push(AnswerRecord::new(
            name,
            300,
            ResourceRecord::Cname(target.to_string()),
        ));
        self
    }

    pub fn other(mut self, name: &str, record_type: u16) -> Self {
        self.answers.push(AnswerRecord::new(
            name,
            300,
            ResourceRecord::Other { record_type },
        ));
        self
    }

    pub fn build(self) -> DnsResponse {
        DnsResponse {
            id: self.id,
            response_code: self.response_code,
            recursion_available: self.recursion_available,
            questions: self.questions,
            answers: self.answers,
        }
    }
}
