#![allow(dead_code)]
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

const TYPE_A: u16 = 1;
const TYPE_CNAME: u16 = 5;
const TYPE_AAAA: u16 = 28;

/// How the mock server answers every query it receives.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// NOERROR with the addresses matching the asked type (possibly none).
    Answer {
        v4: Vec<Ipv4Addr>,
        v6: Vec<Ipv6Addr>,
    },
    /// NOERROR with `query name CNAME target` followed by `target A v4`.
    Alias { target: String, v4: Vec<Ipv4Addr> },
    /// Header-only reply with the given rcode.
    Rcode(u8),
    /// Valid answer under a different transaction id.
    WrongId { v4: Vec<Ipv4Addr> },
    /// Reads queries, never replies.
    Silent,
}

impl MockBehavior {
    pub fn example_com() -> Self {
        MockBehavior::Answer {
            v4: vec![Ipv4Addr::new(93, 184, 216, 34)],
            v6: vec!["2606:2800:220:1:248:1893:25c8:1946".parse().unwrap()],
        }
    }

    pub fn ipv4_only(v4: Ipv4Addr) -> Self {
        MockBehavior::Answer { v4: vec![v4], v6: vec![] }
    }

    pub fn nxdomain() -> Self {
        MockBehavior::Rcode(3)
    }
}

pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<AtomicUsize>,
    query_types: Arc<Mutex<Vec<u16>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Binds an ephemeral port on 127.0.0.1.
    pub async fn start(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;

        let queries = Arc::new(AtomicUsize::new(0));
        let query_types = Arc::new(Mutex::new(Vec::new()));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let counter = queries.clone();
        let types = query_types.clone();
        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            let query = &buf[..len];
                            counter.fetch_add(1, Ordering::SeqCst);
                            if let Some(qtype) = Self::query_type(query) {
                                types.lock().unwrap().push(qtype);
                            }
                            if let Some(response) = Self::build_response(query, &behavior) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            queries,
            query_types,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Resolver string naming this server.
    pub fn resolver(&self) -> String {
        self.addr.to_string()
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn query_types(&self) -> Vec<u16> {
        self.query_types.lock().unwrap().clone()
    }

    /// QTYPE of a single-question message without additional records.
    pub fn query_type(query: &[u8]) -> Option<u16> {
        if query.len() < 16 {
            return None;
        }
        let pos = query.len() - 4;
        Some(u16::from_be_bytes([query[pos], query[pos + 1]]))
    }

    /// Raw wire reply to `query`, or `None` when the server stays silent.
    pub fn build_response(query: &[u8], behavior: &MockBehavior) -> Option<Vec<u8>> {
        if query.len() < 12 {
            return None;
        }
        let qtype = Self::query_type(query)?;

        let (id, rcode, answers): (u16, u8, Vec<Vec<u8>>) = match behavior {
            MockBehavior::Silent => return None,
            MockBehavior::Rcode(rcode) => (Self::id(query), *rcode, vec![]),
            MockBehavior::Answer { v4, v6 } => (Self::id(query), 0, Self::addresses(qtype, v4, v6)),
            MockBehavior::WrongId { v4 } => {
                (Self::id(query) ^ 0xffff, 0, Self::addresses(qtype, v4, &[]))
            }
            MockBehavior::Alias { target, v4 } => {
                let target_wire = Self::encode_name(target);
                // CNAME rdata starts after the header, the echoed question
                // and the fixed part of the first record.
                let target_offset = 12 + (query.len() - 12) + 12;
                let mut records = vec![Self::record(&[0xc0, 0x0c], TYPE_CNAME, &target_wire)];
                if qtype == TYPE_A {
                    let pointer = [0xc0 | (target_offset >> 8) as u8, target_offset as u8];
                    for a in v4 {
                        records.push(Self::record(&pointer, TYPE_A, &a.octets()));
                    }
                }
                (Self::id(query), 0, records)
            }
        };

        let mut response = Vec::with_capacity(512);

        response.extend_from_slice(&id.to_be_bytes());

        // QR + RD, then RA + rcode
        response.push(0x81);
        response.push(0x80 | (rcode & 0x0f));

        response.extend_from_slice(&query[4..6]);

        response.extend_from_slice(&(answers.len() as u16).to_be_bytes());

        response.extend_from_slice(&[0x00, 0x00]);

        response.extend_from_slice(&[0x00, 0x00]);

        response.extend_from_slice(&query[12..]);

        for answer in answers {
            response.extend_from_slice(&answer);
        }

        Some(response)
    }

    fn id(query: &[u8]) -> u16 {
        u16::from_be_bytes([query[0], query[1]])
    }

    fn addresses(qtype: u16, v4: &[Ipv4Addr], v6: &[Ipv6Addr]) -> Vec<Vec<u8>> {
        match qtype {
            TYPE_A => v4
                .iter()
                .map(|a| Self::record(&[0xc0, 0x0c], TYPE_A, &a.octets()))
                .collect(),
            TYPE_AAAA => v6
                .iter()
                .map(|a| Self::record(&[0xc0, 0x0c], TYPE_AAAA, &a.octets()))
                .collect(),
            _ => vec![],
        }
    }

    fn record(owner: &[u8], rtype: u16, rdata: &[u8]) -> Vec<u8> {
        let mut record = Vec::with_capacity(owner.len() + 10 + rdata.len());
        record.extend_from_slice(owner);
        record.extend_from_slice(&rtype.to_be_bytes());
        record.extend_from_slice(&[0x00, 0x01]);
        record.extend_from_slice(&[0x00, 0x00, 0x00, 0x3c]);
        record.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        record.extend_from_slice(rdata);
        record
    }

    fn encode_name(name: &str) -> Vec<u8> {
        let mut wire = Vec::new();
        for label in name.trim_end_matches('.').split('.') {
            wire.push(label.len() as u8);
            wire.extend_from_slice(label.as_bytes());
        }
        wire.push(0);
        wire
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
