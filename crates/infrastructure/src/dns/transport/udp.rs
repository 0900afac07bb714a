//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Each dial binds an ephemeral socket and connects it to the resolver, so
//! the kernel drops datagrams from any other source. Messages are sent
//! as-is (no framing).

use async_trait::async_trait;
use dnstamper_application::ports::{DatagramConn, DatagramDialer};
use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Instant;
use tokio::net::UdpSocket;
use tracing::debug;

/// Opens one connected UDP socket per dial.
#[derive(Debug, Default, Clone, Copy)]
pub struct UdpDialer;

#[async_trait]
impl DatagramDialer for UdpDialer {
    async fn dial(&self, server: SocketAddr) -> io::Result<Box<dyn DatagramConn>> {
        Ok(Box::new(UdpConnection::connect(server).await?))
    }
}

pub struct UdpConnection {
    socket: UdpSocket,
    server: SocketAddr,
}

impl UdpConnection {
    pub async fn connect(server: SocketAddr) -> io::Result<Self> {
        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr = if server.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr).await?;
        socket.connect(server).await?;

        debug!(server = %server, local = ?socket.local_addr().ok(), "UDP socket connected");

        Ok(Self { socket, server })
    }

    pub fn server(&self) -> SocketAddr {
        self.server
    }
}

#[async_trait]
impl DatagramConn for UdpConnection {
    async fn send(&self, datagram: &[u8]) -> io::Result<()> {
        let bytes_sent = self.socket.send(datagram).await?;
        if bytes_sent != datagram.len() {
            return Err(io::Error::new(
                io::ErrorKind::WriteZero,
                format!("short UDP write: {} of {} bytes", bytes_sent, datagram.len()),
            ));
        }

        debug!(server = %self.server, bytes_sent, "UDP query sent");
        Ok(())
    }

    async fn recv(&self, buf: &mut [u8], deadline: Option<Instant>) -> io::Result<usize> {
        let bytes_received = match deadline {
            None => self.socket.recv(buf).await?,
            Some(deadline) => {
                tokio::time::timeout_at(
                    tokio::time::Instant::from_std(deadline),
                    self.socket.recv(buf),
                )
                .await
                .map_err(|_| {
                    io::Error::new(
                        io::ErrorKind::TimedOut,
                        format!("timeout waiting for UDP response from {}", self.server),
                    )
                })??
            }
        };

        debug!(server = %self.server, bytes_received, "UDP response received");
        Ok(bytes_received)
    }

    fn remote_addr(&self) -> Option<SocketAddr> {
        Some(self.server)
    }
}
