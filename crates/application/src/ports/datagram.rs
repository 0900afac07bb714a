use async_trait::async_trait;
use std::io;
use std::net::SocketAddr;
use std::time::Instant;

/// A datagram socket bound to a single remote server.
///
/// Dropping the connection releases the underlying socket.
#[async_trait]
pub trait DatagramConn: Send + Sync {
    async fn send(&self, datagram: &[u8]) -> io::Result<()>;

    /// Receives one datagram into `buf`, returning its length.
    ///
    /// Fails with [`io::ErrorKind::TimedOut`] once `deadline` passes; `None`
    /// waits indefinitely. A datagram larger than `buf` is truncated.
    async fn recv(&self, buf: &mut [u8], deadline: Option<Instant>) -> io::Result<usize>;

    fn remote_addr(&self) -> Option<SocketAddr>;
}

/// Opens datagram connections.
#[async_trait]
pub trait DatagramDialer: Send + Sync {
    async fn dial(&self, server: SocketAddr) -> io::Result<Box<dyn DatagramConn>>;
}
