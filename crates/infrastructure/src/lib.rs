//! Network adapters for the stub resolver: the hickory-proto wire codec,
//! tokio UDP transport and a random query-id source, wired together as
//! [`StubResolver`].
pub mod blocking;
pub mod dns;

pub use dns::{resolve_addresses, StubResolver, StubResolverBuilder};
