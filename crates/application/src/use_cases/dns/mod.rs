pub mod exchange;
pub mod lookup_name;
pub mod resolve_addresses;

pub use exchange::{Exchanger, MAX_DATAGRAM_SIZE};
pub use lookup_name::NameResolver;
pub use resolve_addresses::AddressResolver;
