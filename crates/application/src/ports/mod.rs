mod address_lookup;
mod datagram;
mod dns_codec;
mod query_id;

pub use address_lookup::AddressLookup;
pub use datagram::{DatagramConn, DatagramDialer};
pub use dns_codec::{CodecError, DnsCodec};
pub use query_id::QueryIdSource;
