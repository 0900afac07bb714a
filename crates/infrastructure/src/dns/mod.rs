pub mod codec;
pub mod query_id;
pub mod stub;
pub mod transport;

pub use codec::{HickoryCodec, RecordTypeMapper};
pub use query_id::RandomQueryIds;
pub use stub::{resolve_addresses, StubResolver, StubResolverBuilder};
pub use transport::{UdpConnection, UdpDialer};
