#![allow(unused_imports)]
pub mod mock_lookup;

pub use fake_network::{FakeNetwork, JsonCodec, RejectingCodec, ScriptedIds, Step};
pub use mock_lookup::MockAddressLookup;
