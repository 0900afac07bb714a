pub mod dns;
pub mod tamper;

pub use dns::{AddressResolver, Exchanger, NameResolver};
pub use tamper::{CheckTamperingUseCase, TamperReport, Verdict};
