//! dnstamper application layer: the resolution use cases and the ports they
//! drive.
pub mod ports;
pub mod use_cases;
