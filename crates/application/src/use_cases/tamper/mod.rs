pub mod check_tampering;

pub use check_tampering::{CheckTamperingUseCase, TamperReport, Verdict};
