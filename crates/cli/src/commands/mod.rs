mod check;
mod resolve;

pub use check::run_check;
pub use resolve::run_resolve;
