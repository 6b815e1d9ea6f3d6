//! Error types for option validation and tree generation.
//!
//! Every failure falls into one of two kinds:
//! - an invalid configuration ([`InvalidConfigError`]), detected before anything touches the filesystem, or
//! - an IO failure ([`GenerateError`]'s remaining variants), which aborts the run immediately.
//!   Entries created before the failure are left on disk.

mod config;
mod generate;

pub use config::*;
pub use generate::*;
