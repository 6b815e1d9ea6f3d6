//! Shared helpers for the `random-files` integration tests.

pub mod error;
pub mod progress;
mod seeded_data;
pub mod source;
pub mod tree;

pub mod prelude {
    pub use crate::error::TestResult;
    pub use crate::progress::{parse_progress_output, ProgressLine};
    pub use crate::source::{limited_source, FailingSource, RejectingWriter};
    pub use crate::tree::{md5_hex, GeneratedTree, ScannedEntry, ScannedEntryKind};
}

// Re-exported for the `generate_seeded_binary_data` macro.
#[doc(hidden)]
pub use rand;
#[doc(hidden)]
pub use rand_chacha;
