//! Generate disposable directory trees filled with randomly named, randomly sized files.
//!
//! Useful as test fixtures for backup tools, filesystem benchmarks, sync utilities
//! or anything else that needs a realistic-looking file hierarchy it can throw away afterwards.
//!
//!
//! # Main features
//! - recursive fanout generation with:
//!     - fixed or randomized file and subdirectory counts per directory,
//!     - a configurable maximum depth,
//!     - fixed or randomized file sizes,
//!     - names drawn from a configurable alphabet,
//! - optional MD5 digests of every generated file, computed while the content is being written, and
//! - reproducible trees from a fixed seed.
//!
//! <br>
//!
//! Visit the [`generator`] module for the main entry points
//! and the [`options`] module for the available configuration.
//!
//!
//! <br>
//!
//! # Feature flags
//! The following feature flags enable optional functionality:
//! - `fs-err` (*disabled by default*): enables the optional [`fs-err`](../fs_err/index.html) support.
//!   While `random-files` already provides path-carrying [error types](crate::error),
//!   this does enable more helpful error messages for underlying IO errors.
//! - `miette` (*disabled by default*): derives `miette::Diagnostic` on all error types.
//!
//!
//! <br>
//!
//! # Examples
//!
//! Generating a reproducible tree and printing a line for each created entry:
//! ```no_run
//! # use std::path::Path;
//! # use random_files::error::GenerateError;
//! # use random_files::options::FanoutOptions;
//! # use random_files::generator::RandomTreeGenerator;
//! # fn main() -> Result<(), GenerateError> {
//! let options = FanoutOptions {
//!     fanout_depth: 3,
//!     fanout_files: 5,
//!     fanout_directories: 2,
//!     random_seed: 1337,
//!     compute_digest: true,
//!     ..Default::default()
//! };
//!
//! let mut generator = RandomTreeGenerator::with_seeded_content(options)?
//!     .with_progress(std::io::stdout());
//!
//! let finished = generator.generate(Path::new("./fixture"), 0)?;
//!
//! println!(
//!     "Created {} files and {} directories ({} bytes) using seed {}.",
//!     finished.files_created,
//!     finished.directories_created,
//!     finished.bytes_written,
//!     finished.seed
//! );
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]


/// 64 KiB
const DEFAULT_WRITE_BUFFER_SIZE: usize = 1024 * 64;


pub mod content;
mod directory;
pub mod error;
mod file;
pub mod generator;
mod macros;
pub mod name;
pub mod options;
mod progress;

pub use generator::{write_random_tree, GenerationFinished, RandomTreeGenerator};
