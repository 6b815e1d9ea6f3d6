use assert_fs::fixture::FixtureError;
use random_files::error::{GenerateError, InvalidConfigError};
use thiserror::Error;

/// Main `Error` for use in unit and integration tests.
///
/// Implements `From` for:
/// - [`assert_fs::FixtureError`](../../assert_fs/fixture/struct.FixtureError.html),
/// - [`GenerateError`],
/// - [`InvalidConfigError`], and
/// - [`std::io::Error`].
#[derive(Error, Debug)]
pub enum TestError {
    #[error("assert_fs' FixtureError: {0}")]
    FixtureError(#[from] FixtureError),

    #[error("generation error: {0}")]
    GenerateError(#[from] GenerateError),

    #[error("invalid configuration: {0}")]
    InvalidConfigError(#[from] InvalidConfigError),

    #[error("std::io::Error: {0}")]
    IoError(#[from] std::io::Error),
}

/// A main `Result` type for use in unit and integration tests (shorthand for the [`TestError`] error).
pub type TestResult<O = ()> = std::result::Result<O, TestError>;
