use std::path::PathBuf;

use thiserror::Error;

use super::InvalidConfigError;


/// An error that can occur when generating a random tree.
#[derive(Error, Debug)]
#[cfg_attr(feature = "miette", derive(miette::Diagnostic))]
pub enum GenerateError {
    /// The provided options are invalid.
    #[error("invalid configuration")]
    InvalidConfig(#[from] InvalidConfigError),

    /// A file could not be created, for example due to missing permissions.
    ///
    /// The inner [`std::io::Error`] will likely describe the real cause of this error.
    #[error("unable to create file: {}", .path.display())]
    UnableToCreateFile {
        /// Path of the file that could not be created.
        path: PathBuf,

        /// Underlying IO error describing why the file could not be created.
        #[source]
        error: std::io::Error,
    },

    /// Content could not be streamed into a file, either because reading from the
    /// content source failed or because writing into the file failed.
    ///
    /// The file is left on disk, possibly partially written.
    #[error("unable to write content into file: {}", .path.display())]
    UnableToWriteFileContent {
        /// Path of the file that was being written.
        path: PathBuf,

        /// Underlying IO error describing why the content could not be written.
        #[source]
        error: std::io::Error,
    },

    /// The content source ran out of bytes before the file reached its size.
    ///
    /// The file is left on disk, containing the `bytes_written` bytes that were available.
    #[error(
        "content source exhausted after {bytes_written} of {bytes_expected} bytes: {}",
        .path.display()
    )]
    RandomSourceExhausted {
        /// Path of the file that was being written.
        path: PathBuf,

        /// Number of bytes that made it into the file.
        bytes_written: u64,

        /// Number of bytes the file should have had.
        bytes_expected: u64,
    },

    /// A file could not be flushed and closed after its content was written.
    #[error("unable to close file: {}", .path.display())]
    UnableToCloseFile {
        /// Path of the file that could not be closed.
        path: PathBuf,

        /// Underlying IO error describing why the file could not be closed.
        #[source]
        error: std::io::Error,
    },

    /// A directory (or one of its missing ancestors) could not be created.
    ///
    /// The inner [`std::io::Error`] will likely describe the real cause of this error.
    #[error("unable to create directory: {}", .path.display())]
    UnableToCreateDirectory {
        /// Path of the directory that could not be created.
        path: PathBuf,

        /// Underlying IO error describing why the directory could not be created.
        #[source]
        error: std::io::Error,
    },

    /// The progress line for a created entry could not be written to the progress sink.
    #[error("unable to report progress for: {}", .path.display())]
    UnableToWriteProgress {
        /// Path of the entry whose progress line could not be written.
        path: PathBuf,

        /// Underlying IO error from the progress sink.
        #[source]
        error: std::io::Error,
    },
}

impl GenerateError {
    /// Returns `true` if this error was caused by invalid options.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, Self::InvalidConfig(_))
    }

    /// Returns `true` if this error was caused by a filesystem, content source or progress sink failure.
    pub fn is_io(&self) -> bool {
        !self.is_invalid_config()
    }
}
