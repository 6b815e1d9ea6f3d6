use thiserror::Error;


/// An error that can occur when validating [`FanoutOptions`].
///
///
/// [`FanoutOptions`]: crate::options::FanoutOptions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "miette", derive(miette::Diagnostic))]
pub enum InvalidConfigError {
    /// The name alphabet contains no characters, so no name can be drawn from it.
    #[error("name alphabet must contain at least one character")]
    EmptyAlphabet,

    /// File sizes are randomized, but the minimum size is larger than the maximum.
    #[error(
        "minimum file size ({minimum_file_size} bytes) exceeds \
        the maximum file size ({file_size} bytes)"
    )]
    MinimumSizeExceedsFileSize {
        /// Configured minimum file size, in bytes.
        minimum_file_size: u64,

        /// Configured (maximum) file size, in bytes.
        file_size: u64,
    },

    /// File sizes are randomized, but the minimum and maximum size are equal.
    ///
    /// Randomized sizes are drawn from the half-open range `[minimum, maximum)`,
    /// which is empty in this case.
    #[error("randomized file size range is empty: minimum and maximum are both {file_size} bytes")]
    EmptyFileSizeRange {
        /// The configured minimum and maximum file size, in bytes.
        file_size: u64,
    },
}
