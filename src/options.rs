//! Configuration of a random tree generation run.

use crate::error::InvalidConfigError;


/// Lowercase letters, digits, `-` and `_`.
///
/// Names drawn from this alphabet are safe on every common filesystem.
pub const EASY_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz01234567890-_";

/// Letters of both cases, digits, whitespace and most ASCII punctuation.
///
/// Names drawn from this alphabet are useful for exercising quoting and escaping
/// in the tools under test. Some of the characters are not allowed on Windows.
pub const HARD_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ01234567890!@#$%^&*()-_+= ;.,<>'\"[]{}() ";


/// A named alphabet preset for [`FanoutOptions::alphabet`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default)]
pub enum AlphabetPreset {
    /// See [`EASY_ALPHABET`].
    #[default]
    Easy,

    /// See [`HARD_ALPHABET`].
    Hard,
}

impl AlphabetPreset {
    /// Returns the characters of this preset, in order.
    pub fn characters(self) -> Vec<char> {
        match self {
            AlphabetPreset::Easy => EASY_ALPHABET.chars().collect(),
            AlphabetPreset::Hard => HARD_ALPHABET.chars().collect(),
        }
    }
}


/// Options that influence the [`RandomTreeGenerator`].
///
/// The options are validated (see [`FanoutOptions::validate`]) when a generator is constructed
/// and stay immutable for the lifetime of that generator.
///
///
/// [`RandomTreeGenerator`]: crate::generator::RandomTreeGenerator
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FanoutOptions {
    /// Size of each generated file, in bytes.
    ///
    /// If `randomize_file_size` is enabled, this is the *exclusive* upper bound
    /// of the randomized size instead.
    pub file_size: u64,

    /// Inclusive lower bound of randomized file sizes, in bytes.
    ///
    /// Ignored unless `randomize_file_size` is enabled, in which case
    /// it must be strictly smaller than `file_size`.
    pub minimum_file_size: u64,

    /// Characters that file and directory names are drawn from. Must not be empty.
    ///
    /// Characters may repeat; each occurrence increases the chance of drawing that character.
    pub alphabet: Vec<char>,

    /// Maximum depth of generated subdirectories, where the generation root is depth `0`.
    ///
    /// # Examples
    /// `fanout_depth = 0` creates only files directly in the root:
    ///
    /// ```md
    /// ~/root
    ///  |- a8_kq3
    ///  |- zz01-x
    /// ```
    ///
    /// <br>
    ///
    /// `fanout_depth = 1` additionally creates subdirectories in the root
    /// and fills them with files, but no subdirectories of their own:
    ///
    /// ```md
    /// ~/root
    ///  |- a8_kq3
    ///  |- zz01-x
    ///  |- p0o9i8u7/
    ///     |- mmmq
    ///     |- 4k-l_
    /// ```
    pub fanout_depth: usize,

    /// Number of files created in each directory.
    ///
    /// If `randomize_fanout` is enabled, this is the inclusive upper bound instead,
    /// and at least one file is always created.
    pub fanout_files: usize,

    /// Number of subdirectories created in each directory that is shallower than `fanout_depth`.
    ///
    /// If `randomize_fanout` is enabled, this is the inclusive upper bound instead,
    /// and at least one subdirectory is always created.
    pub fanout_directories: usize,

    /// Seed of the pseudo-random generator.
    ///
    /// `0` means a seed is chosen non-deterministically. The seed that was actually used
    /// is available from [`RandomTreeGenerator::seed`].
    ///
    ///
    /// [`RandomTreeGenerator::seed`]: crate::generator::RandomTreeGenerator::seed
    pub random_seed: u64,

    /// Whether to draw each file's size from `[minimum_file_size, file_size)`.
    pub randomize_file_size: bool,

    /// Whether to draw each directory's file and subdirectory counts
    /// from `[1, fanout_files]` and `[1, fanout_directories]`.
    pub randomize_fanout: bool,

    /// Whether to compute an MD5 digest of each file's content and
    /// include it in the progress output.
    pub compute_digest: bool,
}

impl FanoutOptions {
    /// Checks the options for values that make generation impossible.
    ///
    /// This returns:
    /// - [`InvalidConfigError::EmptyAlphabet`] if `alphabet` is empty,
    /// - [`InvalidConfigError::MinimumSizeExceedsFileSize`] if file sizes are randomized
    ///   and `minimum_file_size > file_size`, and
    /// - [`InvalidConfigError::EmptyFileSizeRange`] if file sizes are randomized
    ///   and `minimum_file_size == file_size`.
    pub fn validate(&self) -> Result<(), InvalidConfigError> {
        if self.alphabet.is_empty() {
            return Err(InvalidConfigError::EmptyAlphabet);
        }

        if self.randomize_file_size {
            validate_file_size_range(self.minimum_file_size, self.file_size)?;
        }

        Ok(())
    }
}

impl Default for FanoutOptions {
    /// Constructs the defaults of the `random-files` command line tool:
    /// - files of up to 4 KiB (randomized sizes, no minimum),
    /// - names from the [`EASY_ALPHABET`],
    /// - depth 2 with 10 files and 10 subdirectories per directory (fixed fanout),
    /// - a non-deterministic seed, and
    /// - no digests.
    fn default() -> Self {
        Self {
            file_size: 4096,
            minimum_file_size: 0,
            alphabet: AlphabetPreset::Easy.characters(),
            fanout_depth: 2,
            fanout_files: 10,
            fanout_directories: 10,
            random_seed: 0,
            randomize_file_size: true,
            randomize_fanout: false,
            compute_digest: false,
        }
    }
}


/// Ensures `[minimum_file_size, file_size)` contains at least one value.
pub(crate) fn validate_file_size_range(
    minimum_file_size: u64,
    file_size: u64,
) -> Result<(), InvalidConfigError> {
    if minimum_file_size > file_size {
        return Err(InvalidConfigError::MinimumSizeExceedsFileSize {
            minimum_file_size,
            file_size,
        });
    }

    if minimum_file_size == file_size {
        return Err(InvalidConfigError::EmptyFileSizeRange { file_size });
    }

    Ok(())
}
