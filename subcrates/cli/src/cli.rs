use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use random_files::options::{AlphabetPreset, FanoutOptions};


#[derive(ValueEnum, Clone, Copy, Debug)]
pub(crate) enum AlphabetArgument {
    /// Lowercase letters, digits, `-` and `_`.
    Easy,

    /// Letters of both cases, digits, spaces and punctuation.
    Hard,
}

impl From<AlphabetArgument> for AlphabetPreset {
    fn from(value: AlphabetArgument) -> Self {
        match value {
            AlphabetArgument::Easy => AlphabetPreset::Easy,
            AlphabetArgument::Hard => AlphabetPreset::Hard,
        }
    }
}


/// Write a tree of randomly named, randomly sized files into each of the given directories.
///
/// Every created entry is printed to standard output, one per line.
/// Set `RUST_LOG` (e.g. `RUST_LOG=debug`) for diagnostic logging on standard error.
#[derive(Parser, Debug)]
#[command(name = "random-files", version)]
pub(crate) struct CliArguments {
    /// Directories to fill. Missing directories (and their ancestors) are created.
    #[arg(required = true)]
    pub(crate) paths: Vec<PathBuf>,

    /// Maximum depth of generated subdirectories (0 creates only files).
    #[arg(long = "depth", default_value_t = 2)]
    pub(crate) fanout_depth: usize,

    /// Number of files per directory (upper bound with --random-fanout).
    #[arg(long = "files", default_value_t = 10)]
    pub(crate) fanout_files: usize,

    /// Number of subdirectories per directory (upper bound with --random-fanout).
    #[arg(long = "dirs", default_value_t = 10)]
    pub(crate) fanout_directories: usize,

    /// File size in bytes (exclusive upper bound with --random-size).
    #[arg(long = "filesize", default_value_t = 4096)]
    pub(crate) file_size: u64,

    /// Minimum file size in bytes, used with --random-size.
    #[arg(long = "min-size", default_value_t = 0)]
    pub(crate) minimum_file_size: u64,

    /// Randomize file sizes.
    #[arg(long = "random-size", default_value_t = true, action = ArgAction::Set)]
    pub(crate) randomize_file_size: bool,

    /// Randomize the number of files and subdirectories per directory.
    #[arg(long = "random-fanout")]
    pub(crate) randomize_fanout: bool,

    /// Seed of the pseudo-random generator (0 picks one at random).
    #[arg(long = "seed", default_value_t = 0)]
    pub(crate) random_seed: u64,

    /// Alphabet preset for file and directory names.
    #[arg(long = "alphabet", value_enum, default_value_t = AlphabetArgument::Easy)]
    pub(crate) alphabet: AlphabetArgument,

    /// Custom characters for file and directory names (overrides --alphabet).
    #[arg(long = "alphabet-chars")]
    pub(crate) alphabet_characters: Option<String>,

    /// Print the MD5 digest of each file before its path.
    #[arg(long = "md5")]
    pub(crate) compute_digest: bool,

    /// Fill files with operating system randomness instead of seeded pseudo-random bytes.
    #[arg(long = "crypto")]
    pub(crate) cryptographic_content: bool,

    /// Do not print created entries.
    #[arg(short = 'q', long = "quiet")]
    pub(crate) quiet: bool,
}

impl CliArguments {
    pub(crate) fn fanout_options(&self) -> FanoutOptions {
        let alphabet = match &self.alphabet_characters {
            Some(characters) => characters.chars().collect(),
            None => AlphabetPreset::from(self.alphabet).characters(),
        };

        FanoutOptions {
            file_size: self.file_size,
            minimum_file_size: self.minimum_file_size,
            alphabet,
            fanout_depth: self.fanout_depth,
            fanout_files: self.fanout_files,
            fanout_directories: self.fanout_directories,
            random_seed: self.random_seed,
            randomize_file_size: self.randomize_file_size,
            randomize_fanout: self.randomize_fanout,
            compute_digest: self.compute_digest,
        }
    }
}



#[cfg(test)]
mod test {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        CliArguments::command().debug_assert();
    }

    #[test]
    fn defaults_match_library_defaults() {
        let arguments = CliArguments::parse_from(["random-files", "out"]);

        assert_eq!(arguments.fanout_options(), FanoutOptions::default());
        assert_eq!(arguments.paths, vec![PathBuf::from("out")]);
    }

    #[test]
    fn flags_map_onto_options() {
        let arguments = CliArguments::parse_from([
            "random-files",
            "--depth",
            "0",
            "--files",
            "2",
            "--filesize",
            "10",
            "--random-size",
            "false",
            "--alphabet",
            "hard",
            "--md5",
            "--seed",
            "77",
            "a",
            "b",
        ]);

        let options = arguments.fanout_options();

        assert_eq!(options.fanout_depth, 0);
        assert_eq!(options.fanout_files, 2);
        assert_eq!(options.file_size, 10);
        assert!(!options.randomize_file_size);
        assert!(options.compute_digest);
        assert_eq!(options.random_seed, 77);
        assert_eq!(options.alphabet, AlphabetPreset::Hard.characters());
        assert_eq!(arguments.paths.len(), 2);
    }

    #[test]
    fn custom_alphabet_overrides_preset() {
        let arguments =
            CliArguments::parse_from(["random-files", "--alphabet-chars", "xyz", "out"]);

        assert_eq!(arguments.fanout_options().alphabet, vec!['x', 'y', 'z']);
    }
}
