//! Random tree generation entry points.
//!
//! <br>
//!
//! ##### Feature Overview
//!
//! | | <span style="font-weight:normal"><i>configured by</i></span> | <span style="font-weight:normal"><i>returns</i></span>
//! |-----------------------------|---------------------------------|:--------------------:|
//! | [`RandomTreeGenerator::generate`] | [`FanoutOptions`] | [`GenerationFinished`] <br><sup style="text-align: right">(or [`GenerateError`])</sup> |
//! | [`write_random_tree`]             | [`FanoutOptions`] | [`GenerationFinished`] <br><sup style="text-align: right">(or [`GenerateError`])</sup> |

use std::{
    io::{self, Read, Write},
    path::Path,
};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::info;

use crate::{
    content::RandomReader,
    error::{GenerateError, InvalidConfigError},
    options::FanoutOptions,
    progress::ProgressSink,
};


/// ChaCha stream used for names, sizes and fanout counts.
const LAYOUT_STREAM: u64 = 0;

/// ChaCha stream used for file content by [`RandomTreeGenerator::with_seeded_content`].
const CONTENT_STREAM: u64 = 1;


/// Describes a successful generation run.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct GenerationFinished {
    /// The seed of the generator that performed the run.
    pub seed: u64,

    /// Total number of files created.
    pub files_created: usize,

    /// Total number of directories created (not counting the root).
    pub directories_created: usize,

    /// Total amount of file content written, in bytes.
    pub bytes_written: u64,
}


/// Generates random trees according to its [`FanoutOptions`].
///
/// The generator owns everything a run mutates: the pseudo-random generator
/// that decides names, sizes and fanout, the content source `S`
/// and the optional progress writer `W`. Runs are strictly sequential,
/// so with a fixed seed and a deterministic content source the generated
/// tree is the same every time.
pub struct RandomTreeGenerator<S: Read, W: Write> {
    pub(crate) options: FanoutOptions,

    seed: u64,

    pub(crate) rng: ChaCha20Rng,

    pub(crate) source: S,

    pub(crate) progress: ProgressSink<W>,

    pub(crate) statistics: GenerationFinished,
}

impl<S: Read> RandomTreeGenerator<S, io::Sink> {
    /// Constructs a generator that writes file content read from `source`
    /// and does not report progress (see [`Self::with_progress`]).
    ///
    /// Returns an error if the options do not pass [`FanoutOptions::validate`].
    pub fn new(options: FanoutOptions, source: S) -> Result<Self, InvalidConfigError> {
        options.validate()?;

        let seed = resolve_seed(options.random_seed);

        Ok(Self {
            options,
            seed,
            rng: seeded_rng(seed, LAYOUT_STREAM),
            source,
            progress: ProgressSink::new(None),
            statistics: GenerationFinished::default(),
        })
    }
}

impl RandomTreeGenerator<RandomReader<ChaCha20Rng>, io::Sink> {
    /// Constructs a generator whose file content is also derived from the seed.
    ///
    /// Content comes from a separate ChaCha20 stream of the same seed,
    /// so a fixed [`FanoutOptions::random_seed`] reproduces names, sizes *and* content.
    pub fn with_seeded_content(options: FanoutOptions) -> Result<Self, InvalidConfigError> {
        options.validate()?;

        let seed = resolve_seed(options.random_seed);

        Ok(Self {
            options,
            seed,
            rng: seeded_rng(seed, LAYOUT_STREAM),
            source: RandomReader::new(seeded_rng(seed, CONTENT_STREAM)),
            progress: ProgressSink::new(None),
            statistics: GenerationFinished::default(),
        })
    }
}

impl<S: Read, W: Write> RandomTreeGenerator<S, W> {
    /// Replaces the progress writer. Every created entry will produce one line on `progress`.
    pub fn with_progress<P: Write>(self, progress: P) -> RandomTreeGenerator<S, P> {
        RandomTreeGenerator {
            options: self.options,
            seed: self.seed,
            rng: self.rng,
            source: self.source,
            progress: ProgressSink::new(Some(progress)),
            statistics: self.statistics,
        }
    }

    /// The seed in use. If [`FanoutOptions::random_seed`] was `0`,
    /// this is the seed that was chosen on construction.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The options this generator was constructed with.
    pub fn options(&self) -> &FanoutOptions {
        &self.options
    }

    /// Consumes `self` and returns the content source and the progress writer, if any.
    pub fn into_parts(self) -> (S, Option<W>) {
        (self.source, self.progress.into_inner())
    }

    /// Fills the existing directory `root` with a random tree,
    /// treating `root` as being at depth `start_depth`.
    ///
    /// `start_depth` is usually `0`; subdirectories are created only while their depth
    /// does not exceed [`FanoutOptions::fanout_depth`].
    ///
    /// Generation stops at the first error, leaving everything created
    /// up to that point (including a partially written file) on disk.
    ///
    /// Calling this again continues the same random sequence,
    /// so two calls on one generator produce different trees.
    pub fn generate<P>(&mut self, root: P, start_depth: usize) -> Result<GenerationFinished, GenerateError>
    where
        P: AsRef<Path>,
    {
        let root = root.as_ref();

        info!(
            root = %root.display(),
            seed = self.seed,
            start_depth,
            maximum_depth = self.options.fanout_depth,
            "generating random tree"
        );

        self.statistics = GenerationFinished {
            seed: self.seed,
            ..Default::default()
        };

        self.write_random_files(root, start_depth)?;

        self.progress
            .flush()
            .map_err(|error| GenerateError::UnableToWriteProgress {
                path: root.to_path_buf(),
                error,
            })?;

        info!(
            files_created = self.statistics.files_created,
            directories_created = self.statistics.directories_created,
            bytes_written = self.statistics.bytes_written,
            "random tree generated"
        );

        Ok(self.statistics)
    }
}


/// Fills the existing directory `root` with a random tree in one call.
///
/// This is shorthand for constructing a [`RandomTreeGenerator`] with `source` as the content source
/// and `progress` as the (optional) progress writer, then calling [`RandomTreeGenerator::generate`].
/// Invalid options are reported as [`GenerateError::InvalidConfig`] before anything is created.
pub fn write_random_tree<P, S, W>(
    root: P,
    start_depth: usize,
    options: FanoutOptions,
    source: S,
    progress: Option<W>,
) -> Result<GenerationFinished, GenerateError>
where
    P: AsRef<Path>,
    S: Read,
    W: Write,
{
    let generator = RandomTreeGenerator::new(options, source)?;

    match progress {
        Some(progress) => generator.with_progress(progress).generate(root, start_depth),
        None => {
            let mut generator = generator;
            generator.generate(root, start_depth)
        }
    }
}


/// Returns `seed` unless it is `0`, in which case a random non-zero seed is drawn.
pub(crate) fn resolve_seed(seed: u64) -> u64 {
    if seed != 0 {
        return seed;
    }

    let mut thread_rng = rand::thread_rng();
    loop {
        let candidate: u64 = thread_rng.gen();
        if candidate != 0 {
            return candidate;
        }
    }
}

fn seeded_rng(seed: u64, stream: u64) -> ChaCha20Rng {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    rng.set_stream(stream);

    rng
}
