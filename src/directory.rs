use std::{
    io::{Read, Write},
    path::Path,
};

use rand::Rng;
use tracing::debug;

use crate::{
    error::GenerateError,
    generator::RandomTreeGenerator,
    macros::use_enabled_fs_module,
    name::{random_name, random_name_length},
};

use_enabled_fs_module!();


impl<S: Read, W: Write> RandomTreeGenerator<S, W> {
    /// Resolves how many entries to create, given the configured count.
    ///
    /// Randomized counts are drawn from `[1, configured_count]` (or are exactly `1` when
    /// the configured count is `0`), so randomization never leaves a directory empty.
    fn random_fanout(&mut self, configured_count: usize) -> usize {
        if !self.options.randomize_fanout {
            return configured_count;
        }

        self.rng.gen_range(1..=configured_count.max(1))
    }

    /// Fills the directory at `directory_path` (which is at depth `depth`) with files
    /// and, if the maximum depth allows it, with recursively populated subdirectories.
    ///
    /// Random draws happen in this order: file count, each file, subdirectory count, each subdirectory
    /// (including its entire subtree).
    pub(crate) fn write_random_files(
        &mut self,
        directory_path: &Path,
        depth: usize,
    ) -> Result<(), GenerateError> {
        let number_of_files = self.random_fanout(self.options.fanout_files);

        for _ in 0..number_of_files {
            self.write_random_file(directory_path)?;
        }


        let Some(subdirectory_depth) = depth.checked_add(1) else {
            return Ok(());
        };

        if subdirectory_depth <= self.options.fanout_depth {
            let number_of_directories = self.random_fanout(self.options.fanout_directories);

            for _ in 0..number_of_directories {
                self.write_random_directory(directory_path, subdirectory_depth)?;
            }
        }

        Ok(())
    }

    /// Creates one randomly named directory at depth `depth` inside `parent_directory_path`
    /// and fills it with a random subtree.
    ///
    /// Does nothing if `depth` exceeds the maximum depth.
    pub(crate) fn write_random_directory(
        &mut self,
        parent_directory_path: &Path,
        depth: usize,
    ) -> Result<(), GenerateError> {
        if depth > self.options.fanout_depth {
            return Ok(());
        }

        let name_length = random_name_length(&mut self.rng);
        let directory_name = random_name(&mut self.rng, name_length, &self.options.alphabet)?;
        let directory_path = parent_directory_path.join(directory_name);


        fs::create_dir_all(&directory_path).map_err(|error| {
            GenerateError::UnableToCreateDirectory {
                path: directory_path.clone(),
                error,
            }
        })?;

        self.progress
            .report_directory(&directory_path)
            .map_err(|error| GenerateError::UnableToWriteProgress {
                path: directory_path.clone(),
                error,
            })?;

        debug!(path = %directory_path.display(), depth, "created directory");

        self.statistics.directories_created += 1;


        self.write_random_files(&directory_path, depth)
    }
}
