use std::{
    io::{BufWriter, Read, Write},
    path::Path,
};

use md5::{Digest, Md5};
use rand::Rng;
use tracing::debug;

use crate::{
    content::{digest_to_hex, stream_content, HashingWriter},
    error::GenerateError,
    generator::RandomTreeGenerator,
    macros::use_enabled_fs_module,
    name::{random_name, random_name_length},
    options::validate_file_size_range,
    DEFAULT_WRITE_BUFFER_SIZE,
};

use_enabled_fs_module!();


impl<S: Read, W: Write> RandomTreeGenerator<S, W> {
    /// Draws the size of the next file.
    fn random_file_size(&mut self) -> Result<u64, GenerateError> {
        if !self.options.randomize_file_size {
            return Ok(self.options.file_size);
        }

        let minimum_file_size = self.options.minimum_file_size;
        let file_size = self.options.file_size;

        validate_file_size_range(minimum_file_size, file_size)?;

        Ok(self.rng.gen_range(minimum_file_size..file_size))
    }

    /// Creates one randomly named file in `parent_directory_path` and fills it with
    /// content from the content source.
    ///
    /// Random draws happen in this order: file size, name length, name characters.
    pub(crate) fn write_random_file(&mut self, parent_directory_path: &Path) -> Result<(), GenerateError> {
        let file_size = self.random_file_size()?;

        let name_length = random_name_length(&mut self.rng);
        let file_name = random_name(&mut self.rng, name_length, &self.options.alphabet)?;
        let file_path = parent_directory_path.join(file_name);


        let file = fs::File::create(&file_path).map_err(|error| GenerateError::UnableToCreateFile {
            path: file_path.clone(),
            error,
        })?;

        let mut file_buffered = BufWriter::with_capacity(DEFAULT_WRITE_BUFFER_SIZE, file);


        let (bytes_written, digest) = if self.options.compute_digest {
            let mut hashing_writer = HashingWriter::new(&mut file_buffered, Md5::new());

            let bytes_written = stream_content(&mut self.source, &mut hashing_writer, file_size)
                .map_err(|error| GenerateError::UnableToWriteFileContent {
                    path: file_path.clone(),
                    error,
                })?;

            let (_, hasher) = hashing_writer.into_inner();

            (bytes_written, Some(digest_to_hex(hasher)))
        } else {
            let bytes_written = stream_content(&mut self.source, &mut file_buffered, file_size)
                .map_err(|error| GenerateError::UnableToWriteFileContent {
                    path: file_path.clone(),
                    error,
                })?;

            (bytes_written, None)
        };

        if bytes_written < file_size {
            return Err(GenerateError::RandomSourceExhausted {
                path: file_path,
                bytes_written,
                bytes_expected: file_size,
            });
        }


        self.progress
            .report_file(&file_path, digest.as_deref())
            .map_err(|error| GenerateError::UnableToWriteProgress {
                path: file_path.clone(),
                error,
            })?;


        // Unwrap the buffered writer and flush any remaining output.
        let mut file = file_buffered
            .into_inner()
            .map_err(|error| GenerateError::UnableToCloseFile {
                path: file_path.clone(),
                error: error.into_error(),
            })?;

        file.flush()
            .map_err(|error| GenerateError::UnableToCloseFile {
                path: file_path.clone(),
                error,
            })?;


        debug!(
            path = %file_path.display(),
            size = file_size,
            digest = digest.as_deref().unwrap_or(""),
            "created file"
        );

        self.statistics.files_created += 1;
        self.statistics.bytes_written += bytes_written;

        Ok(())
    }
}
