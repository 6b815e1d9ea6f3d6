use std::{
    io::{self, Write},
    path::Path,
};


/// Optional destination of human-readable progress lines, one per created entry.
///
/// The line formats are:
/// - `<lowercase-hex-digest>\t<path>\n` for files with a digest,
/// - `<path>\n` for files without a digest, and
/// - `<path>\n` for directories.
pub(crate) struct ProgressSink<W: Write> {
    inner: Option<W>,
}

impl<W: Write> ProgressSink<W> {
    pub(crate) fn new(inner: Option<W>) -> Self {
        Self { inner }
    }

    pub(crate) fn report_file(&mut self, file_path: &Path, digest: Option<&str>) -> io::Result<()> {
        let Some(writer) = self.inner.as_mut() else {
            return Ok(());
        };

        if let Some(digest) = digest {
            write!(writer, "{}\t", digest)?;
        }

        writeln!(writer, "{}", file_path.display())
    }

    pub(crate) fn report_directory(&mut self, directory_path: &Path) -> io::Result<()> {
        let Some(writer) = self.inner.as_mut() else {
            return Ok(());
        };

        writeln!(writer, "{}", directory_path.display())
    }

    pub(crate) fn flush(&mut self) -> io::Result<()> {
        match self.inner.as_mut() {
            Some(writer) => writer.flush(),
            None => Ok(()),
        }
    }

    pub(crate) fn into_inner(self) -> Option<W> {
        self.inner
    }
}
