use std::io::{self, Read, Write};


/// A content source that yields exactly `limit` bytes and then reports end-of-file.
pub fn limited_source(limit: usize, seed: u64) -> io::Cursor<Vec<u8>> {
    io::Cursor::new(crate::generate_seeded_binary_data!(limit, seed))
}


/// A content source that yields `healthy_bytes` zero bytes and then fails every read.
pub struct FailingSource {
    remaining_healthy_bytes: usize,
}

impl FailingSource {
    pub fn new(healthy_bytes: usize) -> Self {
        Self {
            remaining_healthy_bytes: healthy_bytes,
        }
    }
}

impl Read for FailingSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.remaining_healthy_bytes == 0 {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                "content source failure",
            ));
        }

        let readable = self.remaining_healthy_bytes.min(buf.len());
        buf[..readable].fill(0);
        self.remaining_healthy_bytes -= readable;

        Ok(readable)
    }
}


/// A progress writer that rejects every write.
pub struct RejectingWriter;

impl Write for RejectingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "progress sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
