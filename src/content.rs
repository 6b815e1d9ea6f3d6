//! File content streaming: random byte sources and single-pass digesting.

use std::io::{self, Read, Write};

use md5::Digest;
use rand::RngCore;


/// Adapts any [`RngCore`] into a [`Read`] byte source that never runs out.
///
/// ## Examples
/// ```rust
/// # use std::io::Read;
/// # use rand::SeedableRng;
/// # use random_files::content::RandomReader;
/// let mut reader = RandomReader::new(rand_chacha::ChaCha20Rng::seed_from_u64(7));
///
/// let mut buffer = [0u8; 32];
/// reader.read_exact(&mut buffer).unwrap();
/// ```
pub struct RandomReader<R: RngCore> {
    rng: R,
}

impl<R: RngCore> RandomReader<R> {
    /// Wraps the given random number generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Consumes `self` and returns the inner random number generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore> Read for RandomReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.rng
            .try_fill_bytes(buf)
            .map_err(|error| io::Error::new(io::ErrorKind::Other, error))?;

        Ok(buf.len())
    }
}


/// A writer that passes data through to an inner writer and feeds
/// every byte the inner writer accepted into a digest.
///
/// The digest therefore always matches the bytes that were actually written,
/// without reading them back.
pub struct HashingWriter<W: Write, D: Digest> {
    /// The inner writer.
    inner: W,

    /// Digest of everything `inner` has accepted so far.
    hasher: D,
}

impl<W: Write, D: Digest> HashingWriter<W, D> {
    /// Initialize a new `HashingWriter` with the given inner writer and (usually fresh) digest.
    pub fn new(inner: W, hasher: D) -> Self {
        Self { inner, hasher }
    }

    /// Consumes `self` and returns the inner writer and the digest.
    pub fn into_inner(self) -> (W, D) {
        (self.inner, self.hasher)
    }
}

impl<W: Write, D: Digest> Write for HashingWriter<W, D> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let bytes_written = self.inner.write(buf)?;
        self.hasher.update(&buf[..bytes_written]);

        Ok(bytes_written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}


/// Copies at most `size` bytes from `source` into `sink`.
///
/// Returns the number of bytes copied, which is smaller than `size`
/// only if `source` ran out of data first. Errors from either side are returned as-is.
pub fn stream_content<S, W>(source: &mut S, sink: &mut W, size: u64) -> io::Result<u64>
where
    S: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut limited_source = source.take(size);

    io::copy(&mut limited_source, sink)
}


/// Formats a finished digest as a lowercase hexadecimal string.
pub fn digest_to_hex<D: Digest>(hasher: D) -> String {
    hasher
        .finalize()
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect()
}



#[cfg(test)]
mod test {
    use md5::Md5;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    use super::*;

    /// Accepts at most `capacity` bytes, then fails every write.
    struct FullWriter {
        written: Vec<u8>,
        capacity: usize,
    }

    impl Write for FullWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let remaining = self.capacity - self.written.len();
            if remaining == 0 {
                return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
            }

            let accepted = remaining.min(buf.len());
            self.written.extend_from_slice(&buf[..accepted]);

            Ok(accepted)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn md5_of_known_input_matches_reference() {
        let mut writer = HashingWriter::new(Vec::new(), Md5::new());
        writer.write_all(b"hello world\n").unwrap();

        let (written, hasher) = writer.into_inner();

        assert_eq!(written, b"hello world\n");
        assert_eq!(digest_to_hex(hasher), "6f5902ac237024bdd0c176cb93063dc4");
    }

    #[test]
    fn stream_copies_exactly_the_requested_size() {
        let mut source = RandomReader::new(ChaCha20Rng::seed_from_u64(5));
        let mut sink = Vec::new();

        let copied = stream_content(&mut source, &mut sink, 100_000).unwrap();

        assert_eq!(copied, 100_000);
        assert_eq!(sink.len(), 100_000);
    }

    #[test]
    fn stream_stops_early_on_short_source() {
        let mut source: &[u8] = &[1, 2, 3, 4];
        let mut sink = Vec::new();

        let copied = stream_content(&mut source, &mut sink, 10).unwrap();

        assert_eq!(copied, 4);
        assert_eq!(sink, vec![1, 2, 3, 4]);
    }

    #[test]
    fn digest_covers_only_accepted_bytes() {
        let mut source = RandomReader::new(ChaCha20Rng::seed_from_u64(99));
        let mut writer = HashingWriter::new(
            FullWriter {
                written: Vec::new(),
                capacity: 1000,
            },
            Md5::new(),
        );

        assert!(stream_content(&mut source, &mut writer, 4096).is_err());

        let (full_writer, hasher) = writer.into_inner();
        assert_eq!(full_writer.written.len(), 1000);
        assert_eq!(
            digest_to_hex(hasher),
            digest_to_hex(Md5::new_with_prefix(&full_writer.written))
        );
    }

    #[test]
    fn random_reader_is_deterministic_for_a_seed() {
        let mut first = [0u8; 64];
        let mut second = [0u8; 64];

        RandomReader::new(ChaCha20Rng::seed_from_u64(12))
            .read_exact(&mut first)
            .unwrap();
        RandomReader::new(ChaCha20Rng::seed_from_u64(12))
            .read_exact(&mut second)
            .unwrap();

        assert_eq!(first, second);
    }
}
