/// Expands to a randomly generated (seeded) [`Vec<u8>`] (runtime-generated).
///
/// ## Examples
/// To generate 16 KiB of random data with the seed `37510903939111`:
///
/// ```rust
/// # use random_files_test_harness::generate_seeded_binary_data;
/// let data: Vec<u8> = generate_seeded_binary_data!(
///     1024 * 16,
///     37510903939111
/// );
/// ```
#[macro_export]
macro_rules! generate_seeded_binary_data {
    ($file_size_bytes:expr, $seed:expr) => {{
        use $crate::rand::distributions::Standard;
        use $crate::rand::Rng;
        use $crate::rand::SeedableRng;

        let size_in_bytes: usize = $file_size_bytes;
        let seed: u64 = $seed;

        let random_generator = $crate::rand_chacha::ChaCha20Rng::seed_from_u64(seed);

        let mut __data: Vec<u8> = Vec::with_capacity(size_in_bytes);

        __data.extend(
            random_generator
                .sample_iter::<u8, _>(Standard)
                .take(size_in_bytes),
        );

        __data
    }};
}
