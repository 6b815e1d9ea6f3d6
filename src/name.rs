//! Random entry names.

use rand::Rng;

use crate::error::InvalidConfigError;


/// Shortest name that is ever generated, in characters.
pub const MIN_NAME_LENGTH: usize = 4;

/// Longest name that is ever generated, in characters.
pub const MAX_NAME_LENGTH: usize = 15;


/// Draws a name length uniformly from `[MIN_NAME_LENGTH, MAX_NAME_LENGTH]`.
pub fn random_name_length<R>(rng: &mut R) -> usize
where
    R: Rng + ?Sized,
{
    rng.gen_range(MIN_NAME_LENGTH..=MAX_NAME_LENGTH)
}


/// Builds a name of `length` characters, each drawn uniformly (with replacement) from `alphabet`.
///
/// Returns [`InvalidConfigError::EmptyAlphabet`] without drawing anything if `alphabet` is empty.
pub fn random_name<R>(
    rng: &mut R,
    length: usize,
    alphabet: &[char],
) -> Result<String, InvalidConfigError>
where
    R: Rng + ?Sized,
{
    if alphabet.is_empty() {
        return Err(InvalidConfigError::EmptyAlphabet);
    }

    let name = (0..length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect();

    Ok(name)
}



#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    use super::*;
    use crate::options::AlphabetPreset;

    #[test]
    fn name_lengths_stay_within_bounds() {
        let mut rng = ChaCha20Rng::seed_from_u64(8871203);

        let mut seen_minimum = false;
        let mut seen_maximum = false;

        for _ in 0..2000 {
            let length = random_name_length(&mut rng);
            assert!((MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&length));

            seen_minimum |= length == MIN_NAME_LENGTH;
            seen_maximum |= length == MAX_NAME_LENGTH;
        }

        assert!(seen_minimum && seen_maximum);
    }

    #[test]
    fn names_use_only_alphabet_characters() {
        let mut rng = ChaCha20Rng::seed_from_u64(19023);
        let alphabet = AlphabetPreset::Hard.characters();

        for length in MIN_NAME_LENGTH..=MAX_NAME_LENGTH {
            let name = random_name(&mut rng, length, &alphabet).unwrap();

            assert_eq!(name.chars().count(), length);
            assert!(name.chars().all(|c| alphabet.contains(&c)));
        }
    }

    #[test]
    fn single_character_alphabet_repeats_that_character() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);

        let name = random_name(&mut rng, 6, &['q']).unwrap();
        assert_eq!(name, "qqqqqq");
    }

    #[test]
    fn empty_alphabet_is_rejected_before_drawing() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let mut untouched_rng = ChaCha20Rng::seed_from_u64(42);

        assert_eq!(
            random_name(&mut rng, 8, &[]),
            Err(InvalidConfigError::EmptyAlphabet)
        );

        assert_eq!(rng.gen::<u64>(), untouched_rng.gen::<u64>());
    }
}
