// File: src/core/value.rs
use crate::core::types::{Score, Word};

/// Offset that maps ASCII 'a' (97) to 1.
const ALPHA_OFFSET: u32 = b'a' as u32 - 1;

/// Sums the alphabet positions of the word's letters, a=1 .. z=26.
/// Case-insensitive. O(k) in the word length.
pub fn score(word: &Word) -> Score {
    word.as_str()
        .bytes()
        .map(|b| (b.to_ascii_lowercase() as u32).wrapping_sub(ALPHA_OFFSET))
        .fold(0, Score::wrapping_add)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(s: &str) -> Word {
        Word::parse(s).unwrap()
    }

    #[test]
    fn single_letters() {
        assert_eq!(score(&w("a")), 1);
        assert_eq!(score(&w("z")), 26);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(score(&w("Az")), 27);
        assert_eq!(score(&w("az")), 27);
        assert_eq!(score(&w("CAT")), score(&w("cat")));
    }

    #[test]
    fn sums_every_letter() {
        assert_eq!(score(&w("cat")), 24);
        assert_eq!(score(&w("bat")), 23);
        assert_eq!(score(&w("abc")), 6);
    }
}
