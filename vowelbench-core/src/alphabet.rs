// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Validated character sets for corpus generation.
//!
//! Following the "Newtype" pattern in Rust to ensure valid state by
//! construction: an [`Alphabet`] is always non-empty, ASCII-only, and
//! duplicate-free, so generated strings are valid UTF-8 and every byte is
//! drawn uniformly.

use std::fmt;

use rand::Rng;

use crate::error::CorpusError;
use crate::fsm::is_vowel;

/// Digits plus the full upper/lower alphabet. Contains vowels.
const CHARS_WITH_VOWELS: &[u8] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Digits plus consonants only. Guaranteed vowel-free.
const CHARS_NO_VOWELS: &[u8] = b"0123456789bcdfghjklmnpqrstvwxyzBCDFGHJKLMNPQRSTVWXYZ";

/// Character set random strings are drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet(Vec<u8>);

impl Alphabet {
    /// Create a new Alphabet with validation.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, CorpusError> {
        let bytes = bytes.into();

        if bytes.is_empty() {
            return Err(CorpusError::EmptyAlphabet);
        }

        if let Some(&byte) = bytes.iter().find(|b| !b.is_ascii()) {
            return Err(CorpusError::NonAsciiAlphabet { byte });
        }

        let mut seen = [false; 128];
        for &byte in &bytes {
            if seen[byte as usize] {
                return Err(CorpusError::DuplicateAlphabetByte { byte });
            }
            seen[byte as usize] = true;
        }

        Ok(Self(bytes))
    }

    /// The standard vowel-bearing alphabet: digits and all letters.
    pub fn alphanumeric() -> Self {
        Self(CHARS_WITH_VOWELS.to_vec())
    }

    /// The standard vowel-free alphabet: digits and consonants.
    pub fn consonants() -> Self {
        Self(CHARS_NO_VOWELS.to_vec())
    }

    /// Whether any byte in this alphabet is a vowel.
    pub fn contains_vowel(&self) -> bool {
        self.0.iter().copied().any(is_vowel)
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The underlying character set.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Draw one character uniformly.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        self.0[rng.gen_range(0..self.0.len())]
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Validated ASCII at construction
        f.write_str(std::str::from_utf8(&self.0).map_err(|_| fmt::Error)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_empty_alphabet_rejected() {
        assert!(matches!(
            Alphabet::new(Vec::new()),
            Err(CorpusError::EmptyAlphabet)
        ));
    }

    #[test]
    fn test_non_ascii_alphabet_rejected() {
        assert!(matches!(
            Alphabet::new(vec![b'a', 0xC3]),
            Err(CorpusError::NonAsciiAlphabet { byte: 0xC3 })
        ));
    }

    #[test]
    fn test_duplicate_byte_rejected() {
        assert!(matches!(
            Alphabet::new(b"abca".to_vec()),
            Err(CorpusError::DuplicateAlphabetByte { byte: b'a' })
        ));
    }

    #[test]
    fn test_standard_alphabets() {
        assert!(Alphabet::alphanumeric().contains_vowel());
        assert!(!Alphabet::consonants().contains_vowel());
        assert_eq!(Alphabet::alphanumeric().len(), 62);
        assert_eq!(Alphabet::consonants().len(), 52);
    }

    #[test]
    fn test_sample_stays_in_alphabet() {
        let alphabet = Alphabet::new(b"xyz".to_vec()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..100 {
            assert!(alphabet.as_bytes().contains(&alphabet.sample(&mut rng)));
        }
    }
}
