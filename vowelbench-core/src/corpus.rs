// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Deterministic synthetic corpus generation.
//!
//! A corpus is a vector of random strings drawn from one [`Alphabet`] with
//! lengths drawn from one [`LengthModel`], generated from a seeded RNG so
//! the same spec always yields byte-identical strings. The four standard
//! corpora (short/long crossed with vowels/no-vowels) are generated lazily
//! and cached for the lifetime of the process.

use std::sync::OnceLock;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Binomial, Distribution};
use tracing::debug;

use crate::alphabet::Alphabet;
use crate::error::CorpusError;

/// Seed the standard corpora are generated from.
pub const DEFAULT_SEED: u64 = 0xAE10;

/// Strings per standard corpus.
pub const DEFAULT_STRING_COUNT: usize = 1_000;

/// How string lengths are drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LengthModel {
    /// Every string has exactly this length.
    Fixed(usize),
    /// Lengths follow `Binomial(trials, p) + offset`.
    Binomial { trials: u64, p: f64, offset: usize },
}

impl LengthModel {
    /// Short strings: lengths in 5..=20, centred around 12.
    pub const SHORT: LengthModel = LengthModel::Binomial {
        trials: 15,
        p: 0.5,
        offset: 5,
    };

    /// Long strings: lengths centred around 5000.
    pub const LONG: LengthModel = LengthModel::Binomial {
        trials: 10_000,
        p: 0.5,
        offset: 0,
    };

    pub(crate) fn validate(&self) -> Result<(), CorpusError> {
        if let LengthModel::Binomial { p, .. } = *self {
            if !(p > 0.0 && p < 1.0) {
                return Err(CorpusError::InvalidProbability { p });
            }
        }
        Ok(())
    }

    fn sampler(&self) -> Result<LengthSampler, CorpusError> {
        match *self {
            LengthModel::Fixed(len) => Ok(LengthSampler::Fixed(len)),
            LengthModel::Binomial { trials, p, offset } => {
                let dist =
                    Binomial::new(trials, p).map_err(|_| CorpusError::InvalidProbability { p })?;
                Ok(LengthSampler::Binomial { dist, offset })
            }
        }
    }
}

enum LengthSampler {
    Fixed(usize),
    Binomial { dist: Binomial, offset: usize },
}

impl LengthSampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        match self {
            LengthSampler::Fixed(len) => *len,
            LengthSampler::Binomial { dist, offset } => dist.sample(rng) as usize + offset,
        }
    }
}

/// A validated recipe for one corpus.
#[derive(Debug, Clone)]
pub struct CorpusSpec {
    label: String,
    alphabet: Alphabet,
    count: usize,
    length: LengthModel,
    seed: u64,
}

impl CorpusSpec {
    /// Create a new spec with validation.
    pub fn new(
        label: impl Into<String>,
        alphabet: Alphabet,
        count: usize,
        length: LengthModel,
        seed: u64,
    ) -> Result<Self, CorpusError> {
        if count == 0 {
            return Err(CorpusError::ZeroStrings);
        }
        length.validate()?;

        Ok(Self {
            label: label.into(),
            alphabet,
            count,
            length,
            seed,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate the corpus this spec describes.
    ///
    /// Same spec, same bytes: generation draws from a `ChaCha8Rng` seeded
    /// with `seed`, lengths first, characters second, one string at a time.
    pub fn generate(&self) -> Result<Corpus, CorpusError> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let lengths = self.length.sampler()?;

        let mut strings = Vec::with_capacity(self.count);
        let mut total_bytes = 0u64;
        for _ in 0..self.count {
            let len = lengths.sample(&mut rng);
            let mut s = String::with_capacity(len);
            for _ in 0..len {
                s.push(self.alphabet.sample(&mut rng) as char);
            }
            total_bytes += s.len() as u64;
            strings.push(s);
        }

        let corpus = Corpus {
            label: self.label.clone(),
            strings,
            total_bytes,
        };
        debug!(
            label = %corpus.label,
            count = corpus.len(),
            total_bytes = corpus.total_bytes(),
            fingerprint = corpus.fingerprint(),
            "generated corpus"
        );
        Ok(corpus)
    }
}

/// A generated set of strings, ready to be scanned.
#[derive(Debug, Clone)]
pub struct Corpus {
    label: String,
    strings: Vec<String>,
    total_bytes: u64,
}

impl Corpus {
    /// Label of the spec this corpus was generated from.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The strings to scan.
    pub fn strings(&self) -> &[String] {
        &self.strings
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Total payload size across all strings.
    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    /// CRC32 over all strings in order. Two corpora from the same spec have
    /// the same fingerprint; reports record it so runs can be compared.
    pub fn fingerprint(&self) -> u32 {
        let mut hasher = crc32fast::Hasher::new();
        for s in &self.strings {
            hasher.update(s.as_bytes());
        }
        hasher.finalize()
    }
}

/// The four standard corpora the suite measures against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CorpusClass {
    ShortWithVowels,
    ShortNoVowels,
    LongWithVowels,
    LongNoVowels,
}

impl CorpusClass {
    /// All classes, in the order reports and benches list them.
    pub const ALL: [CorpusClass; 4] = [
        CorpusClass::ShortWithVowels,
        CorpusClass::ShortNoVowels,
        CorpusClass::LongWithVowels,
        CorpusClass::LongNoVowels,
    ];

    /// Stable identifier used in benchmark names and report metadata.
    pub fn name(&self) -> &'static str {
        match self {
            CorpusClass::ShortWithVowels => "short_with_vowels",
            CorpusClass::ShortNoVowels => "short_no_vowels",
            CorpusClass::LongWithVowels => "long_with_vowels",
            CorpusClass::LongNoVowels => "long_no_vowels",
        }
    }

    /// The spec for this class at a given seed, with the standard alphabet,
    /// length model, and string count.
    pub fn spec(&self, seed: u64) -> CorpusSpec {
        let (alphabet, length) = match self {
            CorpusClass::ShortWithVowels => (Alphabet::alphanumeric(), LengthModel::SHORT),
            CorpusClass::ShortNoVowels => (Alphabet::consonants(), LengthModel::SHORT),
            CorpusClass::LongWithVowels => (Alphabet::alphanumeric(), LengthModel::LONG),
            CorpusClass::LongNoVowels => (Alphabet::consonants(), LengthModel::LONG),
        };
        // Standard shapes are valid by construction; skip re-validation.
        CorpusSpec {
            label: self.name().to_string(),
            alphabet,
            count: DEFAULT_STRING_COUNT,
            length,
            seed,
        }
    }

    /// The cached standard corpus for this class, generated on first use
    /// from [`DEFAULT_SEED`].
    pub fn load(&self) -> &'static Corpus {
        static SHORT_WITH_VOWELS: OnceLock<Corpus> = OnceLock::new();
        static SHORT_NO_VOWELS: OnceLock<Corpus> = OnceLock::new();
        static LONG_WITH_VOWELS: OnceLock<Corpus> = OnceLock::new();
        static LONG_NO_VOWELS: OnceLock<Corpus> = OnceLock::new();

        let cell = match self {
            CorpusClass::ShortWithVowels => &SHORT_WITH_VOWELS,
            CorpusClass::ShortNoVowels => &SHORT_NO_VOWELS,
            CorpusClass::LongWithVowels => &LONG_WITH_VOWELS,
            CorpusClass::LongNoVowels => &LONG_NO_VOWELS,
        };
        cell.get_or_init(|| {
            self.spec(DEFAULT_SEED)
                .generate()
                .expect("standard corpus spec is valid")
        })
    }
}

impl std::fmt::Display for CorpusClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
