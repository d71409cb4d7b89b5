// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! YAML suite configuration with strict validation.
//!
//! Every field is optional in the file; defaults reproduce the standard
//! suite (1000 strings per corpus, binomial short/long lengths, seed
//! [`DEFAULT_SEED`]). Invalid values are rejected at load time rather than
//! surfacing mid-run.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::alphabet::Alphabet;
use crate::corpus::{CorpusClass, CorpusSpec, LengthModel, DEFAULT_SEED, DEFAULT_STRING_COUNT};
use crate::error::ConfigError;

/// Raw length model as parsed from YAML (before validation).
#[derive(Debug, Deserialize)]
struct RawLengthModel {
    trials: u64,
    p: f64,
    #[serde(default)]
    offset: usize,
}

/// Raw harness settings.
#[derive(Debug, Deserialize)]
struct RawHarnessConfig {
    #[serde(default = "default_warmup")]
    warmup: u64,
    #[serde(default = "default_iterations")]
    iterations: u64,
    #[serde(default = "default_keep_samples")]
    keep_samples: bool,
}

fn default_warmup() -> u64 {
    10
}

fn default_iterations() -> u64 {
    100
}

fn default_keep_samples() -> bool {
    true
}

impl Default for RawHarnessConfig {
    fn default() -> Self {
        Self {
            warmup: default_warmup(),
            iterations: default_iterations(),
            keep_samples: default_keep_samples(),
        }
    }
}

/// Raw root configuration file.
#[derive(Debug, Deserialize)]
struct RawSuiteConfig {
    #[serde(default = "default_seed")]
    seed: u64,
    #[serde(default = "default_string_count")]
    string_count: usize,
    #[serde(default)]
    short_length: Option<RawLengthModel>,
    #[serde(default)]
    long_length: Option<RawLengthModel>,
    #[serde(default)]
    harness: RawHarnessConfig,
    #[serde(default = "default_output_dir")]
    output_dir: String,
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_string_count() -> usize {
    DEFAULT_STRING_COUNT
}

fn default_output_dir() -> String {
    "data".to_string()
}

/// Validated harness settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarnessConfig {
    pub warmup: u64,
    pub iterations: u64,
    pub keep_samples: bool,
}

/// Validated suite configuration.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    pub seed: u64,
    pub string_count: usize,
    pub short_length: LengthModel,
    pub long_length: LengthModel,
    pub harness: HarnessConfig,
    pub output_dir: PathBuf,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            string_count: DEFAULT_STRING_COUNT,
            short_length: LengthModel::SHORT,
            long_length: LengthModel::LONG,
            harness: HarnessConfig {
                warmup: default_warmup(),
                iterations: default_iterations(),
                keep_samples: default_keep_samples(),
            },
            output_dir: PathBuf::from(default_output_dir()),
        }
    }
}

impl SuiteConfig {
    /// Load and validate a suite configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            context: "reading suite configuration",
            source,
        })?;

        let raw: RawSuiteConfig =
            serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse {
                message: e.to_string(),
            })?;

        let config = Self::validate(raw)?;
        info!(path = %path.display(), seed = config.seed, "loaded suite configuration");
        Ok(config)
    }

    fn validate(raw: RawSuiteConfig) -> Result<Self, ConfigError> {
        if raw.string_count == 0 {
            return Err(ConfigError::Validation(
                crate::error::CorpusError::ZeroStrings,
            ));
        }
        if raw.harness.iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }

        let short_length = match raw.short_length {
            Some(raw) => to_length_model(raw)?,
            None => LengthModel::SHORT,
        };
        let long_length = match raw.long_length {
            Some(raw) => to_length_model(raw)?,
            None => LengthModel::LONG,
        };

        Ok(Self {
            seed: raw.seed,
            string_count: raw.string_count,
            short_length,
            long_length,
            harness: HarnessConfig {
                warmup: raw.harness.warmup,
                iterations: raw.harness.iterations,
                keep_samples: raw.harness.keep_samples,
            },
            output_dir: PathBuf::from(raw.output_dir),
        })
    }

    /// The spec for one standard corpus class under this configuration.
    pub fn corpus_spec(&self, class: CorpusClass) -> CorpusSpec {
        let (alphabet, length) = match class {
            CorpusClass::ShortWithVowels => (Alphabet::alphanumeric(), self.short_length),
            CorpusClass::ShortNoVowels => (Alphabet::consonants(), self.short_length),
            CorpusClass::LongWithVowels => (Alphabet::alphanumeric(), self.long_length),
            CorpusClass::LongNoVowels => (Alphabet::consonants(), self.long_length),
        };
        // Both fields were validated at load time (or come from Default).
        CorpusSpec::new(class.name(), alphabet, self.string_count, length, self.seed)
            .expect("validated configuration produces valid specs")
    }
}

fn to_length_model(raw: RawLengthModel) -> Result<LengthModel, ConfigError> {
    let model = LengthModel::Binomial {
        trials: raw.trials,
        p: raw.p,
        offset: raw.offset,
    };
    model.validate().map_err(ConfigError::Validation)?;
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_matches_standard_suite() {
        let config = SuiteConfig::default();
        assert_eq!(config.seed, DEFAULT_SEED);
        assert_eq!(config.string_count, DEFAULT_STRING_COUNT);
        assert_eq!(config.short_length, LengthModel::SHORT);
        assert_eq!(config.long_length, LengthModel::LONG);
        assert_eq!(config.harness.iterations, 100);
    }

    #[test]
    fn test_load_minimal_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "seed: 99").unwrap();

        let config = SuiteConfig::load(file.path()).unwrap();
        assert_eq!(config.seed, 99);
        assert_eq!(config.string_count, DEFAULT_STRING_COUNT);
    }

    #[test]
    fn test_load_full_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
seed: 7
string_count: 50
short_length:
  trials: 10
  p: 0.25
  offset: 2
harness:
  warmup: 3
  iterations: 20
  keep_samples: false
output_dir: out
"#
        )
        .unwrap();

        let config = SuiteConfig::load(file.path()).unwrap();
        assert_eq!(config.string_count, 50);
        assert_eq!(
            config.short_length,
            LengthModel::Binomial {
                trials: 10,
                p: 0.25,
                offset: 2
            }
        );
        assert_eq!(config.harness.warmup, 3);
        assert!(!config.harness.keep_samples);
        assert_eq!(config.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_missing_file_rejected() {
        let err = SuiteConfig::load("/nonexistent/suite.yaml");
        assert!(matches!(err, Err(ConfigError::NotFound { .. })));
    }

    #[test]
    fn test_invalid_probability_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
short_length:
  trials: 10
  p: 0.0
"#
        )
        .unwrap();

        let err = SuiteConfig::load(file.path());
        assert!(matches!(err, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
harness:
  iterations: 0
"#
        )
        .unwrap();

        let err = SuiteConfig::load(file.path());
        assert!(matches!(err, Err(ConfigError::ZeroIterations)));
    }

    #[test]
    fn test_corpus_specs_follow_config() {
        let mut config = SuiteConfig::default();
        config.string_count = 10;
        config.seed = 11;

        let spec = config.corpus_spec(CorpusClass::ShortNoVowels);
        assert_eq!(spec.label(), "short_no_vowels");
        assert_eq!(spec.seed(), 11);
        let corpus = spec.generate().unwrap();
        assert_eq!(corpus.len(), 10);
    }
}
