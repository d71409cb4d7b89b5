//! Custom error types for vowelbench.
//!
//! This module defines explicit enum error types as per coding guidelines.
//! No `Box<dyn Error>`, no `anyhow::Result` - all errors are strongly typed.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while validating or generating a corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("Alphabet is empty")]
    EmptyAlphabet,

    #[error("Alphabet byte {byte:#04x} is not ASCII")]
    NonAsciiAlphabet { byte: u8 },

    #[error("Alphabet byte {byte:#04x} appears more than once")]
    DuplicateAlphabetByte { byte: u8 },

    #[error("Corpus must contain at least one string")]
    ZeroStrings,

    #[error("Binomial probability out of range: {p} (must be strictly between 0 and 1)")]
    InvalidProbability { p: f64 },
}

/// Errors raised while loading the suite configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Suite configuration not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Suite configuration parse error: {message}")]
    Parse { message: String },

    #[error("Invalid suite configuration: {0}")]
    Validation(#[from] CorpusError),

    #[error("Suite configuration must request at least one measurement iteration")]
    ZeroIterations,

    #[error("IO error: {context} - {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_error_display() {
        let err = CorpusError::NonAsciiAlphabet { byte: 0xC3 };
        assert!(err.to_string().contains("0xc3"));
    }

    #[test]
    fn test_error_chain() {
        let corpus_err = CorpusError::InvalidProbability { p: 1.5 };
        let config_err: ConfigError = corpus_err.into();
        assert!(matches!(config_err, ConfigError::Validation(_)));
    }
}
