/*!
 * Error types for the scansion application.
 *
 * The scansion core (classification, segmentation, foot recognition) reports
 * typed errors through `ScansionError`; configuration problems surface as
 * `ConfigError`. `AppError` wraps both for library consumers that want a
 * single error type.
 */

use thiserror::Error;

/// Errors raised by the scansion core for a single syllable or line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScansionError {
    /// A syllable handed to the classifier has no vowel nucleus
    #[error("No vowel in syllable: '{syllable}'")]
    NoVowelInSyllable {
        /// Text of the offending syllable
        syllable: String,
    },

    /// Trie traversal reached a prefix that is neither a foot nor extendable
    #[error("Pattern {symbols} not found (stuck at position {position})")]
    PatternNotFound {
        /// The full symbol string handed to the recognizer
        symbols: String,
        /// Index of the symbol that could not be consumed
        position: usize,
    },
}

/// Errors in the feet table or application configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A feet table entry with an empty pattern
    #[error("Foot '{name}' has an empty pattern")]
    EmptyPattern {
        name: String,
    },

    /// A feet table pattern containing something other than L or S
    #[error("Pattern '{pattern}' contains invalid symbol '{symbol}' (expected L or S)")]
    InvalidSymbol {
        pattern: String,
        symbol: char,
    },

    /// A feet table entry without a name
    #[error("Pattern '{pattern}' has an empty name")]
    EmptyName {
        pattern: String,
    },

    /// Malformed JSON
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the scansion core
    #[error("Scansion error: {0}")]
    Scansion(#[from] ScansionError),

    /// Error in configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
