//! Error types for numero

use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// Failure to read a normalized string as a number
///
/// `input` is the string after digit normalization, which is what the
/// numeric parser actually saw.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid integer {input:?}: {source}")]
    Integer {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid float {input:?}: {source}")]
    Float {
        input: String,
        #[source]
        source: ParseFloatError,
    },

    /// Float literal too large in magnitude for `f64`
    #[error("float {input:?} out of range")]
    FloatRange { input: String },
}

impl ParseError {
    /// Normalized text that failed to parse
    pub fn input(&self) -> &str {
        match self {
            ParseError::Integer { input, .. }
            | ParseError::Float { input, .. }
            | ParseError::FloatRange { input } => input,
        }
    }
}

/// Crate-wide error type
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration is structurally valid but semantically wrong
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid TOML for the schema
    #[error("Invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for numero operations
pub type Result<T> = std::result::Result<T, Error>;
