//! Unicode decimal digit normalization
//!
//! This crate maps decimal digits from any supported script (Arabic-Indic,
//! Persian, Devanagari, Bengali, Thai, fullwidth, mathematical digit symbols
//! and many more) onto ASCII `0`-`9`, and builds a few small utilities on top
//! of that mapping: digit-only testing, numeric parsing and stripping of
//! non-digit characters.
//!
//! # Architecture
//!
//! - **tables**: the immutable [`DigitRangeTable`] of per-script zero-points
//! - **classifier**: [`DigitClassifier`], one code point at a time
//! - **normalize**: [`Normalizer`], string operations over a classifier
//! - **config**: optional [`NormalizerConfig`] for extra scripts and options
//!
//! The free functions at the crate root use the standard table and default
//! options. Everything is synchronous, allocation-bounded by the input, and
//! safe to call from any number of threads.
//!
//! # Example
//!
//! ```rust
//! use numero_core::{normalize, normalize_as_number, strip_non_digits, Number};
//!
//! assert_eq!(normalize("abc۵def"), "abc5def");
//! assert_eq!(normalize_as_number("۱۲.۵").unwrap(), Number::Float(12.5));
//! assert_eq!(strip_non_digits("a۱b۲!", Some("!")), "12!");
//! ```

pub mod classifier;
pub mod config;
pub mod error;
pub mod normalize;
pub mod number;
pub mod tables;

pub use classifier::{Classification, DigitClassifier, SENTINEL};
pub use config::{NormalizerConfig, NormalizerConfigBuilder};
pub use error::{Error, ParseError, Result};
pub use normalize::Normalizer;
pub use number::Number;
pub use tables::{DigitRangeTable, STANDARD_ZERO_POINTS};

/// Classify a single code point
pub fn classify(ch: char) -> Classification {
    DigitClassifier::standard().classify(ch)
}

/// Check whether every code point of `text` is a decimal digit
///
/// Returns `true` for the empty string.
pub fn is_digit_only(text: &str) -> bool {
    Normalizer::standard().is_digit_only(text)
}

/// Replace every decimal digit with its ASCII equivalent
pub fn normalize(text: &str) -> String {
    Normalizer::standard().normalize(text)
}

/// Normalize digits, then parse as a [`Number`]
///
/// Text containing a `.` is parsed as a float, anything else as an integer.
pub fn normalize_as_number(text: &str) -> std::result::Result<Number, ParseError> {
    Normalizer::standard().normalize_as_number(text)
}

/// Keep only digits (as ASCII) plus the characters listed in `exceptions`
pub fn strip_non_digits(text: &str, exceptions: Option<&str>) -> String {
    Normalizer::standard().strip_non_digits(text, exceptions)
}
