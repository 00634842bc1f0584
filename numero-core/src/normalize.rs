//! String-level digit operations
//!
//! All operations walk the input by code point and consult a
//! [`DigitClassifier`]; none of them mutate their input.

use crate::classifier::{Classification, DigitClassifier};
use crate::config::NormalizerConfig;
use crate::error::{ParseError, Result};
use crate::number::Number;

/// Digit normalizer over a classifier and its options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalizer {
    classifier: DigitClassifier,
    empty_is_digit_only: bool,
}

static STANDARD: Normalizer = Normalizer {
    classifier: DigitClassifier::new(crate::tables::DigitRangeTable::standard()),
    empty_is_digit_only: true,
};

impl Default for Normalizer {
    fn default() -> Self {
        STANDARD.clone()
    }
}

impl Normalizer {
    /// Shared normalizer with the standard table and default options
    pub fn standard() -> &'static Normalizer {
        &STANDARD
    }

    /// Build a normalizer from a configuration
    pub fn from_config(config: &NormalizerConfig) -> Result<Self> {
        Ok(Self {
            classifier: DigitClassifier::new(config.digit_table()?),
            empty_is_digit_only: config.empty_is_digit_only,
        })
    }

    pub fn classifier(&self) -> &DigitClassifier {
        &self.classifier
    }

    #[inline]
    pub fn classify(&self, ch: char) -> Classification {
        self.classifier.classify(ch)
    }

    /// Check whether every code point of `text` is a digit
    ///
    /// The empty string is digit-only unless the normalizer was configured
    /// with `empty_is_digit_only = false`.
    pub fn is_digit_only(&self, text: &str) -> bool {
        if text.is_empty() {
            return self.empty_is_digit_only;
        }
        text.chars().all(|ch| self.classifier.is_digit(ch))
    }

    /// Replace every digit with its ASCII form, leaving everything else as is
    pub fn normalize(&self, text: &str) -> String {
        text.chars()
            .map(|ch| self.classifier.to_ascii(ch).unwrap_or(ch))
            .collect()
    }

    /// Normalize, then parse as a float if the text has a `.`, else as an integer
    ///
    /// The numeric parser's error is returned unchanged inside [`ParseError`].
    pub fn normalize_as_number(&self, text: &str) -> std::result::Result<Number, ParseError> {
        let normalized = self.normalize(text);

        if normalized.contains('.') {
            match normalized.parse::<f64>() {
                // A literal containing `.` cannot spell inf or NaN, so a
                // non-finite value means the magnitude overflowed
                Ok(value) if !value.is_finite() => {
                    Err(ParseError::FloatRange { input: normalized })
                }
                Ok(value) => Ok(Number::Float(value)),
                Err(source) => Err(ParseError::Float {
                    input: normalized,
                    source,
                }),
            }
        } else {
            match normalized.parse::<i64>() {
                Ok(value) => Ok(Number::Integer(value)),
                Err(source) => Err(ParseError::Integer {
                    input: normalized,
                    source,
                }),
            }
        }
    }

    /// Keep only digits (normalized to ASCII) and any code point listed in `exceptions`
    ///
    /// Kept exception characters are copied verbatim. Everything else is
    /// dropped. An empty exception string keeps nothing extra.
    pub fn strip_non_digits(&self, text: &str, exceptions: Option<&str>) -> String {
        let exceptions = exceptions.filter(|keep| !keep.is_empty());

        text.chars()
            .filter_map(|ch| match self.classifier.to_ascii(ch) {
                Some(ascii) => Some(ascii),
                None => exceptions.filter(|keep| keep.contains(ch)).map(|_| ch),
            })
            .collect()
    }
}
