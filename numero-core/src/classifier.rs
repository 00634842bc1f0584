//! Single code point digit classification

use crate::tables::DigitRangeTable;
use serde::Serialize;

/// Raw value reported for code points that are not digits
pub const SENTINEL: i8 = -1;

/// Outcome of classifying one code point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// A decimal digit with value 0-9
    Digit(u8),
    /// Not a recognized decimal digit
    NotDigit,
}

impl Classification {
    #[inline]
    pub fn is_digit(&self) -> bool {
        matches!(self, Classification::Digit(_))
    }

    /// Digit value, if any
    #[inline]
    pub fn value(&self) -> Option<u8> {
        match *self {
            Classification::Digit(value) => Some(value),
            Classification::NotDigit => None,
        }
    }

    /// Digit value, or [`SENTINEL`] for a miss
    pub fn raw_value(&self) -> i8 {
        self.value().map_or(SENTINEL, |value| value as i8)
    }

    /// `(is_digit, value)` pair, with [`SENTINEL`] as the value on a miss
    pub fn into_pair(self) -> (bool, i8) {
        (self.is_digit(), self.raw_value())
    }

    /// ASCII form of the digit
    #[inline]
    pub fn to_ascii(&self) -> Option<char> {
        self.value().map(|value| (b'0' + value) as char)
    }
}

impl From<Option<u8>> for Classification {
    fn from(value: Option<u8>) -> Self {
        value.map_or(Classification::NotDigit, Classification::Digit)
    }
}

/// Classifies code points against a [`DigitRangeTable`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigitClassifier {
    table: DigitRangeTable,
}

static STANDARD: DigitClassifier = DigitClassifier::new(DigitRangeTable::standard());

impl DigitClassifier {
    pub const fn new(table: DigitRangeTable) -> Self {
        Self { table }
    }

    /// Shared classifier over the standard table
    pub fn standard() -> &'static DigitClassifier {
        &STANDARD
    }

    pub fn table(&self) -> &DigitRangeTable {
        &self.table
    }

    /// Classify a code point - hot path
    ///
    /// ASCII is answered directly. Anything outside the Unicode Number
    /// category is rejected before the table scan; table construction
    /// guarantees every covered code point is numeric, so the filter never
    /// changes the result.
    #[inline]
    pub fn classify(&self, ch: char) -> Classification {
        if ch.is_ascii() {
            return if ch.is_ascii_digit() {
                Classification::Digit(ch as u8 - b'0')
            } else {
                Classification::NotDigit
            };
        }

        if !ch.is_numeric() {
            return Classification::NotDigit;
        }

        self.table.lookup(ch).into()
    }

    #[inline]
    pub fn is_digit(&self, ch: char) -> bool {
        self.classify(ch).is_digit()
    }

    /// ASCII equivalent of `ch` if it is a digit
    #[inline]
    pub fn to_ascii(&self, ch: char) -> Option<char> {
        self.classify(ch).to_ascii()
    }
}
