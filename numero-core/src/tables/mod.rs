//! Lookup tables for digit classification
//!
//! Tables are immutable after construction and allocation-free during lookup.

pub mod digits;

pub use digits::{DigitRangeTable, STANDARD_ZERO_POINTS};
