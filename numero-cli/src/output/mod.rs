//! Output formatting module

use anyhow::Result;
use numero_core::{Classification, Number};
use serde::Serialize;
use std::fmt;

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One result per line
    Text,
    /// JSON array of input/output records
    Json,
}

/// Result of one command applied to one input
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Number(Number),
    Bool(bool),
    Classification(Classification),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => write!(f, "{text}"),
            Value::Number(number) => write!(f, "{number}"),
            Value::Bool(flag) => write!(f, "{flag}"),
            Value::Classification(class) => write!(f, "{}", class.raw_value()),
        }
    }
}

/// Output value or the reason there is none
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Output(Value),
    Error(String),
}

/// One input paired with its outcome
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub input: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl Record {
    pub fn output(input: impl Into<String>, value: Value) -> Self {
        Self {
            input: input.into(),
            outcome: Outcome::Output(value),
        }
    }

    pub fn error(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            outcome: Outcome::Error(message.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.outcome, Outcome::Error(_))
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single record
    fn write_record(&mut self, record: &Record) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Formatter for `format` writing to stdout
pub fn stdout_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::stdout()),
        OutputFormat::Json => Box::new(JsonFormatter::new(std::io::stdout())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Text("123".into()).to_string(), "123");
        assert_eq!(Value::Number(Number::Float(12.5)).to_string(), "12.5");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(
            Value::Classification(Classification::Digit(2)).to_string(),
            "2"
        );
        assert_eq!(
            Value::Classification(Classification::NotDigit).to_string(),
            "-1"
        );
    }

    #[test]
    fn test_record_serialization() {
        let record = Record::output("۱۲", Value::Number(Number::Integer(12)));
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"input":"۱۲","output":12}"#
        );

        let record = Record::error("x", "invalid integer");
        assert!(record.is_error());
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"input":"x","error":"invalid integer"}"#
        );
    }
}
