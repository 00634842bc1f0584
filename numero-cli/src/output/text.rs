//! Plain text output formatter

use super::{Outcome, OutputFormatter, Record};
use anyhow::Result;
use std::io::{self, Write};

/// Plain text formatter - outputs one result per line
///
/// Error records go to a separate writer (stderr by default) so the main
/// output stays a clean list of results.
pub struct TextFormatter<W: Write, E: Write = io::Stderr> {
    writer: W,
    errors: E,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter reporting errors on stderr
    pub fn new(writer: W) -> Self {
        Self::with_error_writer(writer, io::stderr())
    }
}

impl<W: Write, E: Write> TextFormatter<W, E> {
    /// Create a text formatter with an explicit error writer
    pub fn with_error_writer(writer: W, errors: E) -> Self {
        Self { writer, errors }
    }

    /// Output and error writers
    pub fn into_parts(self) -> (W, E) {
        (self.writer, self.errors)
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write, E: Write> OutputFormatter for TextFormatter<W, E> {
    fn write_record(&mut self, record: &Record) -> Result<()> {
        match &record.outcome {
            Outcome::Output(value) => writeln!(self.writer, "{value}")?,
            Outcome::Error(message) => writeln!(self.errors, "error: {message}")?,
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        self.errors.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Value;

    #[test]
    fn test_writes_one_line_per_record() {
        let mut formatter = TextFormatter::with_error_writer(Vec::new(), Vec::new());
        formatter
            .write_record(&Record::output("۱۲", Value::Text("12".into())))
            .unwrap();
        formatter
            .write_record(&Record::output("x", Value::Bool(false)))
            .unwrap();
        formatter
            .write_record(&Record::error("y", "invalid integer \"y\""))
            .unwrap();
        formatter.finish().unwrap();

        let (output, errors) = formatter.into_parts();
        assert_eq!(String::from_utf8(output).unwrap(), "12\nfalse\n");
        assert_eq!(
            String::from_utf8(errors).unwrap(),
            "error: invalid integer \"y\"\n"
        );
    }
}
