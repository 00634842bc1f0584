//! Input collection: positional arguments, or stdin line by line

use crate::error::{CliError, CliResult};
use std::io::BufRead;

/// Inputs yielded one at a time, so stdin is processed as it is read
pub type Inputs<'a> = Box<dyn Iterator<Item = CliResult<String>> + 'a>;

/// Use `args` if any were given, otherwise read lines from `reader`
pub fn inputs<'a, R: BufRead + 'a>(args: &'a [String], reader: R) -> Inputs<'a> {
    if !args.is_empty() {
        return Box::new(args.iter().cloned().map(Ok));
    }

    log::debug!("reading inputs from stdin");
    Box::new(
        reader
            .lines()
            .map(|line| line.map_err(|e| anyhow::Error::from(CliError::InputError(e.to_string())))),
    )
}

/// Inputs from `args` or the process stdin
pub fn stdin_inputs(args: &[String]) -> Inputs<'_> {
    inputs(args, std::io::stdin().lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_args_take_precedence() {
        let args = vec!["۱۲".to_string()];
        let collected: Vec<String> = inputs(&args, Cursor::new("ignored\n"))
            .collect::<CliResult<_>>()
            .unwrap();
        assert_eq!(collected, args);
    }

    #[test]
    fn test_reads_lines() {
        let collected: Vec<String> = inputs(&[], Cursor::new("۱\n۲\r\n۳"))
            .collect::<CliResult<_>>()
            .unwrap();
        assert_eq!(collected, vec!["۱", "۲", "۳"]);
    }

    #[test]
    fn test_lines_are_yielded_before_a_later_read_error() {
        let mut lines = inputs(&[], Cursor::new(b"\xd9\xa1\n\xff\xfe\n".to_vec()));

        assert_eq!(lines.next().unwrap().unwrap(), "١");
        assert!(lines.next().unwrap().is_err());
    }
}
