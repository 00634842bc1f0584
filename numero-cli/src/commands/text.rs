//! Text-producing commands: normalize, strip and check

use super::emit;
use crate::error::CliResult;
use crate::input::stdin_inputs;
use crate::output::{OutputFormatter, Record, Value};
use clap::Args;
use numero_core::Normalizer;

/// Arguments for the normalize command
#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Text to normalize (default: read lines from stdin)
    ///
    /// Inputs may start with `-`; put them after `--` if they would
    /// otherwise match an option.
    #[arg(allow_hyphen_values = true)]
    pub text: Vec<String>,
}

impl NormalizeArgs {
    pub fn execute(
        &self,
        normalizer: &Normalizer,
        formatter: &mut dyn OutputFormatter,
    ) -> CliResult<bool> {
        let records = stdin_inputs(&self.text).map(|input| {
            input.map(|input| {
                let normalized = normalizer.normalize(&input);
                Record::output(input, Value::Text(normalized))
            })
        });
        emit(records, formatter)
    }
}

/// Arguments for the strip command
#[derive(Debug, Args)]
pub struct StripArgs {
    /// Characters to keep in addition to digits
    #[arg(short, long, value_name = "CHARS")]
    pub keep: Option<String>,

    /// Text to strip (default: read lines from stdin)
    ///
    /// Inputs may start with `-`; put them after `--` if they would
    /// otherwise match an option.
    #[arg(allow_hyphen_values = true)]
    pub text: Vec<String>,
}

impl StripArgs {
    pub fn execute(
        &self,
        normalizer: &Normalizer,
        formatter: &mut dyn OutputFormatter,
    ) -> CliResult<bool> {
        let keep = self.keep.as_deref();
        let records = stdin_inputs(&self.text).map(|input| {
            input.map(|input| {
                let stripped = normalizer.strip_non_digits(&input, keep);
                Record::output(input, Value::Text(stripped))
            })
        });
        emit(records, formatter)
    }
}

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Text to check (default: read lines from stdin)
    ///
    /// Inputs may start with `-`; put them after `--` if they would
    /// otherwise match an option.
    #[arg(allow_hyphen_values = true)]
    pub text: Vec<String>,
}

impl CheckArgs {
    /// Exits unsuccessfully if any input is not digit-only
    pub fn execute(
        &self,
        normalizer: &Normalizer,
        formatter: &mut dyn OutputFormatter,
    ) -> CliResult<bool> {
        let mut all_digits = true;
        let records = stdin_inputs(&self.text).map(|input| {
            input.map(|input| {
                let digit_only = normalizer.is_digit_only(&input);
                all_digits &= digit_only;
                Record::output(input, Value::Bool(digit_only))
            })
        });

        let ok = emit(records, formatter)?;
        Ok(ok && all_digits)
    }
}
