//! Number command: normalize digits and parse

use super::emit;
use crate::error::CliResult;
use crate::input::stdin_inputs;
use crate::output::{OutputFormatter, Record, Value};
use clap::Args;
use numero_core::Normalizer;

/// Arguments for the number command
#[derive(Debug, Args)]
pub struct NumberArgs {
    /// Numbers to parse (default: read lines from stdin)
    ///
    /// Negative numbers in any script are accepted; put inputs after `--`
    /// if they would otherwise match an option.
    #[arg(allow_hyphen_values = true)]
    pub text: Vec<String>,
}

impl NumberArgs {
    pub fn execute(
        &self,
        normalizer: &Normalizer,
        formatter: &mut dyn OutputFormatter,
    ) -> CliResult<bool> {
        let records = stdin_inputs(&self.text).map(|input| {
            input.map(|input| match normalizer.normalize_as_number(&input) {
                Ok(number) => Record::output(input, Value::Number(number)),
                Err(e) => {
                    log::debug!("failed to parse {input:?}: {e}");
                    Record::error(input, e.to_string())
                }
            })
        });
        emit(records, formatter)
    }
}
