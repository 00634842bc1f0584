//! Character-level commands: classify and scripts

use super::emit;
use crate::error::CliResult;
use crate::output::{OutputFormatter, Record, Value};
use clap::Args;
use numero_core::Normalizer;

/// Arguments for the classify command
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Characters to classify; every code point is reported separately
    #[arg(required = true, allow_hyphen_values = true)]
    pub chars: Vec<String>,
}

impl ClassifyArgs {
    pub fn execute(
        &self,
        normalizer: &Normalizer,
        formatter: &mut dyn OutputFormatter,
    ) -> CliResult<bool> {
        let records = self.chars.iter().flat_map(|arg| arg.chars()).map(|ch| {
            let class = normalizer.classify(ch);
            CliResult::Ok(Record::output(ch.to_string(), Value::Classification(class)))
        });
        emit(records, formatter)
    }
}

/// Write the code point and glyph of every zero-point in the table
pub fn list_scripts(
    normalizer: &Normalizer,
    formatter: &mut dyn OutputFormatter,
) -> CliResult<bool> {
    let table = normalizer.classifier().table();
    let records = table.zero_points().iter().map(|&zero| {
        let run = format!("U+{:04X}\t{zero}", zero as u32);
        CliResult::Ok(Record::output(zero.to_string(), Value::Text(run)))
    });
    emit(records, formatter)
}
