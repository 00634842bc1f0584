//! CLI command implementations

use crate::error::{CliError, CliResult};
use crate::output::{self, OutputFormat, OutputFormatter, Record};
use clap::{Parser, Subcommand};
use numero_core::{Normalizer, NormalizerConfig};
use std::path::PathBuf;

pub mod classify;
pub mod number;
pub mod text;

/// Normalize Unicode decimal digits from any script into ASCII
#[derive(Debug, Parser)]
#[command(name = "numero", version, about)]
pub struct Cli {
    /// Normalizer configuration file (TOML)
    #[arg(short, long, value_name = "FILE", global = true, env = "NUMERO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Replace every digit with its ASCII equivalent
    Normalize(text::NormalizeArgs),

    /// Normalize digits and parse the result as an integer or float
    Number(number::NumberArgs),

    /// Drop everything except digits and explicitly kept characters
    Strip(text::StripArgs),

    /// Report whether each input consists of digits only
    Check(text::CheckArgs),

    /// Classify individual characters
    Classify(classify::ClassifyArgs),

    /// List the zero-point of every supported digit script
    Scripts,
}

impl Cli {
    /// Execute the selected command
    ///
    /// Returns `Ok(false)` when the command ran but at least one input
    /// failed (unparseable number, or not digit-only for `check`).
    pub fn execute(&self) -> CliResult<bool> {
        self.init_logging();

        log::info!("Starting {:?}", self.command);

        let normalizer = self.load_normalizer()?;
        let mut formatter = output::stdout_formatter(self.format);

        let ok = match &self.command {
            Commands::Normalize(args) => args.execute(&normalizer, formatter.as_mut())?,
            Commands::Number(args) => args.execute(&normalizer, formatter.as_mut())?,
            Commands::Strip(args) => args.execute(&normalizer, formatter.as_mut())?,
            Commands::Check(args) => args.execute(&normalizer, formatter.as_mut())?,
            Commands::Classify(args) => args.execute(&normalizer, formatter.as_mut())?,
            Commands::Scripts => classify::list_scripts(&normalizer, formatter.as_mut())?,
        };

        formatter.finish()?;
        Ok(ok)
    }

    fn load_normalizer(&self) -> CliResult<Normalizer> {
        let Some(path) = &self.config else {
            return Ok(Normalizer::default());
        };

        log::info!("Loading configuration from {}", path.display());
        let config = NormalizerConfig::from_file(path)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        let normalizer = Normalizer::from_config(&config)
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(normalizer)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A second initialization (e.g. in tests) is not an error worth reporting
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

/// Write records as they are produced and report whether all of them succeeded
///
/// Stops at the first input error; records already written stay written.
pub(crate) fn emit(
    records: impl IntoIterator<Item = CliResult<Record>>,
    formatter: &mut dyn OutputFormatter,
) -> CliResult<bool> {
    let mut ok = true;
    for record in records {
        let record = record?;
        ok &= !record.is_error();
        formatter.write_record(&record)?;
    }
    Ok(ok)
}
