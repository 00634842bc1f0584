//! numero CLI library
//!
//! This library provides the command-line interface for the numero
//! Unicode digit normalizer.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;

pub use commands::Cli;
pub use error::{CliError, CliResult};
