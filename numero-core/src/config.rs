//! Normalizer configuration
//!
//! Configuration is optional: the standard table with default options covers
//! every supported script. A TOML file looks like:
//!
//! ```toml
//! empty_is_digit_only = false
//! extra_zero_points = ["\U00011DA0"]
//! ```

use crate::error::{Error, Result};
use crate::tables::DigitRangeTable;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Normalizer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizerConfig {
    /// Zero-points of additional digit scripts
    pub extra_zero_points: Vec<char>,

    /// Whether the empty string counts as digit-only
    pub empty_is_digit_only: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            extra_zero_points: Vec::new(),
            empty_is_digit_only: true,
        }
    }
}

impl NormalizerConfig {
    /// Create a configuration builder
    pub fn builder() -> NormalizerConfigBuilder {
        NormalizerConfigBuilder::default()
    }

    /// Parse and validate a TOML configuration
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: NormalizerConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading normalizer config from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.digit_table().map(|_| ())
    }

    /// Digit table described by this configuration
    pub fn digit_table(&self) -> Result<DigitRangeTable> {
        DigitRangeTable::with_extra(&self.extra_zero_points).map_err(Error::Configuration)
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct NormalizerConfigBuilder {
    extra_zero_points: Vec<char>,
    empty_is_digit_only: Option<bool>,
}

impl NormalizerConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the zero-point of an additional digit script
    pub fn extra_zero_point(mut self, zero: char) -> Self {
        self.extra_zero_points.push(zero);
        self
    }

    pub fn empty_is_digit_only(mut self, value: bool) -> Self {
        self.empty_is_digit_only = Some(value);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<NormalizerConfig> {
        let mut config = NormalizerConfig::default();

        config.extra_zero_points = self.extra_zero_points;
        if let Some(value) = self.empty_is_digit_only {
            config.empty_is_digit_only = value;
        }

        config.validate()?;
        Ok(config)
    }
}
