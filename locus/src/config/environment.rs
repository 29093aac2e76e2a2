//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `LOCUS_*` environment variables that
//! override configuration file values.

use std::env;
use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use crate::traversal::FixupMode;

/// Tree document path override.
pub const TREE_ENV: &str = "LOCUS_TREE";

/// Fixup mode override.
pub const FIXUP_ENV: &str = "LOCUS_FIXUP";

/// Output format override.
pub const OUTPUT_FORMAT_ENV: &str = "LOCUS_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use locus::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(tree) = env::var(TREE_ENV) {
            config.tree = Some(PathBuf::from(tree));
        }

        if let Ok(value) = env::var(FIXUP_ENV) {
            config.fixup = Some(Self::parse_fixup(&value)?);
        }

        if let Ok(value) = env::var(OUTPUT_FORMAT_ENV) {
            config.output_format = Some(Self::parse_output_format(&value)?);
        }

        Ok(())
    }

    /// Parse a fixup mode name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns a validation error naming `LOCUS_FIXUP` for unknown modes.
    pub fn parse_fixup(value: &str) -> Result<FixupMode> {
        FixupMode::from_str(value, true).map_err(|_| Error::Validation {
            field: FIXUP_ENV.into(),
            message: format!("Expected one of chain, context, off; got '{value}'"),
        })
    }

    /// Parse an output format name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns a validation error naming `LOCUS_OUTPUT_FORMAT` for unknown
    /// formats.
    pub fn parse_output_format(value: &str) -> Result<OutputFormat> {
        OutputFormat::from_str(value, true).map_err(|_| Error::Validation {
            field: OUTPUT_FORMAT_ENV.into(),
            message: format!("Expected one of text, json; got '{value}'"),
        })
    }
}
