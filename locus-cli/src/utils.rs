//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, tree loading, and output formatting.

use crate::error::CliError;
use locus::config::OutputFormat;
use locus::{Config, ConfigBuilder, NodeRef, TreeDocument};
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the directory holding the user config.
    pub data_dir: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Command-line flags (applied by each command)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref data_dir) = global.data_dir {
        builder = builder.with_data_dir(data_dir);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Pick the output format: explicit flag first, then configuration.
pub fn output_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    flag.unwrap_or_else(|| config.format())
}

/// Read, validate and build a tree document into a root node.
pub fn load_tree(path: &Path) -> Result<NodeRef, CliError> {
    if !path.exists() {
        return Err(CliError::InvalidArguments(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let doc = TreeDocument::load(path)?;
    Ok(doc.build()?)
}
