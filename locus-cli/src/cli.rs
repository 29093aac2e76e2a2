//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, ResolveCommand, SplitCommand, ValidateCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for resolving request paths against an object tree.
#[derive(Parser)]
#[command(name = "locus")]
#[command(version, about = "Resolve request paths against an object tree", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the directory holding the user config.yaml
    #[arg(long, value_name = "PATH", global = true, env = "LOCUS_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Split a path into decoded segments
    Split(SplitCommand),

    /// Resolve a path against an object tree
    Resolve(ResolveCommand),

    /// Validate a tree document
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
