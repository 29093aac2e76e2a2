//! Main entry point for the locus CLI.
//!
//! This is the command-line interface for the locus path resolver.
//! It provides commands for inspecting how request paths resolve:
//! - `split`: Show the segments a path splits into
//! - `resolve`: Resolve a path against a YAML object tree
//! - `validate`: Check a tree document
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    // Route library log records through the CLI's verbosity settings
    locus::init_logger(cli.verbose, cli.quiet).install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
    };

    let result = match cli.command {
        cli::Command::Split(cmd) => cmd.execute(&global),
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            log::error!("{e}");
            std::process::exit(e.exit_code());
        }
    }
}
