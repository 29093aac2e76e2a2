//! Build script for locus-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("locus")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve request paths against an object tree")
        .long_about(
            "Command-line tool for splitting request paths and resolving them against a YAML object tree",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the directory holding the user config.yaml")
                .value_name("PATH")
                .global(true)
                .env("LOCUS_DATA_DIR"),
        )
        .subcommands(vec![
            Command::new("split")
                .about("Split a path into decoded segments")
                .long_about("Show the segments a request path splits into after decoding and dot handling"),
            Command::new("resolve")
                .about("Resolve a path against an object tree")
                .long_about("Traverse a YAML object tree and report context, view name and subpath"),
            Command::new("validate")
                .about("Validate a tree document")
                .long_about("Check a YAML tree document for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("locus.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
