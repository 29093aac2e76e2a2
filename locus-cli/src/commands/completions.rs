//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "locus";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            eprintln!("# Generating {} completion script", self.shell);
            eprintln!("# Run the following command to enable completions:");

            match self.shell {
                Shell::Bash => {
                    eprintln!(
                        "#   locus completions bash > ~/.local/share/bash-completion/completions/locus"
                    );
                    eprintln!("# Or source it directly in ~/.bashrc:");
                    eprintln!("#   eval \"$(locus completions bash)\"");
                }
                Shell::Zsh => {
                    eprintln!("#   locus completions zsh > ~/.zsh/completions/_locus");
                    eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
                }
                Shell::Fish => {
                    eprintln!("#   locus completions fish > ~/.config/fish/completions/locus.fish");
                    eprintln!("# Or add to config.fish:");
                    eprintln!("#   locus completions fish | source");
                }
                Shell::PowerShell => {
                    eprintln!("#   locus completions powershell > $PROFILE");
                }
                _ => {}
            }

            eprintln!();
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}
