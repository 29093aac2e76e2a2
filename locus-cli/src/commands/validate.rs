//! Command to validate a tree document.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use locus::TreeDocument;
use std::path::PathBuf;

/// Validate a tree document.
#[derive(Args)]
pub struct ValidateCommand {
    /// Tree document to validate
    #[arg(value_name = "TREE_PATH")]
    pub tree_path: PathBuf,
}

impl ValidateCommand {
    /// Execute the validate command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        if !self.tree_path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.tree_path.display()
            )));
        }

        let doc = match TreeDocument::load(&self.tree_path) {
            Ok(doc) => doc,
            Err(e) => {
                log::error!("Parse error: {e}");
                return Err(CliError::SemanticFailure(
                    "Tree document is invalid".to_string(),
                ));
            }
        };

        match doc.build() {
            Ok(_) => {
                println!("Tree is valid ({} nodes)", doc.node_count());
                Ok(())
            }
            Err(e) => {
                log::error!("Validation error: {e}");
                Err(CliError::SemanticFailure(
                    "Tree validation failed".to_string(),
                ))
            }
        }
    }
}
