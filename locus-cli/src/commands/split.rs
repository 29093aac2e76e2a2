//! Command to show how a path splits into segments.

use crate::error::CliError;
use crate::utils::{load_configuration, output_format, GlobalOptions};
use clap::Args;
use locus::config::OutputFormat;
use locus::split_path;

/// Split a path into decoded segments.
#[derive(Args)]
pub struct SplitCommand {
    /// Request path to split
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl SplitCommand {
    /// Execute the split command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let segments = split_path(&self.path);

        // Configuration only matters for picking a format.
        let format = match self.format {
            Some(format) => format,
            None => output_format(None, &load_configuration(global)?),
        };

        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string(&segments)?),
            OutputFormat::Text => {
                for segment in &segments {
                    println!("{segment}");
                }
            }
        }

        Ok(())
    }
}
