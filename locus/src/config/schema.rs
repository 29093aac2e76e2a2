//! Configuration schema definitions.

use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::traversal::FixupMode;

/// Complete configuration structure.
///
/// Every field is optional so partial files can be layered; accessors
/// supply the built-in defaults.
///
/// # Examples
///
/// ```
/// use locus::config::Config;
/// use locus::FixupMode;
///
/// let config: Config = serde_yaml::from_str("fixup: off\ntree: site.yaml\n").unwrap();
/// assert_eq!(config.fixup_mode(), FixupMode::Off);
/// assert_eq!(config.tree.unwrap().to_str(), Some("site.yaml"));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Tree document to resolve against.
    pub tree: Option<PathBuf>,

    /// Which nodes receive ancestry fixup.
    pub fixup: Option<FixupMode>,

    /// Output format for CLI results.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// The configured fixup mode, or the default.
    #[must_use]
    pub fn fixup_mode(&self) -> FixupMode {
        self.fixup.unwrap_or_default()
    }

    /// The configured output format, or the default.
    #[must_use]
    pub fn format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}

/// Output format for CLI results.
///
/// # Examples
///
/// ```
/// use locus::config::OutputFormat;
///
/// assert_eq!(OutputFormat::Json.to_string(), "json");
/// assert_eq!(OutputFormat::default(), OutputFormat::Text);
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON output format.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}
