//! Configuration system for locus.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project `locus.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`LOCUS_*`)
//! 3. Private project config (`locus.local.yaml`)
//! 4. Project config (`locus.yaml`)
//! 5. User config (`~/.locus/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use locus::config::{Config, ConfigBuilder, OutputFormat};
//! use locus::FixupMode;
//!
//! let custom = Config {
//!     fixup: Some(FixupMode::Context),
//!     output_format: Some(OutputFormat::Json),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.fixup_mode(), FixupMode::Context);
//! assert_eq!(config.format(), OutputFormat::Json);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat};
pub use validator::ConfigValidator;
