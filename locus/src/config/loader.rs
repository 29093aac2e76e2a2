//! Configuration file discovery and loading.
//!
//! This module handles discovering and loading locus configuration files
//! from various locations with proper precedence.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// File name of the project configuration.
pub const PROJECT_CONFIG: &str = "locus.yaml";

/// File name of the private (uncommitted) project configuration.
pub const LOCAL_CONFIG: &str = "locus.local.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from various sources.
///
/// # Examples
///
/// ```no_run
/// use locus::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// Searches for:
    /// 1. User config at `~/.locus/config.yaml` (precedence 1)
    /// 2. Project `locus.yaml` walking up from `working_dir` (precedence 2)
    /// 3. Project `locus.local.yaml` next to it (precedence 3)
    ///
    /// The `data_dir` parameter overrides where the user config is loaded from.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(working_dir: &Path, data_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config(data_dir)? {
            sources.push(user_config);
        }

        sources.extend(Self::discover_project_configs(working_dir)?);
        sources.sort_by_key(|s| s.precedence);

        Ok(sources)
    }

    fn load_user_config(data_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match data_dir {
            Some(dir) => dir.join("config.yaml"),
            None => match default_data_dir() {
                Some(dir) => dir.join("config.yaml"),
                None => return Ok(None),
            },
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Discover project configurations by walking up directories.
    ///
    /// Stops at the first directory containing either `locus.yaml` or
    /// `locus.local.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error if any discovered file cannot be read or parsed.
    pub fn discover_project_configs(start_dir: &Path) -> Result<Vec<ConfigSource>> {
        let mut configs = Vec::new();
        let mut current = start_dir.to_path_buf();

        loop {
            for (name, precedence) in [(PROJECT_CONFIG, 2), (LOCAL_CONFIG, 3)] {
                let candidate = current.join(name);
                if candidate.exists() {
                    let config = Self::load_file(&candidate)?;
                    configs.push(ConfigSource {
                        path: candidate,
                        precedence,
                        config,
                    });
                }
            }

            if !configs.is_empty() || !current.pop() {
                break;
            }
        }

        Ok(configs)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// A relative `tree` path is resolved against the directory holding the
    /// file, so project configs work from any subdirectory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Failed to read configuration file: {e}"),
        })?;

        let mut config: Config =
            serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
                field: format!("{}", path.display()),
                message: format!("Invalid YAML: {e}"),
            })?;

        if let (Some(tree), Some(dir)) = (&config.tree, path.parent()) {
            if tree.is_relative() {
                config.tree = Some(dir.join(tree));
            }
        }

        Ok(config)
    }
}

/// The default per-user data directory (`~/.locus`).
#[must_use]
pub fn default_data_dir() -> Option<PathBuf> {
    home::home_dir().map(|home| home.join(".locus"))
}
