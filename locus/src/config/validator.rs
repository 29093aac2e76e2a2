//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates merged configuration.
///
/// # Examples
///
/// ```
/// use locus::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the tree path is empty or names a
    /// directory.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref tree) = config.tree {
            if tree.as_os_str().is_empty() {
                return Err(Error::Validation {
                    field: "tree".into(),
                    message: "Cannot be empty".into(),
                });
            }

            if tree.is_dir() {
                return Err(Error::Validation {
                    field: "tree".into(),
                    message: format!("{} is a directory, expected a YAML file", tree.display()),
                });
            }
        }

        Ok(())
    }
}
