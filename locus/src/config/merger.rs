//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use locus::config::{Config, ConfigMerger, OutputFormat};
///
/// let low = Config { output_format: Some(OutputFormat::Text), ..Default::default() };
/// let high = Config { output_format: Some(OutputFormat::Json), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.output_format, Some(OutputFormat::Json));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target where set).
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.tree.is_some() {
            target.tree.clone_from(&source.tree);
        }

        if source.fixup.is_some() {
            target.fixup = source.fixup;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::FixupMode;
    use std::path::PathBuf;

    fn source(precedence: u8, config: Config) -> ConfigSource {
        ConfigSource {
            path: PathBuf::from(format!("/config/{precedence}.yaml")),
            precedence,
            config,
        }
    }

    #[test]
    fn test_merge_empty() {
        assert_eq!(ConfigMerger::merge(Vec::new()), Config::default());
    }

    #[test]
    fn test_higher_precedence_wins() {
        let merged = ConfigMerger::merge(vec![
            source(
                1,
                Config {
                    tree: Some(PathBuf::from("/user.yaml")),
                    fixup: Some(FixupMode::Off),
                    ..Default::default()
                },
            ),
            source(
                2,
                Config {
                    fixup: Some(FixupMode::Context),
                    ..Default::default()
                },
            ),
        ]);

        assert_eq!(merged.tree, Some(PathBuf::from("/user.yaml")));
        assert_eq!(merged.fixup, Some(FixupMode::Context));
    }

    #[test]
    fn test_unset_fields_do_not_clear() {
        let mut target = Config {
            output_format: Some(OutputFormat::Json),
            ..Default::default()
        };
        ConfigMerger::merge_into(&mut target, &Config::default());
        assert_eq!(target.output_format, Some(OutputFormat::Json));
    }
}
