//! Configuration loader for the taxa formatter.
//!
//! `defaults/taxa.default.toml` is embedded into the library so the documented
//! defaults and the runtime behavior stay in sync. Callers layer their own files and
//! overrides on top via [`Loader`] before deserializing into [`TaxaConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/taxa.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxaConfig {
    pub formatting: FormattingConfig,
}

/// Knobs of the canonical formatter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FormattingConfig {
    /// Spaces added per nesting level
    pub indent_width: usize,
    /// Order tags and children by name
    pub sort: bool,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            sort: true,
        }
    }
}

/// Layers user files and overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. A missing file fails the build.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        tracing::debug!(path = %path.as_ref().display(), "layering config file");
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer a configuration file if it exists.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Override a single key, e.g. `formatting.indent_width`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<TaxaConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults alone.
pub fn load_defaults() -> Result<TaxaConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.formatting, FormattingConfig::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("formatting.indent_width", 4i64)
            .expect("override to apply")
            .set_override("formatting.sort", false)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.formatting.indent_width, 4);
        assert!(!config.formatting.sort);
    }

    #[test]
    fn layers_files() {
        let path = concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/tests/fixtures/taxa.override.toml"
        );
        let config = Loader::new()
            .with_file(path)
            .build()
            .expect("config to build");
        assert_eq!(config.formatting.indent_width, 4);
        assert!(config.formatting.sort);
    }

    #[test]
    fn optional_file_may_be_missing() {
        let config = Loader::new()
            .with_optional_file("does/not/exist.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.formatting.indent_width, 2);
    }

    #[test]
    fn required_file_must_exist() {
        let result = Loader::new().with_file("does/not/exist.toml").build();
        assert!(result.is_err());
    }
}
