//! Configuration loader
//!
//! `defaults/shortmark.default.toml` is embedded into the crate so that the
//! documented defaults and runtime behavior stay in sync. Callers layer user
//! files and single-key overrides on top via [`Loader`] before deserializing
//! into [`ShortmarkConfig`].

use crate::shortmark::formats::OutputFormat;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../../defaults/shortmark.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ShortmarkConfig {
    pub render: RenderConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub trailing_newline: bool,
}

/// How failures are shown in place of output.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    pub error_prefix: String,
}

/// Helper for layering user overrides over the built-in defaults.
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

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (e.g. from a CLI flag).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<ShortmarkConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ShortmarkConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.render.format, OutputFormat::Markup);
        assert!(config.render.trailing_newline);
        assert_eq!(config.display.error_prefix, "// ERROR: ");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("render.format", "jsx")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.render.format, OutputFormat::ComponentTemplate);
    }

    #[test]
    fn layers_user_file_over_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[display]\nerror_prefix = \"!! \"").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.display.error_prefix, "!! ");
        assert_eq!(config.render.format, OutputFormat::Markup);
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let result = Loader::new()
            .with_file("/nonexistent/shortmark.toml")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/shortmark.toml")
            .build()
            .expect("config to build");
        assert!(config.render.trailing_newline);
    }

    #[test]
    fn rejects_unknown_format() {
        let result = Loader::new()
            .set_override("render.format", "xml")
            .expect("override to apply")
            .build();
        assert!(result.is_err());
    }
}
