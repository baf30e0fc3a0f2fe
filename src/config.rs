//! TOML configuration for snippet lookup and export defaults.
//!
//! Settings are layered with Figment: built-in defaults, then an optional
//! TOML file, then `DOCSNIPS_*` environment variables.

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;
use crate::language::Language;

/// Error type for configuration operations.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error writing file
    Io(std::io::Error),
    /// Figment extraction error (file read, TOML parse, env merge)
    Extract(figment::Error),
    /// TOML serialization error
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Extract(e) => write!(f, "config error: {}", e),
            Self::Serialize(e) => write!(f, "TOML serialize error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        Self::Extract(e)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Serialize(e)
    }
}

/// Root configuration structure for TOML files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SnippetConfig {
    /// Lookup behavior
    pub docs: DocsSettings,
    /// Export defaults
    pub output: OutputSettings,
}

/// Lookup behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsSettings {
    /// Language shown when none is requested (the default docs tab)
    pub default_language: Language,
    /// Optional fallback when a table has no sample for the requested
    /// language; unset means missing samples are an error
    pub fallback_language: Option<Language>,
}

/// Export defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Format used by --export when --format is not given
    pub format: OutputFormat,
}

impl SnippetConfig {
    /// Load configuration, layering defaults, the TOML file, and
    /// `DOCSNIPS_*` environment variables (e.g.
    /// `DOCSNIPS_DOCS__DEFAULT_LANGUAGE=ruby`).
    ///
    /// A missing file is not an error; the other layers still apply.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("DOCSNIPS_").split("__"))
            .extract()?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
