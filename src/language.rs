//! Client language identifiers (build.rs compatible).
//!
//! This module contains only definitions with no dependencies on other crate
//! modules, allowing it to be included from build.rs alongside the CLI
//! definitions.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A client language with authored documentation samples.
///
/// The set is closed: every snippet table is keyed by this enum, so a lookup
/// with a supported language is checked at compile time. Callers holding an
/// open string key (e.g. from a URL or a docs-site tab id) go through
/// [`FromStr`], which rejects anything outside the set.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// JavaScript (`@knocklabs/node`)
    #[default]
    Javascript,
    /// Elixir (`knock-elixir`)
    Elixir,
    /// Python (`knockapi`)
    Python,
    /// Ruby (`knockapi` gem)
    Ruby,
    /// C# (`Knock.net`)
    Csharp,
}

impl Language {
    /// All supported languages, in documentation tab order.
    pub const ALL: [Language; 5] = [
        Language::Javascript,
        Language::Elixir,
        Language::Python,
        Language::Ruby,
        Language::Csharp,
    ];

    /// The open string key used by the documentation site.
    pub fn key(self) -> &'static str {
        match self {
            Language::Javascript => "javascript",
            Language::Elixir => "elixir",
            Language::Python => "python",
            Language::Ruby => "ruby",
            Language::Csharp => "csharp",
        }
    }

    /// Human-readable name for tab labels and listings.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::Javascript => "JavaScript",
            Language::Elixir => "Elixir",
            Language::Python => "Python",
            Language::Ruby => "Ruby",
            Language::Csharp => "C#",
        }
    }

    /// File extension used to pick a syntax definition for highlighting.
    pub fn extension(self) -> &'static str {
        match self {
            Language::Javascript => "js",
            Language::Elixir => "ex",
            Language::Python => "py",
            Language::Ruby => "rb",
            Language::Csharp => "cs",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error for a string key outside the supported language set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown language key '{}'", self.0)
    }
}

impl std::error::Error for UnknownLanguage {}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "javascript" => Ok(Language::Javascript),
            "elixir" => Ok(Language::Elixir),
            "python" => Ok(Language::Python),
            "ruby" => Ok(Language::Ruby),
            "csharp" => Ok(Language::Csharp),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}
