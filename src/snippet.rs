//! Snippet tables: per-operation mappings from language to sample text.

use std::collections::BTreeSet;
use std::fmt;

use tracing::warn;

use crate::language::Language;

/// Error type for snippet lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnippetError {
    /// The table has no sample authored for the requested language.
    MissingLanguage {
        slug: &'static str,
        language: Language,
    },
}

impl fmt::Display for SnippetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingLanguage { slug, language } => {
                write!(f, "no {language} sample authored for '{slug}'")
            }
        }
    }
}

impl std::error::Error for SnippetError {}

/// Example snippets for one documented API operation.
///
/// Tables are authored once as constants and never mutated; every read is
/// pure, so repeated lookups return byte-identical text. Entry order matches
/// the documentation tab order but carries no meaning for consumers.
pub struct SnippetTable {
    /// Operation slug, matching the docs-site page path (e.g. `objects/get`).
    pub slug: &'static str,
    /// Short human-readable description of the operation.
    pub title: &'static str,
    /// One sample per language. Keys are unique within a table.
    pub entries: &'static [(Language, &'static str)],
}

impl SnippetTable {
    /// Look up the sample for a language, exactly as authored.
    pub fn get(&self, language: Language) -> Result<&'static str, SnippetError> {
        self.entries
            .iter()
            .find(|(key, _)| *key == language)
            .map(|(_, code)| *code)
            .ok_or(SnippetError::MissingLanguage {
                slug: self.slug,
                language,
            })
    }

    /// Whether a sample is authored for the language.
    pub fn contains(&self, language: Language) -> bool {
        self.entries.iter().any(|(key, _)| *key == language)
    }

    /// Look up a sample, falling back to another language if the requested
    /// one is missing.
    ///
    /// Returns the language actually used alongside the text, so renderers
    /// can label the tab correctly. If the fallback is absent too (or not
    /// configured), the original missing-language error is propagated.
    pub fn resolve(
        &self,
        requested: Language,
        fallback: Option<Language>,
    ) -> Result<(Language, &'static str), SnippetError> {
        match self.get(requested) {
            Ok(code) => Ok((requested, code)),
            Err(err) => match fallback {
                Some(fb) if fb != requested => {
                    warn!(
                        slug = self.slug,
                        requested = %requested,
                        fallback = %fb,
                        "sample missing, trying fallback language"
                    );
                    self.get(fb).map(|code| (fb, code)).map_err(|_| err)
                }
                _ => Err(err),
            },
        }
    }

    /// Languages with an authored sample, in entry order.
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    /// The set of authored language keys, for set-equality comparisons
    /// across tables.
    pub fn language_set(&self) -> BTreeSet<Language> {
        self.languages().collect()
    }
}
