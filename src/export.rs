//! Catalog export for the documentation-site build.
//!
//! The site generator only needs language-keyed text blocks per operation;
//! this module flattens the static tables into a serde-friendly document and
//! serializes it as YAML or JSON.

use std::fmt;

use serde::Serialize;

use crate::catalog;
use crate::cli::OutputFormat;
use crate::language::Language;
use crate::snippet::SnippetTable;

/// Error type for export serialization.
#[derive(Debug)]
pub enum ExportError {
    /// YAML serialization error
    Yaml(serde_yaml::Error),
    /// JSON serialization error
    Json(serde_json::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml(e) => write!(f, "YAML serialize error: {}", e),
            Self::Json(e) => write!(f, "JSON serialize error: {}", e),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<serde_yaml::Error> for ExportError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Yaml(e)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// The whole catalog, ready for serialization.
#[derive(Debug, Serialize)]
pub struct CatalogExport {
    pub operations: Vec<OperationExport>,
}

/// One documented operation with all of its language samples.
#[derive(Debug, Serialize)]
pub struct OperationExport {
    pub slug: &'static str,
    pub title: &'static str,
    pub samples: Vec<SampleExport>,
}

/// A single language sample, verbatim.
#[derive(Debug, Serialize)]
pub struct SampleExport {
    pub language: Language,
    pub code: &'static str,
}

impl OperationExport {
    /// Flatten one table into its export form.
    pub fn from_table(table: &SnippetTable) -> Self {
        Self {
            slug: table.slug,
            title: table.title,
            samples: table
                .entries
                .iter()
                .map(|(language, code)| SampleExport {
                    language: *language,
                    code,
                })
                .collect(),
        }
    }
}

impl CatalogExport {
    /// Build the export document from every authored table.
    pub fn from_catalog() -> Self {
        Self {
            operations: catalog::TABLES
                .iter()
                .map(|table| OperationExport::from_table(table))
                .collect(),
        }
    }

    /// Serialize in the requested output format.
    pub fn render(&self, format: OutputFormat) -> Result<String, ExportError> {
        match format {
            OutputFormat::Yaml => Ok(serde_yaml::to_string(self)?),
            OutputFormat::Json => {
                let mut out = serde_json::to_string_pretty(self)?;
                out.push('\n');
                Ok(out)
            }
        }
    }
}
