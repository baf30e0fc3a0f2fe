//! CLI argument definitions (build.rs compatible).
//!
//! This module contains only struct/enum definitions with no dependencies on
//! crate modules beyond [`Language`], allowing it to be included from
//! build.rs for man page and completion generation.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Output format selection.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// YAML format (default)
    #[default]
    Yaml,
    /// JSON format
    Json,
}

/// Multi-language API documentation snippet catalog.
#[derive(Parser, Debug)]
#[command(name = "docsnips")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Operation slug to show (e.g. messages/get-events)
    #[arg(required_unless_present_any = ["list", "languages", "export", "completions", "save_config"])]
    pub operation: Option<String>,

    /// Client language for the sample (default tab when omitted)
    #[arg(short, long, value_enum)]
    pub language: Option<Language>,

    /// List all documented operations
    #[arg(long)]
    pub list: bool,

    /// List the supported language keys
    #[arg(long)]
    pub languages: bool,

    /// Export the whole catalog for the documentation-site build
    #[arg(long)]
    pub export: bool,

    /// Output format for --export: yaml or json
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Highlight the sample for the terminal
    #[arg(long)]
    pub color: bool,

    /// Load configuration from TOML file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Save current configuration to TOML file
    #[arg(long, value_name = "FILE")]
    pub save_config: Option<PathBuf>,

    /// Log file path (stderr logging if not specified)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error (default: info)
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Generate shell completions for the specified shell
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}
