//! Multi-language code sample catalog for API documentation pages.
//!
//! Every documented API operation has a [`SnippetTable`]: a static mapping
//! from a client [`Language`] to the literal example snippet shown in that
//! operation's tabbed code block. The tables are pure data; lookup is the
//! only operation, and missing keys surface as [`SnippetError`] so the
//! consumer decides the recovery policy.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod export;
pub mod language;
pub mod logging;
pub mod render;
pub mod snippet;

pub use language::{Language, UnknownLanguage};
pub use snippet::{SnippetError, SnippetTable};
