//! CLI entry point for docsnips.

use std::io::Write;
use std::path::Path;

use clap::{CommandFactory, Parser};
use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing::debug;

use docsnips::catalog;
use docsnips::cli::Cli;
use docsnips::config::SnippetConfig;
use docsnips::export::CatalogExport;
use docsnips::language::Language;
use docsnips::logging::init_logging;
use docsnips::render;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "docsnips", &mut std::io::stdout());
        return Ok(());
    }

    let _guard = init_logging(cli.log_file.as_deref(), Some(&cli.log_level));

    let config = match cli.config {
        Some(ref path) => SnippetConfig::load(path)
            .wrap_err_with(|| format!("Failed to load config from {}", path.display()))?,
        None => SnippetConfig::default(),
    };
    debug!(?config, "effective configuration");

    if let Some(ref path) = cli.save_config {
        config
            .save(path)
            .wrap_err_with(|| format!("Failed to write config to {}", path.display()))?;
        eprintln!("Wrote config to {}", path.display());
        return Ok(());
    }

    if cli.languages {
        let mut stdout = std::io::stdout().lock();
        for language in Language::ALL {
            writeln!(stdout, "{}\t{}", language.key(), language.display_name())?;
        }
        return Ok(());
    }

    if cli.list {
        let mut stdout = std::io::stdout().lock();
        for table in catalog::TABLES {
            writeln!(stdout, "{}\t{}", table.slug, table.title)?;
        }
        return Ok(());
    }

    if cli.export {
        let format = cli.format.unwrap_or(config.output.format);
        let rendered = CatalogExport::from_catalog()
            .render(format)
            .wrap_err("Failed to serialize catalog")?;
        return write_output(cli.output.as_deref(), &rendered, "catalog");
    }

    // Show a single sample
    let slug = cli
        .operation
        .as_ref()
        .ok_or_else(|| eyre!("Operation slug is required"))?;

    let table = catalog::find(slug)
        .ok_or_else(|| eyre!("Unknown operation '{}' (see --list)", slug))?;

    let requested = cli.language.unwrap_or(config.docs.default_language);
    let (language, code) = table.resolve(requested, config.docs.fallback_language)?;

    if cli.color && cli.output.is_none() {
        print!("{}", render::highlight(code, language));
        Ok(())
    } else {
        write_output(cli.output.as_deref(), code, table.slug)
    }
}

/// Write to the output file if one was given, otherwise to stdout.
fn write_output(path: Option<&Path>, content: &str, what: &str) -> Result<()> {
    if let Some(path) = path {
        std::fs::write(path, content)
            .wrap_err_with(|| format!("Failed to write to {}", path.display()))?;
        eprintln!("Wrote {} to {}", what, path.display());
    } else {
        print!("{content}");
    }
    Ok(())
}
