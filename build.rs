//! Generates a man page and shell completions at build time.
//!
//! The CLI and language modules are self-contained so they can be included
//! here without pulling in the rest of the crate.

use clap::CommandFactory;
use clap_complete::Shell;

#[allow(dead_code)]
#[path = "src/language.rs"]
mod language;

#[allow(dead_code)]
#[path = "src/cli.rs"]
mod cli;

use cli::Cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/language.rs");

    let out_dir = std::path::PathBuf::from(std::env::var_os("OUT_DIR").ok_or("OUT_DIR not set")?);

    let cmd = Cli::command();

    let man = clap_mangen::Man::new(cmd.clone());
    let mut buf = Vec::new();
    man.render(&mut buf)?;
    std::fs::write(out_dir.join("docsnips.1"), buf)?;

    let mut cmd = cmd;
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
        clap_complete::generate_to(shell, &mut cmd, "docsnips", &out_dir)?;
    }

    Ok(())
}
