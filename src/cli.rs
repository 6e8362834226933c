//! Command-line front end.
//!
//! Expands a shorthand file to standard CSS on stdout, so the same rules a
//! document would load at runtime can be preprocessed ahead of time:
//!
//! ```text
//! stenocss site.sncss --theme dark > site.css
//! ```
//!
//! Skipped-fragment diagnostics go to stderr with `--verbose`.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use console::style;

use crate::config::{EngineConfig, InitialTheme};
use crate::engine::StyleEngine;

/// Expand a shorthand stylesheet to standard CSS.
#[derive(Debug, Parser)]
#[command(name = "stenocss", version, about)]
pub struct Cli {
    /// Shorthand input file.
    pub input: PathBuf,

    /// Theme to expand with, or "auto" to detect the OS color mode.
    #[arg(long, default_value = "light")]
    pub theme: String,

    /// Engine configuration file (JSON).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report skipped fragments on stderr.
    #[arg(long)]
    pub verbose: bool,
}

/// Runs the command-line front end.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            EngineConfig::from_json(&json)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => EngineConfig::default(),
    };
    config.initial_theme = if cli.theme == "auto" {
        InitialTheme::Detect
    } else {
        InitialTheme::Fixed(cli.theme.clone())
    };

    let engine = StyleEngine::new(config);

    let text = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    let (css, skipped) = engine.expand_with_diagnostics(&text);

    if cli.verbose {
        for fragment in &skipped {
            eprintln!("{} {}", style("skipped:").yellow().bold(), fragment);
        }
    }

    println!("{css}");
    Ok(())
}
