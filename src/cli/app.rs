//! Main CLI application structure

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use super::output::{Output, OutputFormat};
use super::session::Session;
use crate::config::Config;
use crate::domain::Registry;

#[derive(Parser)]
#[command(name = "docshelf")]
#[command(author, version, about = "In-memory document filing console")]
pub struct Cli {
    /// Output format (defaults to the configured format, then text)
    #[arg(long, short = 'f')]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Configuration file
    #[arg(long, env = "DOCSHELF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Start with an empty registry, ignoring the configured seed
    #[arg(long)]
    pub no_seed: bool,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let format = cli.format.unwrap_or(config.default_format);
    let output = Output::new(io::stdout().lock(), format, cli.verbose);

    output.verbose("docshelf starting");
    match &config.source {
        Some(path) => output.verbose_ctx("config", &format!("Loaded {}", path.display())),
        None => output.verbose_ctx("config", "Using defaults"),
    }

    let mut registry = if cli.no_seed {
        Registry::new()
    } else {
        Registry::from_seed(&config.seed).context("Invalid seed in configuration")?
    };
    output.verbose_ctx(
        "registry",
        &format!(
            "{} document(s) on {} shelf(s)",
            registry.len(),
            registry.shelf_count()
        ),
    );

    let mut session = Session::new(&mut registry, io::stdin().lock(), output)
        .with_prompt(config.prompt.as_str());
    session.run().context("Command loop failed")?;

    Ok(())
}
