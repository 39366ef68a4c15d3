// Declare modules
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod formatter;
pub mod models;
pub mod scanner;
pub mod tree;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;

use self::cli::Cli;
use self::config::{load_config, resolve_config, CONFIG_FILE};
use self::formatter::OutputWriter;
use self::models::{CollectSummary, RuntimeConfig};
use self::scanner::collect_root;
use self::tree::render_tree;

/// Logs go to stderr; `RUST_LOG` overrides the default `warn` level.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// Flag-driven front end: parse args, resolve presets, collect.
pub fn run() -> Result<()> {
    let args = Cli::parse();
    let config = resolve_config(args).context("Failed to resolve configuration")?;
    finish(&config)
}

/// Config-driven front end: reads `config.yaml` from the working directory.
pub fn run_from_config() -> Result<()> {
    let config = load_config(Path::new(CONFIG_FILE))?;
    finish(&config)
}

fn finish(config: &RuntimeConfig) -> Result<()> {
    let summary = collect(config)
        .with_context(|| format!("Failed to collect code into {}", config.output.display()))?;

    if summary.files == 0 {
        log::warn!("No files matched; {} holds no file records", config.output.display());
    } else {
        log::info!(
            "Wrote {} files ({} bytes) to {}",
            summary.files,
            summary.bytes,
            config.output.display()
        );
    }
    Ok(())
}

/// Writes the whole output document for `config`. The first failure aborts the run,
/// leaving whatever was already written in place.
pub fn collect(config: &RuntimeConfig) -> error::Result<CollectSummary> {
    let mut writer = OutputWriter::create(&config.output)?;

    if config.formats.is_empty() {
        log::debug!("No format filter given; collecting every file");
    }

    if config.include_tree {
        let tree = render_tree(&config.paths, &config.ignore)?;
        writer.write_prelude(&tree)?;
    }

    for root in &config.paths {
        collect_root(root, &config.formats, &config.ignore, &mut |path: &Path| writer.emit(path))?;
    }

    let (_, summary) = writer.finish()?;
    Ok(summary)
}
