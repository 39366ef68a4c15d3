use crate::app::models::DEFAULT_OUTPUT;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Collect code from files and directories into a single text file"
)]
pub struct Cli {
    /// Files or directories to collect from
    #[arg(required = true, value_parser = existing_path)]
    pub paths: Vec<PathBuf>,

    /// File formats to include (e.g., '.rs'). If not specified, all files are included
    #[arg(long, short = 'f')]
    pub formats: Vec<String>,

    /// Paths (files or directories) to ignore
    #[arg(long, short = 'i', value_parser = path_value)]
    pub ignore_paths: Vec<String>,

    /// Output file name
    #[arg(long, short = 'o', default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Use a predefined set of options from presets.toml
    #[arg(long)]
    pub preset: Option<String>,
}

fn existing_path(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if path.exists() {
        Ok(path)
    } else {
        Err(format!("Path '{}' does not exist.", value))
    }
}

fn path_value(value: &str) -> Result<String, String> {
    if value.is_empty() {
        Err("Path must not be empty.".to_string())
    } else {
        Ok(value.to_string())
    }
}
