use crate::app::cli::Cli;
use crate::app::error::{ConfigError, Result};
use crate::app::filter::{FormatFilter, IgnoreRules};
use crate::app::models::{RuntimeConfig, DEFAULT_OUTPUT};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the declarative config, resolved against the working directory.
pub const CONFIG_FILE: &str = "config.yaml";

/// Keys other than these four are ignored.
#[derive(Deserialize, Debug)]
struct ConfigFile {
    paths_to_search: Vec<PathBuf>,
    file_formats: Vec<String>,
    ignore_files: Vec<String>,
    ignore_dirs: Vec<String>,
}

#[derive(Deserialize, Debug)]
struct PresetsFile {
    #[serde(flatten)]
    presets: HashMap<String, PresetConfig>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct PresetConfig {
    pub formats: Option<Vec<String>>,
    pub ignore_paths: Option<Vec<String>>,
}

/// Loads the YAML config used by the config-driven front end.
pub fn load_config(path: &Path) -> Result<RuntimeConfig> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_config(&content, path)?)
}

fn parse_config(content: &str, path: &Path) -> std::result::Result<RuntimeConfig, ConfigError> {
    let parsed: ConfigFile = serde_yaml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if parsed.file_formats.is_empty() {
        return Err(ConfigError::EmptyFormats);
    }

    Ok(RuntimeConfig {
        paths: parsed.paths_to_search,
        formats: FormatFilter::new(parsed.file_formats),
        ignore: IgnoreRules::Split {
            files: parsed.ignore_files,
            dirs: parsed.ignore_dirs,
        },
        output: PathBuf::from(DEFAULT_OUTPUT),
        include_tree: false,
    })
}

/// `~/.config/code_collector/presets.toml`
pub fn presets_path() -> std::result::Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(".config").join("code_collector").join("presets.toml"))
}

/// A missing presets file is an empty table.
pub fn load_presets_file(
    path: &Path,
) -> std::result::Result<HashMap<String, PresetConfig>, ConfigError> {
    if !path.exists() {
        return Ok(HashMap::new());
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed: PresetsFile = toml::from_str(&content).map_err(|source| ConfigError::Presets {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parsed.presets)
}

/// Preset values first, then command-line values, without duplicates.
fn merge_vecs(preset_vec: Option<Vec<String>>, cli_vec: Vec<String>) -> Vec<String> {
    let mut combined = preset_vec.unwrap_or_default();
    combined.extend(cli_vec);
    let mut seen = HashSet::new();
    combined.retain(|item| seen.insert(item.clone()));
    combined
}

/// Builds the config for the flag-driven front end. Presets are read only
/// when `--preset` is given.
pub fn resolve_config(cli: Cli) -> Result<RuntimeConfig> {
    let presets = match cli.preset {
        Some(_) => load_presets_file(&presets_path()?)?,
        None => HashMap::new(),
    };
    Ok(resolve_with_presets(cli, &presets)?)
}

pub fn resolve_with_presets(
    cli: Cli,
    presets: &HashMap<String, PresetConfig>,
) -> std::result::Result<RuntimeConfig, ConfigError> {
    let preset = match cli.preset.as_deref() {
        Some(name) => presets
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))?,
        None => PresetConfig::default(),
    };

    Ok(RuntimeConfig {
        paths: cli.paths,
        formats: FormatFilter::new(merge_vecs(preset.formats, cli.formats)),
        ignore: IgnoreRules::Merged {
            paths: merge_vecs(preset.ignore_paths, cli.ignore_paths),
        },
        output: cli.output,
        include_tree: true,
    })
}
