use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Problems with the configuration document, presets or flags.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config at {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse config at {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Failed to parse presets at {path:?}: {source}")]
    Presets {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("'file_formats' must list at least one suffix")]
    EmptyFormats,
    #[error("Unknown preset '{0}'")]
    UnknownPreset(String),
    #[error("Could not determine home directory")]
    NoHomeDir,
}

#[derive(Debug, Error)]
pub enum CollectError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("File content for {path:?} is not valid UTF-8")]
    Decode {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },
}

impl CollectError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CollectError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CollectError>;
