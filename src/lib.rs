//! Flattens source trees into a single text document: an optional directory
//! tree followed by one `Filepath:` record per collected file.

pub mod app;

pub use app::config::{load_config, resolve_config};
pub use app::error::{CollectError, ConfigError};
pub use app::filter::{FormatFilter, IgnoreRules};
pub use app::models::{CollectSummary, RuntimeConfig};
pub use app::{collect, run, run_from_config};
