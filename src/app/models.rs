use std::path::PathBuf;

use crate::app::filter::{FormatFilter, IgnoreRules};

/// Default destination shared by both front ends.
pub const DEFAULT_OUTPUT: &str = "collected_code.txt";

/// Represents the final configuration after reading the config file or flags.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub paths: Vec<PathBuf>,
    pub formats: FormatFilter,
    pub ignore: IgnoreRules,
    pub output: PathBuf,
    pub include_tree: bool, // Prepend the project structure section
}

/// What a finished run wrote.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CollectSummary {
    pub files: usize,
    pub bytes: usize,
}
