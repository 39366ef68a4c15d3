use std::borrow::Cow;
use std::path::{Path, MAIN_SEPARATOR};

/// Exclusion rules. The two front ends interpret their rules differently,
/// so each keeps its own mode instead of sharing one merged behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreRules {
    /// Config-file rules: `dirs` are raw string prefixes, `files` exact basenames.
    Split { files: Vec<String>, dirs: Vec<String> },
    /// Command-line rules: every entry is both a directory prefix and a basename.
    /// Dotfiles are hidden unless their full path is listed.
    Merged { paths: Vec<String> },
}

impl IgnoreRules {
    pub fn should_ignore(&self, path: &Path) -> bool {
        let path = path_str(path);
        let name = basename(&path);

        match self {
            IgnoreRules::Split { files, dirs } => {
                dirs.iter().any(|dir| path.starts_with(dir.as_str()))
                    || files.iter().any(|file| file == name)
            }
            IgnoreRules::Merged { paths } => {
                let under_prefix = paths.iter().any(|rule| {
                    let prefix =
                        format!("{}{}", rule.trim_end_matches(MAIN_SEPARATOR), MAIN_SEPARATOR);
                    path.starts_with(&prefix)
                });
                if under_prefix || paths.iter().any(|rule| rule == name) {
                    return true;
                }
                // An exact full-path entry lifts the dotfile rule for that one path.
                name.starts_with('.') && !paths.iter().any(|rule| *rule == *path)
            }
        }
    }
}

/// Allowlist of filename suffixes. Empty accepts every file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatFilter {
    formats: Vec<String>,
}

impl FormatFilter {
    pub fn new(formats: Vec<String>) -> Self {
        Self { formats }
    }

    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    pub fn accepts(&self, path: &Path) -> bool {
        if self.formats.is_empty() {
            return true;
        }
        let path = path_str(path);
        self.formats.iter().any(|format| path.ends_with(format.as_str()))
    }
}

pub(crate) fn path_str(path: &Path) -> Cow<'_, str> {
    path.as_os_str().to_string_lossy()
}

/// Text after the last separator, so `"dir/"` has an empty basename.
pub(crate) fn basename(path: &str) -> &str {
    path.rsplit(MAIN_SEPARATOR).next().unwrap_or(path)
}
