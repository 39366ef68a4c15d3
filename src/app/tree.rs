use crate::app::error::{CollectError, Result};
use crate::app::filter::{basename, path_str, IgnoreRules};
use std::env;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Renders the box-drawn project structure for every search root.
///
/// Directory roots print their absolute path and then their sorted children;
/// file roots print only their basename. Ignored entries never appear and
/// ignored directories are not descended into.
pub fn render_tree(roots: &[PathBuf], ignore: &IgnoreRules) -> Result<String> {
    let mut lines = Vec::new();

    for root in roots {
        if root.is_dir() {
            let abs = absolute(root).map_err(|e| CollectError::io(root, e))?;
            lines.push(format!("{}{}", abs.display(), MAIN_SEPARATOR));
            render_dir(root, "", ignore, &mut lines)?;
        } else if root.is_file() && !ignore.should_ignore(root) {
            lines.push(basename(&path_str(root)).to_string());
        }
    }

    Ok(lines.join("\n"))
}

fn render_dir(dir: &Path, prefix: &str, ignore: &IgnoreRules, lines: &mut Vec<String>) -> Result<()> {
    let prefix = format!("{}{}", prefix, SPACE);

    let mut children = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| CollectError::io(dir, e))? {
        let entry = entry.map_err(|e| CollectError::io(dir, e))?;
        children.push(entry.file_name());
    }
    children.sort_by(|a, b| a.to_string_lossy().cmp(&b.to_string_lossy()));

    let count = children.len();
    for (index, file_name) in children.iter().enumerate() {
        let path = dir.join(file_name);
        let name = file_name.to_string_lossy();
        if ignore.should_ignore(&path) {
            continue;
        }
        // Position is taken from the full listing, ignored entries included.
        let last = index + 1 == count;
        let connector = if last { LAST_BRANCH } else { BRANCH };

        if path.is_dir() {
            lines.push(format!("{}{}{}{}", prefix, connector, name, MAIN_SEPARATOR));
            let child_prefix = format!("{}{}", prefix, if last { SPACE } else { PIPE });
            render_dir(&path, &child_prefix, ignore, lines)?;
        } else {
            lines.push(format!("{}{}{}", prefix, connector, name));
        }
    }

    Ok(())
}

/// Absolute form of `path` with `.` and `..` resolved lexically, symlinks untouched.
fn absolute(path: &Path) -> io::Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    Ok(normalized)
}
