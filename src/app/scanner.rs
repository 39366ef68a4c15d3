use crate::app::error::Result;
use crate::app::filter::{FormatFilter, IgnoreRules};
use ignore::WalkBuilder;
use std::path::Path;

/// Emits every surviving file of one search root.
///
/// A plain file is checked directly; a directory is walked. Anything else is skipped.
pub fn collect_root<F>(root: &Path, formats: &FormatFilter, ignore: &IgnoreRules, emit: &mut F) -> Result<()>
where
    F: FnMut(&Path) -> Result<()>,
{
    if root.is_file() {
        if !ignore.should_ignore(root) && formats.accepts(root) {
            emit(root)?;
        }
        Ok(())
    } else if root.is_dir() {
        walk(root, formats, ignore, emit)
    } else {
        log::warn!("Skipping {}: not a file or directory", root.display());
        Ok(())
    }
}

/// Depth-first walk below `root`. Ignored directories are pruned before descent,
/// so nothing inside them is ever inspected. Files come out in listing order.
pub fn walk<F>(root: &Path, formats: &FormatFilter, ignore: &IgnoreRules, emit: &mut F) -> Result<()>
where
    F: FnMut(&Path) -> Result<()>,
{
    let rules = ignore.clone();

    // Our own rules replace every built-in filter (hidden, .gitignore, parents).
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .filter_entry(move |entry| entry.depth() == 0 || !rules.should_ignore(entry.path()))
        .build();

    for result in walker {
        match result {
            Ok(entry) => {
                if entry.depth() == 0 {
                    continue;
                }
                let path = entry.path();
                // Symlinked directories are listed but never entered or emitted.
                if path.is_dir() {
                    continue;
                }
                if formats.accepts(path) {
                    emit(path)?;
                }
            }
            Err(err) => log::warn!("Error walking entry: {}", err),
        }
    }

    Ok(())
}
