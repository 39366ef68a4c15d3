use crate::app::error::{CollectError, Result};
use crate::app::models::CollectSummary;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const SEPARATOR: &str = "================";

#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Appends file records to the output document in call order.
pub struct OutputWriter<W: Write> {
    out: W,
    dest: PathBuf,
    summary: CollectSummary,
}

impl OutputWriter<BufWriter<File>> {
    /// Creates (or truncates) the output file.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|e| CollectError::io(path, e))?;
        Ok(Self::new(BufWriter::new(file), path))
    }
}

impl<W: Write> OutputWriter<W> {
    pub fn new(out: W, dest: impl Into<PathBuf>) -> Self {
        Self {
            out,
            dest: dest.into(),
            summary: CollectSummary::default(),
        }
    }

    pub fn write_prelude(&mut self, tree: &str) -> Result<()> {
        let tree = tree.replace('\n', LINE_ENDING);
        let prelude = format!(
            "Project Structure:{le}{tree}{le}{le}Code Files:{le}{sep}{le}",
            le = LINE_ENDING,
            sep = SEPARATOR
        );
        self.write(prelude.as_bytes())
    }

    /// Reads `path` fully and writes its record: header, raw content, separator.
    pub fn emit(&mut self, path: &Path) -> Result<()> {
        let bytes = fs::read(path).map_err(|e| CollectError::io(path, e))?;
        let content = String::from_utf8(bytes).map_err(|source| CollectError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!("Emitting {}", path.display());
        let header = format!("Filepath: {}{}", path.display(), LINE_ENDING);
        self.write(header.as_bytes())?;
        self.write(content.as_bytes())?;
        let footer = format!("{le}{sep}{le}", le = LINE_ENDING, sep = SEPARATOR);
        self.write(footer.as_bytes())?;

        self.summary.files += 1;
        self.summary.bytes += content.len();
        Ok(())
    }

    /// Flushes buffered output and hands back the sink with the run summary.
    pub fn finish(mut self) -> Result<(W, CollectSummary)> {
        self.out
            .flush()
            .map_err(|e| CollectError::io(&self.dest, e))?;
        Ok((self.out, self.summary))
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.out
            .write_all(bytes)
            .map_err(|e| CollectError::io(&self.dest, e))
    }
}
