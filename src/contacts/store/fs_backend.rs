use super::backend::StorageBackend;
use crate::error::{ContactError, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use tracing::warn;

pub const DEFAULT_DATA_FILE: &str = "Contact.txt";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ContactError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(DEFAULT_DATA_FILE);
        self.path
            .with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
    }
}

impl Default for FsBackend {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

impl StorageBackend for FsBackend {
    fn read_lines(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let bytes = fs::read(&self.path).map_err(ContactError::Io)?;
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);

        let mut raw_lines: Vec<&[u8]> = bytes.split(|b| *b == b'\n').collect();
        if raw_lines.last().is_some_and(|l| l.is_empty()) {
            raw_lines.pop();
        }

        let lines = raw_lines
            .into_iter()
            .enumerate()
            .map(|(n, raw)| {
                let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
                match std::str::from_utf8(raw) {
                    Ok(line) => line.to_string(),
                    Err(_) => {
                        warn!(
                            file = %self.path.display(),
                            line = n + 1,
                            "Line is not valid UTF-8, replacing invalid bytes"
                        );
                        String::from_utf8_lossy(raw).into_owned()
                    }
                }
            })
            .collect();
        Ok(lines)
    }

    fn append_line(&self, line: &str) -> Result<()> {
        self.ensure_parent()?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(ContactError::Io)?;
        writeln!(file, "{}", line).map_err(ContactError::Io)?;
        Ok(())
    }

    fn write_lines(&self, lines: &[String]) -> Result<()> {
        self.ensure_parent()?;

        let mut content = lines.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }

        // Atomic Write
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, content).map_err(ContactError::Io)?;
        fs::rename(&tmp_path, &self.path).map_err(ContactError::Io)?;

        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}
