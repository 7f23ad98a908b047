use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw line storage.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while ContactStore handles the "what" (contacts, codec, sync).
pub trait StorageBackend {
    /// Read every line of the backing file.
    /// A missing file is an empty store, not an error.
    fn read_lines(&self) -> Result<Vec<String>>;

    /// Append one line to the end of the backing file, creating it if needed.
    fn append_line(&self, line: &str) -> Result<()>;

    /// Replace the whole backing file.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial rewrites.
    fn write_lines(&self, lines: &[String]) -> Result<()>;

    /// Where the lines live. For FsBackend this is the real path,
    /// for MemBackend a virtual one.
    fn location(&self) -> PathBuf;
}
