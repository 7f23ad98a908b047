use super::backend::StorageBackend;
use crate::error::{ContactError, Result};
use std::cell::RefCell;
use std::io;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the store is single-threaded.
/// This keeps the `StorageBackend` trait on `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    lines: RefCell<Vec<String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from raw file content, one record per line.
    pub fn with_lines<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        let backend = Self::new();
        *backend.lines.borrow_mut() = lines.into_iter().map(Into::into).collect();
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Snapshot of the current "file" content.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Test helper to mimic another program editing the file.
    pub fn push_raw(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }

    fn check_writable(&self) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(ContactError::Io(io::Error::other("Simulated write error")));
        }
        Ok(())
    }
}

impl StorageBackend for MemBackend {
    fn read_lines(&self) -> Result<Vec<String>> {
        Ok(self.lines.borrow().clone())
    }

    fn append_line(&self, line: &str) -> Result<()> {
        self.check_writable()?;
        self.lines.borrow_mut().push(line.to_string());
        Ok(())
    }

    fn write_lines(&self, lines: &[String]) -> Result<()> {
        self.check_writable()?;
        *self.lines.borrow_mut() = lines.to_vec();
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://Contact.txt")
    }
}
