//! # Storage Layer
//!
//! This module defines the storage abstraction for contacts. The [`DataStore`]
//! trait is what the command layer talks to; [`ContactStore`] is its only
//! implementation, parameterised over a raw [`StorageBackend`].
//!
//! ## Two Copies, One Write Path
//!
//! The store keeps two representations of the same data:
//! 1. **Truth**: the backing text file (`Contact.txt`), one record per line.
//! 2. **Working set**: an in-memory `Vec<Contact>`, loaded once when the store
//!    is opened.
//!
//! Every mutation goes through the same sequence:
//!
//! 1. Validate against the current file/memory state (nothing changed yet).
//! 2. Apply the change to the in-memory collection.
//! 3. Persist: append one line (insert) or rewrite the whole file (remove, update).
//! 4. If persisting fails, undo step 2 and return the I/O error.
//!
//! So memory and file never disagree after a failed write.
//!
//! ## Reads
//!
//! - [`DataStore::load`] always re-reads the file. Unreadable lines are logged
//!   and skipped; one bad line never hides the rest.
//! - [`DataStore::find_by_phone`] looks in memory first and falls back to the
//!   file (records appended by someone else since startup). A damaged line on
//!   that path is reported as "not found".
//! - [`DataStore::exists`] checks memory and the file's phone segments without
//!   decoding whole records, so a damaged record still blocks a duplicate.
//!
//! ## Ids
//!
//! New ids come from a high-water mark (highest id ever seen this session + 1),
//! so deleting the newest contact does not hand its id to the next one.
//!
//! ## Implementations
//!
//! - [`FileStore`]: `ContactStore<FsBackend>`, production.
//! - [`InMemoryStore`]: `ContactStore<MemBackend>`, for testing logic without
//!   filesystem I/O.
//!
//! Concurrency: single process, single thread. There is no file locking; two
//! processes editing the same file will lose updates.

use crate::error::Result;
use crate::model::Contact;
use std::path::{Path, PathBuf};

pub mod backend;
pub mod contact_store;
pub mod fs_backend;
pub mod mem_backend;

pub use contact_store::ContactStore;

use fs_backend::FsBackend;
use mem_backend::MemBackend;

/// Abstract interface for contact storage.
///
/// Implementations own the in-memory collection and keep it consistent
/// with the backing file.
pub trait DataStore {
    /// Decode every readable record from the backing file, in file order.
    fn load(&self) -> Result<Vec<Contact>>;

    /// The in-memory collection.
    fn contacts(&self) -> &[Contact];

    /// Whether a contact with this phone number is in memory or in the file.
    fn exists(&self, phone: &str) -> Result<bool>;

    /// The id the next inserted contact should get.
    fn next_id(&self) -> u32;

    /// Add a contact to memory and append it to the file.
    fn insert(&mut self, contact: Contact) -> Result<()>;

    /// Remove a contact from memory and rewrite the file without it.
    fn remove(&mut self, phone: &str) -> Result<Contact>;

    /// Look a contact up by phone number, memory first, then the file.
    fn find_by_phone(&self, phone: &str) -> Result<Option<Contact>>;

    /// Change name and e-mail of the record, leaving every other field alone.
    fn update_fields(&mut self, phone: &str, name: &str, email: Option<&str>) -> Result<Contact>;

    /// Replace the in-memory collection with what the file holds now.
    fn reload(&mut self) -> Result<()>;

    /// Where the backing file lives.
    fn location(&self) -> PathBuf;
}

pub type FileStore = ContactStore<FsBackend>;

impl FileStore {
    pub fn open_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        ContactStore::open(FsBackend::new(path.as_ref()))
    }
}

pub type InMemoryStore = ContactStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        ContactStore::empty(MemBackend::new())
    }

    /// Open a store whose "file" already holds these lines.
    pub fn from_lines<I, L>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        ContactStore::open(MemBackend::with_lines(lines))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::ContactType;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds `count` contacts with phones `555-0001`, `555-0002`, ...
        pub fn with_contacts(mut self, count: usize) -> Self {
            for i in 0..count {
                let contact = Contact::new(
                    self.store.next_id(),
                    format!("Contact {}", i + 1),
                    format!("555-{:04}", i + 1),
                    None,
                    ContactType::Personal,
                );
                self.store.insert(contact).unwrap();
            }
            self
        }
    }
}
