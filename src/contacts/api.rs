//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every contact operation, whatever UI sits on top.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the store for the lifetime of the process
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`, `Result<Option<Contact>>`)
//!
//! It does not print, format, or decide exit codes. Invariant checks
//! (duplicates, existence) live in `commands/*.rs`.
//!
//! ## Generic Over DataStore
//!
//! `ContactsApi<S: DataStore>` is generic over the storage backend:
//! - Production: `ContactsApi<FileStore>`
//! - Testing: `ContactsApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::{Contact, ContactType};
use crate::store::DataStore;

/// The main API facade for contact operations.
pub struct ContactsApi<S: DataStore> {
    store: S,
    paths: commands::ContactsPaths,
}

impl<S: DataStore> ContactsApi<S> {
    pub fn new(store: S, paths: commands::ContactsPaths) -> Self {
        Self { store, paths }
    }

    pub fn add_contact(
        &mut self,
        name: &str,
        phone_number: &str,
        email: Option<&str>,
        contact_type: ContactType,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, name, phone_number, email, contact_type)
    }

    pub fn delete_contact(&mut self, phone_number: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, phone_number)
    }

    pub fn find_contact(&self, phone_number: &str) -> Result<Option<Contact>> {
        commands::find::run(&self.store, phone_number)
    }

    pub fn get_contact(&self, phone_number: &str) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, phone_number)
    }

    pub fn get_all_contacts(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn update_contact(
        &mut self,
        phone_number: &str,
        name: &str,
        email: Option<&str>,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, phone_number, name, email)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, ContactsPaths, MessageLevel};
