//! # Contacts Architecture
//!
//! Contacts is a **UI-agnostic contact list library** with a thin CLI on top.
//! The contact list lives in a plain text file (`Contact.txt`), one record per
//! line, readable and fixable by hand.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders tables, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the store                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Uniqueness and existence rules, input validation         │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, codec.rs)                           │
//! │  - ContactStore: in-memory collection kept in sync with     │
//! │    the backing file                                         │
//! │  - StorageBackend: FsBackend (production), MemBackend (test)│
//! │  - codec: the one-line text format                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the
//! process. Diagnostics go through `tracing`; outcomes meant for the user are
//! returned as [`commands::CmdMessage`]s for the UI to render.
//!
//! ## Testing Strategy
//!
//! 1. **Codec** and **store**: unit tests against `MemBackend`, including
//!    simulated write failures.
//! 2. **Commands**: business rules against `InMemoryStore`.
//! 3. **API**: dispatch checks.
//! 4. **Integration** (`tests/`): real files through `FsBackend` and the
//!    compiled binary.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`codec`]: Record line encoding and decoding
//! - [`model`]: Core data types (`Contact`, `ContactType`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
