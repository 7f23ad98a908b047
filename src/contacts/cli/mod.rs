//! # CLI Behavior
//!
//! This is **one possible UI client** for the contacts library. It is the only
//! place that knows about terminal I/O, exit codes, and output formatting.
//!
//! For the overall architecture, see the crate-level documentation of the
//! `contacts` library.
//!
//! ## Defaults
//!
//! Running `contacts` with no arguments lists every contact. The backing file
//! is `Contact.txt` in the working directory, unless `contacts.json` there says
//! otherwise or `--file` is given.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print results
//! - `render`: Output formatting (tables, detail blocks, colored messages)
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
