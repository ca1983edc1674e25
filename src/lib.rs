//! enumgen - C enum and string-table generator
//!
//! Reads a whitespace-delimited list of (display string, enum symbol) pairs
//! and emits an `enum { ... };` declaration plus a matching
//! `const char *name[] = { ... };` string table, greedily line-wrapped to a
//! configured column width.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod parser;
pub mod process;

// Re-export commonly used types
pub use cli::{build_cli, parse_args, parse_args_from, CliArgs};
pub use config::Config;
pub use error::Result;
pub use format::LineWrapper;
pub use parser::{Entry, FieldOrder, MalformedLinePolicy};
