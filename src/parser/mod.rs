//! Input parsing.
//!
//! Turns the token list file into the ordered [`Entry`] list that drives
//! both declaration blocks.

pub mod entries;

pub use entries::{parse_entries, Entry, FieldOrder, MalformedLinePolicy};
