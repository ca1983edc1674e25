//! Error handling infrastructure for enumgen.
//!
//! - [`Result<T>`]: type alias for `anyhow::Result<T>` used throughout the crate

use anyhow::Result as AnyhowResult;

pub type Result<T> = AnyhowResult<T>;
