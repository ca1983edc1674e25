//! Generation pipeline.
//!
//! The main entry point is [`generate`], which reads a token list from a
//! buffered reader and writes both declaration blocks to any `Write`
//! implementation.

pub mod pipeline;

pub use pipeline::generate;
