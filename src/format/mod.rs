//! Declaration formatting.
//!
//! - [`wrap`]: greedy width-limited packing of rendered items into lines
//! - [`render`]: assembly of the enum and string-table blocks

pub mod render;
pub mod wrap;

pub use render::{array_block, enum_block};
pub use wrap::LineWrapper;
