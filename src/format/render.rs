//! Rendering of the two declaration blocks.
//!
//! Each block is a header line (`enum {`, `enum Name {`, or
//! `const char *name[] = {`), zero or more wrapped content lines, and a
//! closing `};`. A block with no entries renders as header and closer only,
//! with no empty content line between them.

use crate::config::Config;
use crate::format::LineWrapper;
use crate::parser::Entry;

/// Build the `enum { ... };` block lines.
///
/// Symbols are emitted bare, in entry order; `config.enum_name` names the
/// enum type, or leaves it anonymous when unset.
#[must_use]
pub fn enum_block(entries: &[Entry], config: &Config) -> Vec<String> {
    let header = match &config.enum_name {
        Some(name) => format!("enum {name} {{"),
        None => "enum {".to_string(),
    };
    let items = entries.iter().map(|entry| entry.symbol.clone());
    render_block(header, items, config)
}

/// Build the `const char *name[] = { ... };` block lines.
///
/// Display strings are emitted between double quotes, verbatim and
/// unescaped, in entry order.
#[must_use]
pub fn array_block(entries: &[Entry], config: &Config) -> Vec<String> {
    let header = format!("const char *{}[] = {{", config.array_name);
    let items = entries.iter().map(|entry| format!("\"{}\"", entry.display));
    render_block(header, items, config)
}

/// Wrap rendered items between a header line and the closing `};`.
fn render_block<I>(header: String, items: I, config: &Config) -> Vec<String>
where
    I: Iterator<Item = String>,
{
    let mut wrapper = LineWrapper::new(config.indent, config.line_length);
    for item in items {
        wrapper.push(&item);
    }

    let mut lines = vec![header];
    lines.extend(wrapper.finish());
    lines.push("};".to_string());
    lines
}
