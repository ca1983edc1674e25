//! Greedy line wrapping for declaration bodies.

/// Separator appended after every rendered item.
const SEPARATOR: &str = ", ";

/// Greedy accumulator that packs rendered items into width-limited lines.
///
/// Items are taken left to right with no look-ahead or rebalancing: an item
/// that would push the current line past the width limit closes that line
/// first, however much room that wastes. Items are never split, so a single
/// item wider than the limit still occupies one full line — the width is a
/// soft target, not a hard cap.
///
/// Completed lines keep their trailing separator; [`finish`](Self::finish)
/// trims it from the last line only.
#[derive(Debug)]
pub struct LineWrapper {
    indent: String,
    max_width: usize,
    current: String,
    lines: Vec<String>,
}

impl LineWrapper {
    /// Create a wrapper producing lines indented by `indent` spaces and
    /// wrapped at `max_width` columns.
    #[must_use]
    pub fn new(indent: usize, max_width: usize) -> Self {
        let indent = " ".repeat(indent);
        LineWrapper {
            current: indent.clone(),
            indent,
            max_width,
            lines: Vec::new(),
        }
    }

    /// Append one rendered item, closing the current line first if the item
    /// plus its separator would not fit.
    pub fn push(&mut self, item: &str) {
        let projected = self.current.len() + item.len() + SEPARATOR.len();
        // Never flush an item-free buffer: an overlong first item goes on
        // the fresh line rather than after a whitespace-only one.
        if projected > self.max_width && self.current.len() > self.indent.len() {
            let full = std::mem::replace(&mut self.current, self.indent.clone());
            self.lines.push(full);
        }
        self.current.push_str(item);
        self.current.push_str(SEPARATOR);
    }

    /// Close the wrapper, trimming the trailing separator from the final
    /// partial line.
    ///
    /// A wrapper that never received an item yields no lines at all.
    #[must_use]
    pub fn finish(mut self) -> Vec<String> {
        if self.current.len() > self.indent.len() {
            self.current.truncate(self.current.len() - SEPARATOR.len());
            self.lines.push(self.current);
        }
        self.lines
    }
}
