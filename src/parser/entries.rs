//! Token list parsing.
//!
//! Each input line is either blank (ignored) or carries exactly two
//! whitespace-separated tokens: a display string and an enum symbol. Which
//! token comes first is controlled by [`FieldOrder`]; lines with any other
//! token count are handled according to [`MalformedLinePolicy`].
//!
//! No identifier-syntax validation is performed: tokens flow verbatim into
//! the generated source, so malformed input produces malformed (but
//! structurally complete) output rather than a parse error.

use std::io::BufRead;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Result;

/// One (display string, enum symbol) pair from the input file.
///
/// File order is preserved end to end; it fixes the integer values the C
/// compiler implicitly assigns to the enum constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Text rendered quoted in the string table
    pub display: String,
    /// Identifier rendered bare in the enum block
    pub symbol: String,
}

/// Which of the two tokens on an input line comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldOrder {
    /// `<display> <SYMBOL>` per line
    Display,
    /// `<SYMBOL> <display>` per line
    Symbol,
}

impl FromStr for FieldOrder {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "display" => Ok(FieldOrder::Display),
            "symbol" => Ok(FieldOrder::Symbol),
            other => anyhow::bail!("unknown field order '{other}' (expected 'display' or 'symbol')"),
        }
    }
}

/// What to do with a non-blank line that does not split into exactly two
/// tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedLinePolicy {
    /// Ignore the line silently
    Skip,
    /// Abort with an error naming the offending line
    Fail,
}

impl FromStr for MalformedLinePolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "skip" => Ok(MalformedLinePolicy::Skip),
            "fail" => Ok(MalformedLinePolicy::Fail),
            other => anyhow::bail!("unknown malformed-line policy '{other}' (expected 'skip' or 'fail')"),
        }
    }
}

/// Parse the ordered entry list from a reader.
///
/// Entry order is the input line order. Blank and whitespace-only lines are
/// skipped under either policy.
pub fn parse_entries<R: BufRead>(
    reader: R,
    order: FieldOrder,
    policy: MalformedLinePolicy,
) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();

        match tokens.as_slice() {
            [] => {}
            [first, second] => {
                let (display, symbol) = match order {
                    FieldOrder::Display => (first, second),
                    FieldOrder::Symbol => (second, first),
                };
                entries.push(Entry {
                    display: (*display).to_string(),
                    symbol: (*symbol).to_string(),
                });
            }
            other => {
                if policy == MalformedLinePolicy::Fail {
                    anyhow::bail!(
                        "line {}: expected 2 whitespace-separated fields, found {}",
                        index + 1,
                        other.len()
                    );
                }
            }
        }
    }

    Ok(entries)
}
