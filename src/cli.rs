//! Command-line interface for enumgen.
//!
//! Defines CLI arguments using clap builder API
//!
//! Two invocation shapes are supported:
//! - `enumgen <FILE>` generates an anonymous enum and a `tokens` table from
//!   `<display> <SYMBOL>` lines, silently skipping malformed lines.
//! - `enumgen <FILE> <ENUM_NAME> <ARRAY_NAME>` generates named declarations
//!   from `<SYMBOL> <display>` lines and fails on malformed lines.
//!
//! `--first-field` and `--on-malformed` override either shape's defaults.

use std::path::PathBuf;

use clap::{Arg, Command};

use crate::parser::{FieldOrder, MalformedLinePolicy};

/// CLI arguments parsed from command line
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// Token list file to read
    pub input: PathBuf,

    /// Enum type name (selects named-declaration mode)
    pub enum_name: Option<String>,

    /// String-table variable name (named-declaration mode)
    pub array_name: Option<String>,

    /// Spaces of indentation on content lines
    pub indent: Option<usize>,

    /// Maximum line length
    pub line_length: Option<usize>,

    /// Which token comes first on each input line
    pub first_field: Option<FieldOrder>,

    /// Policy for lines without exactly two tokens
    pub on_malformed: Option<MalformedLinePolicy>,

    /// Config file path
    pub config: Option<PathBuf>,
}

/// Build the clap Command for parsing CLI arguments
#[must_use]
pub fn build_cli() -> Command {
    Command::new("enumgen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generates C enum declarations and matching string tables from token lists")
        .arg(
            Arg::new("input")
                .help("Token list file (one '<display> <SYMBOL>' pair per line)")
                .value_name("FILE")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("enum-name")
                .help("Name for the generated enum type (requires ARRAY_NAME)")
                .value_name("ENUM_NAME")
                .requires("array-name"),
        )
        .arg(
            Arg::new("array-name")
                .help("Name for the generated string-table variable")
                .value_name("ARRAY_NAME")
                .requires("enum-name"),
        )
        .arg(
            Arg::new("indent")
                .short('i')
                .long("indent")
                .help("Spaces of indentation on content lines [default: 2]")
                .value_name("NUM")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("line-length")
                .short('l')
                .long("line-length")
                .help("Maximum line length [default: 70]")
                .value_name("NUM")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("first-field")
                .long("first-field")
                .help("Which token comes first on each input line [default: display, or symbol with ENUM_NAME]")
                .value_name("ORDER")
                .value_parser(["display", "symbol"]),
        )
        .arg(
            Arg::new("on-malformed")
                .long("on-malformed")
                .help("Handling of lines without exactly two tokens [default: skip, or fail with ENUM_NAME]")
                .value_name("POLICY")
                .value_parser(["skip", "fail"]),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to configuration file (overrides auto-discovery)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

/// Parse CLI arguments from command line
#[must_use]
pub fn parse_args() -> CliArgs {
    args_from_matches(&build_cli().get_matches())
}

/// Parse CLI arguments from an iterator (for testing)
#[must_use]
pub fn parse_args_from<I, T>(args: I) -> CliArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    args_from_matches(&build_cli().get_matches_from(args))
}

/// Convert clap `ArgMatches` to `CliArgs`
fn args_from_matches(matches: &clap::ArgMatches) -> CliArgs {
    CliArgs {
        input: matches
            .get_one::<PathBuf>("input")
            .cloned()
            .unwrap_or_default(),
        enum_name: matches.get_one::<String>("enum-name").cloned(),
        array_name: matches.get_one::<String>("array-name").cloned(),
        indent: matches.get_one::<usize>("indent").copied(),
        line_length: matches.get_one::<usize>("line-length").copied(),
        // Values are constrained by the clap possible-value lists above
        first_field: matches
            .get_one::<String>("first-field")
            .and_then(|s| s.parse().ok()),
        on_malformed: matches
            .get_one::<String>("on-malformed")
            .and_then(|s| s.parse().ok()),
        config: matches.get_one::<PathBuf>("config").cloned(),
    }
}
