//! Parse-then-render generation pipeline.
//!
//! Both declaration blocks are rendered fully in memory before anything is
//! written, so a malformed line under the fail policy never leaves partial
//! output behind.

use std::io::{BufRead, Write};

use crate::config::Config;
use crate::format::{array_block, enum_block};
use crate::parser::parse_entries;
use crate::Result;

/// Read entries from `input` and write the enum block and the string table,
/// separated by one blank line, to `output`.
pub fn generate<R: BufRead, W: Write>(input: R, output: &mut W, config: &Config) -> Result<()> {
    let entries = parse_entries(input, config.first_field, config.on_malformed)?;

    let mut lines = enum_block(&entries, config);
    lines.push(String::new());
    lines.extend(array_block(&entries, config));

    for line in &lines {
        writeln!(output, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use crate::parser::{FieldOrder, MalformedLinePolicy};

    fn run(input: &str, config: &Config) -> Result<String> {
        let mut output = Vec::new();
        generate(Cursor::new(input), &mut output, config)?;
        Ok(String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_two_entry_output() {
        let output = run("foo TOK_FOO\nbar TOK_BAR\n", &Config::default()).unwrap();
        assert_eq!(
            output,
            "enum {\n  TOK_FOO, TOK_BAR\n};\n\nconst char *tokens[] = {\n  \"foo\", \"bar\"\n};\n"
        );
    }

    #[test]
    fn test_named_symbol_first_output() {
        let config = Config {
            enum_name: Some("Color".to_string()),
            array_name: "color_names".to_string(),
            first_field: FieldOrder::Symbol,
            on_malformed: MalformedLinePolicy::Fail,
            ..Default::default()
        };
        let output = run("RED red\nGREEN green\n", &config).unwrap();
        assert_eq!(
            output,
            "enum Color {\n  RED, GREEN\n};\n\nconst char *color_names[] = {\n  \"red\", \"green\"\n};\n"
        );
    }

    #[test]
    fn test_empty_input_emits_bare_blocks() {
        let output = run("", &Config::default()).unwrap();
        assert_eq!(output, "enum {\n};\n\nconst char *tokens[] = {\n};\n");
    }

    #[test]
    fn test_fail_policy_writes_nothing() {
        let config = Config {
            on_malformed: MalformedLinePolicy::Fail,
            ..Default::default()
        };
        let mut output = Vec::new();
        let result = generate(
            Cursor::new("foo TOK_FOO\nbroken line here\n"),
            &mut output,
            &config,
        );
        assert!(result.is_err());
        assert!(output.is_empty(), "partial output was written");
    }

    #[test]
    fn test_idempotent_output() {
        let input = "alpha TOK_ALPHA\nbeta TOK_BETA\ngamma TOK_GAMMA\n";
        let config = Config::default();
        let first = run(input, &config).unwrap();
        let second = run(input, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_wrapped_output_round_trips_entries() {
        let input: String = (0..30)
            .map(|i| format!("word{i} TOK_WORD_{i}\n"))
            .collect();
        let config = Config {
            line_length: 40,
            ..Default::default()
        };
        let output = run(&input, &config).unwrap();

        // Recover the symbols from the enum block content lines
        let enum_body: Vec<&str> = output
            .lines()
            .skip(1)
            .take_while(|line| *line != "};")
            .collect();
        let mut symbols = Vec::new();
        for line in enum_body {
            assert!(line.len() <= 40, "line too wide: {line:?}");
            for item in line.trim().trim_end_matches(',').split(", ") {
                symbols.push(item.trim_end_matches(',').to_string());
            }
        }
        let expected: Vec<String> = (0..30).map(|i| format!("TOK_WORD_{i}")).collect();
        assert_eq!(symbols, expected);
    }
}
