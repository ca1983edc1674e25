//! enumgen - C enum and string-table generator

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::fs::File;
use std::io::{self, BufReader, Write};

use anyhow::Context;
use enumgen::process::generate;
use enumgen::{parse_args, CliArgs, Config, FieldOrder, MalformedLinePolicy, Result};

fn main() -> Result<()> {
    let args = parse_args();
    let config = build_config(&args)?;

    let file = File::open(&args.input)
        .with_context(|| format!("failed to open {}", args.input.display()))?;
    let reader = BufReader::new(file);

    // Render everything before printing so errors never leave partial output
    let mut buffer = Vec::new();
    generate(reader, &mut buffer, &config)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(&buffer)?;

    Ok(())
}

/// Build configuration from config files and CLI args
///
/// Precedence, lowest to highest: built-in defaults, discovered or explicit
/// TOML files, the named-declaration positionals, then individual flags.
fn build_config(args: &CliArgs) -> Result<Config> {
    let mut config = if let Some(config_path) = &args.config {
        // Explicit config file specified
        Config::from_toml_file(config_path).with_context(|| {
            format!("failed to load config file {}", config_path.display())
        })?
    } else {
        // Auto-discover config files from the input file's parent directories
        Config::from_discovered_files(&args.input)
    };

    // Naming the enum selects symbol-first lines and strict parsing
    if let Some(enum_name) = &args.enum_name {
        config.enum_name = Some(enum_name.clone());
        config.first_field = FieldOrder::Symbol;
        config.on_malformed = MalformedLinePolicy::Fail;
    }
    if let Some(array_name) = &args.array_name {
        config.array_name.clone_from(array_name);
    }

    // Override with CLI arguments
    if let Some(indent) = args.indent {
        config.indent = indent;
    }
    if let Some(line_length) = args.line_length {
        config.line_length = line_length;
    }
    if let Some(order) = args.first_field {
        config.first_field = order;
    }
    if let Some(policy) = args.on_malformed {
        config.on_malformed = policy;
    }

    // Validate configuration
    if let Some(error) = config.validate() {
        anyhow::bail!("Invalid configuration: {error}");
    }

    Ok(config)
}
