//! Configuration management for enumgen.
//!
//! The [`Config`] struct controls all generation behavior. Configuration can
//! be loaded from:
//! - TOML files (`enumgen.toml`)
//! - CLI arguments (which override file settings)
//!
//! Config files are auto-discovered by searching parent directories from the
//! input file up to the filesystem root, plus the user's home directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::parser::{FieldOrder, MalformedLinePolicy};

/// Config file names to search for (in order of priority, later overrides earlier)
const CONFIG_FILE_NAMES: &[&str] = &["enumgen.toml"];

/// Get the user's home directory
fn dirs_home() -> Option<PathBuf> {
    // Try HOME environment variable first (works on Unix and some Windows setups)
    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home));
    }
    // Fallback for Windows
    if let Ok(userprofile) = std::env::var("USERPROFILE") {
        return Some(PathBuf::from(userprofile));
    }
    None
}

// Serde default functions
fn default_indent() -> usize {
    2
}
fn default_line_length() -> usize {
    70
}
fn default_array_name() -> String {
    "tokens".to_string()
}
fn default_first_field() -> FieldOrder {
    FieldOrder::Display
}
fn default_on_malformed() -> MalformedLinePolicy {
    MalformedLinePolicy::Skip
}

/// Main configuration struct for enumgen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Spaces of indentation on content lines (default: 2)
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Maximum line length for content lines (default: 70)
    #[serde(default = "default_line_length")]
    pub line_length: usize,

    /// Name of the generated string-table variable (default: "tokens")
    #[serde(default = "default_array_name")]
    pub array_name: String,

    /// Name of the generated enum type; anonymous when unset
    #[serde(default)]
    pub enum_name: Option<String>,

    /// Which token comes first on each input line (default: display)
    #[serde(default = "default_first_field")]
    pub first_field: FieldOrder,

    /// Policy for lines without exactly two tokens (default: skip)
    #[serde(default = "default_on_malformed")]
    pub on_malformed: MalformedLinePolicy,
}

/// Partial configuration for TOML parsing
///
/// All fields are `Option<T>` so we can distinguish between
/// "explicitly set" and "not specified" when merging configs.
#[derive(Debug, Clone, Default, Deserialize)]
struct PartialConfig {
    pub indent: Option<usize>,
    pub line_length: Option<usize>,
    pub array_name: Option<String>,
    pub enum_name: Option<String>,
    pub first_field: Option<FieldOrder>,
    pub on_malformed: Option<MalformedLinePolicy>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            indent: 2,
            line_length: 70,
            array_name: "tokens".to_string(),
            enum_name: None,
            first_field: FieldOrder::Display,
            on_malformed: MalformedLinePolicy::Skip,
        }
    }
}

impl Config {
    /// Minimum reasonable line length (must fit at least one short item)
    const MIN_LINE_LENGTH: usize = 20;
    /// Maximum reasonable line length
    const MAX_LINE_LENGTH: usize = 1000;
    /// Maximum reasonable indent size
    const MAX_INDENT: usize = 16;

    /// Validate configuration values are within reasonable bounds
    ///
    /// Returns an error message if validation fails, None if valid.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        if self.indent > Self::MAX_INDENT {
            return Some(format!(
                "indent {} exceeds maximum of {}",
                self.indent,
                Self::MAX_INDENT
            ));
        }
        if self.line_length < Self::MIN_LINE_LENGTH {
            return Some(format!(
                "line_length {} is below minimum of {}",
                self.line_length,
                Self::MIN_LINE_LENGTH
            ));
        }
        if self.line_length > Self::MAX_LINE_LENGTH {
            return Some(format!(
                "line_length {} exceeds maximum of {}",
                self.line_length,
                Self::MAX_LINE_LENGTH
            ));
        }
        if self.indent >= self.line_length {
            return Some(format!(
                "indent {} leaves no room within line_length {}",
                self.indent, self.line_length
            ));
        }
        if self.array_name.is_empty() {
            return Some("array_name must not be empty".to_string());
        }
        None
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let partial: PartialConfig = toml::from_str(&contents)?;
        let mut config = Self::default();
        config.apply_partial(&partial);
        Ok(config)
    }

    /// Apply a partial config, only overriding fields that are explicitly set
    fn apply_partial(&mut self, partial: &PartialConfig) {
        if let Some(v) = partial.indent {
            self.indent = v;
        }
        if let Some(v) = partial.line_length {
            self.line_length = v;
        }
        if let Some(v) = &partial.array_name {
            self.array_name = v.clone();
        }
        if let Some(v) = &partial.enum_name {
            self.enum_name = Some(v.clone());
        }
        if let Some(v) = partial.first_field {
            self.first_field = v;
        }
        if let Some(v) = partial.on_malformed {
            self.on_malformed = v;
        }
    }

    /// Discover config files from parent directories of a given path
    ///
    /// Searches from the file's directory up to the root, then adds home
    /// directory config. Returns the list in order of priority (least
    /// specific first).
    #[must_use]
    pub fn discover_config_files(start_path: &Path) -> Vec<PathBuf> {
        let mut config_files = Vec::new();

        // Home directory config first (lowest priority)
        if let Some(home) = dirs_home() {
            for config_name in CONFIG_FILE_NAMES {
                let home_config = home.join(config_name);
                if home_config.is_file() {
                    config_files.push(home_config);
                }
            }
        }

        // Start from the file's parent directory (or the path itself if it's a directory)
        let start_dir = if start_path.is_file() {
            start_path.parent().map(Path::to_path_buf)
        } else if start_path.is_dir() {
            Some(start_path.to_path_buf())
        } else {
            // Path doesn't exist, use current directory
            std::env::current_dir().ok()
        };

        if let Some(dir) = start_dir {
            let mut ancestors: Vec<PathBuf> = dir.ancestors().map(Path::to_path_buf).collect();
            // Reverse so we go from root to current (less specific to more specific)
            ancestors.reverse();

            for ancestor in ancestors {
                for config_name in CONFIG_FILE_NAMES {
                    let config_path = ancestor.join(config_name);
                    if config_path.is_file() && !config_files.contains(&config_path) {
                        config_files.push(config_path);
                    }
                }
            }
        }

        config_files
    }

    /// Load and merge configuration from discovered config files
    ///
    /// Later files override earlier ones (only explicitly set values).
    /// Returns default config if no files found.
    #[must_use]
    pub fn from_discovered_files(start_path: &Path) -> Self {
        let config_files = Self::discover_config_files(start_path);

        let mut config = Self::default();
        for path in &config_files {
            match std::fs::read_to_string(path) {
                Ok(contents) => match toml::from_str::<PartialConfig>(&contents) {
                    Ok(partial) => config.apply_partial(&partial),
                    Err(e) => eprintln!("Warning: failed to parse {}: {e}", path.display()),
                },
                Err(e) => eprintln!("Warning: failed to read {}: {e}", path.display()),
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.indent, 2);
        assert_eq!(config.line_length, 70);
        assert_eq!(config.array_name, "tokens");
        assert_eq!(config.enum_name, None);
        assert_eq!(config.first_field, FieldOrder::Display);
        assert_eq!(config.on_malformed, MalformedLinePolicy::Skip);
    }

    #[test]
    fn test_config_apply_partial() {
        let mut base = Config::default();

        let partial = PartialConfig {
            indent: Some(4),
            line_length: Some(100),
            ..Default::default()
        };

        base.apply_partial(&partial);
        assert_eq!(base.indent, 4);
        assert_eq!(base.line_length, 100);
        // Other fields should remain at defaults
        assert_eq!(base.array_name, "tokens");
        assert_eq!(base.on_malformed, MalformedLinePolicy::Skip);
    }

    #[test]
    fn test_config_apply_partial_preserves_unset() {
        let mut base = Config::default();
        base.array_name = "keywords".to_string();

        let partial = PartialConfig {
            line_length: Some(80),
            ..Default::default()
        };

        base.apply_partial(&partial);
        assert_eq!(base.array_name, "keywords");
        assert_eq!(base.line_length, 80);
    }

    #[test]
    fn test_partial_config_from_toml() {
        let partial: PartialConfig = toml::from_str(
            r#"
            line_length = 90
            first_field = "symbol"
            on_malformed = "fail"
            enum_name = "Token"
            "#,
        )
        .unwrap();
        assert_eq!(partial.line_length, Some(90));
        assert_eq!(partial.first_field, Some(FieldOrder::Symbol));
        assert_eq!(partial.on_malformed, Some(MalformedLinePolicy::Fail));
        assert_eq!(partial.enum_name.as_deref(), Some("Token"));
        assert_eq!(partial.indent, None);
    }

    #[test]
    fn test_validate_default_config() {
        assert!(Config::default().validate().is_none());
    }

    #[test]
    fn test_validate_indent_too_large() {
        let config = Config {
            indent: 40,
            ..Default::default()
        };
        assert!(config.validate().unwrap().contains("indent"));
    }

    #[test]
    fn test_validate_line_length_too_small() {
        let config = Config {
            line_length: 10,
            ..Default::default()
        };
        assert!(config.validate().unwrap().contains("line_length"));
    }

    #[test]
    fn test_validate_line_length_too_large() {
        let config = Config {
            line_length: 5000,
            ..Default::default()
        };
        assert!(config.validate().is_some());
    }

    #[test]
    fn test_validate_empty_array_name() {
        let config = Config {
            array_name: String::new(),
            ..Default::default()
        };
        assert!(config.validate().unwrap().contains("array_name"));
    }

    #[test]
    fn test_validate_indent_crowding_out_line() {
        let config = Config {
            indent: 16,
            line_length: 20,
            ..Default::default()
        };
        assert!(config.validate().is_none());

        let config = Config {
            indent: 16,
            line_length: 16,
            ..Default::default()
        };
        assert!(config.validate().is_some());
    }

    #[test]
    fn test_from_discovered_files_returns_default_when_empty() {
        let path = PathBuf::from("/nonexistent/unique/path/tokens.txt");
        let config = Config::from_discovered_files(&path);
        assert_eq!(config.indent, 2);
        assert_eq!(config.line_length, 70);
    }
}
