//! Parsing and validation for tailor.toml configuration files

use crate::error::ConfigError;
use crate::spacing::SpacingCheck;
use crate::types::GlobPattern;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default configuration file name, looked up in the current directory
pub const CONFIG_FILE: &str = "tailor.toml";

/// Main configuration struct for tailor.toml
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Which files to check
    #[serde(default)]
    pub tailor: FilesConfig,

    /// Style expectations
    #[serde(default)]
    pub style: StyleConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Load `tailor.toml` from `dir`, falling back to defaults when absent
    pub fn load_or_default(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = dir.as_ref().join(CONFIG_FILE);
        if path.is_file() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(count) = self.style.trailing_newlines
            && count < 0
        {
            return Err(ConfigError::Validation(format!(
                "style.trailing_newlines must be zero or more, got {}",
                count
            )));
        }

        // Validate glob patterns by attempting to compile them with globset
        for pattern in &self.tailor.include {
            globset::Glob::new(pattern.as_str()).map_err(|e| {
                ConfigError::Validation(format!(
                    "Invalid include glob pattern '{}': {}",
                    pattern.as_str(),
                    e
                ))
            })?;
        }

        for pattern in &self.tailor.exclude {
            globset::Glob::new(pattern.as_str()).map_err(|e| {
                ConfigError::Validation(format!(
                    "Invalid exclude glob pattern '{}': {}",
                    pattern.as_str(),
                    e
                ))
            })?;
        }

        Ok(())
    }
}

/// File selection section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilesConfig {
    /// File patterns to include
    #[serde(default = "default_include")]
    pub include: Vec<GlobPattern>,

    /// File patterns to exclude
    #[serde(default)]
    pub exclude: Vec<GlobPattern>,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            include: default_include(),
            exclude: Vec::new(),
        }
    }
}

fn default_include() -> Vec<GlobPattern> {
    vec![GlobPattern::new("**/*")]
}

/// Style section: the expected newline count plus one switch per spacing check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleConfig {
    /// Expected number of newlines ending each file; `false` disables the rule
    #[serde(default = "default_trailing_newlines", with = "newline_setting")]
    pub trailing_newlines: Option<i64>,

    #[serde(default = "enabled")]
    pub trailing_whitespace: bool,
    #[serde(default = "enabled")]
    pub more_than_one_space_after_comma: bool,
    #[serde(default = "enabled")]
    pub no_space_after_comma: bool,
    #[serde(default = "enabled")]
    pub space_before_comma: bool,
    #[serde(default = "enabled")]
    pub space_after_open_parenthesis: bool,
    #[serde(default = "enabled")]
    pub space_after_open_bracket: bool,
    #[serde(default = "enabled")]
    pub space_before_closed_parenthesis: bool,
    #[serde(default = "enabled")]
    pub space_before_closed_bracket: bool,
}

impl StyleConfig {
    /// Whether a spacing check is switched on
    pub fn is_enabled(&self, check: SpacingCheck) -> bool {
        match check {
            SpacingCheck::TrailingWhitespace => self.trailing_whitespace,
            SpacingCheck::MoreThanOneSpaceAfterComma => self.more_than_one_space_after_comma,
            SpacingCheck::NoSpaceAfterComma => self.no_space_after_comma,
            SpacingCheck::SpaceBeforeComma => self.space_before_comma,
            SpacingCheck::SpaceAfterOpenParenthesis => self.space_after_open_parenthesis,
            SpacingCheck::SpaceAfterOpenBracket => self.space_after_open_bracket,
            SpacingCheck::SpaceBeforeClosedParenthesis => self.space_before_closed_parenthesis,
            SpacingCheck::SpaceBeforeClosedBracket => self.space_before_closed_bracket,
        }
    }

    /// Enabled spacing checks, in reporting order
    pub fn enabled_checks(&self) -> Vec<SpacingCheck> {
        SpacingCheck::ALL
            .into_iter()
            .filter(|check| self.is_enabled(*check))
            .collect()
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            trailing_newlines: default_trailing_newlines(),
            trailing_whitespace: true,
            more_than_one_space_after_comma: true,
            no_space_after_comma: true,
            space_before_comma: true,
            space_after_open_parenthesis: true,
            space_after_open_bracket: true,
            space_before_closed_parenthesis: true,
            space_before_closed_bracket: true,
        }
    }
}

fn default_trailing_newlines() -> Option<i64> {
    Some(1)
}

fn enabled() -> bool {
    true
}

/// `trailing_newlines` accepts a count, `true` (the default count), or `false`
mod newline_setting {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    #[serde(untagged)]
    enum Setting {
        Enabled(bool),
        Count(i64),
    }

    pub fn serialize<S: Serializer>(value: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(count) => Setting::Count(*count),
            None => Setting::Enabled(false),
        }
        .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
        Ok(match Setting::deserialize(deserializer)? {
            Setting::Enabled(true) => super::default_trailing_newlines(),
            Setting::Enabled(false) => None,
            Setting::Count(count) => Some(count),
        })
    }
}

/// Output configuration section
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Color output setting
    #[serde(default)]
    pub color: ColorOption,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON Lines format
    Jsonl,
}

/// Color output options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorOption {
    /// Auto-detect based on terminal capabilities
    #[default]
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}
