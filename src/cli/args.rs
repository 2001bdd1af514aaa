//! CLI argument parsing using clap

use crate::config;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for tailor commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

impl From<OutputFormat> for config::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Human => config::OutputFormat::Human,
            OutputFormat::Jsonl => config::OutputFormat::Jsonl,
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

impl From<ColorChoice> for config::ColorOption {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => config::ColorOption::Auto,
            ColorChoice::Always => config::ColorOption::Always,
            ColorChoice::Never => config::ColorOption::Never,
        }
    }
}

/// Tailor CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "tailor")]
#[command(about = "Checks source files for whitespace and spacing style problems")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Output coloring (overrides [output] color)
    #[arg(long, global = true)]
    pub color: Option<ColorChoice>,
}

/// Available tailor subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check files for style problems
    Check {
        /// Paths to check (defaults to current directory)
        #[arg(default_value = ".")]
        paths: Vec<String>,

        /// Output format (overrides [output] format)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Configuration file (defaults to ./tailor.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Report files skipped by include/exclude patterns
        #[arg(short, long)]
        verbose: bool,
    },

    /// Write a default tailor.toml to the current directory
    Init {
        /// Overwrite an existing tailor.toml
        #[arg(long)]
        force: bool,
    },

    /// List the checks and their settings
    List {
        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,

        /// Configuration file (defaults to ./tailor.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_check_default_args() {
        let cli = Cli::parse_from(["tailor", "check"]);
        match cli.command {
            Command::Check {
                paths,
                format,
                config,
                verbose,
            } => {
                assert_eq!(paths, vec!["."]);
                assert_eq!(format, None);
                assert_eq!(config, None);
                assert!(!verbose);
            }
            _ => panic!("Expected Check command"),
        }
        assert_eq!(cli.color, None);
    }

    #[test]
    fn test_check_with_paths() {
        let cli = Cli::parse_from(["tailor", "check", "lib/", "test/"]);
        match cli.command {
            Command::Check { paths, .. } => {
                assert_eq!(paths, vec!["lib/", "test/"]);
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_check_short_format() {
        let cli = Cli::parse_from(["tailor", "check", "-f", "jsonl"]);
        match cli.command {
            Command::Check { format, .. } => {
                assert_eq!(format, Some(OutputFormat::Jsonl));
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_check_with_config() {
        let cli = Cli::parse_from(["tailor", "check", "--config", "ci/tailor.toml", "lib"]);
        match cli.command {
            Command::Check { config, paths, .. } => {
                assert_eq!(config, Some(PathBuf::from("ci/tailor.toml")));
                assert_eq!(paths, vec!["lib"]);
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_init_with_force() {
        let cli = Cli::parse_from(["tailor", "init", "--force"]);
        match cli.command {
            Command::Init { force } => assert!(force),
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_list_default() {
        let cli = Cli::parse_from(["tailor", "list"]);
        match cli.command {
            Command::List { format, config } => {
                assert_eq!(format, OutputFormat::Human);
                assert_eq!(config, None);
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_global_color_flag() {
        let cli = Cli::parse_from(["tailor", "--color", "always", "check"]);
        assert_eq!(cli.color, Some(ColorChoice::Always));

        let cli = Cli::parse_from(["tailor", "list", "--color", "never"]);
        assert_eq!(cli.color, Some(ColorChoice::Never));
    }

    #[test]
    fn test_conversions_to_config() {
        assert_eq!(
            config::OutputFormat::from(OutputFormat::Jsonl),
            config::OutputFormat::Jsonl
        );
        assert_eq!(
            config::ColorOption::from(ColorChoice::Never),
            config::ColorOption::Never
        );
    }

    #[test]
    fn test_invalid_format() {
        let result = Cli::try_parse_from(["tailor", "check", "--format", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_help_contains_about() {
        let help = Cli::command().render_help().to_string();
        assert!(help.contains("spacing style problems"));
    }
}
