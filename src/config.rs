//! Configuration file parsing and validation

pub mod tailor_toml;

pub use tailor_toml::{
    CONFIG_FILE, ColorOption, Config, FilesConfig, OutputConfig, OutputFormat, StyleConfig,
};
