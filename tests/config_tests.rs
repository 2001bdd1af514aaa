//! Integration tests for tailor.toml loading and validation

mod common;

use common::TestResult;
use std::fs;
use tailor::config::{ColorOption, Config, OutputFormat, StyleConfig};
use tailor::error::ConfigError;
use tailor::spacing::SpacingCheck;
use tempfile::TempDir;

#[test]
fn test_load_from_file() -> TestResult {
    let dir = TempDir::new()?;
    let path = dir.path().join("tailor.toml");
    fs::write(
        &path,
        r#"
[tailor]
include = ["lib/**/*.rb"]
exclude = ["lib/generated/**"]

[style]
trailing_newlines = 0
more_than_one_space_after_comma = false

[output]
format = "jsonl"
"#,
    )?;

    let config = Config::load(&path)?;
    assert_eq!(config.tailor.include.len(), 1);
    assert_eq!(config.tailor.exclude[0].as_str(), "lib/generated/**");
    assert_eq!(config.style.trailing_newlines, Some(0));
    assert!(!config.style.is_enabled(SpacingCheck::MoreThanOneSpaceAfterComma));
    assert_eq!(config.style.enabled_checks().len(), 7);
    assert_eq!(config.output.format, OutputFormat::Jsonl);
    assert_eq!(config.output.color, ColorOption::Auto);
    Ok(())
}

#[test]
fn test_load_or_default_without_file() -> TestResult {
    let dir = TempDir::new()?;
    let config = Config::load_or_default(dir.path())?;
    assert_eq!(config, Config::default());
    Ok(())
}

#[test]
fn test_load_or_default_with_file() -> TestResult {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("tailor.toml"), "[style]\ntrailing_newlines = false\n")?;

    let config = Config::load_or_default(dir.path())?;
    assert_eq!(config.style.trailing_newlines, None);
    Ok(())
}

#[test]
fn test_syntax_error_is_parse_error() {
    let result = Config::parse("[style\ntrailing_newlines = 1");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_unknown_style_key_is_parse_error() {
    let result = Config::parse("[style]\nspace_after_comma = true\n");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_wrong_value_type_is_parse_error() {
    let result = Config::parse("[style]\ntrailing_newlines = \"one\"\n");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_invalid_glob_is_validation_error() {
    let result = Config::parse("[tailor]\nexclude = [\"[oops\"]\n");
    match result {
        Err(ConfigError::Validation(message)) => assert!(message.contains("[oops")),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_enabled_checks_follow_declared_order() {
    let config = assert_ok!(
        Config::parse("[style]\ntrailing_whitespace = false\nspace_before_comma = false\n"),
        "style switches should parse"
    );
    let checks = config.style.enabled_checks();

    assert_eq!(checks.len(), 6);
    let first = assert_some!(checks.first());
    assert_eq!(*first, SpacingCheck::MoreThanOneSpaceAfterComma);
    assert!(!checks.contains(&SpacingCheck::SpaceBeforeComma));
}

#[test]
fn test_missing_file_is_io_error() {
    let result = Config::load("/definitely/not/here/tailor.toml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_style_roundtrips_through_toml() -> TestResult {
    let style = StyleConfig {
        trailing_newlines: None,
        space_after_open_bracket: false,
        ..StyleConfig::default()
    };
    let config = Config {
        style,
        ..Config::default()
    };

    let text = toml::to_string(&config)?;
    assert!(text.contains("trailing_newlines = false"));
    assert_eq!(Config::parse(&text)?, config);
    Ok(())
}
