#![forbid(unsafe_code)]

//! Formatters for the `tailor list` command
//!
//! Supports both human-readable and JSONL output.

use crate::config::StyleConfig;
use crate::rules::TrailingNewlinesRule;
use crate::spacing::SpacingCheck;
use serde::Serialize;

/// How a check receives its input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckSource {
    /// Looks at one line at a time
    Line,
    /// Subscribes to scanner events
    Event,
}

impl CheckSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckSource::Line => "line",
            CheckSource::Event => "event",
        }
    }
}

/// One check and how it is configured
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckEntry {
    pub name: String,
    pub source: CheckSource,
    pub enabled: bool,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setting: Option<String>,
}

/// Every known check, in reporting order, with its state under `style`
pub fn check_entries(style: &StyleConfig) -> Vec<CheckEntry> {
    let mut entries: Vec<CheckEntry> = SpacingCheck::ALL
        .into_iter()
        .map(|check| CheckEntry {
            name: check.name().to_string(),
            source: CheckSource::Line,
            enabled: style.is_enabled(check),
            description: check.summary(),
            setting: None,
        })
        .collect();

    entries.push(CheckEntry {
        name: TrailingNewlinesRule::NAME.to_string(),
        source: CheckSource::Event,
        enabled: style.trailing_newlines.is_some(),
        description: "File ends with the expected number of newlines".to_string(),
        setting: style
            .trailing_newlines
            .map(|count| format!("should_have = {}", count)),
    });

    entries
}

/// Human-readable formatter for the check list
pub struct CheckListHumanFormatter;

impl CheckListHumanFormatter {
    pub fn new() -> Self {
        CheckListHumanFormatter
    }

    pub fn format(&self, entries: &[CheckEntry]) -> String {
        let enabled = entries.iter().filter(|entry| entry.enabled).count();
        let mut output = format!("Checks ({} of {} enabled):\n\n", enabled, entries.len());

        for entry in entries {
            let icon = if entry.enabled { "✓" } else { "✗" };
            output.push_str(&format!(
                "{} {} ({})\n",
                icon,
                entry.name,
                entry.source.as_str()
            ));
            output.push_str(&format!("  Description: {}\n", entry.description));
            if let Some(setting) = &entry.setting {
                output.push_str(&format!("  Setting: {}\n", setting));
            }
        }

        output
    }
}

impl Default for CheckListHumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// JSONL formatter for the check list
pub struct CheckListJsonlFormatter;

impl CheckListJsonlFormatter {
    pub fn new() -> Self {
        CheckListJsonlFormatter
    }

    /// One JSON object per check
    pub fn format(&self, entries: &[CheckEntry]) -> String {
        let mut output = String::new();
        for entry in entries {
            if let Ok(json) = serde_json::to_string(entry) {
                output.push_str(&json);
                output.push('\n');
            }
        }
        output
    }
}

impl Default for CheckListJsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}
