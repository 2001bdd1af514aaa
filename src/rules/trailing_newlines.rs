#![forbid(unsafe_code)]

//! Whole-file check on the number of newlines ending a file

use crate::error::RuleError;
use crate::rules::{Event, Payload, Problem, ProblemDetail, Rule, RuleState, Subscriptions};
use crate::types::{EventKind, ProblemKind};

/// Compares the file's trailing newline count with the configured count
///
/// The count is only known once the whole file has been scanned, so this
/// rule listens to `file_end` alone.
#[derive(Debug, Clone)]
pub struct TrailingNewlinesRule {
    state: RuleState<usize>,
}

impl TrailingNewlinesRule {
    pub const NAME: &'static str = "trailing_newlines";

    /// Creates the rule expecting `should_have` trailing newlines
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidConfig` for a negative count.
    pub fn new(should_have: i64) -> Result<Self, RuleError> {
        let should_have = usize::try_from(should_have).map_err(|_| RuleError::InvalidConfig {
            rule: Self::NAME.to_string(),
            message: format!("expected a non-negative newline count, got {}", should_have),
        })?;

        Ok(Self {
            state: RuleState::new(should_have, [EventKind::FileEnd]),
        })
    }

    pub fn should_have(&self) -> usize {
        *self.state.config()
    }

    fn measure(&mut self, trailing_newline_count: usize) {
        let should_have = self.should_have();
        if trailing_newline_count != should_have {
            self.state.record(Problem::at_eof(
                ProblemKind::TrailingNewlines,
                ProblemDetail::new()
                    .with("actual_trailing_newlines", trailing_newline_count)
                    .with("should_have", should_have),
            ));
        }
    }
}

impl Rule for TrailingNewlinesRule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn subscriptions(&self) -> &Subscriptions {
        self.state.subscriptions()
    }

    fn handle_event(&mut self, event: &Event) -> Result<(), RuleError> {
        match (event.kind(), event.payload()) {
            (EventKind::FileEnd, Payload::TrailingNewlines(count)) => {
                self.measure(*count);
                Ok(())
            }
            (kind, payload) => Err(RuleError::ContractViolation {
                rule: Self::NAME.to_string(),
                message: format!("unexpected {} event with payload {:?}", kind, payload),
            }),
        }
    }

    fn report(&self) -> &[Problem] {
        self.state.problems()
    }
}
