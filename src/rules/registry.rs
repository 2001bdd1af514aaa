#![forbid(unsafe_code)]

//! The set of event-driven rules owned by one file-check run
//!
//! A RuleSet owns its rules and the dispatcher that routes events to them.
//! Each run builds a fresh set, so no rule instance is ever shared between
//! files.

use crate::config::StyleConfig;
use crate::engine::EventDispatcher;
use crate::error::RuleError;
use crate::rules::{Event, Problem, Rule, RuleHandle, TrailingNewlinesRule};

/// Rules for a single run, in registration order
#[derive(Default)]
pub struct RuleSet {
    rules: Vec<Box<dyn Rule>>,
    dispatcher: EventDispatcher,
}

impl RuleSet {
    /// Create a new empty RuleSet
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the rules enabled by a style configuration
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidConfig` if a rule rejects its configured value.
    pub fn from_style(style: &StyleConfig) -> Result<Self, RuleError> {
        let mut set = RuleSet::new();

        if let Some(should_have) = style.trailing_newlines {
            set.add(Box::new(TrailingNewlinesRule::new(should_have)?));
        }

        Ok(set)
    }

    /// Add a rule and register its subscriptions
    ///
    /// Returns the handle the dispatcher uses to reach the rule.
    pub fn add(&mut self, rule: Box<dyn Rule>) -> RuleHandle {
        let handle = RuleHandle::new(self.rules.len());
        self.dispatcher.register_rule(handle, rule.as_ref());
        self.rules.push(rule);
        handle
    }

    /// Deliver an event to every rule subscribed to its kind
    ///
    /// # Errors
    ///
    /// Propagates the first rule error; the run should be abandoned.
    pub fn dispatch(&mut self, event: &Event) -> Result<usize, RuleError> {
        self.dispatcher.dispatch(&mut self.rules, event)
    }

    /// Get a rule by its handle
    pub fn get(&self, handle: RuleHandle) -> Option<&dyn Rule> {
        self.rules.get(handle.index()).map(|boxed| boxed.as_ref())
    }

    /// Iterate over all rules in registration order
    pub fn iter_rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|boxed| boxed.as_ref())
    }

    /// All problems reported so far, rule by rule in registration order
    pub fn problems(&self) -> Vec<Problem> {
        self.iter_rules()
            .flat_map(|rule| rule.report().iter().cloned())
            .collect()
    }

    pub fn dispatcher(&self) -> &EventDispatcher {
        &self.dispatcher
    }

    /// Get the number of rules in the set
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleSet")
            .field(
                "rules",
                &self.iter_rules().map(|rule| rule.name()).collect::<Vec<_>>(),
            )
            .field("dispatcher", &self.dispatcher)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EventKind, ProblemKind};

    #[test]
    fn test_new_set_is_empty() {
        let set = RuleSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(set.problems().is_empty());
    }

    #[test]
    fn test_add_registers_subscriptions() {
        let mut set = RuleSet::new();
        let handle = set.add(Box::new(TrailingNewlinesRule::new(1).unwrap()));

        assert_eq!(handle.index(), 0);
        assert_eq!(set.dispatcher().subscribers(EventKind::FileEnd), &[handle]);
        assert!(set.dispatcher().subscribers(EventKind::Newline).is_empty());
        assert_eq!(set.get(handle).map(|rule| rule.name()), Some("trailing_newlines"));
    }

    #[test]
    fn test_problems_in_registration_order() {
        let mut set = RuleSet::new();
        set.add(Box::new(TrailingNewlinesRule::new(1).unwrap()));
        set.add(Box::new(TrailingNewlinesRule::new(2).unwrap()));

        let delivered = set.dispatch(&Event::file_end(0)).unwrap();
        assert_eq!(delivered, 2);

        let problems = set.problems();
        assert_eq!(problems.len(), 2);
        assert!(problems.iter().all(|p| p.kind() == ProblemKind::TrailingNewlines));
        assert_eq!(
            problems[0].detail().get("should_have"),
            Some(&serde_json::Value::from(1))
        );
        assert_eq!(
            problems[1].detail().get("should_have"),
            Some(&serde_json::Value::from(2))
        );
    }

    #[test]
    fn test_from_style_default() {
        let set = RuleSet::from_style(&StyleConfig::default()).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(
            set.iter_rules().map(|rule| rule.name()).collect::<Vec<_>>(),
            vec!["trailing_newlines"]
        );
    }

    #[test]
    fn test_from_style_disabled_rule() {
        let style = StyleConfig {
            trailing_newlines: None,
            ..StyleConfig::default()
        };
        let set = RuleSet::from_style(&style).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_from_style_invalid_value() {
        let style = StyleConfig {
            trailing_newlines: Some(-2),
            ..StyleConfig::default()
        };
        let result = RuleSet::from_style(&style);
        assert!(matches!(result, Err(RuleError::InvalidConfig { .. })));
    }
}
