#![forbid(unsafe_code)]

//! Core Rule trait and the state every rule carries

use crate::error::RuleError;
use crate::rules::{Event, Problem};
use crate::types::EventKind;

/// Position of a rule within the rule set that owns it
///
/// Handles let the dispatcher refer to rules without owning or borrowing them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleHandle(usize);

impl RuleHandle {
    pub fn new(index: usize) -> Self {
        RuleHandle(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// The set of event kinds a rule listens to
///
/// Kinds keep their first-subscribed order; subscribing twice to the same
/// kind has no further effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Subscriptions(Vec<EventKind>);

impl Subscriptions {
    pub fn new(kinds: impl IntoIterator<Item = EventKind>) -> Self {
        let mut subscriptions = Subscriptions::default();
        for kind in kinds {
            if !subscriptions.0.contains(&kind) {
                subscriptions.0.push(kind);
            }
        }
        subscriptions
    }

    pub fn contains(&self, kind: EventKind) -> bool {
        self.0.contains(&kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = EventKind> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Configuration, subscriptions, and accumulated problems for one rule
///
/// Concrete rules embed a `RuleState` privately. Problems can only be added
/// through [`RuleState::record`], so nothing outside the rule can alter its
/// report.
#[derive(Debug, Clone)]
pub struct RuleState<C> {
    config: C,
    subscriptions: Subscriptions,
    problems: Vec<Problem>,
}

impl<C> RuleState<C> {
    pub fn new(config: C, kinds: impl IntoIterator<Item = EventKind>) -> Self {
        Self {
            config,
            subscriptions: Subscriptions::new(kinds),
            problems: Vec::new(),
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn subscriptions(&self) -> &Subscriptions {
        &self.subscriptions
    }

    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    /// Appends a problem to the rule's report
    pub fn record(&mut self, problem: Problem) {
        self.problems.push(problem);
    }
}

/// Trait that all event-driven rules must implement
///
/// A rule is owned by a single file-check run. It is `Send` so runs can be
/// moved onto worker threads, but never shared between runs.
pub trait Rule: Send {
    /// Returns the rule's name, as used in configuration and errors
    fn name(&self) -> &'static str;

    /// Returns the event kinds this rule wants delivered
    fn subscriptions(&self) -> &Subscriptions;

    /// Handles one event of a subscribed kind
    ///
    /// # Errors
    ///
    /// Returns `RuleError::ContractViolation` when the payload does not
    /// match the event kind. Style problems are recorded, never returned.
    fn handle_event(&mut self, event: &Event) -> Result<(), RuleError>;

    /// Returns every problem recorded so far, in detection order
    fn report(&self) -> &[Problem];
}
