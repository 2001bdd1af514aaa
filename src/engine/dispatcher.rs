#![forbid(unsafe_code)]

//! Event routing from the scanner to subscribed rules
//!
//! The dispatcher maps each event kind to an ordered list of rule handles.
//! It never owns rules: the caller passes the rule slice in on every
//! dispatch, and handles index into it.

use crate::error::RuleError;
use crate::rules::{Event, Rule, RuleHandle};
use crate::types::EventKind;
use std::collections::HashMap;

/// Registry of which rules receive which event kinds
#[derive(Debug, Clone, Default)]
pub struct EventDispatcher {
    subscribers: HashMap<EventKind, Vec<RuleHandle>>,
}

impl EventDispatcher {
    /// Creates a new empty EventDispatcher
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes `handle` to `kind`
    ///
    /// Registering the same handle for the same kind twice has no effect.
    /// Delivery follows registration order.
    pub fn register(&mut self, handle: RuleHandle, kind: EventKind) {
        let handles = self.subscribers.entry(kind).or_default();
        if !handles.contains(&handle) {
            handles.push(handle);
        }
    }

    /// Subscribes `handle` to every kind the rule declares
    pub fn register_rule(&mut self, handle: RuleHandle, rule: &dyn Rule) {
        for kind in rule.subscriptions().iter() {
            self.register(handle, kind);
        }
    }

    /// Returns the subscribers of `kind` in delivery order
    pub fn subscribers(&self, kind: EventKind) -> &[RuleHandle] {
        self.subscribers
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Delivers `event` to every subscriber of its kind
    ///
    /// Returns the number of rules the event reached.
    ///
    /// # Errors
    ///
    /// Stops at the first rule that fails and returns its error. A handle
    /// with no rule behind it is reported as a contract violation.
    pub fn dispatch(&self, rules: &mut [Box<dyn Rule>], event: &Event) -> Result<usize, RuleError> {
        let handles = self.subscribers(event.kind());

        for handle in handles {
            let rule = rules
                .get_mut(handle.index())
                .ok_or_else(|| RuleError::ContractViolation {
                    rule: format!("#{}", handle.index()),
                    message: format!(
                        "no rule registered at this handle for {} events",
                        event.kind()
                    ),
                })?;
            rule.handle_event(event)?;
        }

        Ok(handles.len())
    }
}
