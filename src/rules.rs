#![forbid(unsafe_code)]

//! Rule definitions, events, and the per-run rule set

mod event;
mod problem;
mod registry;
mod rule;
mod trailing_newlines;

// Re-export core types
pub use event::{Event, Payload};
pub use problem::{Problem, ProblemDetail};
pub use registry::RuleSet;
pub use rule::{Rule, RuleHandle, RuleState, Subscriptions};
pub use trailing_newlines::TrailingNewlinesRule;
