#![forbid(unsafe_code)]

//! Events emitted by the scanner and delivered to subscribed rules

use crate::types::EventKind;

/// Event-specific data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Number of line terminators at the very end of the file
    TrailingNewlines(usize),
    /// Location of a newline character (1-indexed)
    Newline { line: u32, column: u32 },
    /// Indentation width changed on `line`
    Indent {
        line: u32,
        previous: usize,
        current: usize,
    },
}

/// A typed notification produced during a single pass over a file
///
/// The constructors pair each kind with its matching payload. [`Event::new`]
/// accepts any combination; rules reject mismatched ones with
/// [`RuleError::ContractViolation`](crate::error::RuleError::ContractViolation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    kind: EventKind,
    payload: Payload,
}

impl Event {
    pub fn new(kind: EventKind, payload: Payload) -> Self {
        Self { kind, payload }
    }

    pub fn file_end(trailing_newlines: usize) -> Self {
        Self::new(
            EventKind::FileEnd,
            Payload::TrailingNewlines(trailing_newlines),
        )
    }

    pub fn newline(line: u32, column: u32) -> Self {
        Self::new(EventKind::Newline, Payload::Newline { line, column })
    }

    pub fn indent_change(line: u32, previous: usize, current: usize) -> Self {
        Self::new(
            EventKind::IndentChange,
            Payload::Indent {
                line,
                previous,
                current,
            },
        )
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }
}
