//! Event dispatch, line inspection, and the per-file check runs

pub mod dispatcher;
pub mod executor;
pub mod file_check;
pub mod file_walker;
pub mod line_inspector;
pub mod scanner;

pub use dispatcher::EventDispatcher;
pub use executor::{ExecutionEngine, ExecutionResult, FileFailure};
pub use file_check::{FileCheck, FileReport};
pub use file_walker::{FileEntry, FileWalker, FileWalkerError};
pub use line_inspector::LineInspector;
pub use scanner::{LineScanner, ScannedFile};
