//! Output formatters (human and JSONL)

pub mod check_list;
pub mod human;
pub mod jsonl;

pub use check_list::{
    CheckEntry, CheckListHumanFormatter, CheckListJsonlFormatter, CheckSource, check_entries,
};
pub use human::HumanFormatter;
pub use jsonl::JsonlFormatter;
