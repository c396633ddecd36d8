//! Output formatters (markdown, human and JSONL) and report destinations

pub mod destinations;
pub mod human;
pub mod jsonl;
pub mod markdown;

pub use destinations::{STEP_SUMMARY_ENV, append_step_summary, write_report_file};
pub use human::HumanFormatter;
pub use jsonl::JsonlFormatter;
pub use markdown::MarkdownFormatter;
