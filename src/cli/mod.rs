//! Command-level workflows, independent of argument parsing

pub mod orchestration;

pub use orchestration::{is_affirmative, run_tag_workflow, TagOutcome, TagWorkflowArgs};
