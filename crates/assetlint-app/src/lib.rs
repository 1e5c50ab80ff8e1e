//! Use case orchestration for assetlint.
//!
//! This crate provides the application layer: use cases that coordinate the domain, repo, and
//! render layers. It is intentionally thin and delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod explain;
mod issues;
mod render;
mod report;

pub use check::{CheckInput, CheckOutput, run_check, verdict_exit_code};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use issues::{
    ApplySummary, apply_one, apply_selected, format_issues, load_issues, record_results,
    save_issues, skip, skip_all,
};
pub use render::{render_annotations, render_markdown, render_rows, write_text};
pub use report::{
    empty_report, parse_report_json, runtime_error_report, serialize_report, to_renderable,
    to_rows,
};
