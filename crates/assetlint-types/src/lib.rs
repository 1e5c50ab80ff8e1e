//! Stable DTOs and IDs used across the assetlint workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted report
//! - stable string IDs and codes
//! - canonical asset path handling
//! - the pending-rename store
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod issues;
pub mod path;
pub mod receipt;

pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use issues::{DEFAULT_ISSUES_PATH, IssueStore, NamingIssue, SCHEMA_ISSUES_V1};
pub use path::AssetPath;
pub use receipt::{
    AssetlintData, AssetlintReport, Finding, Location, SCHEMA_REPORT_V1, Severity, ToolMeta,
    Verdict,
};
