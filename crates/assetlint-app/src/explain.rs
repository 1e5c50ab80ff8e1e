//! The `explain` use case: look up check/code documentation.

use assetlint_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an explanation for the identifier.
    Found(Explanation),
    /// Unknown identifier; includes available check_ids and codes.
    NotFound {
        identifier: String,
        available_check_ids: &'static [&'static str],
        available_codes: &'static [&'static str],
    },
}

/// Look up an explanation for a check_id or code.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_check_ids: explain::all_check_ids(),
            available_codes: explain::all_codes(),
        },
    }
}

/// Format an explanation for terminal display: underlined title, prose sections, then the
/// before/after asset trees in fenced blocks.
pub fn format_explanation(exp: &Explanation) -> String {
    let underline = "=".repeat(exp.title.chars().count());
    let sections = [
        format!("{}\n{underline}", exp.title),
        exp.description.to_string(),
        format!("Remediation\n-----------\n{}", exp.remediation),
        "Examples\n--------".to_string(),
        fenced("Before (violation):", exp.examples.before),
        fenced("After (fixed):", exp.examples.after),
    ];
    let mut out = sections.join("\n\n");
    out.push('\n');
    out
}

fn fenced(label: &str, body: &str) -> String {
    format!("{label}\n```text\n{}\n```", body.trim_end())
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(
    identifier: &str,
    check_ids: &[&'static str],
    codes: &[&'static str],
) -> String {
    let bullets = |items: &[&'static str]| -> String {
        items.iter().map(|item| format!("  - {item}\n")).collect()
    };
    format!(
        "Unknown check_id or code: {identifier}\n\nAvailable check_ids:\n{}\nAvailable codes:\n{}",
        bullets(check_ids),
        bullets(codes)
    )
}
