//! The rename-issue use cases: record flagged assets, then apply or skip their renames.

use anyhow::Context;
use assetlint_domain::model::AssetKind;
use assetlint_domain::report::AssetResult;
use assetlint_repo::RenameExecutor;
use assetlint_types::{AssetPath, IssueStore, NamingIssue, SCHEMA_ISSUES_V1};
use camino::Utf8Path;

/// Load the store at `path`; a missing file is an empty store.
pub fn load_issues(path: &Utf8Path) -> anyhow::Result<IssueStore> {
    if !path.exists() {
        return Ok(IssueStore::default());
    }
    let text = std::fs::read_to_string(path).with_context(|| format!("read {path}"))?;
    let store: IssueStore =
        serde_json::from_str(&text).with_context(|| format!("parse issue store {path}"))?;
    if store.schema != SCHEMA_ISSUES_V1 {
        anyhow::bail!(
            "unknown issue store schema: {} (expected {SCHEMA_ISSUES_V1})",
            store.schema
        );
    }
    for issue in &store.issues {
        issue
            .kind
            .parse::<AssetKind>()
            .with_context(|| format!("issue store {path}: bad kind for {}", issue.asset_path))?;
    }
    Ok(store)
}

pub fn save_issues(path: &Utf8Path, store: &IssueStore) -> anyhow::Result<()> {
    let mut bytes = serde_json::to_vec_pretty(store).context("serialize issue store")?;
    bytes.push(b'\n');
    crate::render::write_text(path, &bytes)
}

/// Merge every flagged result into the store. Returns how many issues were recorded.
///
/// When no compliant name can be derived the current name is proposed, so the user can edit it.
pub fn record_results(store: &mut IssueStore, results: &[AssetResult]) -> usize {
    let mut recorded = 0;
    for r in results.iter().filter(|r| r.is_flagged()) {
        store.add_or_update(NamingIssue {
            asset_path: r.path.clone(),
            current_name: r.base_name.clone(),
            extension: r.extension.clone(),
            kind: r.kind.as_str().to_string(),
            suggestion: r
                .verdict
                .suggested_name
                .clone()
                .unwrap_or_else(|| r.base_name.clone()),
            reason: r.verdict.violation_reason.clone(),
            selected: true,
        });
        recorded += 1;
    }
    tracing::debug!(recorded, total = store.issues.len(), "recorded rename issues");
    recorded
}

/// Rename one asset to its stored suggestion. The issue is removed only on success.
pub fn apply_one(
    store: &mut IssueStore,
    path: &AssetPath,
    executor: &dyn RenameExecutor,
) -> anyhow::Result<AssetPath> {
    let issue = store
        .get(path)
        .with_context(|| format!("no pending rename for {path}"))?;
    if issue.suggestion.trim().is_empty() {
        anyhow::bail!("suggestion for {path} is empty");
    }

    let renamed = executor
        .rename(path, &issue.suggestion)
        .with_context(|| format!("rename {path}"))?;
    store.remove(path);
    tracing::info!(from = %path, to = %renamed, "applied rename");
    Ok(renamed)
}

/// Outcome of a batch apply.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplySummary {
    /// (old path, new path)
    pub applied: Vec<(AssetPath, AssetPath)>,
    /// (path, error message)
    pub failed: Vec<(AssetPath, String)>,
}

/// Rename every selected issue. All selected issues leave the store afterwards, whether the
/// rename worked or not; unselected ones stay.
pub fn apply_selected(store: &mut IssueStore, executor: &dyn RenameExecutor) -> ApplySummary {
    let mut summary = ApplySummary::default();
    let targets: Vec<NamingIssue> = store.selected().cloned().collect();

    for issue in &targets {
        match executor.rename(&issue.asset_path, &issue.suggestion) {
            Ok(renamed) => summary.applied.push((issue.asset_path.clone(), renamed)),
            Err(err) => {
                tracing::warn!(path = %issue.asset_path, error = %err, "rename failed");
                summary.failed.push((issue.asset_path.clone(), err.to_string()));
            }
        }
    }

    store.issues.retain(|i| !i.selected);
    tracing::info!(
        applied = summary.applied.len(),
        failed = summary.failed.len(),
        remaining = store.issues.len(),
        "applied selected renames"
    );
    summary
}

/// Drop one issue without renaming. Returns false when nothing was pending for `path`.
pub fn skip(store: &mut IssueStore, path: &AssetPath) -> bool {
    store.remove(path).is_some()
}

pub fn skip_all(store: &mut IssueStore) {
    store.clear();
}

/// Table-ish listing for the terminal.
pub fn format_issues(store: &IssueStore) -> String {
    if store.issues.is_empty() {
        return "No issues.\n".to_string();
    }
    let mut out = String::new();
    for issue in &store.issues {
        let mark = if issue.selected { "[x]" } else { "[ ]" };
        out.push_str(&format!(
            "{} {} ({}) {} -> {}{}\n",
            mark, issue.asset_path, issue.kind, issue.current_name, issue.suggestion, issue.extension
        ));
    }
    out
}
