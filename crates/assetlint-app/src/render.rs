//! Render use cases: markdown, annotations, and console rows from in-memory reports.

use anyhow::Context;
use assetlint_render::{RenderableReport, RenderableRow};
use camino::Utf8Path;

pub fn render_markdown(report: &RenderableReport) -> String {
    assetlint_render::render_markdown(report)
}

pub fn render_annotations(report: &RenderableReport, max: usize) -> Vec<String> {
    assetlint_render::render_github_annotations(report)
        .into_iter()
        .take(max)
        .collect()
}

pub fn render_rows(rows: &[RenderableRow], show_ok: bool) -> Vec<String> {
    assetlint_render::render_rows(rows, show_ok)
}

/// Write bytes to `path`, creating parent directories as needed.
pub fn write_text(path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create {parent}"))?;
    }
    std::fs::write(path, contents).with_context(|| format!("write {path}"))
}
