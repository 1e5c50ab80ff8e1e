//! Rendering utilities for terminals and CI surfaces (Markdown, GitHub annotations, etc).
//!
//! Renderers work on their own small view model so they stay independent of the report schema.

#![forbid(unsafe_code)]

mod gha;
mod markdown;
mod model;
mod rows;

pub use gha::render_github_annotations;
pub use markdown::render_markdown;
pub use model::{
    RenderableData, RenderableFinding, RenderableReport, RenderableRow, RenderableSeverity,
    RenderableVerdictStatus,
};
pub use rows::render_rows;
