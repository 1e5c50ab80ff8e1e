//! Repository adapters: discover asset files, resolve their kinds, and rename them on disk.
//!
//! This crate is allowed to do filesystem IO. It should not spawn external processes;
//! diff scoping should be supplied as a list of changed paths by the caller (typically the CLI).

#![forbid(unsafe_code)]

mod discover;
mod kinds;
mod rename;

use anyhow::Context;
use assetlint_domain::model::{AssetEntry, AssetModel};
use assetlint_domain::policy::DiscoveryConfig;
use assetlint_types::AssetPath;
use camino::Utf8Path;
use rayon::prelude::*;

pub use discover::{DEFAULT_EXCLUDED_DIRS, discover_assets};
pub use kinds::{request_for, resolve_kind};
pub use rename::{FsRenameExecutor, RenameError, RenameExecutor};

/// Input to scope selection.
#[derive(Clone, Debug)]
pub enum ScopeInput {
    /// Everything under the root.
    Repo,
    /// Paths picked explicitly by the user.
    Selection { paths: Vec<AssetPath> },
    /// Files changed between two revisions, as listed by the caller.
    Diff { changed_files: Vec<AssetPath> },
}

/// Build the in-memory asset model used by the naming engine.
pub fn build_asset_model(
    root: &Utf8Path,
    scope: ScopeInput,
    cfg: &DiscoveryConfig,
) -> anyhow::Result<AssetModel> {
    let paths = match scope {
        ScopeInput::Repo => discover::discover_assets(root, cfg).context("discover assets")?,
        ScopeInput::Selection { paths } | ScopeInput::Diff { changed_files: paths } => {
            existing_in_scope(root, paths, cfg)?
        }
    };

    let assets: Vec<AssetEntry> = paths
        .par_iter()
        .map(|path| AssetEntry {
            path: path.clone(),
            request: kinds::request_for(path, &cfg.kinds),
        })
        .collect();

    tracing::debug!(assets = assets.len(), "built asset model");
    Ok(AssetModel {
        root: AssetPath::from(root),
        assets,
    })
}

/// Keep the listed paths that exist as files and are not excluded; deleted files in a diff
/// simply drop out.
fn existing_in_scope(
    root: &Utf8Path,
    paths: Vec<AssetPath>,
    cfg: &DiscoveryConfig,
) -> anyhow::Result<Vec<AssetPath>> {
    let excludes = discover::Excludes::new(cfg)?;
    let mut out: Vec<AssetPath> = paths
        .into_iter()
        .filter(|p| !excludes.is_excluded(p.as_str()))
        .filter(|p| root.join(p.as_str()).is_file())
        .collect();
    out.sort();
    out.dedup();
    Ok(out)
}
