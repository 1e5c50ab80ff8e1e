use crate::model::{AssetEntry, AssetKind, AssetModel};
use crate::policy::{CheckPolicy, EffectiveConfig, FailOn, Scope};
use assetlint_types::{AssetPath, Severity, ids};
use std::collections::BTreeMap;

pub fn asset(path: &str, kind: AssetKind) -> AssetEntry {
    AssetEntry::new(AssetPath::new(path), kind)
}

pub fn model(assets: Vec<AssetEntry>) -> AssetModel {
    AssetModel {
        root: AssetPath::new("."),
        assets,
    }
}

/// Every naming check enabled at one severity.
pub fn config(severity: Severity) -> EffectiveConfig {
    let checks: BTreeMap<String, CheckPolicy> = ids::ALL_NAMING_CHECKS
        .iter()
        .map(|id| (id.to_string(), CheckPolicy::enabled(severity)))
        .collect();
    EffectiveConfig {
        profile: "test".to_string(),
        scope: Scope::Repo,
        fail_on: FailOn::Error,
        max_findings: 200,
        checks,
    }
}
