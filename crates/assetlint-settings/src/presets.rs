use assetlint_domain::policy::{CheckPolicy, EffectiveConfig, FailOn, Scope};
use assetlint_types::{Severity, ids};
use std::collections::BTreeMap;

pub const PROFILES: &[&str] = &["strict", "warn", "compat"];

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex should go into repo config.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "warn" => warn_profile(),
        "compat" => compat_profile(),
        // default
        _ => strict_profile(),
    }
}

fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        scope: Scope::Repo,
        fail_on: FailOn::Error,
        max_findings: 200,
        checks: all_checks(|_| Severity::Error),
    }
}

fn warn_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "warn".to_string(),
        scope: Scope::Repo,
        fail_on: FailOn::Warning,
        max_findings: 200,
        checks: all_checks(|_| Severity::Warning),
    }
}

fn compat_profile() -> EffectiveConfig {
    // Broken names and scripts still fail; prefix conventions only warn.
    EffectiveConfig {
        profile: "compat".to_string(),
        scope: Scope::Repo,
        fail_on: FailOn::Error,
        max_findings: 200,
        checks: all_checks(|id| match id {
            ids::CHECK_NAMING_EMPTY_NAME | ids::CHECK_NAMING_SCRIPT_PASCAL_CASE => Severity::Error,
            _ => Severity::Warning,
        }),
    }
}

fn all_checks(severity_for: impl Fn(&str) -> Severity) -> BTreeMap<String, CheckPolicy> {
    ids::ALL_NAMING_CHECKS
        .iter()
        .map(|id| (id.to_string(), CheckPolicy::enabled(severity_for(id))))
        .collect()
}
