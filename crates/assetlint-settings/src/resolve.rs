use crate::{model::AssetlintConfigV1, presets};
use anyhow::Context;
use assetlint_domain::AssetKind;
use assetlint_domain::policy::{CheckPolicy, DiscoveryConfig, EffectiveConfig, FailOn, Scope};
use assetlint_types::{Severity, ids};
use globset::Glob;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub scope: Option<String>,
    pub max_findings: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
    pub discovery: DiscoveryConfig,
}

pub fn resolve_config(
    cfg: AssetlintConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "strict".to_string());

    let mut effective = presets::preset(&profile);

    // Scope
    if let Some(scope_s) = overrides.scope.clone().or(cfg.scope.clone()) {
        effective.scope = parse_scope(&scope_s)?;
    }

    // max findings
    if let Some(mf) = overrides.max_findings.or(cfg.max_findings) {
        effective.max_findings = mf as usize;
    }

    // per-check overrides
    for (check_id, cc) in cfg.checks.iter() {
        if !ids::ALL_NAMING_CHECKS.contains(&check_id.as_str()) {
            anyhow::bail!("unknown check id in config: {check_id}");
        }
        let entry = effective
            .checks
            .entry(check_id.clone())
            .or_insert_with(CheckPolicy::disabled);

        if let Some(enabled) = cc.enabled {
            entry.enabled = enabled;
        }
        if let Some(sev) = cc.severity.as_deref() {
            entry.severity =
                parse_severity(sev).with_context(|| format!("invalid severity for {check_id}"))?;
        }
        if !cc.allow.is_empty() {
            validate_globs(&format!("allow glob for {check_id}"), &cc.allow)?;
            entry.allow = cc.allow.clone();
        }
    }

    // fail_on override from config
    if let Some(fail_on_s) = cfg.fail_on.as_deref() {
        effective.fail_on = parse_fail_on(fail_on_s)?;
    }

    validate_globs("ignore glob", &cfg.ignore)?;
    let mut discovery = DiscoveryConfig {
        ignore: cfg.ignore.clone(),
        ..DiscoveryConfig::default()
    };
    for (ext, kind) in &cfg.kinds {
        let kind: AssetKind = kind
            .parse()
            .with_context(|| format!("invalid kind for extension {ext}"))?;
        discovery.kinds.insert(normalize_extension(ext), kind);
    }

    Ok(ResolvedConfig {
        effective,
        discovery,
    })
}

fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim().to_ascii_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{ext}")
    }
}

fn validate_globs(what: &str, patterns: &[String]) -> anyhow::Result<()> {
    for pattern in patterns {
        Glob::new(pattern).with_context(|| format!("invalid {what}: {pattern}"))?;
    }
    Ok(())
}

fn parse_scope(v: &str) -> anyhow::Result<Scope> {
    match v {
        "repo" => Ok(Scope::Repo),
        "diff" => Ok(Scope::Diff),
        "selection" => Ok(Scope::Selection),
        other => anyhow::bail!("unknown scope: {other} (expected repo|diff|selection)"),
    }
}

fn parse_severity(v: &str) -> anyhow::Result<Severity> {
    match v {
        "info" => Ok(Severity::Info),
        "warning" | "warn" => Ok(Severity::Warning),
        "error" => Ok(Severity::Error),
        other => anyhow::bail!("unknown severity: {other} (expected info|warning|error)"),
    }
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "error" => Ok(FailOn::Error),
        "warning" | "warn" => Ok(FailOn::Warning),
        other => anyhow::bail!("unknown fail_on: {other} (expected error|warning)"),
    }
}
