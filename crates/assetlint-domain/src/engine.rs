use crate::fingerprint::fingerprint_for_asset;
use crate::model::{AssetEntry, AssetModel, NamingVerdict};
use crate::policy::{EffectiveConfig, FailOn};
use crate::report::{AssetResult, DomainReport, SeverityCounts};
use crate::rules::{self, Rule};
use assetlint_types::{AssetlintData, Finding, Location, Severity, Verdict, lookup_explanation};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde_json::json;
use std::collections::BTreeMap;

pub fn evaluate(model: &AssetModel, cfg: &EffectiveConfig) -> DomainReport {
    let allowlists = build_allowlists(cfg);

    let mut findings: Vec<Finding> = Vec::new();
    let mut results: Vec<AssetResult> = Vec::with_capacity(model.assets.len());

    for asset in &model.assets {
        let verdict = rules::validate(&asset.request);
        let mut suppressed = false;

        if let (false, Some(rule)) = (verdict.is_valid, verdict.rule) {
            match cfg.check_policy(rule.check_id()) {
                Some(policy) => {
                    let allowed = allowlists
                        .get(rule.check_id())
                        .is_some_and(|set| set.is_match(asset.path.as_str()));
                    if allowed {
                        suppressed = true;
                    } else {
                        findings.push(finding_for(asset, rule, &verdict, policy.severity));
                    }
                }
                None => suppressed = true,
            }
        }

        results.push(AssetResult {
            path: asset.path.clone(),
            base_name: asset.request.base_name.clone(),
            extension: asset.request.extension.clone(),
            kind: asset.request.kind,
            verdict,
            suppressed,
        });
    }

    // Deterministic ordering before truncation.
    findings.sort_by(compare_findings);

    let total = findings.len() as u32;

    // Verdict and counts cover every finding, emitted or not.
    let verdict = compute_verdict(&findings, cfg.fail_on);
    let counts = SeverityCounts::from_findings(&findings);

    let mut emitted = findings;
    let mut truncated_reason: Option<String> = None;
    if emitted.len() > cfg.max_findings {
        emitted.truncate(cfg.max_findings);
        truncated_reason = Some(format!(
            "findings truncated to max_findings={}",
            cfg.max_findings
        ));
    }

    let data = AssetlintData {
        scope: cfg.scope.as_str().to_string(),
        profile: cfg.profile.clone(),
        assets_scanned: model.assets.len() as u32,
        findings_total: total,
        findings_emitted: emitted.len() as u32,
        truncated_reason,
    };

    DomainReport {
        verdict,
        findings: emitted,
        data,
        counts,
        results,
    }
}

fn finding_for(asset: &AssetEntry, rule: Rule, verdict: &NamingVerdict, severity: Severity) -> Finding {
    let request = &asset.request;
    let help = match &verdict.suggested_name {
        Some(name) => Some(format!("Rename to '{}{}'.", name, request.extension)),
        None => lookup_explanation(rule.check_id()).map(|e| e.remediation.to_string()),
    };

    Finding {
        severity,
        check_id: rule.check_id().to_string(),
        code: rule.code().to_string(),
        message: verdict.violation_reason.clone(),
        location: Some(Location {
            path: asset.path.clone(),
        }),
        help,
        url: None,
        fingerprint: Some(fingerprint_for_asset(
            rule.check_id(),
            rule.code(),
            asset.path.as_str(),
        )),
        data: json!({
            "asset": asset.path.as_str(),
            "name": request.base_name,
            "extension": request.extension,
            "kind": request.kind.as_str(),
            "expected_prefixes": rule.accepted_prefixes(),
            "suggestion": verdict.suggested_name,
        }),
    }
}

/// Allowlist glob sets keyed by check id. Patterns that fail to parse are skipped; settings
/// rejects them before they reach the engine.
fn build_allowlists(cfg: &EffectiveConfig) -> BTreeMap<&str, GlobSet> {
    let mut out = BTreeMap::new();
    for (check_id, policy) in &cfg.checks {
        if !policy.enabled || policy.allow.is_empty() {
            continue;
        }
        let mut builder = GlobSetBuilder::new();
        for pattern in &policy.allow {
            if let Ok(glob) = Glob::new(pattern) {
                builder.add(glob);
            }
        }
        if let Ok(set) = builder.build() {
            out.insert(check_id.as_str(), set);
        }
    }
    out
}

fn compute_verdict(findings: &[Finding], fail_on: FailOn) -> Verdict {
    let has_error = findings.iter().any(|f| f.severity == Severity::Error);
    if has_error {
        return Verdict::Fail;
    }

    let has_warn = findings.iter().any(|f| f.severity == Severity::Warning);
    if has_warn {
        return match fail_on {
            FailOn::Warning => Verdict::Fail,
            FailOn::Error => Verdict::Warn,
        };
    }

    Verdict::Pass
}

fn compare_findings(a: &Finding, b: &Finding) -> std::cmp::Ordering {
    // Ordering priority:
    // 1) severity (error -> warning -> info)
    // 2) location.path (missing last)
    // 3) check_id
    // 4) code
    // 5) message
    let severity_rank = |sev: Severity| match sev {
        Severity::Error => 0,
        Severity::Warning => 1,
        Severity::Info => 2,
    };
    let path = |f: &Finding| {
        f.location
            .as_ref()
            .map(|l| l.path.as_str().to_string())
            .unwrap_or_else(|| "~".to_string())
    };

    severity_rank(a.severity)
        .cmp(&severity_rank(b.severity))
        .then_with(|| path(a).cmp(&path(b)))
        .then_with(|| a.check_id.cmp(&b.check_id))
        .then_with(|| a.code.cmp(&b.code))
        .then_with(|| a.message.cmp(&b.message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AssetKind;
    use crate::policy::CheckPolicy;
    use crate::test_support::{asset, config, model};
    use assetlint_types::ids;

    #[test]
    fn valid_assets_produce_no_findings() {
        let m = model(vec![
            asset("Assets/Scripts/PlayerController.cs", AssetKind::Script),
            asset("Assets/Textures/tex_Grass.png", AssetKind::Texture),
            asset("Assets/Audio/mus_Theme.ogg", AssetKind::AudioClip),
        ]);
        let report = evaluate(&m, &config(Severity::Error));
        assert_eq!(report.verdict, Verdict::Pass);
        assert!(report.findings.is_empty());
        assert_eq!(report.data.assets_scanned, 3);
        assert_eq!(report.results.len(), 3);
        assert!(report.results.iter().all(|r| r.verdict.is_valid));
    }

    #[test]
    fn invalid_texture_is_reported_with_suggestion() {
        let m = model(vec![asset("Assets/Textures/Grass.png", AssetKind::Texture)]);
        let report = evaluate(&m, &config(Severity::Error));

        assert_eq!(report.verdict, Verdict::Fail);
        assert_eq!(report.findings.len(), 1);
        let f = &report.findings[0];
        assert_eq!(f.check_id, ids::CHECK_NAMING_TEXTURE_PREFIX);
        assert_eq!(f.code, ids::CODE_MISSING_PREFIX);
        assert_eq!(f.help.as_deref(), Some("Rename to 'tex_Grass.png'."));
        assert_eq!(f.data["suggestion"], "tex_Grass");
        assert_eq!(f.data["expected_prefixes"], json!(["tex_"]));
        assert_eq!(f.data["kind"], "texture");
        assert!(f.fingerprint.as_deref().is_some_and(|fp| fp.len() == 64));
    }

    #[test]
    fn empty_name_falls_back_to_remediation_help() {
        let m = model(vec![asset("Assets/Prefabs/ .prefab", AssetKind::Prefab)]);
        let report = evaluate(&m, &config(Severity::Error));
        assert_eq!(report.findings.len(), 1);
        let f = &report.findings[0];
        assert_eq!(f.check_id, ids::CHECK_NAMING_EMPTY_NAME);
        assert!(f.help.is_some());
        assert!(f.data["suggestion"].is_null());
    }

    #[test]
    fn verdict_warn_becomes_fail_when_fail_on_warning() {
        let m = model(vec![asset("Assets/Textures/Grass.png", AssetKind::Texture)]);

        let mut cfg = config(Severity::Warning);
        assert_eq!(evaluate(&m, &cfg).verdict, Verdict::Warn);

        cfg.fail_on = FailOn::Warning;
        assert_eq!(evaluate(&m, &cfg).verdict, Verdict::Fail);
    }

    #[test]
    fn disabled_check_suppresses_finding() {
        let m = model(vec![asset("Assets/Textures/Grass.png", AssetKind::Texture)]);
        let mut cfg = config(Severity::Error);
        cfg.checks.insert(
            ids::CHECK_NAMING_TEXTURE_PREFIX.to_string(),
            CheckPolicy::disabled(),
        );

        let report = evaluate(&m, &cfg);
        assert_eq!(report.verdict, Verdict::Pass);
        assert!(report.findings.is_empty());
        assert!(report.results[0].suppressed);
        assert!(!report.results[0].is_flagged());
    }

    #[test]
    fn allowlisted_path_is_suppressed() {
        let m = model(vec![
            asset("Assets/ThirdParty/Grass.png", AssetKind::Texture),
            asset("Assets/Textures/Grass.png", AssetKind::Texture),
        ]);
        let mut cfg = config(Severity::Error);
        cfg.checks.insert(
            ids::CHECK_NAMING_TEXTURE_PREFIX.to_string(),
            CheckPolicy {
                enabled: true,
                severity: Severity::Error,
                allow: vec!["Assets/ThirdParty/**".to_string()],
            },
        );

        let report = evaluate(&m, &cfg);
        assert_eq!(report.findings.len(), 1);
        assert_eq!(
            report.findings[0].location.as_ref().map(|l| l.path.as_str()),
            Some("Assets/Textures/Grass.png")
        );
        assert!(report.results[0].suppressed);
    }

    #[test]
    fn findings_are_sorted_and_truncated() {
        let m = model(vec![
            asset("Assets/b.png", AssetKind::Texture),
            asset("Assets/a.png", AssetKind::Texture),
            asset("Assets/c.unity", AssetKind::Scene),
        ]);
        let mut cfg = config(Severity::Warning);
        cfg.checks.insert(
            ids::CHECK_NAMING_SCENE_PREFIX.to_string(),
            CheckPolicy::enabled(Severity::Error),
        );
        cfg.max_findings = 2;

        let report = evaluate(&m, &cfg);
        let paths: Vec<_> = report
            .findings
            .iter()
            .filter_map(|f| f.location.as_ref().map(|l| l.path.as_str()))
            .collect();
        assert_eq!(paths, vec!["Assets/c.unity", "Assets/a.png"]);
        assert_eq!(report.data.findings_total, 3);
        assert_eq!(report.data.findings_emitted, 2);
        assert!(report.data.truncated_reason.is_some());
        assert_eq!(report.counts.error, 1);
        assert_eq!(report.counts.warning, 2);
    }

    #[test]
    fn zero_max_findings_still_fails_on_errors() {
        let m = model(vec![asset("Assets/Art/rock.png", AssetKind::Texture)]);
        let mut cfg = config(Severity::Error);
        cfg.max_findings = 0;

        let report = evaluate(&m, &cfg);
        assert!(report.findings.is_empty());
        assert_eq!(report.data.findings_total, 1);
        assert_eq!(report.data.findings_emitted, 0);
        assert!(report.data.truncated_reason.is_some());
        assert_eq!(report.counts.error, 1);
        assert_eq!(report.verdict, Verdict::Fail);
    }

    #[test]
    fn truncated_warnings_still_fail_when_fail_on_warning() {
        let m = model(vec![
            asset("Assets/Scenes/c.unity", AssetKind::Scene),
            asset("Assets/Textures/a.png", AssetKind::Texture),
        ]);
        let mut cfg = config(Severity::Warning);
        cfg.fail_on = FailOn::Warning;
        cfg.max_findings = 0;

        assert_eq!(evaluate(&m, &cfg).verdict, Verdict::Fail);
    }

    #[test]
    fn data_reports_scope_and_profile() {
        let m = model(vec![]);
        let report = evaluate(&m, &config(Severity::Error));
        assert_eq!(report.data.scope, "repo");
        assert_eq!(report.data.profile, "test");
        assert_eq!(report.data.assets_scanned, 0);
        assert_eq!(report.verdict, Verdict::Pass);
    }
}
