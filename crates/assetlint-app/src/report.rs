use anyhow::Context;
use assetlint_domain::report::AssetResult;
use assetlint_render::{
    RenderableData, RenderableFinding, RenderableReport, RenderableRow, RenderableSeverity,
    RenderableVerdictStatus,
};
use assetlint_types::{
    AssetlintData, AssetlintReport, Finding, SCHEMA_REPORT_V1, Severity, ToolMeta, Verdict, ids,
};
use time::OffsetDateTime;

pub fn parse_report_json(text: &str) -> anyhow::Result<AssetlintReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse assetlint report")
}

pub fn serialize_report(report: &AssetlintReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &AssetlintReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Warn => RenderableVerdictStatus::Warn,
            Verdict::Fail => RenderableVerdictStatus::Fail,
        },
        findings: report.findings.iter().map(renderable_finding).collect(),
        data: RenderableData {
            assets_scanned: report.data.assets_scanned,
            findings_emitted: report.data.findings_emitted,
            findings_total: report.data.findings_total,
            truncated_reason: report.data.truncated_reason.clone(),
        },
    }
}

fn renderable_finding(f: &Finding) -> RenderableFinding {
    RenderableFinding {
        severity: match f.severity {
            Severity::Info => RenderableSeverity::Info,
            Severity::Warning => RenderableSeverity::Warning,
            Severity::Error => RenderableSeverity::Error,
        },
        check_id: f.check_id.clone(),
        code: f.code.clone(),
        message: f.message.clone(),
        path: f.location.as_ref().map(|loc| loc.path.as_str().to_string()),
        help: f.help.clone(),
        suggestion: f
            .data
            .get("suggestion")
            .and_then(|v| v.as_str())
            .map(str::to_string),
    }
}

/// Console rows for the evaluated assets. Suppressed violations count as OK.
pub fn to_rows(results: &[AssetResult]) -> Vec<RenderableRow> {
    results
        .iter()
        .map(|r| RenderableRow {
            path: r.path.as_str().to_string(),
            reason: r.is_flagged().then(|| r.verdict.violation_reason.clone()),
            suggestion: if r.is_flagged() {
                r.verdict.suggested_name.clone()
            } else {
                None
            },
        })
        .collect()
}

fn tool_meta() -> ToolMeta {
    ToolMeta {
        name: "assetlint".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

pub fn empty_report(scope: &str, profile: &str) -> AssetlintReport {
    let now = OffsetDateTime::now_utc();
    AssetlintReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at: now,
        finished_at: now,
        verdict: Verdict::Pass,
        findings: Vec::new(),
        data: AssetlintData {
            scope: scope.to_string(),
            profile: profile.to_string(),
            ..AssetlintData::default()
        },
    }
}

pub fn runtime_error_report(message: &str) -> AssetlintReport {
    let now = OffsetDateTime::now_utc();
    AssetlintReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        findings: vec![Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_TOOL_RUNTIME.to_string(),
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            message: message.to_string(),
            location: None,
            help: Some("Fix the tool error and re-run assetlint.".to_string()),
            url: None,
            fingerprint: None,
            data: serde_json::Value::Null,
        }],
        data: AssetlintData {
            scope: "repo".to_string(),
            profile: "unknown".to_string(),
            findings_total: 1,
            findings_emitted: 1,
            ..AssetlintData::default()
        },
    }
}
