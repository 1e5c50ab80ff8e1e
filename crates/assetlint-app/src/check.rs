//! The `check` use case: evaluate naming rules and produce a report.

use anyhow::Context;
use assetlint_domain::policy::Scope as DomainScope;
use assetlint_domain::report::{AssetResult, DomainReport};
use assetlint_repo::ScopeInput;
use assetlint_settings::{Overrides, ResolvedConfig};
use assetlint_types::{AssetPath, AssetlintReport, SCHEMA_REPORT_V1, ToolMeta, Verdict};
use camino::Utf8Path;
use time::OffsetDateTime;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Project root path.
    pub repo_root: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// For selection scope: the assets to check (relative to the root).
    pub paths: Option<Vec<AssetPath>>,
    /// For diff scope: list of changed files (relative to the root).
    pub changed_files: Option<Vec<AssetPath>>,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated report.
    pub report: AssetlintReport,
    /// Per-asset verdicts, valid ones included, in path order.
    pub results: Vec<AssetResult>,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: parse config, enumerate assets, evaluate rules, produce report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        assetlint_settings::AssetlintConfigV1::default()
    } else {
        assetlint_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = assetlint_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;
    tracing::debug!(
        profile = %resolved.effective.profile,
        scope = resolved.effective.scope.as_str(),
        max_findings = resolved.effective.max_findings,
        "resolved config"
    );

    let scope_input = match resolved.effective.scope {
        DomainScope::Repo => ScopeInput::Repo,
        DomainScope::Selection => {
            let paths = input
                .paths
                .clone()
                .context("selection scope requires paths")?;
            ScopeInput::Selection { paths }
        }
        DomainScope::Diff => {
            let changed_files = input
                .changed_files
                .clone()
                .context("diff scope requires changed_files")?;
            ScopeInput::Diff { changed_files }
        }
    };

    let model = assetlint_repo::build_asset_model(input.repo_root, scope_input, &resolved.discovery)
        .context("build asset model")?;

    let DomainReport {
        verdict,
        findings,
        data,
        counts,
        results,
    } = assetlint_domain::evaluate(&model, &resolved.effective);

    tracing::info!(
        verdict = ?verdict,
        assets = data.assets_scanned,
        errors = counts.error,
        warnings = counts.warning,
        "check complete"
    );

    let report = AssetlintReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "assetlint".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict,
        findings,
        data,
    };

    Ok(CheckOutput {
        report,
        results,
        resolved_config: resolved,
    })
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}
