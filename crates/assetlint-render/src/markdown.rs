use crate::{RenderableReport, RenderableSeverity, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Assetlint report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Warn => "WARN",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Assets scanned: {}\n- Findings: {} (emitted) / {} (total)\n\n",
        verdict,
        report.data.assets_scanned,
        report.data.findings_emitted,
        report.data.findings_total
    ));

    if let Some(r) = &report.data.truncated_reason {
        out.push_str(&format!("> Note: {}\n\n", r));
    }

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    out.push_str("## Findings\n\n");

    for f in &report.findings {
        let sev = match f.severity {
            RenderableSeverity::Info => "INFO",
            RenderableSeverity::Warning => "WARN",
            RenderableSeverity::Error => "ERROR",
        };

        match &f.path {
            Some(path) => out.push_str(&format!(
                "- [{}] `{}`: {} (`{}` / `{}`)\n",
                sev, path, f.message, f.check_id, f.code
            )),
            None => out.push_str(&format!(
                "- [{}] {} (`{}` / `{}`)\n",
                sev, f.message, f.check_id, f.code
            )),
        }

        if let Some(help) = &f.help {
            out.push_str(&format!("  - help: {}\n", help));
        }
    }

    let renames: Vec<_> = report
        .findings
        .iter()
        .filter_map(|f| Some((f.path.as_deref()?, f.suggestion.as_deref()?)))
        .collect();
    if !renames.is_empty() {
        out.push_str("\n## Suggested renames\n\n| Asset | Suggested name |\n| --- | --- |\n");
        for (path, name) in renames {
            out.push_str(&format!("| `{}` | `{}` |\n", path, name));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RenderableData, RenderableFinding};

    fn data(emitted: u32, total: u32, truncated: Option<&str>) -> RenderableData {
        RenderableData {
            assets_scanned: 12,
            findings_emitted: emitted,
            findings_total: total,
            truncated_reason: truncated.map(str::to_string),
        }
    }

    #[test]
    fn renders_empty_report() {
        let report = RenderableReport {
            verdict: RenderableVerdictStatus::Pass,
            findings: Vec::new(),
            data: data(0, 0, None),
        };
        let md = render_markdown(&report);
        assert!(md.contains("Verdict: **PASS**"));
        assert!(md.contains("Assets scanned: 12"));
        assert!(md.contains("No findings"));
        assert!(!md.contains("Suggested renames"));
    }

    #[test]
    fn renders_findings_help_truncation_and_renames() {
        let report = RenderableReport {
            verdict: RenderableVerdictStatus::Fail,
            findings: vec![
                RenderableFinding {
                    severity: RenderableSeverity::Warning,
                    check_id: "naming.texture_prefix".to_string(),
                    code: "missing_prefix".to_string(),
                    message: "Texture should start with 'tex_'".to_string(),
                    path: Some("Assets/Grass.png".to_string()),
                    help: Some("Rename to 'tex_Grass.png'.".to_string()),
                    suggestion: Some("tex_Grass".to_string()),
                },
                RenderableFinding {
                    severity: RenderableSeverity::Error,
                    check_id: "tool.runtime".to_string(),
                    code: "runtime_error".to_string(),
                    message: "boom".to_string(),
                    path: None,
                    help: None,
                    suggestion: None,
                },
            ],
            data: data(2, 3, Some("truncated")),
        };

        let md = render_markdown(&report);
        assert!(md.contains("Verdict: **FAIL**"));
        assert!(md.contains("> Note: truncated"));
        assert!(md.contains("## Findings"));
        assert!(md.contains(
            "- [WARN] `Assets/Grass.png`: Texture should start with 'tex_' (`naming.texture_prefix` / `missing_prefix`)"
        ));
        assert!(md.contains("help: Rename to 'tex_Grass.png'."));
        assert!(md.contains("- [ERROR] boom (`tool.runtime` / `runtime_error`)"));
        assert!(md.contains("| `Assets/Grass.png` | `tex_Grass` |"));
    }
}
