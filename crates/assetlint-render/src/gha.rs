use crate::{RenderableReport, RenderableSeverity};

/// Render findings as GitHub Actions workflow command annotations.
///
/// Format:
/// `::{level} file={path}::[{check_id}:{code}] {message}`
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    report
        .findings
        .iter()
        .map(|f| {
            let level = match f.severity {
                RenderableSeverity::Error => "error",
                RenderableSeverity::Warning => "warning",
                RenderableSeverity::Info => "notice",
            };

            let mut text = format!("[{}:{}] {}", f.check_id, f.code, f.message);
            if let Some(s) = &f.suggestion {
                text.push_str(&format!(" (suggest: {s})"));
            }
            let message = escape_data(&text);

            match &f.path {
                Some(path) => format!("::{} file={}::{}", level, escape_property(path), message),
                None => format!("::{}::{}", level, message),
            }
        })
        .collect()
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RenderableData, RenderableFinding, RenderableVerdictStatus};

    fn report(findings: Vec<RenderableFinding>) -> RenderableReport {
        RenderableReport {
            verdict: RenderableVerdictStatus::Fail,
            data: RenderableData {
                assets_scanned: 1,
                findings_emitted: findings.len() as u32,
                findings_total: findings.len() as u32,
                truncated_reason: None,
            },
            findings,
        }
    }

    fn finding(severity: RenderableSeverity, path: Option<&str>, message: &str) -> RenderableFinding {
        RenderableFinding {
            severity,
            check_id: "naming.texture_prefix".to_string(),
            code: "missing_prefix".to_string(),
            message: message.to_string(),
            path: path.map(str::to_string),
            help: None,
            suggestion: None,
        }
    }

    #[test]
    fn renders_levels_and_file_property() {
        let r = report(vec![
            finding(RenderableSeverity::Error, Some("Assets/a.png"), "bad"),
            finding(RenderableSeverity::Warning, Some("Assets/b.png"), "meh"),
            finding(RenderableSeverity::Info, None, "fyi"),
        ]);
        assert_eq!(
            render_github_annotations(&r),
            vec![
                "::error file=Assets/a.png::[naming.texture_prefix:missing_prefix] bad",
                "::warning file=Assets/b.png::[naming.texture_prefix:missing_prefix] meh",
                "::notice::[naming.texture_prefix:missing_prefix] fyi",
            ]
        );
    }

    #[test]
    fn escapes_percent_and_newlines() {
        let r = report(vec![finding(
            RenderableSeverity::Error,
            Some("Assets/100%,a.png"),
            "50%\nnext\r",
        )]);
        let lines = render_github_annotations(&r);
        assert_eq!(
            lines[0],
            "::error file=Assets/100%25%2Ca.png::[naming.texture_prefix:missing_prefix] 50%25%0Anext%0D"
        );
    }

    #[test]
    fn suggestion_is_appended() {
        let mut f = finding(RenderableSeverity::Warning, Some("Assets/Grass.png"), "missing prefix");
        f.suggestion = Some("tex_Grass".to_string());
        let lines = render_github_annotations(&report(vec![f]));
        assert!(lines[0].ends_with("missing prefix (suggest: tex_Grass)"));
    }
}
