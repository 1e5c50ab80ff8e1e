use crate::model::{AssetKind, NamingVerdict};
use assetlint_types::{AssetPath, AssetlintData, Finding, Severity, Verdict};

#[derive(Clone, Debug, Default)]
pub struct SeverityCounts {
    pub info: u32,
    pub warning: u32,
    pub error: u32,
}

impl SeverityCounts {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut counts = SeverityCounts::default();
        for f in findings {
            match f.severity {
                Severity::Info => counts.info += 1,
                Severity::Warning => counts.warning += 1,
                Severity::Error => counts.error += 1,
            }
        }
        counts
    }
}

/// Engine verdict for one asset, kept even when the asset is valid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetResult {
    pub path: AssetPath,
    pub base_name: String,
    pub extension: String,
    pub kind: AssetKind,
    pub verdict: NamingVerdict,
    /// Invalid, but its check is disabled or the path is allowlisted.
    pub suppressed: bool,
}

impl AssetResult {
    /// Invalid and reported.
    pub fn is_flagged(&self) -> bool {
        !self.verdict.is_valid && !self.suppressed
    }
}

#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    pub findings: Vec<Finding>,
    pub data: AssetlintData,
    pub counts: SeverityCounts,
    /// One entry per evaluated asset, in input order.
    pub results: Vec<AssetResult>,
}
