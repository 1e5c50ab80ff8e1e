use crate::AssetPath;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Stable schema identifier for the pending-rename store.
pub const SCHEMA_ISSUES_V1: &str = "assetlint.issues.v1";

/// Default location of the store, relative to the project root.
pub const DEFAULT_ISSUES_PATH: &str = ".assetlint/issues.json";

/// One asset waiting to be renamed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NamingIssue {
    pub asset_path: AssetPath,
    /// File name without extension at the time the issue was recorded.
    pub current_name: String,
    pub extension: String,
    /// Snake-case asset kind name (`texture`, `audio_clip`, ...).
    pub kind: String,
    /// Proposed base name; editable before applying.
    pub suggestion: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reason: String,
    #[serde(default = "default_selected")]
    pub selected: bool,
}

fn default_selected() -> bool {
    true
}

/// Persistent list of pending renames, keyed by asset path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct IssueStore {
    pub schema: String,
    #[serde(default)]
    pub issues: Vec<NamingIssue>,
}

impl Default for IssueStore {
    fn default() -> Self {
        Self {
            schema: SCHEMA_ISSUES_V1.to_string(),
            issues: Vec::new(),
        }
    }
}

impl IssueStore {
    pub fn get(&self, path: &AssetPath) -> Option<&NamingIssue> {
        self.issues.iter().find(|i| i.asset_path == *path)
    }

    /// Replace the issue for the same asset in place, or append it.
    pub fn add_or_update(&mut self, issue: NamingIssue) {
        match self.issues.iter_mut().find(|i| i.asset_path == issue.asset_path) {
            Some(existing) => *existing = issue,
            None => self.issues.push(issue),
        }
    }

    /// Returns the removed issue, if any.
    pub fn remove(&mut self, path: &AssetPath) -> Option<NamingIssue> {
        let idx = self.issues.iter().position(|i| i.asset_path == *path)?;
        Some(self.issues.remove(idx))
    }

    pub fn clear(&mut self) {
        self.issues.clear();
    }

    /// Returns false when no issue exists for `path`.
    pub fn set_selected(&mut self, path: &AssetPath, selected: bool) -> bool {
        match self.issues.iter_mut().find(|i| i.asset_path == *path) {
            Some(issue) => {
                issue.selected = selected;
                true
            }
            None => false,
        }
    }

    /// Returns false when no issue exists for `path`.
    pub fn set_suggestion(&mut self, path: &AssetPath, suggestion: &str) -> bool {
        match self.issues.iter_mut().find(|i| i.asset_path == *path) {
            Some(issue) => {
                issue.suggestion = suggestion.to_string();
                true
            }
            None => false,
        }
    }

    pub fn selected(&self) -> impl Iterator<Item = &NamingIssue> {
        self.issues.iter().filter(|i| i.selected)
    }
}
