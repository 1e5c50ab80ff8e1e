use camino::{Utf8Path, Utf8PathBuf};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canonical root-relative asset path used in findings, reports and the issue store.
///
/// Normalization rules are intentionally simple and deterministic:
/// - always forward slashes (`/`)
/// - no leading `./`
/// - never empty (`.` stands for the root itself)
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct AssetPath(String);

impl Default for AssetPath {
    fn default() -> Self {
        AssetPath::new(".")
    }
}

impl AssetPath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let mut v = s.as_ref().replace('\\', "/");
        while v.starts_with("./") {
            v = v.trim_start_matches("./").to_string();
        }
        if v.is_empty() {
            v = ".".to_string();
        }
        Self(v)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_utf8_pathbuf(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(self.0.clone())
    }

    pub fn join(&self, segment: &str) -> AssetPath {
        let base = Utf8Path::new(self.as_str());
        AssetPath::new(base.join(segment).as_str())
    }

    /// Final path component including its extension.
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// File name without the last extension (`icon.png` -> `icon`, `.hidden` -> `.hidden`).
    pub fn file_stem(&self) -> &str {
        let name = self.file_name();
        match name.rfind('.') {
            Some(0) | None => name,
            Some(i) => &name[..i],
        }
    }

    /// Lower-cased extension with its leading dot, or an empty string.
    pub fn extension(&self) -> String {
        let name = self.file_name();
        match name.rfind('.') {
            Some(0) | None => String::new(),
            Some(i) => name[i..].to_ascii_lowercase(),
        }
    }

    /// Parent directory, or `None` for a top-level entry.
    pub fn parent(&self) -> Option<&str> {
        self.0.rfind('/').map(|i| &self.0[..i])
    }

    /// Sibling path with a different file name in the same directory.
    pub fn with_file_name(&self, file_name: &str) -> AssetPath {
        match self.parent() {
            Some(dir) => AssetPath::new(format!("{dir}/{file_name}")),
            None => AssetPath::new(file_name),
        }
    }
}

impl From<&Utf8Path> for AssetPath {
    fn from(value: &Utf8Path) -> Self {
        AssetPath::new(value.as_str())
    }
}

impl From<Utf8PathBuf> for AssetPath {
    fn from(value: Utf8PathBuf) -> Self {
        AssetPath::new(value.as_str())
    }
}

impl std::fmt::Display for AssetPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
