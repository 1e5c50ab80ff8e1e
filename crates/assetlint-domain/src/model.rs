use crate::rules::Rule;
use assetlint_types::AssetPath;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semantic category of an asset.
///
/// Stands in for the type the host editor would report for the asset's main object; callers
/// resolve it (typically from the file extension) before asking the engine.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    #[default]
    Unknown,
    Script,
    Scene,
    Prefab,
    Material,
    Texture,
    Shader,
    AnimationClip,
    AnimatorController,
    AnimatorOverrideController,
    AudioClip,
    AudioMixerController,
    ScriptableObject,
}

impl AssetKind {
    pub const ALL: [AssetKind; 13] = [
        AssetKind::Unknown,
        AssetKind::Script,
        AssetKind::Scene,
        AssetKind::Prefab,
        AssetKind::Material,
        AssetKind::Texture,
        AssetKind::Shader,
        AssetKind::AnimationClip,
        AssetKind::AnimatorController,
        AssetKind::AnimatorOverrideController,
        AssetKind::AudioClip,
        AssetKind::AudioMixerController,
        AssetKind::ScriptableObject,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AssetKind::Unknown => "unknown",
            AssetKind::Script => "script",
            AssetKind::Scene => "scene",
            AssetKind::Prefab => "prefab",
            AssetKind::Material => "material",
            AssetKind::Texture => "texture",
            AssetKind::Shader => "shader",
            AssetKind::AnimationClip => "animation_clip",
            AssetKind::AnimatorController => "animator_controller",
            AssetKind::AnimatorOverrideController => "animator_override_controller",
            AssetKind::AudioClip => "audio_clip",
            AssetKind::AudioMixerController => "audio_mixer_controller",
            AssetKind::ScriptableObject => "scriptable_object",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownAssetKind(pub String);

impl fmt::Display for UnknownAssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown asset kind: {}", self.0)
    }
}

impl std::error::Error for UnknownAssetKind {}

impl FromStr for AssetKind {
    type Err = UnknownAssetKind;

    /// Accepts the snake_case form (`audio_clip`) as well as host type names (`AudioClip`),
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        AssetKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().replace('_', "") == wanted)
            .ok_or_else(|| UnknownAssetKind(s.to_string()))
    }
}

/// Input to the rule engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamingRequest {
    /// File name without extension.
    pub base_name: String,
    /// Lower-case extension including the leading dot, or empty.
    pub extension: String,
    pub kind: AssetKind,
    /// Forward-slash path of the containing folder; only used for folder heuristics.
    pub containing_path: String,
}

impl NamingRequest {
    /// Build a request, normalizing the extension to lower case with a leading dot.
    pub fn new(
        base_name: impl Into<String>,
        extension: &str,
        kind: AssetKind,
        containing_path: impl Into<String>,
    ) -> Self {
        let mut ext = extension.trim().to_ascii_lowercase();
        if !ext.is_empty() && !ext.starts_with('.') {
            ext.insert(0, '.');
        }
        Self {
            base_name: base_name.into(),
            extension: ext,
            kind,
            containing_path: containing_path.into(),
        }
    }

    /// Build a request for an asset path.
    ///
    /// The containing path is wrapped in slashes (`/Assets/UI/Sprites/`) so folder heuristics
    /// match whether the folder is at the root or nested.
    pub fn for_path(path: &AssetPath, kind: AssetKind) -> Self {
        let containing = match path.parent() {
            Some(dir) => format!("/{dir}/"),
            None => "/".to_string(),
        };
        Self::new(path.file_stem(), &path.extension(), kind, containing)
    }

    /// Same request with a different base name.
    pub fn with_base_name(&self, base_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            ..self.clone()
        }
    }
}

/// Output of the rule engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamingVerdict {
    pub is_valid: bool,
    /// Human-readable reason; empty when valid.
    pub violation_reason: String,
    /// Present only when a correction can be derived and it validates itself.
    pub suggested_name: Option<String>,
    /// The rule category that applied, if any did.
    pub rule: Option<Rule>,
}

impl NamingVerdict {
    pub fn valid(rule: Option<Rule>) -> Self {
        Self {
            is_valid: true,
            violation_reason: String::new(),
            suggested_name: None,
            rule,
        }
    }
}

/// One enumerated asset and the request derived from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetEntry {
    pub path: AssetPath,
    pub request: NamingRequest,
}

impl AssetEntry {
    pub fn new(path: AssetPath, kind: AssetKind) -> Self {
        let request = NamingRequest::for_path(&path, kind);
        Self { path, request }
    }
}

/// The set of assets in scope for one evaluation.
#[derive(Clone, Debug, Default)]
pub struct AssetModel {
    pub root: AssetPath,
    pub assets: Vec<AssetEntry>,
}
