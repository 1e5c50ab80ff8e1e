//! The naming rule table: ordered category dispatch, validation and suggestions.
//!
//! Categories are tried in a fixed order and the first one that applies decides the
//! verdict. Requests that match no category are valid. All comparisons are literal,
//! case-sensitive prefix tests.

use crate::model::{AssetKind, NamingRequest, NamingVerdict};
use assetlint_types::ids;

/// Raster image extensions treated as textures or UI sprites.
pub const TEXTURE_EXTENSIONS: &[&str] = &[".png", ".tga", ".jpg", ".jpeg", ".tif", ".tiff", ".psd"];

/// Folder segment that turns a texture into a UI sprite.
pub const UI_SPRITES_SEGMENT: &str = "/UI/Sprites/";

/// Folder segment that marks `.asset` files as ScriptableObject instances.
pub const SCRIPTABLE_OBJECTS_SEGMENT: &str = "/ScriptableObjects/";

/// Prefixes stripped before a suggestion is built. Order decides ties.
pub const KNOWN_PREFIXES: &[&str] = &[
    "pf_", "mat_", "tex_", "spr_", "sh_", "sg_", "vfx_", "anm_", "ac_", "aoc_", "sfx_", "mus_",
    "vox_", "mix_", "so_", "scn_",
];

/// A naming rule category, listed in dispatch priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    EmptyName,
    ScriptPascalCase,
    ScenePrefix,
    PrefabPrefix,
    MaterialPrefix,
    SpritePrefix,
    TexturePrefix,
    ShaderPrefix,
    ShaderGraphPrefix,
    VfxPrefix,
    AnimationClipPrefix,
    AnimatorControllerPrefix,
    AnimatorOverridePrefix,
    AudioPrefix,
    AudioMixerPrefix,
    ScriptableObjectPrefix,
}

impl Rule {
    pub const ALL: [Rule; 16] = [
        Rule::EmptyName,
        Rule::ScriptPascalCase,
        Rule::ScenePrefix,
        Rule::PrefabPrefix,
        Rule::MaterialPrefix,
        Rule::SpritePrefix,
        Rule::TexturePrefix,
        Rule::ShaderPrefix,
        Rule::ShaderGraphPrefix,
        Rule::VfxPrefix,
        Rule::AnimationClipPrefix,
        Rule::AnimatorControllerPrefix,
        Rule::AnimatorOverridePrefix,
        Rule::AudioPrefix,
        Rule::AudioMixerPrefix,
        Rule::ScriptableObjectPrefix,
    ];

    pub fn check_id(self) -> &'static str {
        match self {
            Rule::EmptyName => ids::CHECK_NAMING_EMPTY_NAME,
            Rule::ScriptPascalCase => ids::CHECK_NAMING_SCRIPT_PASCAL_CASE,
            Rule::ScenePrefix => ids::CHECK_NAMING_SCENE_PREFIX,
            Rule::PrefabPrefix => ids::CHECK_NAMING_PREFAB_PREFIX,
            Rule::MaterialPrefix => ids::CHECK_NAMING_MATERIAL_PREFIX,
            Rule::SpritePrefix => ids::CHECK_NAMING_SPRITE_PREFIX,
            Rule::TexturePrefix => ids::CHECK_NAMING_TEXTURE_PREFIX,
            Rule::ShaderPrefix => ids::CHECK_NAMING_SHADER_PREFIX,
            Rule::ShaderGraphPrefix => ids::CHECK_NAMING_SHADER_GRAPH_PREFIX,
            Rule::VfxPrefix => ids::CHECK_NAMING_VFX_PREFIX,
            Rule::AnimationClipPrefix => ids::CHECK_NAMING_ANIMATION_CLIP_PREFIX,
            Rule::AnimatorControllerPrefix => ids::CHECK_NAMING_ANIMATOR_CONTROLLER_PREFIX,
            Rule::AnimatorOverridePrefix => ids::CHECK_NAMING_ANIMATOR_OVERRIDE_PREFIX,
            Rule::AudioPrefix => ids::CHECK_NAMING_AUDIO_PREFIX,
            Rule::AudioMixerPrefix => ids::CHECK_NAMING_AUDIO_MIXER_PREFIX,
            Rule::ScriptableObjectPrefix => ids::CHECK_NAMING_SCRIPTABLE_OBJECT_PREFIX,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Rule::EmptyName => ids::CODE_EMPTY_NAME,
            Rule::ScriptPascalCase => ids::CODE_NOT_PASCAL_CASE,
            _ => ids::CODE_MISSING_PREFIX,
        }
    }

    /// Prefixes that satisfy the rule. Empty for rules that are not prefix conventions.
    pub fn accepted_prefixes(self) -> &'static [&'static str] {
        match self {
            Rule::EmptyName | Rule::ScriptPascalCase => &[],
            Rule::ScenePrefix => &["scn_"],
            Rule::PrefabPrefix => &["pf_"],
            Rule::MaterialPrefix => &["mat_"],
            Rule::SpritePrefix => &["spr_"],
            Rule::TexturePrefix => &["tex_"],
            Rule::ShaderPrefix => &["sh_"],
            Rule::ShaderGraphPrefix => &["sg_"],
            Rule::VfxPrefix => &["vfx_"],
            Rule::AnimationClipPrefix => &["anm_"],
            Rule::AnimatorControllerPrefix => &["ac_"],
            Rule::AnimatorOverridePrefix => &["aoc_"],
            Rule::AudioPrefix => &["sfx_", "mus_", "vox_"],
            Rule::AudioMixerPrefix => &["mix_"],
            Rule::ScriptableObjectPrefix => &["so_"],
        }
    }

    pub fn reason(self) -> &'static str {
        match self {
            Rule::EmptyName => "empty name",
            Rule::ScriptPascalCase => "C# file name should be PascalCase and match its class name",
            Rule::ScenePrefix => "Scene should start with 'scn_'",
            Rule::PrefabPrefix => "Prefab should start with 'pf_'",
            Rule::MaterialPrefix => "Material should start with 'mat_'",
            Rule::SpritePrefix => "UI Sprite should start with 'spr_'",
            Rule::TexturePrefix => "Texture should start with 'tex_'",
            Rule::ShaderPrefix => "Shader should start with 'sh_'",
            Rule::ShaderGraphPrefix => "Shader Graph should start with 'sg_'",
            Rule::VfxPrefix => "VFX Graph should start with 'vfx_'",
            Rule::AnimationClipPrefix => "Animation clip should start with 'anm_'",
            Rule::AnimatorControllerPrefix => "Animator Controller should start with 'ac_'",
            Rule::AnimatorOverridePrefix => {
                "Animator Override Controller should start with 'aoc_'"
            }
            Rule::AudioPrefix => "Audio should start with 'sfx_', 'mus_', or 'vox_'",
            Rule::AudioMixerPrefix => "Audio Mixer should start with 'mix_'",
            Rule::ScriptableObjectPrefix => "ScriptableObject asset should start with 'so_'",
        }
    }

    pub fn from_check_id(check_id: &str) -> Option<Rule> {
        Rule::ALL.into_iter().find(|r| r.check_id() == check_id)
    }

    fn is_satisfied_by(self, name: &str) -> bool {
        match self {
            Rule::EmptyName => false,
            Rule::ScriptPascalCase => is_pascal_case(name),
            _ => self
                .accepted_prefixes()
                .iter()
                .any(|prefix| name.starts_with(prefix)),
        }
    }

    /// Re-apply the category convention to a name whose known prefix was already stripped.
    fn transform(self, core: &str) -> Option<String> {
        match self {
            Rule::EmptyName => None,
            Rule::ScriptPascalCase => Some(to_pascal_case(core)),
            Rule::ScenePrefix => Some(format!("scn_{}", to_pascal_case(core))),
            // Audio always suggests the sound-effect prefix.
            _ => self
                .accepted_prefixes()
                .first()
                .map(|prefix| format!("{prefix}{core}")),
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.check_id())
    }
}

/// Find the first rule category that applies to the request.
pub fn classify(request: &NamingRequest) -> Option<Rule> {
    if request.base_name.trim().is_empty() {
        return Some(Rule::EmptyName);
    }

    let ext = request.extension.as_str();
    let kind = request.kind;
    let path = request.containing_path.as_str();

    match ext {
        ".cs" => return Some(Rule::ScriptPascalCase),
        ".unity" => return Some(Rule::ScenePrefix),
        ".prefab" => return Some(Rule::PrefabPrefix),
        _ => {}
    }

    if kind == AssetKind::Material {
        return Some(Rule::MaterialPrefix);
    }

    if is_texture_extension(ext) {
        return Some(if path.contains(UI_SPRITES_SEGMENT) {
            Rule::SpritePrefix
        } else {
            Rule::TexturePrefix
        });
    }

    match ext {
        ".shader" => return Some(Rule::ShaderPrefix),
        ".shadergraph" => return Some(Rule::ShaderGraphPrefix),
        ".vfx" => return Some(Rule::VfxPrefix),
        _ => {}
    }

    match kind {
        AssetKind::AnimationClip => return Some(Rule::AnimationClipPrefix),
        AssetKind::AnimatorController => return Some(Rule::AnimatorControllerPrefix),
        AssetKind::AnimatorOverrideController => return Some(Rule::AnimatorOverridePrefix),
        AssetKind::AudioClip => return Some(Rule::AudioPrefix),
        AssetKind::AudioMixerController => return Some(Rule::AudioMixerPrefix),
        _ => {}
    }

    if ext == ".asset" && path.contains(SCRIPTABLE_OBJECTS_SEGMENT) {
        return Some(Rule::ScriptableObjectPrefix);
    }

    None
}

/// Decide whether the requested name complies with its category's convention.
pub fn validate(request: &NamingRequest) -> NamingVerdict {
    let Some(rule) = classify(request) else {
        return NamingVerdict::valid(None);
    };
    if rule.is_satisfied_by(&request.base_name) {
        return NamingVerdict::valid(Some(rule));
    }
    NamingVerdict {
        is_valid: false,
        violation_reason: rule.reason().to_string(),
        suggested_name: derive_suggestion(rule, &request.base_name),
        rule: Some(rule),
    }
}

/// Propose a compliant name, or `None` when the name is already valid or nothing
/// compliant can be derived from it.
pub fn suggest(request: &NamingRequest) -> Option<String> {
    let rule = classify(request)?;
    if rule.is_satisfied_by(&request.base_name) {
        return None;
    }
    derive_suggestion(rule, &request.base_name)
}

fn derive_suggestion(rule: Rule, name: &str) -> Option<String> {
    let candidate = rule.transform(strip_known_prefix(name))?;
    rule.is_satisfied_by(&candidate).then_some(candidate)
}

/// Remove the first known prefix the name starts with, if any.
pub fn strip_known_prefix(name: &str) -> &str {
    KNOWN_PREFIXES
        .iter()
        .find_map(|prefix| name.strip_prefix(prefix))
        .unwrap_or(name)
}

pub fn is_texture_extension(ext: &str) -> bool {
    TEXTURE_EXTENSIONS.contains(&ext)
}

fn is_word_separator(c: char) -> bool {
    matches!(c, ' ' | '-' | '_')
}

/// Non-empty, starts with an upper-case letter, no space, hyphen or underscore.
pub fn is_pascal_case(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_uppercase) && !s.chars().any(is_word_separator)
}

/// Split on runs of space/hyphen/underscore, upper-case each segment's first character and
/// join without separators. The rest of each segment is left as is.
pub fn to_pascal_case(s: &str) -> String {
    s.split(is_word_separator)
        .filter(|segment| !segment.is_empty())
        .map(capitalize_first)
        .collect()
}

fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
