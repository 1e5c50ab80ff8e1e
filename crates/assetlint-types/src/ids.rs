//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace, one per naming rule category. `code` is a short
//! snake_case discriminator shared by categories that fail the same way.

// Checks
pub const CHECK_NAMING_EMPTY_NAME: &str = "naming.empty_name";
pub const CHECK_NAMING_SCRIPT_PASCAL_CASE: &str = "naming.script_pascal_case";
pub const CHECK_NAMING_SCENE_PREFIX: &str = "naming.scene_prefix";
pub const CHECK_NAMING_PREFAB_PREFIX: &str = "naming.prefab_prefix";
pub const CHECK_NAMING_MATERIAL_PREFIX: &str = "naming.material_prefix";
pub const CHECK_NAMING_SPRITE_PREFIX: &str = "naming.sprite_prefix";
pub const CHECK_NAMING_TEXTURE_PREFIX: &str = "naming.texture_prefix";
pub const CHECK_NAMING_SHADER_PREFIX: &str = "naming.shader_prefix";
pub const CHECK_NAMING_SHADER_GRAPH_PREFIX: &str = "naming.shader_graph_prefix";
pub const CHECK_NAMING_VFX_PREFIX: &str = "naming.vfx_prefix";
pub const CHECK_NAMING_ANIMATION_CLIP_PREFIX: &str = "naming.animation_clip_prefix";
pub const CHECK_NAMING_ANIMATOR_CONTROLLER_PREFIX: &str = "naming.animator_controller_prefix";
pub const CHECK_NAMING_ANIMATOR_OVERRIDE_PREFIX: &str = "naming.animator_override_prefix";
pub const CHECK_NAMING_AUDIO_PREFIX: &str = "naming.audio_prefix";
pub const CHECK_NAMING_AUDIO_MIXER_PREFIX: &str = "naming.audio_mixer_prefix";
pub const CHECK_NAMING_SCRIPTABLE_OBJECT_PREFIX: &str = "naming.scriptable_object_prefix";

// Codes
pub const CODE_EMPTY_NAME: &str = "empty_name";
pub const CODE_NOT_PASCAL_CASE: &str = "not_pascal_case";
pub const CODE_MISSING_PREFIX: &str = "missing_prefix";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";

/// Every naming check id, in rule priority order.
pub const ALL_NAMING_CHECKS: &[&str] = &[
    CHECK_NAMING_EMPTY_NAME,
    CHECK_NAMING_SCRIPT_PASCAL_CASE,
    CHECK_NAMING_SCENE_PREFIX,
    CHECK_NAMING_PREFAB_PREFIX,
    CHECK_NAMING_MATERIAL_PREFIX,
    CHECK_NAMING_SPRITE_PREFIX,
    CHECK_NAMING_TEXTURE_PREFIX,
    CHECK_NAMING_SHADER_PREFIX,
    CHECK_NAMING_SHADER_GRAPH_PREFIX,
    CHECK_NAMING_VFX_PREFIX,
    CHECK_NAMING_ANIMATION_CLIP_PREFIX,
    CHECK_NAMING_ANIMATOR_CONTROLLER_PREFIX,
    CHECK_NAMING_ANIMATOR_OVERRIDE_PREFIX,
    CHECK_NAMING_AUDIO_PREFIX,
    CHECK_NAMING_AUDIO_MIXER_PREFIX,
    CHECK_NAMING_SCRIPTABLE_OBJECT_PREFIX,
];
