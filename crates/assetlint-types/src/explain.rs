//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after asset trees.
    pub examples: ExamplePair,
}

/// Before and after examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Names that would trigger a finding.
    pub before: &'static str,
    /// Names that pass the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Check IDs
        ids::CHECK_NAMING_EMPTY_NAME => Some(explain_empty_name()),
        ids::CHECK_NAMING_SCRIPT_PASCAL_CASE => Some(explain_script_pascal_case()),
        ids::CHECK_NAMING_SCENE_PREFIX => Some(explain_scene_prefix()),
        ids::CHECK_NAMING_PREFAB_PREFIX => Some(explain_prefab_prefix()),
        ids::CHECK_NAMING_MATERIAL_PREFIX => Some(explain_material_prefix()),
        ids::CHECK_NAMING_SPRITE_PREFIX => Some(explain_sprite_prefix()),
        ids::CHECK_NAMING_TEXTURE_PREFIX => Some(explain_texture_prefix()),
        ids::CHECK_NAMING_SHADER_PREFIX => Some(explain_shader_prefix()),
        ids::CHECK_NAMING_SHADER_GRAPH_PREFIX => Some(explain_shader_graph_prefix()),
        ids::CHECK_NAMING_VFX_PREFIX => Some(explain_vfx_prefix()),
        ids::CHECK_NAMING_ANIMATION_CLIP_PREFIX => Some(explain_animation_clip_prefix()),
        ids::CHECK_NAMING_ANIMATOR_CONTROLLER_PREFIX => {
            Some(explain_animator_controller_prefix())
        }
        ids::CHECK_NAMING_ANIMATOR_OVERRIDE_PREFIX => Some(explain_animator_override_prefix()),
        ids::CHECK_NAMING_AUDIO_PREFIX => Some(explain_audio_prefix()),
        ids::CHECK_NAMING_AUDIO_MIXER_PREFIX => Some(explain_audio_mixer_prefix()),
        ids::CHECK_NAMING_SCRIPTABLE_OBJECT_PREFIX => Some(explain_scriptable_object_prefix()),

        // Codes
        ids::CODE_EMPTY_NAME => Some(explain_empty_name_code()),
        ids::CODE_NOT_PASCAL_CASE => Some(explain_not_pascal_case()),
        ids::CODE_MISSING_PREFIX => Some(explain_missing_prefix()),

        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    ids::ALL_NAMING_CHECKS
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_EMPTY_NAME,
        ids::CODE_NOT_PASCAL_CASE,
        ids::CODE_MISSING_PREFIX,
    ]
}

// --- Check-level explanations ---

fn explain_empty_name() -> Explanation {
    Explanation {
        title: "Empty Asset Name",
        description: "\
Detects files whose name is empty or only whitespace once the extension is removed
(for example `.png` or ` .mat`).

Nameless assets cannot be found by search, sort unpredictably and usually come from
a failed export or an accidental rename.",
        remediation: "\
Give the asset a descriptive name that follows the convention for its category.
No suggestion is generated because there is nothing to derive one from.",
        examples: ExamplePair {
            before: "Assets/Textures/.png",
            after: "Assets/Textures/tex_Rock.png",
        },
    }
}

fn explain_script_pascal_case() -> Explanation {
    Explanation {
        title: "Script File Names Are PascalCase",
        description: "\
Detects C# script files whose name is not PascalCase: the name must start with an
upper-case letter and contain no spaces, hyphens or underscores.

Script files are expected to match the type they declare, and types are PascalCase.
The check looks at the file name only; it does not parse the script to compare the
name with the declared class.",
        remediation: "\
Rename the file to PascalCase by capitalizing each word and removing separators:

    player_controller.cs  ->  PlayerController.cs
    enemy-spawner.cs      ->  EnemySpawner.cs

Remember to rename the class inside the file to match.",
        examples: ExamplePair {
            before: "Assets/Scripts/player_controller.cs",
            after: "Assets/Scripts/PlayerController.cs",
        },
    }
}

fn explain_scene_prefix() -> Explanation {
    Explanation {
        title: "Scenes Start With scn_",
        description: "\
Detects `.unity` scene files that do not start with `scn_`.

A common prefix keeps scenes grouped in search results and build settings lists.",
        remediation: "\
Rename the scene to `scn_` followed by a PascalCase name. The suggestion strips a
wrong known prefix and PascalCases the remainder:

    Level01.unity       ->  scn_Level01.unity
    main_menu.unity     ->  scn_MainMenu.unity",
        examples: ExamplePair {
            before: "Assets/Scenes/Level01.unity",
            after: "Assets/Scenes/scn_Level01.unity",
        },
    }
}

fn explain_prefab_prefix() -> Explanation {
    Explanation {
        title: "Prefabs Start With pf_",
        description: "Detects `.prefab` files that do not start with `pf_`.",
        remediation: "Prepend `pf_` to the prefab name (a wrong known prefix is replaced).",
        examples: ExamplePair {
            before: "Assets/Prefabs/Enemy.prefab",
            after: "Assets/Prefabs/pf_Enemy.prefab",
        },
    }
}

fn explain_material_prefix() -> Explanation {
    Explanation {
        title: "Materials Start With mat_",
        description: "\
Detects material assets that do not start with `mat_`.

Materials are recognized by asset kind (by default the `.mat` extension), not by
folder.",
        remediation: "Prepend `mat_` to the material name.",
        examples: ExamplePair {
            before: "Assets/Materials/Rock.mat",
            after: "Assets/Materials/mat_Rock.mat",
        },
    }
}

fn explain_sprite_prefix() -> Explanation {
    Explanation {
        title: "UI Sprites Start With spr_",
        description: "\
Detects raster images (`.png .tga .jpg .jpeg .tif .tiff .psd`) inside a `UI/Sprites`
folder that do not start with `spr_`.

Images anywhere else are treated as textures (see `naming.texture_prefix`).",
        remediation: "\
Prepend `spr_` to the image name. A `tex_` prefix is replaced:

    tex_icon_play.png  ->  spr_icon_play.png",
        examples: ExamplePair {
            before: "Assets/UI/Sprites/Icons/icon_play.png",
            after: "Assets/UI/Sprites/Icons/spr_icon_play.png",
        },
    }
}

fn explain_texture_prefix() -> Explanation {
    Explanation {
        title: "Textures Start With tex_",
        description: "\
Detects raster images (`.png .tga .jpg .jpeg .tif .tiff .psd`) outside `UI/Sprites`
folders that do not start with `tex_`.",
        remediation: "Prepend `tex_` to the image name (a wrong known prefix is replaced).",
        examples: ExamplePair {
            before: "Assets/Textures/icon_play.png",
            after: "Assets/Textures/tex_icon_play.png",
        },
    }
}

fn explain_shader_prefix() -> Explanation {
    Explanation {
        title: "Shaders Start With sh_",
        description: "Detects `.shader` files that do not start with `sh_`.",
        remediation: "Prepend `sh_` to the shader file name.",
        examples: ExamplePair {
            before: "Assets/Shaders/Water.shader",
            after: "Assets/Shaders/sh_Water.shader",
        },
    }
}

fn explain_shader_graph_prefix() -> Explanation {
    Explanation {
        title: "Shader Graphs Start With sg_",
        description: "Detects `.shadergraph` files that do not start with `sg_`.",
        remediation: "Prepend `sg_` to the shader graph file name.",
        examples: ExamplePair {
            before: "Assets/Shaders/Dissolve.shadergraph",
            after: "Assets/Shaders/sg_Dissolve.shadergraph",
        },
    }
}

fn explain_vfx_prefix() -> Explanation {
    Explanation {
        title: "VFX Graphs Start With vfx_",
        description: "Detects `.vfx` graph files that do not start with `vfx_`.",
        remediation: "Prepend `vfx_` to the VFX graph file name.",
        examples: ExamplePair {
            before: "Assets/VFX/Sparks.vfx",
            after: "Assets/VFX/vfx_Sparks.vfx",
        },
    }
}

fn explain_animation_clip_prefix() -> Explanation {
    Explanation {
        title: "Animation Clips Start With anm_",
        description: "\
Detects animation clip assets (by default `.anim`) that do not start with `anm_`.",
        remediation: "Prepend `anm_` to the clip name.",
        examples: ExamplePair {
            before: "Assets/Animations/Run.anim",
            after: "Assets/Animations/anm_Run.anim",
        },
    }
}

fn explain_animator_controller_prefix() -> Explanation {
    Explanation {
        title: "Animator Controllers Start With ac_",
        description: "\
Detects animator controller assets (by default `.controller`) that do not start
with `ac_`.",
        remediation: "Prepend `ac_` to the controller name.",
        examples: ExamplePair {
            before: "Assets/Animations/Player.controller",
            after: "Assets/Animations/ac_Player.controller",
        },
    }
}

fn explain_animator_override_prefix() -> Explanation {
    Explanation {
        title: "Animator Override Controllers Start With aoc_",
        description: "\
Detects animator override controller assets (by default `.overrideController`) that
do not start with `aoc_`.",
        remediation: "Prepend `aoc_` to the override controller name.",
        examples: ExamplePair {
            before: "Assets/Animations/PlayerSkinB.overrideController",
            after: "Assets/Animations/aoc_PlayerSkinB.overrideController",
        },
    }
}

fn explain_audio_prefix() -> Explanation {
    Explanation {
        title: "Audio Clips Start With sfx_, mus_ or vox_",
        description: "\
Detects audio clips (by default `.wav .mp3 .ogg .aif .aiff .flac` and tracker
formats) whose name does not start with one of:

- `sfx_` for sound effects
- `mus_` for music
- `vox_` for voice",
        remediation: "\
Prepend the prefix that matches the clip's purpose. Suggestions always use `sfx_`
because the purpose cannot be inferred from the name; change it to `mus_` or `vox_`
when applying if that fits better.",
        examples: ExamplePair {
            before: "Assets/Audio/explosion.wav",
            after: "Assets/Audio/sfx_explosion.wav",
        },
    }
}

fn explain_audio_mixer_prefix() -> Explanation {
    Explanation {
        title: "Audio Mixers Start With mix_",
        description: "Detects audio mixer assets (by default `.mixer`) that do not start with `mix_`.",
        remediation: "Prepend `mix_` to the mixer name.",
        examples: ExamplePair {
            before: "Assets/Audio/Master.mixer",
            after: "Assets/Audio/mix_Master.mixer",
        },
    }
}

fn explain_scriptable_object_prefix() -> Explanation {
    Explanation {
        title: "ScriptableObject Assets Start With so_",
        description: "\
Detects `.asset` files inside a `ScriptableObjects` folder that do not start with `so_`.

`.asset` is a generic serialized-object extension, so the folder is what marks a file
as a ScriptableObject instance. `.asset` files elsewhere are not checked.",
        remediation: "Prepend `so_` to the asset name.",
        examples: ExamplePair {
            before: "Assets/Data/ScriptableObjects/EnemyStats.asset",
            after: "Assets/Data/ScriptableObjects/so_EnemyStats.asset",
        },
    }
}

// --- Code-level explanations ---

fn explain_empty_name_code() -> Explanation {
    let mut exp = explain_empty_name();
    exp.title = "Empty Name";
    exp
}

fn explain_not_pascal_case() -> Explanation {
    let mut exp = explain_script_pascal_case();
    exp.title = "Not PascalCase";
    exp
}

fn explain_missing_prefix() -> Explanation {
    Explanation {
        title: "Missing Category Prefix",
        description: "\
An asset name does not start with the prefix required for its category.

Prefixes by category:
- scenes `scn_`, prefabs `pf_`, materials `mat_`
- textures `tex_`, UI sprites `spr_`
- shaders `sh_`, shader graphs `sg_`, VFX graphs `vfx_`
- animation clips `anm_`, animator controllers `ac_`, override controllers `aoc_`
- audio `sfx_` / `mus_` / `vox_`, audio mixers `mix_`
- ScriptableObject assets `so_`

Prefixes are compared literally and case-sensitively.",
        remediation: "\
Rename the asset to start with the expected prefix. If the name already starts with
a different known prefix, replace it rather than stacking prefixes:

    spr_icon.png (in Textures/)  ->  tex_icon.png",
        examples: ExamplePair {
            before: "Assets/Prefabs/Enemy.prefab\nAssets/Materials/Rock.mat",
            after: "Assets/Prefabs/pf_Enemy.prefab\nAssets/Materials/mat_Rock.mat",
        },
    }
}
