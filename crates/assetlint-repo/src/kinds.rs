use assetlint_domain::model::{AssetKind, NamingRequest};
use assetlint_types::AssetPath;
use std::collections::BTreeMap;

const DEFAULT_KINDS: &[(&str, AssetKind)] = &[
    (".cs", AssetKind::Script),
    (".unity", AssetKind::Scene),
    (".prefab", AssetKind::Prefab),
    (".mat", AssetKind::Material),
    (".png", AssetKind::Texture),
    (".tga", AssetKind::Texture),
    (".jpg", AssetKind::Texture),
    (".jpeg", AssetKind::Texture),
    (".tif", AssetKind::Texture),
    (".tiff", AssetKind::Texture),
    (".psd", AssetKind::Texture),
    (".exr", AssetKind::Texture),
    (".hdr", AssetKind::Texture),
    (".bmp", AssetKind::Texture),
    (".gif", AssetKind::Texture),
    (".shader", AssetKind::Shader),
    (".shadergraph", AssetKind::Shader),
    (".anim", AssetKind::AnimationClip),
    (".controller", AssetKind::AnimatorController),
    (".overridecontroller", AssetKind::AnimatorOverrideController),
    (".wav", AssetKind::AudioClip),
    (".mp3", AssetKind::AudioClip),
    (".ogg", AssetKind::AudioClip),
    (".aif", AssetKind::AudioClip),
    (".aiff", AssetKind::AudioClip),
    (".flac", AssetKind::AudioClip),
    (".mod", AssetKind::AudioClip),
    (".it", AssetKind::AudioClip),
    (".s3m", AssetKind::AudioClip),
    (".xm", AssetKind::AudioClip),
    (".mixer", AssetKind::AudioMixerController),
];

/// Resolve an asset kind from its extension (lower-case, with leading dot).
///
/// Configured overrides win over the built-in table; anything else is `Unknown`.
pub fn resolve_kind(extension: &str, overrides: &BTreeMap<String, AssetKind>) -> AssetKind {
    if let Some(kind) = overrides.get(extension) {
        return *kind;
    }
    DEFAULT_KINDS
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, kind)| *kind)
        .unwrap_or_default()
}

/// Build the engine request for an asset path, resolving its kind first.
pub fn request_for(path: &AssetPath, overrides: &BTreeMap<String, AssetKind>) -> NamingRequest {
    NamingRequest::for_path(path, resolve_kind(&path.extension(), overrides))
}
