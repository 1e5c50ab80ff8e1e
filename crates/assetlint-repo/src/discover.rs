use anyhow::Context;
use assetlint_domain::policy::DiscoveryConfig;
use assetlint_types::AssetPath;
use camino::{Utf8Path, Utf8PathBuf};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::PathBuf;
use walkdir::{DirEntry, WalkDir};

/// Engine-generated folders at the project root that never hold authored assets.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["Library", "Temp", "Logs", "obj", "Build", "UserSettings"];

const META_EXTENSION: &str = ".meta";

/// Decides which root-relative paths take part in enumeration.
pub(crate) struct Excludes {
    ignore: GlobSet,
}

impl Excludes {
    pub(crate) fn new(cfg: &DiscoveryConfig) -> anyhow::Result<Self> {
        let mut b = GlobSetBuilder::new();
        for p in &cfg.ignore {
            b.add(Glob::new(p).with_context(|| format!("invalid ignore glob: {p}"))?);
        }
        Ok(Self {
            ignore: b.build().context("compile ignore globset")?,
        })
    }

    /// True when a root-relative file path must not be evaluated.
    pub(crate) fn is_excluded(&self, rel: &str) -> bool {
        if rel
            .split_once('/')
            .is_some_and(|(top, _)| DEFAULT_EXCLUDED_DIRS.contains(&top))
        {
            return true;
        }
        if rel.split('/').any(is_hidden_name) {
            return true;
        }
        rel.ends_with(META_EXTENSION) || self.ignore.is_match(rel)
    }
}

/// Dot-prefixed entries and `~`-suffixed folders are skipped by the editor too.
fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.') || name.ends_with('~')
}

/// Discover asset files under `root`.
///
/// Behavior:
/// - files only, `.meta` sidecars skipped
/// - hidden entries and the engine's generated folders are pruned
/// - configured `ignore` globs are matched against the root-relative path
pub fn discover_assets(root: &Utf8Path, cfg: &DiscoveryConfig) -> anyhow::Result<Vec<AssetPath>> {
    if !root.is_dir() {
        anyhow::bail!("asset root is not a directory: {root}");
    }
    let excludes = Excludes::new(cfg)?;

    let mut out: Vec<AssetPath> = Vec::new();
    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_pruned_dir(e));

    for entry in walker {
        let entry = entry.with_context(|| format!("walk {root}"))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(abs) = pathbuf_to_utf8(entry.path().to_path_buf()) else {
            tracing::debug!(path = %entry.path().display(), "skipping non-UTF-8 path");
            continue;
        };
        let rel = abs
            .strip_prefix(root)
            .unwrap_or(&abs)
            .as_str()
            .replace('\\', "/");
        if !excludes.is_excluded(&rel) {
            out.push(AssetPath::new(&rel));
        }
    }

    // Stable order.
    out.sort();
    out.dedup();

    tracing::debug!(root = %root, assets = out.len(), "discovered assets");
    Ok(out)
}

fn is_pruned_dir(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    is_hidden_name(&name)
        || (entry.depth() == 1 && DEFAULT_EXCLUDED_DIRS.iter().any(|d| *d == name))
}

fn pathbuf_to_utf8(path: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path")
    }

    fn touch(path: &Utf8Path) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(path, "").expect("write file");
    }

    fn paths(found: &[AssetPath]) -> Vec<&str> {
        found.iter().map(AssetPath::as_str).collect()
    }

    #[test]
    fn discover_skips_meta_hidden_and_generated_folders() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);

        for rel in [
            "Assets/Textures/tex_Grass.png",
            "Assets/Textures/tex_Grass.png.meta",
            "Assets/.hidden/Secret.png",
            "Assets/Samples~/Demo.unity",
            "Assets/.DS_Store",
            "Library/ArtifactDB",
            "Temp/x.cs",
            "Logs/log.txt",
            "Assets/Scripts/Player.cs",
        ] {
            touch(&root.join(rel));
        }

        let found = discover_assets(&root, &DiscoveryConfig::default()).expect("discover");
        assert_eq!(
            paths(&found),
            vec!["Assets/Scripts/Player.cs", "Assets/Textures/tex_Grass.png"]
        );
    }

    #[test]
    fn nested_folder_named_like_generated_one_is_kept() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        touch(&root.join("Assets/Build/scn_Menu.unity"));

        let found = discover_assets(&root, &DiscoveryConfig::default()).expect("discover");
        assert_eq!(paths(&found), vec!["Assets/Build/scn_Menu.unity"]);
    }

    #[test]
    fn ignore_globs_are_applied() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        touch(&root.join("Assets/Plugins/Vendor/icon.png"));
        touch(&root.join("Assets/Art/tex_Rock.png"));

        let cfg = DiscoveryConfig {
            ignore: vec!["Assets/Plugins/**".to_string()],
            ..DiscoveryConfig::default()
        };
        let found = discover_assets(&root, &cfg).expect("discover");
        assert_eq!(paths(&found), vec!["Assets/Art/tex_Rock.png"]);
    }

    #[test]
    fn missing_root_is_an_error() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp).join("nope");
        assert!(discover_assets(&root, &DiscoveryConfig::default()).is_err());
    }

    #[test]
    fn excludes_match_relative_paths() {
        let excludes = Excludes::new(&DiscoveryConfig::default()).expect("excludes");
        assert!(excludes.is_excluded("Library/foo.asset"));
        assert!(excludes.is_excluded("Assets/a.png.meta"));
        assert!(excludes.is_excluded("Assets/.git/config"));
        assert!(!excludes.is_excluded("Library"));
        assert!(!excludes.is_excluded("Assets/Library/a.png"));
    }
}
