use assetlint_types::AssetPath;
use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenameError {
    #[error("new name is empty")]
    EmptyName,
    #[error("new name must not contain path separators: {0}")]
    InvalidName(String),
    #[error("asset not found: {0}")]
    NotFound(AssetPath),
    #[error("an asset named {0} already exists")]
    TargetExists(AssetPath),
    #[error("rename {from} -> {to}: {source}")]
    Io {
        from: AssetPath,
        to: AssetPath,
        #[source]
        source: std::io::Error,
    },
}

/// Renames an asset within its folder, keeping its extension.
pub trait RenameExecutor {
    /// Returns the asset's new path.
    fn rename(&self, asset: &AssetPath, new_base_name: &str) -> Result<AssetPath, RenameError>;
}

/// Renames files on disk under `root` and carries the `.meta` sidecar along.
#[derive(Clone, Debug)]
pub struct FsRenameExecutor {
    root: Utf8PathBuf,
}

impl FsRenameExecutor {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn abs(&self, path: &AssetPath) -> Utf8PathBuf {
        self.root.join(path.as_str())
    }

    fn move_file(&self, from: &AssetPath, to: &AssetPath) -> Result<(), RenameError> {
        std::fs::rename(self.abs(from), self.abs(to)).map_err(|source| RenameError::Io {
            from: from.clone(),
            to: to.clone(),
            source,
        })
    }
}

impl RenameExecutor for FsRenameExecutor {
    fn rename(&self, asset: &AssetPath, new_base_name: &str) -> Result<AssetPath, RenameError> {
        self.rename_with(asset, new_base_name, |from, to| self.move_file(from, to))
    }
}

impl FsRenameExecutor {
    /// Rename using `move_file` for the actual moves. The asset is moved back when its
    /// sidecar cannot follow, so a failed rename leaves the folder as it was.
    fn rename_with(
        &self,
        asset: &AssetPath,
        new_base_name: &str,
        move_file: impl Fn(&AssetPath, &AssetPath) -> Result<(), RenameError>,
    ) -> Result<AssetPath, RenameError> {
        let new_base_name = new_base_name.trim();
        if new_base_name.is_empty() {
            return Err(RenameError::EmptyName);
        }
        if new_base_name.contains(['/', '\\']) {
            return Err(RenameError::InvalidName(new_base_name.to_string()));
        }
        if !self.abs(asset).is_file() {
            return Err(RenameError::NotFound(asset.clone()));
        }

        // Keep the original spelling of the extension.
        let old_name = asset.file_name();
        let ext = &old_name[asset.file_stem().len()..];
        let target = asset.with_file_name(&format!("{new_base_name}{ext}"));
        if target == *asset {
            return Ok(target);
        }

        let old_meta = meta_path(asset);
        let new_meta = meta_path(&target);
        let has_meta = self.abs(&old_meta).is_file();

        if entry_exists(&self.abs(&target)) {
            return Err(RenameError::TargetExists(target));
        }
        if has_meta && entry_exists(&self.abs(&new_meta)) {
            return Err(RenameError::TargetExists(new_meta));
        }

        move_file(asset, &target)?;
        if has_meta && let Err(err) = move_file(&old_meta, &new_meta) {
            if let Err(undo) = move_file(&target, asset) {
                tracing::warn!(
                    asset = %target,
                    error = %undo,
                    "could not restore asset after sidecar move failed"
                );
            }
            return Err(err);
        }
        tracing::debug!(from = %asset, to = %target, "renamed asset");
        Ok(target)
    }
}

fn meta_path(asset: &AssetPath) -> AssetPath {
    AssetPath::new(format!("{}.meta", asset.as_str()))
}

/// Exact-name lookup in the parent folder, so a case-only rename on a case-insensitive
/// filesystem is not mistaken for a collision.
fn entry_exists(path: &Utf8Path) -> bool {
    let (Some(parent), Some(name)) = (path.parent(), path.file_name()) else {
        return false;
    };
    match parent.read_dir_utf8() {
        Ok(entries) => entries
            .filter_map(Result::ok)
            .any(|e| e.file_name() == name),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup(files: &[&str]) -> (TempDir, FsRenameExecutor) {
        let tmp = TempDir::new().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path");
        for rel in files {
            let p = root.join(rel);
            std::fs::create_dir_all(p.parent().expect("parent")).expect("mkdir");
            std::fs::write(&p, rel).expect("write");
        }
        (tmp, FsRenameExecutor::new(root))
    }

    #[test]
    fn renames_file_and_meta_sidecar() {
        let (_tmp, exec) = setup(&["Assets/Art/Grass.PNG", "Assets/Art/Grass.PNG.meta"]);
        let new = exec
            .rename(&AssetPath::new("Assets/Art/Grass.PNG"), "tex_Grass")
            .expect("rename");
        assert_eq!(new.as_str(), "Assets/Art/tex_Grass.PNG");
        assert!(exec.root().join("Assets/Art/tex_Grass.PNG").is_file());
        assert!(exec.root().join("Assets/Art/tex_Grass.PNG.meta").is_file());
        assert!(!exec.root().join("Assets/Art/Grass.PNG").exists());
        assert!(!exec.root().join("Assets/Art/Grass.PNG.meta").exists());
    }

    #[test]
    fn rename_without_meta_works() {
        let (_tmp, exec) = setup(&["Assets/player_controller.cs"]);
        let new = exec
            .rename(&AssetPath::new("Assets/player_controller.cs"), "PlayerController")
            .expect("rename");
        assert_eq!(new.as_str(), "Assets/PlayerController.cs");
        assert!(exec.root().join("Assets/PlayerController.cs").is_file());
    }

    #[test]
    fn existing_target_is_refused() {
        let (_tmp, exec) = setup(&["Assets/Grass.png", "Assets/tex_Grass.png"]);
        let err = exec
            .rename(&AssetPath::new("Assets/Grass.png"), "tex_Grass")
            .expect_err("collision");
        assert!(matches!(err, RenameError::TargetExists(p) if p.as_str() == "Assets/tex_Grass.png"));
        assert!(exec.root().join("Assets/Grass.png").is_file());
    }

    #[test]
    fn invalid_names_are_refused() {
        let (_tmp, exec) = setup(&["Assets/Grass.png"]);
        let asset = AssetPath::new("Assets/Grass.png");
        assert!(matches!(exec.rename(&asset, "  "), Err(RenameError::EmptyName)));
        assert!(matches!(
            exec.rename(&asset, "../tex_Grass"),
            Err(RenameError::InvalidName(_))
        ));
    }

    #[test]
    fn missing_source_is_reported() {
        let (_tmp, exec) = setup(&[]);
        assert!(matches!(
            exec.rename(&AssetPath::new("Assets/Nope.png"), "tex_Nope"),
            Err(RenameError::NotFound(_))
        ));
    }

    #[test]
    fn same_name_is_a_no_op() {
        let (_tmp, exec) = setup(&["Assets/tex_Grass.png"]);
        let new = exec
            .rename(&AssetPath::new("Assets/tex_Grass.png"), "tex_Grass")
            .expect("rename");
        assert_eq!(new.as_str(), "Assets/tex_Grass.png");
    }

    #[test]
    fn failed_sidecar_move_restores_asset() {
        let (_tmp, exec) = setup(&["Assets/Art/Grass.png", "Assets/Art/Grass.png.meta"]);
        let asset = AssetPath::new("Assets/Art/Grass.png");

        let err = exec
            .rename_with(&asset, "tex_Grass", |from, to| {
                if from.as_str().ends_with(".meta") {
                    return Err(RenameError::Io {
                        from: from.clone(),
                        to: to.clone(),
                        source: std::io::Error::other("sidecar locked"),
                    });
                }
                exec.move_file(from, to)
            })
            .expect_err("sidecar failure");
        assert!(matches!(err, RenameError::Io { .. }));

        let root = exec.root();
        assert!(root.join("Assets/Art/Grass.png").is_file());
        assert!(root.join("Assets/Art/Grass.png.meta").is_file());
        assert!(!root.join("Assets/Art/tex_Grass.png").exists());
    }
}
