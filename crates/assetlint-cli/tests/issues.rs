//! Record-review-apply workflow over a scratch project.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

#[allow(deprecated)]
fn assetlint_cmd() -> Command {
    Command::cargo_bin("assetlint").expect("assetlint binary not found - run `cargo build` first")
}

fn project(files: &[&str]) -> TempDir {
    let tmp = TempDir::new().expect("temp dir");
    for rel in files {
        let p = tmp.path().join(rel);
        std::fs::create_dir_all(p.parent().expect("parent")).expect("mkdir");
        std::fs::write(&p, "").expect("write");
    }
    tmp
}

fn cmd_in(root: &Path) -> Command {
    let mut cmd = assetlint_cmd();
    cmd.current_dir(root).arg("--repo-root").arg(root);
    cmd
}

fn record(root: &Path) {
    cmd_in(root)
        .args(["check", "--record", "--report-out"])
        .arg(root.join("out").join("report.json"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("recorded 2 rename issue(s)"));
}

fn store(root: &Path) -> Value {
    let text = std::fs::read_to_string(root.join(".assetlint").join("issues.json"))
        .expect("issue store written");
    serde_json::from_str(&text).expect("issue store json")
}

#[test]
fn check_record_writes_issue_store() {
    let tmp = project(&[
        "Assets/Textures/Grass.png",
        "Assets/Scenes/Main.unity",
        "Assets/Materials/mat_Ground.mat",
    ]);
    record(tmp.path());

    let store = store(tmp.path());
    assert_eq!(store["schema"], "assetlint.issues.v1");
    let issues = store["issues"].as_array().expect("issues");
    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0]["asset_path"], "Assets/Scenes/Main.unity");
    assert_eq!(issues[0]["suggestion"], "scn_Main");
    assert_eq!(issues[0]["selected"], true);
    assert_eq!(issues[1]["suggestion"], "tex_Grass");

    cmd_in(tmp.path())
        .args(["issues", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[x] Assets/Textures/Grass.png (texture) Grass -> tex_Grass.png",
        ));
}

#[test]
fn apply_all_renames_selected_and_keeps_unselected() {
    let tmp = project(&[
        "Assets/Textures/Grass.png",
        "Assets/Textures/Grass.png.meta",
        "Assets/Scenes/Main.unity",
    ]);
    let root = tmp.path();
    record(root);

    cmd_in(root)
        .args(["issues", "select", "Assets/Scenes/Main.unity", "--off"])
        .assert()
        .success();
    cmd_in(root)
        .args(["issues", "apply", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "renamed Assets/Textures/Grass.png -> Assets/Textures/tex_Grass.png",
        ));

    assert!(root.join("Assets/Textures/tex_Grass.png").is_file());
    assert!(root.join("Assets/Textures/tex_Grass.png.meta").is_file());
    assert!(!root.join("Assets/Textures/Grass.png").exists());
    assert!(root.join("Assets/Scenes/Main.unity").is_file());

    let issues = store(root)["issues"].as_array().expect("issues").clone();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0]["asset_path"], "Assets/Scenes/Main.unity");
    assert_eq!(issues[0]["selected"], false);
}

#[test]
fn edit_then_apply_one_uses_edited_name() {
    let tmp = project(&["Assets/Textures/Grass.png", "Assets/Scenes/Main.unity"]);
    let root = tmp.path();
    record(root);

    cmd_in(root)
        .args(["issues", "edit", "Assets/Textures/Grass.png", "tex_Meadow"])
        .assert()
        .success();
    cmd_in(root)
        .args(["issues", "apply", "Assets/Textures/Grass.png"])
        .assert()
        .success();

    assert!(root.join("Assets/Textures/tex_Meadow.png").is_file());
    let issues = store(root)["issues"].as_array().expect("issues").clone();
    assert_eq!(issues.len(), 1);
}

#[test]
fn apply_one_failure_keeps_issue() {
    let tmp = project(&[
        "Assets/Textures/Grass.png",
        "Assets/Textures/tex_Grass.png",
        "Assets/Scenes/Main.unity",
    ]);
    let root = tmp.path();
    record(root);

    cmd_in(root)
        .args(["issues", "apply", "Assets/Textures/Grass.png"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    let issues = store(root)["issues"].as_array().expect("issues").clone();
    assert_eq!(issues.len(), 2);
    assert!(root.join("Assets/Textures/Grass.png").is_file());
}

#[test]
fn skip_and_skip_all() {
    let tmp = project(&["Assets/Textures/Grass.png", "Assets/Scenes/Main.unity"]);
    let root = tmp.path();
    record(root);

    cmd_in(root)
        .args(["issues", "skip", "Assets/Scenes/Main.unity"])
        .assert()
        .success();
    assert_eq!(store(root)["issues"].as_array().expect("issues").len(), 1);

    cmd_in(root).args(["issues", "skip", "--all"]).assert().success();
    cmd_in(root)
        .args(["issues", "list"])
        .assert()
        .success()
        .stdout("No issues.\n");
    assert!(root.join("Assets/Textures/Grass.png").is_file());
}

#[test]
fn apply_without_paths_or_all_is_an_error() {
    let tmp = project(&["Assets/Textures/Grass.png"]);
    cmd_in(tmp.path())
        .args(["issues", "apply"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("apply needs either PATHS or --all"));
}

#[test]
fn edit_unknown_issue_is_an_error() {
    let tmp = project(&["Assets/Textures/Grass.png"]);
    cmd_in(tmp.path())
        .args(["issues", "edit", "Assets/Nope.png", "tex_Nope"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no pending rename for Assets/Nope.png"));
}

#[test]
fn list_with_explicit_store_path() {
    let tmp = project(&["Assets/Textures/Grass.png"]);
    let store_path = tmp.path().join("custom.json");

    cmd_in(tmp.path())
        .args(["check", "--record", "--issues"])
        .arg(&store_path)
        .arg("--report-out")
        .arg(tmp.path().join("report.json"))
        .assert()
        .code(2);
    assert!(store_path.is_file());

    cmd_in(tmp.path())
        .arg("issues")
        .arg("--issues")
        .arg(&store_path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("tex_Grass.png"));
}
