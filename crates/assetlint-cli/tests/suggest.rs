use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn assetlint_cmd() -> Command {
    Command::cargo_bin("assetlint").expect("assetlint binary not found - run `cargo build` first")
}

#[test]
fn valid_name_exits_zero() {
    assetlint_cmd()
        .args(["suggest", "tex_Grass", "--ext", ".png"])
        .assert()
        .success()
        .stdout("OK   tex_Grass.png\n");
}

#[test]
fn texture_gets_prefix() {
    assetlint_cmd()
        .args(["suggest", "Grass", "--ext", "PNG"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("WARN Grass.png: Texture should start with 'tex_'"))
        .stdout(predicate::str::contains("suggest: tex_Grass.png"));
}

#[test]
fn ui_sprites_folder_switches_to_sprite_prefix() {
    assetlint_cmd()
        .args(["suggest", "Button", "--ext", ".png", "--path", "Assets/UI/Sprites"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("suggest: spr_Button.png"));
}

#[test]
fn script_is_pascal_cased() {
    assetlint_cmd()
        .args(["suggest", "enemy_spawner", "--ext", ".cs"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("suggest: EnemySpawner.cs"));
}

#[test]
fn explicit_kind_wins_over_extension() {
    assetlint_cmd()
        .args(["suggest", "Explosion", "--ext", ".bin", "--kind", "AudioClip"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("suggest: sfx_Explosion.bin"));
}

#[test]
fn unknown_kind_is_a_tool_error() {
    assetlint_cmd()
        .args(["suggest", "Thing", "--kind", "spaceship"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid --kind"));
}

#[test]
fn unknown_category_is_valid() {
    assetlint_cmd()
        .args(["suggest", "notes", "--ext", ".txt"])
        .assert()
        .success();
}
