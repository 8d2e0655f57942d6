//! Tests for error handling, exit codes, and suggestions.
//!
//! Exit code contract:
//! 2 user error, 3 not found, 4 configuration, 1 internal.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn premix() -> Command {
    let mut cmd = Command::cargo_bin("premix").unwrap();
    cmd.env_remove("PREMIX_TEMPLATES_DIR")
        .env_remove("NO_COLOR")
        .env_remove("RUST_LOG");
    cmd
}

// ── user errors (exit 2) ──────────────────────────────────────────────────────

#[test]
fn unknown_preset_is_rejected_by_argument_parsing() {
    premix()
        .args(["generate", "angular"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("angular"));
}

#[test]
fn empty_dir_flag_exits_2_with_suggestions() {
    let temp = TempDir::new().unwrap();
    premix()
        .current_dir(temp.path())
        .args(["generate", "vue", "--dir", ""])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("Suggestions:"))
        .stderr(predicate::str::contains("--verbose"));

    assert!(!temp.path().join("package.json").exists());
}

#[test]
fn dir_with_separator_exits_2() {
    let temp = TempDir::new().unwrap();
    premix()
        .current_dir(temp.path())
        .args(["generate", "vue", "--dir", "a/b"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("path segment"));
}

#[test]
fn root_pointing_at_a_file_exits_2() {
    let temp = TempDir::new().unwrap();
    let blob = temp.path().join("blob");
    fs::write(&blob, "x").unwrap();

    premix()
        .args(["generate", "vue", "--root"])
        .arg(&blob)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn conflicting_quiet_and_verbose_exit_2() {
    premix().args(["-q", "-v", "list"]).assert().failure().code(2);
}

// ── not found (exit 3) ────────────────────────────────────────────────────────

#[test]
fn missing_template_tree_exits_3_and_writes_nothing() {
    let templates = TempDir::new().unwrap(); // deliberately empty
    let project = TempDir::new().unwrap();

    premix()
        .env("PREMIX_TEMPLATES_DIR", templates.path())
        .current_dir(project.path())
        .args(["generate", "vue"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("cannot read template"))
        .stdout(predicate::str::contains("Scaffolding aborted"));

    // The manifest step fails before anything is written.
    assert!(!project.path().join("package.json").exists());
    assert!(!project.path().join("webpack.mix.js").exists());
}

#[test]
fn partial_scaffold_keeps_completed_steps() {
    // A template dir with manifest + build config but no starter tree:
    // steps 1 and 2 succeed and stay on disk, step 3 fails.
    let templates = TempDir::new().unwrap();
    let vue = templates.path().join("vue");
    fs::create_dir_all(&vue).unwrap();
    fs::write(vue.join("package.json"), r#"{ "private": true }"#).unwrap();
    fs::write(
        vue.join("webpack.mix.js"),
        "mix.js('assets/js/app.js', 'public/js');\n",
    )
    .unwrap();

    let project = TempDir::new().unwrap();
    premix()
        .env("PREMIX_TEMPLATES_DIR", templates.path())
        .current_dir(project.path())
        .args(["generate", "vue"])
        .assert()
        .failure()
        .code(3)
        .stdout(predicate::str::contains("package.json written"))
        .stdout(predicate::str::contains("webpack.mix.js written"))
        .stdout(predicate::str::contains("Scaffolding aborted"));

    assert!(project.path().join("package.json").exists());
    assert!(project.path().join("webpack.mix.js").exists());
    // The destination dir is created before the starter files are listed,
    // so it exists but holds nothing.
    let assets = project.path().join("assets");
    assert!(assets.exists());
    assert_eq!(fs::read_dir(&assets).unwrap().count(), 0);
}

#[test]
fn verbose_failures_include_the_cause_chain() {
    let templates = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();

    premix()
        .env("PREMIX_TEMPLATES_DIR", templates.path())
        .current_dir(project.path())
        .args(["-v", "generate", "vue"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Caused by:"));
}

// ── configuration (exit 4) ────────────────────────────────────────────────────

#[test]
fn malformed_config_exits_4() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("premix.toml"), "defaults = [not toml").unwrap();

    premix()
        .current_dir(temp.path())
        .args(["--config", "premix.toml", "generate", "vue"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("configuration"));
}

#[test]
fn explicit_missing_config_file_exits_4() {
    premix()
        .args(["--config", "/nonexistent/premix.toml", "list"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn config_preset_typo_exits_4_with_suggestions() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("premix.toml"),
        "[defaults]\npreset = \"reactt\"\n",
    )
    .unwrap();

    premix()
        .current_dir(temp.path())
        .args(["--config", "premix.toml", "generate"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("not a known preset"))
        .stderr(predicate::str::contains("--config"));
}

#[test]
fn invalid_config_dir_value_exits_4() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("premix.toml"),
        "[defaults]\ndir = \"a/b\"\n",
    )
    .unwrap();

    premix()
        .current_dir(temp.path())
        .args(["--config", "premix.toml", "generate", "vue"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("not usable"));
}

// ── internal (exit 1) ─────────────────────────────────────────────────────────

#[test]
fn corrupt_manifest_template_exits_1() {
    let templates = TempDir::new().unwrap();
    let vue = templates.path().join("vue");
    fs::create_dir_all(vue.join("assets/js")).unwrap();
    fs::write(vue.join("package.json"), "this is not json").unwrap();
    fs::write(
        vue.join("webpack.mix.js"),
        "mix.js('assets/js/app.js', 'public/js');\n",
    )
    .unwrap();
    fs::write(vue.join("assets/js/app.js"), "console.log('x');\n").unwrap();

    let project = TempDir::new().unwrap();
    premix()
        .env("PREMIX_TEMPLATES_DIR", templates.path())
        .current_dir(project.path())
        .args(["generate", "vue"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not valid JSON"));

    // Decoding fails before the write, so nothing lands.
    assert!(!project.path().join("package.json").exists());
}

// ── error visibility ──────────────────────────────────────────────────────────

#[test]
fn quiet_failures_still_report_the_error() {
    let temp = TempDir::new().unwrap();
    premix()
        .current_dir(temp.path())
        .args(["-q", "generate", "vue", "--dir", "a/b"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Error:"));
}
