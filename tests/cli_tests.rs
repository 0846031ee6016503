//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// Command with an isolated home and working directory and no PSAGENT_* variables.
fn psagent(home: &Path, work: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("psagent"));
    cmd.current_dir(work)
        .env("HOME", home)
        .env_remove("USERPROFILE")
        .env_remove("PSAGENT_PROFILE")
        .env_remove("PSAGENT_TIMEOUT_MS")
        .env_remove("PSAGENT_PLUGIN_ENDPOINT")
        .env_remove("PSAGENT_DRY_RUN")
        .env_remove("PSAGENT_DOCS_ROOT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("psagent"));
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("psagent"));
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("psagent"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("doctor"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("ops"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_config_show_defaults_plain() {
    let home = TempDir::new().expect("home");
    let work = TempDir::new().expect("work");
    psagent(home.path(), work.path())
        .args(["--plain", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=desktop"))
        .stdout(predicate::str::contains("profile=default"))
        .stdout(predicate::str::contains("outputMode=plain"))
        .stdout(predicate::str::contains("timeoutMs=15000"))
        .stdout(predicate::str::contains("pluginEndpoint=http://127.0.0.1:43120"))
        .stdout(predicate::str::contains("dryRun=false"));
}

#[test]
fn test_config_show_json_respects_precedence() {
    let home = TempDir::new().expect("home");
    let work = TempDir::new().expect("work");
    let config_dir = home.path().join(".config").join("psagent");
    fs::create_dir_all(&config_dir).expect("mkdir");
    fs::write(config_dir.join("config.json"), r#"{"profile":"user","dryRun":true}"#)
        .expect("write user config");
    fs::write(work.path().join(".psagent.json"), r#"{"profile":"project","timeoutMs":800}"#)
        .expect("write project config");

    let output = psagent(home.path(), work.path())
        .env("PSAGENT_TIMEOUT_MS", "2500")
        .args(["--json", "--plain", "--timeout", "0", "config", "show"])
        .output()
        .expect("run");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json stdout");
    assert_eq!(value["profile"], "project");
    assert_eq!(value["outputMode"], "json");
    assert_eq!(value["timeoutMs"], 2500);
    assert_eq!(value["dryRun"], true);
}

#[test]
fn test_negative_timeout_falls_back_to_default() {
    let home = TempDir::new().expect("home");
    let work = TempDir::new().expect("work");
    psagent(home.path(), work.path())
        .args(["--timeout", "-5", "--plain", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("timeoutMs=15000"));
}

#[test]
fn test_config_show_explain_lists_sources() {
    let home = TempDir::new().expect("home");
    let work = TempDir::new().expect("work");
    psagent(home.path(), work.path())
        .env("PSAGENT_PROFILE", "env-profile")
        .args(["--plain", "config", "show", "--explain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("profile=env-profile"))
        .stdout(predicate::str::contains("source.profile=env"))
        .stdout(predicate::str::contains("source.timeoutMs=default"));
}

#[test]
fn test_session_profile_is_used() {
    let home = TempDir::new().expect("home");
    let work = TempDir::new().expect("work");
    let config_dir = home.path().join(".config").join("psagent");
    fs::create_dir_all(&config_dir).expect("mkdir");
    fs::write(config_dir.join("session.json"), r#"{"profile":"last-session"}"#)
        .expect("write session");

    psagent(home.path(), work.path())
        .args(["--plain", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("profile=last-session"));
}

#[test]
fn test_ops_list_from_docs_root() {
    let home = TempDir::new().expect("home");
    let work = TempDir::new().expect("work");
    psagent(home.path(), work.path())
        .arg("--docs-root")
        .arg(fixture_root())
        .args(["--plain", "ops", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Documents=doc.open,doc.save,doc.close"))
        .stdout(predicate::str::contains("Layers=layer.create,layer.delete"))
        .stdout(predicate::str::contains("layer.merge").not());
}

#[test]
fn test_ops_show_resolves_alias() {
    let home = TempDir::new().expect("home");
    let work = TempDir::new().expect("work");
    psagent(home.path(), work.path())
        .env("PSAGENT_DOCS_ROOT", fixture_root())
        .args(["--plain", "ops", "show", "layer.add"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name=layer.create"))
        .stdout(predicate::str::contains("required=`name`"))
        .stdout(predicate::str::contains("cataloged=true"));
}

#[test]
fn test_ops_show_unknown_operation_fails() {
    let home = TempDir::new().expect("home");
    let work = TempDir::new().expect("work");
    psagent(home.path(), work.path())
        .arg("--docs-root")
        .arg(fixture_root())
        .args(["ops", "show", "layer.explode"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown operation: layer.explode"));
}

#[test]
fn test_ops_without_documents_fails() {
    let home = TempDir::new().expect("home");
    let work = TempDir::new().expect("work");
    psagent(home.path(), work.path())
        .arg("--docs-root")
        .arg(work.path())
        .args(["ops", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Operation reference documents not found"));
}

#[test]
fn test_ops_check_reports_inconsistency() {
    let home = TempDir::new().expect("home");
    let work = TempDir::new().expect("work");
    let dir = work.path().join("docs").join("reference");
    fs::create_dir_all(&dir).expect("mkdir");
    fs::write(dir.join("operation-catalog.mdx"), "## G\n- [`listed`](#listed)\n").expect("write");
    fs::write(dir.join("operation-arguments-and-examples.mdx"), "### `orphan`\n").expect("write");

    psagent(home.path(), work.path())
        .args(["--plain", "ops", "check"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("missingEntry=listed"))
        .stdout(predicate::str::contains("uncatalogedEntry=orphan"));
}

#[test]
fn test_doctor_reports_catalog_and_capabilities() {
    let home = TempDir::new().expect("home");
    let work = TempDir::new().expect("work");
    let output = psagent(home.path(), work.path())
        .arg("--docs-root")
        .arg(fixture_root())
        .args(["--json", "doctor"])
        .output()
        .expect("run");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json stdout");
    assert_eq!(value["mode"], "desktop");
    assert_eq!(value["capabilities"]["applyOps"], true);
    assert_eq!(value["catalog"]["found"], true);
    assert_eq!(value["catalog"]["groups"], 3);
    assert_eq!(value["catalog"]["entries"], 6);
}

#[test]
fn test_completions_generate_script() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("psagent"));
    cmd.args(["completions", "bash"]);
    cmd.assert().success().stdout(predicate::str::contains("psagent"));
}
