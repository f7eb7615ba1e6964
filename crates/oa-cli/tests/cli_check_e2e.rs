//! End-to-end tests for the oa-config binary.
//!
//! Each command runs with a cleared environment and a temp working
//! directory, so stray .env files and host variables cannot leak in.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn oa_config(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("oa-config").unwrap();
    cmd.current_dir(dir.path());
    cmd.env_clear();
    cmd
}

fn write_env_file(dir: &tempfile::TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(body.as_bytes()).unwrap();
    path
}

#[test]
fn check_succeeds_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    oa_config(&dir).arg("check").assert().success();
}

#[test]
fn check_rejects_empty_rpc_endpoint() {
    let dir = tempfile::tempdir().unwrap();
    oa_config(&dir)
        .env("SOLANA_RPC_ENDPOINT", "")
        .arg("check")
        .assert()
        .code(10)
        .stderr(predicate::str::contains("solana.rpc_endpoint"));
}

#[test]
fn check_rejects_default_secret_in_production() {
    let dir = tempfile::tempdir().unwrap();
    oa_config(&dir)
        .env("NODE_ENV", "production")
        .arg("check")
        .assert()
        .code(10)
        .stderr(predicate::str::contains("security.jwt_secret"));
}

#[test]
fn check_accepts_rotated_secret_in_production() {
    let dir = tempfile::tempdir().unwrap();
    oa_config(&dir)
        .env("NODE_ENV", "production")
        .env("JWT_SECRET", "some-other-value")
        .arg("check")
        .assert()
        .success();
}

#[test]
fn show_json_redacts_secrets() {
    let dir = tempfile::tempdir().unwrap();
    oa_config(&dir)
        .env("JWT_SECRET", "super-sensitive")
        .args(["show", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""jwt_secret_is_default": false"#))
        .stdout(predicate::str::contains("super-sensitive").not());
}

#[test]
fn show_reads_env_file_override() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_env_file(&dir, "custom.env", "PORT=4100\n");

    oa_config(&dir)
        .arg("--env-file")
        .arg(&path)
        .args(["show", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""port": 4100"#));
}

#[test]
fn environment_flag_selects_env_file() {
    let dir = tempfile::tempdir().unwrap();
    write_env_file(&dir, ".env.staging", "THEME=light\n");

    oa_config(&dir)
        .args(["--environment", "staging", "show", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""environment": "staging""#))
        .stdout(predicate::str::contains(r#""theme": "light""#));
}

#[test]
fn show_text_lists_resolved_values() {
    let dir = tempfile::tempdir().unwrap();
    oa_config(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("solana.rpc_endpoint"))
        .stdout(predicate::str::contains("https://api.devnet.solana.com"));
}
