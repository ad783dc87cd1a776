//! Integration tests for the cofactor CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A command isolated from any user or repository config
fn cofactor(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cofactor").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("RUST_LOG")
        .env("COFACTOR_OUTPUT__PROGRESS", "false");
    cmd
}

/// Test CLI binary exists and responds to --help
#[test]
fn test_cli_help() {
    let dir = TempDir::new().unwrap();
    cofactor(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("compute"))
        .stdout(predicate::str::contains("bench"));
}

/// Test CLI responds to --version
#[test]
fn test_cli_version() {
    let dir = TempDir::new().unwrap();
    cofactor(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cofactor"));
}

#[test]
fn test_version_command() {
    let dir = TempDir::new().unwrap();
    cofactor(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "{} v{}",
            cofactor::PKG_NAME,
            cofactor::VERSION
        )))
        .stdout(predicate::str::contains(cofactor::PKG_DESCRIPTION));
}

/// Test invalid subcommand shows error
#[test]
fn test_invalid_subcommand() {
    let dir = TempDir::new().unwrap();
    cofactor(&dir)
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_compute_catalog_example() {
    let dir = TempDir::new().unwrap();
    cofactor(&dir)
        .args(["compute", "--example", "pair", "--workers", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sequential"))
        .stdout(predicate::str::contains("parallel"))
        .stdout(predicate::str::contains("-2"))
        .stdout(predicate::str::contains("ERROR!").not());
}

#[test]
fn test_compute_json_output() {
    let dir = TempDir::new().unwrap();
    let output = cofactor(&dir)
        .args(["compute", "--example", "lower5", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let reports = reports.as_array().unwrap();
    assert_eq!(reports.len(), 2);
    for report in reports {
        assert_eq!(report["determinant"], -120);
        assert_eq!(report["expected"], -120);
        assert_eq!(report["dimension"], 5);
        assert!(report["elapsed_ms"].is_number());
    }
}

#[test]
fn test_verbose_json_output_stays_parseable() {
    let dir = TempDir::new().unwrap();
    let output = cofactor(&dir)
        .args(["-v", "compute", "--example", "pair", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(reports[0]["determinant"], -2);
    assert_eq!(reports[1]["determinant"], -2);
}

#[test]
fn test_compute_matrix_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("matrix.txt");
    fs::write(&path, "# 3x3\n2 0 1\n1 3 2\n1 1 2\n").unwrap();

    cofactor(&dir)
        .args(["compute", "--method", "parallel", "--file"])
        .arg(&path)
        .args(["--expect", "6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("matrix.txt"))
        .stdout(predicate::str::contains("6"));
}

#[test]
fn test_compute_mismatch_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("matrix.json");
    fs::write(&path, "[[1, 2], [3, 4]]").unwrap();

    cofactor(&dir)
        .args(["compute", "--file"])
        .arg(&path)
        .args(["--expect", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ERROR!"))
        .stderr(predicate::str::contains("does not match"));
}

#[test]
fn test_compute_ragged_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ragged.json");
    fs::write(&path, "[[1, 2], [3]]").unwrap();

    cofactor(&dir)
        .args(["compute", "--file"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load matrix"));
}

#[test]
fn test_compute_unknown_example_fails() {
    let dir = TempDir::new().unwrap();
    cofactor(&dir)
        .args(["compute", "--example", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown example 'nope'"));
}

#[test]
fn test_compute_overflow_fails_when_checked() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("big.json");
    fs::write(&path, format!("[[{}, 0], [0, 2]]", i64::MAX)).unwrap();

    cofactor(&dir)
        .args(["compute", "--method", "sequential", "--file"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("overflow"));

    cofactor(&dir)
        .args(["compute", "--method", "sequential", "--overflow", "wrapping", "--file"])
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn test_quiet_compute_prints_nothing() {
    let dir = TempDir::new().unwrap();
    cofactor(&dir)
        .args(["-q", "compute", "--example", "identity3"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_examples_lists_catalog() {
    let dir = TempDir::new().unwrap();
    cofactor(&dir)
        .arg("examples")
        .assert()
        .success()
        .stdout(predicate::str::contains("pascal6"))
        .stdout(predicate::str::contains("laplacian9"))
        .stdout(predicate::str::contains("det = -120"));
}

#[test]
fn test_bench_small_examples() {
    let dir = TempDir::new().unwrap();
    cofactor(&dir)
        .args(["bench", "--max-dimension", "5", "--workers", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sequential4"))
        .stdout(predicate::str::contains("lower5"))
        .stdout(predicate::str::contains("pascal6").not());
}

#[test]
fn test_config_show_merges_layers() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("cofactor.toml"), "[pool]\nworkers = 3\n").unwrap();

    cofactor(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("workers = 3"))
        .stdout(predicate::str::contains("progress = false"));

    cofactor(&dir)
        .args(["config", "show", "pool"])
        .env("COFACTOR_POOL__WORKERS", "4")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"workers\": 4"));
}

#[test]
fn test_config_validate() {
    let dir = TempDir::new().unwrap();
    cofactor(&dir)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));

    let custom = dir.path().join("bad.toml");
    fs::write(&custom, "[pool]\nthread_percentage = 0\n").unwrap();
    cofactor(&dir)
        .args(["config", "validate", "--config"])
        .arg(&custom)
        .assert()
        .failure()
        .stderr(predicate::str::contains("thread_percentage"));
}

#[test]
fn test_missing_config_file_fails() {
    let dir = TempDir::new().unwrap();
    cofactor(&dir)
        .args(["--config", "absent.toml", "compute"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}
