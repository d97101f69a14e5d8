use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::PathBuf;
use std::process::Command;

fn sample_csv() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/gdp_sample.csv")
}

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("econ-plots").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("econ-plots"))
        .stdout(predicate::str::contains("bar"));
}

#[test]
fn bar_command_writes_png() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("gdp.png");
    let mut cmd = Command::cargo_bin("econ-plots").unwrap();
    cmd.args(["bar", "--data"])
        .arg(sample_csv())
        .args(["--title", "Ahead of the pack", "--xticks", "0,5,10,15,20", "--out"])
        .arg(&out);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Wrote plot to"));
    assert!(std::fs::metadata(&out).unwrap().len() > 0);
}

#[test]
fn line_command_accepts_negative_limits() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("line.svg");
    let mut cmd = Command::cargo_bin("econ-plots").unwrap();
    cmd.args(["line", "--ylim", "-3:3", "--ytick-step", "1", "--anchor", "axes", "--out"])
        .arg(&out);
    cmd.assert().success();
    assert!(out.exists());
}

#[test]
fn bar_command_reports_a_missing_year() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("econ-plots").unwrap();
    cmd.args(["bar", "--year", "1900", "--data"])
        .arg(sample_csv())
        .arg("--out")
        .arg(dir.path().join("x.png"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no rows for year 1900"));
}

#[test]
fn demo_command_writes_both_charts_without_a_data_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("econ-plots").unwrap();
    cmd.current_dir(dir.path())
        .args(["demo", "--dpi", "72", "--out-dir"])
        .arg(dir.path());
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("bar_demo.png"));
    for name in ["line_demo.png", "bar_demo.png"] {
        let meta = std::fs::metadata(dir.path().join(name)).unwrap();
        assert!(meta.len() > 0, "{name} is empty");
    }
}

#[test]
fn bar_command_accepts_a_hex_color() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("red.png");
    let mut cmd = Command::cargo_bin("econ-plots").unwrap();
    cmd.args(["bar", "--color", "#E3120B", "--data"])
        .arg(sample_csv())
        .arg("--out")
        .arg(&out);
    cmd.assert().success();
    assert!(out.exists());
}
