use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn reqfile_cmd() -> Command {
    Command::cargo_bin("reqfile").unwrap()
}

const SAMPLE: &str = "pbr>=0.6,!=0.7,<1.0\nsuds-jurko\nsix>=1.7.0  # MIT\n";

fn write_manifest(tmp: &TempDir) -> std::path::PathBuf {
    let path = tmp.path().join("requirements.txt");
    fs::write(&path, SAMPLE).unwrap();
    path
}

#[test]
fn test_list_text_preserves_order() {
    let tmp = TempDir::new().unwrap();
    let path = write_manifest(&tmp);

    let output = reqfile_cmd()
        .arg("list")
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec!["pbr>=0.6,!=0.7,<1.0", "suds-jurko", "six>=1.7.0  # MIT"]
    );
}

#[test]
fn test_list_json() {
    let tmp = TempDir::new().unwrap();
    let path = write_manifest(&tmp);

    reqfile_cmd()
        .args(["list", "--format", "json"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"pbr\""))
        .stdout(predicate::str::contains("\"op\": \">=\""))
        .stdout(predicate::str::contains("\"comment\": \"MIT\""));
}

#[test]
fn test_list_unknown_format() {
    let tmp = TempDir::new().unwrap();
    let path = write_manifest(&tmp);

    reqfile_cmd()
        .args(["list", "--format", "yaml"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format 'yaml'"));
}
