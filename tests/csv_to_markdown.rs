use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn csv_to_markdown() -> Command {
    Command::cargo_bin("csv-to-markdown").expect("binary is built")
}

#[test]
fn converts_next_to_input() {
    let dir = TempDir::new().unwrap();
    let csv = dir.path().join("team.csv");
    fs::write(&csv, "name,role\nAda, engineer \n").unwrap();

    csv_to_markdown()
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("team.md"));

    assert_eq!(
        fs::read_to_string(dir.path().join("team.md")).unwrap(),
        "| name | role |\n| - | - |\n| Ada | engineer |"
    );
}

#[test]
fn missing_input_fails() {
    let dir = TempDir::new().unwrap();

    csv_to_markdown()
        .arg(dir.path().join("absent.csv"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No such file or directory"));

    assert!(!dir.path().join("absent.md").exists());
}

#[test]
fn existing_output_left_intact() {
    let dir = TempDir::new().unwrap();
    let csv = dir.path().join("data.csv");
    let md = dir.path().join("data.md");
    fs::write(&csv, "a,b\n1,2\n").unwrap();
    fs::write(&md, "keep me").unwrap();

    csv_to_markdown()
        .arg(&csv)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
    assert_eq!(fs::read_to_string(&md).unwrap(), "keep me");

    csv_to_markdown().arg(&csv).arg("--force").assert().success();
    assert_eq!(
        fs::read_to_string(&md).unwrap(),
        "| a | b |\n| - | - |\n| 1 | 2 |"
    );
}
