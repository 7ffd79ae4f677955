//! Integration tests for add, list, show, edit and delete

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{id_from_output, urgelog_cmd};

fn init(temp: &TempDir) {
    urgelog_cmd(temp.path()).arg("init").assert().success();
}

fn add(temp: &TempDir, args: &[&str]) -> String {
    let output = urgelog_cmd(temp.path())
        .arg("add")
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success());
    id_from_output(&output.stdout)
}

#[test]
fn test_list_no_entries() {
    let temp = TempDir::new().unwrap();
    init(&temp);

    urgelog_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));
}

#[test]
fn test_add_derives_title_emoji_and_tags() {
    let temp = TempDir::new().unwrap();
    init(&temp);

    urgelog_cmd(temp.path())
        .arg("add")
        .arg("--location")
        .arg("Was at home on the couch\nfelt anxious")
        .arg("--thoughts")
        .arg("I coped, went for a walk instead")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 😊 Was at home on the couch"));

    urgelog_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Anxiety, At home]"));
}

#[test]
fn test_list_newest_first_with_limit() {
    let temp = TempDir::new().unwrap();
    init(&temp);

    add(&temp, &["--location", "First place"]);
    add(&temp, &["--location", "Second place"]);
    add(&temp, &["--location", "Third place"]);

    let output = urgelog_cmd(temp.path()).arg("list").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("Third place"));
    assert!(lines[1].contains("Second place"));
    assert!(lines[2].contains("First place"));

    let output = urgelog_cmd(temp.path())
        .arg("list")
        .arg("-n")
        .arg("1")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.contains("Third place"));
}

#[test]
fn test_list_json_uses_camel_case() {
    let temp = TempDir::new().unwrap();
    init(&temp);
    add(&temp, &["--location", "Office", "--body-feelings", "Sweaty palms"]);

    let output = urgelog_cmd(temp.path())
        .arg("list")
        .arg("--json")
        .output()
        .unwrap();
    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(entries[0]["bodyFeelings"], "Sweaty palms");
    assert_eq!(entries[0]["title"], "Office");
    assert_eq!(entries[0]["tags"][0], "Work");
    assert_eq!(entries[0]["createdAt"], entries[0]["updatedAt"]);
}

#[test]
fn test_show_entry() {
    let temp = TempDir::new().unwrap();
    init(&temp);
    let id = add(&temp, &["--location", "Bus stop", "--trigger", "Betting ad"]);

    urgelog_cmd(temp.path())
        .arg("show")
        .arg(&id)
        .assert()
        .success()
        .stdout(predicate::str::contains("Bus stop"))
        .stdout(predicate::str::contains("Trigger:\nBetting ad"))
        .stdout(predicate::str::contains(id.as_str()));
}

#[test]
fn test_show_missing_entry() {
    let temp = TempDir::new().unwrap();
    init(&temp);

    urgelog_cmd(temp.path())
        .arg("show")
        .arg("0-missing")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Entry not found: '0-missing'"));
}

#[test]
fn test_edit_rederives_and_keeps_identity() {
    let temp = TempDir::new().unwrap();
    init(&temp);
    let id = add(&temp, &["--location", "Office", "--thoughts", "Just tired"]);

    let before = urgelog_cmd(temp.path())
        .arg("show")
        .arg(&id)
        .arg("--json")
        .output()
        .unwrap();
    let before: serde_json::Value = serde_json::from_slice(&before.stdout).unwrap();
    assert_eq!(before["emoji"], "😔");

    urgelog_cmd(temp.path())
        .arg("edit")
        .arg(&id)
        .arg("--thoughts")
        .arg("Furious at myself")
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated 😤 Office"));

    let after = urgelog_cmd(temp.path())
        .arg("show")
        .arg(&id)
        .arg("--json")
        .output()
        .unwrap();
    let after: serde_json::Value = serde_json::from_slice(&after.stdout).unwrap();
    assert_eq!(after["id"], before["id"]);
    assert_eq!(after["createdAt"], before["createdAt"]);
    assert_eq!(after["location"], "Office");
    assert!(after["updatedAt"].as_str().unwrap() >= before["updatedAt"].as_str().unwrap());
}

#[test]
fn test_edit_requires_a_field() {
    let temp = TempDir::new().unwrap();
    init(&temp);
    let id = add(&temp, &["--location", "Office"]);

    urgelog_cmd(temp.path())
        .arg("edit")
        .arg(&id)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Nothing to change"));
}

#[test]
fn test_edit_missing_entry() {
    let temp = TempDir::new().unwrap();
    init(&temp);

    urgelog_cmd(temp.path())
        .arg("edit")
        .arg("0-missing")
        .arg("--actions")
        .arg("Walked away")
        .assert()
        .failure()
        .code(4);
}

#[test]
fn test_delete_twice_is_harmless() {
    let temp = TempDir::new().unwrap();
    init(&temp);
    let keep = add(&temp, &["--location", "Keep me"]);
    let drop = add(&temp, &["--location", "Drop me"]);

    urgelog_cmd(temp.path())
        .arg("delete")
        .arg(&drop)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Deleted {}", drop)));

    urgelog_cmd(temp.path())
        .arg("delete")
        .arg(&drop)
        .assert()
        .success()
        .stdout(predicate::str::contains("No entry with id"));

    let output = urgelog_cmd(temp.path()).arg("list").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.contains(&keep));
}

#[test]
fn test_russian_locale_labels() {
    let temp = TempDir::new().unwrap();
    urgelog_cmd(temp.path())
        .arg("init")
        .arg("--locale")
        .arg("ru")
        .assert()
        .success();

    urgelog_cmd(temp.path())
        .arg("add")
        .arg("--trigger")
        .arg("Реклама казино")
        .assert()
        .success()
        .stdout(predicate::str::contains("Новая запись"));

    urgelog_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Казино]"));
}
