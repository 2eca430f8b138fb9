use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn senk(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("senk").unwrap();
    cmd.env("SENK_HOME", home).env("NO_COLOR", "1");
    cmd
}

fn export(home: &Path, id: &str) -> String {
    let output = senk(home).args(["export", id]).output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn new_then_list() {
    let temp_dir = tempfile::tempdir().unwrap();

    senk(temp_dir.path())
        .args(["new", "groceries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note created: groceries"));

    senk(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("groceries"));

    senk(temp_dir.path())
        .args(["new", "groceries"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn editing_session_through_commands() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    senk(home).args(["set", "plan", "0", "abcdef"]).assert().success();

    senk(home)
        .args(["apply", "plan", "split", "--start", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("focus: line 1, cursor 0"));
    assert_eq!(export(home, "plan"), "abc\ndef\n");

    senk(home)
        .args(["apply", "plan", "indent", "--index", "1"])
        .assert()
        .success();
    assert_eq!(export(home, "plan"), "abc\n def\n");

    senk(home)
        .args(["key", "plan", "backspace", "--index", "1"])
        .assert()
        .success();
    assert_eq!(export(home, "plan"), "abc\ndef\n");

    senk(home)
        .args(["key", "plan", "backspace", "--index", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("focus: line 0, cursor 3"));
    assert_eq!(export(home, "plan"), "abcdef\n");
}

#[test]
fn not_handled_commands_leave_note_alone() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    senk(home).args(["set", "n", "0", "x"]).assert().success();

    senk(home)
        .args(["apply", "n", "move-up"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not handled"));
    assert_eq!(export(home, "n"), "x\n");
}

#[test]
fn rejects_bad_input() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    senk(home)
        .args(["apply", "n", "explode"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown command"));

    senk(home)
        .args(["apply", "n", "split", "--index", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));

    senk(home)
        .args(["apply", "n", "split", "--start", "3", "--end", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("selection start"));
}

#[test]
fn import_and_export_html() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    let file = home.join("outline.txt");
    std::fs::write(&file, " a\n  b\nc").unwrap();

    senk(home)
        .args(["import", "outline", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 3 lines"));

    senk(home)
        .args(["export", "outline", "--format", "html"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<ul><ul><li data-index=\"0\">a</li>"));

    senk(home)
        .args(["show", "outline"])
        .assert()
        .success()
        .stdout(predicate::str::contains("    • b"));
}

#[test]
fn config_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    senk(home).args(["config", "bullet", "-"]).assert().success();
    senk(home)
        .args(["config", "bullet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-"));
    senk(home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("indent-width = 2"));
}

#[test]
fn path_and_delete() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    senk(home).args(["new", "gone"]).assert().success();

    senk(home)
        .args(["path", "gone"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gone.txt"));

    senk(home).args(["delete", "gone"]).assert().success();
    senk(home)
        .args(["export", "gone"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Note not found"));
}

#[test]
fn unbound_keys_are_not_handled() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    senk(home).args(["set", "n", "0", "x"]).assert().success();

    for key in ["escape", "home", "f1"] {
        senk(home)
            .args(["key", "n", key])
            .assert()
            .success()
            .stdout(predicate::str::contains("not handled"));
    }
    assert_eq!(export(home, "n"), "x\n");
}

#[test]
fn note_ids_cannot_replace_store_files() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    senk(home).args(["config", "file-ext", ".json"]).assert().success();
    senk(home).args(["new", "kept"]).assert().success();
    for id in ["data", "config"] {
        senk(home)
            .args(["new", id])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid note id"));
    }

    senk(home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("kept"));
}

#[test]
fn show_reports_missing_notes() {
    let temp_dir = tempfile::tempdir().unwrap();
    senk(temp_dir.path())
        .args(["show", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Note not found"));
}
