use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn advent(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("advent").unwrap();
    cmd.env("ADVENT_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_fresh_calendar_lists_default_days() {
    let temp = tempfile::tempdir().unwrap();

    advent(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("24. -"))
        .stdout(predicate::str::contains("0 of 24 days filled"));
}

#[test]
fn test_config_days_applies_to_fresh_calendar() {
    let temp = tempfile::tempdir().unwrap();

    advent(temp.path())
        .args(["config", "days", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("days set to 10"));

    advent(temp.path())
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 of 10 days filled"));
}

#[test]
fn test_set_then_view_persists_across_runs() {
    let temp = tempfile::tempdir().unwrap();

    advent(temp.path())
        .args(["set", "3", "--title", "Elf", "--rating", "12", "--service", "Netflix"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Day 3 updated (title, rating, service)"));

    assert!(temp.path().join("calendar.json").exists());

    advent(temp.path())
        .args(["view", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Day 3 Elf"))
        .stdout(predicate::str::contains("Rating:  10/10"));
}

#[test]
fn test_out_of_range_day_fails() {
    let temp = tempfile::tempdir().unwrap();

    advent(temp.path())
        .args(["set", "30", "--title", "Late"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Day 30 is out of range"));
}

#[test]
fn test_resize_drops_days_with_warning() {
    let temp = tempfile::tempdir().unwrap();

    advent(temp.path())
        .args(["set", "22", "--title", "Gone"])
        .assert()
        .success();

    advent(temp.path())
        .args(["resize", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed data for days 22"))
        .stdout(predicate::str::contains("Calendar resized from 24 to 20 days"));

    advent(temp.path())
        .args(["resize", "24"])
        .assert()
        .success();

    advent(temp.path())
        .args(["view", "22"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gone").not());
}

#[test]
fn test_reset_without_confirmation_keeps_data() {
    let temp = tempfile::tempdir().unwrap();

    advent(temp.path())
        .args(["set", "1", "--title", "Keep"])
        .assert()
        .success();

    advent(temp.path())
        .arg("reset")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reset not confirmed"));

    advent(temp.path())
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reset all 24 days (1 had data)"));

    advent(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Keep").not());
}

#[test]
fn test_import_csv_file() {
    let temp = tempfile::tempdir().unwrap();
    let csv = temp.path().join("days.csv");
    fs::write(&csv, "day,title,rating\n3,Holiday Movie,7\n40,Nope,1\n").unwrap();

    advent(temp.path())
        .arg("import")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("Ignored 1 entries outside days 1-24: 40"))
        .stdout(predicate::str::contains("Imported 1 days from csv: 3"));

    advent(temp.path())
        .args(["view", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Holiday Movie"));
}

#[test]
fn test_malformed_json_import_fails_without_changes() {
    let temp = tempfile::tempdir().unwrap();
    let bad = temp.path().join("bad.json");
    fs::write(&bad, "{not json").unwrap();

    advent(temp.path())
        .args(["set", "2", "--title", "Stay"])
        .assert()
        .success();
    let before = fs::read_to_string(temp.path().join("calendar.json")).unwrap();

    advent(temp.path())
        .arg("import")
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Parse error"));

    let after = fs::read_to_string(temp.path().join("calendar.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_share_code_round_trips_through_stdin() {
    let source = tempfile::tempdir().unwrap();
    let target = tempfile::tempdir().unwrap();

    advent(source.path())
        .args(["set", "5", "--title", "Klaus", "--notes", "snow, lots"])
        .assert()
        .success();

    let output = advent(source.path()).arg("share").output().unwrap();
    assert!(output.status.success());
    let code = String::from_utf8(output.stdout).unwrap();

    advent(target.path())
        .args(["import", "-", "--format", "share"])
        .write_stdin(code)
        .assert()
        .success();

    advent(target.path())
        .args(["view", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Klaus"))
        .stdout(predicate::str::contains("snow, lots"));
}

#[test]
fn test_export_json_to_stdout_is_clean() {
    let temp = tempfile::tempdir().unwrap();

    advent(temp.path())
        .args(["set", "1", "--title", "Elf"])
        .assert()
        .success();

    let output = advent(temp.path()).arg("export").output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["1"]["title"], "Elf");
}

#[test]
fn test_export_archive_to_path() {
    let temp = tempfile::tempdir().unwrap();
    let archive = temp.path().join("backup.tar.gz");

    advent(temp.path())
        .args(["export", "--format", "archive", "--output"])
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 24 days"));

    assert!(archive.exists());
}

#[test]
fn test_corrupt_calendar_warns_and_recovers() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join("calendar.json"), "{{{").unwrap();

    advent(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Could not read saved calendar"))
        .stdout(predicate::str::contains("0 of 24 days filled"));
}

#[test]
fn test_status_reports_location() {
    let temp = tempfile::tempdir().unwrap();

    advent(temp.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Last saved: never"))
        .stdout(predicate::str::contains("calendar.json"));
}
