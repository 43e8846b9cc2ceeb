//! Integration tests for the `mis` CLI.
//!
//! Each test works in a temp directory, runs `mis` as a subprocess,
//! and checks stdout and/or the store document.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use pretty_assertions::assert_eq;

fn mis_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_mis"))
}

/// Run `mis` with the given args in the given directory, returning (stdout, stderr, success).
fn run_mis(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(mis_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("MIS_LOG")
        .output()
        .expect("failed to run mis");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

/// Run `mis` expecting success, return stdout.
fn run_mis_ok(dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, success) = run_mis(dir, args);
    if !success {
        panic!(
            "mis {:?} failed:\nstdout: {}\nstderr: {}",
            args, stdout, stderr
        );
    }
    stdout
}

/// Create a task and return its id
fn create_task(dir: &Path, args: &[&str]) -> String {
    let mut full = vec!["new", "--json"];
    full.extend_from_slice(args);
    let out = run_mis_ok(dir, &full);
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    v["id"].as_str().unwrap().to_string()
}

fn read_store(dir: &Path) -> serde_json::Value {
    let text = fs::read_to_string(dir.join(".makeitso/store.json")).unwrap();
    serde_json::from_str(&text).unwrap()
}

// ---------------------------------------------------------------------------
// init
// ---------------------------------------------------------------------------

#[test]
fn test_init_writes_config() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_mis_ok(tmp.path(), &["init", "--owner", "alice"]);
    assert!(out.contains("makeitso.toml"));

    let text = fs::read_to_string(tmp.path().join(".makeitso/makeitso.toml")).unwrap();
    assert!(text.contains("owner = \"alice\""));

    let (_, stderr, success) = run_mis(tmp.path(), &["init"]);
    assert!(!success);
    assert!(stderr.contains("already exists"));
    run_mis_ok(tmp.path(), &["init", "--force"]);
}

// ---------------------------------------------------------------------------
// new / edit / show
// ---------------------------------------------------------------------------

#[test]
fn test_new_task_with_all_fields() {
    let tmp = tempfile::TempDir::new().unwrap();
    let id = create_task(
        tmp.path(),
        &[
            "--title",
            "Book dentist",
            "--description",
            "morning slot",
            "--url",
            "https://dentist.example",
            "--priority",
            "High",
            "--flag",
            "On",
            "--date",
            "2022-12-05",
            "--time",
            "08:45",
        ],
    );

    let out = run_mis_ok(tmp.path(), &["show", &id]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            format!("[ ] {} Book dentist", id).as_str(),
            "  description: morning slot",
            "  url: https://dentist.example",
            "  priority: High",
            "  flag: On",
            "  date: Mon, 5 Dec 2022",
            "  time: 08:45",
        ]
    );

    let store = read_store(tmp.path());
    let stored = &store["tasks"][&id];
    assert_eq!(stored["priority"], "HIGH");
    assert_eq!(stored["due"]["date"], "2022-12-05");
    assert_eq!(stored["due"]["time"], "08:45:00");
}

#[test]
fn test_unknown_priority_and_flag_fall_back() {
    let tmp = tempfile::TempDir::new().unwrap();
    let id = create_task(
        tmp.path(),
        &["--title", "x", "--priority", "urgent", "--flag", "yes"],
    );
    let out = run_mis_ok(tmp.path(), &["show", &id, "--json"]);
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["priority"], "NONE");
    assert_eq!(v["flag"], false);
}

#[test]
fn test_edit_keeps_other_fields() {
    let tmp = tempfile::TempDir::new().unwrap();
    let id = create_task(
        tmp.path(),
        &["--title", "Draft", "--date", "2024-03-15", "--time", "17:00"],
    );

    let out = run_mis_ok(tmp.path(), &["edit", &id, "--time", "09:00"]);
    assert_eq!(out.trim(), format!("{} updated", id));

    let out = run_mis_ok(tmp.path(), &["show", &id, "--json"]);
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["title"], "Draft");
    assert_eq!(v["due_date"], "Fri, 15 Mar 2024");
    assert_eq!(v["due_time"], "09:00");
}

#[test]
fn test_edit_clear_date() {
    let tmp = tempfile::TempDir::new().unwrap();
    let id = create_task(tmp.path(), &["--title", "t", "--date", "2024-03-15", "--time", "17:00"]);
    run_mis_ok(tmp.path(), &["edit", &id, "--clear-date"]);
    let store = read_store(tmp.path());
    assert!(store["tasks"][&id]["due"].get("date").is_none());
    assert_eq!(store["tasks"][&id]["due"]["time"], "17:00:00");
}

#[test]
fn test_edit_without_changes_reports_unchanged() {
    let tmp = tempfile::TempDir::new().unwrap();
    let id = create_task(tmp.path(), &["--title", "same"]);
    let out = run_mis_ok(tmp.path(), &["edit", &id, "--title", "same"]);
    assert_eq!(out.trim(), format!("{} unchanged", id));
}

#[test]
fn test_out_of_range_time_is_rejected() {
    let tmp = tempfile::TempDir::new().unwrap();
    let id = create_task(tmp.path(), &["--title", "t", "--time", "10:00"]);

    let (_, stderr, success) = run_mis(tmp.path(), &["edit", &id, "--time", "24:00"]);
    assert!(!success);
    assert!(stderr.contains("hour 24 is out of range"));

    let (_, stderr, success) = run_mis(tmp.path(), &["edit", &id, "--time", "12:60"]);
    assert!(!success);
    assert!(stderr.contains("minute 60 is out of range"));

    // nothing was written
    let store = read_store(tmp.path());
    assert_eq!(store["tasks"][&id]["due"]["time"], "10:00:00");
}

#[test]
fn test_bad_date_is_rejected() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (_, stderr, success) = run_mis(tmp.path(), &["new", "--date", "05/12/2022"]);
    assert!(!success);
    assert!(stderr.contains("expected YYYY-MM-DD"));
}

#[test]
fn test_edit_missing_task() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (_, stderr, success) = run_mis(tmp.path(), &["edit", "nope", "--title", "x"]);
    assert!(!success);
    assert!(stderr.contains("task not found: nope"));
}

#[test]
fn test_list_in_insertion_order() {
    let tmp = tempfile::TempDir::new().unwrap();
    let a = create_task(tmp.path(), &["--title", "first", "--priority", "Low"]);
    let b = create_task(tmp.path(), &["--title", "second", "--flag", "On"]);

    let out = run_mis_ok(tmp.path(), &["list"]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            format!("[ ] {} first (Low)", a).as_str(),
            format!("[ ] {} second (flagged)", b).as_str(),
        ]
    );
}

#[test]
fn test_custom_display_format_and_data_dir() {
    let tmp = tempfile::TempDir::new().unwrap();
    let data = tmp.path().join("elsewhere");
    fs::create_dir_all(&data).unwrap();
    fs::write(
        data.join("makeitso.toml"),
        "[display]\ndate_format = \"%d/%m/%Y\"\n",
    )
    .unwrap();
    let data_arg = data.to_str().unwrap();

    let out = run_mis_ok(
        tmp.path(),
        &["-C", data_arg, "new", "--title", "t", "--date", "2022-12-05", "--json"],
    );
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["due_date"], "05/12/2022");
    assert!(data.join("store.json").exists());
    assert!(!tmp.path().join(".makeitso").exists());
}

// ---------------------------------------------------------------------------
// todo
// ---------------------------------------------------------------------------

#[test]
fn test_todo_add_list_done() {
    let tmp = tempfile::TempDir::new().unwrap();
    run_mis_ok(tmp.path(), &["init", "--owner", "ann"]);

    let out = run_mis_ok(tmp.path(), &["todo", "add", "Buy milk", "--priority", "medium", "--json"]);
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    let id = v["id"].as_str().unwrap().to_string();
    assert_eq!(v["priority"], "MEDIUM");
    assert_eq!(v["owner"], "ann");

    let out = run_mis_ok(tmp.path(), &["todo", "list", "--mine"]);
    assert_eq!(out.trim(), format!("[ ] {} Buy milk (Medium)", id));

    let out = run_mis_ok(tmp.path(), &["todo", "done", &id]);
    assert_eq!(out.trim(), format!("{} done", id));
    let out = run_mis_ok(tmp.path(), &["todo", "list"]);
    assert!(out.starts_with("[x]"));

    // todos do not show up as tasks
    let out = run_mis_ok(tmp.path(), &["list"]);
    assert_eq!(out, "");
}
