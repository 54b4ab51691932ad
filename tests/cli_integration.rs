//! Integration tests for the `ck` CLI.
//!
//! Each test points `ck` at a temp data directory, runs it as a subprocess,
//! and checks stdout and/or the stored JSON files.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Get the path to the built `ck` binary.
fn ck_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("ck");
    path
}

/// Run `ck` against `dir`, returning (stdout, stderr, success). Stdin is closed
/// so confirmations cannot be answered interactively.
fn run_ck(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(ck_bin())
        .args(args)
        .arg("--data-dir")
        .arg(dir)
        .env_remove("CHECKLISTS_DIR")
        .stdin(Stdio::null())
        .output()
        .expect("failed to run ck");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

/// Run `ck` expecting success, return stdout.
fn run_ck_ok(dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, success) = run_ck(dir, args);
    if !success {
        panic!(
            "ck {:?} failed:\nstdout: {}\nstderr: {}",
            args, stdout, stderr
        );
    }
    stdout
}

fn stored_lists(dir: &Path) -> serde_json::Value {
    let raw = fs::read_to_string(dir.join("lists.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn seed(dir: &Path, lists: &str) {
    fs::write(dir.join("lists.json"), lists).unwrap();
}

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

#[test]
fn test_show_fresh_directory() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_ck_ok(tmp.path(), &["show"]);
    assert!(out.contains("List 1 of 1"));
    assert!(out.contains("(empty)"));
    // Reading never writes
    assert!(!tmp.path().join("lists.json").exists());
}

#[test]
fn test_show_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    seed(
        tmp.path(),
        r#"[[{"text":"eggs","completed":false},{"text":"bread","completed":true}]]"#,
    );
    let out = run_ck_ok(tmp.path(), &["show", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["list"], 1);
    assert_eq!(parsed["items"][1]["text"], "bread");
    assert_eq!(parsed["items"][1]["completed"], true);
    assert_eq!(parsed["muted"], false);
}

#[test]
fn test_malformed_store_reads_as_empty() {
    let tmp = tempfile::TempDir::new().unwrap();
    seed(tmp.path(), "this is not json");
    let out = run_ck_ok(tmp.path(), &["show"]);
    assert!(out.contains("(empty)"));
}

#[test]
fn test_lists_summary() {
    let tmp = tempfile::TempDir::new().unwrap();
    seed(
        tmp.path(),
        r#"[[{"text":"a","completed":true}],[{"text":"b","completed":false},{"text":"c","completed":false}]]"#,
    );
    let out = run_ck_ok(tmp.path(), &["lists"]);
    assert!(out.contains("1 items, 1 done"));
    assert!(out.contains("2 items, 0 done"));
}

#[test]
fn test_missing_list_is_an_error() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (_, stderr, success) = run_ck(tmp.path(), &["show", "--list", "3"]);
    assert!(!success);
    assert!(stderr.contains("no list 3"));
}

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

#[test]
fn test_add_joins_words_and_persists() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_ck_ok(tmp.path(), &["add", "buy", "oat", "milk"]);
    assert!(out.contains("1. [ ] buy oat milk"));
    assert_eq!(
        stored_lists(tmp.path()),
        serde_json::json!([[{"text": "buy oat milk", "completed": false}]])
    );
}

#[test]
fn test_add_to_full_list_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    for i in 0..15 {
        run_ck_ok(tmp.path(), &["add", &format!("item {i}")]);
    }
    let (_, stderr, success) = run_ck(tmp.path(), &["add", "overflow"]);
    assert!(!success);
    assert!(stderr.contains("list is full"));
    assert_eq!(stored_lists(tmp.path())[0].as_array().unwrap().len(), 15);
}

#[test]
fn test_toggle_twice_restores() {
    let tmp = tempfile::TempDir::new().unwrap();
    run_ck_ok(tmp.path(), &["add", "walk dog"]);
    let out = run_ck_ok(tmp.path(), &["toggle", "1"]);
    assert!(out.contains("[x] walk dog"));
    let out = run_ck_ok(tmp.path(), &["toggle", "1"]);
    assert!(out.contains("[ ] walk dog"));
}

#[test]
fn test_toggle_missing_item_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (_, stderr, success) = run_ck(tmp.path(), &["toggle", "4"]);
    assert!(!success);
    assert!(stderr.contains("no such item"));
}

#[test]
fn test_clear_needs_confirmation() {
    let tmp = tempfile::TempDir::new().unwrap();
    run_ck_ok(tmp.path(), &["add", "a"]);

    // Non-interactive without --yes declines
    let (_, stderr, success) = run_ck(tmp.path(), &["clear"]);
    assert!(success);
    assert!(stderr.contains("delete ALL todos"));
    assert!(stderr.contains("cancelled"));
    assert_eq!(stored_lists(tmp.path())[0].as_array().unwrap().len(), 1);

    run_ck_ok(tmp.path(), &["clear", "--yes"]);
    assert_eq!(stored_lists(tmp.path()), serde_json::json!([[]]));
}

#[test]
fn test_clear_done_keeps_open_items() {
    let tmp = tempfile::TempDir::new().unwrap();
    seed(
        tmp.path(),
        r#"[[{"text":"x","completed":false},{"text":"y","completed":true},{"text":"z","completed":true}]]"#,
    );
    let (_, stderr, _) = run_ck(tmp.path(), &["clear-done"]);
    assert!(stderr.contains("delete 2 completed todo(s)"));

    run_ck_ok(tmp.path(), &["clear-done", "-y"]);
    assert_eq!(
        stored_lists(tmp.path()),
        serde_json::json!([[{"text": "x", "completed": false}]])
    );
}

#[test]
fn test_new_from_first_list_drops_later_lists() {
    let tmp = tempfile::TempDir::new().unwrap();
    seed(
        tmp.path(),
        r#"[[{"text":"A","completed":false}],[{"text":"B","completed":false}],[{"text":"C","completed":false}]]"#,
    );
    let out = run_ck_ok(tmp.path(), &["new", "--list", "1"]);
    assert!(out.contains("List 2 of 2"));
    assert_eq!(
        stored_lists(tmp.path()),
        serde_json::json!([[{"text": "A", "completed": false}], []])
    );
}

#[test]
fn test_add_to_second_list() {
    let tmp = tempfile::TempDir::new().unwrap();
    run_ck_ok(tmp.path(), &["new"]);
    run_ck_ok(tmp.path(), &["add", "-l", "2", "second"]);
    let lists = stored_lists(tmp.path());
    assert_eq!(lists[0], serde_json::json!([]));
    assert_eq!(lists[1][0]["text"], "second");
}

#[test]
fn test_mute_persists() {
    let tmp = tempfile::TempDir::new().unwrap();
    assert_eq!(run_ck_ok(tmp.path(), &["mute"]).trim(), "unmuted");
    assert_eq!(run_ck_ok(tmp.path(), &["mute", "on"]).trim(), "muted");
    assert_eq!(
        fs::read_to_string(tmp.path().join("muted.json")).unwrap(),
        "true"
    );
    assert_eq!(run_ck_ok(tmp.path(), &["mute", "toggle"]).trim(), "unmuted");
    let out = run_ck_ok(tmp.path(), &["mute", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["muted"], false);
}

#[test]
fn test_bad_config_is_reported() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(tmp.path().join("config.toml"), "[sound\n").unwrap();
    let (_, stderr, success) = run_ck(tmp.path(), &["show"]);
    assert!(!success);
    assert!(stderr.contains("config.toml"));
}

#[test]
fn test_changes_visible_to_later_show() {
    let tmp = tempfile::TempDir::new().unwrap();
    run_ck_ok(tmp.path(), &["add", "water", "plants"]);
    run_ck_ok(tmp.path(), &["add", "call", "mum"]);
    run_ck_ok(tmp.path(), &["toggle", "2"]);

    let out = run_ck_ok(tmp.path(), &["show"]);
    assert_eq!(
        out,
        "List 1 of 1  (2/15)\n  1. [ ] water plants\n  2. [x] call mum\n"
    );
}
