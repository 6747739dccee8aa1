//! Basic CLI E2E tests.
//!
//! Each test runs the built binary against its own temporary HOME, so the
//! config file and workout store start empty.

use std::process::Command;

use tempfile::TempDir;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(home: &TempDir, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_walkr"))
        .args(args)
        .env("HOME", home.path())
        .env_remove("WALKR_ENV")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_json(home: &TempDir, args: &[&str]) -> serde_json::Value {
    let (stdout, stderr, code) = run_cli(home, args);
    assert_eq!(code, 0, "{args:?} failed: {stderr}");
    serde_json::from_str(&stdout).expect("Failed to parse JSON output")
}

fn saved_workout(home: &TempDir) -> String {
    let workout = run_json(
        home,
        &["generate", "--goal", "Cardio", "--time", "10", "--json", "--save"],
    );
    workout["id"].as_str().unwrap().to_string()
}

#[test]
fn test_generate_text() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(&home, &["generate", "--time", "10"]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("Your WALKR Workout (10 min, Bodyweight)"));
    assert!(stdout.contains("45 sec work, 15 sec rest between exercises"));
    assert!(stdout.contains("#Walkr #WorkoutChallenge #FitnessMotivation"));
}

#[test]
fn test_generate_json() {
    let home = TempDir::new().unwrap();
    let workout = run_json(
        &home,
        &["generate", "--goal", "Strength", "--time", "30", "--equipment", "Dumbbells", "--json"],
    );
    assert_eq!(workout["exercises"].as_array().unwrap().len(), 10);
    assert_eq!(workout["structure"]["kind"], "rounds");
}

#[test]
fn test_generate_rejects_bad_time() {
    let home = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(&home, &["generate", "--time", "0"]);
    assert_eq!(code, 1);
    assert!(stderr.starts_with("error:"));
}

#[test]
fn test_catalog_filter() {
    let home = TempDir::new().unwrap();
    let rows = run_json(&home, &["catalog", "--goal", "HIIT", "--json"]);
    let rows = rows.as_array().unwrap();
    assert!(!rows.is_empty());
    assert!(rows.iter().all(|r| r["goal"] == "HIIT"));
}

#[test]
fn test_workout_save_show_delete() {
    let home = TempDir::new().unwrap();
    let id = saved_workout(&home);

    let listed = run_json(&home, &["workout", "list", "--json"]);
    assert_eq!(listed[0]["workout"]["id"], id.as_str());

    let shown = run_json(&home, &["workout", "show", &id, "--json"]);
    assert_eq!(shown["workout"]["duration"], 10);

    let (_, _, code) = run_cli(&home, &["workout", "delete", &id]);
    assert_eq!(code, 0);
    let (_, _, code) = run_cli(&home, &["workout", "show", &id]);
    assert_ne!(code, 0);
}

#[test]
fn test_share_links() {
    let home = TempDir::new().unwrap();
    let id = saved_workout(&home);

    let (stdout, _, code) = run_cli(&home, &["share", &id]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), format!("https://walkr.fit/workout/{id}"));

    let action = run_json(&home, &["share", &id, "--platform", "twitter", "--json"]);
    assert_eq!(action["action"], "open");
    assert!(action["url"]
        .as_str()
        .unwrap()
        .starts_with("https://twitter.com/intent/tweet?text="));

    let action = run_json(&home, &["share", &id, "--platform", "tiktok", "--json"]);
    assert_eq!(action["action"], "copy_text");
}

#[test]
fn test_session_lifecycle() {
    let home = TempDir::new().unwrap();
    let id = saved_workout(&home);

    let started = run_json(&home, &["session", "start", &id]);
    assert_eq!(started["type"], "SessionStarted");
    assert_eq!(started["exercise_count"], 5);

    let paused = run_json(&home, &["session", "pause"]);
    assert_eq!(paused["type"], "SessionPaused");

    let skipped = run_json(&home, &["session", "skip"]);
    assert_eq!(skipped["type"], "PhaseChanged");
    assert_eq!(skipped["phase"], "rest");
    assert_eq!(skipped["skipped"], true);

    let status = run_json(&home, &["session", "status"]);
    assert_eq!(status["type"], "StateSnapshot");
    assert_eq!(status["is_paused"], true);
    assert_eq!(status["time_remaining_secs"], 15);

    let (_, _, code) = run_cli(&home, &["session", "exit"]);
    assert_eq!(code, 0);
    let (_, stderr, code) = run_cli(&home, &["session", "status"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("no session in progress"));
}

#[test]
fn test_config_set_get() {
    let home = TempDir::new().unwrap();
    let (_, _, code) = run_cli(&home, &["config", "set", "defaults.time", "20"]);
    assert_eq!(code, 0);
    let (stdout, _, _) = run_cli(&home, &["config", "get", "defaults.time"]);
    assert_eq!(stdout.trim(), "20");

    let (_, _, code) = run_cli(&home, &["config", "set", "defaults.nope", "1"]);
    assert_ne!(code, 0);

    let (stdout, _, code) = run_cli(&home, &["generate"]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("Your WALKR Workout (20 min, Bodyweight)"));

    let (_, _, code) = run_cli(&home, &["config", "reset"]);
    assert_eq!(code, 0);
    let (stdout, _, _) = run_cli(&home, &["config", "get", "defaults.time"]);
    assert_eq!(stdout.trim(), "15");
}

#[test]
fn test_completions() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(&home, &["completions", "bash"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("walkr"));
}
