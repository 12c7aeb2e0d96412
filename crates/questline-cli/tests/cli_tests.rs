use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const RESPONSE: &str = r#"{
  "modules": [
    {
      "title": "Linux Fundamentals",
      "description": "Shells, permissions and processes.",
      "badgeName": "Shell Sentinel",
      "tasks": [
        {
          "title": "Harden SSH",
          "description": "Disable password logins.",
          "xp": 60,
          "youtubeReferences": [
            {"title": "SSH hardening walkthrough", "url": "https://www.youtube.com/watch?v=fV1ZgmQ2xvE"}
          ]
        }
      ]
    },
    {
      "title": "Network Scanning",
      "description": "Find open ports responsibly.",
      "badgeName": "Port Prowler",
      "tasks": [
        {"title": "Scan a lab network", "description": "Use nmap against a VM.", "xp": 90},
        {"title": "Write a report", "description": "Summarize findings.", "xp": 50}
      ]
    }
  ]
}"#;

/// Helper function to create a temporary directory with a saved response
fn create_cli_test_environment() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    fs::write(temp_dir.path().join("response.json"), RESPONSE)
        .expect("Failed to write response");
    temp_dir
}

/// Helper function to create a Command bound to the test database in plain
/// text mode
fn questline_cmd(dir: &Path, today: &str) -> Command {
    let mut cmd = Command::cargo_bin("questline").expect("Failed to find questline binary");
    cmd.arg("--no-color")
        .args(["--database-file", dir.join("cli_test.db").to_str().unwrap()])
        .args(["--time-zone", "UTC", "--today", today]);
    cmd
}

fn start(dir: &Path) {
    questline_cmd(dir, "2024-01-10")
        .args([
            "start",
            "--name",
            "Kai",
            "--interest",
            "Cybersecurity",
            "--competency",
            "intermediate",
            "--goal",
            "Secure a home network and document the setup.",
            "--response",
            dir.join("response.json").to_str().unwrap(),
        ])
        .assert()
        .success();
}

/// Reads the generated module and task IDs from the dashboard output
fn task_ids(dir: &Path) -> Vec<(String, String)> {
    let output = questline_cmd(dir, "2024-01-10")
        .arg("show")
        .output()
        .expect("Failed to run show");
    let stdout = String::from_utf8(output.stdout).unwrap();

    let mut ids = Vec::new();
    let mut module_id = String::new();
    for line in stdout.lines() {
        if line.starts_with("### ") {
            let start = line.rfind('(').unwrap() + 1;
            module_id = line[start..line.len() - 1].to_string();
        } else if let Some(start) = line.find('`') {
            let end = line[start + 1..].find('`').unwrap() + start + 1;
            ids.push((module_id.clone(), line[start + 1..end].to_string()));
        }
    }
    ids
}

#[test]
fn test_cli_show_without_path() {
    let temp_dir = create_cli_test_environment();

    questline_cmd(temp_dir.path(), "2024-01-10")
        .assert()
        .success()
        .stdout(predicate::str::contains("No learning path yet"));
}

#[test]
fn test_cli_start_prints_dashboard() {
    let temp_dir = create_cli_test_environment();

    questline_cmd(temp_dir.path(), "2024-01-10")
        .args([
            "start",
            "--name",
            "Kai",
            "--interest",
            "Cybersecurity",
            "--goal",
            "Secure a home network and document the setup.",
            "--response",
            temp_dir.path().join("response.json").to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "# Secure a home network and document the setup.",
        ))
        .stdout(predicate::str::contains("Welcome back, Kai!"))
        .stdout(predicate::str::contains("- XP: 0 / 200 (0%)"))
        .stdout(predicate::str::contains("- Badge: Shell Sentinel (locked)"))
        .stdout(predicate::str::contains("Streak").not());
}

#[test]
fn test_cli_start_rejects_bad_competency() {
    let temp_dir = create_cli_test_environment();

    questline_cmd(temp_dir.path(), "2024-01-10")
        .args([
            "start",
            "--name",
            "Kai",
            "--interest",
            "Cybersecurity",
            "--competency",
            "wizard",
            "--goal",
            "Anything",
            "--response",
            temp_dir.path().join("response.json").to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid competency level: wizard"));
}

#[test]
fn test_cli_start_rejects_malformed_response() {
    let temp_dir = create_cli_test_environment();
    let bad = temp_dir.path().join("bad.json");
    fs::write(&bad, r#"{"sections": []}"#).unwrap();

    questline_cmd(temp_dir.path(), "2024-01-10")
        .args([
            "start",
            "--name",
            "Kai",
            "--interest",
            "Cybersecurity",
            "--goal",
            "Anything",
            "--response",
            bad.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'modules' array is missing"));
}

#[test]
fn test_cli_toggle_builds_streak_across_days() {
    let temp_dir = create_cli_test_environment();
    let dir = temp_dir.path();
    start(dir);
    let ids = task_ids(dir);
    assert_eq!(ids.len(), 3);

    questline_cmd(dir, "2024-01-10")
        .args(["toggle", &ids[0].0, &ids[0].1])
        .assert()
        .success()
        .stdout(predicate::str::contains("as completed."))
        .stdout(predicate::str::contains("Streak started: 1"))
        .stdout(predicate::str::contains("Badge earned: Shell Sentinel"));

    questline_cmd(dir, "2024-01-11")
        .args(["toggle", &ids[1].0, &ids[1].1])
        .assert()
        .success()
        .stdout(predicate::str::contains("Streak extended: 2"))
        .stdout(predicate::str::contains("Badge earned").not());

    questline_cmd(dir, "2024-01-11")
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("- Streak: 2 days"))
        .stdout(predicate::str::contains("- XP: 150 / 200 (75%)"));

    questline_cmd(dir, "2024-01-14")
        .arg("streak")
        .assert()
        .success()
        .stdout(predicate::str::contains("- Current streak: 0"))
        .stdout(predicate::str::contains("- Last completion: 2024-01-11"));
}

#[test]
fn test_cli_task_detail_and_priority() {
    let temp_dir = create_cli_test_environment();
    let dir = temp_dir.path();
    start(dir);
    let ids = task_ids(dir);

    questline_cmd(dir, "2024-01-10")
        .args(["priority", &ids[0].0, &ids[0].1])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success:"))
        .stdout(predicate::str::contains("marked as priority"));

    questline_cmd(dir, "2024-01-10")
        .args(["task", &ids[0].0, &ids[0].1])
        .assert()
        .success()
        .stdout(predicate::str::contains("### Harden SSH"))
        .stdout(predicate::str::contains("- Priority: yes"))
        .stdout(predicate::str::contains("#### Suggested Videos"));
}

#[test]
fn test_cli_unknown_task_fails() {
    let temp_dir = create_cli_test_environment();
    let dir = temp_dir.path();
    start(dir);

    questline_cmd(dir, "2024-01-10")
        .args(["toggle", "mod-42", "task-42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Module with ID mod-42 not found"));
}

#[test]
fn test_cli_reset_discards_path() {
    let temp_dir = create_cli_test_environment();
    let dir = temp_dir.path();
    start(dir);
    let ids = task_ids(dir);

    questline_cmd(dir, "2024-01-10")
        .args(["toggle", &ids[0].0, &ids[0].1])
        .assert()
        .success();

    questline_cmd(dir, "2024-01-10")
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Learning path and streak discarded"));

    questline_cmd(dir, "2024-01-10")
        .arg("streak")
        .assert()
        .success()
        .stdout(predicate::str::contains("- Current streak: 0"))
        .stdout(predicate::str::contains("- Last completion: never"));

    questline_cmd(dir, "2024-01-10")
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("No learning path yet"));
}

#[test]
fn test_cli_goals() {
    let temp_dir = create_cli_test_environment();

    questline_cmd(temp_dir.path(), "2024-01-10")
        .args(["goals", "--interest", "Game Development"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- [x] Game Development"))
        .stdout(predicate::str::contains(
            "Create a 2D platformer game using the Unity engine.",
        ));
}

#[test]
fn test_cli_rejects_unknown_time_zone() {
    let temp_dir = create_cli_test_environment();
    let mut cmd = Command::cargo_bin("questline").unwrap();

    cmd.args([
        "--no-color",
        "--database-file",
        temp_dir.path().join("cli_test.db").to_str().unwrap(),
        "--time-zone",
        "Nowhere/Special",
        "show",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Unknown time zone"));
}
