use predicates::str::contains;
use std::fs;

mod common;
use common::{regular_day_json, swt, temp_path, write_punch_file};

/// Runs against a config path that does not exist, so defaults apply.
fn swt_with(name: &str, punch_file: &str) -> assert_cmd::Command {
    let mut cmd = swt();
    cmd.args(["--config", &temp_path(name, "conf"), "--file", punch_file]);
    cmd
}

#[test]
fn test_day_report_lists_sessions_and_total() {
    let file = write_punch_file(
        "cli_day",
        &serde_json::json!({ "swipes": regular_day_json("2025-03-03") }),
    );

    swt_with("cli_day", &file)
        .args(["--now", "2025-03-03T20:00:00+05:30", "day", "2025-03-03"])
        .assert()
        .success()
        .stdout(contains("=== 2025-03-03 (day) ==="))
        .stdout(contains("4h 30m 15s"))
        .stdout(contains("8h 30m"))
        .stdout(contains("OVERDRIVE"));
}

#[test]
fn test_day_report_as_json() {
    let file = write_punch_file(
        "cli_day_json",
        &serde_json::json!({ "swipes": regular_day_json("2025-03-03") }),
    );

    swt_with("cli_day_json", &file)
        .args([
            "--now",
            "2025-03-03T20:00:00+05:30",
            "--format",
            "json",
            "day",
            "2025-03-03",
        ])
        .assert()
        .success()
        .stdout(contains("\"exact_seconds\": 30615"))
        .stdout(contains("\"total_actual_seconds\": 30600"))
        .stdout(contains("\"status_mode\": \"excess\""));
}

#[test]
fn test_week_report_uses_upstream_total() {
    let file = write_punch_file(
        "cli_week",
        &serde_json::json!({
            "periodTotals": [
                { "start": "2025-03-03", "end": "2025-03-09", "totalMinutes": 1800 }
            ],
            "attendance": [
                { "start": "2025-03-03", "end": "2025-03-09", "P": 4, "L": 1 }
            ]
        }),
    );

    swt_with("cli_week", &file)
        .args([
            "--now",
            "2025-03-12T10:00:00+05:30",
            "--format",
            "json",
            "week",
            "2025-03-05",
        ])
        .assert()
        .success()
        .stdout(contains("\"actual_seconds\": 108000"))
        .stdout(contains("\"required_seconds\": 115200"))
        .stdout(contains("\"issues\": []"));
}

#[test]
fn test_week_report_warns_about_missing_total() {
    let file = write_punch_file("cli_week_missing", &serde_json::json!({}));

    swt_with("cli_week_missing", &file)
        .args(["--now", "2025-03-12T10:00:00+05:30", "week", "2025-03-05"])
        .assert()
        .success()
        .stdout(contains("period total unavailable"));
}

#[test]
fn test_project_reports_completion_time() {
    let file = write_punch_file("cli_project", &serde_json::json!({}));

    swt_with("cli_project", &file)
        .args([
            "--now",
            "2025-03-03T15:00:00+05:30",
            "project",
            "--actual",
            "5h",
            "--required",
            "8h",
            "--working",
            "--last-in",
            "14:00",
        ])
        .assert()
        .success()
        .stdout(contains("3.00h"))
        .stdout(contains("2025-03-03 17:00:00"));
}

#[test]
fn test_project_as_json_when_not_working() {
    let file = write_punch_file("cli_project_json", &serde_json::json!({}));

    swt_with("cli_project_json", &file)
        .args([
            "--now",
            "2025-03-03T15:00:00+05:30",
            "--format",
            "json",
            "project",
            "--actual",
            "5h",
        ])
        .assert()
        .success()
        .stdout(contains("\"is_achievable\": false"))
        .stdout(contains("\"will_achieve_at\": null"));
}

#[test]
fn test_missing_punch_file_fails() {
    swt_with("cli_missing", "/nonexistent/swipetally/punches.json")
        .args(["--now", "2025-03-03T15:00:00+05:30", "day", "2025-03-03"])
        .assert()
        .failure()
        .stderr(contains("Error:"));
}

#[test]
fn test_invalid_date_is_rejected() {
    let file = write_punch_file("cli_bad_date", &serde_json::json!({}));

    swt_with("cli_bad_date", &file)
        .args(["day", "2025-13-40"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_reversed_range_is_rejected() {
    let file = write_punch_file("cli_bad_range", &serde_json::json!({}));

    swt_with("cli_bad_range", &file)
        .args(["month", "--range", "2025-03-31:2025-03-01"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn test_init_writes_default_config() {
    let conf = temp_path("cli_init", "conf");

    swt()
        .args(["--config", &conf, "init"])
        .assert()
        .success()
        .stdout(contains("Config file:"));

    let content = fs::read_to_string(&conf).expect("config written");
    assert!(content.contains("timezone: Asia/Kolkata"));
    assert!(content.contains("daily_required: 8h"));

    // a second run keeps the existing file
    swt()
        .args(["--config", &conf, "init"])
        .assert()
        .success()
        .stdout(contains("already present"));
}

#[test]
fn test_config_print_shows_loaded_values() {
    let conf = temp_path("cli_print", "conf");
    fs::write(&conf, "timezone: UTC\ndaily_required: 7h30m\n").expect("write config");

    swt()
        .args(["--config", &conf, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("timezone: UTC"))
        .stdout(contains("daily_required: 7h30m"))
        .stdout(contains("missing_in_estimate: 2h"));
}

#[test]
fn test_invalid_config_is_reported() {
    let conf = temp_path("cli_bad_conf", "conf");
    fs::write(&conf, "timezone: Mars/Olympus\n").expect("write config");

    swt()
        .args(["--config", &conf, "config", "--print"])
        .assert()
        .failure()
        .stderr(contains("Unknown timezone"));
}

#[test]
fn test_estimated_in_is_greyed_out() {
    let file = write_punch_file(
        "cli_estimated",
        &serde_json::json!({
            "swipes": [ common::raw("2025-03-03", "10:00:00", swipetally::models::Direction::Out) ]
        }),
    );

    swt_with("cli_estimated", &file)
        .args(["--now", "2025-03-03T20:00:00+05:30", "day", "2025-03-03"])
        .assert()
        .success()
        // 256-colour grey (index 8)
        .stdout(contains("\x1b[38;5;8m08:00:00"))
        .stdout(contains("(estimated IN)"))
        .stdout(contains("2h 00m 00s"));
}
