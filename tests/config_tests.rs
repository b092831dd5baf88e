use chrono::Duration;
use std::fs;
use std::path::PathBuf;
use swipetally::Policy;
use swipetally::config::Config;
use swipetally::errors::AppError;
use swipetally::utils::time::parse_duration;

mod common;
use common::temp_path;

#[test]
fn test_default_config_matches_default_policy() {
    let policy = Config::default().policy().unwrap();

    assert_eq!(policy.tz, chrono_tz::Asia::Kolkata);
    assert_eq!(policy.daily_required, Duration::hours(8));
    assert_eq!(policy.missing_in_estimate, Duration::hours(2));
    assert_eq!(policy.daily_required_seconds(), 8 * 3600);
    assert_eq!(policy, Policy::default());
}

#[test]
fn test_missing_file_yields_defaults() {
    let path = PathBuf::from(temp_path("cfg_missing", "conf"));

    let cfg = Config::load_from(&path).unwrap();

    assert_eq!(cfg, Config::default());
    assert!(!path.exists());
}

#[test]
fn test_init_then_load_round_trips() {
    let path = PathBuf::from(temp_path("cfg_init", "conf"));

    let written = Config::init_at(&path, false).unwrap();
    let loaded = Config::load_from(&path).unwrap();

    assert_eq!(written, loaded);
}

#[test]
fn test_init_keeps_existing_file_unless_forced() {
    let path = PathBuf::from(temp_path("cfg_force", "conf"));
    fs::write(&path, "timezone: UTC\n").unwrap();

    let kept = Config::init_at(&path, false).unwrap();
    assert_eq!(kept.timezone, "UTC");

    let reset = Config::init_at(&path, true).unwrap();
    assert_eq!(reset.timezone, "Asia/Kolkata");
    assert!(fs::read_to_string(&path).unwrap().contains("Asia/Kolkata"));
}

#[test]
fn test_partial_file_fills_in_defaults() {
    let path = PathBuf::from(temp_path("cfg_partial", "conf"));
    fs::write(&path, "daily_required: 7h30m\n").unwrap();

    let cfg = Config::load_from(&path).unwrap();
    let policy = cfg.policy().unwrap();

    assert_eq!(cfg.timezone, "Asia/Kolkata");
    assert_eq!(cfg.missing_in_estimate, "2h");
    assert_eq!(policy.daily_required, Duration::minutes(450));
}

#[test]
fn test_invalid_timezone_is_a_config_error() {
    let path = PathBuf::from(temp_path("cfg_bad_tz", "conf"));
    fs::write(&path, "timezone: Mars/Olympus\n").unwrap();

    let err = Config::load_from(&path).expect_err("unknown zone must fail");

    assert!(matches!(err, AppError::Config(_)));
    assert!(err.to_string().contains("Mars/Olympus"));
}

#[test]
fn test_invalid_duration_is_rejected() {
    let cfg = Config {
        missing_in_estimate: "two hours".to_string(),
        ..Config::default()
    };

    assert!(matches!(cfg.policy(), Err(AppError::InvalidDuration(_))));
    assert!(cfg.validate().is_err());
}

#[test]
fn test_duration_notation() {
    assert_eq!(parse_duration("8h").unwrap(), Duration::hours(8));
    assert_eq!(parse_duration("7h30m").unwrap(), Duration::minutes(450));
    assert_eq!(parse_duration("45m").unwrap(), Duration::minutes(45));
    assert_eq!(
        parse_duration("1h15m30s").unwrap(),
        Duration::seconds(4530)
    );
    assert_eq!(parse_duration("7.5").unwrap(), Duration::minutes(450));
    assert_eq!(parse_duration(" 2H ").unwrap(), Duration::hours(2));

    assert!(parse_duration("").is_err());
    assert!(parse_duration("8x").is_err());
    assert!(parse_duration("30").is_ok());
    assert!(parse_duration("1h30").is_err());
    assert!(parse_duration("-1").is_err());

    // out of range: an error, never a panic
    assert!(parse_duration("1e15").is_err());
    assert!(parse_duration("1e300").is_err());
    assert!(parse_duration("99999999999999999h").is_err());
    assert!(parse_duration("9223372036854775807s").is_err());
    assert!(parse_duration("99999999999999999999h").is_err());
}
