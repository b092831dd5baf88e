#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Asia::Kolkata;
use chrono_tz::Tz;
use std::env;
use std::fs;
use std::path::PathBuf;
use swipetally::models::{Direction, RawSwipe, SwipeEvent};

pub fn swt() -> Command {
    cargo_bin_cmd!("swipetally")
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

/// Wall-clock time in India on `day`.
pub fn ist(day: &str, time: &str) -> DateTime<Tz> {
    let t = NaiveTime::parse_from_str(time, "%H:%M:%S").expect("valid time");
    Kolkata
        .from_local_datetime(&date(day).and_time(t))
        .single()
        .expect("unambiguous IST time")
}

pub fn utc(day: &str, time: &str) -> DateTime<Utc> {
    ist(day, time).with_timezone(&Utc)
}

pub fn swipe_in(day: &str, time: &str) -> SwipeEvent {
    SwipeEvent::new(utc(day, time), Direction::In)
}

pub fn swipe_out(day: &str, time: &str) -> SwipeEvent {
    SwipeEvent::new(utc(day, time), Direction::Out)
}

/// Upstream record for an IST wall-clock time (stored as offset-less UTC).
pub fn raw(day: &str, time: &str, direction: Direction) -> RawSwipe {
    RawSwipe::new(
        utc(day, time).format("%Y-%m-%dT%H:%M:%S").to_string(),
        direction,
    )
}

/// Create a unique temp path and remove any existing file
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_swipetally.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a punch file for the CLI and return its path
pub fn write_punch_file(name: &str, content: &serde_json::Value) -> String {
    let path = temp_path(name, "json");
    fs::write(&path, serde_json::to_string_pretty(content).expect("serialize"))
        .expect("write punch file");
    path
}

/// The four swipes of a regular day: 09:00–13:00 and 14:00–18:30:15 IST.
pub fn regular_day_json(day: &str) -> serde_json::Value {
    serde_json::json!([
        raw(day, "09:00:00", Direction::In),
        raw(day, "13:00:00", Direction::Out),
        raw(day, "14:00:00", Direction::In),
        raw(day, "18:30:15", Direction::Out),
    ])
}
