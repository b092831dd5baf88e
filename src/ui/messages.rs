use ansi_term::{Colour, Style};
use std::fmt;

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Blue.bold().paint(ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Green.bold().paint(ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Yellow.bold().paint(ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", Colour::Red.bold().paint(ICON_ERR), msg);
}

/// Section header, e.g. `=== 2025-03-03 (day) ===`
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}", Style::new().bold().paint(format!("=== {} ===", msg)));
}

/// `label` left-aligned in a fixed column, then the value.
pub fn field<T: fmt::Display>(label: &str, value: T) {
    println!("{:<12}{}", format!("{label}:"), value);
}
