//! Formatting utilities used for CLI outputs.

/// Whole seconds → `4h 30m 15s`.
pub fn secs2readable(secs: i64) -> String {
    let abs_s = secs.abs();
    let sign = if secs < 0 { "-" } else { "" };
    format!(
        "{}{}h {:02}m {:02}s",
        sign,
        abs_s / 3600,
        (abs_s % 3600) / 60,
        abs_s % 60
    )
}

/// Seconds already rounded to the minute → `8h 29m`.
pub fn hm(secs: i64) -> String {
    let mins = secs / 60;
    format!("{}h {}m", mins / 60, mins % 60)
}

pub fn percent(ratio: f64) -> String {
    format!("{:.0}%", ratio * 100.0)
}
