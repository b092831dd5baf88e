//! ANSI color helper utilities for terminal output.

use crate::models::StatusMode;
use ansi_term::Colour;

/// Balance color:
/// \>0 → green
/// \<0 → red
/// 0 → white
pub fn color_for_balance(seconds: i64) -> Colour {
    if seconds > 0 {
        Colour::Green
    } else if seconds < 0 {
        Colour::Red
    } else {
        Colour::White
    }
}

pub fn color_for_status(mode: StatusMode) -> Colour {
    match mode {
        StatusMode::Excess => Colour::Purple,
        StatusMode::Complete => Colour::Green,
        StatusMode::Incomplete => Colour::Yellow,
    }
}

/// Estimated sessions are greyed out, observed ones keep IN green / OUT red.
pub fn colorize_in_out(value: &str, is_in: bool, estimated: bool) -> String {
    if estimated {
        return Colour::Fixed(8).paint(value).to_string();
    }

    if is_in {
        Colour::Green.paint(value).to_string()
    } else {
        Colour::Red.paint(value).to_string()
    }
}
