pub mod config;
pub mod init;
pub mod project;
pub mod report;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::sources::file::JsonFileSource;
use crate::sources::{Clock, SystemClock};
use crate::utils::path::expand_tilde;
use crate::utils::time::parse_instant;
use chrono::DateTime;
use chrono_tz::Tz;

/// The single instant a command works with: `--now` when given, the wall
/// clock otherwise, always viewed in the configured zone.
pub fn resolve_now(cli: &Cli, tz: Tz) -> AppResult<DateTime<Tz>> {
    match &cli.now {
        Some(s) => parse_instant(s, &tz),
        None => Ok(SystemClock { tz }.now()),
    }
}

/// Punch file from `--file`, falling back to the configured one.
pub fn open_source(cli: &Cli, cfg: &Config, tz: Tz) -> AppResult<JsonFileSource> {
    let path = cli.file.as_deref().unwrap_or(&cfg.punch_file);
    JsonFileSource::open(&expand_tilde(path), tz)
}
