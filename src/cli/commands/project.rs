use crate::cli::commands::resolve_now;
use crate::cli::parser::{Cli, Commands, OutputFormat};
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{field, header};
use crate::utils::time::{parse_duration, parse_instant, parse_time};
use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Handle the `project` command
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Project {
        actual,
        required,
        working,
        last_in,
    } = &cli.command
    {
        let policy = cfg.policy()?;
        let now = resolve_now(cli, policy.tz)?;

        let actual = parse_duration(actual)?;
        let required = match required {
            Some(r) => parse_duration(r)?,
            None => policy.daily_required,
        };
        let last_in = last_in
            .as_deref()
            .map(|s| resolve_last_in(s, &now))
            .transpose()?;

        let projection = Core::project_achievement(
            actual.num_seconds(),
            required.num_seconds(),
            *working,
            last_in,
            &now,
        );

        match cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&projection)?),
            OutputFormat::Text => {
                header("Projection");
                field("Remaining", format!("{:.2}h", projection.hours_remaining));
                field("Achievable", if projection.is_achievable { "yes" } else { "no" });
                match projection.will_achieve_at {
                    Some(at) => field("Reached at", at.format("%Y-%m-%d %H:%M:%S")),
                    None if projection.hours_remaining == 0.0 => {
                        field("Reached at", "already reached")
                    }
                    None => field("Reached at", "-- (not clocked in)"),
                }
            }
        }
    }

    Ok(())
}

/// `HH:MM[:SS]` is a time on `now`'s civil day; anything else must be RFC 3339.
fn resolve_last_in(s: &str, now: &DateTime<Tz>) -> AppResult<DateTime<Utc>> {
    if let Some(t) = parse_time(s) {
        let naive = now.date_naive().and_time(t);
        return now
            .timezone()
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(|| AppError::InvalidTime(s.to_string()));
    }

    parse_instant(s, &now.timezone()).map(|dt| dt.with_timezone(&Utc))
}
