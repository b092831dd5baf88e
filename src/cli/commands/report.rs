use crate::cli::commands::{open_source, resolve_now};
use crate::cli::parser::{Cli, Commands, OutputFormat};
use crate::config::Config;
use crate::core::tracker::{Report, Tracker};
use crate::errors::AppResult;
use crate::models::{DailyResult, DataIssue, Period, PeriodKind, StatusMode};
use crate::sources::FixedClock;
use crate::ui::messages::{field, header, warning};
use crate::utils::colors::{color_for_balance, color_for_status, colorize_in_out};
use crate::utils::date::{parse_date, parse_range};
use crate::utils::formatting::{hm, percent, secs2readable};
use chrono::NaiveDate;
use chrono_tz::Tz;

/// Handle `day`, `week` and `month`
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let (kind, date, range) = match &cli.command {
        Commands::Day { date } => (PeriodKind::Day, date.as_deref(), None),
        Commands::Week { date, range } => (PeriodKind::Week, date.as_deref(), range.as_deref()),
        Commands::Month { date, range } => (PeriodKind::Month, date.as_deref(), range.as_deref()),
        _ => return Ok(()),
    };

    let policy = cfg.policy()?;
    let now = resolve_now(cli, policy.tz)?;
    let source = open_source(cli, cfg, policy.tz)?;

    let tracker = Tracker::new(source, FixedClock { at: now }, policy);
    let period = resolve_period(kind, date, range, tracker.today())?;
    let report = tracker.report(period)?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_report(&report, &tracker.policy().tz),
    }

    Ok(())
}

fn resolve_period(
    kind: PeriodKind,
    date: Option<&str>,
    range: Option<&str>,
    today: NaiveDate,
) -> AppResult<Period> {
    if let Some(r) = range {
        let (start, end) = parse_range(r)?;
        return Period::range(kind, start, end);
    }

    let d = match date {
        Some(s) => parse_date(s)?,
        None => today,
    };
    Ok(Period::containing(kind, d))
}

fn print_report(report: &Report, tz: &Tz) {
    let stats = &report.stats;

    let title = if stats.period_start == stats.period_end {
        format!("{} ({})", stats.period_start, stats.kind.as_str())
    } else {
        format!(
            "{} → {} ({})",
            stats.period_start,
            stats.period_end,
            stats.kind.as_str()
        )
    };
    header(title);

    if let Some(daily) = &report.daily {
        print_sessions(daily, tz, stats.kind == PeriodKind::Day);
    }

    field("Worked", hm(stats.actual_seconds));
    if stats.live_seconds > 0 && stats.kind != PeriodKind::Day {
        field("  today", hm(stats.live_seconds));
    }
    if stats.required_seconds != stats.base_required_seconds {
        field(
            "Required",
            format!(
                "{} (of {})",
                hm(stats.required_seconds),
                hm(stats.base_required_seconds)
            ),
        );
    } else {
        field("Required", hm(stats.required_seconds));
    }

    let balance = stats.actual_seconds - stats.required_seconds;
    let balance_text = if balance >= 0 {
        format!("+{}", hm(balance))
    } else {
        format!("-{}", hm(-balance))
    };
    field("Balance", color_for_balance(balance).paint(balance_text));

    let status = match stats.status_mode {
        StatusMode::Excess => format!("OVERDRIVE +{}", hm(stats.excess_seconds)),
        StatusMode::Complete => "COMPLETE".to_string(),
        StatusMode::Incomplete => format!("{} REMAINING", hm(stats.shortfall_seconds)),
    };
    field(
        "Status",
        format!(
            "{} ({})",
            color_for_status(stats.status_mode).paint(status),
            percent(stats.completion_ratio)
        ),
    );

    if let Some(p) = &report.projection {
        let text = match (&p.will_achieve_at, p.is_achievable) {
            (Some(at), _) => format!("target reached at {}", at.format("%Y-%m-%d %H:%M:%S")),
            (None, true) => "target already reached".to_string(),
            (None, false) => format!("not clocked in, {:.2}h to go", p.hours_remaining),
        };
        field("Projection", text);
    }

    for issue in &stats.issues {
        warning(match issue {
            DataIssue::PeriodTotalUnavailable(e) => format!("period total unavailable: {e}"),
            DataIssue::AttendanceStatusUnavailable(e) => {
                format!("attendance status unavailable: {e}")
            }
            DataIssue::LiveDayUnavailable(e) => format!("today's swipes unavailable: {e}"),
        });
    }
}

fn print_sessions(daily: &DailyResult, tz: &Tz, full: bool) {
    if full {
        field("Swipes", daily.total_swipes);
    }

    if daily.sessions.is_empty() {
        println!("No sessions for {}.", daily.date);
    } else {
        println!("Sessions ({}):", daily.date);
        for (i, s) in daily.sessions.iter().enumerate() {
            let in_s = s.in_time.with_timezone(tz).format("%H:%M:%S").to_string();
            let out_s = s.out_time.with_timezone(tz).format("%H:%M:%S").to_string();
            println!(
                "  {:>2}. {} → {}  {}{}",
                i + 1,
                colorize_in_out(&in_s, true, s.estimated),
                colorize_in_out(&out_s, false, false),
                secs2readable(s.duration_seconds),
                if s.estimated { "  (estimated IN)" } else { "" }
            );
        }
    }

    if daily.is_currently_working
        && let Some(since) = daily.open_session_start
    {
        field(
            "Working",
            format!("since {}", since.with_timezone(tz).format("%H:%M:%S")),
        );
    }

    if daily.dropped_swipes > 0 {
        warning(format!("{} malformed swipe(s) ignored", daily.dropped_swipes));
    }
}
