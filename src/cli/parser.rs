use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for swipetally
/// CLI application to turn swipe punches into worked hours
#[derive(Parser)]
#[command(
    name = "swipetally",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn IN/OUT swipe punches into worked hours, balances and completion projections",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Punch file to read (JSON), overrides `punch_file` from the configuration
    #[arg(global = true, long = "file", value_name = "FILE")]
    pub file: Option<String>,

    /// Freeze the clock at an RFC 3339 instant (e.g. 2025-03-03T13:30:00+05:30)
    #[arg(global = true, long = "now", value_name = "INSTANT")]
    pub now: Option<String>,

    /// Output format
    #[arg(global = true, long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Worked time for one day
    Day {
        /// Date to report (YYYY-MM-DD), defaults to today
        date: Option<String>,
    },

    /// Worked time for the Monday–Sunday week containing DATE
    Week {
        /// Any date inside the week (YYYY-MM-DD), defaults to today
        date: Option<String>,

        #[arg(long, value_name = "START:END", help = "Explicit range instead of the calendar week")]
        range: Option<String>,
    },

    /// Worked time for the calendar month containing DATE
    Month {
        /// Any date inside the month (YYYY-MM-DD), defaults to today
        date: Option<String>,

        #[arg(long, value_name = "START:END", help = "Explicit range instead of the calendar month")]
        range: Option<String>,
    },

    /// Project when the required time will be reached
    Project {
        #[arg(long, help = "Time worked so far (e.g. 5h, 5h30m, 5.5)")]
        actual: String,

        #[arg(long, help = "Required time, defaults to the configured daily requirement")]
        required: Option<String>,

        #[arg(long, help = "Currently clocked in")]
        working: bool,

        #[arg(
            long = "last-in",
            value_name = "TIME",
            help = "Last clock-in (HH:MM today, or an RFC 3339 instant)"
        )]
        last_in: Option<String>,
    },
}
