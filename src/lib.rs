//! swipetally library root.
//! Exposes the accounting engine (`core`), its data model, the collaborator
//! traits and the CLI used by `main.rs`.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod sources;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

pub use crate::core::logic::Core;
pub use crate::core::policy::Policy;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Day { .. } | Commands::Week { .. } | Commands::Month { .. } => {
            cli::commands::report::handle(cli, cfg)
        }
        Commands::Project { .. } => cli::commands::project::handle(cli, cfg),
    }
}

/// Diagnostics go to stderr, filtered by `RUST_LOG` (default: warnings).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_logging();

    // `init` must work before any configuration exists
    if let Commands::Init { .. } = cli.command {
        return dispatch(&cli, &Config::default());
    }

    let cfg = match &cli.config {
        Some(path) => Config::load_from(&utils::path::expand_tilde(path))?,
        None => Config::load()?,
    };

    dispatch(&cli, &cfg)
}
