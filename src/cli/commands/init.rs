use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;

/// Handle the `init` command
///
/// Writes the configuration file with its defaults (timezone, daily
/// requirement, missing-IN estimate, punch file). An existing file is kept
/// unless `--force` is passed.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init { force } = &cli.command {
        let path = cli
            .config
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(Config::config_file);

        let existed = path.exists();
        let cfg = Config::init_at(&path, *force)?;

        if existed && !*force {
            info(format!(
                "Configuration already present at {} (use --force to overwrite)",
                path.display()
            ));
        } else {
            success(format!("Config file: {}", path.display()));
        }

        info(format!("Timezone   : {}", cfg.timezone));
        info(format!("Daily      : {}", cfg.daily_required));
        info(format!("Punch file : {}", cfg.punch_file));
    }
    Ok(())
}
