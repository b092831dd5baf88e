use crate::core::policy::Policy;
use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_duration;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// IANA zone every civil day and weekday is computed in.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Required work per weekday, e.g. "8h" or "7h30m".
    #[serde(default = "default_daily_required")]
    pub daily_required: String,
    /// Assumed length of the session before a day's first OUT when its IN is missing.
    #[serde(default = "default_missing_in_estimate")]
    pub missing_in_estimate: String,
    /// Punch file read when --file is not given.
    #[serde(default = "default_punch_file")]
    pub punch_file: String,
}

fn default_timezone() -> String {
    "Asia/Kolkata".to_string()
}
fn default_daily_required() -> String {
    "8h".to_string()
}
fn default_missing_in_estimate() -> String {
    "2h".to_string()
}
fn default_punch_file() -> String {
    Config::config_dir()
        .join("punches.json")
        .to_string_lossy()
        .to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            daily_required: default_daily_required(),
            missing_in_estimate: default_missing_in_estimate(),
            punch_file: default_punch_file(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("swipetally")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".swipetally")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("swipetally.conf")
    }

    /// Load configuration from `path`, or return defaults if it does not exist
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Write the defaults to `path`, creating parent directories.
    /// An existing file is left untouched unless `force` is set.
    pub fn init_at(path: &Path, force: bool) -> AppResult<Self> {
        let config = Config::default();

        if path.exists() && !force {
            return Config::load_from(path);
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&config)?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;

        Ok(config)
    }

    pub fn tz(&self) -> AppResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| AppError::InvalidTimezone(self.timezone.clone()))
    }

    /// Engine policy derived from this configuration.
    pub fn policy(&self) -> AppResult<Policy> {
        let daily_required = parse_duration(&self.daily_required)?;
        let missing_in_estimate = parse_duration(&self.missing_in_estimate)?;

        Ok(Policy {
            tz: self.tz()?,
            daily_required,
            missing_in_estimate,
        })
    }

    pub fn validate(&self) -> AppResult<()> {
        self.policy()
            .map(|_| ())
            .map_err(|e| AppError::Config(e.to_string()))
    }
}
