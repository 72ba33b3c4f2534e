//! User settings at ~/.config/sis2ics/config.toml

use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};
use serde::Deserialize;

use super::calendar_config::{CalendarConfig, Flavor};
use crate::error::{Sis2IcsError, Sis2IcsResult};

/// DKB Handball-Bundesliga team schedule.
pub const DEFAULT_URL: &str = "http://sis-handball.de/web/Mannschaft/default.aspx?view=Mannschaft&Liga=001514000000000000000000000000000001003&clear=1";
pub const DEFAULT_TITLE: &str = "DKB HBL";

fn default_url() -> String {
    DEFAULT_URL.to_string()
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("output.ics")
}

fn default_download_name() -> String {
    "downloaded.ics".to_string()
}

fn default_listen() -> String {
    "127.0.0.1:4096".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Raw, unvalidated settings. Call [`Settings::calendar_config`] to get
/// something the pipeline accepts.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    #[serde(default = "default_url")]
    pub url: String,

    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default)]
    pub flavor: Flavor,

    /// Where `export` writes the calendar.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Filename suggested to clients by `serve`.
    #[serde(default = "default_download_name")]
    pub download_name: String,

    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            url: default_url(),
            title: default_title(),
            flavor: Flavor::default(),
            output: default_output(),
            download_name: default_download_name(),
            listen: default_listen(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Settings {
    pub fn config_path() -> Sis2IcsResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| {
                Sis2IcsError::Configuration("Could not determine config directory".into())
            })?
            .join("sis2ics");

        Ok(config_dir.join("config.toml"))
    }

    /// Load settings from `path`, or from the default location when `None`.
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Sis2IcsResult<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path()?,
        };

        tracing::debug!(path = %path.display(), "loading settings");

        Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .build()
            .map_err(|e| Sis2IcsError::Configuration(e.to_string()))?
            .try_deserialize()
            .map_err(|e| Sis2IcsError::Configuration(e.to_string()))
    }

    /// Parse settings from TOML text.
    pub fn from_toml(contents: &str) -> Sis2IcsResult<Self> {
        Config::builder()
            .add_source(File::from_str(contents, FileFormat::Toml))
            .build()
            .map_err(|e| Sis2IcsError::Configuration(e.to_string()))?
            .try_deserialize()
            .map_err(|e| Sis2IcsError::Configuration(e.to_string()))
    }

    /// Validate url, title and flavor into a [`CalendarConfig`].
    pub fn calendar_config(&self) -> Sis2IcsResult<CalendarConfig> {
        CalendarConfig::new(&self.url, &self.title, self.flavor)
    }

    /// Write a config file with every option commented out.
    /// Returns false if a file already exists at `path`.
    pub fn create_default_config(path: &Path) -> Sis2IcsResult<bool> {
        if path.exists() {
            return Ok(false);
        }

        let defaults = Settings::default();
        let contents = format!(
            "\
# sis2ics configuration

# Team schedule page on sis-handball.de:
# url = \"{}\"

# Shown in every event summary:
# title = \"{}\"

# \"strict\" (RFC 5545) or \"legacy\" (historic output, byte for byte):
# flavor = \"strict\"

# File written by `sis2ics export`:
# output = \"{}\"

# Filename offered by `sis2ics serve`:
# download_name = \"{}\"
# listen = \"{}\"

# HTTP timeout when fetching the schedule:
# timeout_secs = {}
",
            defaults.url,
            defaults.title,
            defaults.output.display(),
            defaults.download_name,
            defaults.listen,
            defaults.timeout_secs,
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Sis2IcsError::Configuration(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| Sis2IcsError::Configuration(format!("Could not write config file: {e}")))?;

        Ok(true)
    }
}
