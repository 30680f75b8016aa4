/// Run configuration for both pipelines.
///
/// Everything has a default matching the production sources, so both
/// binaries run with no configuration at all. An optional TOML file
/// (`hujanmon.toml`, or the path in `HUJANMON_CONFIG`) overrides
/// individual values — useful for pointing the clients at fixtures or
/// slowing the archive loop down when the API rate-limits.

use serde::Deserialize;

use crate::ingest::archive::ARCHIVE_BASE_URL;
use crate::logging::{self, DataSource};

/// Default config file path, relative to the working directory.
pub const CONFIG_PATH: &str = "hujanmon.toml";

/// Environment variable overriding the config file path.
pub const CONFIG_PATH_ENV: &str = "HUJANMON_CONFIG";

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub hourly: HourlyConfig,
    pub archive: ArchiveConfig,
}

/// Pipeline A: hourly forecast scraper.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct HourlyConfig {
    pub base_url: String,
    /// Bound on each page fetch, in seconds.
    pub timeout_secs: u64,
    pub output_path: String,
}

impl Default for HourlyConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.timeanddate.com".to_string(),
            timeout_secs: 10,
            output_path: "Data_Cuaca.xlsx".to_string(),
        }
    }
}

/// Pipeline B: archival rainfall fetcher.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ArchiveConfig {
    pub base_url: String,
    /// Bound on each API call, in seconds.
    pub timeout_secs: u64,
    /// How far back from the run date the window starts.
    pub window_days: i64,
    /// Pause between consecutive API calls.
    pub request_delay_ms: u64,
    pub timezone: String,
    pub output_path: String,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            base_url: ARCHIVE_BASE_URL.to_string(),
            timeout_secs: 30,
            window_days: 30,
            request_delay_ms: 200,
            timezone: "Asia/Jakarta".to_string(),
            output_path: "data_hujan_faktual_jabar.xlsx".to_string(),
        }
    }
}

/// Loads configuration, falling back to defaults.
///
/// A missing file is normal and silent; a file that exists but fails to
/// parse is logged and ignored rather than aborting the run.
pub fn load() -> Config {
    dotenv::dotenv().ok();

    let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| CONFIG_PATH.to_string());
    let Ok(contents) = std::fs::read_to_string(&path) else {
        return Config::default();
    };

    match toml::from_str(&contents) {
        Ok(config) => config,
        Err(e) => {
            logging::warn(
                DataSource::System,
                None,
                &format!("Ignoring unparseable config file {}: {}", path, e),
            );
            Config::default()
        }
    }
}
