/// Run configuration for the precipitation chart service.
///
/// A chart job names one geographic point, one calendar year, and where the
/// rendered SVG goes. Defaults cover New York City for 2024; a TOML file
/// can replace them for a run. Every run is still exactly one point and
/// one year.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::logging::LogLevel;

/// Everything one chart run needs to know.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartJob {
    /// WGS84 latitude of the point to chart.
    pub latitude: f64,
    /// WGS84 longitude of the point to chart.
    pub longitude: f64,
    /// Calendar year covered by the archive query.
    pub year: i32,
    /// IANA timezone passed to the archive API, e.g. "America/New_York".
    pub timezone: String,
    /// Path the rendered SVG is written to.
    pub output: String,
    /// Minimum console log level: "debug", "info", "warn", or "error".
    pub log_level: String,
    /// Optional log file; console logging is always on.
    pub log_file: Option<String>,
}

impl Default for ChartJob {
    fn default() -> Self {
        Self {
            latitude: 40.71,
            longitude: -74.01,
            year: 2024,
            timezone: String::from("America/New_York"),
            output: String::from("precipitation.svg"),
            log_level: String::from("info"),
            log_file: None,
        }
    }
}

/// Errors that can arise when loading a chart job from disk.
#[derive(Debug)]
pub enum ConfigError {
    Io(String, std::io::Error),
    Toml(String, toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "Failed to read config {}: {}", path, e),
            ConfigError::Toml(path, e) => write!(f, "Failed to parse config {}: {}", path, e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl ChartJob {
    /// Load a job from a TOML file, or the built-in defaults when no path
    /// is given.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        match path {
            None => Ok(Self::default()),
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .map_err(|e| ConfigError::Io(path.to_string(), e))?;
                toml::from_str(&raw).map_err(|e| ConfigError::Toml(path.to_string(), e))
            }
        }
    }

    /// First day of the configured year, as the API's `start_date` string.
    pub fn start_date(&self) -> String {
        // Jan 1 exists for every year chrono can represent
        NaiveDate::from_ymd_opt(self.year, 1, 1)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| format!("{:04}-01-01", self.year))
    }

    /// Minimum log level for the run. Unrecognized names fall back to Info.
    pub fn min_level(&self) -> LogLevel {
        match self.log_level.to_lowercase().as_str() {
            "debug" => LogLevel::Debug,
            "warn" | "warning" => LogLevel::Warning,
            "error" => LogLevel::Error,
            _ => LogLevel::Info,
        }
    }

    /// Last day of the configured year, as the API's `end_date` string.
    pub fn end_date(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, 12, 31)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| format!("{:04}-12-31", self.year))
    }
}
