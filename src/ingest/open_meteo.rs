/// Open-Meteo Archive API Client
///
/// Retrieves daily precipitation totals for a geographic point and date
/// range from the Open-Meteo historical weather archive.
///
/// API documentation: https://open-meteo.com/en/docs/historical-weather-api
/// Endpoint: https://archive-api.open-meteo.com/v1/archive

use serde::Deserialize;

use crate::config::ChartJob;
use crate::logging::{self, DataSource};
use crate::model::ArchiveError;

const ARCHIVE_BASE_URL: &str = "https://archive-api.open-meteo.com";

// ============================================================================
// Archive API Response Structures
// ============================================================================

/// Top-level archive response. Only the `daily` block is consumed; the
/// echo of the query coordinates is kept for log context.
#[derive(Debug, Deserialize)]
pub struct ArchiveResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub daily: DailyPrecipitation,
}

/// Index-aligned daily series: `time[i]` is the date of
/// `precipitation_sum[i]`. A JSON `null` (no observation for that day)
/// deserializes to `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct DailyPrecipitation {
    pub time: Vec<String>,
    pub precipitation_sum: Vec<Option<f64>>,
}

impl DailyPrecipitation {
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

// ============================================================================
// API Client Functions
// ============================================================================

/// Build the archive query URL for a chart job.
///
/// Requests one daily variable (`precipitation_sum`) in inches over the
/// job's calendar year, evaluated in the job's local timezone.
pub fn build_archive_url(job: &ChartJob) -> String {
    format!(
        "{}/v1/archive?latitude={}&longitude={}&start_date={}&end_date={}&daily=precipitation_sum&precipitation_unit=inch&timezone={}",
        ARCHIVE_BASE_URL,
        job.latitude,
        job.longitude,
        job.start_date(),
        job.end_date(),
        job.timezone.replace('/', "%2F"),
    )
}

/// Fetch the daily precipitation series for a chart job.
///
/// # Parameters
/// - `client`: HTTP client
/// - `job`: location, year, and timezone of the query
///
/// # Returns
/// The index-aligned daily series for the job's year.
pub fn fetch_daily_precipitation(
    client: &reqwest::blocking::Client,
    job: &ChartJob,
) -> Result<DailyPrecipitation, ArchiveError> {
    let url = build_archive_url(job);

    let response = client
        .get(&url)
        .header("Accept", "application/json")
        .send()
        .map_err(|e| ArchiveError::RequestError(e.to_string()))?;

    if !response.status().is_success() {
        return Err(ArchiveError::HttpError(response.status().as_u16()));
    }

    let body = response
        .text()
        .map_err(|e| ArchiveError::RequestError(e.to_string()))?;

    let archive = parse_archive_response(&body)?;

    // the archive snaps the query point to its model grid
    logging::debug(
        DataSource::Archive,
        &format!(
            "Archive resolved grid point ({}, {})",
            archive.latitude, archive.longitude
        ),
    );

    Ok(archive.daily)
}

/// Parse an archive response body.
///
/// Kept separate from the fetch so canned payloads can exercise it.
pub fn parse_archive_response(body: &str) -> Result<ArchiveResponse, ArchiveError> {
    serde_json::from_str(body).map_err(|e| ArchiveError::ParseError(e.to_string()))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_BODY: &str = r#"{
        "latitude": 40.710335,
        "longitude": -74.01,
        "generationtime_ms": 0.25,
        "utc_offset_seconds": -18000,
        "timezone": "America/New_York",
        "timezone_abbreviation": "EST",
        "elevation": 32.0,
        "daily_units": {"time": "iso8601", "precipitation_sum": "inch"},
        "daily": {
            "time": ["2024-01-01", "2024-01-02", "2024-01-03"],
            "precipitation_sum": [0.0, 0.35, null]
        }
    }"#;

    #[test]
    fn test_parse_archive_response() {
        let archive = parse_archive_response(SAMPLE_BODY).unwrap();
        assert_eq!(archive.latitude, 40.710335);

        let daily = archive.daily;
        assert_eq!(daily.time.len(), 3);
        assert_eq!(daily.precipitation_sum.len(), 3);
        assert_eq!(daily.time[0], "2024-01-01");
        assert_eq!(daily.precipitation_sum[0], Some(0.0));
        assert_eq!(daily.precipitation_sum[1], Some(0.35));
        assert_eq!(daily.precipitation_sum[2], None); // missing observation
    }

    #[test]
    fn test_parse_rejects_missing_daily_block() {
        let result = parse_archive_response(r#"{"latitude": 40.71, "longitude": -74.01}"#);
        assert!(matches!(result, Err(ArchiveError::ParseError(_))));
    }

    #[test]
    fn test_parse_rejects_non_json() {
        let result = parse_archive_response("<html>rate limited</html>");
        assert!(matches!(result, Err(ArchiveError::ParseError(_))));
    }

    #[test]
    fn test_build_archive_url() {
        let job = crate::config::ChartJob::default();
        let url = build_archive_url(&job);

        assert!(url.starts_with("https://archive-api.open-meteo.com/v1/archive?"));
        assert!(url.contains("latitude=40.71"));
        assert!(url.contains("longitude=-74.01"));
        assert!(url.contains("start_date=2024-01-01"));
        assert!(url.contains("end_date=2024-12-31"));
        assert!(url.contains("daily=precipitation_sum"));
        assert!(url.contains("precipitation_unit=inch"));
        assert!(url.contains("timezone=America%2FNew_York"));
    }
}
