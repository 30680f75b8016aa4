/// Open-Meteo Historical Weather API client.
///
/// Retrieves archived daily rainfall totals for one location over a date
/// window, for severity classification and the factual-rainfall artifact.
///
/// API documentation: https://open-meteo.com/en/docs/historical-weather-api

use chrono::NaiveDate;
use serde::Deserialize;

use crate::alert::severity::classify_rainfall;
use crate::locations::Location;
use crate::model::{DailyRainfall, IngestError};

/// Default API host; overridable through configuration.
pub const ARCHIVE_BASE_URL: &str = "https://archive-api.open-meteo.com";

// ============================================================================
// API Response Structures
// ============================================================================

/// Archive response, reduced to the daily block this service requests.
#[derive(Debug, Deserialize)]
pub struct ArchiveResponse {
    pub daily: DailySeries,
}

/// Parallel per-day arrays. `time[i]` and `rain_sum[i]` describe the same
/// day; the API reports days with no measurement as nulls.
#[derive(Debug, Deserialize)]
pub struct DailySeries {
    pub time: Vec<String>,
    pub rain_sum: Vec<Option<f64>>,
}

// ============================================================================
// API Client Functions
// ============================================================================

/// Builds the archive request URL for one location and date window.
///
/// Requests exactly the `rain_sum` daily variable in the local timezone,
/// so the returned days align with Indonesian calendar dates.
pub fn build_archive_url(
    base_url: &str,
    latitude: f64,
    longitude: f64,
    start_date: NaiveDate,
    end_date: NaiveDate,
    timezone: &str,
) -> String {
    format!(
        "{}/v1/archive?latitude={}&longitude={}&start_date={}&end_date={}&daily=rain_sum&timezone={}",
        base_url.trim_end_matches('/'),
        latitude,
        longitude,
        start_date.format("%Y-%m-%d"),
        end_date.format("%Y-%m-%d"),
        timezone,
    )
}

/// Fetches the daily rainfall series for one location.
///
/// The client's timeout bounds the call; there is no retry. Any failure
/// here is recovered at the per-location boundary by the caller.
pub fn fetch_daily_series(
    client: &reqwest::blocking::Client,
    base_url: &str,
    location: &Location,
    start_date: NaiveDate,
    end_date: NaiveDate,
    timezone: &str,
) -> Result<Vec<(String, f64)>, IngestError> {
    let url = build_archive_url(
        base_url,
        location.latitude,
        location.longitude,
        start_date,
        end_date,
        timezone,
    );

    let response = client
        .get(&url)
        .header("Accept", "application/json")
        .send()
        .map_err(|e| IngestError::Request(e.to_string()))?;

    if !response.status().is_success() {
        return Err(IngestError::HttpStatus(response.status().as_u16()));
    }

    let body = response.text().map_err(|e| IngestError::Request(e.to_string()))?;
    parse_archive_response(&body)
}

/// Parses an archive response body into (date, rainfall_mm) pairs.
///
/// Null rainfall values are coerced to 0.0 here, before classification,
/// so downstream code never sees a missing total. A length mismatch
/// between the two arrays poisons the whole location — positional zip
/// with unequal lengths would silently misattribute days.
pub fn parse_archive_response(body: &str) -> Result<Vec<(String, f64)>, IngestError> {
    let parsed: ArchiveResponse =
        serde_json::from_str(body).map_err(|e| IngestError::Parse(e.to_string()))?;

    let daily = parsed.daily;
    if daily.time.len() != daily.rain_sum.len() {
        return Err(IngestError::SeriesMismatch {
            dates: daily.time.len(),
            rains: daily.rain_sum.len(),
        });
    }

    Ok(daily
        .time
        .into_iter()
        .zip(daily.rain_sum)
        .map(|(date, rain)| (date, rain.unwrap_or(0.0)))
        .collect())
}

/// Classifies a parsed series into one row per (date, location) pair.
pub fn daily_rows(location: &Location, series: Vec<(String, f64)>) -> Vec<DailyRainfall> {
    series
        .into_iter()
        .map(|(date, rainfall_mm)| DailyRainfall {
            date,
            location: location.name.to_string(),
            latitude: location.latitude,
            longitude: location.longitude,
            rainfall_mm,
            severity: classify_rainfall(rainfall_mm),
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
