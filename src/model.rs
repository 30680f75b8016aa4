/// Core data types for the Indonesian rainfall monitoring service.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no logic and no I/O — only types and the constants that
/// identify them.

// ---------------------------------------------------------------------------
// Data type tags
// ---------------------------------------------------------------------------

/// Fixed `Tipe_Data` tag stamped on every hourly observation row.
///
/// The hourly forecast page covers a rolling 48-hour window, and the
/// dashboard filters on this label, so it must match byte for byte.
pub const HOURLY_DATA_TYPE: &str = "Per Jam (48 Jam)";

// ---------------------------------------------------------------------------
// Row types
// ---------------------------------------------------------------------------

/// One extracted hour of forecast data for one city.
///
/// Corresponds to a single qualifying data row (more than 8 value cells)
/// of the hourly forecast table, stamped with the date-header context
/// that governed it and the city metadata from the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyObservation {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Always [`HOURLY_DATA_TYPE`]; carried per row because the output
    /// schema stores it per row.
    pub data_type: &'static str,
    /// Canonical calendar date, "YYYY-MM-DD".
    pub date: String,
    /// Hour label, exactly 5 characters, "HH:MM".
    pub time: String,
    /// Free-text condition label from the first value cell (or its icon
    /// title when the cell text is empty).
    pub description: String,
    /// Forecast rain chance. 0 both when the page reports 0% and when no
    /// percentage could be extracted — see `ingest::hourly::extract_percentage`.
    pub rain_chance_percent: u8,
}

/// One archived day of rainfall for one location.
///
/// Produced by zipping the parallel `daily.time` / `daily.rain_sum` arrays
/// of an Open-Meteo archive response. Null rainfall is coerced to 0.0
/// before classification, so `rainfall_mm` is always a real value.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRainfall {
    /// Calendar date as returned by the API, "YYYY-MM-DD".
    pub date: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub rainfall_mm: f64,
    pub severity: Severity,
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Rainfall severity levels, in ascending order of severity.
///
/// Derived from `rainfall_mm` via the fixed thresholds in
/// `alert::severity::classify_rainfall`. The same thresholds apply wherever
/// this column is re-derived downstream — they are a domain constant, not a
/// display heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Aman,
    Waspada,
    Bahaya,
    BahayaEkstrem,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Aman => write!(f, "Aman"),
            Severity::Waspada => write!(f, "Waspada"),
            Severity::Bahaya => write!(f, "Bahaya"),
            Severity::BahayaEkstrem => write!(f, "Bahaya Ekstrem"),
        }
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when fetching or parsing either data source.
///
/// All of these are recovered at the per-location boundary: the location
/// contributes zero rows and the run continues.
#[derive(Debug, PartialEq)]
pub enum IngestError {
    /// Non-2xx HTTP response.
    HttpStatus(u16),
    /// Transport-level failure (connect error, timeout, body read).
    Request(String),
    /// The hourly page loaded but did not contain the forecast table.
    TableNotFound,
    /// The response body could not be deserialized or interpreted.
    Parse(String),
    /// The archive response's date and rainfall arrays differ in length.
    SeriesMismatch { dates: usize, rains: usize },
}

impl std::fmt::Display for IngestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IngestError::HttpStatus(code) => write!(f, "HTTP error: {}", code),
            IngestError::Request(msg) => write!(f, "Request failed: {}", msg),
            IngestError::TableNotFound => write!(f, "Hourly forecast table not found in page"),
            IngestError::Parse(msg) => write!(f, "Parse error: {}", msg),
            IngestError::SeriesMismatch { dates, rains } => {
                write!(f, "Series length mismatch: {} dates vs {} rain values", dates, rains)
            }
        }
    }
}

impl std::error::Error for IngestError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_display_uses_indonesian_labels() {
        assert_eq!(Severity::Aman.to_string(), "Aman");
        assert_eq!(Severity::Waspada.to_string(), "Waspada");
        assert_eq!(Severity::Bahaya.to_string(), "Bahaya");
        assert_eq!(Severity::BahayaEkstrem.to_string(), "Bahaya Ekstrem");
    }

    #[test]
    fn test_severity_ordering_is_ascending() {
        assert!(Severity::Aman < Severity::Waspada);
        assert!(Severity::Waspada < Severity::Bahaya);
        assert!(Severity::Bahaya < Severity::BahayaEkstrem);
    }

    #[test]
    fn test_ingest_error_display_includes_context() {
        let err = IngestError::SeriesMismatch { dates: 31, rains: 30 };
        assert_eq!(
            err.to_string(),
            "Series length mismatch: 31 dates vs 30 rain values"
        );
        assert_eq!(IngestError::HttpStatus(503).to_string(), "HTTP error: 503");
    }
}
