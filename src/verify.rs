//! Data Source Verification Module
//!
//! Probes the configured registries against the live sources to determine
//! which locations are reachable and yielding rows. Run this after editing
//! a registry or when a scrape run comes back suspiciously empty — it tells
//! layout changes apart from individual dead locations.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::ingest::{archive, hourly};
use crate::ingest::hourly::HourlyPageSource;
use crate::locations::{Location, CITY_REGISTRY, JABAR_REGISTRY};

// ============================================================================
// Verification Results
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationReport {
    pub timestamp: String,
    pub hourly_results: Vec<SourceVerification>,
    pub archive_results: Vec<SourceVerification>,
    pub summary: VerificationSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationSummary {
    pub hourly_total: usize,
    pub hourly_working: usize,
    pub hourly_failed: usize,
    pub archive_total: usize,
    pub archive_working: usize,
    pub archive_failed: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceVerification {
    pub location: String,
    pub status: VerificationStatus,
    /// Rows the probe extracted; zero with `PartialSuccess` means the
    /// source answered but the payload held nothing usable.
    pub row_count: usize,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum VerificationStatus {
    Success,
    PartialSuccess,
    Failed,
}

// ============================================================================
// Per-location probes
// ============================================================================

/// Probes one city's hourly forecast page and counts extracted rows.
pub fn verify_city(
    source: &mut dyn HourlyPageSource,
    city: &Location,
    year: i32,
    fallback_date: NaiveDate,
) -> SourceVerification {
    let outcome = city
        .slug
        .ok_or_else(|| crate::model::IngestError::Parse("no forecast page slug in registry".to_string()))
        .and_then(|slug| source.fetch_page(slug))
        .and_then(|page| hourly::parse_hourly_table(&page, city, year, fallback_date));

    match outcome {
        Ok(rows) => SourceVerification {
            location: city.name.to_string(),
            status: if rows.is_empty() {
                VerificationStatus::PartialSuccess
            } else {
                VerificationStatus::Success
            },
            row_count: rows.len(),
            error_message: None,
        },
        Err(e) => SourceVerification {
            location: city.name.to_string(),
            status: VerificationStatus::Failed,
            row_count: 0,
            error_message: Some(e.to_string()),
        },
    }
}

/// Probes the archive API for one location over a short window.
pub fn verify_archive_location(
    client: &reqwest::blocking::Client,
    base_url: &str,
    location: &Location,
    start_date: NaiveDate,
    end_date: NaiveDate,
    timezone: &str,
) -> SourceVerification {
    match archive::fetch_daily_series(client, base_url, location, start_date, end_date, timezone) {
        Ok(series) => SourceVerification {
            location: location.name.to_string(),
            status: if series.is_empty() {
                VerificationStatus::PartialSuccess
            } else {
                VerificationStatus::Success
            },
            row_count: series.len(),
            error_message: None,
        },
        Err(e) => SourceVerification {
            location: location.name.to_string(),
            status: VerificationStatus::Failed,
            row_count: 0,
            error_message: Some(e.to_string()),
        },
    }
}

// ============================================================================
// Full registry sweep
// ============================================================================

/// Verifies every registry entry against the live sources.
///
/// Slow — one request per location across both registries. Intended for
/// manual runs and the ignored integration tests, not CI.
pub fn verify_all(config: &Config, today: NaiveDate) -> Result<VerificationReport, Box<dyn std::error::Error>> {
    let mut page_source = hourly::HttpPageSource::new(
        &config.hourly.base_url,
        std::time::Duration::from_secs(config.hourly.timeout_secs),
    )?;
    let client = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(config.archive.timeout_secs))
        .build()?;

    let year = chrono::Datelike::year(&today);
    let hourly_results: Vec<_> = CITY_REGISTRY
        .iter()
        .map(|city| verify_city(&mut page_source, city, year, today))
        .collect();

    // A 7-day probe window keeps the sweep light; the real run uses the
    // configured window.
    let start = today - chrono::Duration::days(7);
    let archive_results: Vec<_> = JABAR_REGISTRY
        .iter()
        .map(|loc| {
            verify_archive_location(
                &client,
                &config.archive.base_url,
                loc,
                start,
                today,
                &config.archive.timezone,
            )
        })
        .collect();

    let summary = summarize(&hourly_results, &archive_results);
    Ok(VerificationReport {
        timestamp: Utc::now().to_rfc3339(),
        hourly_results,
        archive_results,
        summary,
    })
}

fn summarize(
    hourly_results: &[SourceVerification],
    archive_results: &[SourceVerification],
) -> VerificationSummary {
    let working = |results: &[SourceVerification]| {
        results
            .iter()
            .filter(|r| r.status != VerificationStatus::Failed)
            .count()
    };
    VerificationSummary {
        hourly_total: hourly_results.len(),
        hourly_working: working(hourly_results),
        hourly_failed: hourly_results.len() - working(hourly_results),
        archive_total: archive_results.len(),
        archive_working: working(archive_results),
        archive_failed: archive_results.len() - working(archive_results),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::IngestError;

    struct DeadSource;

    impl HourlyPageSource for DeadSource {
        fn fetch_page(&mut self, _slug: &str) -> Result<String, IngestError> {
            Err(IngestError::Request("connection refused".to_string()))
        }
    }

    #[test]
    fn test_failed_probe_carries_error_message() {
        let city = Location {
            name: "Jakarta",
            slug: Some("indonesia/jakarta"),
            latitude: -6.2,
            longitude: 106.8,
        };
        let result = verify_city(
            &mut DeadSource,
            &city,
            2025,
            NaiveDate::from_ymd_opt(2025, 5, 5).unwrap(),
        );
        assert_eq!(result.status, VerificationStatus::Failed);
        assert_eq!(result.row_count, 0);
        assert!(result.error_message.unwrap().contains("connection refused"));
    }

    #[test]
    fn test_summary_counts_partial_success_as_working() {
        let ok = SourceVerification {
            location: "A".to_string(),
            status: VerificationStatus::Success,
            row_count: 48,
            error_message: None,
        };
        let partial = SourceVerification {
            location: "B".to_string(),
            status: VerificationStatus::PartialSuccess,
            row_count: 0,
            error_message: None,
        };
        let failed = SourceVerification {
            location: "C".to_string(),
            status: VerificationStatus::Failed,
            row_count: 0,
            error_message: Some("HTTP error: 503".to_string()),
        };

        let summary = summarize(&[ok, partial], &[failed]);
        assert_eq!(summary.hourly_working, 2);
        assert_eq!(summary.hourly_failed, 0);
        assert_eq!(summary.archive_working, 0);
        assert_eq!(summary.archive_failed, 1);
    }
}
