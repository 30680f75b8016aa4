/// Run-to-completion pipeline loops.
///
/// Both pipelines share one shape: iterate the location registry in
/// order, fetch, parse, classify, and accumulate into a single table
/// owned by the loop. Every per-location failure is caught here, logged,
/// and answered with zero rows for that location — one bad location must
/// never abort the run or disturb rows already accumulated. Only the
/// all-locations-empty case is surfaced, by returning an empty table the
/// binaries refuse to persist.
///
/// The clock is injected (`year`, `fallback_date`, the window bounds) so
/// the loops are deterministic under test.

use std::time::Duration;

use chrono::NaiveDate;

use crate::config::ArchiveConfig;
use crate::ingest::{archive, hourly};
use crate::locations::Location;
use crate::logging::{self, DataSource};
use crate::table::{HourlyTable, RainfallTable};

/// Runs Pipeline A: hourly rain-chance scraping over `cities`.
///
/// `source` is the one page session for the whole run, borrowed for the
/// duration and released by the caller when it drops. `fallback_date`
/// is the date context in force before a page's first header row.
pub fn run_hourly(
    source: &mut dyn hourly::HourlyPageSource,
    cities: &[Location],
    year: i32,
    fallback_date: NaiveDate,
) -> HourlyTable {
    let mut table = HourlyTable::new();
    let mut successful = 0;
    let total = cities.len();

    for (i, city) in cities.iter().enumerate() {
        let Some(slug) = city.slug else {
            logging::warn(
                DataSource::TimeAndDate,
                Some(city.name),
                "no forecast page slug in registry, skipping",
            );
            continue;
        };

        logging::info(
            DataSource::TimeAndDate,
            Some(city.name),
            &format!("[{}/{}] fetching hourly forecast", i + 1, total),
        );

        let page = match source.fetch_page(slug) {
            Ok(page) => page,
            Err(e) => {
                logging::log_ingest_failure(DataSource::TimeAndDate, city.name, "page fetch", &e);
                continue;
            }
        };

        match hourly::parse_hourly_table(&page, city, year, fallback_date) {
            Ok(rows) => {
                logging::info(
                    DataSource::TimeAndDate,
                    Some(city.name),
                    &format!("OK ({} hourly rows)", rows.len()),
                );
                successful += 1;
                table.append(rows);
            }
            Err(e) => {
                logging::log_ingest_failure(DataSource::TimeAndDate, city.name, "table parse", &e);
            }
        }
    }

    logging::log_run_summary(DataSource::TimeAndDate, total, successful, total - successful);
    table
}

/// Runs Pipeline B: archival rainfall fetch over `locations` for the
/// window `[start_date, end_date]`.
pub fn run_archive(
    client: &reqwest::blocking::Client,
    config: &ArchiveConfig,
    locations: &[Location],
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> RainfallTable {
    let mut table = RainfallTable::new();
    let mut successful = 0;
    let total = locations.len();
    let delay = Duration::from_millis(config.request_delay_ms);

    for (i, location) in locations.iter().enumerate() {
        logging::info(
            DataSource::OpenMeteo,
            Some(location.name),
            &format!("[{}/{}] fetching {} day archive", i + 1, total, config.window_days),
        );

        match archive::fetch_daily_series(
            client,
            &config.base_url,
            location,
            start_date,
            end_date,
            &config.timezone,
        ) {
            Ok(series) => {
                let rows = archive::daily_rows(location, series);
                logging::info(
                    DataSource::OpenMeteo,
                    Some(location.name),
                    &format!("OK ({} daily rows)", rows.len()),
                );
                successful += 1;
                table.append(rows);
            }
            Err(e) => {
                logging::log_ingest_failure(
                    DataSource::OpenMeteo,
                    location.name,
                    "archive fetch",
                    &e,
                );
            }
        }

        if !delay.is_zero() && i + 1 < total {
            std::thread::sleep(delay);
        }
    }

    logging::log_run_summary(DataSource::OpenMeteo, total, successful, total - successful);
    table
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
