/// Pipeline A: hourly rain-chance scraper.
///
/// Walks the 48-city registry, scrapes each hourly forecast page, and
/// writes the accumulated table to the hourly workbook. No flags; the
/// optional config file adjusts URLs, timeout, and output path. Absence
/// of the output file after a run signals failure to downstream
/// consumers — an empty table is never persisted.

use std::path::Path;
use std::time::Duration;

use chrono::{Datelike, Local};

use hujanmon_service::config;
use hujanmon_service::export;
use hujanmon_service::ingest::hourly::HttpPageSource;
use hujanmon_service::locations::CITY_REGISTRY;
use hujanmon_service::logging::{self, DataSource, LogLevel};
use hujanmon_service::pipeline;

fn main() {
    logging::init_logger(LogLevel::Info, None, false);
    let config = config::load();

    println!("Scraping hourly forecasts for {} cities...", CITY_REGISTRY.len());

    // One page session for the whole run; dropped (and with it the
    // connection pool) on every exit path out of main.
    let mut source = match HttpPageSource::new(
        &config.hourly.base_url,
        Duration::from_secs(config.hourly.timeout_secs),
    ) {
        Ok(source) => source,
        Err(e) => {
            logging::error(DataSource::System, None, &format!("Could not start page session: {}", e));
            return;
        }
    };

    let today = Local::now().date_naive();
    let table = pipeline::run_hourly(&mut source, CITY_REGISTRY, today.year(), today);

    if table.is_empty() {
        logging::error(
            DataSource::System,
            None,
            "No rows extracted from any city; output file not written",
        );
        return;
    }

    match export::write_hourly_workbook(&table, Path::new(&config.hourly.output_path)) {
        Ok(()) => println!(
            "Done: {} rows written to {}",
            table.len(),
            config.hourly.output_path
        ),
        Err(e) => logging::error(
            DataSource::Export,
            None,
            &format!("Failed to write {}: {}", config.hourly.output_path, e),
        ),
    }
}
