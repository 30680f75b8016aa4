/// Pipeline B: archival rainfall fetcher.
///
/// Queries the Open-Meteo archive for the last 30 days of daily rainfall
/// at each West Java point, classifies severity, and writes the factual
/// rainfall workbook. No flags; see the optional config file for the
/// window length, request delay, and output path.

use std::path::Path;
use std::time::Duration;

use chrono::Local;

use hujanmon_service::config;
use hujanmon_service::export;
use hujanmon_service::locations::JABAR_REGISTRY;
use hujanmon_service::logging::{self, DataSource, LogLevel};
use hujanmon_service::pipeline;

fn main() {
    logging::init_logger(LogLevel::Info, None, false);
    let config = config::load();

    let end_date = Local::now().date_naive();
    let start_date = end_date - chrono::Duration::days(config.archive.window_days);

    println!(
        "Fetching factual rainfall for {} locations, {} to {}...",
        JABAR_REGISTRY.len(),
        start_date,
        end_date
    );

    let client = match reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(config.archive.timeout_secs))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            logging::error(DataSource::System, None, &format!("Could not build HTTP client: {}", e));
            return;
        }
    };

    let table = pipeline::run_archive(&client, &config.archive, JABAR_REGISTRY, start_date, end_date);

    if table.is_empty() {
        logging::error(
            DataSource::System,
            None,
            "No rows fetched for any location; output file not written",
        );
        return;
    }

    match export::write_rainfall_workbook(&table, Path::new(&config.archive.output_path)) {
        Ok(()) => println!(
            "Done: {} rows written to {}",
            table.len(),
            config.archive.output_path
        ),
        Err(e) => logging::error(
            DataSource::Export,
            None,
            &format!("Failed to write {}: {}", config.archive.output_path, e),
        ),
    }
}
