/// Ingest service for Indonesian rainfall monitoring.
///
/// Two run-to-completion pipelines feed the dashboard layer:
/// hourly rain-chance scraping of city forecast pages (`scrape_hourly`)
/// and archival daily rainfall for West Java (`fetch_archive`). Both
/// share the same shape — fetch, parse, classify, tabulate, persist —
/// with per-location failures isolated so one dead source never costs a
/// whole run.

pub mod alert;
pub mod config;
pub mod export;
pub mod ingest;
pub mod locations;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod table;
pub mod verify;
