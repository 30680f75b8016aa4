/// Data source clients for the rainfall monitoring service.
///
/// Submodules:
/// - `hourly` — rendered forecast page fetch and table extraction.
/// - `archive` — Open-Meteo historical rainfall API.

pub mod archive;
pub mod hourly;
