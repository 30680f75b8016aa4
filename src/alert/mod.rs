/// Alerting support for the rainfall monitoring service.
///
/// Submodules:
/// - `severity` — rainfall total to severity level classification.

pub mod severity;
