//! Rainfall severity classification.
//!
//! Alert banner selection in the dashboard and any re-derivation of the
//! `Status_Awal` column must use these same thresholds — they are the one
//! shared domain constant between ingestion and display.

use crate::model::Severity;

/// Daily rainfall above this many millimetres is extreme danger.
pub const EXTREME_MM: f64 = 100.0;
/// Above this, danger (flood watch territory).
pub const DANGER_MM: f64 = 50.0;
/// Above this, caution.
pub const CAUTION_MM: f64 = 20.0;

/// Classifies a day's rainfall total into a severity level.
///
/// Strictly ordered, first match wins; boundaries are exclusive, so
/// exactly 20.0 mm is still `Aman` and exactly 100.0 mm is still `Bahaya`.
/// Total over all finite inputs — callers coerce missing rainfall to 0.0
/// before classification, so negative or NaN values do not occur in
/// practice (both would fall through to `Aman`).
pub fn classify_rainfall(rainfall_mm: f64) -> Severity {
    if rainfall_mm > EXTREME_MM {
        Severity::BahayaEkstrem
    } else if rainfall_mm > DANGER_MM {
        Severity::Bahaya
    } else if rainfall_mm > CAUTION_MM {
        Severity::Waspada
    } else {
        Severity::Aman
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
