/// Tabular accumulation for pipeline output.
///
/// Each pipeline run owns exactly one table, built by a single writer
/// (the accumulating loop) and passed by value to the persistence step —
/// there is no module-level accumulation state. Tables are append-only:
/// rows land in encounter order (location iteration order, then row order
/// within a location), with no deduplication and no sorting. Sorting by
/// location and time is a presentation-layer concern applied after load.
///
/// The two schemas never mix; each pipeline has its own table type.

use crate::model::{DailyRainfall, HourlyObservation};

/// Ordered accumulation of hourly forecast observations.
#[derive(Debug, Default)]
pub struct HourlyTable {
    rows: Vec<HourlyObservation>,
}

impl HourlyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one location's rows. An empty batch is a valid outcome
    /// (the location failed or had no qualifying rows) and leaves the
    /// table untouched.
    pub fn append(&mut self, rows: Vec<HourlyObservation>) {
        self.rows.extend(rows);
    }

    pub fn rows(&self) -> &[HourlyObservation] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Ordered accumulation of daily rainfall rows.
#[derive(Debug, Default)]
pub struct RainfallTable {
    rows: Vec<DailyRainfall>,
}

impl RainfallTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, rows: Vec<DailyRainfall>) {
        self.rows.extend(rows);
    }

    pub fn rows(&self) -> &[DailyRainfall] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
