//! Common types used across the platform

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Maximum number of days a risk prediction may look ahead
pub const MAX_FORECAST_DAYS: i32 = 7;

/// Length of the period covered by a risk report, in days
pub const REPORT_PERIOD_DAYS: i64 = 7;

/// Inclusive date window used by list filters.
///
/// Either bound may be open.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateWindow {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateWindow {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// A window is well formed unless both bounds are set and reversed
    pub fn is_ordered(&self) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= end,
            _ => true,
        }
    }
}
