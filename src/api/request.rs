//! Request types for the attendance statistics API.
//!
//! This module defines the JSON request structure for the
//! `/stats/recalculate` endpoint.

use serde::{Deserialize, Serialize};

use crate::aggregation::RunOptions;
use crate::error::EngineResult;
use crate::models::{AttendanceRecord, StatsPeriod};

/// Request body for the `/stats/recalculate` endpoint.
///
/// Carries the full record set for one month. Records may include entries
/// for many employees; each employee's statistics are recomputed only when
/// their records changed, unless `force` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecalculateRequest {
    /// The calendar year.
    pub year: i32,
    /// The calendar month (1-12).
    pub month: u32,
    /// Recompute every employee regardless of fingerprints.
    #[serde(default)]
    pub force: bool,
    /// The month's raw attendance records.
    #[serde(default)]
    pub records: Vec<AttendanceRecord>,
}

impl RecalculateRequest {
    /// Returns the validated period the request targets.
    pub fn period(&self) -> EngineResult<StatsPeriod> {
        StatsPeriod::new(self.year, self.month)
    }

    /// Returns the run options the request asks for.
    pub fn options(&self) -> RunOptions {
        RunOptions { force: self.force }
    }
}
