//! Monthly statistics aggregate and its keys.
//!
//! This module contains the [`MonthlyStats`] document persisted per employee
//! per calendar month, the [`StatsKey`] that identifies it in a store, and
//! the [`StatsPeriod`] a batch run targets.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A calendar month targeted by an aggregation run.
///
/// # Example
///
/// ```
/// use attendance_engine::models::StatsPeriod;
///
/// let period = StatsPeriod::new(2026, 3).unwrap();
/// assert_eq!(period.to_string(), "2026-03");
/// assert!(StatsPeriod::new(2026, 13).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatsPeriod {
    /// The calendar year.
    pub year: i32,
    /// The calendar month (1-12).
    pub month: u32,
}

impl StatsPeriod {
    /// Creates a period, rejecting months outside 1-12.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::InvalidPeriod { year, month });
        }
        Ok(Self { year, month })
    }
}

impl std::fmt::Display for StatsPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

/// The unique store key of a [`MonthlyStats`] document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StatsKey {
    /// The employee the statistics describe.
    pub employee_id: String,
    /// The calendar year.
    pub year: i32,
    /// The calendar month (1-12).
    pub month: u32,
}

impl StatsKey {
    /// Builds the key for an employee within a period.
    pub fn new(employee_id: impl Into<String>, period: StatsPeriod) -> Self {
        Self {
            employee_id: employee_id.into(),
            year: period.year,
            month: period.month,
        }
    }
}

impl std::fmt::Display for StatsKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}-{:02}", self.employee_id, self.year, self.month)
    }
}

/// One employee's attendance summary for one calendar month.
///
/// Hour buckets are rounded to two decimal places. `attendance_hash` is the
/// fingerprint of the raw records the document was computed from; a run whose
/// fingerprint matches it leaves the document untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyStats {
    /// The employee the statistics describe.
    pub employee_id: String,
    /// The calendar year.
    pub year: i32,
    /// The calendar month (1-12).
    pub month: u32,
    /// Sum of elapsed check-in to check-out minutes.
    pub total_work_minutes: u64,
    /// Regular hours.
    pub regular_hours: Decimal,
    /// Early hours.
    pub early_hours: Decimal,
    /// Overtime hours.
    pub overtime_hours: Decimal,
    /// Night hours.
    pub night_hours: Decimal,
    /// Holiday hours.
    pub holiday_hours: Decimal,
    /// Days worked.
    pub work_days: u32,
    /// Days with a late check-in.
    pub late_days: u32,
    /// Days left early.
    pub early_leave_days: u32,
    /// Days absent.
    pub absent_days: u32,
    /// Days of annual leave.
    pub annual_leave_days: u32,
    /// Morning half-day leaves.
    pub morning_half_days: u32,
    /// Afternoon half-day leaves.
    pub afternoon_half_days: u32,
    /// Fingerprint of the records this document was computed from.
    pub attendance_hash: String,
    /// Number of records this document was computed from.
    pub attendance_record_count: usize,
    /// When the document was last recomputed.
    pub last_calculated_at: DateTime<Utc>,
}

impl MonthlyStats {
    /// Returns the store key of this document.
    pub fn key(&self) -> StatsKey {
        StatsKey {
            employee_id: self.employee_id.clone(),
            year: self.year,
            month: self.month,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_accepts_calendar_months() {
        for month in 1..=12 {
            assert!(StatsPeriod::new(2026, month).is_ok());
        }
    }

    #[test]
    fn test_period_rejects_out_of_range_month() {
        match StatsPeriod::new(2026, 0) {
            Err(EngineError::InvalidPeriod { year, month }) => {
                assert_eq!(year, 2026);
                assert_eq!(month, 0);
            }
            other => panic!("Expected InvalidPeriod error, got {:?}", other),
        }
    }

    #[test]
    fn test_key_display() {
        let key = StatsKey::new("EMP001", StatsPeriod::new(2026, 3).unwrap());
        assert_eq!(key.to_string(), "EMP001/2026-03");
    }

    #[test]
    fn test_hours_serialize_as_strings() {
        let stats = MonthlyStats {
            employee_id: "EMP001".to_string(),
            year: 2026,
            month: 3,
            total_work_minutes: 630,
            regular_hours: Decimal::new(800, 2),
            early_hours: Decimal::new(50, 2),
            overtime_hours: Decimal::new(100, 2),
            night_hours: Decimal::ZERO,
            holiday_hours: Decimal::ZERO,
            work_days: 1,
            late_days: 0,
            early_leave_days: 0,
            absent_days: 0,
            annual_leave_days: 0,
            morning_half_days: 0,
            afternoon_half_days: 0,
            attendance_hash: "abc".to_string(),
            attendance_record_count: 1,
            last_calculated_at: Utc::now(),
        };

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["regular_hours"], "8.00");
        assert_eq!(json["early_hours"], "0.50");

        let back: MonthlyStats = serde_json::from_value(json).unwrap();
        assert_eq!(back.key(), stats.key());
        assert_eq!(back.regular_hours, stats.regular_hours);
    }
}
