//! Running totals for one employee's month.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::calculation::{AttendanceFingerprint, categorize_record, elapsed_minutes};
use crate::config::WorkRules;
use crate::models::{AttendanceRecord, AttendanceStatus, CategorizedHours, MonthlyStats, StatsKey};

/// Rounds an hour total to exactly two decimal places, half away from zero.
pub(crate) fn round_hours(hours: Decimal) -> Decimal {
    let mut rounded = hours.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Accumulates hour buckets and day-type counters across a month of records.
///
/// Buckets are summed unrounded; [`MonthlyAccumulator::finish`] rounds once so
/// per-record rounding error never compounds.
#[derive(Debug, Clone, Default)]
pub struct MonthlyAccumulator {
    total_work_minutes: u64,
    hours: CategorizedHours,
    work_days: u32,
    late_days: u32,
    early_leave_days: u32,
    absent_days: u32,
    annual_leave_days: u32,
    morning_half_days: u32,
    afternoon_half_days: u32,
}

impl MonthlyAccumulator {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one record's elapsed time, hour buckets and day-type counters.
    pub fn add(&mut self, record: &AttendanceRecord, is_holiday: bool, rules: &WorkRules) {
        let both_times = record.has_both_times();

        self.total_work_minutes +=
            u64::from(elapsed_minutes(record.check_in_str(), record.check_out_str()));

        if both_times {
            self.hours += categorize_record(record, is_holiday, rules);
        }

        match record.status {
            Some(AttendanceStatus::Present) => self.work_days += 1,
            Some(AttendanceStatus::Late) => {
                self.late_days += 1;
                self.work_days += 1;
            }
            Some(AttendanceStatus::EarlyLeave) => {
                self.early_leave_days += 1;
                self.work_days += 1;
            }
            Some(AttendanceStatus::Absent) => self.absent_days += 1,
            Some(AttendanceStatus::AnnualLeave) => self.annual_leave_days += 1,
            Some(AttendanceStatus::HalfDayAm) => self.morning_half_days += 1,
            Some(AttendanceStatus::HalfDayPm) => self.afternoon_half_days += 1,
            Some(AttendanceStatus::Other) | None => {
                if both_times {
                    self.work_days += 1;
                }
            }
        }
    }

    /// Returns the unrounded hour buckets accumulated so far.
    pub fn hours(&self) -> &CategorizedHours {
        &self.hours
    }

    /// Produces the rounded monthly document.
    pub fn finish(
        self,
        key: StatsKey,
        fingerprint: &AttendanceFingerprint,
        record_count: usize,
        calculated_at: DateTime<Utc>,
    ) -> MonthlyStats {
        MonthlyStats {
            employee_id: key.employee_id,
            year: key.year,
            month: key.month,
            total_work_minutes: self.total_work_minutes,
            regular_hours: round_hours(self.hours.regular_hours),
            early_hours: round_hours(self.hours.early_hours),
            overtime_hours: round_hours(self.hours.overtime_hours),
            night_hours: round_hours(self.hours.night_hours),
            holiday_hours: round_hours(self.hours.holiday_hours),
            work_days: self.work_days,
            late_days: self.late_days,
            early_leave_days: self.early_leave_days,
            absent_days: self.absent_days,
            annual_leave_days: self.annual_leave_days,
            morning_half_days: self.morning_half_days,
            afternoon_half_days: self.afternoon_half_days,
            attendance_hash: fingerprint.as_hex(),
            attendance_record_count: record_count,
            last_calculated_at: calculated_at,
        }
    }
}
