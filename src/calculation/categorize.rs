//! Work-hour categorization.
//!
//! This module splits a check-in/check-out interval into the early, regular,
//! overtime, night and holiday buckets used by payroll. It is the single
//! implementation of these rules; bulk saves, recalculation and monthly
//! aggregation all go through [`categorize`].
//!
//! Three paths exist:
//!
//! - **Holiday** (any shift): elapsed time less the lunch deduction, all
//!   counted as holiday hours.
//! - **Day shift**: fixed clock windows. Night hours are counted from the
//!   night start onwards and may overlap overtime.
//! - **Night shift**: the whole elapsed time is night work and is also split
//!   into regular hours (up to the cap) and overtime.

use rust_decimal::Decimal;

use crate::config::WorkRules;
use crate::models::{AttendanceRecord, CategorizedHours, ShiftType};

use super::clock::{MINUTES_PER_DAY, elapsed_between, try_parse_clock_minutes};

/// Converts whole minutes into decimal hours.
pub(crate) fn minutes_to_hours(minutes: u32) -> Decimal {
    Decimal::from(minutes) / Decimal::from(60)
}

/// Length of the overlap between `[start, end)` and `[window_start, window_end)`.
fn overlap(start: u32, end: u32, window_start: u32, window_end: u32) -> u32 {
    let from = start.max(window_start);
    let to = end.min(window_end);
    to.saturating_sub(from)
}

/// Categorizes the interval between a check-in and a check-out.
///
/// Returns all-zero buckets when either time is missing or malformed.
///
/// # Arguments
///
/// * `check_in` - Check-in wall-clock time (`"HH:MM"`)
/// * `check_out` - Check-out wall-clock time, possibly after midnight
/// * `shift_type` - Day or night shift
/// * `is_holiday` - Whether the date is worked at holiday rates
/// * `rules` - The clock windows to categorize against
///
/// # Examples
///
/// ## Day shift with early start and overtime
///
/// ```
/// use attendance_engine::calculation::categorize;
/// use attendance_engine::config::WorkRules;
/// use attendance_engine::models::ShiftType;
/// use rust_decimal::Decimal;
///
/// let hours = categorize("08:30", "19:00", ShiftType::Day, false, &WorkRules::default());
/// assert_eq!(hours.early_hours, Decimal::new(5, 1));
/// assert_eq!(hours.regular_hours, Decimal::from(8));
/// assert_eq!(hours.overtime_hours, Decimal::ONE);
/// assert!(hours.night_hours.is_zero());
/// ```
///
/// ## Holiday work
///
/// ```
/// use attendance_engine::calculation::categorize;
/// use attendance_engine::config::WorkRules;
/// use attendance_engine::models::ShiftType;
/// use rust_decimal::Decimal;
///
/// let hours = categorize("09:00", "14:00", ShiftType::Day, true, &WorkRules::default());
/// assert_eq!(hours.holiday_hours, Decimal::from(4));
/// assert!(hours.regular_hours.is_zero());
/// ```
pub fn categorize(
    check_in: &str,
    check_out: &str,
    shift_type: ShiftType,
    is_holiday: bool,
    rules: &WorkRules,
) -> CategorizedHours {
    let (Some(start), Some(end)) = (
        try_parse_clock_minutes(check_in),
        try_parse_clock_minutes(check_out),
    ) else {
        return CategorizedHours::default();
    };

    if is_holiday {
        return categorize_holiday(start, end, rules);
    }

    match shift_type {
        ShiftType::Day => categorize_day_shift(start, end, rules),
        ShiftType::Night => categorize_night_shift(start, end, rules),
    }
}

/// Categorizes a record using its own times and shift type.
pub fn categorize_record(
    record: &AttendanceRecord,
    is_holiday: bool,
    rules: &WorkRules,
) -> CategorizedHours {
    categorize(
        record.check_in_str(),
        record.check_out_str(),
        record.shift_type,
        is_holiday,
        rules,
    )
}

fn categorize_holiday(start: u32, end: u32, rules: &WorkRules) -> CategorizedHours {
    let worked = elapsed_between(start, end).saturating_sub(rules.holiday_lunch_minutes);

    CategorizedHours {
        holiday_hours: minutes_to_hours(worked),
        ..Default::default()
    }
}

fn categorize_day_shift(start: u32, end: u32, rules: &WorkRules) -> CategorizedHours {
    // A check-out earlier than the check-in belongs to the next day
    let end = if end < start { end + MINUTES_PER_DAY } else { end };

    // Each bucket is the part of [start, end) inside its window
    let early = overlap(start, end, 0, rules.standard_start);
    let regular_start = start.max(rules.standard_start);
    let regular_end = end.min(rules.standard_end);
    let lunch = overlap(regular_start, regular_end, rules.lunch_start, rules.lunch_end);
    let regular = regular_end.saturating_sub(regular_start).saturating_sub(lunch);
    let overtime = overlap(start, end, rules.standard_end, u32::MAX);
    let night = overlap(start, end, rules.night_start, u32::MAX);

    CategorizedHours {
        early_hours: minutes_to_hours(early),
        regular_hours: minutes_to_hours(regular),
        overtime_hours: minutes_to_hours(overtime),
        night_hours: minutes_to_hours(night),
        holiday_hours: Decimal::ZERO,
    }
}

fn categorize_night_shift(start: u32, end: u32, rules: &WorkRules) -> CategorizedHours {
    let total = elapsed_between(start, end);
    let cap = rules.night_regular_cap_hours.saturating_mul(60);

    CategorizedHours {
        early_hours: Decimal::ZERO,
        regular_hours: minutes_to_hours(total.min(cap)),
        overtime_hours: minutes_to_hours(total.saturating_sub(cap)),
        night_hours: minutes_to_hours(total),
        holiday_hours: Decimal::ZERO,
    }
}
