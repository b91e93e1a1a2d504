//! Wall-clock time arithmetic.
//!
//! Attendance times arrive as user-entered `"HH:MM"` strings. This module
//! converts them into minute-of-day offsets and computes the elapsed time
//! between a check-in and a check-out, treating a check-out that is earlier
//! in the day than the check-in as falling after midnight.

use chrono::{NaiveTime, Timelike};

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parses a wall-clock time into minutes after midnight.
///
/// Accepts `"HH:MM"` and `"HH:MM:SS"` (seconds are dropped), plus `"24:00"`
/// for the end of the day. Returns `None` for empty or malformed input,
/// including hours past 24.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::try_parse_clock_minutes;
///
/// assert_eq!(try_parse_clock_minutes("08:30"), Some(510));
/// assert_eq!(try_parse_clock_minutes("23:59:59"), Some(1439));
/// assert_eq!(try_parse_clock_minutes("24:00"), Some(1440));
/// assert_eq!(try_parse_clock_minutes(""), None);
/// assert_eq!(try_parse_clock_minutes("late"), None);
/// ```
pub fn try_parse_clock_minutes(time: &str) -> Option<u32> {
    let time = time.trim();
    if time.is_empty() {
        return None;
    }
    if matches!(time, "24:00" | "24:00:00") {
        return Some(MINUTES_PER_DAY);
    }

    let parsed = NaiveTime::parse_from_str(time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
        .ok()?;

    Some(parsed.hour() * 60 + parsed.minute())
}

/// Parses a wall-clock time into minutes after midnight, yielding 0 for empty
/// or malformed input.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::parse_clock_minutes;
///
/// assert_eq!(parse_clock_minutes("09:00"), 540);
/// assert_eq!(parse_clock_minutes(""), 0);
/// assert_eq!(parse_clock_minutes("9h"), 0);
/// ```
pub fn parse_clock_minutes(time: &str) -> u32 {
    try_parse_clock_minutes(time).unwrap_or(0)
}

/// Elapsed minutes between two minute-of-day offsets, wrapping past midnight.
pub(crate) fn elapsed_between(check_in: u32, check_out: u32) -> u32 {
    if check_out >= check_in {
        check_out - check_in
    } else {
        MINUTES_PER_DAY - check_in + check_out
    }
}

/// Computes the minutes worked between a check-in and a check-out.
///
/// When the check-out is earlier in the day than the check-in the shift is
/// taken to have crossed midnight. Returns 0 when either value is empty or
/// malformed.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::elapsed_minutes;
///
/// assert_eq!(elapsed_minutes("09:00", "18:00"), 540);
/// assert_eq!(elapsed_minutes("21:00", "06:00"), 540);
/// assert_eq!(elapsed_minutes("09:00", ""), 0);
/// ```
pub fn elapsed_minutes(check_in: &str, check_out: &str) -> u32 {
    match (
        try_parse_clock_minutes(check_in),
        try_parse_clock_minutes(check_out),
    ) {
        (Some(start), Some(end)) => elapsed_between(start, end),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_midnight_and_end_of_day() {
        assert_eq!(parse_clock_minutes("00:00"), 0);
        assert_eq!(parse_clock_minutes("23:59"), 1439);
    }

    #[test]
    fn test_parse_end_of_day() {
        assert_eq!(parse_clock_minutes("24:00"), MINUTES_PER_DAY);
        assert_eq!(parse_clock_minutes("24:00:00"), MINUTES_PER_DAY);
        assert_eq!(parse_clock_minutes("24:01"), 0);
    }

    #[test]
    fn test_elapsed_until_end_of_day() {
        assert_eq!(elapsed_minutes("09:00", "24:00"), 900);
        assert_eq!(elapsed_minutes("21:00", "24:00"), 180);
    }

    #[test]
    fn test_parse_single_digit_hour() {
        assert_eq!(parse_clock_minutes("9:05"), 545);
    }

    #[test]
    fn test_parse_tolerates_surrounding_whitespace() {
        assert_eq!(parse_clock_minutes(" 18:00 "), 1080);
    }

    #[test]
    fn test_parse_malformed_yields_zero() {
        assert_eq!(parse_clock_minutes("25:00"), 0);
        assert_eq!(parse_clock_minutes("12:75"), 0);
        assert_eq!(parse_clock_minutes("noon"), 0);
        assert_eq!(parse_clock_minutes(":"), 0);
    }

    #[test]
    fn test_elapsed_same_day() {
        assert_eq!(elapsed_minutes("08:30", "19:00"), 630);
    }

    #[test]
    fn test_elapsed_wraps_past_midnight() {
        assert_eq!(elapsed_minutes("21:00", "06:00"), 540);
        assert_eq!(elapsed_minutes("20:00", "07:00"), 660);
        assert_eq!(elapsed_minutes("23:30", "00:15"), 45);
    }

    #[test]
    fn test_elapsed_equal_times_is_zero() {
        assert_eq!(elapsed_minutes("09:00", "09:00"), 0);
    }

    #[test]
    fn test_elapsed_missing_or_malformed_is_zero() {
        assert_eq!(elapsed_minutes("", "18:00"), 0);
        assert_eq!(elapsed_minutes("09:00", ""), 0);
        assert_eq!(elapsed_minutes("bad", "18:00"), 0);
        assert_eq!(elapsed_minutes("09:00", "99:99"), 0);
    }

    proptest! {
        #[test]
        fn prop_elapsed_is_within_one_day(
            in_h in 0u32..24, in_m in 0u32..60, out_h in 0u32..24, out_m in 0u32..60
        ) {
            let check_in = format!("{:02}:{:02}", in_h, in_m);
            let check_out = format!("{:02}:{:02}", out_h, out_m);
            let elapsed = elapsed_minutes(&check_in, &check_out);
            prop_assert!(elapsed < MINUTES_PER_DAY);
        }

        #[test]
        fn prop_elapsed_never_panics_on_arbitrary_input(a in ".*", b in ".*") {
            let elapsed = elapsed_minutes(&a, &b);
            prop_assert!(elapsed <= MINUTES_PER_DAY);
        }

        #[test]
        fn prop_elapsed_and_reverse_cover_a_day(
            start in 0u32..MINUTES_PER_DAY, end in 0u32..MINUTES_PER_DAY
        ) {
            prop_assume!(start != end);
            prop_assert_eq!(
                elapsed_between(start, end) + elapsed_between(end, start),
                MINUTES_PER_DAY
            );
        }
    }
}
