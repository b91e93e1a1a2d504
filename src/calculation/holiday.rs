//! Holiday detection for attendance dates.
//!
//! This module derives the holiday flag passed to the categorizer: a date is
//! a holiday when it is a weekend day (if configured) or a listed public
//! holiday.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::config::EngineConfig;

/// Decides whether a date is worked at holiday rates.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// let new_year = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// let calendar = HolidayCalendar::new(true, [new_year]);
///
/// assert!(calendar.is_holiday(new_year));
/// // 2026-01-03 is a Saturday
/// assert!(calendar.is_holiday(NaiveDate::from_ymd_opt(2026, 1, 3).unwrap()));
/// // 2026-01-05 is a Monday
/// assert!(!calendar.is_holiday(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    weekends_are_holidays: bool,
    dates: HashSet<NaiveDate>,
}

impl HolidayCalendar {
    /// Creates a calendar from a weekend flag and a set of public holiday dates.
    pub fn new(weekends_are_holidays: bool, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            weekends_are_holidays,
            dates: dates.into_iter().collect(),
        }
    }

    /// Builds the calendar described by an engine configuration.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(
            config.holiday_settings().weekends_are_holidays,
            config.holiday_dates(),
        )
    }

    /// Returns true when work on `date` is holiday work.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        if self.weekends_are_holidays && matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            return true;
        }
        self.dates.contains(&date)
    }

    /// Number of listed public holiday dates.
    pub fn public_holiday_count(&self) -> usize {
        self.dates.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AggregationSettings, HolidaySettings, WorkRules};
    use crate::models::PublicHoliday;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_weekends_are_holidays_when_enabled() {
        let calendar = HolidayCalendar::new(true, []);
        assert!(calendar.is_holiday(make_date("2026-03-07"))); // Saturday
        assert!(calendar.is_holiday(make_date("2026-03-08"))); // Sunday
        assert!(!calendar.is_holiday(make_date("2026-03-06"))); // Friday
    }

    #[test]
    fn test_weekends_are_workdays_when_disabled() {
        let calendar = HolidayCalendar::new(false, []);
        assert!(!calendar.is_holiday(make_date("2026-03-07")));
        assert!(!calendar.is_holiday(make_date("2026-03-08")));
    }

    #[test]
    fn test_public_holiday_on_weekday() {
        let calendar = HolidayCalendar::new(false, [make_date("2026-05-05")]);
        assert!(calendar.is_holiday(make_date("2026-05-05")));
        assert!(!calendar.is_holiday(make_date("2026-05-06")));
    }

    #[test]
    fn test_default_calendar_has_no_holidays() {
        let calendar = HolidayCalendar::default();
        assert!(!calendar.is_holiday(make_date("2026-03-07")));
        assert_eq!(calendar.public_holiday_count(), 0);
    }

    #[test]
    fn test_from_config() {
        let config = EngineConfig::new(
            WorkRules::default(),
            HolidaySettings::default(),
            AggregationSettings::default(),
            vec![PublicHoliday {
                date: make_date("2026-10-09"),
                name: "Hangeul Day".to_string(),
            }],
        );

        let calendar = HolidayCalendar::from_config(&config);
        assert!(calendar.is_holiday(make_date("2026-10-09")));
        assert!(calendar.is_holiday(make_date("2026-10-10"))); // Saturday
        assert_eq!(calendar.public_holiday_count(), 1);
    }
}
