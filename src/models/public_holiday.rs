//! Public holiday model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A dated public holiday supplied by configuration.
///
/// The engine only consumes holiday dates; deriving them (lunar or solar
/// calendars, substitute days) is done upstream.
///
/// # Example
///
/// ```
/// use attendance_engine::models::PublicHoliday;
/// use chrono::NaiveDate;
///
/// let holiday = PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
///     name: "Independence Movement Day".to_string(),
/// };
/// assert_eq!(holiday.date.to_string(), "2026-03-01");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the public holiday.
    pub date: NaiveDate,
    /// The name of the public holiday.
    pub name: String,
}
