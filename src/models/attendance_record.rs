//! Attendance record model and related types.
//!
//! This module defines the raw per-day [`AttendanceRecord`] supplied by the
//! bulk-upload and CRUD layers, together with its [`ShiftType`] and
//! [`AttendanceStatus`] enums.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The shift an attendance record was worked on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    /// Standard daytime hours, categorized against the 09:00-18:00 window.
    #[default]
    Day,
    /// Overnight hours; the whole shift counts as night work.
    Night,
}

/// The day-type status attached to an attendance record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttendanceStatus {
    /// A normal working day.
    Present,
    /// The employee checked in late.
    Late,
    /// The employee left before the end of the standard window.
    EarlyLeave,
    /// The employee did not attend.
    Absent,
    /// A full day of annual leave.
    AnnualLeave,
    /// Morning half-day leave.
    #[serde(rename = "half-day-am")]
    HalfDayAm,
    /// Afternoon half-day leave.
    #[serde(rename = "half-day-pm")]
    HalfDayPm,
    /// Any other status recorded by the source system.
    Other,
}

/// Deserializers that read absent-looking key fields as missing, so the
/// engine can count the record instead of the whole batch failing to parse.
mod lenient {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer};

    pub fn employee_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
    }

    pub fn date<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.and_then(|value| NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()))
    }
}

/// A single day of raw attendance for one employee.
///
/// Check-in and check-out are kept as the user-entered `"HH:MM"` strings;
/// empty or malformed values are tolerated and contribute no hours.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{AttendanceRecord, ShiftType};
/// use chrono::NaiveDate;
///
/// let record = AttendanceRecord::new("EMP001", NaiveDate::from_ymd_opt(2026, 3, 2).unwrap())
///     .with_times("09:00", "18:00");
/// assert!(record.has_both_times());
/// assert_eq!(record.shift_type, ShiftType::Day);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee the record belongs to. Empty means missing.
    #[serde(default, deserialize_with = "lenient::employee_id")]
    pub employee_id: String,
    /// The calendar date of the record. Blank or unparseable dates read as
    /// missing.
    #[serde(default, deserialize_with = "lenient::date")]
    pub date: Option<NaiveDate>,
    /// Check-in wall-clock time (`"HH:MM"`).
    #[serde(default)]
    pub check_in: Option<String>,
    /// Check-out wall-clock time (`"HH:MM"`), possibly after midnight.
    #[serde(default)]
    pub check_out: Option<String>,
    /// The shift type the record was worked on.
    #[serde(default)]
    pub shift_type: ShiftType,
    /// The day-type status, if any.
    #[serde(default)]
    pub status: Option<AttendanceStatus>,
}

impl AttendanceRecord {
    /// Creates a day-shift record with no times and no status.
    pub fn new(employee_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            employee_id: employee_id.into(),
            date: Some(date),
            check_in: None,
            check_out: None,
            shift_type: ShiftType::Day,
            status: None,
        }
    }

    /// Sets the check-in and check-out times.
    pub fn with_times(mut self, check_in: impl Into<String>, check_out: impl Into<String>) -> Self {
        self.check_in = Some(check_in.into());
        self.check_out = Some(check_out.into());
        self
    }

    /// Sets the shift type.
    pub fn with_shift(mut self, shift_type: ShiftType) -> Self {
        self.shift_type = shift_type;
        self
    }

    /// Sets the day-type status.
    pub fn with_status(mut self, status: AttendanceStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns the check-in time, or `""` when absent.
    pub fn check_in_str(&self) -> &str {
        self.check_in.as_deref().unwrap_or("")
    }

    /// Returns the check-out time, or `""` when absent.
    pub fn check_out_str(&self) -> &str {
        self.check_out.as_deref().unwrap_or("")
    }

    /// Returns true when both check-in and check-out carry a value.
    pub fn has_both_times(&self) -> bool {
        !self.check_in_str().trim().is_empty() && !self.check_out_str().trim().is_empty()
    }

    /// Checks that the fields the engine keys on are present.
    ///
    /// Returns `InvalidRecord` when the employee id is blank or the date is
    /// missing.
    pub fn validate(&self) -> EngineResult<()> {
        if self.employee_id.trim().is_empty() {
            return Err(EngineError::InvalidRecord {
                field: "employee_id".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.date.is_none() {
            return Err(EngineError::InvalidRecord {
                field: "date".to_string(),
                message: format!("missing for employee '{}'", self.employee_id),
            });
        }
        Ok(())
    }
}
