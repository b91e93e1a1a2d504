//! Calculation logic for the attendance statistics engine.
//!
//! This module contains wall-clock time arithmetic, the work-hour
//! categorizer, holiday detection, and the record fingerprint used to decide
//! whether a monthly aggregate needs recomputing.

mod categorize;
mod clock;
mod fingerprint;
mod holiday;

pub use categorize::{categorize, categorize_record};
pub use clock::{MINUTES_PER_DAY, elapsed_minutes, parse_clock_minutes, try_parse_clock_minutes};
pub use fingerprint::{AttendanceFingerprint, fingerprint};
pub use holiday::HolidayCalendar;
