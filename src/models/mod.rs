//! Core data models for the attendance statistics engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance_record;
mod categorized_hours;
mod monthly_stats;
mod public_holiday;

pub use attendance_record::{AttendanceRecord, AttendanceStatus, ShiftType};
pub use categorized_hours::CategorizedHours;
pub use monthly_stats::{MonthlyStats, StatsKey, StatsPeriod};
pub use public_holiday::PublicHoliday;
