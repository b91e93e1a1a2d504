//! Configuration types for attendance categorization and aggregation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every section has a
//! default equal to the standard company rules, so a partial file is valid.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::MINUTES_PER_DAY;
use crate::models::PublicHoliday;

/// Serde adapter storing minute-of-day offsets as `"HH:MM"` strings.
mod clock_format {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use crate::calculation::try_parse_clock_minutes;

    pub fn serialize<S: Serializer>(minutes: &u32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::clock_label(*minutes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        let raw = String::deserialize(deserializer)?;
        try_parse_clock_minutes(&raw)
            .ok_or_else(|| D::Error::custom(format!("invalid clock time '{}'", raw)))
    }
}

/// Clock windows and constants used to split worked time into buckets.
///
/// Clock fields are minute-of-day offsets, written as `"HH:MM"` in YAML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkRules {
    /// Start of the standard day-shift window.
    #[serde(with = "clock_format")]
    pub standard_start: u32,
    /// End of the standard day-shift window.
    #[serde(with = "clock_format")]
    pub standard_end: u32,
    /// Start of the unpaid lunch break.
    #[serde(with = "clock_format")]
    pub lunch_start: u32,
    /// End of the unpaid lunch break.
    #[serde(with = "clock_format")]
    pub lunch_end: u32,
    /// Time from which day-shift work counts as night work.
    #[serde(with = "clock_format")]
    pub night_start: u32,
    /// Night-shift hours counted as regular before overtime begins.
    pub night_regular_cap_hours: u32,
    /// Lunch deduction applied to holiday work, in minutes.
    pub holiday_lunch_minutes: u32,
}

impl Default for WorkRules {
    fn default() -> Self {
        Self {
            standard_start: 9 * 60,
            standard_end: 18 * 60,
            lunch_start: 12 * 60,
            lunch_end: 13 * 60,
            night_start: 22 * 60,
            night_regular_cap_hours: 9,
            holiday_lunch_minutes: 60,
        }
    }
}

impl WorkRules {
    /// Checks that the windows are ordered and the constants fit in a day.
    ///
    /// Returns a description of the first inconsistency found.
    pub fn validate(&self) -> Result<(), String> {
        if self.standard_start >= self.standard_end {
            return Err(format!(
                "standard_start {} must be before standard_end {}",
                clock_label(self.standard_start),
                clock_label(self.standard_end)
            ));
        }
        if self.lunch_start > self.lunch_end {
            return Err(format!(
                "lunch_start {} must not be after lunch_end {}",
                clock_label(self.lunch_start),
                clock_label(self.lunch_end)
            ));
        }
        if self.night_regular_cap_hours > 24 {
            return Err(format!(
                "night_regular_cap_hours {} exceeds 24",
                self.night_regular_cap_hours
            ));
        }
        if self.holiday_lunch_minutes > MINUTES_PER_DAY {
            return Err(format!(
                "holiday_lunch_minutes {} exceeds one day",
                self.holiday_lunch_minutes
            ));
        }
        Ok(())
    }
}

fn clock_label(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// How the holiday flag is derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HolidaySettings {
    /// Whether Saturdays and Sundays count as holidays.
    pub weekends_are_holidays: bool,
}

impl Default for HolidaySettings {
    fn default() -> Self {
        Self {
            weekends_are_holidays: true,
        }
    }
}

/// Aggregation runtime settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationSettings {
    /// Upper bound on employee groups processed concurrently.
    pub max_concurrent_groups: usize,
}

impl Default for AggregationSettings {
    fn default() -> Self {
        Self {
            max_concurrent_groups: 4,
        }
    }
}

/// Structure of `rules.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RulesFile {
    /// Categorization windows.
    pub work_rules: WorkRules,
    /// Holiday derivation settings.
    pub holidays: HolidaySettings,
    /// Aggregation runtime settings.
    pub aggregation: AggregationSettings,
}

/// Structure of a `holidays/<year>.yaml` file.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayFile {
    /// The year every listed holiday falls in.
    pub year: i32,
    /// The holidays of that year.
    #[serde(default)]
    pub holidays: Vec<PublicHoliday>,
}

/// The complete engine configuration.
///
/// `EngineConfig::default()` applies the standard rules with weekends as the
/// only holidays.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    work_rules: WorkRules,
    holiday_settings: HolidaySettings,
    aggregation: AggregationSettings,
    /// Public holidays, sorted by date.
    public_holidays: Vec<PublicHoliday>,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(
        work_rules: WorkRules,
        holiday_settings: HolidaySettings,
        aggregation: AggregationSettings,
        public_holidays: Vec<PublicHoliday>,
    ) -> Self {
        let mut sorted_holidays = public_holidays;
        sorted_holidays.sort_by(|a, b| a.date.cmp(&b.date));
        Self {
            work_rules,
            holiday_settings,
            aggregation,
            public_holidays: sorted_holidays,
        }
    }

    /// Returns the categorization windows.
    pub fn work_rules(&self) -> &WorkRules {
        &self.work_rules
    }

    /// Returns the holiday derivation settings.
    pub fn holiday_settings(&self) -> &HolidaySettings {
        &self.holiday_settings
    }

    /// Returns the aggregation runtime settings.
    pub fn aggregation(&self) -> &AggregationSettings {
        &self.aggregation
    }

    /// Returns all configured public holidays, oldest first.
    pub fn public_holidays(&self) -> &[PublicHoliday] {
        &self.public_holidays
    }

    /// Returns the dates of all configured public holidays.
    pub fn holiday_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.public_holidays.iter().map(|h| h.date)
    }
}
