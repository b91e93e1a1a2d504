//! Categorized hour buckets for a single attendance record.

use std::ops::AddAssign;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Worked hours for one record split into named buckets.
///
/// At most one of `regular_hours` and `holiday_hours` is non-zero, and
/// `overtime_hours` is zero whenever `holiday_hours` is non-zero. Night hours
/// may overlap regular and overtime hours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizedHours {
    /// Hours worked before the standard window opens.
    pub early_hours: Decimal,
    /// Hours inside the standard window, lunch excluded.
    pub regular_hours: Decimal,
    /// Hours past the end of the standard window or the night-shift cap.
    pub overtime_hours: Decimal,
    /// Hours attracting the night differential.
    pub night_hours: Decimal,
    /// Hours worked on a holiday.
    pub holiday_hours: Decimal,
}

impl CategorizedHours {
    /// Returns true when every bucket is zero.
    pub fn is_zero(&self) -> bool {
        self.early_hours.is_zero()
            && self.regular_hours.is_zero()
            && self.overtime_hours.is_zero()
            && self.night_hours.is_zero()
            && self.holiday_hours.is_zero()
    }
}

impl AddAssign for CategorizedHours {
    fn add_assign(&mut self, rhs: Self) {
        self.early_hours += rhs.early_hours;
        self.regular_hours += rhs.regular_hours;
        self.overtime_hours += rhs.overtime_hours;
        self.night_hours += rhs.night_hours;
        self.holiday_hours += rhs.holiday_hours;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        assert!(CategorizedHours::default().is_zero());
    }

    #[test]
    fn test_add_assign_sums_each_bucket() {
        let mut total = CategorizedHours::default();
        total += CategorizedHours {
            early_hours: Decimal::new(5, 1),
            regular_hours: Decimal::from(8),
            overtime_hours: Decimal::ONE,
            ..Default::default()
        };
        total += CategorizedHours {
            regular_hours: Decimal::from(9),
            night_hours: Decimal::from(9),
            ..Default::default()
        };

        assert_eq!(total.early_hours, Decimal::new(5, 1));
        assert_eq!(total.regular_hours, Decimal::from(17));
        assert_eq!(total.overtime_hours, Decimal::ONE);
        assert_eq!(total.night_hours, Decimal::from(9));
        assert!(total.holiday_hours.is_zero());
        assert!(!total.is_zero());
    }
}
