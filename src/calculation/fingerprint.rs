//! Change-detection fingerprints over raw attendance records.
//!
//! A fingerprint covers only the fields that feed the monthly aggregate's
//! identity: employee, date, check-in and check-out. It is stored next to the
//! aggregate and compared before recomputation.

use sha2::{Digest, Sha256};

use crate::models::AttendanceRecord;

const FINGERPRINT_PREFIX: &[u8] = b"attendancefp:v1";

/// Stable SHA-256 fingerprint of an ordered set of attendance records.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct AttendanceFingerprint([u8; 32]);

impl AttendanceFingerprint {
    /// Returns the lowercase hex encoding stored on `MonthlyStats`.
    pub fn as_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Returns true when `stored` is the hex encoding of this fingerprint.
    pub fn matches(&self, stored: &str) -> bool {
        self.as_hex() == stored
    }
}

impl std::fmt::Display for AttendanceFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_hex())
    }
}

/// Computes the fingerprint of `records` in the order given.
///
/// Each record contributes `employee_id|date|check_in|check_out` followed by a
/// newline; missing values contribute an empty field. Callers must pass a
/// stable order (the engine sorts by date, then times).
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::fingerprint;
/// use attendance_engine::models::AttendanceRecord;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 3).unwrap();
/// let before = vec![AttendanceRecord::new("EMP001", date).with_times("09:00", "18:00")];
/// let after = vec![AttendanceRecord::new("EMP001", date).with_times("09:00", "18:30")];
///
/// assert_eq!(fingerprint(&before), fingerprint(&before.clone()));
/// assert_ne!(fingerprint(&before), fingerprint(&after));
/// ```
pub fn fingerprint(records: &[AttendanceRecord]) -> AttendanceFingerprint {
    let mut hasher = Sha256::new();
    hasher.update(FINGERPRINT_PREFIX);

    for record in records {
        let date = record.date.map(|d| d.to_string()).unwrap_or_default();
        hasher.update(b"\n");
        hasher.update(record.employee_id.as_bytes());
        hasher.update(b"|");
        hasher.update(date.as_bytes());
        hasher.update(b"|");
        hasher.update(record.check_in_str().as_bytes());
        hasher.update(b"|");
        hasher.update(record.check_out_str().as_bytes());
    }

    AttendanceFingerprint(hasher.finalize().into())
}
