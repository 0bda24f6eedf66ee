//! Admin code entity - a shared secret valid through a given date

use chrono::NaiveDate;

/// Admin code entity
///
/// Codes are reusable until they expire; checking one never consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCode {
    pub code: String,
    pub valid_date: NaiveDate,
}

impl AdminCode {
    /// A code is usable on every day up to and including `valid_date`
    #[inline]
    pub fn is_valid_on(&self, today: NaiveDate) -> bool {
        today <= self.valid_date
    }
}
