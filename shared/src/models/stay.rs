//! Stay Interval Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A requested stay: check-in/check-out dates at day granularity plus guest count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayInterval {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
}

impl StayInterval {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate, guests: u32) -> Self {
        Self {
            check_in,
            check_out,
            guests,
        }
    }

    /// Whole-day difference between check-out and check-in.
    ///
    /// Zero or negative means the interval is not billable.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// A stay is billable when it spans at least one night and has at least one guest
    pub fn is_billable(&self) -> bool {
        self.nights() >= 1 && self.guests >= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_nights_whole_days() {
        let stay = StayInterval::new(d("2024-05-10"), d("2024-05-13"), 2);
        assert_eq!(stay.nights(), 3);
        assert!(stay.is_billable());
    }

    #[test]
    fn test_same_day_not_billable() {
        let stay = StayInterval::new(d("2024-05-10"), d("2024-05-10"), 1);
        assert_eq!(stay.nights(), 0);
        assert!(!stay.is_billable());
    }

    #[test]
    fn test_reversed_dates_not_billable() {
        let stay = StayInterval::new(d("2024-05-13"), d("2024-05-10"), 1);
        assert!(stay.nights() < 0);
        assert!(!stay.is_billable());
    }

    #[test]
    fn test_zero_guests_not_billable() {
        let stay = StayInterval::new(d("2024-05-10"), d("2024-05-12"), 0);
        assert!(!stay.is_billable());
    }
}
