//! Rental price quotation.

use chrono::NaiveDate;

/// A computed rental duration and total. `days == 0` means "no quotation
/// yet" (a date is still missing), which the presentation layer renders as
/// placeholders rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Quote {
    pub days: i64,
    pub total: f64,
}

impl Quote {
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.days > 0
    }
}

/// Quote a rental over `[pickup, ret]` at `daily_rate` per day.
///
/// Same-day and inverted ranges clamp to one day: the business charges a
/// minimum of one rental day.
#[must_use]
pub fn quote(pickup: Option<NaiveDate>, ret: Option<NaiveDate>, daily_rate: f64) -> Quote {
    let (Some(pickup), Some(ret)) = (pickup, ret) else {
        return Quote::default();
    };
    let days = (ret - pickup).num_days().max(1);
    #[allow(clippy::cast_precision_loss)] // rental durations are a handful of days
    let total = days as f64 * daily_rate;
    Quote { days, total }
}

#[cfg(test)]
mod tests {
    use super::{Quote, quote};
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn whole_day_difference() {
        let q = quote(Some(day(2025, 3, 1)), Some(day(2025, 3, 5)), 400.0);
        assert_eq!(q.days, 4);
        assert!((q.total - 1600.0).abs() < f64::EPSILON);
    }

    #[test]
    fn three_day_rental() {
        let start = day(2025, 6, 10);
        let q = quote(Some(start), Some(start + chrono::Days::new(3)), 300.0);
        assert_eq!(q.days, 3);
        assert!((q.total - 900.0).abs() < f64::EPSILON);
    }

    #[test]
    fn same_day_charges_one_day() {
        let d = day(2025, 3, 1);
        let q = quote(Some(d), Some(d), 300.0);
        assert_eq!(q.days, 1);
        assert!((q.total - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn inverted_range_charges_one_day() {
        let q = quote(Some(day(2025, 3, 5)), Some(day(2025, 3, 1)), 250.0);
        assert_eq!(q.days, 1);
        assert!((q.total - 250.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_dates_yield_empty_quote() {
        let d = day(2025, 3, 1);
        assert_eq!(quote(None, Some(d), 300.0), Quote::default());
        assert_eq!(quote(Some(d), None, 300.0), Quote::default());
        assert_eq!(quote(None, None, 300.0), Quote::default());
        assert!(!quote(None, None, 300.0).is_available());
    }
}
