//! Time source for job ids and submission dates.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, NaiveDate, Utc};

/// Supplies the current instant to the job store.
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;

    /// Current UTC calendar date, the same day an ISO timestamp carries.
    fn today(&self) -> NaiveDate;
}

/// Wall clock. Dates are taken in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A settable clock for tests and scripted sessions.
#[derive(Debug)]
pub struct FixedClock {
    millis: AtomicI64,
}

impl FixedClock {
    /// Clock frozen at UTC midnight of `date`.
    pub fn at_date(date: NaiveDate) -> Self {
        let millis = date
            .and_hms_opt(0, 0, 0)
            .map(|naive| naive.and_utc().timestamp_millis())
            .unwrap_or_default();
        Self {
            millis: AtomicI64::new(millis),
        }
    }

    pub fn at_millis(millis: i64) -> Self {
        Self {
            millis: AtomicI64::new(millis),
        }
    }

    pub fn set_date(&self, date: NaiveDate) {
        let other = Self::at_date(date);
        self.millis
            .store(other.millis.load(Ordering::Relaxed), Ordering::Relaxed);
    }

    pub fn advance_millis(&self, delta: i64) {
        self.millis.fetch_add(delta, Ordering::Relaxed);
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis.load(Ordering::Relaxed)
    }

    fn today(&self) -> NaiveDate {
        DateTime::from_timestamp_millis(self.now_millis())
            .map(|utc| utc.date_naive())
            .unwrap_or_default()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }

    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }

    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_reports_its_date() {
        let day = NaiveDate::from_ymd_opt(2026, 5, 17).unwrap();
        let clock = FixedClock::at_date(day);
        assert_eq!(clock.today(), day);
    }

    #[test]
    fn test_fixed_clock_advances() {
        let clock = FixedClock::at_millis(1_000);
        clock.advance_millis(250);
        assert_eq!(clock.now_millis(), 1_250);
    }

    #[test]
    fn test_set_date_moves_clock() {
        let clock = FixedClock::at_date(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        let later = NaiveDate::from_ymd_opt(2026, 1, 4).unwrap();
        clock.set_date(later);
        assert_eq!(clock.today(), later);
    }

    #[test]
    fn test_today_follows_utc_not_local_offset() {
        // 2026-03-09T23:59:59.999Z
        let clock = FixedClock::at_millis(1_773_100_799_999);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2026, 3, 9).unwrap());
        clock.advance_millis(1);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2026, 3, 10).unwrap());
    }

    #[test]
    fn test_system_clock_date_is_utc() {
        let before = Utc::now().date_naive();
        let today = SystemClock.today();
        let after = Utc::now().date_naive();
        assert!(today == before || today == after);
    }

    #[test]
    fn test_system_clock_is_recent() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.now_millis() > 1_577_836_800_000);
    }
}
