use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};
use chrono_tz::Tz;

/// Default timezone for valuation dates.
pub const DEFAULT_VALUATION_TZ: Tz = chrono_tz::Asia::Bangkok;

/// Converts a UTC instant to a valuation date in the given timezone.
///
/// This is the single source of truth for converting instants to domain dates.
/// Engine functions never read the clock themselves; callers derive the valuation
/// date here and pass it in.
pub fn valuation_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Convenience function that uses the default valuation timezone.
pub fn valuation_date_today() -> NaiveDate {
    valuation_date_from_utc(Utc::now(), DEFAULT_VALUATION_TZ)
}

/// Signed number of whole days from `start` to `end` (negative when `end` is earlier).
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Fraction of a year elapsed between two dates, using the given year length.
pub fn years_between(start: NaiveDate, end: NaiveDate, days_per_year: f64) -> f64 {
    days_between(start, end) as f64 / days_per_year
}

/// Subtracts calendar months, clamping to the last valid day of the target month.
pub fn months_before(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months)).unwrap_or(NaiveDate::MIN)
}

/// January 1st of the date's year.
pub fn start_of_year(date: NaiveDate) -> NaiveDate {
    date.with_ordinal(1).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_days_between_is_signed() {
        assert_eq!(days_between(d(2024, 1, 1), d(2024, 1, 31)), 30);
        assert_eq!(days_between(d(2024, 1, 31), d(2024, 1, 1)), -30);
        assert_eq!(days_between(d(2024, 1, 1), d(2024, 1, 1)), 0);
    }

    #[test]
    fn test_years_between() {
        let years = years_between(d(2023, 1, 1), d(2024, 1, 1), 365.0);
        assert!((years - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_months_before_clamps_month_end() {
        assert_eq!(months_before(d(2024, 3, 31), 1), d(2024, 2, 29));
        assert_eq!(months_before(d(2024, 8, 15), 6), d(2024, 2, 15));
    }

    #[test]
    fn test_start_of_year() {
        assert_eq!(start_of_year(d(2024, 10, 19)), d(2024, 1, 1));
    }

    #[test]
    fn test_valuation_date_respects_timezone() {
        // 20:00 UTC on Jan 1 is already Jan 2 in Bangkok (UTC+7)
        let instant = DateTime::parse_from_rfc3339("2024-01-01T20:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(
            valuation_date_from_utc(instant, DEFAULT_VALUATION_TZ),
            d(2024, 1, 2)
        );
    }
}
