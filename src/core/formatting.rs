//! Currency and date display helpers and the rental day count.

use crate::adapters::UsLocale;
use crate::domain::model::RentalPeriod;
use crate::domain::ports::LocaleFormatter;
use crate::utils::error::{RentalError, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

/// Shown in place of a date that could not be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

const MILLIS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

/// A date string as the page hands it over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedDate {
    /// `YYYY-MM-DD` or a date-time without offset.
    Naive(NaiveDateTime),
    /// RFC 3339 with an explicit offset.
    Zoned(DateTime<FixedOffset>),
}

impl ParsedDate {
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();

        if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            return Ok(Self::Naive(date.and_time(chrono::NaiveTime::MIN)));
        }
        for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(text, pattern) {
                return Ok(Self::Naive(dt));
            }
        }
        DateTime::parse_from_rfc3339(text)
            .map(Self::Zoned)
            .map_err(|_| RentalError::invalid_date(text))
    }

    /// Instant on a single timeline for arithmetic. Naive values are read as
    /// UTC, which is how date-only input values behave.
    pub fn as_utc(&self) -> NaiveDateTime {
        match self {
            Self::Naive(dt) => *dt,
            Self::Zoned(dt) => dt.naive_utc(),
        }
    }

    pub fn calendar_date<L: LocaleFormatter + ?Sized>(&self, locale: &L) -> NaiveDate {
        match self {
            Self::Naive(dt) => dt.date(),
            Self::Zoned(dt) => locale.local_date(*dt),
        }
    }
}

impl RentalPeriod {
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self {
            start: ParsedDate::parse(start)?.as_utc(),
            end: ParsedDate::parse(end)?.as_utc(),
        })
    }

    /// Inclusive day count: whole days between the two ends, rounded up,
    /// plus one for the start day. Order does not matter.
    pub fn days(&self) -> i64 {
        let millis = (self.end - self.start).num_milliseconds().abs();
        (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY + 1
    }
}

/// Formatting helpers bound to one locale provider.
#[derive(Debug, Clone, Default)]
pub struct Formatter<L> {
    locale: L,
}

impl<L: LocaleFormatter> Formatter<L> {
    pub fn new(locale: L) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> &L {
        &self.locale
    }

    pub fn format_currency(&self, amount: f64) -> String {
        self.locale.format_currency(amount)
    }

    /// Like [`try_format_date`](Self::try_format_date), but renders
    /// unparseable input as [`INVALID_DATE`].
    pub fn format_date(&self, text: &str) -> String {
        self.try_format_date(text).unwrap_or_else(|e| {
            tracing::debug!("{}", e);
            INVALID_DATE.to_string()
        })
    }

    pub fn try_format_date(&self, text: &str) -> Result<String> {
        let date = ParsedDate::parse(text)?.calendar_date(&self.locale);
        Ok(self.locale.format_date(date))
    }

    pub fn calculate_rental_days(&self, start: &str, end: &str) -> Result<i64> {
        Ok(RentalPeriod::parse(start, end)?.days())
    }
}

/// `$1,234.50`
pub fn format_currency(amount: f64) -> String {
    Formatter::new(UsLocale::default()).format_currency(amount)
}

/// `Jan 5, 2024`, or `Invalid Date`.
pub fn format_date(text: &str) -> String {
    Formatter::new(UsLocale::default()).format_date(text)
}

pub fn calculate_rental_days(start: &str, end: &str) -> Result<i64> {
    RentalPeriod::parse(start, end).map(|period| period.days())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::TimeZoneChoice;

    struct BracketLocale;

    impl LocaleFormatter for BracketLocale {
        fn format_currency(&self, amount: f64) -> String {
            format!("[{:.1}]", amount)
        }

        fn format_date(&self, date: NaiveDate) -> String {
            format!("[{}]", date)
        }

        fn local_date(&self, instant: DateTime<FixedOffset>) -> NaiveDate {
            instant.date_naive()
        }
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(49.99), "$49.99");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-01-05"), "Jan 5, 2024");
        assert_eq!(format_date(" 2024-11-30 "), "Nov 30, 2024");
        assert_eq!(format_date("2024-01-05T18:45:00"), "Jan 5, 2024");
        assert_eq!(format_date("2024-01-05T18:45"), "Jan 5, 2024");
    }

    #[test]
    fn test_format_date_invalid() {
        assert_eq!(format_date("nonsense"), INVALID_DATE);
        assert_eq!(format_date(""), INVALID_DATE);
        assert_eq!(format_date("2024-02-30"), INVALID_DATE);
        assert!(matches!(
            Formatter::new(UsLocale::default()).try_format_date("soon"),
            Err(RentalError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_zoned_date_uses_locale_time_zone() {
        let utc = Formatter::new(UsLocale::new(TimeZoneChoice::Utc));
        assert_eq!(utc.format_date("2024-01-05T22:00:00-05:00"), "Jan 6, 2024");
        assert_eq!(utc.format_date("2024-01-05T22:00:00Z"), "Jan 5, 2024");
    }

    #[test]
    fn test_injected_locale() {
        let formatter = Formatter::new(BracketLocale);
        assert_eq!(formatter.format_currency(2.0), "[2.0]");
        assert_eq!(formatter.format_date("2024-01-05"), "[2024-01-05]");
    }

    #[test]
    fn test_rental_days_inclusive() {
        assert_eq!(calculate_rental_days("2024-01-05", "2024-01-05").unwrap(), 1);
        assert_eq!(calculate_rental_days("2024-01-05", "2024-01-06").unwrap(), 2);
        assert_eq!(calculate_rental_days("2024-01-01", "2024-01-10").unwrap(), 10);
        assert_eq!(calculate_rental_days("2024-01-01", "2024-01-11").unwrap(), 11);
    }

    #[test]
    fn test_rental_days_symmetric() {
        let pairs = [
            ("2024-01-01", "2024-01-10"),
            ("2023-12-30", "2024-01-02"),
            ("2024-02-28", "2024-03-01"),
        ];
        for (a, b) in pairs {
            assert_eq!(
                calculate_rental_days(a, b).unwrap(),
                calculate_rental_days(b, a).unwrap()
            );
        }
    }

    #[test]
    fn test_rental_days_partial_day_rounds_up() {
        assert_eq!(
            calculate_rental_days("2024-01-05T10:00", "2024-01-06T09:00").unwrap(),
            2
        );
        assert_eq!(
            calculate_rental_days("2024-01-05T10:00", "2024-01-06T11:00").unwrap(),
            3
        );
    }

    #[test]
    fn test_rental_days_leap_year() {
        assert_eq!(calculate_rental_days("2024-02-28", "2024-03-01").unwrap(), 3);
        assert_eq!(calculate_rental_days("2023-02-28", "2023-03-01").unwrap(), 2);
    }

    #[test]
    fn test_rental_days_invalid() {
        assert!(matches!(
            calculate_rental_days("2024-01-05", "later"),
            Err(RentalError::InvalidDate { value }) if value == "later"
        ));
    }
}
