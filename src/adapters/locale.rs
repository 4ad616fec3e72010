//! en-US / USD locale formatting.

use crate::domain::model::TimeZoneChoice;
use crate::domain::ports::LocaleFormatter;
use chrono::{DateTime, FixedOffset, Local, NaiveDate};

/// "Jan 5, 2024"
pub const US_SHORT_DATE: &str = "%b %-d, %Y";

#[derive(Debug, Clone, Copy, Default)]
pub struct UsLocale {
    time_zone: TimeZoneChoice,
}

impl UsLocale {
    pub fn new(time_zone: TimeZoneChoice) -> Self {
        Self { time_zone }
    }

    pub fn time_zone(&self) -> TimeZoneChoice {
        self.time_zone
    }
}

impl LocaleFormatter for UsLocale {
    fn format_currency(&self, amount: f64) -> String {
        format_usd(amount)
    }

    fn format_date(&self, date: NaiveDate) -> String {
        date.format(US_SHORT_DATE).to_string()
    }

    fn local_date(&self, instant: DateTime<FixedOffset>) -> NaiveDate {
        match self.time_zone {
            TimeZoneChoice::Local => instant.with_timezone(&Local).date_naive(),
            TimeZoneChoice::Utc => instant.naive_utc().date(),
        }
    }
}

/// Formats `amount` as US dollars: `$` sign, comma grouping, two decimals.
///
/// Rounds half away from zero on the shortest decimal form of the number, so
/// `1.005` becomes `$1.01` even though its binary value sits just below.
pub fn format_usd(amount: f64) -> String {
    if amount.is_nan() {
        return "$NaN".to_string();
    }
    let sign = if amount.is_sign_negative() { "-" } else { "" };
    if amount.is_infinite() {
        return format!("{}$∞", sign);
    }

    let (whole, cents) = round_to_cents(amount.abs());
    format!("{}${}.{}", sign, group_thousands(&whole), cents)
}

fn round_to_cents(value: f64) -> (String, String) {
    // f64's Display is the shortest round-trip form and never uses exponents.
    let shortest = value.to_string();
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(2))
        .map(|b| b - b'0')
        .collect();

    let round_up = frac_part.as_bytes().get(2).is_some_and(|d| *d >= b'5');
    if round_up {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, 1);
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - 2;
    let render = |ds: &[u8]| ds.iter().map(|d| char::from(b'0' + d)).collect::<String>();
    (render(&digits[..split]), render(&digits[split..]))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
