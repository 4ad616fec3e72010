use crate::core::formatting::Formatter;
use crate::domain::model::RentalQuote;
use crate::domain::ports::LocaleFormatter;
use crate::utils::error::Result;
use crate::utils::validation::validate_non_negative_amount;

impl<L: LocaleFormatter> Formatter<L> {
    /// Price preview for a date range: inclusive day count times the
    /// vehicle's daily rate.
    pub fn quote(&self, start: &str, end: &str, daily_rate: f64) -> Result<RentalQuote> {
        validate_non_negative_amount("daily_rate", daily_rate)?;

        let days = self.calculate_rental_days(start, end)?;
        let total = days as f64 * daily_rate;

        Ok(RentalQuote {
            start: self.try_format_date(start)?,
            end: self.try_format_date(end)?,
            days,
            daily_rate,
            total,
            formatted_rate: self.format_currency(daily_rate),
            formatted_total: self.format_currency(total),
        })
    }
}
