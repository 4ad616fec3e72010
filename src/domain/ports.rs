use crate::domain::model::{FormId, InputId};
use chrono::{DateTime, FixedOffset, NaiveDate};

/// Locale formatting provider: how amounts and calendar dates are shown.
pub trait LocaleFormatter: Send + Sync {
    fn format_currency(&self, amount: f64) -> String;
    fn format_date(&self, date: NaiveDate) -> String;
    /// Calendar date of a zoned timestamp in the formatter's time zone.
    fn local_date(&self, instant: DateTime<FixedOffset>) -> NaiveDate;
}

pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// The slice of the DOM the date-range binder reads and writes.
///
/// Lookups return elements in document order, like `querySelectorAll`.
pub trait Document {
    fn inputs_named(&self, name: &str) -> Vec<InputId>;
    fn closest_form(&self, input: InputId) -> Option<FormId>;
    /// First input called `name` inside `form`.
    fn form_input(&self, form: FormId, name: &str) -> Option<InputId>;
    fn value(&self, input: InputId) -> &str;
    fn set_value(&mut self, input: InputId, value: &str);
    fn min(&self, input: InputId) -> &str;
    fn set_min(&mut self, input: InputId, min: &str);
}

impl<L: LocaleFormatter + ?Sized> LocaleFormatter for Box<L> {
    fn format_currency(&self, amount: f64) -> String {
        (**self).format_currency(amount)
    }

    fn format_date(&self, date: NaiveDate) -> String {
        (**self).format_date(date)
    }

    fn local_date(&self, instant: DateTime<FixedOffset>) -> NaiveDate {
        (**self).local_date(instant)
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
