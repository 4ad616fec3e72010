//! Keeps paired `start_date` / `end_date` inputs in a consistent order.

use crate::domain::model::{ChangeOutcome, InputId};
use crate::domain::ports::{Clock, Document};

pub const START_DATE_FIELD: &str = "start_date";
pub const END_DATE_FIELD: &str = "end_date";

/// Format of a date input's `value` and `min` attributes.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

pub struct DateRangeBinder;

impl DateRangeBinder {
    /// Page start-up: every empty start-date input gets today as its
    /// minimum, and every start-date input is bound for change handling.
    ///
    /// Today is read once; the minimum is not refreshed later.
    pub fn init<D, C>(document: &mut D, clock: &C) -> DateRangeBinding
    where
        D: Document + ?Sized,
        C: Clock + ?Sized,
    {
        let today = clock.today().format(DATE_INPUT_FORMAT).to_string();
        let start_inputs = document.inputs_named(START_DATE_FIELD);

        let mut defaulted = 0;
        for &input in &start_inputs {
            if document.value(input).is_empty() {
                document.set_min(input, &today);
                defaulted += 1;
            }
        }

        tracing::info!(
            "Bound {} start date input(s), {} defaulted to min {}",
            start_inputs.len(),
            defaulted,
            today
        );

        DateRangeBinding { start_inputs }
    }
}

/// The change listeners registered by [`DateRangeBinder::init`].
#[derive(Debug, Clone, Default)]
pub struct DateRangeBinding {
    start_inputs: Vec<InputId>,
}

impl DateRangeBinding {
    pub fn bound_inputs(&self) -> &[InputId] {
        &self.start_inputs
    }

    pub fn is_bound(&self, input: InputId) -> bool {
        self.start_inputs.contains(&input)
    }

    /// Change listener for a start-date input. The host calls this after
    /// the input's value has changed.
    pub fn handle_change<D>(&self, document: &mut D, input: InputId) -> ChangeOutcome
    where
        D: Document + ?Sized,
    {
        if !self.is_bound(input) {
            return ChangeOutcome::Ignored;
        }

        let Some(form) = document.closest_form(input) else {
            tracing::debug!("Start date input {:?} has no enclosing form", input);
            return ChangeOutcome::NoForm;
        };
        let Some(end_input) = document.form_input(form, END_DATE_FIELD) else {
            tracing::debug!("Form {:?} has no {} input", form, END_DATE_FIELD);
            return ChangeOutcome::NoEndInput;
        };

        let start_value = document.value(input).to_string();
        document.set_min(end_input, &start_value);

        // ISO dates order the same as strings.
        let end_value = document.value(end_input);
        if !end_value.is_empty() && end_value < start_value.as_str() {
            tracing::debug!("Moving end date {} up to {}", end_value, start_value);
            document.set_value(end_input, &start_value);
            return ChangeOutcome::EndAdjusted;
        }

        ChangeOutcome::MinUpdated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FixedClock, MemoryDocument};
    use chrono::NaiveDate;

    fn june_first() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    fn booking_form(start: &str, end: &str) -> (MemoryDocument, InputId, InputId) {
        let mut doc = MemoryDocument::new();
        let form = doc.add_form("booking");
        let start = doc.add_input(Some(form), START_DATE_FIELD, start);
        let end = doc.add_input(Some(form), END_DATE_FIELD, end);
        (doc, start, end)
    }

    #[test]
    fn test_empty_start_gets_today_as_min() {
        let (mut doc, start, end) = booking_form("", "");
        let binding = DateRangeBinder::init(&mut doc, &june_first());

        assert_eq!(doc.min(start), "2024-06-01");
        assert_eq!(doc.min(end), "");
        assert_eq!(binding.bound_inputs(), &[start]);
    }

    #[test]
    fn test_prefilled_start_keeps_its_min() {
        let (mut doc, start, _) = booking_form("2024-05-20", "");
        DateRangeBinder::init(&mut doc, &june_first());
        assert_eq!(doc.min(start), "");
    }

    #[test]
    fn test_end_before_start_is_moved() {
        let (mut doc, start, end) = booking_form("", "2024-06-05");
        let binding = DateRangeBinder::init(&mut doc, &june_first());

        doc.set_value(start, "2024-06-10");
        let outcome = binding.handle_change(&mut doc, start);

        assert_eq!(outcome, ChangeOutcome::EndAdjusted);
        assert_eq!(doc.value(end), "2024-06-10");
        assert_eq!(doc.min(end), "2024-06-10");
    }

    #[test]
    fn test_end_after_start_is_kept() {
        let (mut doc, start, end) = booking_form("", "2024-06-20");
        let binding = DateRangeBinder::init(&mut doc, &june_first());

        doc.set_value(start, "2024-06-10");
        assert_eq!(binding.handle_change(&mut doc, start), ChangeOutcome::MinUpdated);
        assert_eq!(doc.value(end), "2024-06-20");
        assert_eq!(doc.min(end), "2024-06-10");
    }

    #[test]
    fn test_empty_end_only_gets_min() {
        let (mut doc, start, end) = booking_form("", "");
        let binding = DateRangeBinder::init(&mut doc, &june_first());

        doc.set_value(start, "2024-06-10");
        assert_eq!(binding.handle_change(&mut doc, start), ChangeOutcome::MinUpdated);
        assert_eq!(doc.value(end), "");
        assert_eq!(doc.min(end), "2024-06-10");
    }

    #[test]
    fn test_missing_form_or_end_input_is_noop() {
        let mut doc = MemoryDocument::new();
        let loose = doc.add_input(None, START_DATE_FIELD, "");
        let form = doc.add_form("search");
        let lonely = doc.add_input(Some(form), START_DATE_FIELD, "");
        let binding = DateRangeBinder::init(&mut doc, &june_first());

        doc.set_value(loose, "2024-06-10");
        assert_eq!(binding.handle_change(&mut doc, loose), ChangeOutcome::NoForm);

        doc.set_value(lonely, "2024-06-10");
        assert_eq!(binding.handle_change(&mut doc, lonely), ChangeOutcome::NoEndInput);
    }

    #[test]
    fn test_unbound_input_is_ignored() {
        let (mut doc, _, end) = booking_form("", "2024-06-05");
        let binding = DateRangeBinder::init(&mut doc, &june_first());

        assert_eq!(binding.handle_change(&mut doc, end), ChangeOutcome::Ignored);
        assert_eq!(doc.min(end), "");
    }

    #[test]
    fn test_forms_are_independent() {
        let (mut doc, first_start, first_end) = booking_form("", "2024-06-02");
        let other = doc.add_form("edit");
        let second_start = doc.add_input(Some(other), START_DATE_FIELD, "2024-06-01");
        let second_end = doc.add_input(Some(other), END_DATE_FIELD, "2024-06-03");
        let binding = DateRangeBinder::init(&mut doc, &june_first());

        doc.set_value(first_start, "2024-06-04");
        binding.handle_change(&mut doc, first_start);

        assert_eq!(doc.value(first_end), "2024-06-04");
        assert_eq!(doc.value(second_end), "2024-06-03");
        assert_eq!(doc.min(second_end), "");
        assert!(binding.is_bound(second_start));
    }
}
