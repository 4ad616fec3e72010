//! Drives a [`PageFixture`] through the binder the way a browser would:
//! page load first, then each change event in order.

use crate::adapters::MemoryDocument;
use crate::core::binder::DateRangeBinder;
use crate::domain::model::{ChangeEvent, ChangeOutcome, PageFixture};
use crate::domain::ports::{Clock, Document};
use crate::utils::error::{RentalError, Result};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventReport {
    #[serde(flatten)]
    pub event: ChangeEvent,
    pub outcome: ChangeOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub events: Vec<EventReport>,
    pub page: PageFixture,
}

pub fn replay_page<C: Clock + ?Sized>(fixture: &PageFixture, clock: &C) -> Result<ReplayReport> {
    let mut document = MemoryDocument::from_fixture(fixture)?;
    let binding = DateRangeBinder::init(&mut document, clock);

    let mut events = Vec::with_capacity(fixture.events.len());
    for event in &fixture.events {
        let input = document
            .find_input(event.form.as_deref(), &event.name)
            .ok_or_else(|| RentalError::PageError {
                message: format!(
                    "change event targets unknown input '{}' in {}",
                    event.name,
                    event.form.as_deref().map_or("no form".to_string(), |f| format!("form '{}'", f))
                ),
            })?;

        document.set_value(input, &event.value);
        let outcome = binding.handle_change(&mut document, input);
        tracing::debug!("{} <- {}: {:?}", event.name, event.value, outcome);

        events.push(EventReport {
            event: event.clone(),
            outcome,
        });
    }

    Ok(ReplayReport {
        events,
        page: document.to_fixture(),
    })
}
