use crate::domain::model::TimeZoneChoice;
use crate::domain::ports::Clock;
use chrono::{Local, NaiveDate, Utc};

/// Reads today's date from the runtime clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    time_zone: TimeZoneChoice,
}

impl SystemClock {
    pub fn new(time_zone: TimeZoneChoice) -> Self {
        Self { time_zone }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        match self.time_zone {
            TimeZoneChoice::Local => Local::now().date_naive(),
            TimeZoneChoice::Utc => Utc::now().date_naive(),
        }
    }
}

/// A clock pinned to one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
