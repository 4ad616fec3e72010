use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Handle to an `<input>` element inside a [`Document`](super::ports::Document).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InputId(pub usize);

/// Handle to a `<form>` element inside a [`Document`](super::ports::Document).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FormId(pub usize);

/// Which calendar "today" and zoned timestamps are resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeZoneChoice {
    #[default]
    Local,
    Utc,
}

/// Start and end of a rental, both resolved to naive UTC date-times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentalPeriod {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// What a start-date change event did to its form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeOutcome {
    /// The input is not a bound start-date input.
    Ignored,
    /// The start input has no enclosing form.
    NoForm,
    /// The enclosing form has no end-date input.
    NoEndInput,
    /// The end input's minimum now follows the start date.
    MinUpdated,
    /// The end date preceded the start date and was moved onto it.
    EndAdjusted,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RentalQuote {
    pub start: String,
    pub end: String,
    pub days: i64,
    pub daily_rate: f64,
    pub total: f64,
    pub formatted_rate: String,
    pub formatted_total: String,
}

/// A page described as data: its forms, inputs that sit outside any form,
/// and change events to replay against it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageFixture {
    #[serde(default)]
    pub forms: Vec<FormFixture>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub loose_inputs: Vec<InputFixture>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<ChangeEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormFixture {
    pub id: String,
    #[serde(default)]
    pub inputs: Vec<InputFixture>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputFixture {
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub min: String,
}

/// The user typing `value` into the input `name`, in `form` or, when `form`
/// is absent, among the loose inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeEvent {
    #[serde(default)]
    pub form: Option<String>,
    pub name: String,
    pub value: String,
}

impl InputFixture {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            min: String::new(),
        }
    }
}
