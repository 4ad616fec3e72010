pub mod binder;
pub mod formatting;
pub mod quote;
pub mod replay;

pub use crate::domain::model::{ChangeOutcome, RentalPeriod, RentalQuote};
pub use crate::domain::ports::{Clock, Document, LocaleFormatter};
pub use crate::utils::error::Result;
