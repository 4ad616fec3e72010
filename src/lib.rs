pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::AppConfig;

pub use adapters::{FixedClock, MemoryDocument, SystemClock, UsLocale};
pub use core::binder::{DateRangeBinder, DateRangeBinding};
pub use core::formatting::{calculate_rental_days, format_currency, format_date, Formatter};
pub use core::replay::{replay_page, ReplayReport};
pub use domain::model::{ChangeOutcome, PageFixture, RentalQuote};
pub use utils::error::{RentalError, Result};
