pub mod clock;
pub mod document;
pub mod locale;

pub use clock::{FixedClock, SystemClock};
pub use document::MemoryDocument;
pub use locale::UsLocale;
