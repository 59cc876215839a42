//! Domain value types for the holiday engine.
//!
//! This module contains the calendar date abstraction every rule consumes,
//! the verdict the engine produces, and the key formats used by listings.

mod calendar_date;
mod date_key;
mod verdict;

pub use calendar_date::{CalendarDate, JST_OFFSET_SECONDS, UNIX_EPOCH_JULIAN_DAY, jst};
pub use date_key::{DateKey, KeyFormat};
pub use verdict::Verdict;
