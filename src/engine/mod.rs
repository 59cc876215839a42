//! Holiday determination.
//!
//! [`HolidayCalendar`] answers single-date queries and lists verdicts over
//! ranges, months and years.

mod calendar;
mod range;

pub use calendar::HolidayCalendar;
pub use range::{DateRange, HolidayMap};
