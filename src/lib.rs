//! Japanese Public Holiday Engine
//!
//! This crate decides whether a calendar date is a Japanese national holiday
//! and, if so, which one. Rules are loaded from YAML configuration (a copy
//! ships inside the crate) and cover fixed-date holidays, "happy Monday"
//! holidays, equinox days, one-year date moves, substitute holidays and gap
//! holidays.

#![warn(missing_docs)]

pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod rules;

pub use engine::{HolidayCalendar, HolidayMap};
pub use error::{EngineError, EngineResult};
pub use models::{CalendarDate, DateKey, KeyFormat, Verdict};
