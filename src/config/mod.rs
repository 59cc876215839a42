//! Configuration loading and management for the holiday engine.
//!
//! This module provides functionality to load holiday rule configurations
//! from YAML files: calendar metadata, fixed-date holidays, floating-Monday
//! holidays, equinox constants, one-year date moves and additional closure
//! periods.
//!
//! # Example
//!
//! ```no_run
//! use holiday_jp::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/jp").unwrap();
//! println!("Loaded calendar: {}", config.metadata().name);
//! ```

mod loader;
mod types;

#[cfg(test)]
pub(crate) use types::test_support;

pub use loader::ConfigLoader;
pub use types::{
    AdditionalHolidayRule, CalendarMetadata, DEFAULT_NATIONAL_HOLIDAY_NAME,
    DEFAULT_SUBSTITUTE_HOLIDAY_NAME, DateMoveRule, DerivedLabels, EquinoxConfig, EquinoxTable,
    FixedHolidayRule, FloatingMondayRule, HolidayList, MonthDay, RuleStore, SpecifiedMovesConfig,
};
