//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading holiday rule
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{
    AdditionalHolidayRule, CalendarMetadata, EquinoxConfig, FixedHolidayRule,
    FloatingMondayRule, HolidayList, RuleStore, SpecifiedMovesConfig,
};

const CALENDAR_FILE: &str = "calendar.yaml";
const FIXED_FILE: &str = "fixed_holidays.yaml";
const HAPPY_MONDAY_FILE: &str = "happy_mondays.yaml";
const EQUINOX_FILE: &str = "equinox.yaml";
const SPECIFIED_MOVES_FILE: &str = "specified_moves.yaml";
const ADDITIONAL_FILE: &str = "additional_holidays.yaml";

/// Raw YAML text for each rule category.
struct Sources<'a> {
    calendar: &'a str,
    fixed: &'a str,
    happy_mondays: &'a str,
    equinox: &'a str,
    specified_moves: &'a str,
    additional: &'a str,
}

const BUNDLED: Sources<'static> = Sources {
    calendar: include_str!("../../config/jp/calendar.yaml"),
    fixed: include_str!("../../config/jp/fixed_holidays.yaml"),
    happy_mondays: include_str!("../../config/jp/happy_mondays.yaml"),
    equinox: include_str!("../../config/jp/equinox.yaml"),
    specified_moves: include_str!("../../config/jp/specified_moves.yaml"),
    additional: include_str!("../../config/jp/additional_holidays.yaml"),
};

/// Loads and provides access to a holiday rule store.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/jp/
/// ├── calendar.yaml             # Calendar metadata and derived-rule labels
/// ├── fixed_holidays.yaml       # Same month/day every year
/// ├── happy_mondays.yaml        # Nth Monday of a month
/// ├── equinox.yaml              # Vernal/autumnal equinox constants
/// ├── specified_moves.yaml      # One-year legislated relocations
/// └── additional_holidays.yaml  # Closure periods outside the cascade
/// ```
///
/// # Example
///
/// ```no_run
/// use holiday_jp::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/jp").unwrap();
/// println!("Loaded calendar: {}", loader.metadata().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    store: RuleStore,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or is missing a field (`ConfigParseError`)
    /// - Any record fails validation (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let calendar = Self::read(&path.join(CALENDAR_FILE))?;
        let fixed = Self::read(&path.join(FIXED_FILE))?;
        let happy_mondays = Self::read(&path.join(HAPPY_MONDAY_FILE))?;
        let equinox = Self::read(&path.join(EQUINOX_FILE))?;
        let specified_moves = Self::read(&path.join(SPECIFIED_MOVES_FILE))?;
        let additional = Self::read(&path.join(ADDITIONAL_FILE))?;

        let sources = Sources {
            calendar: &calendar,
            fixed: &fixed,
            happy_mondays: &happy_mondays,
            equinox: &equinox,
            specified_moves: &specified_moves,
            additional: &additional,
        };
        Self::from_sources(&path.display().to_string(), &sources)
    }

    /// Loads the Japanese rule data compiled into the library.
    pub fn bundled() -> EngineResult<Self> {
        Self::from_sources("bundled", &BUNDLED)
    }

    fn from_sources(origin: &str, sources: &Sources<'_>) -> EngineResult<Self> {
        let source_name = |file: &str| format!("{origin}/{file}");

        let metadata: CalendarMetadata =
            Self::parse_yaml(&source_name(CALENDAR_FILE), sources.calendar)?;
        let fixed: HolidayList<FixedHolidayRule> =
            Self::parse_yaml(&source_name(FIXED_FILE), sources.fixed)?;
        let happy_mondays: HolidayList<FloatingMondayRule> =
            Self::parse_yaml(&source_name(HAPPY_MONDAY_FILE), sources.happy_mondays)?;
        let equinox: EquinoxConfig = Self::parse_yaml(&source_name(EQUINOX_FILE), sources.equinox)?;
        let specified_moves: SpecifiedMovesConfig =
            Self::parse_yaml(&source_name(SPECIFIED_MOVES_FILE), sources.specified_moves)?;
        let additional: HolidayList<AdditionalHolidayRule> =
            Self::parse_yaml(&source_name(ADDITIONAL_FILE), sources.additional)?;

        let store = RuleStore::new(
            metadata,
            fixed.holidays,
            happy_mondays.holidays,
            equinox,
            specified_moves.moves,
            additional.holidays,
        )?;

        info!(
            origin,
            calendar = %store.metadata().code,
            version = %store.metadata().version,
            fixed = store.fixed().len(),
            happy_mondays = store.floating_mondays().len(),
            specified_move_years = store.specified_moves().len(),
            additional = store.additional().len(),
            "Loaded holiday rule store"
        );

        Ok(Self { store })
    }

    /// Reads a configuration file into memory.
    fn read(path: &Path) -> EngineResult<String> {
        fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path.display().to_string(),
        })
    }

    /// Parses YAML text into a configuration type.
    fn parse_yaml<T: DeserializeOwned>(path: &str, content: &str) -> EngineResult<T> {
        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the loaded rule store.
    pub fn store(&self) -> &RuleStore {
        &self.store
    }

    /// Consumes the loader, returning the rule store.
    pub fn into_store(self) -> RuleStore {
        self.store
    }

    /// Returns the calendar metadata.
    pub fn metadata(&self) -> &CalendarMetadata {
        self.store.metadata()
    }
}
