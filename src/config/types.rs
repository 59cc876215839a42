//! Configuration types for holiday determination.
//!
//! This module contains the strongly-typed rule records that are
//! deserialized from YAML configuration files, and the [`RuleStore`] that
//! holds them for the lifetime of an engine.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Default label for substitute holidays.
pub const DEFAULT_SUBSTITUTE_HOLIDAY_NAME: &str = "振替休日";

/// Default label for gap ("national") holidays.
pub const DEFAULT_NATIONAL_HOLIDAY_NAME: &str = "国民の休日";

/// Metadata about the holiday calendar.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarMetadata {
    /// Short code of the calendar (e.g., "JP").
    pub code: String,
    /// The human-readable name of the calendar.
    pub name: String,
    /// The version of the rule data.
    pub version: String,
    /// URL of the authoritative holiday list.
    pub source_url: String,
    /// Labels for the derived holiday rules.
    #[serde(default)]
    pub labels: DerivedLabels,
}

/// Names reported by the two derived rules.
#[derive(Debug, Clone, Deserialize)]
pub struct DerivedLabels {
    /// Label for a substitute holiday.
    #[serde(default = "default_substitute_holiday")]
    pub substitute_holiday: String,
    /// Label for a gap holiday.
    #[serde(default = "default_national_holiday")]
    pub national_holiday: String,
}

fn default_substitute_holiday() -> String {
    DEFAULT_SUBSTITUTE_HOLIDAY_NAME.to_string()
}

fn default_national_holiday() -> String {
    DEFAULT_NATIONAL_HOLIDAY_NAME.to_string()
}

impl Default for DerivedLabels {
    fn default() -> Self {
        Self {
            substitute_holiday: default_substitute_holiday(),
            national_holiday: default_national_holiday(),
        }
    }
}

/// A holiday pinned to the same month and day every year of its window.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FixedHolidayRule {
    /// Month, 1 through 12.
    pub month: u32,
    /// Day of month.
    pub day: u32,
    /// Holiday name.
    pub name: String,
    /// First year the rule applies.
    pub valid_from_year: i32,
    /// Last year the rule applies (use 9999 while still in effect).
    pub valid_to_year: i32,
}

/// A holiday on the Nth Monday of a month ("happy Monday").
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FloatingMondayRule {
    /// Month, 1 through 12.
    pub month: u32,
    /// Which Monday of the month, starting at 1.
    pub week: u32,
    /// Holiday name.
    pub name: String,
    /// First year the rule applies.
    pub valid_from_year: i32,
    /// Last year the rule applies.
    pub valid_to_year: i32,
}

/// Constants for one equinox approximation.
///
/// Each key in `constants` is the last year its value applies to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EquinoxTable {
    /// Holiday name reported on the equinox day.
    pub name: String,
    /// First year the table covers.
    pub valid_from_year: i32,
    /// Last covered year -> constant.
    pub constants: BTreeMap<i32, f64>,
}

/// Vernal and autumnal equinox tables.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EquinoxConfig {
    /// March equinox.
    pub vernal: EquinoxTable,
    /// September equinox.
    pub autumnal: EquinoxTable,
}

/// A month and day without a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MonthDay {
    /// Month, 1 through 12.
    pub month: u32,
    /// Day of month.
    pub day: u32,
}

/// A one-year legislative relocation of a holiday.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DateMoveRule {
    /// Month of the relocated holiday.
    pub month: u32,
    /// Day of the relocated holiday.
    pub day: u32,
    /// Holiday name on the relocated date.
    pub name: String,
    /// The date that loses its holiday status that year.
    pub original: MonthDay,
}

/// An arbitrary closure period such as company summer or new-year holidays.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AdditionalHolidayRule {
    /// First day of the period.
    pub from_date: NaiveDate,
    /// Last day of the period; the period is a single day when absent.
    #[serde(default)]
    pub to_date: Option<NaiveDate>,
    /// Holiday name.
    pub name: String,
}

impl AdditionalHolidayRule {
    /// Returns the last day of the period.
    pub fn last_date(&self) -> NaiveDate {
        self.to_date.unwrap_or(self.from_date)
    }
}

/// `fixed_holidays.yaml` / `happy_mondays.yaml` / `additional_holidays.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct HolidayList<T> {
    /// Rules in declaration order.
    #[serde(default)]
    pub holidays: Vec<T>,
}

/// `specified_moves.yaml` structure.
#[derive(Debug, Clone, Deserialize)]
pub struct SpecifiedMovesConfig {
    /// Legislation year -> relocations for that year.
    #[serde(default)]
    pub moves: BTreeMap<i32, Vec<DateMoveRule>>,
}

/// The complete, validated rule set for one holiday calendar.
///
/// A `RuleStore` is immutable once built. [`RuleStore::new`] validates every
/// record and refuses to build a partial store.
#[derive(Debug, Clone)]
pub struct RuleStore {
    metadata: CalendarMetadata,
    fixed: Vec<FixedHolidayRule>,
    floating_mondays: Vec<FloatingMondayRule>,
    equinox: EquinoxConfig,
    specified_moves: BTreeMap<i32, Vec<DateMoveRule>>,
    additional: Vec<AdditionalHolidayRule>,
}

impl RuleStore {
    /// Creates a new rule store from its component parts.
    ///
    /// Returns `InvalidConfig` if any record is unusable.
    pub fn new(
        metadata: CalendarMetadata,
        fixed: Vec<FixedHolidayRule>,
        floating_mondays: Vec<FloatingMondayRule>,
        equinox: EquinoxConfig,
        specified_moves: BTreeMap<i32, Vec<DateMoveRule>>,
        additional: Vec<AdditionalHolidayRule>,
    ) -> EngineResult<Self> {
        validate_labels(&metadata.labels)?;
        for rule in &fixed {
            validate_month_day(FIXED_SOURCE, rule.month, rule.day)?;
            validate_window(FIXED_SOURCE, &rule.name, rule.valid_from_year, rule.valid_to_year)?;
        }
        for rule in &floating_mondays {
            validate_month_day(FLOATING_SOURCE, rule.month, 1)?;
            if !(1..=5).contains(&rule.week) {
                return Err(invalid(
                    FLOATING_SOURCE,
                    format!("week {} of '{}' is not between 1 and 5", rule.week, rule.name),
                ));
            }
            validate_window(
                FLOATING_SOURCE,
                &rule.name,
                rule.valid_from_year,
                rule.valid_to_year,
            )?;
        }
        validate_equinox_table("vernal", &equinox.vernal)?;
        validate_equinox_table("autumnal", &equinox.autumnal)?;
        for rule in specified_moves.values().flatten() {
            validate_month_day(MOVES_SOURCE, rule.month, rule.day)?;
            validate_month_day(MOVES_SOURCE, rule.original.month, rule.original.day)?;
            validate_name(MOVES_SOURCE, &rule.name)?;
        }
        for rule in &additional {
            validate_name(ADDITIONAL_SOURCE, &rule.name)?;
            if rule.last_date() < rule.from_date {
                return Err(invalid(
                    ADDITIONAL_SOURCE,
                    format!(
                        "'{}' ends on {} before it starts on {}",
                        rule.name,
                        rule.last_date(),
                        rule.from_date
                    ),
                ));
            }
        }

        Ok(Self {
            metadata,
            fixed,
            floating_mondays,
            equinox,
            specified_moves,
            additional,
        })
    }

    /// Returns the calendar metadata.
    pub fn metadata(&self) -> &CalendarMetadata {
        &self.metadata
    }

    /// Returns the derived-rule labels.
    pub fn labels(&self) -> &DerivedLabels {
        &self.metadata.labels
    }

    /// Returns the fixed-date rules in declaration order.
    pub fn fixed(&self) -> &[FixedHolidayRule] {
        &self.fixed
    }

    /// Returns the floating-Monday rules in declaration order.
    pub fn floating_mondays(&self) -> &[FloatingMondayRule] {
        &self.floating_mondays
    }

    /// Returns the equinox tables.
    pub fn equinox(&self) -> &EquinoxConfig {
        &self.equinox
    }

    /// Returns all date moves keyed by legislation year.
    pub fn specified_moves(&self) -> &BTreeMap<i32, Vec<DateMoveRule>> {
        &self.specified_moves
    }

    /// Returns the additional closure periods in declaration order.
    pub fn additional(&self) -> &[AdditionalHolidayRule] {
        &self.additional
    }
}

const FIXED_SOURCE: &str = "fixed_holidays";
const FLOATING_SOURCE: &str = "happy_mondays";
const EQUINOX_SOURCE: &str = "equinox";
const MOVES_SOURCE: &str = "specified_moves";
const ADDITIONAL_SOURCE: &str = "additional_holidays";

fn invalid(source_name: &str, message: String) -> EngineError {
    EngineError::InvalidConfig {
        source_name: source_name.to_string(),
        message,
    }
}

fn validate_name(source_name: &str, name: &str) -> EngineResult<()> {
    if name.trim().is_empty() {
        return Err(invalid(source_name, "holiday name is empty".to_string()));
    }
    Ok(())
}

fn validate_labels(labels: &DerivedLabels) -> EngineResult<()> {
    validate_name("calendar", &labels.substitute_holiday)?;
    validate_name("calendar", &labels.national_holiday)
}

// 2000 is a leap year, so 02-29 is accepted.
fn validate_month_day(source_name: &str, month: u32, day: u32) -> EngineResult<()> {
    if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
        return Err(invalid(
            source_name,
            format!("{month:02}-{day:02} is not a valid month and day"),
        ));
    }
    Ok(())
}

fn validate_window(source_name: &str, name: &str, from: i32, to: i32) -> EngineResult<()> {
    validate_name(source_name, name)?;
    if from > to {
        return Err(invalid(
            source_name,
            format!("'{name}' is valid from {from} but ends in {to}"),
        ));
    }
    Ok(())
}

fn validate_equinox_table(table: &str, config: &EquinoxTable) -> EngineResult<()> {
    validate_name(EQUINOX_SOURCE, &config.name)?;
    match config.constants.last_key_value() {
        None => Err(invalid(
            EQUINOX_SOURCE,
            format!("{table} table has no constants"),
        )),
        Some((&last, _)) if last < config.valid_from_year => Err(invalid(
            EQUINOX_SOURCE,
            format!(
                "{table} table ends in {last} before it starts in {}",
                config.valid_from_year
            ),
        )),
        Some(_) => Ok(()),
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    fn expect_invalid(result: EngineResult<RuleStore>, expected_source: &str) {
        match result {
            Err(EngineError::InvalidConfig { source_name, .. }) => {
                assert_eq!(source_name, expected_source);
            }
            other => panic!("Expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_store_builds() {
        let store = store_with(
            vec![fixed(1, 1, "元日", 1949, 9999)],
            vec![monday(1, 2, "成人の日", 2000, 9999)],
            BTreeMap::new(),
        );
        assert_eq!(store.fixed().len(), 1);
        assert_eq!(store.floating_mondays().len(), 1);
        assert_eq!(store.labels().substitute_holiday, "振替休日");
        assert_eq!(store.labels().national_holiday, "国民の休日");
    }

    #[test]
    fn test_holiday_list_deserializes_records_without_default() {
        let list: HolidayList<FixedHolidayRule> = serde_yaml::from_str(
            "holidays:\n  - { month: 1, day: 1, name: 元日, valid_from_year: 1949, valid_to_year: 9999 }\n",
        )
        .unwrap();
        assert_eq!(list.holidays.len(), 1);
        assert_eq!(list.holidays[0].name, "元日");

        let empty: HolidayList<AdditionalHolidayRule> = serde_yaml::from_str("{}").unwrap();
        assert!(empty.holidays.is_empty());
    }

    #[test]
    fn test_rejects_impossible_month_day() {
        let result = RuleStore::new(
            metadata(),
            vec![fixed(2, 30, "bad", 2000, 2000)],
            vec![],
            equinox(),
            BTreeMap::new(),
            vec![],
        );
        expect_invalid(result, "fixed_holidays");
    }

    #[test]
    fn test_accepts_leap_day() {
        let result = RuleStore::new(
            metadata(),
            vec![fixed(2, 29, "leap", 2000, 2000)],
            vec![],
            equinox(),
            BTreeMap::new(),
            vec![],
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_rejects_inverted_window() {
        let result = RuleStore::new(
            metadata(),
            vec![fixed(1, 1, "元日", 2000, 1999)],
            vec![],
            equinox(),
            BTreeMap::new(),
            vec![],
        );
        expect_invalid(result, "fixed_holidays");
    }

    #[test]
    fn test_rejects_week_out_of_range() {
        let result = RuleStore::new(
            metadata(),
            vec![],
            vec![monday(1, 6, "bad", 2000, 9999)],
            equinox(),
            BTreeMap::new(),
            vec![],
        );
        expect_invalid(result, "happy_mondays");
    }

    #[test]
    fn test_rejects_empty_equinox_table() {
        let mut tables = equinox();
        tables.autumnal.constants.clear();
        let result = RuleStore::new(metadata(), vec![], vec![], tables, BTreeMap::new(), vec![]);
        expect_invalid(result, "equinox");
    }

    #[test]
    fn test_rejects_empty_name() {
        let result = RuleStore::new(
            metadata(),
            vec![fixed(1, 1, "  ", 1949, 9999)],
            vec![],
            equinox(),
            BTreeMap::new(),
            vec![],
        );
        expect_invalid(result, "fixed_holidays");
    }

    #[test]
    fn test_rejects_bad_move_original() {
        let moves = BTreeMap::from([(2020, vec![date_move((7, 23), "海の日", (7, 32))])]);
        let result = RuleStore::new(metadata(), vec![], vec![], equinox(), moves, vec![]);
        expect_invalid(result, "specified_moves");
    }

    #[test]
    fn test_rejects_reversed_additional_period() {
        let additional = vec![AdditionalHolidayRule {
            from_date: NaiveDate::from_ymd_opt(2020, 1, 3).unwrap(),
            to_date: NaiveDate::from_ymd_opt(2019, 12, 29),
            name: "年末年始休暇".to_string(),
        }];
        let result = RuleStore::new(
            metadata(),
            vec![],
            vec![],
            equinox(),
            BTreeMap::new(),
            additional,
        );
        expect_invalid(result, "additional_holidays");
    }

    #[test]
    fn test_labels_default_when_missing_from_yaml() {
        let metadata: CalendarMetadata = serde_yaml::from_str(
            "code: JP\nname: Japan\nversion: '2020'\nsource_url: https://example.com\n",
        )
        .unwrap();
        assert_eq!(metadata.labels.substitute_holiday, "振替休日");
        assert_eq!(metadata.labels.national_holiday, "国民の休日");
    }
}
