//! The closed set of base rule categories behind one evaluation interface.

use std::collections::BTreeMap;

use crate::config::{DateMoveRule, EquinoxConfig, FixedHolidayRule, FloatingMondayRule};
use crate::error::EngineResult;
use crate::models::CalendarDate;

use super::{equinox_holiday_name, fixed_holiday_name, floating_monday_name, specified_move};

/// The outcome of evaluating one rule category against one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleMatch<'a> {
    /// The date is a holiday with this name.
    Holiday(&'a str),
    /// A one-year date move strips this date of its usual holiday status.
    Removed,
    /// The rule category says nothing about this date.
    NoMatch,
}

impl<'a> From<Option<&'a str>> for RuleMatch<'a> {
    fn from(name: Option<&'a str>) -> Self {
        name.map_or(RuleMatch::NoMatch, RuleMatch::Holiday)
    }
}

/// A rule category bound to its rule records.
///
/// # Example
///
/// ```
/// use holiday_jp::config::FixedHolidayRule;
/// use holiday_jp::models::CalendarDate;
/// use holiday_jp::rules::{RuleEvaluator, RuleMatch};
///
/// let rules = vec![FixedHolidayRule {
///     month: 11,
///     day: 3,
///     name: "文化の日".to_string(),
///     valid_from_year: 1948,
///     valid_to_year: 9999,
/// }];
/// let date = CalendarDate::from_ymd(2019, 11, 3).unwrap();
/// let verdict = RuleEvaluator::Fixed(&rules).evaluate(&date).unwrap();
/// assert_eq!(verdict, RuleMatch::Holiday("文化の日"));
/// ```
#[derive(Debug, Clone, Copy)]
pub enum RuleEvaluator<'a> {
    /// Same month and day every year.
    Fixed(&'a [FixedHolidayRule]),
    /// Nth Monday of a month.
    FloatingMonday(&'a [FloatingMondayRule]),
    /// Vernal and autumnal equinox days.
    Equinox(&'a EquinoxConfig),
    /// One-year legislated relocations, keyed by year.
    SpecifiedMove(&'a BTreeMap<i32, Vec<DateMoveRule>>),
}

impl<'a> RuleEvaluator<'a> {
    /// Evaluates this rule category for `date`.
    ///
    /// Only the equinox category can fail, when its table does not cover the
    /// date's year.
    pub fn evaluate(&self, date: &CalendarDate) -> EngineResult<RuleMatch<'a>> {
        Ok(match *self {
            RuleEvaluator::Fixed(rules) => fixed_holiday_name(date, rules).into(),
            RuleEvaluator::FloatingMonday(rules) => floating_monday_name(date, rules).into(),
            RuleEvaluator::Equinox(tables) => equinox_holiday_name(date, tables)?.into(),
            RuleEvaluator::SpecifiedMove(moves) => specified_move(date, moves),
        })
    }

    /// Short name of the rule category, used in logs.
    pub fn category(&self) -> &'static str {
        match self {
            RuleEvaluator::Fixed(_) => "fixed",
            RuleEvaluator::FloatingMonday(_) => "floating_monday",
            RuleEvaluator::Equinox(_) => "equinox",
            RuleEvaluator::SpecifiedMove(_) => "specified_move",
        }
    }
}
