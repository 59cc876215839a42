//! The holiday cascade.
//!
//! [`HolidayCalendar`] combines the rule evaluators into one verdict per
//! date:
//!
//! 1. One-year date moves. A relocated date is final; a date a holiday was
//!    moved away from skips step 2.
//! 2. Fixed holidays, then equinox holidays, then floating Mondays.
//! 3. Substitute holidays.
//! 4. Gap holidays.
//!
//! Steps 3 and 4 run even for a date suppressed in step 1.

use std::path::Path;

use tracing::{debug, trace};

use crate::config::{ConfigLoader, RuleStore};
use crate::error::EngineResult;
use crate::models::{CalendarDate, Verdict};
use crate::rules::{
    RuleEvaluator, RuleMatch, additional_holiday_name, is_gap_holiday, is_substitute_holiday,
};

/// A Japanese holiday calendar backed by an immutable rule store.
///
/// The calendar holds no mutable state, so one instance can be shared
/// between threads and queried concurrently.
///
/// # Example
///
/// ```
/// use holiday_jp::HolidayCalendar;
/// use holiday_jp::models::Verdict;
///
/// let calendar = HolidayCalendar::bundled().unwrap();
/// assert_eq!(
///     calendar.holiday_name_from_str("2019-05-06").unwrap(),
///     Verdict::holiday("振替休日")
/// );
/// assert_eq!(
///     calendar.holiday_name_from_str("2019-05-07").unwrap(),
///     Verdict::NotHoliday
/// );
/// ```
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    store: RuleStore,
}

impl HolidayCalendar {
    /// Creates a calendar from an already validated rule store.
    pub fn new(store: RuleStore) -> Self {
        Self { store }
    }

    /// Loads the rule store from a configuration directory.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        Ok(Self::new(ConfigLoader::load(path)?.into_store()))
    }

    /// Builds a calendar from the rule data compiled into the library.
    pub fn bundled() -> EngineResult<Self> {
        Ok(Self::new(ConfigLoader::bundled()?.into_store()))
    }

    /// Returns the rule store.
    pub fn store(&self) -> &RuleStore {
        &self.store
    }

    /// Classifies `date` as a named holiday or an ordinary day.
    ///
    /// Fails only when an equinox table does not cover the date's year.
    pub fn holiday_name(&self, date: &CalendarDate) -> EngineResult<Verdict> {
        let verdict = self.evaluate(date)?;
        trace!(date = %date, verdict = %verdict, "Evaluated date");
        Ok(verdict)
    }

    fn evaluate(&self, date: &CalendarDate) -> EngineResult<Verdict> {
        let moves = RuleEvaluator::SpecifiedMove(self.store.specified_moves());
        let suppressed = match moves.evaluate(date)? {
            RuleMatch::Holiday(name) => return Ok(Verdict::holiday(name)),
            RuleMatch::Removed => {
                debug!(date = %date, "Holiday moved away from this date");
                true
            }
            RuleMatch::NoMatch => false,
        };

        if !suppressed {
            for evaluator in self.base_rules() {
                if let RuleMatch::Holiday(name) = evaluator.evaluate(date)? {
                    trace!(date = %date, category = evaluator.category(), "Base rule matched");
                    return Ok(Verdict::holiday(name));
                }
            }
        }

        let labels = self.store.labels();
        if is_substitute_holiday(date, self.store.fixed()) {
            return Ok(Verdict::holiday(&labels.substitute_holiday));
        }
        if is_gap_holiday(date, self.store.fixed()) {
            return Ok(Verdict::holiday(&labels.national_holiday));
        }
        Ok(Verdict::NotHoliday)
    }

    /// Base rule categories in priority order.
    fn base_rules(&self) -> [RuleEvaluator<'_>; 3] {
        [
            RuleEvaluator::Fixed(self.store.fixed()),
            RuleEvaluator::Equinox(self.store.equinox()),
            RuleEvaluator::FloatingMonday(self.store.floating_mondays()),
        ]
    }

    /// Returns `true` if `date` is a holiday.
    pub fn is_holiday(&self, date: &CalendarDate) -> EngineResult<bool> {
        Ok(self.holiday_name(date)?.is_holiday())
    }

    /// Parses `date` (`YYYY-MM-DD`, `YYYY/MM/DD` or `YYYYMMDD`) and classifies it.
    pub fn holiday_name_from_str(&self, date: &str) -> EngineResult<Verdict> {
        self.holiday_name(&CalendarDate::parse(date)?)
    }

    /// Classifies the Tokyo date containing a Unix timestamp.
    pub fn holiday_name_from_timestamp(&self, timestamp: i64) -> EngineResult<Verdict> {
        self.holiday_name(&CalendarDate::from_timestamp(timestamp)?)
    }

    /// Classifies the Tokyo date containing a Julian day.
    pub fn holiday_name_from_julian_day(&self, julian_day: f64) -> EngineResult<Verdict> {
        self.holiday_name(&CalendarDate::from_julian_day(julian_day)?)
    }

    /// Returns the additional closure period covering `date`, if any.
    ///
    /// Closure periods are independent of [`holiday_name`](Self::holiday_name).
    pub fn additional_holiday_name(&self, date: &CalendarDate) -> Option<&str> {
        additional_holiday_name(date, self.store.additional())
    }
}
