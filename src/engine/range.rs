//! Holiday listings over date ranges.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{CalendarDate, DateKey, KeyFormat, Verdict};

use super::HolidayCalendar;

/// Verdicts keyed by date, in ascending date order.
pub type HolidayMap = BTreeMap<DateKey, Verdict>;

/// Iterator over every date from `start` to `end` inclusive.
///
/// Yields nothing when `start` is after `end`.
#[derive(Debug, Clone)]
pub struct DateRange {
    next: Option<CalendarDate>,
    end: CalendarDate,
}

impl DateRange {
    /// Creates an inclusive range.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Self {
        let next = (start <= end).then_some(start);
        Self { next, end }
    }
}

impl Iterator for DateRange {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.add_days(1).filter(|next| *next <= self.end);
        Some(current)
    }
}

impl HolidayCalendar {
    /// Classifies every date from `start` to `end` inclusive.
    ///
    /// With `only_holidays` the map holds holidays only. An inverted range
    /// yields an empty map.
    pub fn holidays_in_range(
        &self,
        start: &CalendarDate,
        end: &CalendarDate,
        key_format: KeyFormat,
        only_holidays: bool,
    ) -> EngineResult<HolidayMap> {
        let mut holidays = HolidayMap::new();
        for date in DateRange::new(*start, *end) {
            let verdict = self.holiday_name(&date)?;
            if only_holidays && !verdict.is_holiday() {
                continue;
            }
            holidays.insert(key_format.key_for(&date), verdict);
        }

        debug!(
            start = %start,
            end = %end,
            entries = holidays.len(),
            only_holidays,
            "Listed holidays in range"
        );
        Ok(holidays)
    }

    /// Like [`holidays_in_range`](Self::holidays_in_range), with string bounds.
    pub fn holidays_in_range_from_str(
        &self,
        start: &str,
        end: &str,
        key_format: KeyFormat,
        only_holidays: bool,
    ) -> EngineResult<HolidayMap> {
        let start = CalendarDate::parse(start)?;
        let end = CalendarDate::parse(end)?;
        self.holidays_in_range(&start, &end, key_format, only_holidays)
    }

    /// Lists a whole calendar year, defaulting to the current year in Tokyo.
    pub fn holidays_in_year(
        &self,
        year: Option<i32>,
        key_format: KeyFormat,
        only_holidays: bool,
    ) -> EngineResult<HolidayMap> {
        let year = year.unwrap_or_else(|| CalendarDate::today().year());
        let start = CalendarDate::from_ymd(year, 1, 1)?;
        self.holidays_in_range(&start, &start.end_of_year(), key_format, only_holidays)
    }

    /// Lists one month.
    ///
    /// Unless both `year` and `month` are given, the current month in Tokyo
    /// is used.
    pub fn holidays_in_month(
        &self,
        year: Option<i32>,
        month: Option<u32>,
        key_format: KeyFormat,
        only_holidays: bool,
    ) -> EngineResult<HolidayMap> {
        let start = match (year, month) {
            (Some(year), Some(month)) => {
                if !(1..=12).contains(&month) {
                    return Err(EngineError::invalid_date(
                        format!("{year}-{month}"),
                        "month must be between 1 and 12",
                    ));
                }
                CalendarDate::from_ymd(year, month, 1)?
            }
            _ => CalendarDate::today().start_of_month(),
        };
        self.holidays_in_range(&start, &start.end_of_month(), key_format, only_holidays)
    }
}
