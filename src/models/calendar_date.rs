//! Calendar date value used by every rule evaluator.
//!
//! All dates are civil dates in Japan Standard Time (UTC+9, no daylight
//! saving). Conversions to and from Unix timestamps and Julian days refer to
//! local midnight in that zone.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Days, FixedOffset, NaiveDate, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Offset of Japan Standard Time from UTC, in seconds.
pub const JST_OFFSET_SECONDS: i32 = 9 * 3600;

/// Julian day number of the Unix epoch (1970-01-01T00:00:00Z).
pub const UNIX_EPOCH_JULIAN_DAY: f64 = 2_440_587.5;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Text layouts accepted by [`CalendarDate::parse`].
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d"];

/// Time of day allowed after the date.
const TIME_FORMAT: &str = "%H:%M:%S";

/// Returns the Japan Standard Time offset.
pub fn jst() -> FixedOffset {
    FixedOffset::east_opt(JST_OFFSET_SECONDS).expect("UTC+9 is a valid offset")
}

/// A civil date in Japan Standard Time.
///
/// # Example
///
/// ```
/// use holiday_jp::models::CalendarDate;
///
/// let date: CalendarDate = "2019/05/06".parse().unwrap();
/// assert_eq!(date.year(), 2019);
/// assert_eq!(date.format("%Y-%m-%d"), "2019-05-06");
/// assert_eq!(date.timestamp(), 1_557_068_400);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Builds a date from its year, month (1-12) and day of month.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> EngineResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                EngineError::invalid_date(
                    format!("{year:04}-{month:02}-{day:02}"),
                    "no such calendar date",
                )
            })
    }

    /// Parses `YYYY-MM-DD`, `YYYY/MM/DD` or `YYYYMMDD`, optionally followed
    /// by a ` HH:MM:SS` or `THH:MM:SS` time of day which is checked and then
    /// ignored.
    pub fn parse(input: &str) -> EngineResult<Self> {
        let trimmed = input.trim();
        let (date_part, time_part) = match trimmed.split_once([' ', 'T']) {
            Some((date, time)) => (date, Some(time)),
            None => (trimmed, None),
        };

        if let Some(time) = time_part {
            NaiveTime::parse_from_str(time, TIME_FORMAT)
                .map_err(|_| EngineError::invalid_date(input, "expected an HH:MM:SS time"))?;
        }

        DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(date_part, format).ok())
            .map(Self)
            .ok_or_else(|| {
                EngineError::invalid_date(input, "expected YYYY-MM-DD, YYYY/MM/DD or YYYYMMDD")
            })
    }

    /// Returns the Tokyo date containing the given Unix timestamp.
    pub fn from_timestamp(timestamp: i64) -> EngineResult<Self> {
        DateTime::<Utc>::from_timestamp(timestamp, 0)
            .map(|utc| Self(utc.with_timezone(&jst()).date_naive()))
            .ok_or_else(|| EngineError::invalid_date(timestamp, "timestamp out of range"))
    }

    /// Returns the Tokyo date containing the given Julian day.
    pub fn from_julian_day(julian_day: f64) -> EngineResult<Self> {
        if !julian_day.is_finite() {
            return Err(EngineError::invalid_date(julian_day, "not a finite number"));
        }
        let seconds = ((julian_day - UNIX_EPOCH_JULIAN_DAY) * SECONDS_PER_DAY).round();
        if seconds < i64::MIN as f64 || seconds > i64::MAX as f64 {
            return Err(EngineError::invalid_date(julian_day, "Julian day out of range"));
        }
        Self::from_timestamp(seconds as i64)
            .map_err(|_| EngineError::invalid_date(julian_day, "Julian day out of range"))
    }

    /// Returns today's date in Tokyo.
    pub fn today() -> Self {
        Self(Utc::now().with_timezone(&jst()).date_naive())
    }

    /// Returns the underlying chrono date.
    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month, 1 through 12.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day of the month, starting at 1.
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns `(year, month, day)`, which orders the same way as the date.
    pub fn ymd(&self) -> (i32, u32, u32) {
        (self.year(), self.month(), self.day())
    }

    /// Returns the day of the week.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns the ISO weekday number (Monday = 1 .. Sunday = 7).
    pub fn iso_weekday(&self) -> u32 {
        self.0.weekday().number_from_monday()
    }

    /// Returns `true` on Sundays.
    pub fn is_sunday(&self) -> bool {
        self.weekday() == Weekday::Sun
    }

    /// Returns the Unix timestamp of local midnight.
    pub fn timestamp(&self) -> i64 {
        self.0
            .and_hms_opt(0, 0, 0)
            .expect("midnight is a valid time")
            .and_utc()
            .timestamp()
            - i64::from(JST_OFFSET_SECONDS)
    }

    /// Returns the Julian day of local midnight.
    pub fn julian_day(&self) -> f64 {
        self.timestamp() as f64 / SECONDS_PER_DAY + UNIX_EPOCH_JULIAN_DAY
    }

    /// Formats the date with a chrono `strftime` pattern.
    pub fn format(&self, pattern: &str) -> String {
        self.0.format(pattern).to_string()
    }

    /// Returns the date `days` days later, or `None` past the supported range.
    pub fn add_days(&self, days: u64) -> Option<Self> {
        self.0.checked_add_days(Days::new(days)).map(Self)
    }

    /// Returns the date `days` days earlier, or `None` past the supported range.
    pub fn sub_days(&self, days: u64) -> Option<Self> {
        self.0.checked_sub_days(Days::new(days)).map(Self)
    }

    /// Returns the first day of this date's month.
    pub fn start_of_month(&self) -> Self {
        Self(self.0.with_day(1).expect("day 1 exists in every month"))
    }

    /// Returns the last day of this date's month.
    pub fn end_of_month(&self) -> Self {
        let (year, month) = if self.month() == 12 {
            (self.year() + 1, 1)
        } else {
            (self.year(), self.month() + 1)
        };
        NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|first| first.pred_opt())
            .map(Self)
            .unwrap_or(Self(NaiveDate::MAX))
    }

    /// Returns January 1st of this date's year.
    pub fn start_of_year(&self) -> Self {
        Self(self.0.with_ordinal(1).expect("day 1 exists in every year"))
    }

    /// Returns December 31st of this date's year.
    pub fn end_of_year(&self) -> Self {
        Self(
            self.0
                .with_month(12)
                .and_then(|d| d.with_day(31))
                .expect("December 31st exists in every year"),
        )
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for CalendarDate {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_accepts_all_layouts() {
        let expected = date(2019, 5, 6);
        assert_eq!(CalendarDate::parse("2019-05-06").unwrap(), expected);
        assert_eq!(CalendarDate::parse("2019/05/06").unwrap(), expected);
        assert_eq!(CalendarDate::parse("20190506").unwrap(), expected);
        assert_eq!(CalendarDate::parse("2019/05/06 00:00:00").unwrap(), expected);
        assert_eq!(CalendarDate::parse(" 2019-05-06T12:30:00 ").unwrap(), expected);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "yesterday", "2019-02-30", "2019/13/01"] {
            match CalendarDate::parse(input) {
                Err(EngineError::InvalidDateInput { input: rejected, .. }) => {
                    assert_eq!(rejected, input);
                }
                other => panic!("Expected InvalidDateInput for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_parse_rejects_malformed_time_suffix() {
        for input in [
            "2019-05-06 garbage",
            "2019-05-06 99:99:99",
            "2019-05-06Tnope",
            "2019/05/06 12:30",
        ] {
            assert!(
                matches!(
                    CalendarDate::parse(input),
                    Err(EngineError::InvalidDateInput { .. })
                ),
                "{input:?} should be rejected"
            );
        }
        assert_eq!(
            CalendarDate::parse("20190506 23:59:59").unwrap(),
            date(2019, 5, 6)
        );
    }

    #[test]
    fn test_from_ymd_rejects_impossible_dates() {
        assert!(CalendarDate::from_ymd(2019, 2, 29).is_err());
        assert!(CalendarDate::from_ymd(2020, 2, 29).is_ok());
        assert!(CalendarDate::from_ymd(2020, 0, 1).is_err());
    }

    #[test]
    fn test_timestamp_is_tokyo_midnight() {
        let d = date(2019, 5, 6);
        assert_eq!(d.timestamp(), 1_557_068_400);
        assert_eq!(CalendarDate::from_timestamp(1_557_068_400).unwrap(), d);
        // 14:59:59 UTC is still the 6th in Tokyo, 15:00 UTC is the 7th.
        assert_eq!(CalendarDate::from_timestamp(1_557_154_799).unwrap(), d);
        assert_eq!(
            CalendarDate::from_timestamp(1_557_154_800).unwrap(),
            date(2019, 5, 7)
        );
    }

    #[test]
    fn test_julian_day_round_trip() {
        let d = date(2019, 5, 6);
        assert!((d.julian_day() - 2_458_609.125).abs() < 1e-9);
        assert_eq!(CalendarDate::from_julian_day(2_458_609.125).unwrap(), d);
    }

    #[test]
    fn test_julian_day_rejects_non_finite() {
        assert!(CalendarDate::from_julian_day(f64::NAN).is_err());
        assert!(CalendarDate::from_julian_day(f64::INFINITY).is_err());
        assert!(CalendarDate::from_julian_day(1e300).is_err());
    }

    #[test]
    fn test_weekday_accessors() {
        let sunday = date(2019, 5, 5);
        assert!(sunday.is_sunday());
        assert_eq!(sunday.iso_weekday(), 7);
        assert_eq!(sunday.weekday(), Weekday::Sun);
        assert_eq!(date(2019, 5, 6).iso_weekday(), 1);
    }

    #[test]
    fn test_day_arithmetic() {
        let d = date(2019, 12, 31);
        assert_eq!(d.add_days(1), Some(date(2020, 1, 1)));
        assert_eq!(d.sub_days(365), Some(date(2018, 12, 31)));
        assert_eq!(CalendarDate::from(NaiveDate::MAX).add_days(1), None);
    }

    #[test]
    fn test_month_and_year_bounds() {
        let d = date(2020, 2, 14);
        assert_eq!(d.start_of_month(), date(2020, 2, 1));
        assert_eq!(d.end_of_month(), date(2020, 2, 29));
        assert_eq!(date(2019, 12, 5).end_of_month(), date(2019, 12, 31));
        assert_eq!(d.start_of_year(), date(2020, 1, 1));
        assert_eq!(d.end_of_year(), date(2020, 12, 31));
    }

    #[test]
    fn test_format_patterns() {
        let d = date(2019, 5, 6);
        assert_eq!(d.format("%Y%m%d"), "20190506");
        assert_eq!(d.format("%Y/%m/%d"), "2019/05/06");
        assert_eq!(d.to_string(), "2019-05-06");
    }
}
