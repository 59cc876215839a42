//! Key representations for holiday listings.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

use super::CalendarDate;

/// Selects how each date is keyed in a holiday listing.
///
/// # Example
///
/// ```
/// use holiday_jp::models::{CalendarDate, DateKey, KeyFormat};
///
/// let format: KeyFormat = "date_slash".parse().unwrap();
/// let date = CalendarDate::from_ymd(2019, 5, 6).unwrap();
/// assert_eq!(format.key_for(&date), DateKey::from("2019/05/06"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyFormat {
    /// `YYYY-MM-DD`.
    #[default]
    IsoDate,
    /// `YYYYMMDD`.
    CompactDate,
    /// `YYYY/MM/DD`.
    SlashDate,
    /// Julian day of local midnight.
    JulianDay,
    /// Unix timestamp of local midnight.
    Timestamp,
}

impl KeyFormat {
    /// Renders `date` as a listing key.
    pub fn key_for(&self, date: &CalendarDate) -> DateKey {
        match self {
            KeyFormat::IsoDate => DateKey::Text(date.format("%Y-%m-%d")),
            KeyFormat::CompactDate => DateKey::Text(date.format("%Y%m%d")),
            KeyFormat::SlashDate => DateKey::Text(date.format("%Y/%m/%d")),
            KeyFormat::JulianDay => DateKey::JulianDay(date.julian_day()),
            KeyFormat::Timestamp => DateKey::Timestamp(date.timestamp()),
        }
    }
}

impl FromStr for KeyFormat {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date_string" | "iso-date" => Ok(KeyFormat::IsoDate),
            "date_short" | "compact-date" => Ok(KeyFormat::CompactDate),
            "date_slash" | "slash-date" => Ok(KeyFormat::SlashDate),
            "jd" | "julian" | "julian-day" => Ok(KeyFormat::JulianDay),
            "timestamp" => Ok(KeyFormat::Timestamp),
            other => Err(EngineError::UnknownKeyFormat {
                name: other.to_string(),
            }),
        }
    }
}

/// A listing key produced by a [`KeyFormat`].
///
/// Keys of the same variant order the same way as the dates they came from.
/// Julian day keys are compared with [`f64::total_cmp`].
#[derive(Debug, Clone)]
pub enum DateKey {
    /// A formatted date.
    Text(String),
    /// A Julian day.
    JulianDay(f64),
    /// A Unix timestamp.
    Timestamp(i64),
}

impl DateKey {
    fn rank(&self) -> u8 {
        match self {
            DateKey::Text(_) => 0,
            DateKey::JulianDay(_) => 1,
            DateKey::Timestamp(_) => 2,
        }
    }
}

impl Ord for DateKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (DateKey::Text(a), DateKey::Text(b)) => a.cmp(b),
            (DateKey::JulianDay(a), DateKey::JulianDay(b)) => a.total_cmp(b),
            (DateKey::Timestamp(a), DateKey::Timestamp(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for DateKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for DateKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DateKey {}

impl From<&str> for DateKey {
    fn from(text: &str) -> Self {
        DateKey::Text(text.to_string())
    }
}

impl From<i64> for DateKey {
    fn from(timestamp: i64) -> Self {
        DateKey::Timestamp(timestamp)
    }
}

impl From<f64> for DateKey {
    fn from(julian_day: f64) -> Self {
        DateKey::JulianDay(julian_day)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateKey::Text(text) => write!(f, "{text}"),
            DateKey::JulianDay(jd) => write!(f, "{jd}"),
            DateKey::Timestamp(ts) => write!(f, "{ts}"),
        }
    }
}
