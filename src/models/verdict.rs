//! The engine's classification of a single date.

use std::fmt;

use serde::{Serialize, Serializer};

/// Either the name of the holiday a date falls on, or "not a holiday".
///
/// Serializes as the holiday name, or as `false` for ordinary days, so that
/// exported listings keep the shape downstream tooling expects.
///
/// # Example
///
/// ```
/// use holiday_jp::models::Verdict;
///
/// let verdict = Verdict::holiday("元日");
/// assert!(verdict.is_holiday());
/// assert_eq!(verdict.name(), Some("元日"));
/// assert_eq!(Verdict::NotHoliday.name(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Verdict {
    /// The date is a holiday with this (non-empty) name.
    Holiday(String),
    /// The date is an ordinary day.
    #[default]
    NotHoliday,
}

impl Verdict {
    /// Creates a holiday verdict.
    pub fn holiday(name: impl Into<String>) -> Self {
        Verdict::Holiday(name.into())
    }

    /// Returns `true` if the date is a holiday.
    pub fn is_holiday(&self) -> bool {
        matches!(self, Verdict::Holiday(_))
    }

    /// Returns the holiday name, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            Verdict::Holiday(name) => Some(name),
            Verdict::NotHoliday => None,
        }
    }
}

impl From<Option<&str>> for Verdict {
    fn from(name: Option<&str>) -> Self {
        name.map_or(Verdict::NotHoliday, Verdict::holiday)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Holiday(name) => write!(f, "{name}"),
            Verdict::NotHoliday => write!(f, "not a holiday"),
        }
    }
}

impl Serialize for Verdict {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Verdict::Holiday(name) => serializer.serialize_str(name),
            Verdict::NotHoliday => serializer.serialize_bool(false),
        }
    }
}
