//! Vernal and autumnal equinox holidays.
//!
//! The equinox day is approximated with the simplified almanac formula
//!
//! ```text
//! day = floor(C + 0.242194 * (year - 1980) - floor((year - 1980) / 4))
//! ```
//!
//! where the constant `C` comes from the configured table for the year.
//! Both floors round toward negative infinity, which matters for years
//! before 1980.

use crate::config::{EquinoxConfig, EquinoxTable};
use crate::error::{EngineError, EngineResult};
use crate::models::CalendarDate;

/// Reference year of the equinox formula.
pub const EQUINOX_BASE_YEAR: i32 = 1980;

/// Yearly drift of the equinox, in days.
pub const EQUINOX_DRIFT_PER_YEAR: f64 = 0.242194;

const VERNAL_MONTH: u32 = 3;
const AUTUMNAL_MONTH: u32 = 9;

/// Returns the constant applying to `year`: the value of the first key
/// (ascending) that is `>= year`.
fn constant_for_year(table: &EquinoxTable, year: i32) -> Option<f64> {
    if year < table.valid_from_year {
        return None;
    }
    table.constants.range(year..).next().map(|(_, constant)| *constant)
}

fn equinox_day(table_name: &str, table: &EquinoxTable, year: i32) -> EngineResult<u32> {
    let constant =
        constant_for_year(table, year).ok_or_else(|| EngineError::EquinoxOutOfRange {
            table: table_name.to_string(),
            year,
        })?;

    let offset = year - EQUINOX_BASE_YEAR;
    let leap_days = offset.div_euclid(4);
    let day = (constant + EQUINOX_DRIFT_PER_YEAR * f64::from(offset) - f64::from(leap_days)).floor();
    Ok(day as u32)
}

/// Returns the day of March on which the vernal equinox falls in `year`.
///
/// ```
/// use holiday_jp::config::ConfigLoader;
/// use holiday_jp::rules::vernal_equinox_day;
///
/// let loader = ConfigLoader::bundled().unwrap();
/// let tables = loader.store().equinox();
/// assert_eq!(vernal_equinox_day(2019, tables).unwrap(), 21);
/// assert_eq!(vernal_equinox_day(2020, tables).unwrap(), 20);
/// ```
pub fn vernal_equinox_day(year: i32, tables: &EquinoxConfig) -> EngineResult<u32> {
    equinox_day("vernal", &tables.vernal, year)
}

/// Returns the day of September on which the autumnal equinox falls in `year`.
pub fn autumnal_equinox_day(year: i32, tables: &EquinoxConfig) -> EngineResult<u32> {
    equinox_day("autumnal", &tables.autumnal, year)
}

/// Returns the equinox holiday name if `date` is an equinox day.
///
/// Dates outside March and September never consult the tables, so they
/// cannot fail.
pub fn equinox_holiday_name<'a>(
    date: &CalendarDate,
    tables: &'a EquinoxConfig,
) -> EngineResult<Option<&'a str>> {
    let (year, month, day) = date.ymd();
    let table = match month {
        VERNAL_MONTH if vernal_equinox_day(year, tables)? == day => &tables.vernal,
        AUTUMNAL_MONTH if autumnal_equinox_day(year, tables)? == day => &tables.autumnal,
        _ => return Ok(None),
    };
    Ok(Some(table.name.as_str()))
}
