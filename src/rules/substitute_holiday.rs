//! Substitute holidays (振替休日).
//!
//! When a fixed holiday falls on a Sunday, the next day that is not itself a
//! holiday becomes a substitute holiday. The rule took effect on 1973-04-12;
//! the 2007 amendment let the substitute slide past a run of consecutive
//! holidays (up to a week).

use crate::config::FixedHolidayRule;
use crate::models::CalendarDate;

use super::fixed_holiday_name;

/// First date on which substitute holidays exist, as `(year, month, day)`.
pub const SUBSTITUTE_HOLIDAY_START: (i32, u32, u32) = (1973, 4, 12);

/// First year of the extended look-back.
pub const EXTENDED_LOOKBACK_FROM_YEAR: i32 = 2007;

/// Days searched backwards before 2007.
pub const LEGACY_LOOKBACK_DAYS: u32 = 1;

/// Days searched backwards from 2007 onward.
pub const EXTENDED_LOOKBACK_DAYS: u32 = 7;

/// Returns `true` if `date` is a substitute holiday.
///
/// Walks backwards from the day before `date` through an unbroken run of
/// fixed holidays; the first Sunday found in that run makes `date` a
/// substitute holiday. Only fixed holidays count, and the walk stops at the
/// first non-holiday or when the look-back budget is spent.
pub fn is_substitute_holiday(date: &CalendarDate, fixed: &[FixedHolidayRule]) -> bool {
    if date.ymd() < SUBSTITUTE_HOLIDAY_START {
        return false;
    }

    let lookback = if date.year() < EXTENDED_LOOKBACK_FROM_YEAR {
        LEGACY_LOOKBACK_DAYS
    } else {
        EXTENDED_LOOKBACK_DAYS
    };

    let mut cursor = *date;
    for _ in 0..lookback {
        let Some(previous) = cursor.sub_days(1) else {
            return false;
        };
        cursor = previous;

        if fixed_holiday_name(&cursor, fixed).is_none() {
            return false;
        }
        if cursor.is_sunday() {
            return true;
        }
    }
    false
}
