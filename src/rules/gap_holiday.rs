//! Gap holidays (国民の休日).
//!
//! Since 1985-12-27 a day sandwiched between two holidays is itself a
//! holiday. Only fixed-date holidays count as the surrounding holidays.

use crate::config::FixedHolidayRule;
use crate::models::CalendarDate;

use super::fixed_holiday_name;

/// First date on which gap holidays exist, as `(year, month, day)`.
pub const GAP_HOLIDAY_START: (i32, u32, u32) = (1985, 12, 27);

/// Returns `true` if both neighbours of `date` are fixed holidays.
pub fn is_gap_holiday(date: &CalendarDate, fixed: &[FixedHolidayRule]) -> bool {
    if date.ymd() < GAP_HOLIDAY_START {
        return false;
    }

    let is_fixed = |day: Option<CalendarDate>| {
        day.is_some_and(|day| fixed_holiday_name(&day, fixed).is_some())
    };
    is_fixed(date.sub_days(1)) && is_fixed(date.add_days(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_support::fixed;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    fn rules() -> Vec<FixedHolidayRule> {
        vec![
            fixed(4, 29, "昭和の日", 2007, 9999),
            fixed(5, 1, "天皇即位の日", 2019, 2019),
            fixed(5, 3, "憲法記念日", 1949, 9999),
            fixed(5, 5, "こどもの日", 1949, 9999),
        ]
    }

    #[test]
    fn test_2019_abdication_window() {
        let rules = rules();
        assert!(is_gap_holiday(&date(2019, 4, 30), &rules));
        assert!(is_gap_holiday(&date(2019, 5, 2), &rules));
    }

    #[test]
    fn test_one_holiday_neighbour_is_not_enough() {
        let rules = rules();
        assert!(!is_gap_holiday(&date(2020, 4, 30), &rules));
        assert!(!is_gap_holiday(&date(2019, 4, 28), &rules));
    }

    #[test]
    fn test_may_4th_between_constitution_and_childrens_day() {
        // Before みどりの日 became a fixed holiday, 5/4 was a gap holiday.
        assert!(is_gap_holiday(&date(1988, 5, 4), &rules()));
    }

    #[test]
    fn test_not_before_enforcement_date() {
        assert!(!is_gap_holiday(&date(1985, 5, 4), &rules()));
        let new_year = vec![fixed(12, 26, "a", 1985, 1985), fixed(12, 28, "b", 1985, 1985)];
        assert!(is_gap_holiday(&date(1985, 12, 27), &new_year));
    }
}
