//! Floating "happy Monday" holidays.
//!
//! These holidays fall on the Nth Monday of a month (e.g., 成人の日 on the
//! second Monday of January since 2000).

use chrono::Weekday;

use crate::config::FloatingMondayRule;
use crate::models::CalendarDate;

/// Returns the ordinal week of the month for a day: days 1-7 are week 1,
/// days 8-14 week 2, and so on.
///
/// For a Monday this is also "which Monday of the month" it is.
///
/// ```
/// use holiday_jp::rules::week_of_month;
///
/// assert_eq!(week_of_month(1), 1);
/// assert_eq!(week_of_month(7), 1);
/// assert_eq!(week_of_month(8), 2);
/// assert_eq!(week_of_month(31), 5);
/// ```
pub fn week_of_month(day: u32) -> u32 {
    day.div_ceil(7)
}

/// Returns the name of the first floating-Monday rule matching `date`.
///
/// Non-Mondays never match.
pub fn floating_monday_name<'a>(
    date: &CalendarDate,
    rules: &'a [FloatingMondayRule],
) -> Option<&'a str> {
    if date.weekday() != Weekday::Mon {
        return None;
    }

    let (year, month, day) = date.ymd();
    let week = week_of_month(day);
    rules
        .iter()
        .find(|rule| {
            rule.month == month
                && rule.week == week
                && (rule.valid_from_year..=rule.valid_to_year).contains(&year)
        })
        .map(|rule| rule.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_support::monday;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    fn rules() -> Vec<FloatingMondayRule> {
        vec![
            monday(1, 2, "成人の日", 2000, 9999),
            monday(7, 3, "海の日", 2003, 9999),
            monday(10, 2, "体育の日", 2000, 2019),
            monday(10, 2, "スポーツの日", 2020, 9999),
        ]
    }

    #[test]
    fn test_second_monday_of_january() {
        let rules = rules();
        // 2019-01-14 and 2020-01-13 are the second Mondays
        assert_eq!(floating_monday_name(&date(2019, 1, 14), &rules), Some("成人の日"));
        assert_eq!(floating_monday_name(&date(2020, 1, 13), &rules), Some("成人の日"));
        // 2019-01-07 is the first Monday
        assert_eq!(floating_monday_name(&date(2019, 1, 7), &rules), None);
    }

    #[test]
    fn test_week_counts_from_day_of_month_only() {
        // July 2019 starts on a Monday, July 2020 on a Wednesday.
        let rules = rules();
        assert_eq!(floating_monday_name(&date(2019, 7, 15), &rules), Some("海の日"));
        assert_eq!(floating_monday_name(&date(2020, 7, 20), &rules), Some("海の日"));
        assert_eq!(floating_monday_name(&date(2020, 7, 13), &rules), None);
    }

    #[test]
    fn test_non_monday_never_matches() {
        // 2019-01-15 is a Tuesday in week 3; 2019-01-13 a Sunday in week 2.
        let rules = vec![monday(1, 2, "成人の日", 2000, 9999), monday(1, 3, "x", 2000, 9999)];
        assert_eq!(floating_monday_name(&date(2019, 1, 15), &rules), None);
        assert_eq!(floating_monday_name(&date(2019, 1, 13), &rules), None);
    }

    #[test]
    fn test_rule_renamed_between_years() {
        let rules = rules();
        assert_eq!(floating_monday_name(&date(2019, 10, 14), &rules), Some("体育の日"));
        assert_eq!(floating_monday_name(&date(2020, 10, 12), &rules), Some("スポーツの日"));
    }

    #[test]
    fn test_outside_validity_window() {
        // Second Monday of January 1999 predates the happy Monday law.
        assert_eq!(floating_monday_name(&date(1999, 1, 11), &rules()), None);
    }

    #[test]
    fn test_week_of_month_boundaries() {
        for day in 1..=7 {
            assert_eq!(week_of_month(day), 1);
        }
        assert_eq!(week_of_month(14), 2);
        assert_eq!(week_of_month(15), 3);
        assert_eq!(week_of_month(28), 4);
        assert_eq!(week_of_month(29), 5);
    }
}
