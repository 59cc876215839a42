//! Fixed-date holidays.
//!
//! A fixed holiday falls on the same month and day in every year of its
//! validity window (e.g., 元日 on January 1st).

use crate::config::FixedHolidayRule;
use crate::models::CalendarDate;

/// Returns the name of the first fixed rule matching `date`.
///
/// A rule matches when month and day are equal and the date's year lies in
/// `[valid_from_year, valid_to_year]`. Rules are scanned in declaration order.
///
/// # Example
///
/// ```
/// use holiday_jp::config::FixedHolidayRule;
/// use holiday_jp::models::CalendarDate;
/// use holiday_jp::rules::fixed_holiday_name;
///
/// let rules = vec![FixedHolidayRule {
///     month: 8,
///     day: 11,
///     name: "山の日".to_string(),
///     valid_from_year: 2016,
///     valid_to_year: 9999,
/// }];
///
/// let in_effect = CalendarDate::from_ymd(2019, 8, 11).unwrap();
/// assert_eq!(fixed_holiday_name(&in_effect, &rules), Some("山の日"));
///
/// let before_law = CalendarDate::from_ymd(2015, 8, 11).unwrap();
/// assert_eq!(fixed_holiday_name(&before_law, &rules), None);
/// ```
pub fn fixed_holiday_name<'a>(date: &CalendarDate, rules: &'a [FixedHolidayRule]) -> Option<&'a str> {
    let (year, month, day) = date.ymd();
    rules
        .iter()
        .find(|rule| {
            rule.month == month
                && rule.day == day
                && (rule.valid_from_year..=rule.valid_to_year).contains(&year)
        })
        .map(|rule| rule.name.as_str())
}
