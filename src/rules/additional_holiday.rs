//! Additional closure periods (company summer break, year-end holidays).
//!
//! These are not national holidays and are not part of the holiday cascade;
//! callers evaluate them separately.

use crate::config::AdditionalHolidayRule;
use crate::models::CalendarDate;

/// Returns the name of the first period containing `date`.
pub fn additional_holiday_name<'a>(
    date: &CalendarDate,
    rules: &'a [AdditionalHolidayRule],
) -> Option<&'a str> {
    let day = date.naive();
    rules
        .iter()
        .find(|rule| rule.from_date <= day && day <= rule.last_date())
        .map(|rule| rule.name.as_str())
}
