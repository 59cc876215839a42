//! One-year legislated holiday moves.
//!
//! Special laws occasionally relocate a holiday for a single year (the 2020
//! Tokyo Olympics moved 海の日, スポーツの日 and 山の日). In that year the new
//! date is a holiday and the original date is stripped of its usual status.

use std::collections::BTreeMap;

use crate::config::DateMoveRule;
use crate::models::CalendarDate;

use super::RuleMatch;

/// Evaluates the moves enacted for `date`'s year.
///
/// Returns [`RuleMatch::Holiday`] on a relocated date, [`RuleMatch::Removed`]
/// on the date a holiday was moved away from, and [`RuleMatch::NoMatch`]
/// otherwise. Moves for other years are ignored.
pub fn specified_move<'a>(
    date: &CalendarDate,
    moves: &'a BTreeMap<i32, Vec<DateMoveRule>>,
) -> RuleMatch<'a> {
    let (year, month, day) = date.ymd();
    let Some(rules) = moves.get(&year) else {
        return RuleMatch::NoMatch;
    };

    for rule in rules {
        if rule.month == month && rule.day == day {
            return RuleMatch::Holiday(&rule.name);
        }
        if rule.original.month == month && rule.original.day == day {
            return RuleMatch::Removed;
        }
    }
    RuleMatch::NoMatch
}
