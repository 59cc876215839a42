//! Holiday rule evaluators.
//!
//! This module contains one evaluator per rule category: fixed-date
//! holidays, floating "happy Monday" holidays, equinox holidays, one-year
//! date moves, and the two derived rules (substitute and gap holidays).
//! Additional closure periods live here too but sit outside the cascade.
//!
//! Every evaluator is a pure function of a date and its rule records.

mod additional_holiday;
mod equinox;
mod evaluator;
mod fixed_holiday;
mod floating_monday;
mod gap_holiday;
mod specified_move;
mod substitute_holiday;

pub use additional_holiday::additional_holiday_name;
pub use equinox::{
    EQUINOX_BASE_YEAR, EQUINOX_DRIFT_PER_YEAR, autumnal_equinox_day, equinox_holiday_name,
    vernal_equinox_day,
};
pub use evaluator::{RuleEvaluator, RuleMatch};
pub use fixed_holiday::fixed_holiday_name;
pub use floating_monday::{floating_monday_name, week_of_month};
pub use gap_holiday::{GAP_HOLIDAY_START, is_gap_holiday};
pub use specified_move::specified_move;
pub use substitute_holiday::{
    EXTENDED_LOOKBACK_DAYS, EXTENDED_LOOKBACK_FROM_YEAR, LEGACY_LOOKBACK_DAYS,
    SUBSTITUTE_HOLIDAY_START, is_substitute_holiday,
};
