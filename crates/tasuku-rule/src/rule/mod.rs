//! Recurrence rule grammar, date arithmetic and next-date resolution.

pub mod core;
pub mod date;
pub mod next;
pub mod parse;
mod resolve;

pub use self::core::{ALL_MONTHS, MAX_INTERVAL_DAYS, Recurrence};
pub use self::next::{next_date, next_date_at};
pub use self::parse::parse_rule;
