//! Recurrence rules for repeating tasks.
//!
//! A task stores its repeat cadence as a compact rule string (`d 7`, `y`,
//! `w 1,5`, `m -1 1,6`). This crate parses those strings into a
//! [`Recurrence`](rule::Recurrence) and computes the next date a task falls on
//! after a caller-supplied reference day.

pub mod error;
pub mod rule;

pub use error::{NumericField, RuleError, RuleResult};
pub use rule::{Recurrence, next_date, next_date_at};
