use std::fmt;

use thiserror::Error;

/// Numeric rule fields that are range-checked during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    /// Day interval of a `d` rule.
    Interval,
    /// Weekday of a `w` rule.
    Weekday,
    /// Day-of-month of an `m` rule.
    MonthDay,
    /// Month of an `m` rule.
    Month,
}

impl NumericField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Interval => "day interval",
            Self::Weekday => "weekday",
            Self::MonthDay => "month day",
            Self::Month => "month",
        }
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recurrence rule parsing and resolution errors.
///
/// Every variant rejects the given rule/date pair; none of them indicates an
/// internal fault and none is worth retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("repeat rule is empty")]
    EmptyRule,

    #[error("invalid date '{0}', expected YYYYMMDD")]
    InvalidDateSyntax(String),

    #[error("unsupported repeat format '{0}'")]
    UnsupportedFormat(String),

    #[error("invalid {field} value '{value}'")]
    InvalidNumericField { field: NumericField, value: String },

    #[error("no listed month contains the requested days in rule '{0}'")]
    NoMatchingDay(String),

    #[error("date is outside the supported calendar range")]
    DateOutOfRange,
}

impl RuleError {
    pub(crate) fn invalid_field(field: NumericField, value: impl fmt::Display) -> Self {
        Self::InvalidNumericField {
            field,
            value: value.to_string(),
        }
    }
}

pub type RuleResult<T> = std::result::Result<T, RuleError>;
