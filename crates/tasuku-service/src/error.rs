use thiserror::Error;

/// Service layer errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    RuleError(#[from] tasuku_rule::RuleError),

    #[error(transparent)]
    DatabaseError(#[from] tasuku_db::error::DbError),

    #[error("id mustn't be empty")]
    EmptyId,

    #[error("task not found: {0}")]
    TaskNotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("invalid task date '{0}'")]
    InvalidDate(String),
}

impl ServiceError {
    /// Whether the error was caused by the caller's input rather than the service.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::RuleError(_) | Self::EmptyId | Self::ValidationError(_) | Self::InvalidDate(_)
        )
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
