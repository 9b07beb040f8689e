//! Application-level error type
//!
//! Lifecycle operations do not expose these to callers directly; they are
//! caught at each operation boundary and converted into an
//! [`shared::ActionResponse`] with a displayable message.

use crate::db::repository::RepoError;

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Duplicate(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

/// Application-level Result type
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_error_mapping() {
        let err: AppError = RepoError::NotFound("booking:x".to_string()).into();
        assert!(matches!(err, AppError::NotFound(_)));

        // Duplicates surface as validation failures
        let err: AppError = RepoError::Duplicate("rate_table:current".to_string()).into();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
