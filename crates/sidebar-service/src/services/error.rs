//! Service layer error types

use thiserror::Error;

/// Service layer error type
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A required collaborator was not supplied to the context builder
    #[error("Missing dependency: {0} is required")]
    MissingDependency(&'static str),
}

impl ServiceError {
    /// Get the error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingDependency(_) => "MISSING_DEPENDENCY",
        }
    }
}

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
