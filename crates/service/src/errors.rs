use thiserror::Error;

/// Failure of a registry operation. `Display` yields the bare message handed
/// back to callers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Internal(String),
}

impl From<models::errors::ModelError> for ServiceError {
    fn from(e: models::errors::ModelError) -> Self {
        match e {
            models::errors::ModelError::Validation(msg) => Self::Validation(msg),
        }
    }
}

impl ServiceError {
    pub fn not_found(msg: impl Into<String>) -> Self { Self::NotFound(msg.into()) }

    pub fn internal(e: impl std::fmt::Display) -> Self { Self::Internal(e.to_string()) }

    /// Short machine-readable name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::NotFound(_) => "not_found",
            Self::Internal(_) => "internal_error",
        }
    }

    /// Prefix internal failures with the operation that hit them.
    /// Validation and not-found messages reach the caller untouched.
    pub fn context(self, operation: &str) -> Self {
        match self {
            Self::Internal(msg) => Self::Internal(format!("{operation}: {msg}")),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_only_wraps_internal() {
        let e = ServiceError::internal("disk full").context("Error adding client");
        assert_eq!(e.to_string(), "Error adding client: disk full");

        let e = ServiceError::not_found("Case not found").context("Error deleting case");
        assert_eq!(e.to_string(), "Case not found");
        assert_eq!(e.kind(), "not_found");
    }

    #[test]
    fn model_validation_converts() {
        let e: ServiceError = models::errors::ModelError::invalid_payload().into();
        assert_eq!(e, ServiceError::Validation("Invalid payload".into()));
    }
}
