use thiserror::Error;

/// Message carried by every rejected payload.
pub const INVALID_PAYLOAD: &str = "Invalid payload";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("{0}")]
    Validation(String),
}

impl ModelError {
    pub fn invalid_payload() -> Self { Self::Validation(INVALID_PAYLOAD.into()) }
}
