//! Store error types.

use thiserror::Error;
use veritrail_common::ApiError;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Audit record not found: {0}")]
    NotFound(String),

    #[error("Internal store error: {0}")]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(msg) => ApiError::BadRequest(msg),
            StoreError::NotFound(msg) => ApiError::NotFound(msg),
            StoreError::Internal(msg) => ApiError::Internal(msg),
        }
    }
}
