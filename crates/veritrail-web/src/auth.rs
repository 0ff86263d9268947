//! Bearer API-key extractor.
//!
//! Every route except the health check requires
//! `Authorization: Bearer <key>` where the key carries the configured prefix.
//! The core never sees credentials; this is the whole auth surface.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use veritrail_common::ApiError;

use crate::state::SharedState;

/// The validated API key of the caller.
#[derive(Debug, Clone)]
pub struct ApiKey(pub String);

impl<S> FromRequestParts<S> for ApiKey
where
    S: Send + Sync,
    SharedState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = SharedState::from_ref(state);

        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or_else(|| ApiError::Unauthorized("Missing authorization header".into()))?
            .to_str()
            .map_err(|_| ApiError::Unauthorized("Invalid authorization header".into()))?;

        let key = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized("Invalid authorization format".into()))?;

        if !key.starts_with(&state.config.auth.api_key_prefix) {
            return Err(ApiError::Unauthorized("Invalid API key".into()));
        }

        Ok(ApiKey(key.to_string()))
    }
}
