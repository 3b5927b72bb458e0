//! Custom Axum extractors
//!
//! Decode failures reject with `ApiError::BadRequest`; a body axum refuses
//! to read (e.g. over the size limit) keeps axum's status. Either way the
//! store is never reached.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::RecordId;

/// Extract and parse a record id from path
pub struct ValidId(pub RecordId);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?;

        Ok(Self(raw.parse()?))
    }
}

/// JSON request body decoded with `serde_json`.
///
/// Unlike `axum::Json` this does not require a `Content-Type` header and
/// reports every JSON decode failure as 400.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::Rejected {
                status: e.status(),
                message: e.body_text(),
            })?;

        let value = serde_json::from_slice(&bytes).map_err(|e| ApiError::bad_request(e.to_string()))?;
        Ok(Self(value))
    }
}
