//! Custom Axum Extractors
//!
//! Request extractors that keep rejection payloads on the standard
//! `{ code, message }` error shape.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON body extractor whose rejections render through [`ApiError`]
///
/// axum's stock `Json` rejection replies with a plain-text body; wrapping it
/// keeps malformed input (bad JSON, missing fields, unparseable dates) on the
/// same error payload as every other client error.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError::InvalidRequestBody(rejection.body_text())),
        }
    }
}
