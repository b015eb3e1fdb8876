use axum::{
    Json, async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::api::error::ApiError;

/// `Json<T>` whose rejections (bad JSON, missing fields, unparseable dates or
/// amounts, wrong content type) become an [`ApiError`] body with axum's status.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            ApiError::rejected(e.status(), format!("Invalid request body: {}", e.body_text()))
        })?;

        Ok(ApiJson(value))
    }
}

/// `Path<T>` with the same JSON error body as [`ApiJson`].
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await.map_err(|e| {
            ApiError::rejected(e.status(), format!("Invalid path parameter: {}", e.body_text()))
        })?;

        Ok(ApiPath(value))
    }
}
