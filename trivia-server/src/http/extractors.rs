//! Custom Axum extractors
//!
//! Each one turns axum's plain-text rejections into the JSON error envelope.

use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::{Pagination, PaginationParams};

/// Integer id from the path.
///
/// Only integer segments match an id route, so anything else is a 404
/// rather than a 400.
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::not_found("route", parts.uri.path()))?;

        let id = raw
            .parse::<i32>()
            .map_err(|_| ApiError::not_found("route", parts.uri.path()))?;

        Ok(Self(id))
    }
}

/// Page selection from `?page=N`, falling back to the first page.
pub struct Page(pub Pagination);

impl<S> FromRequestParts<S> for Page
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let params = Query::<PaginationParams>::try_from_uri(&parts.uri)
            .map(|Query(params)| params)
            .unwrap_or_default();

        Ok(Self(Pagination::from(params)))
    }
}

/// JSON body; a missing, malformed or mistyped body is a 400.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

        Ok(Self(value))
    }
}
