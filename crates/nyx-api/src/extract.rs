//! Request extractors whose rejections use the API error body.

use axum::{Json, extract::FromRequest};

use crate::error::ApiError;

/// [`Json`] that rejects with [`ApiError::Body`] instead of plain text.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
