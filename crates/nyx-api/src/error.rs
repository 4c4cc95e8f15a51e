//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use nyx_core::upload::UploadError;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler. The body is always
/// `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("conflict: {0}")]
  Conflict(String),

  /// An unreadable JSON body. Keeps axum's status (400, 415 or 422).
  #[error("invalid body: {0}")]
  Body(#[from] JsonRejection),

  #[error("upload failed: {0}")]
  Upload(#[from] UploadError),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<nyx_core::Error> for ApiError {
  fn from(e: nyx_core::Error) -> Self {
    match e {
      nyx_core::Error::DuplicateId(_) => ApiError::Conflict(e.to_string()),
      nyx_core::Error::EmptySlug => ApiError::BadRequest(e.to_string()),
      other => ApiError::Store(Box::new(other)),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Conflict(m) => (StatusCode::CONFLICT, m.clone()),
      ApiError::Body(r) => (r.status(), r.body_text()),
      ApiError::Upload(e) if e.is_client_error() => (StatusCode::BAD_REQUEST, e.to_string()),
      ApiError::Upload(e) => {
        tracing::error!(error = ?e, "upload failed");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
      }
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store failure");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
