//! Errors raised at the server boundary, before a request reaches the API.

use axum::{
  Json,
  http::{HeaderValue, StatusCode, header},
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Realm advertised in `WWW-Authenticate` challenges.
pub const REALM: &str = "Basic realm=\"nyxspectra\"";

#[derive(Debug, Error)]
pub enum Error {
  #[error("unauthorized")]
  Unauthorized,
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    match self {
      Error::Unauthorized => {
        let mut res = (
          StatusCode::UNAUTHORIZED,
          Json(json!({ "error": self.to_string() })),
        )
          .into_response();
        res
          .headers_mut()
          .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static(REALM));
        res
      }
    }
  }
}
