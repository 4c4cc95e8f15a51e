//! HTTP Basic auth for operator routes.

use std::sync::Arc;

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use axum::{
  extract::{Request, State},
  http::HeaderMap,
  middleware::Next,
  response::Response,
};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as B64;
use tracing::warn;

use crate::error::Error;

/// The single operator account.
#[derive(Clone)]
pub struct AuthConfig {
  pub username:      String,
  /// PHC string produced by argon2, e.g. `$argon2id$v=19$…`
  pub password_hash: String,
}

/// Check the `Authorization: Basic …` header against `config`.
pub fn verify_auth(headers: &HeaderMap, config: &AuthConfig) -> Result<(), Error> {
  let header_val = headers
    .get(axum::http::header::AUTHORIZATION)
    .and_then(|v| v.to_str().ok())
    .ok_or(Error::Unauthorized)?;

  let encoded = header_val
    .strip_prefix("Basic ")
    .ok_or(Error::Unauthorized)?;

  let decoded = B64.decode(encoded).map_err(|_| Error::Unauthorized)?;
  let creds = std::str::from_utf8(&decoded).map_err(|_| Error::Unauthorized)?;

  let (username, password) = creds.split_once(':').ok_or(Error::Unauthorized)?;

  if username != config.username {
    return Err(Error::Unauthorized);
  }

  let parsed_hash = PasswordHash::new(&config.password_hash).map_err(|e| {
    warn!(error = %e, "configured password hash is not a valid PHC string");
    Error::Unauthorized
  })?;

  Argon2::default()
    .verify_password(password.as_bytes(), &parsed_hash)
    .map_err(|_| Error::Unauthorized)?;

  Ok(())
}

/// Middleware guarding the admin router.
pub async fn require_operator(
  State(config): State<Arc<AuthConfig>>,
  req: Request,
  next: Next,
) -> Result<Response, Error> {
  if let Err(e) = verify_auth(req.headers(), &config) {
    warn!(method = %req.method(), uri = %req.uri(), "operator auth failed");
    return Err(e);
  }
  Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
  use super::*;
  use argon2::{PasswordHasher, password_hash::SaltString};
  use axum::http::{HeaderValue, header};
  use rand_core::OsRng;

  fn make_config(password: &str) -> AuthConfig {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
      .hash_password(password.as_bytes(), &salt)
      .unwrap()
      .to_string();
    AuthConfig {
      username:      "editor".to_string(),
      password_hash: hash,
    }
  }

  fn headers(value: &str) -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    h
  }

  fn basic(user: &str, pass: &str) -> String {
    let encoded = B64.encode(format!("{user}:{pass}"));
    format!("Basic {encoded}")
  }

  #[test]
  fn correct_credentials() {
    let config = make_config("secret");
    assert!(verify_auth(&headers(&basic("editor", "secret")), &config).is_ok());
  }

  #[test]
  fn wrong_password() {
    let config = make_config("secret");
    let result = verify_auth(&headers(&basic("editor", "wrong")), &config);
    assert!(matches!(result, Err(Error::Unauthorized)));
  }

  #[test]
  fn wrong_username() {
    let config = make_config("secret");
    let result = verify_auth(&headers(&basic("someone", "secret")), &config);
    assert!(matches!(result, Err(Error::Unauthorized)));
  }

  #[test]
  fn missing_header() {
    let config = make_config("secret");
    assert!(matches!(verify_auth(&HeaderMap::new(), &config), Err(Error::Unauthorized)));
  }

  #[test]
  fn invalid_base64() {
    let config = make_config("secret");
    let result = verify_auth(&headers("Basic !!!not-base64!!!"), &config);
    assert!(matches!(result, Err(Error::Unauthorized)));
  }

  #[test]
  fn malformed_stored_hash_denies() {
    let config = AuthConfig {
      username:      "editor".to_string(),
      password_hash: "plaintext".to_string(),
    };
    let result = verify_auth(&headers(&basic("editor", "plaintext")), &config);
    assert!(matches!(result, Err(Error::Unauthorized)));
  }
}
