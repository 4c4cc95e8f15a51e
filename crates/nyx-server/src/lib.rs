//! HTTP server assembly for NyxSpectra.
//!
//! Mounts the [`nyx_api`] routers under `/api`, puts the admin half behind
//! Basic auth, and serves uploaded images from disk.

pub mod auth;
pub mod error;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{Router, middleware};
use nyx_api::{ApiState, uploads::DEFAULT_URL_PREFIX};
use nyx_core::{content::SlugPolicy, storage::Storage};
use serde::Deserialize;
use tower_http::{services::ServeDir, trace::TraceLayer};

use auth::{AuthConfig, require_operator};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and `NYX_*`
/// environment variables.
#[derive(Deserialize, Clone, Debug)]
pub struct ServerConfig {
  pub host:               String,
  pub port:               u16,
  pub store_path:         PathBuf,
  pub upload_dir:         PathBuf,
  #[serde(default = "default_upload_url_prefix")]
  pub upload_url_prefix:  String,
  #[serde(default)]
  pub slug_policy:        SlugPolicy,
  pub auth_username:      String,
  pub auth_password_hash: String,
}

fn default_upload_url_prefix() -> String { DEFAULT_URL_PREFIX.to_string() }

impl ServerConfig {
  pub fn auth(&self) -> AuthConfig {
    AuthConfig {
      username:      self.auth_username.clone(),
      password_hash: self.auth_password_hash.clone(),
    }
  }
}

// ─── Application state ────────────────────────────────────────────────────────

/// Everything the router needs.
pub struct AppState<S> {
  pub api:    ApiState<S>,
  pub config: Arc<ServerConfig>,
  pub auth:   Arc<AuthConfig>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application router.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: Storage + 'static,
{
  let admin = nyx_api::admin_router(state.api.clone())
    .route_layer(middleware::from_fn_with_state(state.auth, require_operator));
  let api = nyx_api::public_router(state.api).nest("/admin", admin);

  let mut app = Router::new().nest("/api", api);

  let prefix = state.config.upload_url_prefix.trim_end_matches('/');
  if !prefix.is_empty() {
    app = app.nest_service(prefix, ServeDir::new(&state.config.upload_dir));
  }

  app.layer(TraceLayer::new_for_http())
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
  };
  use base64::Engine as _;
  use base64::engine::general_purpose::STANDARD as B64;
  use nyx_api::ImageUploader;
  use nyx_core::content::ContentStore;
  use nyx_store_sqlite::SqliteStorage;
  use rand_core::OsRng;
  use serde_json::{Value, json};
  use tempfile::TempDir;
  use tower::ServiceExt as _;

  struct TestApp {
    app:     Router,
    uploads: TempDir,
  }

  async fn make_app(password: &str) -> TestApp {
    let upload = tempfile::tempdir().unwrap();
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
      .hash_password(password.as_bytes(), &salt)
      .unwrap()
      .to_string();

    let config = ServerConfig {
      host:               "127.0.0.1".to_string(),
      port:               8080,
      store_path:         PathBuf::from(":memory:"),
      upload_dir:         upload.path().to_path_buf(),
      upload_url_prefix:  DEFAULT_URL_PREFIX.to_string(),
      slug_policy:        SlugPolicy::Suffix,
      auth_username:      "editor".to_string(),
      auth_password_hash: hash,
    };

    let storage = SqliteStorage::open_in_memory().await.unwrap();
    let posts = ContentStore::new(Arc::new(storage)).with_slug_policy(config.slug_policy);
    let uploader = ImageUploader::new(&config.upload_dir, &config.upload_url_prefix);

    let state = AppState {
      api:    ApiState::new(posts, uploader),
      auth:   Arc::new(config.auth()),
      config: Arc::new(config),
    };
    TestApp {
      app:     router(state),
      uploads: upload,
    }
  }

  fn auth_header(user: &str, pass: &str) -> String {
    format!("Basic {}", B64.encode(format!("{user}:{pass}")))
  }

  async fn oneshot_raw(
    app:    &Router,
    method: &str,
    uri:    &str,
    auth:   Option<&str>,
    body:   Option<Value>,
  ) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(a) = auth {
      builder = builder.header(header::AUTHORIZATION, a);
    }
    let body = match body {
      Some(v) => {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
        Body::from(v.to_string())
      }
      None => Body::empty(),
    };
    app.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
  }

  // ── Public routes ───────────────────────────────────────────────────────────

  #[tokio::test]
  async fn public_routes_need_no_credentials() {
    let t = make_app("secret").await;
    let resp = oneshot_raw(&t.app, "GET", "/api/posts", None, None).await;
    assert_eq!(resp.status(), StatusCode::OK);
  }

  // ── Operator routes ─────────────────────────────────────────────────────────

  #[tokio::test]
  async fn admin_without_credentials_is_challenged() {
    let t = make_app("secret").await;
    let resp = oneshot_raw(&t.app, "GET", "/api/admin/posts", None, None).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let challenge = resp.headers().get(header::WWW_AUTHENTICATE).unwrap();
    assert_eq!(challenge, "Basic realm=\"nyxspectra\"");
  }

  #[tokio::test]
  async fn admin_with_wrong_password_is_rejected() {
    let t = make_app("secret").await;
    let auth = auth_header("editor", "guess");
    let resp = oneshot_raw(&t.app, "DELETE", "/api/admin/analytics", Some(&auth), None).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
  }

  #[tokio::test]
  async fn operator_can_approve_a_submission() {
    let t = make_app("secret").await;
    let auth = auth_header("editor", "secret");

    let submission = json!({
      "title": "Remote Monitoring",
      "content": "<p>Wearables</p>",
      "tags": ["iot"],
    });
    let resp = oneshot_raw(&t.app, "POST", "/api/posts", None, Some(submission)).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = oneshot_raw(
      &t.app,
      "POST",
      "/api/admin/posts/remote-monitoring/approve",
      Some(&auth),
      None,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = oneshot_raw(&t.app, "GET", "/api/posts/remote-monitoring", None, None).await;
    assert_eq!(resp.status(), StatusCode::OK);
  }

  // ── Uploaded files ──────────────────────────────────────────────────────────

  #[tokio::test]
  async fn uploaded_images_are_served_from_prefix() {
    let t = make_app("secret").await;
    std::fs::write(t.uploads.path().join("abc.png"), b"png-bytes").unwrap();

    let resp = oneshot_raw(&t.app, "GET", "/Images/blog-uploads/abc.png", None, None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"png-bytes");
  }

  // ── Configuration ───────────────────────────────────────────────────────────

  #[test]
  fn config_defaults_apply() {
    let cfg: ServerConfig = serde_json::from_value(json!({
      "host": "0.0.0.0",
      "port": 8080,
      "store_path": "~/nyx.db",
      "upload_dir": "uploads",
      "auth_username": "editor",
      "auth_password_hash": "$argon2id$...",
    }))
    .unwrap();
    assert_eq!(cfg.upload_url_prefix, "/Images/blog-uploads");
    assert_eq!(cfg.slug_policy, SlugPolicy::Suffix);
  }
}
