//! Async HTTP client wrapping the NyxSpectra JSON API.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use nyx_core::{analytics::AnalyticsSnapshot, post::Post};
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::debug;

/// Connection settings for the blog API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
  pub username: String,
  pub password: String,
}

/// Async HTTP client for the operator half of the API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!(
      "{}/api/admin{}",
      self.config.base_url.trim_end_matches('/'),
      path
    )
  }

  fn auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    if self.config.username.is_empty() {
      req
    } else {
      req.basic_auth(&self.config.username, Some(&self.config.password))
    }
  }

  /// Turn a non-2xx response into an error carrying the server's message.
  async fn check(resp: Response, what: &str) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
      return Ok(resp);
    }
    let message = resp
      .json::<Value>()
      .await
      .ok()
      .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_owned))
      .unwrap_or_else(|| status.to_string());
    Err(anyhow!("{what} → {status}: {message}"))
  }

  // ── Posts ─────────────────────────────────────────────────────────────────

  /// `GET /api/admin/posts`
  pub async fn list_posts(&self) -> Result<Vec<Post>> {
    let resp = self
      .auth(self.client.get(self.url("/posts")))
      .send()
      .await
      .context("GET /posts failed")?;
    let posts: Vec<Post> = Self::check(resp, "GET /posts")
      .await?
      .json()
      .await
      .context("deserialising posts")?;
    debug!(count = posts.len(), "loaded posts");
    Ok(posts)
  }

  /// `POST /api/admin/posts/<id>/approve`
  pub async fn approve(&self, id: &str) -> Result<Post> {
    self.transition(id, "approve").await
  }

  /// `POST /api/admin/posts/<id>/reject`
  pub async fn reject(&self, id: &str) -> Result<Post> {
    self.transition(id, "reject").await
  }

  async fn transition(&self, id: &str, action: &str) -> Result<Post> {
    let path = format!("/posts/{id}/{action}");
    let resp = self
      .auth(self.client.post(self.url(&path)))
      .send()
      .await
      .with_context(|| format!("POST {path} failed"))?;
    Self::check(resp, &format!("POST {path}"))
      .await?
      .json()
      .await
      .context("deserialising post")
  }

  /// `DELETE /api/admin/posts/<id>`
  pub async fn delete(&self, id: &str) -> Result<()> {
    let path = format!("/posts/{id}");
    let resp = self
      .auth(self.client.delete(self.url(&path)))
      .send()
      .await
      .with_context(|| format!("DELETE {path} failed"))?;
    Self::check(resp, &format!("DELETE {path}")).await?;
    Ok(())
  }

  // ── Analytics ─────────────────────────────────────────────────────────────

  /// `GET /api/admin/analytics`
  pub async fn analytics(&self) -> Result<AnalyticsSnapshot> {
    let resp = self
      .auth(self.client.get(self.url("/analytics")))
      .send()
      .await
      .context("GET /analytics failed")?;
    Self::check(resp, "GET /analytics")
      .await?
      .json()
      .await
      .context("deserialising analytics")
  }

  /// `DELETE /api/admin/analytics`
  pub async fn clear_analytics(&self) -> Result<()> {
    let resp = self
      .auth(self.client.delete(self.url("/analytics")))
      .send()
      .await
      .context("DELETE /analytics failed")?;
    Self::check(resp, "DELETE /analytics").await?;
    Ok(())
  }
}
