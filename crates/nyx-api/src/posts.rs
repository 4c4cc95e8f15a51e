//! Public handlers for `/posts` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/posts` | Visible posts only |
//! | `GET`  | `/posts/:id` | 404 if absent or pending |
//! | `GET`  | `/posts/:id/related` | Optional `?limit=`; default 3 |
//! | `POST` | `/posts` | Body: [`Submission`]; returns 201 + the pending post |

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use chrono::Utc;
use nyx_core::{
  post::{Post, Submission},
  related::DEFAULT_RELATED_LIMIT,
  storage::Storage,
};
use serde::Deserialize;

use crate::{ApiState, error::ApiError, extract::ApiJson};

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /posts`
pub async fn list<S: Storage>(State(state): State<ApiState<S>>) -> Json<Vec<Post>> {
  Json(state.posts.list(false).await)
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /posts/:id`
pub async fn get_one<S: Storage>(
  State(state): State<ApiState<S>>,
  Path(id): Path<String>,
) -> Result<Json<Post>, ApiError> {
  let post = state
    .posts
    .get_by_slug(&id, false)
    .await
    .ok_or_else(|| ApiError::NotFound(format!("post {id} not found")))?;
  Ok(Json(post))
}

// ─── Related ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RelatedParams {
  pub limit: Option<usize>,
}

/// `GET /posts/:id/related[?limit=<n>]`
///
/// An unknown or pending id yields an empty list rather than a 404.
pub async fn related<S: Storage>(
  State(state): State<ApiState<S>>,
  Path(id): Path<String>,
  Query(params): Query<RelatedParams>,
) -> Json<Vec<Post>> {
  let limit = params.limit.unwrap_or(DEFAULT_RELATED_LIMIT);
  Json(state.posts.related_posts(&id, limit).await)
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /posts` — stores the submission as a pending post dated today (UTC).
pub async fn create<S: Storage>(
  State(state): State<ApiState<S>>,
  ApiJson(body): ApiJson<Submission>,
) -> Result<impl IntoResponse, ApiError> {
  if body.title.trim().is_empty() {
    return Err(ApiError::BadRequest("title is required".into()));
  }
  let draft = body.into_draft(Utc::now().date_naive());
  let post = state.posts.create(draft).await?;
  Ok((StatusCode::CREATED, Json(post)))
}
