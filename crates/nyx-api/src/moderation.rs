//! Operator handlers for `/admin/posts` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/admin/posts` | Every post, pending included |
//! | `GET`    | `/admin/posts/:id` | Post in any state |
//! | `POST`   | `/admin/posts/:id/approve` | Returns the updated post |
//! | `POST`   | `/admin/posts/:id/reject` | Returns the updated post |
//! | `DELETE` | `/admin/posts/:id` | 204 on success |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
};
use nyx_core::{moderation::Transition, post::Post, storage::Storage};

use crate::{ApiState, error::ApiError};

fn not_found(id: &str) -> ApiError { ApiError::NotFound(format!("post {id} not found")) }

/// `GET /admin/posts`
pub async fn list_all<S: Storage>(State(state): State<ApiState<S>>) -> Json<Vec<Post>> {
  Json(state.posts.list(true).await)
}

/// `GET /admin/posts/:id`
pub async fn get_any<S: Storage>(
  State(state): State<ApiState<S>>,
  Path(id): Path<String>,
) -> Result<Json<Post>, ApiError> {
  let post = state
    .posts
    .get_by_slug(&id, true)
    .await
    .ok_or_else(|| not_found(&id))?;
  Ok(Json(post))
}

async fn transition<S: Storage>(
  state: &ApiState<S>,
  id: &str,
  transition: Transition,
) -> Result<Json<Post>, ApiError> {
  let post = state
    .posts
    .moderate(id, transition)
    .await?
    .ok_or_else(|| not_found(id))?;
  Ok(Json(post))
}

/// `POST /admin/posts/:id/approve`
pub async fn approve_one<S: Storage>(
  State(state): State<ApiState<S>>,
  Path(id): Path<String>,
) -> Result<Json<Post>, ApiError> {
  transition(&state, &id, Transition::Approve).await
}

/// `POST /admin/posts/:id/reject`
pub async fn reject_one<S: Storage>(
  State(state): State<ApiState<S>>,
  Path(id): Path<String>,
) -> Result<Json<Post>, ApiError> {
  transition(&state, &id, Transition::Reject).await
}

/// `DELETE /admin/posts/:id`
pub async fn delete_one<S: Storage>(
  State(state): State<ApiState<S>>,
  Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
  if state.posts.delete(&id).await? {
    Ok(StatusCode::NO_CONTENT)
  } else {
    Err(not_found(&id))
  }
}
