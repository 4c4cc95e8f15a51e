//! Handlers for analytics endpoints.
//!
//! Recording is public; reading and clearing are operator-only and are
//! mounted by [`crate::admin_router`].

use axum::{Json, extract::State, http::StatusCode};
use nyx_core::{
  analytics::{AnalyticsSnapshot, NewEvent},
  storage::Storage,
};
use serde::Deserialize;

use crate::{ApiState, error::ApiError, extract::ApiJson};

#[derive(Debug, Deserialize)]
pub struct PageViewBody {
  pub url: String,
}

/// `POST /analytics/page-views` — body: `{"url":"/blog"}`
pub async fn page_view<S: Storage>(
  State(state): State<ApiState<S>>,
  ApiJson(body): ApiJson<PageViewBody>,
) -> Result<StatusCode, ApiError> {
  state.analytics.record_page_view(body.url).await?;
  Ok(StatusCode::NO_CONTENT)
}

/// `POST /analytics/events` — body: `{"category":..,"action":..,"label"?:..,"value"?:..}`
pub async fn event<S: Storage>(
  State(state): State<ApiState<S>>,
  ApiJson(body): ApiJson<NewEvent>,
) -> Result<StatusCode, ApiError> {
  state.analytics.record_event(body).await?;
  Ok(StatusCode::NO_CONTENT)
}

/// `GET /admin/analytics`
pub async fn snapshot<S: Storage>(State(state): State<ApiState<S>>) -> Json<AnalyticsSnapshot> {
  Json(state.analytics.read_all().await)
}

/// `DELETE /admin/analytics`
pub async fn clear<S: Storage>(State(state): State<ApiState<S>>) -> Result<StatusCode, ApiError> {
  state.analytics.clear_all().await?;
  Ok(StatusCode::NO_CONTENT)
}
