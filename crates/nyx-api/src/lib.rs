//! JSON REST API for the NyxSpectra blog.
//!
//! Exposes two axum [`Router`]s backed by any [`Storage`]:
//!
//! - [`public_router`] — what anonymous visitors may do: read visible posts,
//!   submit posts for review, upload images, record analytics.
//! - [`admin_router`] — operator actions: see pending posts, approve, reject,
//!   delete, read and clear analytics.
//!
//! Authentication, TLS and transport concerns are the caller's
//! responsibility; the admin router must be mounted behind an auth layer.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let api = nyx_api::public_router(state.clone())
//!   .nest("/admin", nyx_api::admin_router(state).route_layer(auth));
//! Router::new().nest("/api", api)
//! ```

pub mod analytics;
pub mod error;
pub mod extract;
pub mod moderation;
pub mod posts;
pub mod uploads;


use std::sync::Arc;

use axum::{
  Router,
  extract::DefaultBodyLimit,
  routing::{get, post},
};
use nyx_core::{analytics::Analytics, content::ContentStore, storage::Storage, upload::MAX_UPLOAD_BYTES};

pub use error::ApiError;
pub use uploads::ImageUploader;

/// Multipart framing allowance on top of the largest accepted image.
const UPLOAD_BODY_SLACK: usize = 64 * 1024;

// ─── State ────────────────────────────────────────────────────────────────────

/// Services shared by every handler.
pub struct ApiState<S> {
  pub posts:     Arc<ContentStore<S>>,
  pub analytics: Arc<Analytics<S>>,
  pub uploader:  Arc<ImageUploader>,
}

impl<S: Storage> ApiState<S> {
  /// Build the content store and analytics tracker over one shared backend.
  pub fn new(posts: ContentStore<S>, uploader: ImageUploader) -> Self {
    let analytics = Analytics::new(posts.storage().clone());
    Self {
      posts:     Arc::new(posts),
      analytics: Arc::new(analytics),
      uploader:  Arc::new(uploader),
    }
  }
}

impl<S> Clone for ApiState<S> {
  fn clone(&self) -> Self {
    Self {
      posts:     self.posts.clone(),
      analytics: self.analytics.clone(),
      uploader:  self.uploader.clone(),
    }
  }
}

// ─── Routers ──────────────────────────────────────────────────────────────────

/// Routes open to anonymous visitors.
pub fn public_router<S>(state: ApiState<S>) -> Router<()>
where
  S: Storage + 'static,
{
  Router::new()
    // Posts
    .route("/posts", get(posts::list::<S>).post(posts::create::<S>))
    .route("/posts/{id}", get(posts::get_one::<S>))
    .route("/posts/{id}/related", get(posts::related::<S>))
    // Uploads
    .route(
      "/uploads",
      post(uploads::handler::<S>)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + UPLOAD_BODY_SLACK)),
    )
    // Analytics
    .route("/analytics/page-views", post(analytics::page_view::<S>))
    .route("/analytics/events", post(analytics::event::<S>))
    .with_state(state)
}

/// Operator routes. Mount behind authentication.
pub fn admin_router<S>(state: ApiState<S>) -> Router<()>
where
  S: Storage + 'static,
{
  Router::new()
    // Posts in any state
    .route("/posts", get(moderation::list_all::<S>))
    .route(
      "/posts/{id}",
      get(moderation::get_any::<S>).delete(moderation::delete_one::<S>),
    )
    .route("/posts/{id}/approve", post(moderation::approve_one::<S>))
    .route("/posts/{id}/reject", post(moderation::reject_one::<S>))
    // Analytics
    .route(
      "/analytics",
      get(analytics::snapshot::<S>).delete(analytics::clear::<S>),
    )
    .with_state(state)
}
