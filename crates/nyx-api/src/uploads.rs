//! Header-image uploads: `POST /uploads` with a multipart `file` field.
//!
//! Responds `{"filePath": "/Images/blog-uploads/<uuid>.<ext>", "success": true}`.
//! The returned path is what a submission puts in its `image` field.

use std::path::{Path, PathBuf};

use axum::{
  Json,
  extract::{
    Multipart, State,
    multipart::MultipartError,
  },
  http::StatusCode,
};
use bytes::Bytes;
use nyx_core::{
  storage::Storage,
  upload::{self, ImageKind, UploadError},
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::{ApiState, error::ApiError};

/// Public URL prefix used when none is configured.
pub const DEFAULT_URL_PREFIX: &str = "/Images/blog-uploads";

// ─── Uploader ─────────────────────────────────────────────────────────────────

/// Writes validated images to disk under random names.
#[derive(Debug, Clone)]
pub struct ImageUploader {
  dir:        PathBuf,
  url_prefix: String,
}

impl ImageUploader {
  /// Files go into `dir`; returned paths start with `url_prefix`.
  pub fn new(dir: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
    Self {
      dir:        dir.into(),
      url_prefix: url_prefix.into(),
    }
  }

  pub fn dir(&self) -> &Path { &self.dir }

  /// Store `data` and return its public path. Creates the directory on first
  /// use.
  pub async fn save(&self, kind: ImageKind, data: Bytes) -> Result<String, UploadError> {
    tokio::fs::create_dir_all(&self.dir)
      .await
      .map_err(|e| UploadError::Internal(Box::new(e)))?;

    let file_name = format!("{}.{}", Uuid::new_v4(), kind.extension());
    tokio::fs::write(self.dir.join(&file_name), &data)
      .await
      .map_err(|e| UploadError::Internal(Box::new(e)))?;

    info!(file = %file_name, bytes = data.len(), mime = kind.mime(), "stored upload");
    Ok(format!("{}/{}", self.url_prefix.trim_end_matches('/'), file_name))
  }
}

// ─── Handler ──────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
  pub file_path: String,
  pub success:   bool,
}

fn read_error(e: MultipartError) -> UploadError {
  if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
    UploadError::TooLarge
  } else {
    UploadError::Internal(Box::new(e))
  }
}

/// `POST /uploads`
pub async fn handler<S: Storage>(
  State(state): State<ApiState<S>>,
  mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
  let mut file: Option<(Option<String>, Bytes)> = None;

  while let Some(field) = multipart.next_field().await.map_err(read_error)? {
    if field.name() == Some("file") {
      let mime = field.content_type().map(str::to_owned);
      let data = field.bytes().await.map_err(read_error)?;
      file = Some((mime, data));
      break;
    }
  }

  let (mime, data) = file.ok_or(UploadError::Missing)?;
  let kind = upload::validate(mime.as_deref(), &data)?;
  let file_path = state.uploader.save(kind, data).await?;

  Ok(Json(UploadResponse {
    file_path,
    success: true,
  }))
}
