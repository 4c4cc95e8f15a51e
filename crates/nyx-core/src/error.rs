//! Error types for `nyx-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("storage error: {0}")]
  Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),

  #[error("a post with id {0:?} already exists")]
  DuplicateId(String),

  #[error("title does not produce a usable slug")]
  EmptySlug,
}

impl Error {
  pub(crate) fn storage<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Storage(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
