//! The `Storage` trait — a string key-value store the blog persists into.
//!
//! Every collection (posts, page views, events) lives under one key as a
//! JSON document and is rewritten whole on each change. Backends only need
//! to get, set and remove whole values.

use std::{
  collections::HashMap,
  convert::Infallible,
  future::Future,
  sync::{Arc, RwLock},
};

// ─── Keys ────────────────────────────────────────────────────────────────────

/// JSON array of [`Post`](crate::post::Post).
pub const POSTS_KEY: &str = "blog_posts";
/// JSON array of [`PageView`](crate::analytics::PageView).
pub const PAGE_VIEWS_KEY: &str = "nyxspectra_page_views";
/// JSON array of [`Event`](crate::analytics::Event).
pub const EVENTS_KEY: &str = "nyxspectra_events";

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a persisted key-value backend.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait Storage: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Read the value stored under `key`, or `None` if nothing is stored.
  fn get<'a>(
    &'a self,
    key: &'a str,
  ) -> impl Future<Output = Result<Option<String>, Self::Error>> + Send + 'a;

  /// Replace the value stored under `key`.
  fn set<'a>(
    &'a self,
    key: &'a str,
    value: String,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Remove `key`. Removing an absent key is not an error.
  fn remove<'a>(
    &'a self,
    key: &'a str,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}

// ─── MemoryStorage ───────────────────────────────────────────────────────────

/// A process-local [`Storage`] backed by a hash map.
///
/// Cloning is cheap and clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
  entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
  pub fn new() -> Self { Self::default() }

  /// Number of keys currently stored.
  pub fn len(&self) -> usize { self.read().len() }

  pub fn is_empty(&self) -> bool { self.len() == 0 }

  fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, String>> {
    // A poisoned map still holds consistent whole values.
    self.entries.read().unwrap_or_else(|e| e.into_inner())
  }

  fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, String>> {
    self.entries.write().unwrap_or_else(|e| e.into_inner())
  }
}

impl Storage for MemoryStorage {
  type Error = Infallible;

  async fn get(&self, key: &str) -> Result<Option<String>, Infallible> {
    Ok(self.read().get(key).cloned())
  }

  async fn set(&self, key: &str, value: String) -> Result<(), Infallible> {
    self.write().insert(key.to_owned(), value);
    Ok(())
  }

  async fn remove(&self, key: &str) -> Result<(), Infallible> {
    self.write().remove(key);
    Ok(())
  }
}
