//! [`ContentStore`] — the sole authority over the persisted post collection.
//!
//! The whole collection lives under [`POSTS_KEY`] and every mutation is a
//! read-modify-write of the full array. Mutations inside one process are
//! serialised; separate processes sharing a backend are last-write-wins.
//!
//! Reads never fail. An unreachable backend serves the default posts and a
//! corrupt document reads as an empty collection; both are logged. Writes
//! are strict: a mutation over a corrupt document fails with
//! [`Error::Serialization`] and leaves it in place.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::{
  Error, Result,
  moderation::Transition,
  post::{Post, PostDraft},
  related::select_related,
  seed::default_posts,
  slug::slugify,
  storage::{POSTS_KEY, Storage},
};

// ─── Slug policy ─────────────────────────────────────────────────────────────

/// What [`ContentStore::create`] does when a new slug is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlugPolicy {
  /// Append `-2`, `-3`, … until the id is unused.
  #[default]
  Suffix,
  /// Fail with [`Error::DuplicateId`].
  Reject,
  /// Store the colliding id as-is. Lookups then see the newest post first.
  Allow,
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// Blog post collection over any [`Storage`] backend.
pub struct ContentStore<S> {
  storage:     Arc<S>,
  slug_policy: SlugPolicy,
  write_lock:  Mutex<()>,
}

impl<S: Storage> ContentStore<S> {
  pub fn new(storage: Arc<S>) -> Self {
    Self {
      storage,
      slug_policy: SlugPolicy::default(),
      write_lock: Mutex::new(()),
    }
  }

  pub fn with_slug_policy(mut self, policy: SlugPolicy) -> Self {
    self.slug_policy = policy;
    self
  }

  pub fn slug_policy(&self) -> SlugPolicy { self.slug_policy }

  pub fn storage(&self) -> &Arc<S> { &self.storage }

  // ── Reads ─────────────────────────────────────────────────────────────────

  /// All posts, or only approved ones, in stored order.
  ///
  /// The first call against an empty backend seeds it with
  /// [`default_posts`].
  pub async fn list(&self, include_unapproved: bool) -> Vec<Post> {
    let posts = self.load().await;
    if include_unapproved {
      posts
    } else {
      posts.into_iter().filter(Post::is_visible).collect()
    }
  }

  /// The first post with `id`, if it exists and passes the approval filter.
  pub async fn get_by_slug(&self, id: &str, include_unapproved: bool) -> Option<Post> {
    self
      .list(include_unapproved)
      .await
      .into_iter()
      .find(|p| p.id == id)
  }

  /// Visible posts sharing a category or tag with `id`; see
  /// [`select_related`].
  pub async fn related_posts(&self, id: &str, limit: usize) -> Vec<Post> {
    select_related(&self.list(false).await, id, limit)
  }

  // ── Writes ────────────────────────────────────────────────────────────────

  /// Persist a new pending post at the front of the collection.
  pub async fn create(&self, draft: PostDraft) -> Result<Post> {
    let _guard = self.write_lock.lock().await;

    let base = slugify(&draft.title);
    if base.chars().all(|c| c == '-') {
      return Err(Error::EmptySlug);
    }

    let mut posts = self.load_for_write().await?;
    let id = self.resolve_id(base, &posts)?;
    let post = Post::from_draft(id, draft, false);

    posts.insert(0, post.clone());
    self.write_collection(&posts).await?;

    info!(id = %post.id, "created pending post");
    Ok(post)
  }

  /// Set the approval flag on the first post with `id`.
  ///
  /// Returns `None` (and writes nothing) if no post has that id.
  pub async fn set_approval(&self, id: &str, approved: bool) -> Result<Option<Post>> {
    let _guard = self.write_lock.lock().await;

    let mut posts = self.load_for_write().await?;
    let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
      debug!(id, "approval change for unknown post");
      return Ok(None);
    };
    post.approved = approved;
    let updated = post.clone();

    self.write_collection(&posts).await?;

    info!(id, approved, "post approval changed");
    Ok(Some(updated))
  }

  /// Apply a moderation transition; see [`Self::set_approval`].
  pub async fn moderate(&self, id: &str, transition: Transition) -> Result<Option<Post>> {
    self.set_approval(id, transition.approved()).await
  }

  pub async fn approve(&self, id: &str) -> Result<Option<Post>> {
    self.moderate(id, Transition::Approve).await
  }

  pub async fn reject(&self, id: &str) -> Result<Option<Post>> {
    self.moderate(id, Transition::Reject).await
  }

  /// Remove every post with `id`. Returns whether anything was removed.
  pub async fn delete(&self, id: &str) -> Result<bool> {
    let _guard = self.write_lock.lock().await;

    let mut posts = self.load_for_write().await?;
    let before = posts.len();
    posts.retain(|p| p.id != id);

    if posts.len() == before {
      debug!(id, "delete for unknown post");
      return Ok(false);
    }

    self.write_collection(&posts).await?;

    info!(id, removed = before - posts.len(), "deleted post");
    Ok(true)
  }

  // ── Internals ─────────────────────────────────────────────────────────────

  /// Fail-open load for the read paths.
  async fn load(&self) -> Vec<Post> {
    match self.fetch().await {
      Ok(Some(posts)) => posts,
      Ok(None) => {
        // Seeding is a write; it shares the mutation guard.
        let _guard = self.write_lock.lock().await;
        self.load_for_write().await.unwrap_or_else(fail_open)
      }
      Err(e) => fail_open(e),
    }
  }

  /// Strict load for the mutation paths. The caller holds `write_lock`.
  ///
  /// A corrupt document is an error here, never an empty collection.
  async fn load_for_write(&self) -> Result<Vec<Post>> {
    if let Some(posts) = self.fetch().await? {
      return Ok(posts);
    }
    let posts = default_posts();
    info!(count = posts.len(), "seeding empty post collection");
    self.write_collection(&posts).await?;
    Ok(posts)
  }

  async fn fetch(&self) -> Result<Option<Vec<Post>>> {
    let raw = self.storage.get(POSTS_KEY).await.map_err(Error::storage)?;
    match raw {
      Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
      None => Ok(None),
    }
  }

  async fn write_collection(&self, posts: &[Post]) -> Result<()> {
    let raw = serde_json::to_string(posts)?;
    self
      .storage
      .set(POSTS_KEY, raw)
      .await
      .map_err(Error::storage)
  }

  fn resolve_id(&self, base: String, posts: &[Post]) -> Result<String> {
    let taken = |id: &str| posts.iter().any(|p| p.id == id);

    match self.slug_policy {
      SlugPolicy::Allow => Ok(base),
      _ if !taken(&base) => Ok(base),
      SlugPolicy::Reject => Err(Error::DuplicateId(base)),
      SlugPolicy::Suffix => {
        let mut n = 2_u32;
        loop {
          let candidate = format!("{base}-{n}");
          if !taken(&candidate) {
            return Ok(candidate);
          }
          n += 1;
        }
      }
    }
  }
}

fn fail_open(e: Error) -> Vec<Post> {
  match e {
    Error::Serialization(e) => {
      error!(key = POSTS_KEY, error = %e, "stored post collection is corrupt; reading as empty");
      Vec::new()
    }
    e => {
      warn!(error = %e, "post storage unavailable; serving default posts");
      default_posts()
    }
  }
}
