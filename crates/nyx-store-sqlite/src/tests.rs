//! Integration tests for `SqliteStorage`.

use std::sync::Arc;

use nyx_core::{
  analytics::{Analytics, NewEvent},
  content::ContentStore,
  post::{Author, PostDraft},
  storage::{POSTS_KEY, Storage},
};

use crate::{Error, SqliteStorage};

async fn storage() -> SqliteStorage {
  SqliteStorage::open_in_memory()
    .await
    .expect("in-memory storage")
}

fn draft(title: &str) -> PostDraft {
  PostDraft {
    title:     title.into(),
    excerpt:   "Excerpt".into(),
    content:   "<p>Body</p>".into(),
    image:     "/Images/blog/default-blog-image.jpg".into(),
    author:    Author::guest(),
    category:  "Healthcare Technology".into(),
    tags:      vec!["FHIR".into()],
    read_time: "2 min".into(),
    date:      "June 1, 2023".into(),
  }
}

// ─── Key-value ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn get_missing_returns_none() {
  let s = storage().await;
  assert_eq!(s.get("absent").await.unwrap(), None);
}

#[tokio::test]
async fn set_overwrites_existing_value() {
  let s = storage().await;
  s.set("k", "first".into()).await.unwrap();
  s.set("k", "second".into()).await.unwrap();
  assert_eq!(s.get("k").await.unwrap().as_deref(), Some("second"));
}

#[tokio::test]
async fn remove_is_idempotent() {
  let s = storage().await;
  s.set("k", "v".into()).await.unwrap();
  s.remove("k").await.unwrap();
  s.remove("k").await.unwrap();
  assert_eq!(s.get("k").await.unwrap(), None);
}

// ─── Through the content store ───────────────────────────────────────────────

#[tokio::test]
async fn content_store_round_trips_through_sqlite() {
  let s = Arc::new(storage().await);
  let posts = ContentStore::new(s.clone());

  let created = posts.create(draft("FHIR in Practice")).await.unwrap();
  assert_eq!(posts.get_by_slug(&created.id, true).await, Some(created.clone()));

  // A second store over the same connection sees the same collection.
  let again = ContentStore::new(s.clone());
  assert_eq!(again.list(true).await.len(), 4);
  assert!(again.list(false).await.iter().all(|p| p.id != created.id));

  let raw = s.get(POSTS_KEY).await.unwrap().unwrap();
  let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
  assert_eq!(parsed[0]["id"], "fhir-in-practice");
}

#[tokio::test]
async fn related_posts_by_shared_tag() {
  let s = Arc::new(storage().await);
  let posts = ContentStore::new(s);

  let created = posts.create(draft("FHIR in Practice")).await.unwrap();
  posts.approve(&created.id).await.unwrap();

  let related = posts
    .related_posts("future-of-hospital-information-systems", 3)
    .await;
  assert_eq!(related.len(), 1);
  assert_eq!(related[0].id, created.id);
}

#[tokio::test]
async fn analytics_share_the_database() {
  let s = Arc::new(storage().await);
  let analytics = Analytics::new(s.clone());

  analytics.record_page_view("/blog").await.unwrap();
  analytics.record_event(NewEvent::new("blog", "submit")).await.unwrap();

  let snap = analytics.read_all().await;
  assert_eq!(snap.page_views.len(), 1);
  assert_eq!(snap.events.len(), 1);

  analytics.clear_all().await.unwrap();
  assert!(analytics.read_all().await.events.is_empty());
}

// ─── Files ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn data_survives_reopen() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("blog.sqlite");

  {
    let s = Arc::new(SqliteStorage::open(&path).await.unwrap());
    let posts = ContentStore::new(s);
    let created = posts.create(draft("Persisted Post")).await.unwrap();
    posts.approve(&created.id).await.unwrap();
  }

  let s = Arc::new(SqliteStorage::open(&path).await.unwrap());
  let posts = ContentStore::new(s);
  let found = posts.get_by_slug("persisted-post", false).await.unwrap();
  assert!(found.approved);
}

#[tokio::test]
async fn newer_schema_is_refused() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("future.sqlite");

  {
    let conn = rusqlite::Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 99;").unwrap();
  }

  let err = SqliteStorage::open(&path).await.err().unwrap();
  assert!(matches!(err, Error::SchemaVersion { found: 99, .. }));
}
