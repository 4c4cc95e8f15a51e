//! Capped page-view and event logs.
//!
//! Both logs are JSON arrays stored under their own key. Appending trims the
//! array to the most recent entries so neither grows without bound.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::{
  Error, Result,
  storage::{EVENTS_KEY, PAGE_VIEWS_KEY, Storage},
};

/// Page views retained.
pub const PAGE_VIEW_CAP: usize = 20;
/// Events retained.
pub const EVENT_CAP: usize = 50;

// ─── Records ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageView {
  pub url:       String,
  pub timestamp: DateTime<Utc>,
}

/// A tracked interaction such as a button click or form submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
  pub category:  String,
  pub action:    String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub label:     Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub value:     Option<f64>,
  pub timestamp: DateTime<Utc>,
}

/// Input to [`Analytics::record_event`]; the timestamp is set on record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEvent {
  pub category: String,
  pub action:   String,
  pub label:    Option<String>,
  pub value:    Option<f64>,
}

impl NewEvent {
  pub fn new(category: impl Into<String>, action: impl Into<String>) -> Self {
    Self {
      category: category.into(),
      action:   action.into(),
      label:    None,
      value:    None,
    }
  }
}

/// Everything currently retained, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
  pub page_views: Vec<PageView>,
  pub events:     Vec<Event>,
}

// ─── Tracker ─────────────────────────────────────────────────────────────────

pub struct Analytics<S> {
  storage:    Arc<S>,
  write_lock: Mutex<()>,
}

impl<S: Storage> Analytics<S> {
  pub fn new(storage: Arc<S>) -> Self {
    Self {
      storage,
      write_lock: Mutex::new(()),
    }
  }

  pub async fn record_page_view(&self, url: impl Into<String>) -> Result<()> {
    let view = PageView {
      url:       url.into(),
      timestamp: Utc::now(),
    };
    debug!(url = %view.url, "page view");
    self.append(PAGE_VIEWS_KEY, view, PAGE_VIEW_CAP).await
  }

  pub async fn record_event(&self, event: NewEvent) -> Result<()> {
    let event = Event {
      category:  event.category,
      action:    event.action,
      label:     event.label,
      value:     event.value,
      timestamp: Utc::now(),
    };
    debug!(category = %event.category, action = %event.action, "event");
    self.append(EVENTS_KEY, event, EVENT_CAP).await
  }

  /// Read both logs. Unreadable logs come back empty.
  pub async fn read_all(&self) -> AnalyticsSnapshot {
    AnalyticsSnapshot {
      page_views: self.read_log(PAGE_VIEWS_KEY).await,
      events:     self.read_log(EVENTS_KEY).await,
    }
  }

  pub async fn clear_all(&self) -> Result<()> {
    let _guard = self.write_lock.lock().await;
    for key in [PAGE_VIEWS_KEY, EVENTS_KEY] {
      self.storage.remove(key).await.map_err(Error::storage)?;
    }
    Ok(())
  }

  async fn read_log<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
    match self.storage.get(key).await {
      Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
        warn!(key, error = %e, "analytics log is corrupt; reading as empty");
        Vec::new()
      }),
      Ok(None) => Vec::new(),
      Err(e) => {
        warn!(key, error = %e, "analytics storage unavailable");
        Vec::new()
      }
    }
  }

  async fn append<T>(&self, key: &str, entry: T, cap: usize) -> Result<()>
  where
    T: Serialize + DeserializeOwned + Send,
  {
    let _guard = self.write_lock.lock().await;

    let mut log: Vec<T> = self.read_log(key).await;
    log.push(entry);
    let excess = log.len().saturating_sub(cap);
    log.drain(..excess);

    let raw = serde_json::to_string(&log)?;
    self.storage.set(key, raw).await.map_err(Error::storage)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::storage::MemoryStorage;

  fn tracker() -> (Arc<MemoryStorage>, Analytics<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    (storage.clone(), Analytics::new(storage))
  }

  #[tokio::test]
  async fn empty_snapshot() {
    let (_, a) = tracker();
    assert_eq!(a.read_all().await, AnalyticsSnapshot::default());
  }

  #[tokio::test]
  async fn page_views_keep_most_recent_twenty() {
    let (_, a) = tracker();
    for i in 0..25 {
      a.record_page_view(format!("/blog/{i}")).await.unwrap();
    }
    let snap = a.read_all().await;
    assert_eq!(snap.page_views.len(), PAGE_VIEW_CAP);
    assert_eq!(snap.page_views.first().unwrap().url, "/blog/5");
    assert_eq!(snap.page_views.last().unwrap().url, "/blog/24");
  }

  #[tokio::test]
  async fn events_keep_most_recent_fifty() {
    let (_, a) = tracker();
    for i in 0..60_u32 {
      let mut e = NewEvent::new("cta", "click");
      e.value = Some(f64::from(i));
      a.record_event(e).await.unwrap();
    }
    let snap = a.read_all().await;
    assert_eq!(snap.events.len(), EVENT_CAP);
    assert_eq!(snap.events[0].value, Some(10.0));
  }

  #[tokio::test]
  async fn event_optional_fields_are_omitted_from_json() {
    let (storage, a) = tracker();
    a.record_event(NewEvent::new("form", "submit")).await.unwrap();
    let raw = storage.get(EVENTS_KEY).await.unwrap().unwrap();
    assert!(!raw.contains("label"));
    assert!(!raw.contains("value"));
  }

  #[tokio::test]
  async fn clear_removes_both_logs() {
    let (storage, a) = tracker();
    a.record_page_view("/").await.unwrap();
    a.record_event(NewEvent::new("nav", "open")).await.unwrap();
    a.clear_all().await.unwrap();
    assert!(storage.is_empty());
    assert_eq!(a.read_all().await, AnalyticsSnapshot::default());
  }

  #[tokio::test]
  async fn corrupt_log_reads_empty_and_is_replaced_on_write() {
    let (storage, a) = tracker();
    storage.set(PAGE_VIEWS_KEY, "{not json".into()).await.unwrap();
    assert!(a.read_all().await.page_views.is_empty());

    a.record_page_view("/contact").await.unwrap();
    assert_eq!(a.read_all().await.page_views.len(), 1);
  }
}
