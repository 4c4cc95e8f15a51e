//! Moderation queue state machine and key dispatcher.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fuzzy_matcher::{FuzzyMatcher, skim::SkimMatcherV2};
use nyx_core::post::Post;

use crate::client::ApiClient;

// ─── Screen ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
  /// Focus on the post list.
  Queue,
  /// Focus on the selected post.
  Detail,
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App {
  pub screen: Screen,

  /// Every post, pending and visible, newest first.
  pub posts: Vec<Post>,

  /// Hide approved posts from the list.
  pub pending_only: bool,

  /// Current fuzzy-filter string (only edited when `filter_active`).
  pub filter: String,

  pub filter_active: bool,

  /// Cursor position within the *filtered* list.
  pub list_cursor: usize,

  pub detail_scroll: usize,

  /// Id of the post shown in the detail pane.
  pub selected: Option<String>,

  /// Id awaiting a `y` to confirm deletion.
  pub confirm_delete: Option<String>,

  /// One-line status message shown in the status bar.
  pub status_msg: String,

  pub client: Arc<ApiClient>,
}

impl App {
  pub fn new(client: ApiClient) -> Self {
    Self {
      screen: Screen::Queue,
      posts: Vec::new(),
      pending_only: true,
      filter: String::new(),
      filter_active: false,
      list_cursor: 0,
      detail_scroll: 0,
      selected: None,
      confirm_delete: None,
      status_msg: String::new(),
      client: Arc::new(client),
    }
  }

  // ── Data loading ──────────────────────────────────────────────────────────

  /// Fetch all posts from the API.
  pub async fn load_posts(&mut self) -> anyhow::Result<()> {
    self.status_msg = "Loading posts…".into();
    match self.client.list_posts().await {
      Ok(posts) => {
        self.posts = posts;
        self.clamp_cursor();
        self.status_msg = String::new();
        Ok(())
      }
      Err(e) => {
        self.status_msg = format!("Error: {e}");
        Err(e)
      }
    }
  }

  /// Replace the local copy of `post` after a moderation call.
  fn replace(&mut self, post: Post) {
    if let Some(slot) = self.posts.iter_mut().find(|p| p.id == post.id) {
      *slot = post;
    }
    self.clamp_cursor();
  }

  fn clamp_cursor(&mut self) {
    let len = self.filtered_posts().len();
    if self.list_cursor >= len {
      self.list_cursor = len.saturating_sub(1);
    }
  }

  // ── Filtered list ─────────────────────────────────────────────────────────

  /// Posts matching the pending toggle and the filter query.
  pub fn filtered_posts(&self) -> Vec<&Post> {
    let matcher = SkimMatcherV2::default();
    self
      .posts
      .iter()
      .filter(|p| !self.pending_only || !p.approved)
      .filter(|p| {
        self.filter.is_empty()
          || matcher.fuzzy_match(&p.title, &self.filter).is_some()
          || matcher.fuzzy_match(&p.id, &self.filter).is_some()
          || p.tags.iter().any(|t| matcher.fuzzy_match(t, &self.filter).is_some())
      })
      .collect()
  }

  pub fn cursor_post(&self) -> Option<&Post> {
    self.filtered_posts().get(self.list_cursor).copied()
  }

  pub fn selected_post(&self) -> Option<&Post> {
    let id = self.selected.as_deref()?;
    self.posts.iter().find(|p| p.id == id)
  }

  /// Number of posts waiting for review.
  pub fn pending_count(&self) -> usize { self.posts.iter().filter(|p| !p.approved).count() }

  /// The id an action key applies to on the current screen.
  fn target_id(&self) -> Option<String> {
    match self.screen {
      Screen::Queue => self.cursor_post().map(|p| p.id.clone()),
      Screen::Detail => self.selected.clone(),
    }
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub async fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return Ok(false);
    }

    if let Some(id) = self.confirm_delete.take() {
      if key.code == KeyCode::Char('y') {
        self.delete(&id).await;
      } else {
        self.status_msg = "Delete cancelled".into();
      }
      return Ok(true);
    }

    if self.filter_active {
      self.handle_filter_key(key);
      return Ok(true);
    }

    // Moderation keys work on both screens.
    match key.code {
      KeyCode::Char('q') => return Ok(false),
      KeyCode::Char('a') => {
        if let Some(id) = self.target_id() {
          self.approve(&id).await;
        }
        return Ok(true);
      }
      KeyCode::Char('r') => {
        if let Some(id) = self.target_id() {
          self.reject(&id).await;
        }
        return Ok(true);
      }
      KeyCode::Char('d') => {
        if let Some(id) = self.target_id() {
          self.status_msg = format!("Delete {id}? [y/N]");
          self.confirm_delete = Some(id);
        }
        return Ok(true);
      }
      KeyCode::Char('R') => {
        // Errors land in the status bar.
        let _ = self.load_posts().await;
        return Ok(true);
      }
      _ => {}
    }

    match self.screen {
      Screen::Queue => self.handle_queue_key(key),
      Screen::Detail => self.handle_detail_key(key),
    }
    Ok(true)
  }

  fn handle_filter_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Esc => {
        self.filter_active = false;
        self.filter.clear();
        self.list_cursor = 0;
      }
      KeyCode::Enter => {
        self.filter_active = false;
        self.list_cursor = 0;
        let only = match self.filtered_posts().as_slice() {
          [one] => Some(one.id.clone()),
          _ => None,
        };
        if let Some(id) = only {
          self.open_detail(id);
        }
      }
      KeyCode::Backspace => {
        self.filter.pop();
        self.list_cursor = 0;
      }
      KeyCode::Char(c) => {
        self.filter.push(c);
        self.list_cursor = 0;
      }
      _ => {}
    }
  }

  fn handle_queue_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
      KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
      KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
        if let Some(id) = self.cursor_post().map(|p| p.id.clone()) {
          self.open_detail(id);
        }
      }
      KeyCode::Char('/') => {
        self.filter_active = true;
        self.filter.clear();
        self.list_cursor = 0;
      }
      KeyCode::Char('p') => {
        self.pending_only = !self.pending_only;
        self.list_cursor = 0;
      }
      _ => {}
    }
  }

  fn handle_detail_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Esc | KeyCode::Left | KeyCode::Char('h') => {
        self.screen = Screen::Queue;
        self.selected = None;
      }
      KeyCode::Down | KeyCode::Char('j') => self.detail_scroll += 1,
      KeyCode::Up | KeyCode::Char('k') => self.detail_scroll = self.detail_scroll.saturating_sub(1),
      KeyCode::Char(']') | KeyCode::PageDown => {
        self.move_cursor(1);
        if let Some(id) = self.cursor_post().map(|p| p.id.clone()) {
          self.open_detail(id);
        }
      }
      KeyCode::Char('[') | KeyCode::PageUp => {
        self.move_cursor(-1);
        if let Some(id) = self.cursor_post().map(|p| p.id.clone()) {
          self.open_detail(id);
        }
      }
      _ => {}
    }
  }

  fn move_cursor(&mut self, delta: isize) {
    let len = self.filtered_posts().len();
    if len == 0 {
      return;
    }
    self.list_cursor = self.list_cursor.saturating_add_signed(delta).min(len - 1);
  }

  fn open_detail(&mut self, id: String) {
    self.selected = Some(id);
    self.detail_scroll = 0;
    self.screen = Screen::Detail;
  }

  // ── Actions ───────────────────────────────────────────────────────────────

  async fn approve(&mut self, id: &str) {
    match self.client.approve(id).await {
      Ok(post) => {
        self.status_msg = format!("Approved {}", post.id);
        self.replace(post);
      }
      Err(e) => self.status_msg = format!("Error: {e}"),
    }
  }

  async fn reject(&mut self, id: &str) {
    match self.client.reject(id).await {
      Ok(post) => {
        self.status_msg = format!("Rejected {}", post.id);
        self.replace(post);
      }
      Err(e) => self.status_msg = format!("Error: {e}"),
    }
  }

  async fn delete(&mut self, id: &str) {
    match self.client.delete(id).await {
      Ok(()) => {
        self.posts.retain(|p| p.id != id);
        if self.selected.as_deref() == Some(id) {
          self.selected = None;
          self.screen = Screen::Queue;
        }
        self.clamp_cursor();
        self.status_msg = format!("Deleted {id}");
      }
      Err(e) => self.status_msg = format!("Error: {e}"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::client::ApiConfig;
  use nyx_core::{post::Author, seed::default_posts};

  fn app() -> App {
    let client = ApiClient::new(ApiConfig {
      base_url: "http://127.0.0.1:9".into(),
      username: String::new(),
      password: String::new(),
    })
    .unwrap();
    let mut app = App::new(client);
    let mut posts = default_posts();
    posts.insert(0, Post {
      id:        "pending-one".into(),
      title:     "Pending One".into(),
      excerpt:   String::new(),
      content:   String::new(),
      image:     String::new(),
      author:    Author::guest(),
      category:  "Telehealth".into(),
      tags:      vec!["remote".into()],
      read_time: "2 min".into(),
      date:      "June 1, 2023".into(),
      approved:  false,
    });
    app.posts = posts;
    app
  }

  fn key(code: KeyCode) -> KeyEvent { KeyEvent::new(code, KeyModifiers::NONE) }

  #[test]
  fn pending_only_by_default() {
    let app = app();
    let ids: Vec<_> = app.filtered_posts().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["pending-one"]);
    assert_eq!(app.pending_count(), 1);
  }

  #[tokio::test]
  async fn toggle_shows_everything() {
    let mut app = app();
    app.handle_key(key(KeyCode::Char('p'))).await.unwrap();
    assert_eq!(app.filtered_posts().len(), 4);
  }

  #[tokio::test]
  async fn single_filter_match_opens_detail() {
    let mut app = app();
    app.pending_only = false;
    app.handle_key(key(KeyCode::Char('/'))).await.unwrap();
    for c in "hospital".chars() {
      app.handle_key(key(KeyCode::Char(c))).await.unwrap();
    }
    let ids: Vec<_> = app.filtered_posts().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["future-of-hospital-information-systems"]);

    app.handle_key(key(KeyCode::Enter)).await.unwrap();
    assert_eq!(app.screen, Screen::Detail);
    assert_eq!(app.selected_post().unwrap().id, "future-of-hospital-information-systems");
  }

  #[tokio::test]
  async fn cursor_stays_in_bounds() {
    let mut app = app();
    app.pending_only = false;
    for _ in 0..10 {
      app.handle_key(key(KeyCode::Char('j'))).await.unwrap();
    }
    assert_eq!(app.list_cursor, 3);
    for _ in 0..10 {
      app.handle_key(key(KeyCode::Char('k'))).await.unwrap();
    }
    assert_eq!(app.list_cursor, 0);
  }

  #[tokio::test]
  async fn delete_needs_confirmation() {
    let mut app = app();
    app.handle_key(key(KeyCode::Char('d'))).await.unwrap();
    assert_eq!(app.confirm_delete.as_deref(), Some("pending-one"));

    app.handle_key(key(KeyCode::Char('n'))).await.unwrap();
    assert!(app.confirm_delete.is_none());
    assert_eq!(app.posts.len(), 4);
  }

  #[tokio::test]
  async fn quit_keys() {
    let mut app = app();
    assert!(!app.handle_key(key(KeyCode::Char('q'))).await.unwrap());
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(!app.handle_key(ctrl_c).await.unwrap());
  }
}
