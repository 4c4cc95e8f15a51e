//! Post types — the sole persisted entity of the blog.
//!
//! Posts serialise with camelCase keys so the stored collection keeps the
//! same JSON layout the site has always written under `blog_posts`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::moderation::ModerationState;

// ─── Author ──────────────────────────────────────────────────────────────────

/// The byline embedded in a post. Has no identity of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
  pub name:   String,
  pub avatar: String,
  /// Job title shown under the name, e.g. "Healthcare IT Director".
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub title:  Option<String>,
}

impl Author {
  /// The byline used for public submissions that do not name an author.
  pub fn guest() -> Self {
    Self {
      name:   "Guest Author".into(),
      avatar: "/Images/avatars/default-avatar.jpg".into(),
      title:  Some("Community Contributor".into()),
    }
  }
}

// ─── Post ────────────────────────────────────────────────────────────────────

/// A blog article together with its moderation flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
  /// Slug derived from the title at creation; never changes afterwards.
  pub id:        String,
  pub title:     String,
  pub excerpt:   String,
  /// Rich text (HTML).
  pub content:   String,
  /// Path or URL of the header image.
  pub image:     String,
  pub author:    Author,
  pub category:  String,
  /// Display order matters; matching does not.
  pub tags:      Vec<String>,
  /// Display string, e.g. "6 min".
  pub read_time: String,
  /// Display string, e.g. "June 15, 2023".
  pub date:      String,
  pub approved:  bool,
}

impl Post {
  pub fn state(&self) -> ModerationState { ModerationState::from_approved(self.approved) }

  pub fn is_visible(&self) -> bool { self.approved }

  /// Assemble a post from a draft. The caller decides the id and flag.
  pub(crate) fn from_draft(id: String, draft: PostDraft, approved: bool) -> Self {
    Self {
      id,
      title: draft.title,
      excerpt: draft.excerpt,
      content: draft.content,
      image: draft.image,
      author: draft.author,
      category: draft.category,
      tags: draft.tags,
      read_time: draft.read_time,
      date: draft.date,
      approved,
    }
  }
}

// ─── PostDraft ───────────────────────────────────────────────────────────────

/// Input to [`crate::content::ContentStore::create`].
/// `id` and `approved` are always decided by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
  pub title:     String,
  pub excerpt:   String,
  pub content:   String,
  pub image:     String,
  pub author:    Author,
  pub category:  String,
  pub tags:      Vec<String>,
  pub read_time: String,
  pub date:      String,
}

// ─── Submission ──────────────────────────────────────────────────────────────

/// Image used when a submission does not upload one.
pub const DEFAULT_IMAGE: &str = "/Images/blog/default-blog-image.jpg";

/// Characters of content per minute of estimated reading time.
const CHARS_PER_MINUTE: usize = 2000;

/// Shortest reading time ever advertised, in minutes.
const MIN_READ_MINUTES: usize = 2;

/// Tags as typed into the submission form: either a list or a single
/// comma-separated string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagsInput {
  List(Vec<String>),
  Csv(String),
}

impl Default for TagsInput {
  fn default() -> Self { Self::List(Vec::new()) }
}

impl TagsInput {
  /// Trimmed tags with empty entries removed, in the order given.
  pub fn normalize(self) -> Vec<String> {
    let raw: Vec<String> = match self {
      Self::List(tags) => tags,
      Self::Csv(s) => s.split(',').map(str::to_owned).collect(),
    };
    raw
      .into_iter()
      .map(|t| t.trim().to_owned())
      .filter(|t| !t.is_empty())
      .collect()
  }
}

/// A public blog submission, before the server fills in byline, reading time
/// and date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
  pub title:    String,
  #[serde(default)]
  pub excerpt:  String,
  pub content:  String,
  #[serde(default)]
  pub category: String,
  #[serde(default)]
  pub tags:     TagsInput,
  pub image:    Option<String>,
  pub author:   Option<Author>,
}

impl Submission {
  /// Turn the submission into a draft dated `today`.
  pub fn into_draft(self, today: NaiveDate) -> PostDraft {
    let read_time = estimate_read_time(&self.content);
    PostDraft {
      title: self.title,
      excerpt: self.excerpt,
      content: self.content,
      image: self
        .image
        .filter(|i| !i.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_IMAGE.to_owned()),
      author: self.author.unwrap_or_else(Author::guest),
      category: self.category,
      tags: self.tags.normalize(),
      read_time,
      date: format_display_date(today),
    }
  }
}

/// `"<n> min"`, one minute per 2000 characters, never less than two.
pub fn estimate_read_time(content: &str) -> String {
  let minutes = content
    .chars()
    .count()
    .div_ceil(CHARS_PER_MINUTE)
    .max(MIN_READ_MINUTES);
  format!("{minutes} min")
}

/// Long US form, e.g. `June 15, 2023`.
pub fn format_display_date(date: NaiveDate) -> String {
  date.format("%B %-d, %Y").to_string()
}
