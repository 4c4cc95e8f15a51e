//! Related-post selection for cross-linking.

use std::collections::HashSet;

use crate::post::Post;

/// How many related posts a detail page shows unless asked otherwise.
pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// Select posts related to `current_id` from `posts`.
///
/// A post is related when it shares the category or at least one tag with the
/// current post; both count the same, there is no scoring. The result keeps
/// the order of `posts`, never contains `current_id`, and holds at most
/// `limit` entries. Returns nothing if `current_id` is not in `posts`.
pub fn select_related(posts: &[Post], current_id: &str, limit: usize) -> Vec<Post> {
  let Some(current) = posts.iter().find(|p| p.id == current_id) else {
    return Vec::new();
  };
  let current_tags: HashSet<&str> = current.tags.iter().map(String::as_str).collect();

  posts
    .iter()
    .filter(|p| p.id != current_id)
    .filter(|p| {
      p.category == current.category
        || p.tags.iter().any(|t| current_tags.contains(t.as_str()))
    })
    .take(limit)
    .cloned()
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::post::Author;

  fn post(id: &str, category: &str, tags: &[&str]) -> Post {
    Post {
      id:        id.into(),
      title:     id.into(),
      excerpt:   String::new(),
      content:   String::new(),
      image:     String::new(),
      author:    Author::guest(),
      category:  category.into(),
      tags:      tags.iter().map(|t| (*t).to_owned()).collect(),
      read_time: "2 min".into(),
      date:      "June 1, 2023".into(),
      approved:  true,
    }
  }

  #[test]
  fn category_match_alone_is_enough() {
    let posts = vec![
      post("a", "AI in Healthcare", &[]),
      post("b", "AI in Healthcare", &[]),
    ];
    let related = select_related(&posts, "a", 3);
    assert_eq!(related.len(), 1);
    assert_eq!(related[0].id, "b");
  }

  #[test]
  fn single_shared_tag_is_enough() {
    let posts = vec![
      post("a", "X", &["fhir", "ehr"]),
      post("b", "Y", &["ehr"]),
      post("c", "Z", &["other"]),
    ];
    let ids: Vec<_> = select_related(&posts, "a", 3).into_iter().map(|p| p.id).collect();
    assert_eq!(ids, vec!["b"]);
  }

  #[test]
  fn unknown_current_yields_nothing() {
    let posts = vec![post("a", "X", &[]), post("b", "X", &[])];
    assert!(select_related(&posts, "missing", 3).is_empty());
  }

  #[test]
  fn respects_limit_and_order() {
    let posts = vec![
      post("a", "X", &[]),
      post("b", "X", &[]),
      post("c", "X", &[]),
      post("d", "X", &[]),
      post("e", "X", &[]),
    ];
    let ids: Vec<_> = select_related(&posts, "c", 3).into_iter().map(|p| p.id).collect();
    assert_eq!(ids, vec!["a", "b", "d"]);
  }

  #[test]
  fn never_includes_self_even_when_duplicated() {
    let posts = vec![post("a", "X", &[]), post("a", "X", &[]), post("b", "X", &[])];
    let related = select_related(&posts, "a", 10);
    assert!(related.iter().all(|p| p.id != "a"));
  }

  #[test]
  fn zero_limit_is_empty() {
    let posts = vec![post("a", "X", &[]), post("b", "X", &[])];
    assert!(select_related(&posts, "a", 0).is_empty());
  }
}
