//! Title → slug derivation.

/// Derive a post id from its title.
///
/// Lowercases, drops every character that is not an ASCII letter, digit,
/// underscore or whitespace, then replaces each whitespace run with a single
/// `-`. Surrounding whitespace is not trimmed, so `" Hi "` becomes `-hi-`.
/// Distinct titles may yield the same slug.
pub fn slugify(title: &str) -> String {
  let mut slug = String::with_capacity(title.len());
  let mut in_space = false;

  for c in title.to_lowercase().chars() {
    if c.is_whitespace() {
      if !in_space {
        slug.push('-');
        in_space = true;
      }
    } else if c.is_ascii_alphanumeric() || c == '_' {
      slug.push(c);
      in_space = false;
    }
  }

  slug
}
