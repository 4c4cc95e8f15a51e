//! Post detail pane — right panel.

use nyx_core::moderation::ModerationState;
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;

/// Render the selected post into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let Some(post) = app.selected_post() else {
    let block = Block::default().title(" Post ").borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
      Paragraph::new("Post no longer exists.").style(Style::default().fg(Color::DarkGray)),
      inner,
    );
    return;
  };

  let block = Block::default()
    .title(format!(" {} ", post.id))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let state = match post.state() {
    ModerationState::Pending => Span::styled("PENDING", Style::default().fg(Color::Yellow)),
    ModerationState::Visible => Span::styled("VISIBLE", Style::default().fg(Color::Green)),
  };

  let byline = match &post.author.title {
    Some(t) => format!("{}, {t}", post.author.name),
    None => post.author.name.clone(),
  };

  let mut lines = vec![
    Line::from(Span::styled(
      post.title.clone(),
      Style::default().add_modifier(Modifier::BOLD),
    )),
    Line::from(vec![state]),
    Line::from(""),
    field("author", byline),
    field("category", post.category.clone()),
    field("date", format!("{}  ·  {}", post.date, post.read_time)),
    field("tags", post.tags.join(", ")),
    field("image", post.image.clone()),
    Line::from(""),
    Line::from(Span::styled(
      post.excerpt.clone(),
      Style::default().add_modifier(Modifier::ITALIC),
    )),
    Line::from(""),
  ];
  lines.extend(strip_tags(&post.content).lines().map(|l| Line::from(l.to_string())));

  let para = Paragraph::new(lines)
    .wrap(Wrap { trim: true })
    .scroll((app.detail_scroll as u16, 0));
  f.render_widget(para, inner);
}

fn field(label: &'static str, value: String) -> Line<'static> {
  Line::from(vec![
    Span::styled(
      format!("{label:<10}"),
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    ),
    Span::raw(value),
  ])
}

/// Drop markup from stored HTML, breaking lines at block-level closers.
fn strip_tags(html: &str) -> String {
  let mut out = String::with_capacity(html.len());
  let mut in_tag = false;
  let mut tag = String::new();
  for c in html.chars() {
    match c {
      '<' => {
        in_tag = true;
        tag.clear();
      }
      '>' if in_tag => {
        in_tag = false;
        let name = tag.trim_start_matches('/').split_whitespace().next().unwrap_or("");
        if matches!(name, "p" | "h2" | "h3" | "li" | "br" | "br/") {
          out.push('\n');
        }
      }
      _ if in_tag => tag.push(c),
      _ => out.push(c),
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn strips_markup_and_breaks_blocks() {
    let text = strip_tags("<h2>Intro</h2><p>One <strong>two</strong></p><ul><li>a</li></ul>");
    let lines: Vec<_> = text.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(lines, ["Intro", "One two", "a"]);
  }
}
