//! Post list pane — left panel.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::app::App;

/// Render the post list into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let filtered = app.filtered_posts();
  let scope = if app.pending_only { "Pending" } else { "All posts" };

  let title = if app.filter_active || !app.filter.is_empty() {
    format!(" {scope} ({}/{}) ", filtered.len(), app.posts.len())
  } else {
    format!(" {scope} ({}) ", filtered.len())
  };

  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  let items: Vec<ListItem> = filtered
    .iter()
    .map(|post| {
      let (badge, badge_style) = if post.approved {
        ("● ", Style::default().fg(Color::Green))
      } else {
        ("○ ", Style::default().fg(Color::Yellow))
      };
      ListItem::new(Line::from(vec![
        Span::styled(badge, badge_style),
        Span::raw(post.title.clone()),
      ]))
    })
    .collect();

  let mut inner_area = block.inner(area);
  f.render_widget(block, area);

  if (app.filter_active || !app.filter.is_empty()) && inner_area.height > 2 {
    let filter_area = Rect {
      x:      inner_area.x,
      y:      inner_area.y + inner_area.height - 1,
      width:  inner_area.width,
      height: 1,
    };
    inner_area.height = inner_area.height.saturating_sub(1);

    let filter_text = if app.filter_active {
      format!("/{}_", app.filter)
    } else {
      format!("/{}", app.filter)
    };
    f.render_widget(
      Paragraph::new(filter_text).style(Style::default().fg(Color::Yellow)),
      filter_area,
    );
  }

  if filtered.is_empty() {
    let empty = if app.pending_only { "Nothing awaiting review." } else { "No posts." };
    f.render_widget(
      Paragraph::new(empty).style(Style::default().fg(Color::DarkGray)),
      inner_area,
    );
    return;
  }

  let mut state = ListState::default();
  state.select(Some(app.list_cursor));

  f.render_stateful_widget(
    List::new(items).highlight_style(
      Style::default()
        .bg(Color::Blue)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD),
    ),
    inner_area,
    &mut state,
  );
}
