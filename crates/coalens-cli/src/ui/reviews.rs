//! Published review browsing — list and detail panes.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::app::{App, Fetch, InputMode};

// ─── List ─────────────────────────────────────────────────────────────────────

/// Render the published-review list into `area`.
pub fn draw_list(f: &mut Frame, area: Rect, app: &App) {
  let title = match app.reviews.ready() {
    Some(list) if !app.filter.is_empty() => {
      format!(" Strain Reviews ({}/{}) ", app.filtered_reviews().len(), list.len())
    }
    Some(list) => format!(" Strain Reviews ({}) ", list.len()),
    None => " Strain Reviews ".to_string(),
  };

  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let mut inner = block.inner(area);
  f.render_widget(block, area);

  match &app.reviews {
    Fetch::Idle | Fetch::Loading => {
      f.render_widget(
        Paragraph::new("Loading…").style(Style::default().fg(Color::DarkGray)),
        inner,
      );
      return;
    }
    Fetch::Failed(message) => {
      f.render_widget(
        Paragraph::new(format!("Error: {message}"))
          .style(Style::default().fg(Color::Red)),
        inner,
      );
      return;
    }
    Fetch::Ready(list) if list.is_empty() => {
      f.render_widget(
        Paragraph::new("No published reviews yet.")
          .style(Style::default().fg(Color::DarkGray)),
        inner,
      );
      return;
    }
    Fetch::Ready(_) => {}
  }

  // Filter bar at the bottom of the inner area while searching.
  if (app.input_mode == InputMode::Filter || !app.filter.is_empty()) && inner.height > 2 {
    let filter_area = Rect {
      x:      inner.x,
      y:      inner.y + inner.height - 1,
      width:  inner.width,
      height: 1,
    };
    inner.height = inner.height.saturating_sub(1);

    let filter_text = if app.input_mode == InputMode::Filter {
      format!("/{}_", app.filter)
    } else {
      format!("/{}", app.filter)
    };
    f.render_widget(
      Paragraph::new(filter_text).style(Style::default().fg(Color::Yellow)),
      filter_area,
    );
  }

  let filtered = app.filtered_reviews();
  let items: Vec<ListItem> = filtered
    .iter()
    .map(|review| {
      // One line per review: strain, THCa badge, summary preview.
      let summary = preview(&review.summary);
      ListItem::new(Line::from(vec![
        Span::styled(
          format!("{:<24}", review.data.strain_name),
          Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
          format!("THCa {:>6.2}%  ", review.data.thca),
          Style::default().fg(Color::Cyan),
        ),
        Span::styled(summary, Style::default().fg(Color::DarkGray)),
      ]))
    })
    .collect();

  let mut state = ListState::default();
  state.select(if filtered.is_empty() {
    None
  } else {
    Some(app.reviews_cursor.min(filtered.len() - 1))
  });

  f.render_stateful_widget(
    List::new(items).highlight_style(
      Style::default()
        .bg(Color::Blue)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD),
    ),
    inner,
    &mut state,
  );
}

/// One-line summary preview, truncated on a character boundary. Byte
/// truncation would panic mid-codepoint on multi-byte summaries.
fn preview(summary: &str) -> String {
  let mut preview: String = summary.replace('\n', " ");
  if preview.chars().count() > 60 {
    preview = preview.chars().take(57).collect();
    preview.push('…');
  }
  preview
}

// ─── Detail ───────────────────────────────────────────────────────────────────

/// Render one fetched review into `area`.
pub fn draw_detail(f: &mut Frame, area: Rect, app: &App) {
  let title = match app.detail.ready() {
    Some(review) => format!(" {} ", review.data.strain_name),
    None => " Review ".to_string(),
  };
  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  match &app.detail {
    Fetch::Idle | Fetch::Loading => {
      f.render_widget(
        Paragraph::new("Loading…").style(Style::default().fg(Color::DarkGray)),
        inner,
      );
    }
    Fetch::Failed(message) => {
      f.render_widget(
        Paragraph::new(format!("Error: {message}"))
          .style(Style::default().fg(Color::Red)),
        inner,
      );
    }
    Fetch::Ready(review) => {
      let data = &review.data;
      let lines = vec![
        Line::from(review.summary.as_str()),
        Line::from(""),
        Line::from(vec![
          badge(format!("THCa: {:.2}%", data.thca)),
          Span::raw(" "),
          badge(format!("CBD: {:.2}%", data.cbd)),
          Span::raw(" "),
          badge(format!("Δ9-THC: {:.2}%", data.delta_9_thc)),
        ]),
      ];
      f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }
  }
}

fn badge(text: String) -> Span<'static> {
  Span::styled(
    format!(" {text} "),
    Style::default().fg(Color::Black).bg(Color::Cyan),
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn preview_truncates_on_character_boundaries() {
    // 91 multi-byte chars; a byte-indexed truncate would split a codepoint.
    let multibyte = "…".repeat(91);
    let shown = preview(&multibyte);
    assert_eq!(shown.chars().count(), 58);
    assert!(shown.ends_with('…'));
  }

  #[test]
  fn short_summaries_pass_through_with_newlines_flattened() {
    assert_eq!(preview("clean\nflower"), "clean flower");
  }
}
