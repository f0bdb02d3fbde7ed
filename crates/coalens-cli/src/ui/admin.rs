//! Admin moderation table and the blog-generation overlay.

use coalens_core::review::{ReviewStatus, StrainAnalysisReview};
use ratatui::{
  Frame,
  layout::{Constraint, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Clear, Paragraph, Row, Table, TableState, Wrap},
};

use crate::app::{App, Fetch, InputMode};

// ─── Moderation table ─────────────────────────────────────────────────────────

/// Render the all-reviews moderation table into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let block = Block::default()
    .title(" Admin Dashboard ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let mut inner = block.inner(area);
  f.render_widget(block, area);

  // Strain-id prompt for blog generation.
  if app.input_mode == InputMode::BlogPrompt && inner.height > 2 {
    let prompt_area = Rect {
      x:      inner.x,
      y:      inner.y + inner.height - 1,
      width:  inner.width,
      height: 1,
    };
    inner.height = inner.height.saturating_sub(1);
    let typed = app.blog_prompt.as_deref().unwrap_or("");
    f.render_widget(
      Paragraph::new(format!("Generate blog post for strain id: {typed}_"))
        .style(Style::default().fg(Color::Yellow)),
      prompt_area,
    );
  }

  match &app.admin {
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
    Fetch::Ready(reviews) if reviews.is_empty() => {
      f.render_widget(
        Paragraph::new("No reviews awaiting moderation.")
          .style(Style::default().fg(Color::DarkGray)),
        inner,
      );
      return;
    }
    Fetch::Ready(_) => {}
  }

  let reviews = app.admin.ready().unwrap();
  let rows: Vec<Row> = reviews
    .iter()
    .map(|review| {
      Row::new(vec![
        Span::raw(review.strain_name.clone()),
        Span::raw(format!("{:.2}", review.thca_percentage)),
        status_badge(review.status),
        Span::raw(short_date(review)),
      ])
    })
    .collect();

  let table = Table::new(
    rows,
    [
      Constraint::Percentage(40),
      Constraint::Length(8),
      Constraint::Length(11),
      Constraint::Length(12),
    ],
  )
  .header(
    Row::new(vec!["Strain Name", "THCa %", "Status", "Created At"])
      .style(Style::default().add_modifier(Modifier::BOLD)),
  )
  .row_highlight_style(
    Style::default()
      .bg(Color::Blue)
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );

  let mut state = TableState::default();
  state.select(Some(app.admin_cursor.min(reviews.len() - 1)));
  f.render_stateful_widget(table, inner, &mut state);
}

fn status_badge(status: ReviewStatus) -> Span<'static> {
  let bg = match status {
    ReviewStatus::Published => Color::Green,
    ReviewStatus::Draft => Color::Yellow,
  };
  Span::styled(
    format!(" {status} "),
    Style::default().fg(Color::Black).bg(bg),
  )
}

/// `2025-06-01T12:00:00Z` → `2025-06-01`; unparseable timestamps pass
/// through untouched.
fn short_date(review: &StrainAnalysisReview) -> String {
  review
    .created_date()
    .map(|d| d.to_string())
    .unwrap_or_else(|| review.created_at.clone())
}

// ─── Blog overlay ─────────────────────────────────────────────────────────────

/// Render the generated blog post centered over `area`.
pub fn draw_blog_overlay(f: &mut Frame, area: Rect, app: &App) {
  let overlay = centered(area, 80, 80);
  f.render_widget(Clear, overlay);

  let block = Block::default()
    .title(" Generated Blog Post ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Magenta));
  let inner = block.inner(overlay);
  f.render_widget(block, overlay);

  match &app.blog {
    Fetch::Idle => {}
    Fetch::Loading => {
      f.render_widget(
        Paragraph::new("Generating…").style(Style::default().fg(Color::DarkGray)),
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
    Fetch::Ready(post) => {
      let mut lines = vec![
        Line::from(Span::styled(
          post.title.clone(),
          Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
          post.tags.join(", "),
          Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
      ];
      lines.extend(post.content.lines().map(|l| Line::from(l.to_string())));
      lines.push(Line::from(""));
      lines.push(Line::from(Span::styled(
        "jk scroll  Esc close",
        Style::default().fg(Color::DarkGray),
      )));

      f.render_widget(
        Paragraph::new(lines)
          .wrap(Wrap { trim: false })
          .scroll((app.blog_scroll as u16, 0)),
        inner,
      );
    }
  }
}

fn centered(area: Rect, pct_x: u16, pct_y: u16) -> Rect {
  // Widen before multiplying; width * percentage overflows u16 on very
  // wide terminals.
  let width = (u32::from(area.width) * u32::from(pct_x) / 100) as u16;
  let height = (u32::from(area.height) * u32::from(pct_y) / 100) as u16;
  Rect {
    x:      area.x + (area.width - width) / 2,
    y:      area.y + (area.height - height) / 2,
    width,
    height,
  }
}
