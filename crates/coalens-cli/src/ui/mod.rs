//! TUI rendering — orchestrates all panes.

pub mod admin;
pub mod results;
pub mod reviews;
pub mod upload;

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Paragraph},
};

use crate::app::{App, Fetch, InputMode, Screen};

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let area = f.area();

  // Vertical stack: header, body, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0], app);
  draw_body(f, rows[1], app);
  draw_status(f, rows[2], app);

  // Blog overlay sits on top of whatever screen requested it.
  if !matches!(app.blog, Fetch::Idle) {
    admin::draw_blog_overlay(f, rows[1], app);
  }
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
  let left = Span::styled(
    " coalens  [1] upload  [2] reviews  [3] results  [4] admin  [q] quit",
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );
  let right = Span::styled(
    if app.gate.authenticated {
      "signed in "
    } else {
      "anonymous "
    },
    Style::default().fg(Color::Gray),
  );

  // Simple left-right header: pad the middle.
  let left_width = left.content.len() as u16;
  let right_width = right.content.len() as u16;
  let pad = area
    .width
    .saturating_sub(left_width)
    .saturating_sub(right_width);

  let line = Line::from(vec![
    left,
    Span::raw(" ".repeat(pad as usize)),
    right,
  ]);

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(line), inner);
}

// ─── Body ─────────────────────────────────────────────────────────────────────

fn draw_body(f: &mut Frame, area: Rect, app: &App) {
  match app.screen {
    Screen::Upload => upload::draw(f, area, app),
    Screen::Share { .. } => results::draw_share(f, area, app),
    Screen::Results => results::draw_inline(f, area, app),
    Screen::Reviews => reviews::draw_list(f, area, app),
    Screen::ReviewDetail { .. } => reviews::draw_detail(f, area, app),
    Screen::Admin => admin::draw(f, area, app),
  }
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let (mode_label, hints) = match app.input_mode {
    InputMode::EditFilePath => ("EDIT", "Type the PDF path  Enter done  Esc cancel"),
    InputMode::EditText => ("PASTE", "Type or paste COA text  Esc done"),
    InputMode::Filter => ("SEARCH", "Type to filter  Esc cancel  Enter select"),
    InputMode::BlogPrompt => ("BLOG", "Type a strain id  Enter generate  Esc cancel"),
    InputMode::Normal => match app.screen {
      Screen::Upload => (
        "NORMAL",
        "Tab switch input  f file  p paste  Enter decode  q quit",
      ),
      Screen::Share { .. } | Screen::Results => (
        "NORMAL",
        "c copy summary  s copy share link  Esc back  q quit",
      ),
      Screen::Reviews => (
        "NORMAL",
        "↑↓/jk navigate  / search  Enter detail  Esc back  q quit",
      ),
      Screen::ReviewDetail { .. } => ("NORMAL", "Esc back  q quit"),
      Screen::Admin => (
        "NORMAL",
        "↑↓/jk navigate  a approve  d delete  g blog  r reload  Esc back",
      ),
    },
  };

  let status = if app.status_msg.is_empty() {
    hints.to_string()
  } else {
    app.status_msg.clone()
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Green)
      .add_modifier(Modifier::BOLD),
  );
  let mut spans = vec![mode_span];

  // Transient acknowledgment; clears itself after two seconds.
  if app.copied() {
    spans.push(Span::styled(
      " Copied! ",
      Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD),
    ));
  }

  spans.push(Span::styled(
    format!("  {status}"),
    Style::default().fg(Color::DarkGray),
  ));

  f.render_widget(
    Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black)),
    area,
  );
}
