//! Upload screen — PDF path or pasted COA text.

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::{App, InputMode, UploadTab};

/// Render the upload form into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(3), // title + tab line
      Constraint::Min(5),    // active input
      Constraint::Length(2), // error / submit hint
    ])
    .split(area);

  draw_tabs(f, rows[0], app);
  match app.upload_tab {
    UploadTab::File => draw_file_input(f, rows[1], app),
    UploadTab::Paste => draw_text_input(f, rows[1], app),
  }
  draw_footer(f, rows[2], app);
}

fn tab_style(selected: bool) -> Style {
  if selected {
    Style::default()
      .fg(Color::Green)
      .add_modifier(Modifier::BOLD)
  } else {
    Style::default().fg(Color::DarkGray)
  }
}

fn draw_tabs(f: &mut Frame, area: Rect, app: &App) {
  let lines = vec![
    Line::from(Span::styled(
      "Decode your COA",
      Style::default().add_modifier(Modifier::BOLD),
    )),
    Line::from(vec![
      Span::styled(
        " [f] Upload PDF ",
        tab_style(app.upload_tab == UploadTab::File),
      ),
      Span::raw("  "),
      Span::styled(
        " [p] Paste text ",
        tab_style(app.upload_tab == UploadTab::Paste),
      ),
    ]),
  ];
  f.render_widget(Paragraph::new(lines), area);
}

fn draw_file_input(f: &mut Frame, area: Rect, app: &App) {
  let editing = app.input_mode == InputMode::EditFilePath;
  let title = if editing { " PDF path (editing) " } else { " PDF path " };
  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(if editing { Color::Green } else { Color::DarkGray }));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let shown = if editing {
    format!("{}_", app.upload.file_path)
  } else if app.upload.file_path.is_empty() {
    "Press f and type the path to your COA PDF.".to_string()
  } else {
    app.upload.file_path.clone()
  };
  f.render_widget(Paragraph::new(shown), inner);
}

fn draw_text_input(f: &mut Frame, area: Rect, app: &App) {
  let editing = app.input_mode == InputMode::EditText;
  let title = if editing { " COA text (editing) " } else { " COA text " };
  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(if editing { Color::Green } else { Color::DarkGray }));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let shown = if app.upload.text.is_empty() && !editing {
    "Press p and paste the raw text from your COA lab report.".to_string()
  } else if editing {
    format!("{}_", app.upload.text)
  } else {
    app.upload.text.clone()
  };
  f.render_widget(Paragraph::new(shown).wrap(Wrap { trim: false }), inner);
}

fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
  let line = if let Some(error) = &app.upload.error {
    Line::from(Span::styled(
      format!("Error: {error}"),
      Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    ))
  } else if app.upload.in_flight {
    Line::from(Span::styled(
      "Decoding…",
      Style::default().fg(Color::Yellow),
    ))
  } else {
    Line::from(Span::styled(
      "Enter to decode.",
      Style::default().fg(Color::DarkGray),
    ))
  };
  f.render_widget(Paragraph::new(line), area);
}
