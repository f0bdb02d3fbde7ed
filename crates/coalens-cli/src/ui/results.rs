//! Results card — the rendered breakdown of one analysis.

use coalens_core::coa::PublicAnalysisResult;
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::{App, Fetch};

// ─── Entry points ─────────────────────────────────────────────────────────────

/// Share screen: the result is fetched by token.
pub fn draw_share(f: &mut Frame, area: Rect, app: &App) {
  match &app.share {
    Fetch::Idle | Fetch::Loading => draw_placeholder(f, area, "Loading analysis…"),
    Fetch::Failed(message) => draw_error(f, area, message),
    Fetch::Ready(result) => draw_card(f, area, result),
  }
}

/// Results screen: renders the analysis already in memory, no fetch.
pub fn draw_inline(f: &mut Frame, area: Rect, app: &App) {
  match &app.last_result {
    Some(result) => draw_card(f, area, result),
    None => draw_placeholder(
      f,
      area,
      "No results found. Go back and analyze a COA first.",
    ),
  }
}

fn draw_placeholder(f: &mut Frame, area: Rect, message: &str) {
  let block = Block::default()
    .title(" Analysis ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(
    Paragraph::new(message).style(Style::default().fg(Color::DarkGray)),
    inner,
  );
}

fn draw_error(f: &mut Frame, area: Rect, message: &str) {
  let block = Block::default()
    .title(" Analysis ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Red));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(
    Paragraph::new(vec![
      Line::from(Span::styled(
        format!("Error: {message}"),
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
      )),
      Line::from(""),
      Line::from(Span::styled(
        "Press r to retry.",
        Style::default().fg(Color::DarkGray),
      )),
    ]),
    inner,
  );
}

// ─── Card ─────────────────────────────────────────────────────────────────────

fn draw_card(f: &mut Frame, area: Rect, result: &PublicAnalysisResult) {
  let data = &result.data;

  let block = Block::default()
    .title(format!(" {} — Analysis Complete ", data.strain_name))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Green));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let mut lines = vec![
    value_line("THCa", &fmt_pct(data.thca), None),
    value_line("Delta-9 THC", &fmt_pct(data.delta_9_thc), None),
    value_line("CBD", &fmt_pct(data.cbd), None),
    value_line("Total THC", &fmt_pct(result.total_thc), None),
    value_line(
      "Pesticides",
      pass_fail(data.pesticides_passed),
      Some(data.pesticides_passed),
    ),
    value_line(
      "Heavy Metals",
      pass_fail(data.heavy_metals_passed),
      Some(data.heavy_metals_passed),
    ),
    value_line(
      "Residual Solvents",
      pass_fail(data.residual_solvents_passed),
      Some(data.residual_solvents_passed),
    ),
    Line::from(""),
  ];

  // Legality banner, derived from the measured delta-9 value.
  let legal = data.federally_legal();
  lines.push(Line::from(Span::styled(
    if legal {
      "✔ This product appears to be federally legal."
    } else {
      "⚠ This product may not be federally legal."
    },
    Style::default()
      .fg(if legal { Color::Green } else { Color::Red })
      .add_modifier(Modifier::BOLD),
  )));

  lines.push(Line::from(""));
  lines.push(Line::from(Span::styled(
    "Summary",
    Style::default().add_modifier(Modifier::BOLD),
  )));
  lines.push(Line::from(result.summary.as_str()));

  f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn value_line<'a>(label: &'a str, value: &str, pass: Option<bool>) -> Line<'a> {
  let value_style = match pass {
    Some(true) => Style::default().fg(Color::Green),
    Some(false) => Style::default().fg(Color::Red),
    None => Style::default().add_modifier(Modifier::BOLD),
  };
  Line::from(vec![
    Span::styled(format!("{label:<18}"), Style::default().fg(Color::Gray)),
    Span::styled(value.to_string(), value_style),
  ])
}

/// Two-decimal percentage, e.g. `24.50%`.
fn fmt_pct(value: f64) -> String {
  format!("{value:.2}%")
}

fn pass_fail(passed: bool) -> &'static str {
  if passed { "Pass" } else { "Fail" }
}
