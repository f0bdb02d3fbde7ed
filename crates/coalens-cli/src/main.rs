//! `coalens` — terminal client for the COA-analysis backend.
//!
//! # Usage
//!
//! ```
//! coalens --url https://api.coalens.example --token $TOKEN
//! coalens --config ~/.config/coalens/config.toml
//! coalens --extract-pdf report.pdf
//! ```

mod app;
mod clipboard;
mod ui;

use std::{io, time::Duration};

use anyhow::{Context, Result};
use app::{App, Gate, Msg};
use clap::Parser;
use coalens_client::{ApiClient, ApiConfig};
use crossterm::{
  event::{self, Event},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use serde::Deserialize;
use tokio::sync::mpsc;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "coalens", about = "Terminal client for the COA-analysis backend")]
struct Args {
  /// Path to a TOML config file (url, auth_token, role, share_base).
  #[arg(short, long, value_name = "FILE")]
  config: Option<std::path::PathBuf>,

  /// Base URL of the analysis backend (default: http://localhost:8000).
  #[arg(long, env = "COALENS_URL")]
  url: Option<String>,

  /// Bearer token from the identity provider.
  #[arg(long, env = "COALENS_TOKEN")]
  token: Option<String>,

  /// Role granted by the identity provider ("admin" unlocks moderation).
  #[arg(long, env = "COALENS_ROLE")]
  role: Option<String>,

  /// Base URL prepended to share links.
  #[arg(long, env = "COALENS_SHARE_BASE")]
  share_base: Option<String>,

  /// Extract text from a PDF via the test endpoint and exit (no TUI).
  #[arg(long, value_name = "FILE")]
  extract_pdf: Option<std::path::PathBuf>,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  url:        String,
  #[serde(default)]
  auth_token: String,
  #[serde(default)]
  role:       String,
  #[serde(default)]
  share_base: String,
}

fn non_empty(s: String) -> Option<String> {
  (!s.is_empty()).then_some(s)
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_writer(io::stderr)
    .init();

  let args = Args::parse();

  // Load config file if provided.
  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flags override config file, which overrides defaults.
  let token = args.token.or_else(|| non_empty(file_cfg.auth_token));
  let role = args.role.or_else(|| non_empty(file_cfg.role));
  let api_config = ApiConfig {
    base_url:   args
      .url
      .or_else(|| non_empty(file_cfg.url))
      .unwrap_or_else(|| "http://localhost:8000".to_string()),
    auth_token: token.clone(),
  };
  let share_base = args
    .share_base
    .or_else(|| non_empty(file_cfg.share_base))
    .unwrap_or_else(|| "https://coalens.app".to_string());

  let client = ApiClient::new(api_config)?;

  // Utility mode: PDF text extraction without the TUI.
  if let Some(path) = &args.extract_pdf {
    let bytes = std::fs::read(path)
      .with_context(|| format!("reading PDF {}", path.display()))?;
    let name = path
      .file_name()
      .map(|n| n.to_string_lossy().into_owned())
      .unwrap_or_else(|| "coa.pdf".to_string());
    let extracted = client
      .analyze_pdf_test(&name, bytes)
      .await
      .context("extracting PDF text")?;
    println!("{}", extracted.text);
    return Ok(());
  }

  let gate = Gate {
    authenticated: token.is_some(),
    role,
  };
  let (tx, rx) = mpsc::unbounded_channel();
  let mut app = App::new(client, gate, share_base, tx);

  // Ping the backend; an unreachable backend only warns in the status bar.
  app.check_health();

  // Set up the terminal.
  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  // Run the event loop; restore terminal even on error.
  let run_result = run_event_loop(&mut terminal, &mut app, rx).await;

  // Restore terminal regardless of result.
  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  run_result
}

// ─── Event loop ───────────────────────────────────────────────────────────────

async fn run_event_loop(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut App,
  mut rx: mpsc::UnboundedReceiver<Msg>,
) -> Result<()> {
  loop {
    // Fold in whatever the background tasks delivered since last frame.
    while let Ok(msg) = rx.try_recv() {
      app.apply(msg);
    }

    terminal.draw(|f| ui::draw(f, app)).context("drawing frame")?;

    // Poll for an event, yielding control to tokio while waiting.
    let maybe_event = tokio::task::block_in_place(|| {
      if event::poll(Duration::from_millis(50))? {
        Ok::<_, io::Error>(Some(event::read()?))
      } else {
        Ok(None)
      }
    })?;

    if let Some(evt) = maybe_event {
      match evt {
        Event::Key(key) => {
          if !app.handle_key(key) {
            break;
          }
        }
        Event::Resize(_, _) => {
          // Terminal will redraw on next iteration.
        }
        _ => {}
      }
    }
  }

  Ok(())
}
