//! Application state machine and event dispatcher.
//!
//! Every network call runs in a spawned task that reports back over an mpsc
//! channel. Fetch messages are tagged with a generation number; navigating
//! away aborts the in-flight task and bumps the generation, so a late
//! response can never touch the state of a screen the user has left.

use std::{
  collections::HashMap,
  sync::Arc,
  time::{Duration, Instant},
};

use coalens_client::{ApiClient, CoaSubmission};
use coalens_core::{
  blog::BlogPost,
  coa::PublicAnalysisResult,
  review::{ReviewStatus, StrainAnalysisReview},
  share,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fuzzy_matcher::{FuzzyMatcher, skim::SkimMatcherV2};
use tokio::{sync::mpsc, task::AbortHandle};
use uuid::Uuid;

use crate::clipboard;

/// How long the "Copied!" acknowledgment stays visible.
pub const COPY_ACK: Duration = Duration::from_secs(2);

// ─── Screen ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
  /// COA submission form: PDF path or pasted text.
  Upload,
  /// A fetched analysis looked up by its shareable token.
  Share { result_id: Uuid },
  /// The most recent analysis held in memory; no fetch.
  Results,
  /// Published review browsing.
  Reviews,
  /// One published review, fetched by token.
  ReviewDetail { review_id: Uuid },
  /// Moderation table (gated).
  Admin,
}

// ─── Fetch state ──────────────────────────────────────────────────────────────

/// Per-screen fetch lifecycle: `Loading → {Ready, Failed}`, re-entered on
/// navigation. No automatic retry.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetch<T> {
  Idle,
  Loading,
  Ready(T),
  Failed(String),
}

impl<T> Fetch<T> {
  pub fn is_loading(&self) -> bool {
    matches!(self, Fetch::Loading)
  }

  pub fn ready(&self) -> Option<&T> {
    match self {
      Fetch::Ready(value) => Some(value),
      _ => None,
    }
  }
}

// ─── Messages ─────────────────────────────────────────────────────────────────

/// Results of background tasks, delivered to the event loop.
#[derive(Debug)]
pub enum Msg {
  HealthChecked(Result<String, String>),
  AnalysisDone {
    generation: u64,
    result:     Result<PublicAnalysisResult, String>,
  },
  ShareLoaded {
    generation: u64,
    result:     Result<PublicAnalysisResult, String>,
  },
  ReviewsLoaded {
    generation: u64,
    result:     Result<Vec<PublicAnalysisResult>, String>,
  },
  DetailLoaded {
    generation: u64,
    result:     Result<PublicAnalysisResult, String>,
  },
  AdminLoaded {
    generation: u64,
    result:     Result<Vec<StrainAnalysisReview>, String>,
  },
  ApproveFinished {
    generation: u64,
    id:         Uuid,
    result:     Result<(), String>,
  },
  DeleteFinished {
    generation: u64,
    id:         Uuid,
    result:     Result<(), String>,
  },
  BlogGenerated {
    generation: u64,
    result:     Result<BlogPost, String>,
  },
}

// ─── Auth gate ────────────────────────────────────────────────────────────────

/// The single authorization check consulted before any protected screen
/// opens. Identity itself comes from the external provider; the token and
/// role arrive through configuration.
#[derive(Debug, Clone, Default)]
pub struct Gate {
  pub authenticated: bool,
  pub role:          Option<String>,
}

impl Gate {
  pub fn is_admin(&self) -> bool {
    self.authenticated && self.role.as_deref() == Some("admin")
  }
}

// ─── Upload form ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadTab {
  File,
  Paste,
}

#[derive(Debug, Default)]
pub struct UploadForm {
  pub file_path: String,
  pub text:      String,
  pub in_flight: bool,
  pub error:     Option<String>,
}

/// Which text field, if any, is capturing keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
  Normal,
  EditFilePath,
  EditText,
  Filter,
  BlogPrompt,
}

/// Snapshot taken before an optimistic mutation, restored on failure.
#[derive(Debug, Clone)]
enum Pending {
  Approve { prev: ReviewStatus },
  Delete { index: usize, row: StrainAnalysisReview },
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App {
  pub screen:         Screen,
  pub gate:           Gate,
  /// Base URL prepended to share links (the public web host, not the API).
  pub share_base:     String,

  pub upload_tab:     UploadTab,
  pub upload:         UploadForm,
  /// Most recent successful analysis, rendered by the Results screen.
  pub last_result:    Option<PublicAnalysisResult>,

  pub share:          Fetch<PublicAnalysisResult>,
  pub reviews:        Fetch<Vec<PublicAnalysisResult>>,
  pub reviews_cursor: usize,
  pub detail:         Fetch<PublicAnalysisResult>,
  pub admin:          Fetch<Vec<StrainAnalysisReview>>,
  pub admin_cursor:   usize,

  /// Blog overlay; `Idle` means hidden.
  pub blog:           Fetch<BlogPost>,
  pub blog_prompt:    Option<String>,
  pub blog_scroll:    usize,

  pub filter:         String,
  pub input_mode:     InputMode,
  pub status_msg:     String,
  copied_at:          Option<Instant>,

  pub client:         Arc<ApiClient>,
  tx:                 mpsc::UnboundedSender<Msg>,
  generation:         u64,
  inflight:           Option<AbortHandle>,
  blog_task:          Option<AbortHandle>,
  pending:            HashMap<Uuid, Pending>,
}

impl App {
  pub fn new(
    client: ApiClient,
    gate: Gate,
    share_base: String,
    tx: mpsc::UnboundedSender<Msg>,
  ) -> Self {
    Self {
      screen: Screen::Upload,
      gate,
      share_base,
      upload_tab: UploadTab::Paste,
      upload: UploadForm::default(),
      last_result: None,
      share: Fetch::Idle,
      reviews: Fetch::Idle,
      reviews_cursor: 0,
      detail: Fetch::Idle,
      admin: Fetch::Idle,
      admin_cursor: 0,
      blog: Fetch::Idle,
      blog_prompt: None,
      blog_scroll: 0,
      filter: String::new(),
      input_mode: InputMode::Normal,
      status_msg: String::new(),
      copied_at: None,
      client: Arc::new(client),
      tx,
      generation: 0,
      inflight: None,
      blog_task: None,
      pending: HashMap::new(),
    }
  }

  /// Whether the transient copy acknowledgment is still fresh.
  pub fn copied(&self) -> bool {
    self
      .copied_at
      .map(|at| at.elapsed() < COPY_ACK)
      .unwrap_or(false)
  }

  /// Abort whatever fetch the previous screen had in flight and hand out a
  /// fresh generation for the next one. Messages tagged with an older
  /// generation are discarded in [`Self::apply`].
  fn begin_request(&mut self) -> u64 {
    if let Some(handle) = self.inflight.take() {
      handle.abort();
    }
    self.generation += 1;
    self.generation
  }

  // ── Background fetches ────────────────────────────────────────────────────

  /// Ping the backend once at startup; failures only warn in the status bar.
  pub fn check_health(&self) {
    let client = self.client.clone();
    let tx = self.tx.clone();
    tokio::spawn(async move {
      let result = client
        .check_health()
        .await
        .map(|h| h.status)
        .map_err(|e| e.to_string());
      let _ = tx.send(Msg::HealthChecked(result));
    });
  }

  fn spawn_share_fetch(&mut self, result_id: Uuid) {
    self.share = Fetch::Loading;
    let generation = self.begin_request();
    let client = self.client.clone();
    let tx = self.tx.clone();
    let task = tokio::spawn(async move {
      let result = client
        .get_published_review(result_id)
        .await
        .map_err(|e| e.to_string());
      let _ = tx.send(Msg::ShareLoaded { generation, result });
    });
    self.inflight = Some(task.abort_handle());
  }

  fn spawn_reviews_fetch(&mut self) {
    self.reviews = Fetch::Loading;
    self.reviews_cursor = 0;
    let generation = self.begin_request();
    let client = self.client.clone();
    let tx = self.tx.clone();
    let task = tokio::spawn(async move {
      let result = client
        .list_published_reviews()
        .await
        .map_err(|e| e.to_string());
      let _ = tx.send(Msg::ReviewsLoaded { generation, result });
    });
    self.inflight = Some(task.abort_handle());
  }

  fn spawn_detail_fetch(&mut self, review_id: Uuid) {
    self.detail = Fetch::Loading;
    let generation = self.begin_request();
    let client = self.client.clone();
    let tx = self.tx.clone();
    let task = tokio::spawn(async move {
      let result = client
        .get_published_review(review_id)
        .await
        .map_err(|e| e.to_string());
      let _ = tx.send(Msg::DetailLoaded { generation, result });
    });
    self.inflight = Some(task.abort_handle());
  }

  fn spawn_admin_fetch(&mut self) {
    self.admin = Fetch::Loading;
    self.admin_cursor = 0;
    self.pending.clear();
    let generation = self.begin_request();
    let client = self.client.clone();
    let tx = self.tx.clone();
    let task = tokio::spawn(async move {
      let result = client.list_all_reviews().await.map_err(|e| e.to_string());
      let _ = tx.send(Msg::AdminLoaded { generation, result });
    });
    self.inflight = Some(task.abort_handle());
  }

  // ── Navigation ────────────────────────────────────────────────────────────

  pub fn open_upload(&mut self) {
    self.begin_request();
    self.screen = Screen::Upload;
    self.input_mode = InputMode::Normal;
  }

  pub fn open_share(&mut self, result_id: Uuid) {
    self.screen = Screen::Share { result_id };
    self.input_mode = InputMode::Normal;
    self.spawn_share_fetch(result_id);
  }

  pub fn open_results(&mut self) {
    self.begin_request();
    self.screen = Screen::Results;
    self.input_mode = InputMode::Normal;
  }

  pub fn open_reviews(&mut self) {
    self.screen = Screen::Reviews;
    self.input_mode = InputMode::Normal;
    self.filter.clear();
    self.spawn_reviews_fetch();
  }

  pub fn open_detail(&mut self, review_id: Uuid) {
    self.screen = Screen::ReviewDetail { review_id };
    self.input_mode = InputMode::Normal;
    self.spawn_detail_fetch(review_id);
  }

  /// Protected navigation: non-admins are redirected to the public review
  /// listing instead of being shown an error page.
  pub fn open_admin(&mut self) {
    if !self.gate.is_admin() {
      self.status_msg = "Admin access required — redirected to reviews.".into();
      self.open_reviews();
      return;
    }
    self.screen = Screen::Admin;
    self.input_mode = InputMode::Normal;
    self.filter.clear();
    self.spawn_admin_fetch();
  }

  // ── Upload ────────────────────────────────────────────────────────────────

  /// Validate and submit the upload form. Empty submissions are rejected
  /// here, before any network call; a submission already in flight makes
  /// this a no-op (double-press guard).
  pub fn submit_upload(&mut self) {
    if self.upload.in_flight {
      return;
    }
    self.upload.error = None;

    let submission = match self.upload_tab {
      UploadTab::Paste => CoaSubmission::from_text(self.upload.text.clone()),
      UploadTab::File => {
        let path = self.upload.file_path.trim();
        if path.is_empty() {
          CoaSubmission::default()
        } else {
          match std::fs::read(path) {
            Ok(bytes) => {
              let name = std::path::Path::new(path)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "coa.pdf".to_string());
              CoaSubmission::from_pdf(name, bytes)
            }
            Err(e) => {
              self.upload.error = Some(format!("Could not read {path}: {e}"));
              return;
            }
          }
        }
      }
    };

    if submission.is_empty() {
      self.upload.error = Some("Please upload a PDF file or paste COA text first.".into());
      return;
    }

    self.upload.in_flight = true;
    let generation = self.begin_request();
    let client = self.client.clone();
    let tx = self.tx.clone();
    let task = tokio::spawn(async move {
      let result = client
        .analyze_coa(submission)
        .await
        .map_err(|e| e.to_string());
      let _ = tx.send(Msg::AnalysisDone { generation, result });
    });
    self.inflight = Some(task.abort_handle());
  }

  // ── Moderation actions ────────────────────────────────────────────────────

  /// Approve the review under the cursor: flip the local row to published
  /// immediately, remember the previous status, roll back if the call fails.
  pub fn approve_cursor(&mut self) {
    let generation = self.generation;
    let Fetch::Ready(rows) = &mut self.admin else {
      return;
    };
    let Some(row) = rows.get_mut(self.admin_cursor) else {
      return;
    };
    if row.status.is_published() {
      return;
    }

    let id = row.id;
    let prev = row.status;
    row.status = ReviewStatus::Published;
    self.pending.insert(id, Pending::Approve { prev });

    let client = self.client.clone();
    let tx = self.tx.clone();
    tokio::spawn(async move {
      let result = client.approve_review(id).await.map_err(|e| e.to_string());
      let _ = tx.send(Msg::ApproveFinished { generation, id, result });
    });
  }

  /// Delete the review under the cursor, optimistically removing the row.
  pub fn delete_cursor(&mut self) {
    let generation = self.generation;
    let Fetch::Ready(rows) = &mut self.admin else {
      return;
    };
    if self.admin_cursor >= rows.len() {
      return;
    }

    let row = rows.remove(self.admin_cursor);
    let id = row.id;
    self.pending.insert(id, Pending::Delete {
      index: self.admin_cursor,
      row,
    });
    if self.admin_cursor >= rows.len() && self.admin_cursor > 0 {
      self.admin_cursor -= 1;
    }

    let client = self.client.clone();
    let tx = self.tx.clone();
    tokio::spawn(async move {
      let result = client.delete_review(id).await.map_err(|e| e.to_string());
      let _ = tx.send(Msg::DeleteFinished { generation, id, result });
    });
  }

  /// Kick off blog generation for the strain id typed into the prompt.
  fn submit_blog_prompt(&mut self) {
    let Some(prompt) = self.blog_prompt.take() else {
      return;
    };
    let strain_id: i64 = match prompt.trim().parse() {
      Ok(id) => id,
      Err(_) => {
        self.status_msg = "Strain id must be a number.".into();
        return;
      }
    };

    self.blog = Fetch::Loading;
    self.blog_scroll = 0;
    let generation = self.generation;
    let client = self.client.clone();
    let tx = self.tx.clone();
    let task = tokio::spawn(async move {
      let result = client
        .generate_blog_post(strain_id)
        .await
        .map_err(|e| e.to_string());
      let _ = tx.send(Msg::BlogGenerated { generation, result });
    });
    self.blog_task = Some(task.abort_handle());
  }

  /// Close the blog overlay and drop whatever generation request is still
  /// running; its result must not reopen the overlay.
  fn dismiss_blog_overlay(&mut self) {
    if let Some(handle) = self.blog_task.take() {
      handle.abort();
    }
    self.blog = Fetch::Idle;
    self.blog_scroll = 0;
  }

  // ── Message application ───────────────────────────────────────────────────

  /// Fold a background-task result into state. Messages from a superseded
  /// generation belong to a screen the user already left and are dropped.
  pub fn apply(&mut self, msg: Msg) {
    match msg {
      Msg::HealthChecked(result) => match result {
        Ok(status) => tracing::debug!(%status, "backend healthy"),
        Err(e) => {
          tracing::warn!(error = %e, "health check failed");
          self.status_msg = "Warning: analysis backend is unreachable.".into();
        }
      },

      Msg::AnalysisDone { generation, result } => {
        if generation != self.generation {
          return;
        }
        self.upload.in_flight = false;
        match result {
          Ok(analysis) => {
            // Navigate carrying only the token, mirroring the share link.
            let id = analysis.id;
            self.last_result = Some(analysis);
            self.upload.error = None;
            self.open_share(id);
          }
          Err(e) => self.upload.error = Some(e),
        }
      }

      Msg::ShareLoaded { generation, result } => {
        if generation != self.generation {
          return;
        }
        self.share = match result {
          Ok(r) => Fetch::Ready(r),
          Err(e) => Fetch::Failed(e),
        };
      }

      Msg::ReviewsLoaded { generation, result } => {
        if generation != self.generation {
          return;
        }
        self.reviews = match result {
          Ok(list) => Fetch::Ready(list),
          Err(e) => Fetch::Failed(e),
        };
      }

      Msg::DetailLoaded { generation, result } => {
        if generation != self.generation {
          return;
        }
        self.detail = match result {
          Ok(r) => Fetch::Ready(r),
          Err(e) => Fetch::Failed(e),
        };
      }

      Msg::AdminLoaded { generation, result } => {
        if generation != self.generation {
          return;
        }
        self.admin = match result {
          Ok(list) => Fetch::Ready(list),
          Err(e) => Fetch::Failed(e),
        };
      }

      Msg::ApproveFinished { generation, id, result } => {
        if generation != self.generation {
          return;
        }
        match result {
          Ok(()) => {
            self.pending.remove(&id);
          }
          Err(e) => {
            if let Some(Pending::Approve { prev }) = self.pending.remove(&id) {
              if let Fetch::Ready(rows) = &mut self.admin {
                if let Some(row) = rows.iter_mut().find(|r| r.id == id) {
                  row.status = prev;
                }
              }
            }
            self.status_msg = format!("Approve failed: {e}");
          }
        }
      }

      Msg::DeleteFinished { generation, id, result } => {
        if generation != self.generation {
          return;
        }
        match result {
          Ok(()) => {
            self.pending.remove(&id);
          }
          Err(e) => {
            if let Some(Pending::Delete { index, row }) = self.pending.remove(&id) {
              if let Fetch::Ready(rows) = &mut self.admin {
                rows.insert(index.min(rows.len()), row);
              }
            }
            self.status_msg = format!("Delete failed: {e}");
          }
        }
      }

      Msg::BlogGenerated { generation, result } => {
        // A result queued before dismissal still carries the current
        // generation; only a visibly loading overlay may accept it.
        if generation != self.generation || !self.blog.is_loading() {
          return;
        }
        self.blog = match result {
          Ok(post) => Fetch::Ready(post),
          Err(e) => Fetch::Failed(e),
        };
      }
    }
  }

  // ── Filtered listing ──────────────────────────────────────────────────────

  /// Published reviews matching the current fuzzy filter, by strain name.
  pub fn filtered_reviews(&self) -> Vec<&PublicAnalysisResult> {
    let Some(list) = self.reviews.ready() else {
      return Vec::new();
    };
    if self.filter.is_empty() {
      return list.iter().collect();
    }
    let matcher = SkimMatcherV2::default();
    list
      .iter()
      .filter(|r| {
        matcher
          .fuzzy_match(&r.data.strain_name, &self.filter)
          .is_some()
      })
      .collect()
  }

  // ── Clipboard ─────────────────────────────────────────────────────────────

  pub fn share_link(&self, result_id: Uuid) -> String {
    share::share_url(&self.share_base, &result_id.to_string())
  }

  fn copy_to_clipboard(&mut self, text: &str, what: &str) {
    match clipboard::copy(text) {
      Ok(()) => {
        self.copied_at = Some(Instant::now());
        self.status_msg = format!("{what} copied.");
      }
      Err(e) => self.status_msg = format!("Copy failed: {e}"),
    }
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub fn handle_key(&mut self, key: KeyEvent) -> bool {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return false;
    }

    match self.input_mode {
      InputMode::Normal => self.handle_normal_key(key),
      InputMode::EditFilePath | InputMode::EditText => self.handle_edit_key(key),
      InputMode::Filter => self.handle_filter_key(key),
      InputMode::BlogPrompt => self.handle_blog_prompt_key(key),
    }
  }

  fn handle_normal_key(&mut self, key: KeyEvent) -> bool {
    // Blog overlay swallows keys while visible.
    if !matches!(self.blog, Fetch::Idle) {
      match key.code {
        KeyCode::Esc | KeyCode::Char('q') => self.dismiss_blog_overlay(),
        KeyCode::Down | KeyCode::Char('j') => self.blog_scroll += 1,
        KeyCode::Up | KeyCode::Char('k') => {
          self.blog_scroll = self.blog_scroll.saturating_sub(1)
        }
        _ => {}
      }
      return true;
    }

    // Global navigation.
    match key.code {
      KeyCode::Char('q') => return false,
      KeyCode::Char('1') => {
        self.open_upload();
        return true;
      }
      KeyCode::Char('2') => {
        self.open_reviews();
        return true;
      }
      KeyCode::Char('3') => {
        self.open_results();
        return true;
      }
      KeyCode::Char('4') => {
        self.open_admin();
        return true;
      }
      _ => {}
    }

    match self.screen {
      Screen::Upload => self.handle_upload_key(key),
      Screen::Share { result_id } => self.handle_share_key(key, Some(result_id)),
      Screen::Results => {
        let id = self.last_result.as_ref().map(|r| r.id);
        self.handle_share_key(key, id)
      }
      Screen::Reviews => self.handle_reviews_key(key),
      Screen::ReviewDetail { .. } => {
        if matches!(key.code, KeyCode::Esc | KeyCode::Left | KeyCode::Char('h')) {
          self.open_reviews();
        }
        true
      }
      Screen::Admin => self.handle_admin_key(key),
    }
  }

  fn handle_upload_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Tab => {
        self.upload_tab = match self.upload_tab {
          UploadTab::File => UploadTab::Paste,
          UploadTab::Paste => UploadTab::File,
        };
      }
      KeyCode::Char('f') => {
        self.upload_tab = UploadTab::File;
        self.input_mode = InputMode::EditFilePath;
      }
      KeyCode::Char('p') => {
        self.upload_tab = UploadTab::Paste;
        self.input_mode = InputMode::EditText;
      }
      KeyCode::Enter => self.submit_upload(),
      _ => {}
    }
    true
  }

  fn handle_edit_key(&mut self, key: KeyEvent) -> bool {
    let editing_path = self.input_mode == InputMode::EditFilePath;
    let field = if editing_path {
      &mut self.upload.file_path
    } else {
      &mut self.upload.text
    };

    match key.code {
      KeyCode::Esc => self.input_mode = InputMode::Normal,
      KeyCode::Enter if editing_path => self.input_mode = InputMode::Normal,
      KeyCode::Enter => field.push('\n'),
      KeyCode::Backspace => {
        field.pop();
      }
      KeyCode::Char(c) => field.push(c),
      _ => {}
    }
    true
  }

  fn handle_share_key(&mut self, key: KeyEvent, result_id: Option<Uuid>) -> bool {
    match key.code {
      KeyCode::Esc => self.open_upload(),
      // Retry a failed share fetch without restarting.
      KeyCode::Char('r') => {
        if let Screen::Share { result_id } = self.screen {
          if matches!(self.share, Fetch::Failed(_)) {
            self.spawn_share_fetch(result_id);
          }
        }
      }
      KeyCode::Char('c') => {
        let summary = match self.screen {
          Screen::Share { .. } => self.share.ready().map(|r| r.summary.clone()),
          _ => self.last_result.as_ref().map(|r| r.summary.clone()),
        };
        if let Some(summary) = summary {
          self.copy_to_clipboard(&summary, "Summary");
        }
      }
      KeyCode::Char('s') => {
        if let Some(id) = result_id {
          let link = self.share_link(id);
          self.copy_to_clipboard(&link, "Share link");
        }
      }
      _ => {}
    }
    true
  }

  fn handle_reviews_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Down | KeyCode::Char('j') => {
        let len = self.filtered_reviews().len();
        if len > 0 && self.reviews_cursor + 1 < len {
          self.reviews_cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.reviews_cursor = self.reviews_cursor.saturating_sub(1);
      }
      KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
        let id = self
          .filtered_reviews()
          .get(self.reviews_cursor)
          .map(|r| r.id);
        if let Some(id) = id {
          self.open_detail(id);
        }
      }
      KeyCode::Char('/') => {
        self.input_mode = InputMode::Filter;
        self.filter.clear();
        self.reviews_cursor = 0;
      }
      KeyCode::Esc => self.open_upload(),
      _ => {}
    }
    true
  }

  fn handle_filter_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Esc => {
        self.input_mode = InputMode::Normal;
        self.filter.clear();
        self.reviews_cursor = 0;
      }
      KeyCode::Enter => {
        self.input_mode = InputMode::Normal;
        self.reviews_cursor = 0;
      }
      KeyCode::Backspace => {
        self.filter.pop();
        self.reviews_cursor = 0;
      }
      KeyCode::Char(c) => {
        self.filter.push(c);
        self.reviews_cursor = 0;
      }
      _ => {}
    }
    true
  }

  fn handle_admin_key(&mut self, key: KeyEvent) -> bool {
    let len = self.admin.ready().map(Vec::len).unwrap_or(0);
    match key.code {
      KeyCode::Down | KeyCode::Char('j') => {
        if len > 0 && self.admin_cursor + 1 < len {
          self.admin_cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.admin_cursor = self.admin_cursor.saturating_sub(1);
      }
      KeyCode::Char('a') => self.approve_cursor(),
      KeyCode::Char('d') => self.delete_cursor(),
      KeyCode::Char('g') => {
        self.blog_prompt = Some(String::new());
        self.input_mode = InputMode::BlogPrompt;
      }
      KeyCode::Char('r') => self.spawn_admin_fetch(),
      KeyCode::Esc => self.open_reviews(),
      _ => {}
    }
    true
  }

  fn handle_blog_prompt_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Esc => {
        self.blog_prompt = None;
        self.input_mode = InputMode::Normal;
      }
      KeyCode::Enter => {
        self.input_mode = InputMode::Normal;
        self.submit_blog_prompt();
      }
      KeyCode::Backspace => {
        if let Some(prompt) = &mut self.blog_prompt {
          prompt.pop();
        }
      }
      KeyCode::Char(c) if c.is_ascii_digit() => {
        if let Some(prompt) = &mut self.blog_prompt {
          prompt.push(c);
        }
      }
      _ => {}
    }
    true
  }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
