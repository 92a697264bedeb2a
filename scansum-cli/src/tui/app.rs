//! App state machine and section routing.

use std::path::PathBuf;
use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tokio::sync::mpsc;

use scansum_client::ApiClient;
use scansum_types::{AnalysisResult, Host};

use super::sections;
use super::theme;

/// Summary types the backend understands, in cycle order.
pub const SUMMARY_TYPES: [&str; 3] = ["detailed", "brief", "technical"];

// ---------------------------------------------------------------------------
// Section enum
// ---------------------------------------------------------------------------

/// Exactly one section is on screen at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Preview,
    Loading,
    Results,
    Error,
}

// ---------------------------------------------------------------------------
// In-flight request marker (busy lock)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Sample,
    Upload,
    Summarize,
}

impl Request {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sample => "Loading sample data",
            Self::Upload => "Uploading file",
            Self::Summarize => "Analyzing hosts",
        }
    }
}

// ---------------------------------------------------------------------------
// Actions keys can request
// ---------------------------------------------------------------------------

pub enum Action {
    Quit,
    LoadSample,
    BeginUpload,
    SubmitUpload(String),
    CancelUpload,
    Analyze,
    CycleSummaryType,
    Retry,
    ScrollUp,
    ScrollDown,
}

// ---------------------------------------------------------------------------
// Completed backend requests
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum ApiEvent {
    HealthFailed(String),
    SampleLoaded(Vec<Host>),
    SampleFailed(String),
    UploadDone(Vec<Host>),
    UploadFailed(String),
    SummaryReady(Box<AnalysisResult>),
    SummaryFailed(String),
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    pub section: Section,
    pub hosts: Vec<Host>,
    pub result: Option<AnalysisResult>,
    pub error_message: Option<String>,
    pub health_warning: Option<String>,
    pub summary_type_idx: usize,
    /// While `Some`, keystrokes edit the upload path.
    pub upload_input: Option<String>,
    /// While `Some`, request-triggering keys are ignored.
    pub in_flight: Option<Request>,
    pub scroll: u16,
    pub tick: usize,
    pub should_quit: bool,

    client: Arc<ApiClient>,
    api_tx: mpsc::Sender<ApiEvent>,
    api_rx: Option<mpsc::Receiver<ApiEvent>>,
}

impl App {
    pub fn new(client: ApiClient, summary_type: &str) -> Self {
        let (api_tx, api_rx) = mpsc::channel::<ApiEvent>(16);
        Self {
            section: Section::Home,
            hosts: Vec::new(),
            result: None,
            error_message: None,
            health_warning: None,
            summary_type_idx: SUMMARY_TYPES
                .iter()
                .position(|t| *t == summary_type)
                .unwrap_or(0),
            upload_input: None,
            in_flight: None,
            scroll: 0,
            tick: 0,
            should_quit: false,
            client: Arc::new(client),
            api_tx,
            api_rx: Some(api_rx),
        }
    }

    pub fn take_api_rx(&mut self) -> Option<mpsc::Receiver<ApiEvent>> {
        self.api_rx.take()
    }

    pub fn summary_type(&self) -> &'static str {
        SUMMARY_TYPES[self.summary_type_idx]
    }

    /// Fire-and-forget liveness probe; only failure is surfaced.
    pub fn check_health(&self) {
        let client = self.client.clone();
        let tx = self.api_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = client.health().await {
                let _ = tx.send(ApiEvent::HealthFailed(e.to_string())).await;
            }
        });
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    // -- input ---------------------------------------------------------------

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // Path input captures the keyboard while open
        if self.upload_input.is_some() {
            match key.code {
                KeyCode::Enter => {
                    let path = self
                        .upload_input
                        .as_deref()
                        .unwrap_or("")
                        .trim()
                        .to_string();
                    if !path.is_empty() {
                        self.apply_action(Action::SubmitUpload(path));
                    }
                }
                KeyCode::Esc => self.apply_action(Action::CancelUpload),
                KeyCode::Backspace => {
                    if let Some(input) = self.upload_input.as_mut() {
                        input.pop();
                    }
                }
                KeyCode::Char(c) => {
                    if let Some(input) = self.upload_input.as_mut() {
                        input.push(c);
                    }
                }
                _ => {}
            }
            return;
        }

        let action = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('s') => Some(Action::LoadSample),
            KeyCode::Char('u') => Some(Action::BeginUpload),
            KeyCode::Char('a') => Some(Action::Analyze),
            KeyCode::Char('t') | KeyCode::Left | KeyCode::Right => Some(Action::CycleSummaryType),
            KeyCode::Char('r') => Some(Action::Retry),
            KeyCode::Up => Some(Action::ScrollUp),
            KeyCode::Down => Some(Action::ScrollDown),
            _ => None,
        };
        if let Some(action) = action {
            self.apply_action(action);
        }
    }

    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::LoadSample => {
                if self.in_flight.is_some() {
                    return;
                }
                self.start_request(Request::Sample);
                let client = self.client.clone();
                let tx = self.api_tx.clone();
                tokio::spawn(async move {
                    let event = match client.sample_data().await {
                        Ok(data) => ApiEvent::SampleLoaded(data.hosts),
                        Err(e) => ApiEvent::SampleFailed(e.to_string()),
                    };
                    let _ = tx.send(event).await;
                });
            }
            Action::BeginUpload => {
                if self.in_flight.is_some() {
                    return;
                }
                self.upload_input = Some(String::new());
            }
            Action::SubmitUpload(path) => {
                if self.in_flight.is_some() {
                    return;
                }
                // Input closes no matter how the request ends.
                self.upload_input = None;
                self.start_request(Request::Upload);
                let client = self.client.clone();
                let tx = self.api_tx.clone();
                tokio::spawn(async move {
                    let event = match client.upload_file(&PathBuf::from(path)).await {
                        Ok(data) => ApiEvent::UploadDone(data.hosts),
                        Err(e) => ApiEvent::UploadFailed(e.to_string()),
                    };
                    let _ = tx.send(event).await;
                });
            }
            Action::CancelUpload => self.upload_input = None,
            Action::Analyze => {
                if self.in_flight.is_some() {
                    return;
                }
                if self.hosts.is_empty() {
                    self.fail("No host data available to analyze".into());
                    return;
                }
                self.start_request(Request::Summarize);
                let client = self.client.clone();
                let tx = self.api_tx.clone();
                let hosts = self.hosts.clone();
                let summary_type = self.summary_type();
                tokio::spawn(async move {
                    let event = match client.summarize(&hosts, summary_type).await {
                        Ok(result) => ApiEvent::SummaryReady(Box::new(result)),
                        Err(e) => ApiEvent::SummaryFailed(e.to_string()),
                    };
                    let _ = tx.send(event).await;
                });
            }
            Action::CycleSummaryType => {
                self.summary_type_idx = (self.summary_type_idx + 1) % SUMMARY_TYPES.len();
            }
            Action::Retry => {
                if self.section != Section::Error {
                    return;
                }
                self.error_message = None;
                self.section = if self.hosts.is_empty() {
                    Section::Home
                } else {
                    Section::Preview
                };
            }
            Action::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            Action::ScrollDown => self.scroll = self.scroll.saturating_add(1),
        }
    }

    // -- backend completions -------------------------------------------------

    pub fn handle_api_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::HealthFailed(msg) => {
                self.health_warning = Some(format!(
                    "Unable to connect to the backend API at {}: {msg}",
                    self.client.base_url()
                ));
            }
            ApiEvent::SampleLoaded(hosts) => {
                self.in_flight = None;
                self.hosts = hosts;
                self.show_preview();
            }
            ApiEvent::SampleFailed(msg) => {
                self.in_flight = None;
                self.fail(format!("Failed to load sample data: {msg}"));
            }
            ApiEvent::UploadDone(hosts) => {
                self.in_flight = None;
                self.hosts = hosts;
                self.show_preview();
            }
            ApiEvent::UploadFailed(msg) => {
                self.in_flight = None;
                self.fail(format!("Failed to upload file: {msg}"));
            }
            ApiEvent::SummaryReady(result) => {
                self.in_flight = None;
                self.result = Some(*result);
                self.section = Section::Results;
                self.scroll = 0;
            }
            ApiEvent::SummaryFailed(msg) => {
                self.in_flight = None;
                self.fail(format!("Analysis failed: {msg}"));
            }
        }
    }

    fn start_request(&mut self, request: Request) {
        self.in_flight = Some(request);
        self.section = Section::Loading;
        self.error_message = None;
    }

    fn show_preview(&mut self) {
        self.error_message = None;
        self.section = Section::Preview;
        self.scroll = 0;
    }

    fn fail(&mut self, message: String) {
        self.error_message = Some(message);
        self.section = Section::Error;
        self.scroll = 0;
    }

    // -- rendering -----------------------------------------------------------

    pub fn render(&mut self, frame: &mut ratatui::Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(4),
                Constraint::Length(1),
            ])
            .split(size);

        self.render_header(frame, chunks[0]);

        match self.section {
            Section::Home => sections::home::render(frame, chunks[1], &self.health_warning),
            Section::Preview => sections::preview::render(frame, chunks[1], &self.hosts, self.scroll),
            Section::Loading => {
                let request = self.in_flight.unwrap_or(Request::Sample);
                sections::loading::render(frame, chunks[1], request, self.tick);
            }
            Section::Results => {
                sections::results::render(frame, chunks[1], self.result.as_ref(), self.scroll)
            }
            Section::Error => {
                sections::error::render(frame, chunks[1], self.error_message.as_deref())
            }
        }

        self.render_footer(frame, chunks[2]);
    }

    fn render_header(&self, frame: &mut ratatui::Frame, area: Rect) {
        let spans = vec![
            Span::styled(
                concat!(" scansum v", env!("CARGO_PKG_VERSION")),
                theme::TITLE,
            ),
            Span::styled(format!("  {}", self.client.base_url()), theme::TEXT_DIM),
            Span::raw(format!("  summary: {}", self.summary_type())),
        ];
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_footer(&self, frame: &mut ratatui::Frame, area: Rect) {
        // Path entry takes over the footer while open
        if let Some(ref input) = self.upload_input {
            let spans = vec![
                Span::styled(" File path: ", theme::FOOTER_KEY),
                Span::styled(format!("{input}\u{2588}"), theme::INPUT),
                Span::styled("  Enter:upload  Esc:cancel", theme::TEXT_DIM),
            ];
            frame.render_widget(
                Paragraph::new(Line::from(spans)).style(theme::FOOTER_BG),
                area,
            );
            return;
        }

        let hints = match self.section {
            Section::Home => sections::home::footer_hints(),
            Section::Preview => sections::preview::footer_hints(),
            Section::Loading => sections::loading::footer_hints(),
            Section::Results => sections::results::footer_hints(),
            Section::Error => sections::error::footer_hints(),
        };
        let mut spans = Vec::new();
        for (key, desc) in hints {
            spans.push(Span::styled(format!(" {key}"), theme::FOOTER_KEY));
            spans.push(Span::raw(format!(":{desc}  ")));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(theme::FOOTER_BG),
            area,
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
