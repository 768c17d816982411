//! TUI application state and event handling.
//!
//! The screen holds three pieces of search state (query text, result list,
//! error message) plus focus and selection. Pressing Enter is the search
//! button: it runs [`SearchService::search`] once and applies the outcome.
//!
//! # Event loop
//!
//! A submitted search is not run inside the key handler. The handler marks it
//! pending, the loop redraws with a "Searching…" label, then performs the
//! blocking lookup and redraws with the outcome.

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::clipboard::copy_url_to_clipboard;
use crate::models::{ResultRecord, SearchOutcome};
use crate::search::SearchError;
use crate::search::SearchService;
use crate::search::query::MAX_QUERY_CHARS;

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;
/// Rows skipped by PageUp/PageDown
const PAGE_SIZE: isize = 5;

/// Which widget receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Results,
}

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

pub struct App {
    service: SearchService,
    query: String,
    results: Vec<ResultRecord>,
    error: Option<SearchError>,
    focus: Focus,
    selected_idx: usize,
    search_pending: bool,
    should_quit: bool,
    status_message: Option<StatusMessage>,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(service: SearchService) -> Self {
        Self {
            service,
            query: String::new(),
            results: Vec::new(),
            error: None,
            focus: Focus::Input,
            selected_idx: 0,
            search_pending: false,
            should_quit: false,
            status_message: None,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    /// Start with text already in the query field
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into().chars().take(MAX_QUERY_CHARS).collect();
        self
    }

    pub fn results(&self) -> &[ResultRecord] {
        &self.results
    }

    pub fn error(&self) -> Option<&SearchError> {
        self.error.as_ref()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    fn clear_expired_status(&mut self) {
        let expired = self
            .status_message
            .as_ref()
            .map(|msg| Instant::now() >= msg.expires_at)
            .unwrap_or(false);
        if expired {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.clear_expired_status();

            // Redraw when dirty, or every 100ms to pick up terminal resizes
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                terminal.draw(|f| {
                    let state = RenderState {
                        query: &self.query,
                        focus: self.focus,
                        results: &self.results,
                        selected_idx: self.selected_idx,
                        error: self.error.as_ref(),
                        searching: self.search_pending,
                        status_message: self.status_message.as_ref(),
                    };
                    render_ui(f, &state);
                })?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            // The "Searching…" frame is on screen; run the lookup now
            if self.search_pending {
                self.run_search();
                continue;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ClearQuery => {
                if self.query.is_empty() {
                    self.should_quit = true;
                } else {
                    self.query.clear();
                    self.focus = Focus::Input;
                    self.needs_redraw = true;
                }
            }
            Action::Submit => {
                if !self.search_pending {
                    self.search_pending = true;
                    self.needs_redraw = true;
                }
            }
            Action::ToggleFocus => {
                self.focus = match self.focus {
                    Focus::Input => Focus::Results,
                    Focus::Results => Focus::Input,
                };
                self.needs_redraw = true;
            }
            Action::MoveUp => self.move_selection(-1),
            Action::MoveDown => self.move_selection(1),
            Action::PageUp => self.move_selection(-PAGE_SIZE),
            Action::PageDown => self.move_selection(PAGE_SIZE),
            Action::CopyUrl => self.copy_selected_url(),
            Action::InsertChar(c) => self.insert_char(c),
            Action::DeleteChar => self.delete_char(),
            Action::None => {}
        }
    }

    /// Run the pending search and apply its outcome
    fn run_search(&mut self) {
        log::debug!("[TUI] searching for {:?}", self.query);
        let outcome = self.service.search(&self.query);
        self.search_pending = false;
        self.apply_outcome(outcome);
    }

    /// Update screen state from a finished search
    fn apply_outcome(&mut self, outcome: SearchOutcome) {
        match outcome {
            SearchOutcome::Results(records) => {
                self.results = records;
                self.error = None;
                self.selected_idx = 0;
            }
            SearchOutcome::Failed(err) => {
                if !err.is_local() {
                    self.results.clear();
                    self.selected_idx = 0;
                }
                if err == SearchError::EmptyQuery {
                    self.focus = Focus::Input;
                }
                self.error = Some(err);
            }
        }
        self.needs_redraw = true;
    }

    fn move_selection(&mut self, delta: isize) {
        let total = self.results.len();
        if total == 0 {
            self.selected_idx = 0;
            return;
        }

        let old_idx = self.selected_idx;
        let new_idx = (self.selected_idx as isize + delta).max(0) as usize;
        self.selected_idx = new_idx.min(total - 1);

        if old_idx != self.selected_idx {
            self.needs_redraw = true;
        }
    }

    fn insert_char(&mut self, c: char) {
        // Typing always goes to the query field
        self.focus = Focus::Input;
        if self.query.chars().count() < MAX_QUERY_CHARS {
            self.query.push(c);
        }
        self.needs_redraw = true;
    }

    fn delete_char(&mut self) {
        self.focus = Focus::Input;
        if self.query.pop().is_some() {
            self.needs_redraw = true;
        }
    }

    fn copy_selected_url(&mut self) {
        let Some(record) = self.results.get(self.selected_idx) else {
            self.set_status("✗ No result selected", MessageType::Error, STATUS_ERROR_DURATION_MS);
            return;
        };

        match copy_url_to_clipboard(&record.url) {
            Ok(()) => {
                self.set_status("✓ Copied URL", MessageType::Success, STATUS_SUCCESS_DURATION_MS)
            }
            Err(e) => self.set_status(
                format!("✗ Clipboard error: {}", e),
                MessageType::Error,
                STATUS_ERROR_DURATION_MS,
            ),
        }
    }
}
