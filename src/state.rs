//! Per-session dashboard state.
//!
//! Every page load re-renders from scratch, so all UI state that must
//! survive a reload lives here. The store is an explicit context object
//! handed to handlers; defaults are declared once on [`SessionState`] rather
//! than scattered through render code.

use crate::data::{AnalysisResults, DashboardResults, Table};
use crate::theme::Theme;
use rand::rngs::OsRng;
use rand::RngCore;
use std::collections::BTreeMap;
use std::fmt;

/// Closed set of processing states.
///
/// The lifecycle is strictly `Idle -> Running -> (Done | Error)`, with any
/// state allowed to return to `Idle` via [`SessionState::clear_analysis_state`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessingStatus {
    #[default]
    Idle,
    Running,
    Done,
    Error,
}

impl ProcessingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProcessingStatus::Idle => "idle",
            ProcessingStatus::Running => "running",
            ProcessingStatus::Done => "done",
            ProcessingStatus::Error => "error",
        }
    }
}

impl fmt::Display for ProcessingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which message queue a status string belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Error,
    Success,
}

/// Chart image-export formats offered in the export panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Png,
    Svg,
}

impl ExportFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Svg => "svg",
        }
    }
}

/// Chart arrangement for the visualizations tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardLayout {
    #[default]
    SingleColumn,
    TwoColumns,
    Grid,
}

impl DashboardLayout {
    /// Charts per row for this layout.
    pub fn columns(self) -> usize {
        match self {
            DashboardLayout::SingleColumn => 1,
            DashboardLayout::TwoColumns => 2,
            DashboardLayout::Grid => 3,
        }
    }
}

/// All state one interactive session keeps across page reloads.
///
/// The `Default` impl is the single source of initial values; there are no
/// ad-hoc initialization literals anywhere else.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub data_loaded: bool,
    pub current_data: Option<Table>,
    pub original_data: Option<Table>,
    pub analysis_results: Option<AnalysisResults>,
    pub dashboard_results: Option<DashboardResults>,
    pub ai_enabled: bool,
    pub selected_theme: Theme,
    pub processing_status: ProcessingStatus,
    /// Append-only until explicitly cleared.
    pub error_messages: Vec<String>,
    /// Append-only until explicitly cleared.
    pub success_messages: Vec<String>,
    pub uploaded_filename: Option<String>,
    /// Labels of completed analysis runs, oldest first.
    pub analysis_history: Vec<String>,
    pub chart_export_format: ExportFormat,
    pub dashboard_layout: DashboardLayout,
    pub show_advanced_options: bool,
    pub data_preview_rows: usize,
    pub auto_refresh: bool,
}

impl Default for SessionState {
    fn default() -> SessionState {
        SessionState {
            data_loaded: false,
            current_data: None,
            original_data: None,
            analysis_results: None,
            dashboard_results: None,
            ai_enabled: false,
            selected_theme: Theme::Business,
            processing_status: ProcessingStatus::Idle,
            error_messages: Vec::new(),
            success_messages: Vec::new(),
            uploaded_filename: None,
            analysis_history: Vec::new(),
            chart_export_format: ExportFormat::Png,
            dashboard_layout: DashboardLayout::SingleColumn,
            show_advanced_options: false,
            data_preview_rows: 10,
            auto_refresh: false,
        }
    }
}

impl SessionState {
    /// Reset analysis-derived state while leaving loaded data untouched.
    ///
    /// Computed-results fields go back to the absent sentinel, the message
    /// queues empty, and the processing status returns to idle.
    pub fn clear_analysis_state(&mut self) {
        self.analysis_results = None;
        self.dashboard_results = None;
        self.processing_status = ProcessingStatus::Idle;
        self.error_messages.clear();
        self.success_messages.clear();
    }

    /// Append a message to the queue for `kind`.
    pub fn add_message(&mut self, message: impl Into<String>, kind: MessageKind) {
        let queue = match kind {
            MessageKind::Error => &mut self.error_messages,
            MessageKind::Success => &mut self.success_messages,
        };
        queue.push(message.into());
    }

    /// Empty both message queues.
    pub fn clear_messages(&mut self) {
        self.error_messages.clear();
        self.success_messages.clear();
    }

    /// Overwrite the processing status.
    pub fn set_processing_status(&mut self, status: ProcessingStatus) {
        self.processing_status = status;
    }
}

/// In-memory store of per-session state, keyed by session id.
///
/// One session is only ever touched by the request currently rendering it,
/// so there is no locking discipline here; the server wraps the whole store
/// in its own lock.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: BTreeMap<String, SessionState>,
}

impl SessionStore {
    pub fn new() -> SessionStore {
        SessionStore::default()
    }

    /// Ensure a session exists, creating default state only when absent.
    ///
    /// Safe to call on every page load: an existing session's live state is
    /// never overwritten.
    pub fn initialize(&mut self, session_id: &str) -> &mut SessionState {
        self.sessions.entry(session_id.to_string()).or_default()
    }

    /// Read one session's state, if initialized.
    pub fn get(&self, session_id: &str) -> Option<&SessionState> {
        self.sessions.get(session_id)
    }

    /// Mutable access to one session's state, if initialized.
    pub fn get_mut(&mut self, session_id: &str) -> Option<&mut SessionState> {
        self.sessions.get_mut(session_id)
    }

    /// Drop a session entirely (host-managed expiry).
    pub fn remove(&mut self, session_id: &str) -> Option<SessionState> {
        self.sessions.remove(session_id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// Mint an opaque session id: four dash-joined hex quads, 19 chars total.
///
/// The id only names a [`SessionStore`] entry and travels in a cookie, so
/// 64 random bits keep collisions negligible without any uniqueness check.
pub fn generate_session_id() -> String {
    let mut bytes = [0u8; 8];
    OsRng.fill_bytes(&mut bytes);
    let hex = format!("{:016x}", u64::from_be_bytes(bytes));
    format!(
        "{}-{}-{}-{}",
        &hex[0..4],
        &hex[4..8],
        &hex[8..12],
        &hex[12..16]
    )
}
