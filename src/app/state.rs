// ChatScribe - app/state.rs
//
// Application state management. Holds the current transcript, the inline
// error message, and the copy-confirmation feedback.
// Owned by the eframe::App implementation.

use crate::app::load::LoadedTranscript;
use crate::app::session;
use crate::core::model::{ChatEntry, ExtractSummary};
use crate::util::constants::COPY_FEEDBACK_RESET_MS;
use std::path::PathBuf;
use std::time::{Duration, Instant};

// =============================================================================
// Copy feedback
// =============================================================================

/// The transient "Copied!" confirmation shown on the Copy button.
///
/// Holds the instant of the most recent copy. A new copy replaces the
/// stored instant, so only the latest copy governs when the confirmation
/// reverts — the earlier pending revert is cancelled implicitly.
#[derive(Debug, Default)]
pub struct CopyFeedback {
    copied_at: Option<Instant>,
}

impl CopyFeedback {
    /// Record a copy at `now`. Replaces any pending confirmation.
    pub fn mark(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    /// Whether the confirmation is still showing at `now`.
    pub fn is_active(&self, now: Instant) -> bool {
        self.remaining(now).is_some()
    }

    /// Time left until the confirmation reverts, or `None` when inactive.
    /// Used by the UI to schedule a repaint at exactly the revert instant.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let reset = Duration::from_millis(COPY_FEEDBACK_RESET_MS);
        let copied_at = self.copied_at?;
        let elapsed = now.saturating_duration_since(copied_at);
        if elapsed < reset {
            Some(reset - elapsed)
        } else {
            None
        }
    }
}

// =============================================================================
// Application state
// =============================================================================

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// The transcript currently on display (empty when nothing is loaded).
    pub transcript: String,

    /// Extracted entries backing the transcript.
    pub entries: Vec<ChatEntry>,

    /// The source log file of the current transcript.
    pub source_path: Option<PathBuf>,

    /// Statistics from the most recent extraction.
    pub summary: Option<ExtractSummary>,

    /// Inline error message. Persistent until the next load action.
    pub error_message: Option<String>,

    /// Status message for the status bar.
    pub status_message: String,

    /// Copy-confirmation state for the Copy button.
    pub copy_feedback: CopyFeedback,

    /// A file queued for loading (set by drag-drop, the file dialog, or
    /// the CLI; consumed by the frame loop).
    pub pending_file: Option<PathBuf>,

    /// Directory the file dialog opens in (restored from the session).
    pub last_open_dir: Option<PathBuf>,

    /// Whether to show the extraction summary dialog.
    pub show_summary: bool,

    /// Whether to show the About dialog.
    pub show_about: bool,

    /// Platform data directory, used for session persistence.
    data_dir: PathBuf,
}

impl AppState {
    /// Create initial state.
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            transcript: String::new(),
            entries: Vec::new(),
            source_path: None,
            summary: None,
            error_message: None,
            status_message: "Ready. Drop a game log to extract its chat.".to_string(),
            copy_feedback: CopyFeedback::default(),
            pending_file: None,
            last_open_dir: None,
            show_summary: false,
            show_about: false,
            data_dir,
        }
    }

    /// Whether a transcript is currently loaded (possibly with zero chat
    /// lines — an extracted-but-empty transcript still counts as loaded).
    pub fn has_transcript(&self) -> bool {
        self.source_path.is_some()
    }

    /// Replace the current transcript with a freshly loaded one.
    /// Clears any previous error; a successful load is the "next action"
    /// that dismisses it.
    pub fn set_transcript(&mut self, loaded: LoadedTranscript) {
        let name = loaded
            .source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| loaded.source.display().to_string());
        self.status_message = if loaded.summary.malformed_lines > 0 {
            format!(
                "Extracted {} chat line(s) from {name} ({} malformed line(s) skipped).",
                loaded.summary.entries_extracted, loaded.summary.malformed_lines,
            )
        } else {
            format!(
                "Extracted {} chat line(s) from {name}.",
                loaded.summary.entries_extracted,
            )
        };
        self.last_open_dir = loaded.source.parent().map(|p| p.to_path_buf());
        self.transcript = loaded.transcript;
        self.entries = loaded.entries;
        self.summary = Some(loaded.summary);
        self.source_path = Some(loaded.source);
        self.error_message = None;
    }

    /// Surface a load failure. The current transcript is left untouched.
    pub fn set_error(&mut self, message: String) {
        self.status_message = "Load failed.".to_string();
        self.error_message = Some(message);
    }

    /// Persist the session (last-opened directory). Failures are logged
    /// and otherwise ignored — session persistence is best-effort.
    pub fn save_session(&self) {
        let data = session::SessionData {
            version: session::SESSION_VERSION,
            last_open_dir: self.last_open_dir.clone(),
        };
        let path = session::session_path(&self.data_dir);
        if let Err(e) = session::save(&data, &path) {
            tracing::warn!(error = %e, "Could not save session");
        }
    }

    /// Restore session state saved by a previous run.
    pub fn restore_session(&mut self) {
        let path = session::session_path(&self.data_dir);
        if let Some(data) = session::load(&path) {
            self.last_open_dir = data.last_open_dir;
        }
    }
}
