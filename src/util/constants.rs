// ChatScribe - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "ChatScribe";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "ChatScribe";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Chat line markers
// =============================================================================

/// Literal text preceding the chat message body in a client log line.
pub const CHAT_MESSAGE_MARKER: &str = "Chat received valid message: ";

/// Literal text preceding the speaker's display name. The single space
/// separating the message body from this marker belongs to the marker
/// boundary, so extracted messages never carry a trailing space.
pub const SPEAKER_NAME_MARKER: &str = "with speaker DisplayName ";

/// Fixed closing tag that terminates the bracketed speaker token. The
/// client writes exactly one further character after it (a closing quote,
/// or `\r` in CRLF logs).
pub const SPEAKER_CLOSE_TAG: &str = "</font>";

// =============================================================================
// Extraction limits
// =============================================================================

/// Maximum number of malformed-line diagnostics retained per extraction.
/// The total malformed count keeps counting past this cap; only the
/// per-line detail records are bounded.
pub const MAX_MALFORMED_DIAGNOSTICS: usize = 1_000;

/// File size in bytes above which the log is memory-mapped instead of
/// read into a heap buffer.
pub const LARGE_FILE_MMAP_THRESHOLD: u64 = 16 * 1024 * 1024; // 16 MB

/// The only accepted file extension (the desktop stand-in for the
/// `text/plain` media-type gate).
pub const ACCEPTED_EXTENSION: &str = "txt";

// =============================================================================
// UI
// =============================================================================

/// User-facing message shown when a non-text file is dropped or picked.
pub const MSG_UNSUPPORTED_FILE: &str = "Please upload a .txt file.";

/// How long the Copy button shows its "Copied!" confirmation before
/// reverting (ms).
pub const COPY_FEEDBACK_RESET_MS: u64 = 2_000;

/// Where the client writes its game logs, shown as a hint in the drop zone.
pub const GAME_LOG_DIR_HINT: &str = r"\Riot Games\League of Legends\Logs\GameLogs\";

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Session persistence file name (stored in the platform data directory).
pub const SESSION_FILE_NAME: &str = "session.json";
