// ChatScribe - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; all errors preserve the causal
// chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all ChatScribe operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum ChatScribeError {
    /// Loading or gating an input log file failed.
    Load(LoadError),

    /// Writing a transcript to disk failed.
    Export(ExportError),
}

impl fmt::Display for ChatScribeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(e) => write!(f, "Load error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
        }
    }
}

impl std::error::Error for ChatScribeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load(e) => Some(e),
            Self::Export(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Load errors
// ---------------------------------------------------------------------------

/// Errors raised while acquiring an input log file.
#[derive(Debug)]
pub enum LoadError {
    /// The file's declared type (extension) is not plain text.
    /// The UI surfaces this as the fixed "Please upload a .txt file."
    /// message and leaves the current transcript untouched.
    UnsupportedFileType { path: PathBuf },

    /// File content is not valid UTF-8.
    InvalidEncoding {
        path: PathBuf,
        source: std::str::Utf8Error,
    },

    /// I/O error while reading the file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedFileType { path } => {
                write!(f, "'{}' is not a plain-text (.txt) file", path.display())
            }
            Self::InvalidEncoding { path, source } => {
                write!(f, "'{}': invalid UTF-8 encoding: {source}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "'{}': I/O error: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidEncoding { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<LoadError> for ChatScribeError {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}

// ---------------------------------------------------------------------------
// Extraction diagnostics
// ---------------------------------------------------------------------------

/// Per-line extraction diagnostics. These are recovered locally — the
/// offending line is skipped and the count aggregated into the extraction
/// summary — so they never propagate through `ChatScribeError`.
#[derive(Debug)]
pub enum ExtractError {
    /// A line carried the chat-message marker but failed one of the
    /// positional preconditions (name marker, bracketed speaker token,
    /// trailing close tag).
    MalformedChatLine {
        file: PathBuf,
        line_number: u64,
        reason: &'static str,
    },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedChatLine {
                file,
                line_number,
                reason,
            } => write!(f, "'{}' line {line_number}: {reason}", file.display()),
        }
    }
}

impl std::error::Error for ExtractError {}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors raised while writing a transcript to disk.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<ExportError> for ChatScribeError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

/// Convenience type alias for ChatScribe results.
pub type Result<T> = std::result::Result<T, ChatScribeError>;
