// ChatScribe - app/session.rs
//
// Session persistence: remember the last-opened directory between
// application restarts so the file dialog reopens where the user left off.
//
// Design principles:
// - The session is saved atomically (write→temp, rename→final) so a crash
//   during save never corrupts the previous good session.
// - Load errors are silently discarded (corrupt or incompatible sessions
//   just start the app fresh rather than surfacing errors to the user).
// - The data directory is created on first save; no user action required.
// - Transcripts are NOT persisted — every launch starts with an empty
//   display and the user drops a log file again.

use crate::util::constants::SESSION_FILE_NAME;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Version stamp for forward-compatibility checks.
///
/// Increment this constant whenever `SessionData` gains or removes fields
/// in a breaking way. Version mismatches silently discard the session.
pub const SESSION_VERSION: u32 = 1;

/// Complete persistent session snapshot.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionData {
    /// Schema version — must equal `SESSION_VERSION` to be accepted.
    pub version: u32,

    /// Directory of the last successfully loaded log file.
    #[serde(default)]
    pub last_open_dir: Option<PathBuf>,
}

/// Resolve the session file path from the platform data directory.
pub fn session_path(data_dir: &Path) -> PathBuf {
    data_dir.join(SESSION_FILE_NAME)
}

/// Save `data` to `path` atomically (write temp → rename).
///
/// Creates all parent directories as needed. Returns a descriptive error
/// string suitable for a tracing warn! call; the caller decides whether to
/// surface it to the user (typically it is logged and ignored).
pub fn save(data: &SessionData, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            format!(
                "cannot create session directory '{}': {e}",
                parent.display()
            )
        })?;
    }

    let json = serde_json::to_string_pretty(data)
        .map_err(|e| format!("failed to serialise session: {e}"))?;

    // Atomic write: write to a sibling temp file then rename.
    // A crash between write and rename loses the new session but never
    // corrupts the previous one (rename is atomic on all supported platforms).
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json.as_bytes())
        .map_err(|e| format!("failed to write session temp file '{}': {e}", tmp.display()))?;

    std::fs::rename(&tmp, path).map_err(|e| {
        // Clean up the temp file on failure; ignore any secondary error.
        let _ = std::fs::remove_file(&tmp);
        format!("failed to finalise session file '{}': {e}", path.display())
    })?;

    tracing::debug!(path = %path.display(), "Session saved");
    Ok(())
}

/// Load and validate a `SessionData` from `path`.
///
/// Returns `None` on any error (file not found, JSON parse failure,
/// version mismatch). The caller should treat `None` as "start fresh".
pub fn load(path: &Path) -> Option<SessionData> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| {
            // Distinguish "file not found" (normal first run) from other errors.
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(path = %path.display(), error = %e, "Cannot read session file");
            }
        })
        .ok()?;

    let data: SessionData = serde_json::from_str(&content)
        .map_err(|e| {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Session file is malformed — starting fresh"
            );
        })
        .ok()?;

    if data.version != SESSION_VERSION {
        tracing::warn!(
            found = data.version,
            expected = SESSION_VERSION,
            "Session file version mismatch — starting fresh"
        );
        return None;
    }

    tracing::debug!(path = %path.display(), "Session file loaded");
    Some(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_data() -> SessionData {
        SessionData {
            version: SESSION_VERSION,
            last_open_dir: Some(PathBuf::from("/games/league/logs")),
        }
    }

    /// Save and load must round-trip all fields accurately.
    #[test]
    fn test_session_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        let original = sample_data();

        save(&original, &path).expect("save should succeed");
        let loaded = load(&path).expect("load should return Some after valid save");

        assert_eq!(loaded.version, SESSION_VERSION);
        assert_eq!(loaded.last_open_dir, original.last_open_dir);
    }

    /// Load must return None when the file does not exist (first run).
    #[test]
    fn test_session_load_missing_file_returns_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nonexistent.json");
        assert!(load(&path).is_none());
    }

    /// Load must return None when the JSON is malformed rather than panicking.
    #[test]
    fn test_session_load_malformed_json_returns_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, b"not valid json {{{{").unwrap();
        assert!(load(&path).is_none());
    }

    /// Load must return None when the version field is wrong.
    #[test]
    fn test_session_load_wrong_version_returns_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        let mut data = sample_data();
        data.version = 99;
        save(&data, &path).unwrap();
        assert!(load(&path).is_none());
    }

    /// A leftover temp file from a crashed save must not corrupt a new save.
    #[test]
    fn test_session_save_atomic_does_not_corrupt_original() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");

        save(&sample_data(), &path).unwrap();

        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, b"garbage").unwrap();

        let mut updated = sample_data();
        updated.last_open_dir = Some(PathBuf::from("/elsewhere"));
        save(&updated, &path).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.last_open_dir, Some(PathBuf::from("/elsewhere")));
    }
}
