// ChatScribe - app/load.rs
//
// File acquisition: the single validated path from a user-chosen file to
// a loaded transcript. Gates on the declared file type, reads the full
// content (memory-mapped above a size threshold), and runs the extractor.
//
// Resource notes:
//   - Transient I/O errors are retried with capped backoff.
//   - Large files are memory-mapped so the raw bytes are not duplicated
//     on the heap while being validated as UTF-8.

use crate::core::extract::{self, ExtractConfig};
use crate::core::model::{render_transcript, ChatEntry, ExtractSummary};
use crate::util::constants::{ACCEPTED_EXTENSION, LARGE_FILE_MMAP_THRESHOLD};
use crate::util::error::{LoadError, Result};
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Retry limits for transient I/O errors.
const MAX_RETRIES: u32 = 3;
const RETRY_DELAYS_MS: [u64; 3] = [50, 100, 200];

/// A fully loaded and extracted log file, ready for display.
#[derive(Debug)]
pub struct LoadedTranscript {
    /// The source log file.
    pub source: PathBuf,

    /// Extracted chat entries, in file order.
    pub entries: Vec<ChatEntry>,

    /// The rendered transcript string shown and copied verbatim.
    pub transcript: String,

    /// Extraction statistics for the summary dialog.
    pub summary: ExtractSummary,
}

/// Load `path`, gate its declared type, and extract the chat transcript.
///
/// The extension gate runs before any I/O: a non-`.txt` file is rejected
/// without being opened, and the caller leaves the current transcript
/// untouched.
pub fn load_log_file(path: &Path) -> Result<LoadedTranscript> {
    if !is_plain_text(path) {
        tracing::info!(file = %path.display(), "Rejected non-text file");
        return Err(LoadError::UnsupportedFileType {
            path: path.to_path_buf(),
        }
        .into());
    }

    let content = read_file_content(path)?;

    let started = Instant::now();
    let result = extract::extract_content(&content, path, &ExtractConfig::default());
    let duration = started.elapsed();

    // Diagnostics are recovered locally (line skipped); surface them in the
    // log so a weird transcript can be explained without a debugger.
    for diagnostic in &result.diagnostics {
        tracing::debug!(%diagnostic, "Skipped malformed chat line");
    }

    let transcript = render_transcript(&result.entries);
    let summary = ExtractSummary {
        lines_processed: result.lines_processed,
        entries_extracted: result.entries.len(),
        malformed_lines: result.malformed_lines,
        duration,
    };

    tracing::info!(
        file = %path.display(),
        entries = summary.entries_extracted,
        malformed = summary.malformed_lines,
        lines = summary.lines_processed,
        elapsed_ms = duration.as_millis() as u64,
        "Log file loaded"
    );

    Ok(LoadedTranscript {
        source: path.to_path_buf(),
        entries: result.entries,
        transcript,
        summary,
    })
}

/// The desktop stand-in for the `text/plain` media-type check:
/// the extension must be `.txt` (case-insensitive).
fn is_plain_text(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ACCEPTED_EXTENSION))
}

/// Read the full content of a file as a UTF-8 string.
///
/// Files above `LARGE_FILE_MMAP_THRESHOLD` use `memmap2`, which avoids a
/// second heap copy of the raw bytes. Small files use `fs::read` with
/// transient-error retries.
fn read_file_content(path: &Path) -> std::result::Result<String, LoadError> {
    let size = std::fs::metadata(path)
        .map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?
        .len();

    if size > LARGE_FILE_MMAP_THRESHOLD {
        read_large_file(path)
    } else {
        read_small_file_with_retry(path)
    }
}

/// Read using `memmap2` for large files.
fn read_large_file(path: &Path) -> std::result::Result<String, LoadError> {
    let file = std::fs::File::open(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    // SAFETY: the file is read-only and we do not mutate the map.
    // We accept the documented risk that external modification of the file
    // during the map's lifetime could produce undefined behaviour, which is
    // acceptable for a viewer reading already-written game logs.
    let mmap = unsafe { memmap2::Mmap::map(&file) }.map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    std::str::from_utf8(&mmap)
        .map(|s| s.to_string())
        .map_err(|e| LoadError::InvalidEncoding {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Read a small file with transient-error retries.
fn read_small_file_with_retry(path: &Path) -> std::result::Result<String, LoadError> {
    let mut last_err: Option<io::Error> = None;

    for attempt in 0..MAX_RETRIES {
        match std::fs::read(path) {
            Ok(bytes) => {
                return String::from_utf8(bytes).map_err(|e| LoadError::InvalidEncoding {
                    path: path.to_path_buf(),
                    source: e.utf8_error(),
                })
            }
            Err(e) if is_transient_error(&e) => {
                tracing::debug!(
                    file = %path.display(),
                    attempt = attempt + 1,
                    error = %e,
                    "Transient I/O error, retrying"
                );
                std::thread::sleep(Duration::from_millis(RETRY_DELAYS_MS[attempt as usize]));
                last_err = Some(e);
            }
            Err(e) => {
                return Err(LoadError::Io {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        }
    }

    Err(LoadError::Io {
        path: path.to_path_buf(),
        source: last_err.unwrap_or_else(|| io::Error::other("Unknown read error")),
    })
}

/// Returns true for transient I/O errors that are worth retrying.
fn is_transient_error(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted | io::ErrorKind::TimedOut
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::error::ChatScribeError;
    use tempfile::TempDir;

    #[test]
    fn test_non_txt_extension_is_rejected_without_reading() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("r3dlog.evtx");
        // The file deliberately does not exist: the gate must fire first.
        let err = load_log_file(&path).unwrap_err();
        assert!(matches!(
            err,
            ChatScribeError::Load(LoadError::UnsupportedFileType { .. })
        ));
    }

    #[test]
    fn test_extension_gate_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("R3DLOG.TXT");
        std::fs::write(&path, "no chat here\n").unwrap();
        let loaded = load_log_file(&path).expect("uppercase .TXT should be accepted");
        assert_eq!(loaded.transcript, "");
    }

    #[test]
    fn test_missing_extension_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("r3dlog");
        std::fs::write(&path, "content").unwrap();
        let err = load_log_file(&path).unwrap_err();
        assert!(matches!(
            err,
            ChatScribeError::Load(LoadError::UnsupportedFileType { .. })
        ));
    }

    #[test]
    fn test_load_extracts_transcript() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("r3dlog.txt");
        std::fs::write(
            &path,
            "0.001| ALWAYS| startup\n\
             Chat received valid message: glhf with speaker DisplayName x [One#EUW]</font>\"\n",
        )
        .unwrap();

        let loaded = load_log_file(&path).unwrap();
        assert_eq!(loaded.transcript, "[One#EUW]glhf\n");
        assert_eq!(loaded.summary.entries_extracted, 1);
        assert_eq!(loaded.summary.malformed_lines, 0);
        assert_eq!(loaded.source, path);
    }

    #[test]
    fn test_missing_file_yields_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");
        let err = load_log_file(&path).unwrap_err();
        assert!(matches!(err, ChatScribeError::Load(LoadError::Io { .. })));
    }

    #[test]
    fn test_invalid_utf8_yields_encoding_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("r3dlog.txt");
        std::fs::write(&path, [0x66, 0x6f, 0xff, 0xfe, 0x6f]).unwrap();
        let err = load_log_file(&path).unwrap_err();
        assert!(matches!(
            err,
            ChatScribeError::Load(LoadError::InvalidEncoding { .. })
        ));
    }
}
