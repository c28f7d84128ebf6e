// ChatScribe - core/export.rs
//
// Plain-text export of the current transcript.
// Core layer: writes to any Write trait object.

use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Write the transcript string to `writer` exactly as displayed.
///
/// Returns the number of bytes written. The export is byte-for-byte the
/// on-screen transcript; no header, no trailing additions.
pub fn export_transcript<W: Write>(
    transcript: &str,
    mut writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    writer
        .write_all(transcript.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| ExportError::Io {
            path: export_path.to_path_buf(),
            source: e,
        })?;

    Ok(transcript.len())
}
