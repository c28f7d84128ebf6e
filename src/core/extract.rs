// ChatScribe - core/extract.rs
//
// Chat-line extraction from raw client log content.
// Core layer: accepts a string, never touches the filesystem.
//
// A relevant log line carries, in order: the chat-message marker, the
// message body, the speaker-name marker, free-form speaker metadata, and
// finally a bracketed display-name/tag token closed by a fixed `</font>`
// tag plus exactly one trailing character. Everything is captured by a
// single compiled regex with named groups; a candidate line that fails
// any positional precondition is skipped and recorded as a
// MalformedChatLine diagnostic rather than sliced blindly.

use crate::core::model::ChatEntry;
use crate::util::constants::{
    CHAT_MESSAGE_MARKER, MAX_MALFORMED_DIAGNOSTICS, SPEAKER_CLOSE_TAG, SPEAKER_NAME_MARKER,
};
use crate::util::error::ExtractError;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Configuration for extraction operations.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Cap on retained per-line diagnostics (the malformed count is not capped).
    pub max_diagnostics: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            max_diagnostics: MAX_MALFORMED_DIAGNOSTICS,
        }
    }
}

/// Result of extracting chat lines from a single log file's content.
#[derive(Debug, Default)]
pub struct ExtractResult {
    /// Extracted entries, in source-file order.
    pub entries: Vec<ChatEntry>,

    /// Malformed-line diagnostics (capped at `ExtractConfig::max_diagnostics`).
    pub diagnostics: Vec<ExtractError>,

    /// Total lines scanned.
    pub lines_processed: u64,

    /// Total candidate lines skipped as malformed (not capped).
    pub malformed_lines: u64,
}

/// The compiled chat-line pattern.
///
/// Anchoring decisions, mirroring the client log layout:
///   - `message` is lazy, so it ends at the *first* speaker-name marker;
///   - the single space before the name marker belongs to the marker
///     boundary, so messages carry no trailing space;
///   - `speaker` starts at the *last* `[` (the greedy `.*` in front of it
///     cannot be shortened without breaking the `[^\[]*` body);
///   - the close tag must be followed by exactly one character at end of
///     line (a closing quote, or `\r` when the log uses CRLF endings).
fn chat_line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let pattern = format!(
            "{msg}(?P<message>.*?) {name}.*(?P<speaker>\\[[^\\[]*){close}.$",
            msg = regex::escape(CHAT_MESSAGE_MARKER),
            name = regex::escape(SPEAKER_NAME_MARKER),
            close = regex::escape(SPEAKER_CLOSE_TAG),
        );
        // The pattern is built from fixed literals and covered by the unit
        // tests below, so a compile failure is a programming error.
        Regex::new(&pattern).expect("chat_line_regex: invalid pattern")
    })
}

/// Extract all chat entries from `content`.
///
/// Lines are split on `\n` (a trailing `\r` is treated as the one
/// permitted character after the close tag). Lines without the
/// chat-message marker contribute nothing; candidate lines that fail the
/// full pattern are skipped with a diagnostic.
///
/// # Arguments
/// * `content` - Full file content (the app layer handles reading)
/// * `source` - Path to the source file (for diagnostics)
/// * `config` - Extraction limits
pub fn extract_content(content: &str, source: &Path, config: &ExtractConfig) -> ExtractResult {
    let mut result = ExtractResult::default();

    if content.is_empty() {
        return result;
    }

    for (line_idx, line) in content.split('\n').enumerate() {
        result.lines_processed += 1;
        let line_number = (line_idx as u64) + 1;

        // Cheap containment test first; the regex only runs on candidates.
        if !line.contains(CHAT_MESSAGE_MARKER) {
            continue;
        }

        match chat_line_regex().captures(line) {
            Some(caps) => {
                result.entries.push(ChatEntry {
                    line_number,
                    speaker: caps["speaker"].to_string(),
                    message: caps["message"].to_string(),
                });
            }
            None => {
                result.malformed_lines += 1;
                let reason = malformed_reason(line);
                if result.diagnostics.len() < config.max_diagnostics {
                    result.diagnostics.push(ExtractError::MalformedChatLine {
                        file: source.to_path_buf(),
                        line_number,
                        reason,
                    });
                }
            }
        }
    }

    tracing::debug!(
        file = %source.display(),
        entries = result.entries.len(),
        malformed = result.malformed_lines,
        lines = result.lines_processed,
        "Extraction complete"
    );

    result
}

/// Classify why a candidate line failed the full pattern.
///
/// Checks the positional preconditions in the order the extractor needs
/// them, so the reported reason names the first missing piece.
fn malformed_reason(line: &str) -> &'static str {
    let Some(name_pos) = line.find(SPEAKER_NAME_MARKER) else {
        return "speaker name marker missing";
    };
    let tail = &line[name_pos + SPEAKER_NAME_MARKER.len()..];
    let Some(bracket_pos) = tail.rfind('[') else {
        return "bracketed speaker token missing";
    };
    let token_tail = &tail[bracket_pos..];
    match token_tail.rfind(SPEAKER_CLOSE_TAG) {
        None => "speaker close tag missing",
        Some(close_pos) => {
            let after = &token_tail[close_pos + SPEAKER_CLOSE_TAG.len()..];
            match after.chars().count() {
                0 => "missing trailing character after speaker close tag",
                1 => "chat line markers out of order",
                _ => "trailing content after speaker close tag",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::render_transcript;
    use std::path::PathBuf;

    fn extract(content: &str) -> ExtractResult {
        extract_content(content, &PathBuf::from("r3dlog.txt"), &ExtractConfig::default())
    }

    /// A realistic well-formed chat line from the client log.
    fn chat_line(message: &str, speaker_tag: &str) -> String {
        format!(
            "12.345| UNKNOWN| Chat received valid message: {message} with speaker \
             DisplayName SummonerOne, slot 2 <font color=\"#FFFFFF\">{speaker_tag}</font>\"",
        )
    }

    #[test]
    fn test_well_formed_line_yields_tag_then_message() {
        let content =
            "noise Chat received valid message: HELLO with speaker DisplayName xx [TAG]</font>X";
        let result = extract(content);
        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.entries[0].speaker, "[TAG]");
        assert_eq!(result.entries[0].message, "HELLO");
        assert_eq!(render_transcript(&result.entries), "[TAG]HELLO\n");
    }

    #[test]
    fn test_non_candidate_lines_contribute_nothing() {
        let content = "0.001| ALWAYS| Logging started\n\
                       0.002| OKAY| Riot Client connected\n";
        let result = extract(content);
        assert!(result.entries.is_empty());
        assert_eq!(result.malformed_lines, 0);
        assert_eq!(result.lines_processed, 3); // trailing newline yields an empty final line
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let result = extract("");
        assert!(result.entries.is_empty());
        assert!(result.diagnostics.is_empty());
        assert_eq!(result.lines_processed, 0);
        assert_eq!(render_transcript(&result.entries), "");
    }

    #[test]
    fn test_order_preserved_across_noise() {
        let content = format!(
            "0.001| ALWAYS| startup\n{}\nsome unrelated line\n{}\n{}",
            chat_line("first", "[Alpha#NA1]"),
            chat_line("second", "[Beta#NA1]"),
            chat_line("third", "[Alpha#NA1]"),
        );
        let result = extract(&content);
        let transcript = render_transcript(&result.entries);
        assert_eq!(
            transcript,
            "[Alpha#NA1]first\n[Beta#NA1]second\n[Alpha#NA1]third\n"
        );
    }

    #[test]
    fn test_speaker_starts_at_last_bracket() {
        // The speaker metadata itself contains an earlier bracket; only the
        // last one opens the display-name token.
        let content = "Chat received valid message: gg with speaker DisplayName \
                       A [ignored] more <font>[Real#EUW]</font>\"";
        let result = extract(content);
        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.entries[0].speaker, "[Real#EUW]");
    }

    #[test]
    fn test_message_ends_at_first_name_marker() {
        // A message body that quotes the name marker text: the first
        // occurrence terminates the message.
        let content = "Chat received valid message: say with speaker DisplayName x \
                       with speaker DisplayName real [T#1]</font>\"";
        let result = extract(content);
        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.entries[0].message, "say");
    }

    #[test]
    fn test_empty_message_is_extracted() {
        let content =
            "Chat received valid message:  with speaker DisplayName xx [T#1]</font>\"";
        let result = extract(content);
        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.entries[0].message, "");
        assert_eq!(render_transcript(&result.entries), "[T#1]\n");
    }

    #[test]
    fn test_crlf_line_endings_are_tolerated() {
        // With CRLF logs the `\r` left after splitting on `\n` is the one
        // permitted character after the close tag.
        let content = "Chat received valid message: hi with speaker DisplayName x [A#1]</font>\r\n\
                       Chat received valid message: yo with speaker DisplayName y [B#2]</font>\r\n";
        let result = extract(content);
        assert_eq!(result.entries.len(), 2);
        assert_eq!(render_transcript(&result.entries), "[A#1]hi\n[B#2]yo\n");
    }

    // -------------------------------------------------------------------------
    // Malformed candidates: skipped with a diagnostic, never sliced blindly
    // -------------------------------------------------------------------------

    #[test]
    fn test_missing_name_marker_is_skipped() {
        let content = "Chat received valid message: orphaned line with no speaker";
        let result = extract(content);
        assert!(result.entries.is_empty());
        assert_eq!(result.malformed_lines, 1);
        assert!(matches!(
            result.diagnostics[0],
            ExtractError::MalformedChatLine {
                reason: "speaker name marker missing",
                ..
            }
        ));
    }

    #[test]
    fn test_missing_bracket_is_skipped() {
        let content =
            "Chat received valid message: hi with speaker DisplayName NoToken</font>\"";
        let result = extract(content);
        assert!(result.entries.is_empty());
        assert!(matches!(
            result.diagnostics[0],
            ExtractError::MalformedChatLine {
                reason: "bracketed speaker token missing",
                ..
            }
        ));
    }

    #[test]
    fn test_missing_close_tag_is_skipped() {
        let content = "Chat received valid message: hi with speaker DisplayName xx [T#1]";
        let result = extract(content);
        assert!(result.entries.is_empty());
        assert!(matches!(
            result.diagnostics[0],
            ExtractError::MalformedChatLine {
                reason: "speaker close tag missing",
                ..
            }
        ));
    }

    #[test]
    fn test_close_tag_at_line_end_without_trailing_char_is_skipped() {
        let content = "Chat received valid message: hi with speaker DisplayName xx [T#1]</font>";
        let result = extract(content);
        assert!(result.entries.is_empty());
        assert!(matches!(
            result.diagnostics[0],
            ExtractError::MalformedChatLine {
                reason: "missing trailing character after speaker close tag",
                ..
            }
        ));
    }

    #[test]
    fn test_trailing_content_after_close_tag_is_skipped() {
        let content =
            "Chat received valid message: hi with speaker DisplayName xx [T#1]</font>extra";
        let result = extract(content);
        assert!(result.entries.is_empty());
        assert!(matches!(
            result.diagnostics[0],
            ExtractError::MalformedChatLine {
                reason: "trailing content after speaker close tag",
                ..
            }
        ));
    }

    #[test]
    fn test_diagnostics_capped_but_count_continues() {
        let bad = "Chat received valid message: orphan\n".repeat(5);
        let config = ExtractConfig { max_diagnostics: 2 };
        let result = extract_content(&bad, &PathBuf::from("r3dlog.txt"), &config);
        assert_eq!(result.diagnostics.len(), 2, "diagnostic records are capped");
        assert_eq!(result.malformed_lines, 5, "the total count is not");
    }

    #[test]
    fn test_line_numbers_are_one_based_file_positions() {
        let content = format!("noise\n\n{}", chat_line("hey", "[A#1]"));
        let result = extract(&content);
        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.entries[0].line_number, 3);
    }
}
