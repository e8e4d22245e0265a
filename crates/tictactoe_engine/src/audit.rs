//! Append-only audit trail and the sinks it is forwarded to.

use crate::types::Board;
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::{info, instrument, warn};

/// Kind of event an audit entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AuditAction {
    /// A move was applied.
    Move,
    /// The round was reset.
    Reset,
    /// A move was rejected.
    Error,
}

/// Immutable record of one state change or rejected attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct AuditEntry {
    /// When the entry was created (UTC).
    timestamp: DateTime<Utc>,
    /// What happened.
    action: AuditAction,
    /// Board before the operation.
    board_before: Board,
    /// Board after the operation. Equal to `board_before` for rejections.
    board_after: Board,
    /// Cell index involved, when there was a numeric one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    index: Option<usize>,
    /// Human-readable message for rejections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    /// Why a reset happened.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl AuditEntry {
    fn new(action: AuditAction, board_before: Board, board_after: Board) -> Self {
        Self {
            timestamp: Utc::now(),
            action,
            board_before,
            board_after,
            index: None,
            message: None,
            reason: None,
        }
    }

    /// Entry for an applied move.
    pub fn moved(board_before: Board, board_after: Board, index: usize) -> Self {
        Self {
            index: Some(index),
            ..Self::new(AuditAction::Move, board_before, board_after)
        }
    }

    /// Entry for a round reset.
    pub fn reset(board_before: Board, board_after: Board, reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
            ..Self::new(AuditAction::Reset, board_before, board_after)
        }
    }

    /// Entry for a rejected move. The board is recorded unchanged on both sides.
    pub fn rejected(board: Board, index: Option<usize>, message: impl Into<String>) -> Self {
        Self {
            index,
            message: Some(message.into()),
            ..Self::new(AuditAction::Error, board, board)
        }
    }

    /// Renders the entry as a single line of JSON.
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Destination audit entries are forwarded to as they are recorded.
///
/// Forwarding is fire-and-forget: implementations swallow their own
/// failures, and the engine keeps its in-memory log either way.
pub trait AuditSink {
    /// Forwards one entry.
    fn record(&mut self, entry: &AuditEntry);
}

impl<S: AuditSink + ?Sized> AuditSink for Box<S> {
    fn record(&mut self, entry: &AuditEntry) {
        (**self).record(entry);
    }
}

/// Emits each entry as an INFO event on the `audit` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl AuditSink for TracingSink {
    fn record(&mut self, entry: &AuditEntry) {
        match entry.to_json_line() {
            Ok(line) => info!(target: "audit", action = %entry.action, "{}", line),
            Err(e) => warn!(error = %e, "Failed to render audit entry"),
        }
    }
}

/// Writes one JSON object per line to any writer.
#[derive(Debug)]
pub struct JsonLinesSink<W> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_entry(&mut self, entry: &AuditEntry) -> std::io::Result<()> {
        serde_json::to_writer(&mut self.writer, entry)?;
        writeln!(self.writer)?;
        self.writer.flush()
    }
}

impl<W: Write> AuditSink for JsonLinesSink<W> {
    #[instrument(skip(self, entry), fields(action = %entry.action))]
    fn record(&mut self, entry: &AuditEntry) {
        if let Err(e) = self.write_entry(entry) {
            warn!(error = %e, "Failed to forward audit entry");
        }
    }
}

/// Keeps forwarded entries in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    entries: Vec<AuditEntry>,
}

impl RecordingSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries forwarded so far, oldest first.
    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }
}

impl AuditSink for RecordingSink {
    fn record(&mut self, entry: &AuditEntry) {
        self.entries.push(entry.clone());
    }
}

/// Discards every entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl AuditSink for NullSink {
    fn record(&mut self, _entry: &AuditEntry) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_omits_absent_fields() {
        let before = Board::new();
        let after: Board = "X________".parse().unwrap();
        let line = AuditEntry::moved(before, after, 0).to_json_line().unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();

        assert_eq!(value["action"], "move");
        assert_eq!(value["board_before"], "_________");
        assert_eq!(value["board_after"], "X________");
        assert_eq!(value["index"], 0);
        assert!(value.get("message").is_none());
        assert!(value.get("reason").is_none());
    }

    #[test]
    fn test_timestamp_is_iso8601() {
        let line = AuditEntry::reset(Board::new(), Board::new(), "User initiated reset")
            .to_json_line()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        let stamp = value["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(stamp).is_ok());
        assert_eq!(value["reason"], "User initiated reset");
    }

    #[test]
    fn test_json_lines_sink_writes_one_line_per_entry() {
        let mut sink = JsonLinesSink::new(Vec::new());
        sink.record(&AuditEntry::rejected(Board::new(), Some(9), "Invalid cell index"));
        sink.record(&AuditEntry::reset(Board::new(), Board::new(), "User initiated reset"));

        let text = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: AuditEntry = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(*first.action(), AuditAction::Error);
        assert_eq!(first.message().as_deref(), Some("Invalid cell index"));
    }

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::other("closed"))
        }
    }

    #[test]
    fn test_json_lines_sink_swallows_write_errors() {
        let mut sink = JsonLinesSink::new(BrokenWriter);
        sink.record(&AuditEntry::rejected(Board::new(), None, "Invalid cell index"));
    }
}
