//! JSONL file writer for conversation events.
//!
//! Each [`ConversationEvent`] is serialized as a single JSON line with a
//! `type` field and `timestamp`, appended to the file via a buffered writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use steward_application::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use tracing::warn;

/// JSONL conversation logger that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes after every event —
/// the transcript is the audit trail, so a crash must not lose the tail.
pub struct JsonlConversationLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlConversationLogger {
    /// Create a new logger writing to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be created.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create conversation log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match File::create(path) {
            Ok(f) => f,
            Err(e) => {
                warn!(
                    "Could not create conversation log file {}: {}",
                    path.display(),
                    e
                );
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Merge an event's payload with its `type` and a `timestamp`.
///
/// Object payloads get the two fields inserted alongside their own keys;
/// anything else is wrapped under `data`.
fn build_record(event: ConversationEvent, timestamp: String) -> serde_json::Value {
    if let serde_json::Value::Object(mut map) = event.payload {
        map.insert(
            "type".to_string(),
            serde_json::Value::String(event.event_type.to_string()),
        );
        map.insert(
            "timestamp".to_string(),
            serde_json::Value::String(timestamp),
        );
        serde_json::Value::Object(map)
    } else {
        serde_json::json!({
            "type": event.event_type,
            "timestamp": timestamp,
            "data": event.payload,
        })
    }
}

impl ConversationLogger for JsonlConversationLogger {
    fn log(&self, event: ConversationEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        let record = build_record(event, timestamp);

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlConversationLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn writes_one_json_object_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("steward.conversation.jsonl");
        let logger = JsonlConversationLogger::new(&path).unwrap();

        logger.log(ConversationEvent::new(
            "user_message",
            serde_json::json!({ "text": "why is the api pod crashing?" }),
        ));

        logger.log(ConversationEvent::new(
            "tool_call",
            serde_json::json!({
                "tool": "kubectl_logs",
                "args": { "pod": "api-7d4b9c", "tail": 100 }
            }),
        ));

        drop(logger);

        let mut content = String::new();
        File::open(&path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();

        let lines: Vec<&str> = content.trim().lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["type"], "user_message");
        assert_eq!(first["text"], "why is the api pod crashing?");

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["type"], "tool_call");
        assert_eq!(second["tool"], "kubectl_logs");
        assert_eq!(second["args"]["tail"], 100);
    }

    #[test]
    fn every_record_carries_a_utc_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stamped.jsonl");
        let logger = JsonlConversationLogger::new(&path).unwrap();

        logger.log(ConversationEvent::new(
            "history_reset",
            serde_json::json!({ "reason": "tool_use pairing violation" }),
        ));
        drop(logger);

        let mut content = String::new();
        File::open(&path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();

        let record: serde_json::Value = serde_json::from_str(content.trim()).unwrap();
        let stamp = record["timestamp"].as_str().unwrap();
        // RFC 3339 with millisecond precision, e.g. 2026-08-25T14:03:07.123Z
        assert!(stamp.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok());
    }

    #[test]
    fn non_object_payload_is_wrapped_under_data() {
        let record = build_record(
            ConversationEvent::new("note", serde_json::json!("plain string")),
            "2026-08-25T00:00:00.000Z".to_string(),
        );
        assert_eq!(record["type"], "note");
        assert_eq!(record["data"], "plain string");
        assert_eq!(record["timestamp"], "2026-08-25T00:00:00.000Z");
    }

    #[test]
    fn payload_keys_survive_the_merge() {
        let record = build_record(
            ConversationEvent::new(
                "tool_blocked",
                serde_json::json!({ "tool": "run_command", "reason": "dangerous pattern" }),
            ),
            "2026-08-25T00:00:00.000Z".to_string(),
        );
        assert_eq!(record["type"], "tool_blocked");
        assert_eq!(record["tool"], "run_command");
        assert_eq!(record["reason"], "dangerous pattern");
    }

    #[test]
    fn parent_directories_are_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("nested").join("run.jsonl");
        let logger = JsonlConversationLogger::new(&path).unwrap();
        assert_eq!(logger.path(), path);
        assert!(path.exists());
    }
}
