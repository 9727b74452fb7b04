//! Activity log entry written one per line.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single JSONL activity entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// RFC 3339 timestamp with milliseconds (e.g., "2026-10-16T09:30:45.123Z")
    pub ts: String,

    /// trace, debug, info, warn, error
    pub level: String,

    /// Session id the entry belongs to (one per app launch)
    pub session: String,

    /// Module path (e.g., "sketchmentor_core::flow")
    pub target: String,

    pub msg: String,

    /// Structured event fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Value>,

    /// Enclosing span names, outermost first, joined with " > "
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<String>,
}

impl ActivityEntry {
    /// Create an entry stamped with the current time.
    pub fn new(
        level: impl Into<String>,
        session: impl Into<String>,
        target: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        Self {
            ts: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            level: level.into(),
            session: session.into(),
            target: target.into(),
            msg: msg.into(),
            fields: None,
            span: None,
        }
    }

    pub fn with_fields(mut self, fields: Value) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn with_span(mut self, span: impl Into<String>) -> Self {
        self.span = Some(span.into());
        self
    }

    /// Serialize to a single JSON line (no trailing newline).
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

/// Session id derived from the launch time, safe for file names.
pub fn new_session_id() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string()
}
