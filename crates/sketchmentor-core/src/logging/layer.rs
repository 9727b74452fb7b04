//! Tracing layer writing events to the session's JSONL file, and the
//! builder that installs it alongside console output.

use std::fmt::Write as FmtWrite;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

use super::entry::{new_session_id, ActivityEntry};
use super::writer::SessionLogWriter;

/// Filter used when `RUST_LOG` is unset and no filter was given.
pub const DEFAULT_FILTER: &str = "sketchmentor=info,sketchmentor_core=info";

/// A tracing Layer that appends every event to a JSONL file.
pub struct JsonlLayer {
    writer: Arc<SessionLogWriter>,
}

impl JsonlLayer {
    pub fn new(logs_dir: impl AsRef<Path>, session: impl Into<String>) -> std::io::Result<Self> {
        let writer = SessionLogWriter::new(logs_dir, session)?;
        Ok(Self {
            writer: Arc::new(writer),
        })
    }

    pub fn log_path(&self) -> &Path {
        self.writer.path()
    }
}

impl<S> Layer<S> for JsonlLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut visitor = JsonVisitor::default();
        event.record(&mut visitor);

        let mut entry = ActivityEntry::new(
            metadata.level().as_str().to_lowercase(),
            self.writer.session(),
            metadata.target(),
            visitor.message.unwrap_or_default(),
        );

        if !visitor.fields.is_empty() {
            entry = entry.with_fields(serde_json::Value::Object(visitor.fields));
        }

        if let Some(scope) = ctx.event_scope(event) {
            let spans: Vec<&str> = scope.from_root().map(|span| span.name()).collect();
            if !spans.is_empty() {
                entry = entry.with_span(spans.join(" > "));
            }
        }

        // Logging must never take the app down
        let _ = self.writer.write(&entry);
    }
}

/// Collects the message and fields of an event.
#[derive(Default)]
struct JsonVisitor {
    message: Option<String>,
    fields: serde_json::Map<String, serde_json::Value>,
}

impl JsonVisitor {
    fn insert(&mut self, field: &Field, value: serde_json::Value) {
        self.fields.insert(field.name().to_string(), value);
    }
}

impl Visit for JsonVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let mut buf = String::new();
        let _ = write!(&mut buf, "{:?}", value);

        if field.name() == "message" {
            self.message = Some(buf);
        } else {
            self.insert(field, serde_json::Value::String(buf));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.insert(field, serde_json::Value::String(value.to_string()));
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, serde_json::Value::Number(value.into()));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, serde_json::Value::Number(value.into()));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, serde_json::Value::Bool(value));
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.insert(field, serde_json::Value::String(value.to_string()));
    }
}

/// Builder for the global subscriber: env filter, console, JSONL file.
pub struct LoggingBuilder {
    logs_dir: Option<PathBuf>,
    session: String,
    console_output: bool,
    env_filter: Option<String>,
}

impl Default for LoggingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggingBuilder {
    pub fn new() -> Self {
        Self {
            logs_dir: None,
            session: new_session_id(),
            console_output: true,
            env_filter: None,
        }
    }

    /// Also write JSONL activity logs under `logs_dir`.
    pub fn with_logs_dir(mut self, logs_dir: impl Into<PathBuf>) -> Self {
        self.logs_dir = Some(logs_dir.into());
        self
    }

    /// Set the filter (e.g., "sketchmentor_core=debug"). `RUST_LOG` wins
    /// when set.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    pub fn no_console(mut self) -> Self {
        self.console_output = false;
        self
    }

    /// Build the JSONL layer on its own (for manual composition).
    pub fn build_layer(&self) -> std::io::Result<Option<JsonlLayer>> {
        self.logs_dir
            .as_ref()
            .map(|dir| JsonlLayer::new(dir, self.session.clone()))
            .transpose()
    }

    /// Install the global subscriber.
    ///
    /// Returns the JSONL file path when file logging is enabled. Installing
    /// twice keeps the first subscriber.
    pub fn init(self) -> std::io::Result<Option<PathBuf>> {
        let jsonl = self.build_layer()?;
        let log_path = jsonl.as_ref().map(|layer| layer.log_path().to_path_buf());

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(self.env_filter.as_deref().unwrap_or(DEFAULT_FILTER))
        });
        let console = self.console_output.then(|| tracing_subscriber::fmt::layer());

        if let Err(e) = tracing_subscriber::registry()
            .with(filter)
            .with(console)
            .with(jsonl)
            .try_init()
        {
            tracing::warn!(error = %e, "Logging already initialized");
        }

        Ok(log_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_jsonl_layer_captures_events() {
        let temp = TempDir::new().unwrap();
        let layer = JsonlLayer::new(temp.path(), "test").unwrap();
        let log_path = layer.log_path().to_path_buf();

        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("Waitlist opened");
            let span = tracing::info_span!("submit");
            let _enter = span.enter();
            tracing::warn!(count = 2, ok = false, "Ledger anomaly");
        });

        let content = std::fs::read_to_string(&log_path).unwrap();
        let lines: Vec<_> = content.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Waitlist opened"));
        assert!(lines[0].contains("\"level\":\"info\""));
        assert!(lines[1].contains("\"count\":2"));
        assert!(lines[1].contains("\"ok\":false"));
        assert!(lines[1].contains("\"span\":\"submit\""));
    }

    #[test]
    fn builder_without_logs_dir_has_no_file_layer() {
        let builder = LoggingBuilder::new().no_console();
        assert!(builder.build_layer().unwrap().is_none());
    }
}
