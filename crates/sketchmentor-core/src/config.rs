//! Runtime configuration for a waitlist session.

use std::path::PathBuf;
use std::time::Duration;

/// Local storage key holding the JSON list of registered emails.
pub const DEFAULT_STORAGE_KEY: &str = "registeredEmails";

/// Artificial latency before a submission is confirmed.
pub const DEFAULT_CONFIRMATION_DELAY: Duration = Duration::from_millis(1000);

/// File name of the desktop key-value store inside the data directory.
pub const STORE_FILE_NAME: &str = "sketchmentor.redb";

/// Configuration shared by the ledger, the confirmation step and logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistConfig {
    /// Key under which the ledger document is stored
    pub storage_key: String,
    /// How long the simulated backend waits before confirming a submission
    pub confirmation_delay: Duration,
    /// Directory holding the key-value store and the logs
    pub data_dir: PathBuf,
}

impl Default for WaitlistConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            confirmation_delay: DEFAULT_CONFIRMATION_DELAY,
            data_dir: default_data_dir(),
        }
    }
}

impl WaitlistConfig {
    /// Override the data directory.
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Override the simulated confirmation delay.
    pub fn with_confirmation_delay(mut self, delay: Duration) -> Self {
        self.confirmation_delay = delay;
        self
    }

    /// Override the ledger storage key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Path of the redb file backing local storage on desktop.
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(STORE_FILE_NAME)
    }

    /// Directory for JSONL activity logs.
    pub fn logs_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }
}

/// Platform data directory, falling back to the working directory.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sketchmentor")
}
