//! Local registration ledger.
//!
//! Records which verified emails have already joined the waitlist. The
//! ledger is a JSON list of strings stored under a single key; it is the
//! only duplicate-prevention mechanism the page has.
//!
//! Reads fail soft: an unreadable or malformed document is treated as
//! "nobody registered yet" and logged. A visitor who wipes their storage can
//! therefore join again; there is no authoritative backend to check against.

use std::sync::Arc;

use crate::error::{WaitlistError, WaitlistResult};
use crate::storage::KeyValueStore;

/// Set of registered emails persisted in local storage.
#[derive(Clone)]
pub struct RegistrationLedger {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl RegistrationLedger {
    /// Create a ledger reading and writing `key` in `store`.
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Read the ledger document.
    ///
    /// A missing key is an empty ledger. A value that is not a JSON list of
    /// strings is a `Serialization` error.
    pub fn entries(&self) -> WaitlistResult<Vec<String>> {
        match self.store.get_item(&self.key)? {
            Some(raw) => serde_json::from_str::<Vec<String>>(&raw)
                .map_err(|e| WaitlistError::Serialization(e.to_string())),
            None => Ok(Vec::new()),
        }
    }

    /// Whether `email` has completed registration.
    ///
    /// Never fails: storage or parse errors are logged and reported as
    /// `false`.
    pub fn is_registered(&self, email: &str) -> bool {
        if email.is_empty() {
            return false;
        }

        match self.entries() {
            Ok(emails) => emails.iter().any(|e| e == email),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Ledger unreadable, treating as not registered");
                false
            }
        }
    }

    /// Append `email` to the ledger if it is not already present.
    ///
    /// Returns `Ok(true)` when the document was written, `Ok(false)` for the
    /// idempotent cases (empty email, already recorded).
    pub fn record(&self, email: &str) -> WaitlistResult<bool> {
        if email.is_empty() {
            return Ok(false);
        }

        let mut emails = self.entries()?;
        if emails.iter().any(|e| e == email) {
            return Ok(false);
        }

        emails.push(email.to_string());
        let raw =
            serde_json::to_string(&emails).map_err(|e| WaitlistError::Serialization(e.to_string()))?;
        self.store.set_item(&self.key, &raw)?;

        tracing::info!(count = emails.len(), "Recorded waitlist registration");
        Ok(true)
    }
}
