//! Confirmation step run after the ledger write.
//!
//! There is no waitlist backend. [`SimulatedLatency`] stands in for the
//! network round trip; a real persistence call implements
//! [`ConfirmationBackend`] and slots in without changing the flow.

use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::future::BoxFuture;
use serde::Serialize;

use crate::draft::{ExperienceLevel, FormDraft};
use crate::error::WaitlistResult;

/// Everything collected for one waitlist signup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaitlistEntry {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub experience_level: Option<ExperienceLevel>,
    pub interests: Vec<String>,
    pub expectations: String,
    pub joined_at: DateTime<Utc>,
}

impl WaitlistEntry {
    pub fn from_draft(user_id: &str, draft: &FormDraft) -> Self {
        Self {
            user_id: user_id.to_string(),
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            email: draft.email.clone(),
            experience_level: draft.experience_level,
            interests: draft.interests.clone(),
            expectations: draft.expectations.clone(),
            joined_at: Utc::now(),
        }
    }
}

/// Confirms a submission after it was recorded locally.
pub trait ConfirmationBackend: Send + Sync {
    fn confirm<'a>(&'a self, entry: &'a WaitlistEntry) -> BoxFuture<'a, WaitlistResult<()>>;
}

/// Placeholder backend: waits a fixed delay, then succeeds.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedLatency {
    delay: Duration,
}

impl SimulatedLatency {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl ConfirmationBackend for SimulatedLatency {
    fn confirm<'a>(&'a self, entry: &'a WaitlistEntry) -> BoxFuture<'a, WaitlistResult<()>> {
        Box::pin(async move {
            tracing::debug!(uid = %entry.user_id, delay_ms = self.delay.as_millis() as u64, "Simulating waitlist backend");
            tokio::time::sleep(self.delay).await;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_copies_draft_fields() {
        let draft = FormDraft {
            first_name: "Alex".into(),
            email: "a@example.com".into(),
            experience_level: Some(ExperienceLevel::Advanced),
            interests: vec!["AI Chatbot".into()],
            ..Default::default()
        };

        let entry = WaitlistEntry::from_draft("uid-1", &draft);
        assert_eq!(entry.user_id, "uid-1");
        assert_eq!(entry.first_name, "Alex");
        assert_eq!(entry.experience_level, Some(ExperienceLevel::Advanced));

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["experience_level"], "advanced");
        assert_eq!(json["interests"][0], "AI Chatbot");
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_latency_waits_the_configured_delay() {
        let backend = SimulatedLatency::new(Duration::from_millis(1000));
        let entry = WaitlistEntry::from_draft("uid", &FormDraft::default());

        let start = tokio::time::Instant::now();
        backend.confirm(&entry).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }
}
