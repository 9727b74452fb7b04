//! Waitlist flow controller.
//!
//! A synchronous state machine over two independent axes:
//!
//! ```text
//! status:  Idle ──submit──▶ Submitting ──confirmed──▶ Success
//!           │ ▲                 │
//!           │ └──open / ok──┐   └──duplicate──▶ AlreadyJoined
//!           ▼               │
//!          Error ◀──auth failure / not signed in / confirm failed
//!
//! step:    Auth ──identity present──▶ Details
//! ```
//!
//! `Success` and `AlreadyJoined` are terminal: the join action stays
//! disabled and the modal only shows the outcome view. Every submit is
//! rejected unless the status is exactly `Idle`.
//!
//! The controller never awaits. Async work (the sign-in popup, the
//! confirmation delay) is split into a `begin_*` call that decides what to
//! do and a `finish_*` call that applies the outcome; see
//! [`WaitlistSession`](crate::session::WaitlistSession).

use std::fmt;

use crate::draft::FormDraft;
use crate::error::{WaitlistError, WaitlistResult};
use crate::identity::Identity;
use crate::ledger::RegistrationLedger;
use crate::submission::WaitlistEntry;

pub const MSG_ALREADY_JOINED: &str = "You have already joined the waitlist!";
pub const MSG_JOINED: &str = "Successfully joined the waitlist!";
pub const MSG_SIGN_IN_CANCELLED: &str = "Sign-in cancelled.";
pub const MSG_SIGN_IN_FAILED: &str = "Failed to sign in with Google. Please try again.";
pub const MSG_NOT_AUTHENTICATED: &str = "Authentication error. Please sign in again.";
pub const MSG_SUBMISSION_FAILED: &str = "Failed to join waitlist. Please try again.";

/// Submission status; the single source of truth for UI gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    AlreadyJoined,
    Error,
}

impl SubmissionStatus {
    /// No further join action is possible from this status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionStatus::Success | SubmissionStatus::AlreadyJoined)
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionStatus::Idle => write!(f, "idle"),
            SubmissionStatus::Submitting => write!(f, "submitting"),
            SubmissionStatus::Success => write!(f, "success"),
            SubmissionStatus::AlreadyJoined => write!(f, "already_joined"),
            SubmissionStatus::Error => write!(f, "error"),
        }
    }
}

/// Which step of the modal is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStep {
    #[default]
    Auth,
    Details,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient notification for the visitor (a toast).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Terminal outcome shown in place of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Joined,
    AlreadyJoined,
}

/// Read-only view of the controller for the presentation layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowSnapshot {
    pub status: SubmissionStatus,
    pub step: FormStep,
    pub modal_open: bool,
    pub draft: FormDraft,
    pub identity: Option<Identity>,
    /// The provider failed the last sign-in (a cancel does not count)
    pub sign_in_failed: bool,
}

impl FlowSnapshot {
    pub fn is_joined(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// Label of every join button on the page.
    pub fn join_label(&self) -> &'static str {
        if self.is_joined() {
            "Successfully Joined!"
        } else {
            "Join Waitlist"
        }
    }

    /// Outcome view to render instead of a step, if any.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            SubmissionStatus::Success => Some(Outcome::Joined),
            SubmissionStatus::AlreadyJoined => Some(Outcome::AlreadyJoined),
            _ => None,
        }
    }
}

/// Decision taken when the visitor asks to sign in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInStart {
    /// Run the identity provider's interactive flow, then `finish_sign_in`.
    Prompt,
    /// Resolved locally; nothing to await.
    Handled,
}

/// A submission that passed the guard, is recorded locally and awaits
/// confirmation.
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    entry: WaitlistEntry,
}

impl PendingSubmission {
    pub fn entry(&self) -> &WaitlistEntry {
        &self.entry
    }
}

/// The waitlist state machine.
pub struct WaitlistFlow {
    ledger: RegistrationLedger,
    identity: Option<Identity>,
    status: SubmissionStatus,
    step: FormStep,
    modal_open: bool,
    draft: FormDraft,
    sign_in_failed: bool,
    notices: Vec<Notice>,
}

impl WaitlistFlow {
    pub fn new(ledger: RegistrationLedger) -> Self {
        Self {
            ledger,
            identity: None,
            status: SubmissionStatus::Idle,
            step: FormStep::Auth,
            modal_open: false,
            draft: FormDraft::default(),
            sign_in_failed: false,
            notices: Vec::new(),
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn step(&self) -> FormStep {
        self.step
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn ledger(&self) -> &RegistrationLedger {
        &self.ledger
    }

    pub fn snapshot(&self) -> FlowSnapshot {
        FlowSnapshot {
            status: self.status,
            step: self.step,
            modal_open: self.modal_open,
            draft: self.draft.clone(),
            identity: self.identity.clone(),
            sign_in_failed: self.sign_in_failed,
        }
    }

    /// Drain queued notices in the order they were raised.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    fn identity_email(&self) -> Option<String> {
        self.identity
            .as_ref()
            .and_then(|i| i.email())
            .map(str::to_string)
    }

    fn identity_registered(&self) -> bool {
        self.identity_email()
            .map(|email| self.ledger.is_registered(&email))
            .unwrap_or(false)
    }

    fn set_status(&mut self, status: SubmissionStatus) {
        if self.status != status {
            tracing::info!(from = %self.status, to = %status, "Waitlist status changed");
            self.status = status;
        }
        if status != SubmissionStatus::Error {
            self.sign_in_failed = false;
        }
    }

    /// Enter `Error` and raise the notice matching `error`.
    fn fail(&mut self, error: WaitlistError) {
        let message = match &error {
            WaitlistError::AuthCancelled => MSG_SIGN_IN_CANCELLED,
            WaitlistError::NotAuthenticated => MSG_NOT_AUTHENTICATED,
            e if e.is_auth() => MSG_SIGN_IN_FAILED,
            _ => MSG_SUBMISSION_FAILED,
        };
        if matches!(error, WaitlistError::AuthCancelled) {
            tracing::info!("Sign-in cancelled by visitor");
        } else {
            tracing::error!(error = %error, "Waitlist flow failed");
        }

        self.notices.push(Notice::error(message));
        self.set_status(SubmissionStatus::Error);
        self.sign_in_failed = matches!(error, WaitlistError::AuthFailed(_));
    }

    /// Show the modal, choosing the view from identity and ledger.
    pub fn open_modal(&mut self) {
        if self.status.is_terminal() {
            self.modal_open = true;
            return;
        }

        if self.identity_registered() {
            tracing::info!("Identity already registered, showing outcome");
            self.set_status(SubmissionStatus::AlreadyJoined);
            self.modal_open = true;
            return;
        }

        if let Some(identity) = &self.identity {
            if let Some(email) = identity.email() {
                self.draft.email = email.to_string();
            }
            self.step = FormStep::Details;
        } else {
            self.step = FormStep::Auth;
        }

        if self.status == SubmissionStatus::Error {
            self.set_status(SubmissionStatus::Idle);
        }
        self.modal_open = true;
    }

    /// Hide the modal. In-flight work is not aborted.
    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    /// Apply a session change reported by the identity provider.
    pub fn identity_changed(&mut self, identity: Option<Identity>) {
        match identity {
            Some(identity) => {
                tracing::debug!(uid = %identity.unique_id, "Identity present");
                if let Some(email) = identity.email() {
                    if self.ledger.is_registered(email) {
                        self.set_status(SubmissionStatus::AlreadyJoined);
                    }
                    self.draft.prefill_email(email);
                }
                self.identity = Some(identity);
            }
            None => {
                if self.identity.is_some() {
                    tracing::info!("Signed out");
                }
                self.identity = None;
                self.step = FormStep::Auth;
                self.set_status(SubmissionStatus::Idle);
            }
        }
    }

    /// Visitor pressed the sign-in button.
    pub fn begin_sign_in(&mut self) -> SignInStart {
        if self.status.is_terminal() {
            self.notices.push(Notice::success(MSG_ALREADY_JOINED));
            self.modal_open = false;
            return SignInStart::Handled;
        }

        if self.identity.is_none() {
            return SignInStart::Prompt;
        }

        if self.identity_registered() {
            self.set_status(SubmissionStatus::AlreadyJoined);
            self.notices.push(Notice::success(MSG_ALREADY_JOINED));
            self.modal_open = false;
            return SignInStart::Handled;
        }

        if let Some(email) = self.identity_email() {
            self.draft.email = email;
        }
        self.step = FormStep::Details;
        SignInStart::Handled
    }

    /// Apply the outcome of the provider's interactive flow.
    pub fn finish_sign_in(&mut self, result: WaitlistResult<Identity>) {
        match result {
            Ok(identity) => {
                self.draft.email = identity.email().unwrap_or_default().to_string();
                self.identity = Some(identity);

                if self.identity_registered() {
                    self.set_status(SubmissionStatus::AlreadyJoined);
                    self.notices.push(Notice::success(MSG_ALREADY_JOINED));
                    self.modal_open = false;
                    return;
                }

                if self.status.is_terminal() {
                    return;
                }
                if self.status == SubmissionStatus::Error {
                    self.set_status(SubmissionStatus::Idle);
                }
                self.step = FormStep::Details;
            }
            Err(e) => self.fail(e),
        }
    }

    /// Edit the details form. Ignored once the flow is terminal.
    pub fn edit_draft(&mut self, edit: impl FnOnce(&mut FormDraft)) {
        if self.status.is_terminal() {
            return;
        }
        edit(&mut self.draft);
    }

    /// Return from `Error` to `Idle` so the visitor can try again.
    pub fn clear_error(&mut self) {
        if self.status == SubmissionStatus::Error {
            self.set_status(SubmissionStatus::Idle);
        }
    }

    /// Visitor submitted the details form.
    ///
    /// Returns the submission to confirm, or `None` when the submit was
    /// rejected or resolved without confirmation.
    pub fn begin_submit(&mut self) -> Option<PendingSubmission> {
        if self.status != SubmissionStatus::Idle {
            tracing::debug!(status = %self.status, "Submission prevented");
            return None;
        }

        let Some(identity) = self.identity.clone() else {
            self.fail(WaitlistError::NotAuthenticated);
            self.step = FormStep::Auth;
            return None;
        };

        self.set_status(SubmissionStatus::Submitting);

        if self.identity_registered() {
            self.notices.push(Notice::success(MSG_ALREADY_JOINED));
            self.set_status(SubmissionStatus::AlreadyJoined);
            self.modal_open = false;
            return None;
        }

        let entry = WaitlistEntry::from_draft(&identity.unique_id, &self.draft);
        match serde_json::to_string(&entry) {
            Ok(json) => tracing::info!(entry = %json, "Form data collected"),
            Err(e) => tracing::warn!(error = %e, "Could not serialize form data"),
        }

        if let Some(email) = identity.email() {
            if let Err(e) = self.ledger.record(email) {
                tracing::warn!(error = %e, "Could not save registration to local storage");
            }
        }

        Some(PendingSubmission { entry })
    }

    /// Apply the confirmation outcome of a pending submission.
    pub fn finish_submit(&mut self, pending: PendingSubmission, result: WaitlistResult<()>) {
        match result {
            Ok(()) => {
                tracing::debug!(user_id = %pending.entry.user_id, "Submission confirmed");
                self.notices.push(Notice::success(MSG_JOINED));
                self.set_status(SubmissionStatus::Success);
                self.modal_open = false;
                self.draft.clear();
                self.step = FormStep::Auth;
            }
            Err(e) => self.fail(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    fn flow() -> WaitlistFlow {
        let store = Arc::new(MemoryStore::new());
        WaitlistFlow::new(RegistrationLedger::new(store, "registeredEmails"))
    }

    fn signed_in(email: &str) -> WaitlistFlow {
        let mut flow = flow();
        flow.identity_changed(Some(Identity::from_email(email)));
        flow
    }

    #[test]
    fn open_without_identity_shows_auth_step() {
        let mut flow = flow();
        flow.open_modal();
        assert!(flow.is_modal_open());
        assert_eq!(flow.step(), FormStep::Auth);
        assert_eq!(flow.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn open_with_identity_prefills_and_shows_details() {
        let mut flow = signed_in("a@example.com");
        flow.open_modal();
        assert_eq!(flow.step(), FormStep::Details);
        assert_eq!(flow.draft().email, "a@example.com");
    }

    #[test]
    fn open_with_registered_identity_is_already_joined() {
        let mut flow = flow();
        flow.ledger().record("b@example.com").unwrap();
        flow.identity = Some(Identity::from_email("b@example.com"));

        flow.open_modal();
        assert_eq!(flow.status(), SubmissionStatus::AlreadyJoined);
        assert!(flow.is_modal_open());
        assert_eq!(flow.snapshot().outcome(), Some(Outcome::AlreadyJoined));
    }

    #[test]
    fn open_clears_previous_error() {
        let mut flow = flow();
        flow.finish_sign_in(Err(WaitlistError::AuthCancelled));
        assert_eq!(flow.status(), SubmissionStatus::Error);

        flow.close_modal();
        flow.open_modal();
        assert_eq!(flow.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn sign_in_without_identity_prompts_provider() {
        let mut flow = flow();
        flow.open_modal();
        assert_eq!(flow.begin_sign_in(), SignInStart::Prompt);
    }

    #[test]
    fn sign_in_with_existing_identity_skips_provider() {
        let mut flow = signed_in("a@example.com");
        flow.open_modal();
        assert_eq!(flow.begin_sign_in(), SignInStart::Handled);
        assert_eq!(flow.step(), FormStep::Details);
    }

    #[test]
    fn sign_in_when_terminal_notifies_and_closes() {
        let mut flow = signed_in("a@example.com");
        flow.status = SubmissionStatus::Success;
        flow.modal_open = true;

        assert_eq!(flow.begin_sign_in(), SignInStart::Handled);
        assert!(!flow.is_modal_open());
        assert_eq!(flow.take_notices(), vec![Notice::success(MSG_ALREADY_JOINED)]);
    }

    #[test]
    fn sign_in_success_for_registered_email_never_visits_details() {
        let mut flow = flow();
        flow.ledger().record("b@example.com").unwrap();
        flow.open_modal();

        flow.finish_sign_in(Ok(Identity::from_email("b@example.com")));
        assert_eq!(flow.status(), SubmissionStatus::AlreadyJoined);
        assert_eq!(flow.step(), FormStep::Auth);
        assert!(!flow.is_modal_open());
    }

    #[test]
    fn sign_in_failure_is_error_on_auth_step() {
        let mut flow = flow();
        flow.open_modal();
        flow.finish_sign_in(Err(WaitlistError::AuthFailed("network".into())));

        assert_eq!(flow.status(), SubmissionStatus::Error);
        assert_eq!(flow.step(), FormStep::Auth);
        assert!(flow.is_modal_open());
        assert_eq!(flow.take_notices(), vec![Notice::error(MSG_SIGN_IN_FAILED)]);
    }

    #[test]
    fn retry_after_cancel_returns_to_idle() {
        let mut flow = flow();
        flow.open_modal();
        flow.finish_sign_in(Err(WaitlistError::AuthCancelled));
        flow.finish_sign_in(Ok(Identity::from_email("a@example.com")));

        assert_eq!(flow.status(), SubmissionStatus::Idle);
        assert_eq!(flow.step(), FormStep::Details);
    }

    #[test]
    fn submit_without_identity_forces_auth_step() {
        let mut flow = flow();
        flow.step = FormStep::Details;

        assert!(flow.begin_submit().is_none());
        assert_eq!(flow.status(), SubmissionStatus::Error);
        assert_eq!(flow.step(), FormStep::Auth);
        assert_eq!(flow.take_notices(), vec![Notice::error(MSG_NOT_AUTHENTICATED)]);
    }

    #[test]
    fn submit_is_rejected_unless_idle() {
        for status in [
            SubmissionStatus::Submitting,
            SubmissionStatus::Success,
            SubmissionStatus::AlreadyJoined,
            SubmissionStatus::Error,
        ] {
            let mut flow = signed_in("a@example.com");
            flow.status = status;
            let before = flow.snapshot();

            assert!(flow.begin_submit().is_none());
            assert_eq!(flow.snapshot(), before);
            assert!(flow.take_notices().is_empty());
        }
    }

    #[test]
    fn submit_then_confirm_records_and_succeeds() {
        let mut flow = signed_in("a@example.com");
        flow.open_modal();
        flow.edit_draft(|d| d.first_name = "Alex".into());

        let pending = flow.begin_submit().unwrap();
        assert_eq!(flow.status(), SubmissionStatus::Submitting);
        assert_eq!(pending.entry().first_name, "Alex");
        // Recorded before the confirmation step runs
        assert!(flow.ledger().is_registered("a@example.com"));

        flow.finish_submit(pending, Ok(()));
        assert_eq!(flow.status(), SubmissionStatus::Success);
        assert!(!flow.is_modal_open());
        assert_eq!(flow.step(), FormStep::Auth);
        assert_eq!(flow.draft(), &FormDraft::default());
        assert!(flow.ledger().is_registered("a@example.com"));
        assert_eq!(flow.take_notices(), vec![Notice::success(MSG_JOINED)]);
    }

    #[test]
    fn submit_for_registered_email_is_already_joined() {
        let mut flow = signed_in("a@example.com");
        // Registered from another tab after this session read the ledger
        flow.ledger().record("a@example.com").unwrap();
        flow.modal_open = true;

        assert!(flow.begin_submit().is_none());
        assert_eq!(flow.status(), SubmissionStatus::AlreadyJoined);
        assert!(!flow.is_modal_open());
    }

    #[test]
    fn failed_confirmation_is_error_but_stays_recorded() {
        let mut flow = signed_in("a@example.com");
        flow.open_modal();
        let pending = flow.begin_submit().unwrap();

        flow.finish_submit(pending, Err(WaitlistError::SubmissionFailed("timeout".into())));
        assert_eq!(flow.status(), SubmissionStatus::Error);
        assert!(flow.is_modal_open());
        assert!(flow.ledger().is_registered("a@example.com"));
        assert_eq!(flow.take_notices(), vec![Notice::error(MSG_SUBMISSION_FAILED)]);

        // A retry finds the earlier write
        flow.clear_error();
        assert!(flow.begin_submit().is_none());
        assert_eq!(flow.status(), SubmissionStatus::AlreadyJoined);
    }

    #[test]
    fn ledger_write_failure_does_not_block_submit() {
        struct ReadOnly;
        impl crate::storage::KeyValueStore for ReadOnly {
            fn get_item(&self, _key: &str) -> WaitlistResult<Option<String>> {
                Ok(None)
            }
            fn set_item(&self, _key: &str, _value: &str) -> WaitlistResult<()> {
                Err(WaitlistError::StorageUnavailable("read-only".into()))
            }
        }

        let mut flow = WaitlistFlow::new(RegistrationLedger::new(Arc::new(ReadOnly), "k"));
        flow.identity_changed(Some(Identity::from_email("a@example.com")));
        flow.open_modal();

        let pending = flow.begin_submit().unwrap();
        assert_eq!(flow.status(), SubmissionStatus::Submitting);
        flow.finish_submit(pending, Ok(()));
        assert_eq!(flow.status(), SubmissionStatus::Success);
    }

    #[test]
    fn only_provider_failure_marks_sign_in_failed() {
        let mut flow = flow();
        flow.open_modal();

        flow.finish_sign_in(Err(WaitlistError::AuthCancelled));
        assert_eq!(flow.status(), SubmissionStatus::Error);
        assert!(!flow.snapshot().sign_in_failed);
        assert_eq!(flow.take_notices(), vec![Notice::error(MSG_SIGN_IN_CANCELLED)]);

        flow.finish_sign_in(Err(WaitlistError::AuthFailed("network".into())));
        assert!(flow.snapshot().sign_in_failed);

        flow.finish_sign_in(Ok(Identity::from_email("a@example.com")));
        assert_eq!(flow.status(), SubmissionStatus::Idle);
        assert!(!flow.snapshot().sign_in_failed);
    }

    #[test]
    fn sign_out_resets_to_idle_auth() {
        let mut flow = signed_in("a@example.com");
        flow.open_modal();
        flow.identity_changed(None);

        assert!(flow.identity().is_none());
        assert_eq!(flow.step(), FormStep::Auth);
        assert_eq!(flow.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn identity_change_for_registered_email_is_already_joined() {
        let mut flow = flow();
        flow.ledger().record("b@example.com").unwrap();
        flow.identity_changed(Some(Identity::from_email("b@example.com")));
        assert_eq!(flow.status(), SubmissionStatus::AlreadyJoined);
    }

    #[test]
    fn terminal_flow_ignores_draft_edits() {
        let mut flow = signed_in("a@example.com");
        flow.status = SubmissionStatus::AlreadyJoined;
        flow.edit_draft(|d| d.first_name = "Changed".into());
        assert!(flow.draft().first_name.is_empty());
    }

    #[test]
    fn snapshot_join_label_tracks_terminal_status() {
        let mut flow = flow();
        assert_eq!(flow.snapshot().join_label(), "Join Waitlist");
        flow.status = SubmissionStatus::Success;
        assert_eq!(flow.snapshot().join_label(), "Successfully Joined!");
        assert_eq!(flow.snapshot().outcome(), Some(Outcome::Joined));
    }
}
