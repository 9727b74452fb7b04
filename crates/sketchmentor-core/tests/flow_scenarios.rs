//! End-to-end waitlist scenarios driven through `WaitlistSession`.
//!
//! Sign-in goes through the real popup provider; the confirmation delay
//! runs on tokio's paused clock.

use std::sync::Arc;
use std::time::Duration;

use sketchmentor_core::flow::{MSG_ALREADY_JOINED, MSG_JOINED, MSG_SIGN_IN_CANCELLED};
use sketchmentor_core::{
    FormStep, Identity, IdentityProvider, MemoryStore, NoticeKind, Outcome, PopupIdentityProvider,
    RegistrationLedger, SimulatedLatency, SubmissionStatus, WaitlistConfig, WaitlistSession,
};

const DELAY: Duration = Duration::from_millis(1000);

struct Harness {
    store: MemoryStore,
    provider: Arc<PopupIdentityProvider>,
    session: Arc<WaitlistSession>,
}

impl Harness {
    fn new(provider: PopupIdentityProvider) -> Self {
        Self::with_store(MemoryStore::new(), provider)
    }

    fn with_store(store: MemoryStore, provider: PopupIdentityProvider) -> Self {
        let provider = Arc::new(provider);
        let session = Arc::new(WaitlistSession::new(
            &WaitlistConfig::default(),
            Arc::new(store.clone()),
            provider.clone(),
            Arc::new(SimulatedLatency::new(DELAY)),
        ));
        Self {
            store,
            provider,
            session,
        }
    }

    fn ledger(&self) -> RegistrationLedger {
        RegistrationLedger::new(Arc::new(self.store.clone()), "registeredEmails")
    }

    /// Run `sign_in` while answering the popup with `answer`.
    async fn sign_in_answering(&self, answer: Option<&str>) {
        let mut popup = self.provider.popup_watch();
        tokio::join!(self.session.sign_in(), async {
            popup.wait_for(|open| *open).await.unwrap();
            match answer {
                Some(email) => self.provider.choose_account(email),
                None => self.provider.dismiss(),
            };
        });
    }
}

#[tokio::test(start_paused = true)]
async fn fresh_visitor_joins_the_waitlist() {
    let h = Harness::new(PopupIdentityProvider::new());
    let mut notices = h.session.subscribe_notices();

    h.session.open_modal();
    let snapshot = h.session.snapshot();
    assert!(snapshot.modal_open);
    assert_eq!(snapshot.step, FormStep::Auth);

    h.sign_in_answering(Some("a@example.com")).await;
    let snapshot = h.session.snapshot();
    assert_eq!(snapshot.step, FormStep::Details);
    assert_eq!(snapshot.draft.email, "a@example.com");
    assert_eq!(snapshot.status, SubmissionStatus::Idle);

    h.session.edit_draft(|d| d.first_name = "Alex".into());

    let mut rx = h.session.watch();
    let submit = h.session.submit();
    tokio::pin!(submit);

    // Submitting is published before the delay elapses
    tokio::select! {
        _ = &mut submit => panic!("submission confirmed without waiting"),
        changed = rx.wait_for(|s| s.status == SubmissionStatus::Submitting) => {
            changed.unwrap();
        }
    }
    submit.await;

    let snapshot = h.session.snapshot();
    assert_eq!(snapshot.status, SubmissionStatus::Success);
    assert!(!snapshot.modal_open);
    assert!(snapshot.draft.first_name.is_empty());
    assert!(h.ledger().is_registered("a@example.com"));

    let notice = notices.try_recv().unwrap();
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.message, MSG_JOINED);

    // Reopening shows the outcome only
    h.session.open_modal();
    let snapshot = h.session.snapshot();
    assert!(snapshot.modal_open);
    assert_eq!(snapshot.outcome(), Some(Outcome::Joined));
    assert_eq!(snapshot.join_label(), "Successfully Joined!");
}

#[tokio::test]
async fn returning_visitor_is_already_joined_on_open() {
    let store = MemoryStore::new();
    RegistrationLedger::new(Arc::new(store.clone()), "registeredEmails")
        .record("b@example.com")
        .unwrap();

    let h = Harness::with_store(
        store,
        PopupIdentityProvider::with_session(Identity::from_email("b@example.com")),
    );
    // The ledger is consulted at session start
    assert_eq!(h.session.snapshot().status, SubmissionStatus::AlreadyJoined);

    h.session.open_modal();
    let snapshot = h.session.snapshot();
    assert!(snapshot.modal_open);
    assert_eq!(snapshot.outcome(), Some(Outcome::AlreadyJoined));
    assert_eq!(snapshot.step, FormStep::Auth);
}

#[tokio::test]
async fn registered_email_at_sign_in_skips_details() {
    let store = MemoryStore::new();
    RegistrationLedger::new(Arc::new(store.clone()), "registeredEmails")
        .record("b@example.com")
        .unwrap();
    let h = Harness::with_store(store, PopupIdentityProvider::new());
    let mut notices = h.session.subscribe_notices();

    h.session.open_modal();
    h.sign_in_answering(Some("b@example.com")).await;

    let snapshot = h.session.snapshot();
    assert_eq!(snapshot.status, SubmissionStatus::AlreadyJoined);
    assert_eq!(snapshot.step, FormStep::Auth);
    assert!(!snapshot.modal_open);
    assert_eq!(notices.try_recv().unwrap().message, MSG_ALREADY_JOINED);
}

#[tokio::test]
async fn cancelled_popup_allows_retry() {
    let h = Harness::new(PopupIdentityProvider::new());
    let mut notices = h.session.subscribe_notices();

    h.session.open_modal();
    h.sign_in_answering(None).await;

    let snapshot = h.session.snapshot();
    assert_eq!(snapshot.status, SubmissionStatus::Error);
    assert_eq!(snapshot.step, FormStep::Auth);
    assert!(snapshot.modal_open);

    let notice = notices.try_recv().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, MSG_SIGN_IN_CANCELLED);

    h.sign_in_answering(Some("a@example.com")).await;
    let snapshot = h.session.snapshot();
    assert_eq!(snapshot.status, SubmissionStatus::Idle);
    assert_eq!(snapshot.step, FormStep::Details);
}

#[tokio::test(start_paused = true)]
async fn double_submit_within_delay_records_once() {
    let h = Harness::new(PopupIdentityProvider::with_session(Identity::from_email(
        "a@example.com",
    )));
    let mut notices = h.session.subscribe_notices();

    h.session.open_modal();
    h.session.edit_draft(|d| d.first_name = "Alex".into());

    tokio::join!(h.session.submit(), async {
        tokio::time::sleep(Duration::from_millis(200)).await;
        h.session.submit().await;
    });

    assert_eq!(h.session.snapshot().status, SubmissionStatus::Success);
    assert_eq!(h.ledger().entries().unwrap(), vec!["a@example.com".to_string()]);

    assert_eq!(notices.try_recv().unwrap().message, MSG_JOINED);
    assert!(notices.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn closing_modal_does_not_abort_pending_submission() {
    let h = Harness::new(PopupIdentityProvider::with_session(Identity::from_email(
        "a@example.com",
    )));
    h.session.open_modal();

    tokio::join!(h.session.submit(), async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        h.session.close_modal();
    });

    let snapshot = h.session.snapshot();
    assert_eq!(snapshot.status, SubmissionStatus::Success);
    assert!(!snapshot.modal_open);
}

#[tokio::test]
async fn submit_after_sign_out_returns_to_auth() {
    let h = Harness::new(PopupIdentityProvider::with_session(Identity::from_email(
        "a@example.com",
    )));
    let _listener = h.session.attach_identity_listener();
    let mut rx = h.session.watch();

    h.session.open_modal();
    h.session.sign_out();
    rx.wait_for(|s| s.identity.is_none()).await.unwrap();

    h.session.submit().await;
    let snapshot = h.session.snapshot();
    assert_eq!(snapshot.status, SubmissionStatus::Error);
    assert_eq!(snapshot.step, FormStep::Auth);
    assert!(h.ledger().entries().unwrap().is_empty());
}

#[tokio::test]
async fn identity_registered_elsewhere_moves_to_already_joined() {
    let store = MemoryStore::new();
    let h = Harness::with_store(store, PopupIdentityProvider::new());
    let _listener = h.session.attach_identity_listener();
    let mut rx = h.session.watch();

    // Registered in another tab, then signed in outside the modal
    h.ledger().record("c@example.com").unwrap();
    let mut popup = h.provider.popup_watch();
    let (result, _) = tokio::join!(h.provider.sign_in(), async {
        popup.wait_for(|open| *open).await.unwrap();
        h.provider.choose_account("c@example.com");
    });
    result.unwrap();

    rx.wait_for(|s| s.status == SubmissionStatus::AlreadyJoined)
        .await
        .unwrap();
}

#[tokio::test(start_paused = true)]
async fn registration_is_visible_during_confirmation_delay() {
    let h = Harness::new(PopupIdentityProvider::with_session(Identity::from_email(
        "a@example.com",
    )));
    h.session.open_modal();
    assert_eq!(h.session.snapshot().step, FormStep::Details);

    let submit = h.session.submit();
    tokio::pin!(submit);

    tokio::select! {
        _ = &mut submit => panic!("submission confirmed before the delay elapsed"),
        _ = tokio::time::sleep(DELAY / 2) => {}
    }
    assert_eq!(h.session.snapshot().status, SubmissionStatus::Submitting);
    assert!(h.ledger().is_registered("a@example.com"));

    submit.await;
    assert_eq!(h.session.snapshot().status, SubmissionStatus::Success);
}
