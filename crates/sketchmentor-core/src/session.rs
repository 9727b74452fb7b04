//! Async driver for one waitlist flow.
//!
//! Owns the [`WaitlistFlow`], the [`IdentityGate`] and the
//! [`ConfirmationBackend`]. Every command locks the flow, applies a
//! transition, then publishes a fresh [`FlowSnapshot`] on a watch channel and
//! any raised [`Notice`]s on a broadcast channel. The lock is never held
//! across an `.await`: sign-in and confirmation run between a `begin_*` and a
//! `finish_*` transition.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tokio::sync::{broadcast, watch};

use crate::config::WaitlistConfig;
use crate::draft::FormDraft;
use crate::error::WaitlistResult;
use crate::flow::{FlowSnapshot, Notice, SignInStart, WaitlistFlow};
use crate::identity::{IdentityGate, IdentityProvider, IdentitySubscription};
use crate::ledger::RegistrationLedger;
use crate::storage::{KeyValueStore, RedbStore};
use crate::submission::{ConfirmationBackend, SimulatedLatency};

/// Capacity of the notice broadcast channel
const NOTICE_CHANNEL_CAPACITY: usize = 32;

/// A visitor's waitlist session.
pub struct WaitlistSession {
    flow: Mutex<WaitlistFlow>,
    gate: IdentityGate,
    backend: Arc<dyn ConfirmationBackend>,
    snapshot_tx: watch::Sender<FlowSnapshot>,
    notice_tx: broadcast::Sender<Notice>,
}

impl WaitlistSession {
    /// Create a session and read the ledger for the provider's current
    /// identity.
    pub fn new(
        config: &WaitlistConfig,
        store: Arc<dyn KeyValueStore>,
        provider: Arc<dyn IdentityProvider>,
        backend: Arc<dyn ConfirmationBackend>,
    ) -> Self {
        let ledger = RegistrationLedger::new(store, config.storage_key.clone());
        let gate = IdentityGate::new(provider);

        let mut flow = WaitlistFlow::new(ledger);
        flow.identity_changed(gate.current_identity());

        let (snapshot_tx, _) = watch::channel(flow.snapshot());
        let (notice_tx, _) = broadcast::channel(NOTICE_CHANNEL_CAPACITY);

        Self {
            flow: Mutex::new(flow),
            gate,
            backend,
            snapshot_tx,
            notice_tx,
        }
    }

    /// Desktop session: redb-backed storage in the data dir and the
    /// simulated confirmation delay from `config`.
    pub fn open_desktop(
        config: &WaitlistConfig,
        provider: Arc<dyn IdentityProvider>,
    ) -> WaitlistResult<Self> {
        let store = RedbStore::open(config.store_path())?;
        let backend = SimulatedLatency::new(config.confirmation_delay);
        Ok(Self::new(config, Arc::new(store), provider, Arc::new(backend)))
    }

    /// Apply a transition and publish its snapshot and notices.
    ///
    /// Publishing happens under the flow lock, so snapshots go out in
    /// transition order even when the identity listener races a command.
    fn with_flow<R>(&self, transition: impl FnOnce(&mut WaitlistFlow) -> R) -> R {
        let mut flow = self.flow.lock();
        let result = transition(&mut flow);

        self.snapshot_tx.send_replace(flow.snapshot());
        for notice in flow.take_notices() {
            // No receivers just means nobody is displaying toasts
            let _ = self.notice_tx.send(notice);
        }
        result
    }

    pub fn snapshot(&self) -> FlowSnapshot {
        self.snapshot_tx.borrow().clone()
    }

    /// Receiver that changes after every transition.
    pub fn watch(&self) -> watch::Receiver<FlowSnapshot> {
        self.snapshot_tx.subscribe()
    }

    pub fn subscribe_notices(&self) -> broadcast::Receiver<Notice> {
        self.notice_tx.subscribe()
    }

    pub fn ledger(&self) -> RegistrationLedger {
        self.flow.lock().ledger().clone()
    }

    pub fn open_modal(&self) {
        self.with_flow(|flow| flow.open_modal());
    }

    pub fn close_modal(&self) {
        self.with_flow(|flow| flow.close_modal());
    }

    pub fn edit_draft(&self, edit: impl FnOnce(&mut FormDraft)) {
        self.with_flow(|flow| flow.edit_draft(edit));
    }

    pub fn toggle_interest(&self, interest: &str) {
        self.with_flow(|flow| flow.edit_draft(|draft| draft.toggle_interest(interest)));
    }

    pub fn clear_error(&self) {
        self.with_flow(|flow| flow.clear_error());
    }

    /// Sign in through the identity gate unless the flow resolves it locally.
    pub async fn sign_in(&self) {
        if self.with_flow(|flow| flow.begin_sign_in()) == SignInStart::Handled {
            return;
        }

        let result = self.gate.sign_in().await;
        self.with_flow(|flow| flow.finish_sign_in(result));
    }

    /// Submit the details form and wait for confirmation.
    ///
    /// Rejected submits return immediately without touching state.
    pub async fn submit(&self) {
        let Some(pending) = self.with_flow(|flow| flow.begin_submit()) else {
            return;
        };

        let result = self.backend.confirm(pending.entry()).await;
        self.with_flow(|flow| flow.finish_submit(pending, result));
    }

    pub fn sign_out(&self) {
        self.gate.sign_out();
    }

    /// Feed identity changes into the flow until the guard is dropped.
    ///
    /// Holds only a weak reference, so the subscription does not keep the
    /// session alive.
    pub fn attach_identity_listener(self: &Arc<Self>) -> IdentitySubscription {
        let session: Weak<Self> = Arc::downgrade(self);
        self.gate.subscribe(move |identity| {
            if let Some(session) = session.upgrade() {
                session.with_flow(|flow| flow.identity_changed(identity));
            }
        })
    }
}
