//! Identity gate over an external sign-in capability.
//!
//! ## Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  IdentityProvider (trait)                                    │
//! │  ├── sign_in()  -> Identity | AuthCancelled | AuthFailed     │
//! │  ├── sign_out()                                              │
//! │  └── watch()    -> current session, updated on every change  │
//! │                                                              │
//! │  IdentityGate                                                │
//! │  ├── sign_in() / sign_out() / current_identity()             │
//! │  └── subscribe(callback) -> IdentitySubscription (drop=off)  │
//! │                                                              │
//! │  PopupIdentityProvider: in-app "choose an account" popup     │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Session changes are pushed through a `tokio::sync::watch` channel, so
//! sign-in elsewhere, sign-out and expiry all reach subscribers without
//! polling.

use std::sync::Arc;

use futures::future::BoxFuture;
use parking_lot::Mutex;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;

use crate::error::{WaitlistError, WaitlistResult};

/// Authenticated visitor as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Provider-scoped stable account id
    pub unique_id: String,
    /// Verified email, when the provider shares one
    pub email: Option<String>,
}

impl Identity {
    pub fn new(unique_id: impl Into<String>, email: Option<String>) -> Self {
        Self {
            unique_id: unique_id.into(),
            email,
        }
    }

    /// Identity for an email account, with an id derived from the address.
    ///
    /// The id is the first 14 bytes of the blake3 hash of the lower-cased
    /// email, hex encoded, so the same account always maps to the same id.
    pub fn from_email(email: impl Into<String>) -> Self {
        let email = email.into();
        let digest = blake3::hash(email.to_lowercase().as_bytes());
        Self {
            unique_id: hex::encode(&digest.as_bytes()[..14]),
            email: Some(email),
        }
    }

    /// Email as a string slice, if present and non-empty.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|e| !e.is_empty())
    }
}

/// External sign-in capability.
///
/// `sign_in` suspends until the interactive flow finishes. Implementations
/// report a user-initiated cancel as [`WaitlistError::AuthCancelled`] and
/// anything else as [`WaitlistError::AuthFailed`].
pub trait IdentityProvider: Send + Sync {
    fn sign_in(&self) -> BoxFuture<'_, WaitlistResult<Identity>>;

    fn sign_out(&self);

    /// Receiver for the provider's current session.
    fn watch(&self) -> watch::Receiver<Option<Identity>>;
}

/// Wrapper the flow uses to talk to an [`IdentityProvider`].
#[derive(Clone)]
pub struct IdentityGate {
    provider: Arc<dyn IdentityProvider>,
}

impl IdentityGate {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self { provider }
    }

    /// Run the interactive sign-in flow.
    pub async fn sign_in(&self) -> WaitlistResult<Identity> {
        match self.provider.sign_in().await {
            Ok(identity) => {
                tracing::info!(uid = %identity.unique_id, "Sign-in successful");
                Ok(identity)
            }
            Err(WaitlistError::AuthCancelled) => {
                tracing::info!("Sign-in cancelled by user");
                Err(WaitlistError::AuthCancelled)
            }
            Err(e) => {
                tracing::error!(error = %e, "Sign-in error");
                Err(e)
            }
        }
    }

    pub fn sign_out(&self) {
        self.provider.sign_out();
    }

    /// Latest authentication state.
    pub fn current_identity(&self) -> Option<Identity> {
        self.provider.watch().borrow().clone()
    }

    /// Register `on_change` for session changes.
    ///
    /// The callback first receives the current state, then every change.
    /// Dropping the returned guard unregisters it. Must be called from
    /// within a tokio runtime.
    pub fn subscribe<F>(&self, mut on_change: F) -> IdentitySubscription
    where
        F: FnMut(Option<Identity>) + Send + 'static,
    {
        let mut rx = self.provider.watch();
        let handle = tokio::spawn(async move {
            let initial = rx.borrow_and_update().clone();
            on_change(initial);

            while rx.changed().await.is_ok() {
                let next = rx.borrow_and_update().clone();
                on_change(next);
            }
        });

        IdentitySubscription { handle }
    }
}

/// Guard for an identity listener; unregisters on drop.
#[must_use = "dropping the subscription unregisters the listener"]
pub struct IdentitySubscription {
    handle: JoinHandle<()>,
}

impl Drop for IdentitySubscription {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Outcome of the account chooser popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupChoice {
    /// Visitor picked (or typed) an account email
    Account(String),
    /// Visitor closed the popup
    Dismissed,
}

/// Provider backed by an in-app account chooser popup.
///
/// `sign_in` opens the popup and waits for the presentation layer to call
/// [`choose_account`](Self::choose_account) or [`dismiss`](Self::dismiss).
/// Opening a second popup while one is pending fails the first request.
pub struct PopupIdentityProvider {
    session: watch::Sender<Option<Identity>>,
    popup_open: watch::Sender<bool>,
    pending: Mutex<Option<oneshot::Sender<PopupChoice>>>,
}

impl Default for PopupIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl PopupIdentityProvider {
    /// Provider with no signed-in account.
    pub fn new() -> Self {
        let (session, _) = watch::channel(None);
        let (popup_open, _) = watch::channel(false);
        Self {
            session,
            popup_open,
            pending: Mutex::new(None),
        }
    }

    /// Provider that starts with a remembered session.
    pub fn with_session(identity: Identity) -> Self {
        let provider = Self::new();
        provider.session.send_replace(Some(identity));
        provider
    }

    /// Receiver tracking whether the account chooser should be shown.
    pub fn popup_watch(&self) -> watch::Receiver<bool> {
        self.popup_open.subscribe()
    }

    pub fn is_popup_open(&self) -> bool {
        *self.popup_open.borrow()
    }

    /// Complete the pending popup with an account.
    ///
    /// Returns false if no sign-in was waiting.
    pub fn choose_account(&self, email: impl Into<String>) -> bool {
        self.resolve(PopupChoice::Account(email.into()))
    }

    /// Close the pending popup without choosing.
    ///
    /// Returns false if no sign-in was waiting.
    pub fn dismiss(&self) -> bool {
        self.resolve(PopupChoice::Dismissed)
    }

    fn resolve(&self, choice: PopupChoice) -> bool {
        let Some(tx) = self.pending.lock().take() else {
            return false;
        };
        self.popup_open.send_replace(false);
        tx.send(choice).is_ok()
    }

    fn complete(&self, email: &str) -> WaitlistResult<Identity> {
        let email = email.trim();
        if !is_plausible_email(email) {
            return Err(WaitlistError::AuthFailed(format!(
                "'{}' is not a valid account email",
                email
            )));
        }

        let identity = Identity::from_email(email);
        self.session.send_replace(Some(identity.clone()));
        Ok(identity)
    }
}

impl IdentityProvider for PopupIdentityProvider {
    fn sign_in(&self) -> BoxFuture<'_, WaitlistResult<Identity>> {
        let (tx, rx) = oneshot::channel();
        // Replacing drops the previous sender, failing its waiter
        if self.pending.lock().replace(tx).is_some() {
            tracing::debug!("Superseding pending sign-in popup");
        }
        self.popup_open.send_replace(true);

        Box::pin(async move {
            match rx.await {
                Ok(PopupChoice::Account(email)) => self.complete(&email),
                Ok(PopupChoice::Dismissed) => Err(WaitlistError::AuthCancelled),
                Err(_) => Err(WaitlistError::AuthFailed(
                    "sign-in popup was superseded by another request".to_string(),
                )),
            }
        })
    }

    fn sign_out(&self) {
        self.session.send_replace(None);
    }

    fn watch(&self) -> watch::Receiver<Option<Identity>> {
        self.session.subscribe()
    }
}

/// Minimal shape check: `local@domain.tld`, no whitespace.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
