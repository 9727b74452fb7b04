//! SketchMentor Waitlist Core Library
//!
//! Registration ledger, identity gate and the signup flow behind the
//! SketchMentor landing page.
//!
//! ## Overview
//!
//! A visitor opens the waitlist modal, signs in through an identity
//! provider, fills in a short profile and joins. There is no server: the
//! only record of who joined is a JSON list of emails in local key-value
//! storage, checked before every registration.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use sketchmentor_core::{PopupIdentityProvider, WaitlistConfig, WaitlistSession};
//!
//! let config = WaitlistConfig::default();
//! let provider = Arc::new(PopupIdentityProvider::new());
//! let session = Arc::new(WaitlistSession::open_desktop(&config, provider.clone())?);
//! let _listener = session.attach_identity_listener();
//!
//! session.open_modal();
//! // ... the popup calls provider.choose_account("a@example.com")
//! session.sign_in().await;
//! session.edit_draft(|d| d.first_name = "Alex".into());
//! session.submit().await;
//! ```

pub mod config;
pub mod draft;
pub mod error;
pub mod flow;
pub mod identity;
pub mod ledger;
pub mod logging;
pub mod session;
pub mod storage;
pub mod submission;

// Re-exports
pub use config::WaitlistConfig;
pub use draft::{ExperienceLevel, FormDraft, INTEREST_OPTIONS};
pub use error::{WaitlistError, WaitlistResult};
pub use flow::{
    FlowSnapshot, FormStep, Notice, NoticeKind, Outcome, SubmissionStatus, WaitlistFlow,
};
pub use identity::{
    Identity, IdentityGate, IdentityProvider, IdentitySubscription, PopupIdentityProvider,
};
pub use ledger::RegistrationLedger;
pub use session::WaitlistSession;
pub use storage::{KeyValueStore, MemoryStore, RedbStore};
pub use submission::{ConfirmationBackend, SimulatedLatency, WaitlistEntry};

#[cfg(feature = "web")]
pub use storage::WebStore;
