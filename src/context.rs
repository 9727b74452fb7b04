//! Waitlist context for SketchMentor.
//!
//! The [`App`](crate::app::App) component provides the session, the account
//! chooser and reactive mirrors of their state; components read them with
//! the `use_*` hooks below.
//!
//! ## Usage
//!
//! ```ignore
//! let waitlist = use_waitlist();
//! let flow = use_flow();
//!
//! if !flow().is_joined() {
//!     waitlist.session.open_modal();
//! }
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use sketchmentor_core::{PopupIdentityProvider, WaitlistSession};
use sketchmentor_ui::ToastMessage;

use crate::LaunchSettings;

/// Handles shared by every component.
#[derive(Clone)]
pub struct WaitlistHandle {
    pub session: Arc<WaitlistSession>,
    /// Concrete provider, for driving the account chooser
    pub provider: Arc<PopupIdentityProvider>,
}

/// Reactive mirror of the session's flow snapshot.
#[derive(Clone, Copy)]
pub struct FlowSignal(pub Signal<sketchmentor_core::FlowSnapshot>);

/// Whether the account chooser popup is showing.
#[derive(Clone, Copy)]
pub struct PopupSignal(pub Signal<bool>);

/// Visible toasts, newest last.
#[derive(Clone, Copy)]
pub struct ToastSignal(pub Signal<Vec<ToastMessage>>);

/// Launch settings from the command line.
pub fn get_launch_settings() -> LaunchSettings {
    crate::launch_settings()
}

/// Hook to access the waitlist session and identity provider.
pub fn use_waitlist() -> WaitlistHandle {
    use_context::<WaitlistHandle>()
}

/// Hook returning the latest flow snapshot as a signal.
pub fn use_flow() -> Signal<sketchmentor_core::FlowSnapshot> {
    use_context::<FlowSignal>().0
}

/// Hook returning whether the account chooser is open.
pub fn use_popup_open() -> Signal<bool> {
    use_context::<PopupSignal>().0
}

/// Hook returning the toast list.
pub fn use_toasts() -> Signal<Vec<ToastMessage>> {
    use_context::<ToastSignal>().0
}
