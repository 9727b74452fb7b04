use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;
use sketchmentor_core::{
    Identity, MemoryStore, Notice, NoticeKind, PopupIdentityProvider, SimulatedLatency,
    WaitlistSession,
};
use sketchmentor_ui::{ToastMessage, ToastTone};
use tokio::sync::broadcast::error::RecvError;

use crate::context::{get_launch_settings, FlowSignal, PopupSignal, ToastSignal, WaitlistHandle};
use crate::pages::Landing;
use crate::theme::GLOBAL_STYLES;

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Application routes.
///
/// - `/` - Landing page with the waitlist modal
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
}

/// Build the session for this launch.
///
/// Falls back to in-memory storage when the store file cannot be opened, so
/// the page still works and every visitor simply reads as not registered.
fn build_waitlist() -> WaitlistHandle {
    let settings = get_launch_settings();

    let provider = Arc::new(match settings.signed_in_as {
        Some(email) => PopupIdentityProvider::with_session(Identity::from_email(email)),
        None => PopupIdentityProvider::new(),
    });

    let session = match WaitlistSession::open_desktop(&settings.config, provider.clone()) {
        Ok(session) => session,
        Err(e) => {
            tracing::error!("Failed to open local storage, using memory: {}", e);
            WaitlistSession::new(
                &settings.config,
                Arc::new(MemoryStore::new()),
                provider.clone(),
                Arc::new(SimulatedLatency::new(settings.config.confirmation_delay)),
            )
        }
    };

    WaitlistHandle {
        session: Arc::new(session),
        provider,
    }
}

/// Toast for a session notice.
pub fn toast_for(id: u64, notice: &Notice) -> ToastMessage {
    let tone = match notice.kind {
        NoticeKind::Success => ToastTone::Success,
        NoticeKind::Error => ToastTone::Error,
    };
    ToastMessage {
        id,
        tone,
        text: notice.message.clone(),
    }
}

/// Root application component.
///
/// Provides global styles, the waitlist context, and routing.
#[component]
pub fn App() -> Element {
    let waitlist = use_hook(build_waitlist);

    // Held for the lifetime of the app; dropping it stops the listener
    let _listener = use_hook({
        let session = waitlist.session.clone();
        move || Rc::new(session.attach_identity_listener())
    });

    let mut flow = use_signal(|| waitlist.session.snapshot());
    let mut popup_open = use_signal(|| waitlist.provider.is_popup_open());
    let mut toasts: Signal<Vec<ToastMessage>> = use_signal(Vec::new);

    use_context_provider(|| waitlist.clone());
    use_context_provider(|| FlowSignal(flow));
    use_context_provider(|| PopupSignal(popup_open));
    use_context_provider(|| ToastSignal(toasts));

    // Mirror flow snapshots
    let session = waitlist.session.clone();
    use_effect(move || {
        let mut rx = session.watch();
        spawn(async move {
            while rx.changed().await.is_ok() {
                let snapshot = rx.borrow_and_update().clone();
                flow.set(snapshot);
            }
        });
    });

    // Mirror the account chooser
    let provider = waitlist.provider.clone();
    use_effect(move || {
        let mut rx = provider.popup_watch();
        spawn(async move {
            while rx.changed().await.is_ok() {
                let open = *rx.borrow_and_update();
                popup_open.set(open);
            }
        });
    });

    // Turn notices into toasts
    let session = waitlist.session.clone();
    use_effect(move || {
        let mut notice_rx = session.subscribe_notices();
        spawn(async move {
            let mut next_id: u64 = 0;
            loop {
                let notice = match notice_rx.recv().await {
                    Ok(notice) => notice,
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "Dropped notices");
                        continue;
                    }
                    Err(RecvError::Closed) => break,
                };

                next_id += 1;
                let id = next_id;
                toasts.write().push(toast_for(id, &notice));

                spawn(async move {
                    tokio::time::sleep(TOAST_DURATION).await;
                    toasts.write().retain(|t| t.id != id);
                });
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_kind_maps_to_toast_tone() {
        let ok = toast_for(1, &Notice::success("Successfully joined the waitlist!"));
        assert_eq!(ok.tone, ToastTone::Success);
        assert_eq!(ok.text, "Successfully joined the waitlist!");

        let err = toast_for(2, &Notice::error("Sign-in cancelled."));
        assert_eq!(err.tone, ToastTone::Error);
        assert_eq!(err.id, 2);
    }
}
