//! View state signal and the dispatcher that runs effects.

use dioxus::prelude::*;
use litpath_core::{Action, BackendClient, Effect, ViewState};

use crate::CONFIG;

/// The single view state container. Only [`dispatch`] writes to it.
pub static VIEW: GlobalSignal<ViewState> = Signal::global(ViewState::new);

/// HTTP client for the configured backend.
pub static CLIENT: GlobalSignal<BackendClient> =
    Signal::global(|| BackendClient::new(CONFIG.get().cloned().unwrap_or_default()));

pub fn base_url() -> String {
    CLIENT.read().config().base_url.clone()
}

/// Apply `action` and run whatever effect it produces.
pub fn dispatch(action: Action) {
    let effect = VIEW.write().apply(action);
    if let Some(effect) = effect {
        run(effect);
    }
}

/// Run `effect` in the background and feed the outcome back through
/// [`dispatch`]. Requests are not cancelled or deduplicated; the last one to
/// finish wins.
pub fn run(effect: Effect) {
    let client = CLIENT.read().clone();
    spawn(async move {
        let outcome = client.run(effect).await;
        dispatch(outcome);
    });
}
