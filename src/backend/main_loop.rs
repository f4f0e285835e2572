//! Backend event loop.

use crossbeam_channel::{Receiver, Sender};
use tokio::runtime::Runtime;
use tracing::{debug, error};

use super::api::{HttpApi, ScholarshipApi};
use super::handlers;
use crate::protocol::{BackendAction, GuiEvent};
use crate::session::Session;

/// Run the backend against the HTTP service at `base_url`.
pub fn run_backend(action_rx: Receiver<BackendAction>, event_tx: Sender<GuiEvent>, base_url: &str) {
    let api = match HttpApi::new(base_url) {
        Ok(api) => api,
        Err(e) => {
            error!(error = %e, "failed to build HTTP client");
            let _ = event_tx.send(GuiEvent::Fatal(format!("Failed to build HTTP client: {}", e)));
            return;
        }
    };
    run_backend_with(api, action_rx, event_tx);
}

/// Run the backend loop with any service implementation.
///
/// The loop owns the session. Actions are handled strictly one at a time in
/// arrival order, and every action is followed by `GuiEvent::Idle`. The loop
/// ends on `BackendAction::Quit` or when the UI drops its sender.
pub fn run_backend_with<A: ScholarshipApi>(
    api: A,
    action_rx: Receiver<BackendAction>,
    event_tx: Sender<GuiEvent>,
) {
    // Create a Tokio runtime for this thread
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!(error = %e, "failed to create Tokio runtime");
            let _ = event_tx.send(GuiEvent::Fatal(format!(
                "Failed to create Tokio runtime: {}",
                e
            )));
            return;
        }
    };

    let mut session = Session::new();

    while let Ok(action) = action_rx.recv() {
        debug!(action = action.name(), "handling backend action");
        let keep_running = rt.block_on(handlers::handle_backend_action(
            action,
            &api,
            &mut session,
            &event_tx,
        ));
        let _ = event_tx.send(GuiEvent::Idle);
        if !keep_running {
            break;
        }
    }

    debug!("backend loop finished");
}
