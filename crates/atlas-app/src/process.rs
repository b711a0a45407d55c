//! Message processing
//!
//! Runs a message and its follow-ups through the TEA update function and
//! dispatches the resulting actions.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use atlas_client::CatalogProvider;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<C>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    provider: &Arc<C>,
    shutdown_rx: &watch::Receiver<bool>,
) where
    C: CatalogProvider + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(
                action,
                msg_tx.clone(),
                Arc::clone(provider),
                shutdown_rx.clone(),
            );
        }

        msg = result.message;
    }
}
