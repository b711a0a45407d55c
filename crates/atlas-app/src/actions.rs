//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use atlas_client::CatalogProvider;
use atlas_core::prelude::*;
use atlas_core::FetchErrorKind;

use crate::message::Message;
use crate::request::RequestToken;
use crate::UpdateAction;

/// Execute an action by spawning a background task.
///
/// Fetch tasks are never cancelled when superseded; their results are
/// filtered by request token in the update function. They do stop on
/// shutdown.
pub fn handle_action<C>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    provider: Arc<C>,
    shutdown_rx: watch::Receiver<bool>,
) where
    C: CatalogProvider + Send + Sync + 'static,
{
    match action {
        UpdateAction::FetchCatalog { token } => {
            spawn_catalog_fetch(token, msg_tx, provider, shutdown_rx);
        }

        UpdateAction::FetchCountry { token, name } => {
            spawn_country_fetch(token, name, msg_tx, provider, shutdown_rx);
        }
    }
}

fn spawn_catalog_fetch<C>(
    token: RequestToken,
    msg_tx: mpsc::Sender<Message>,
    provider: Arc<C>,
    mut shutdown_rx: watch::Receiver<bool>,
) where
    C: CatalogProvider + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let result = tokio::select! {
            result = provider.fetch_all() => result,
            _ = shutdown_rx.changed() => {
                debug!("Catalog fetch {} abandoned on shutdown", token);
                return;
            }
        };

        let msg = match result {
            Ok(countries) => Message::CatalogLoaded { token, countries },
            Err(e) => {
                error!("Catalog fetch {} failed: {}", token, e);
                Message::CatalogLoadFailed {
                    token,
                    error: e.to_fetch_error(),
                }
            }
        };

        if msg_tx.send(msg).await.is_err() {
            debug!("Message channel closed before catalog {} arrived", token);
        }
    });
}

fn spawn_country_fetch<C>(
    token: RequestToken,
    name: String,
    msg_tx: mpsc::Sender<Message>,
    provider: Arc<C>,
    mut shutdown_rx: watch::Receiver<bool>,
) where
    C: CatalogProvider + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let result = tokio::select! {
            result = provider.fetch_by_name(&name) => result,
            _ = shutdown_rx.changed() => {
                debug!("Lookup {} for {:?} abandoned on shutdown", token, name);
                return;
            }
        };

        let msg = match result {
            Ok(country) => Message::DetailLoaded {
                token,
                country: Box::new(country),
            },
            Err(e) => {
                match e.fetch_kind() {
                    FetchErrorKind::NotFound => debug!("Lookup {} for {:?}: {}", token, name, e),
                    _ => error!("Lookup {} for {:?} failed: {}", token, name, e),
                }
                Message::DetailLoadFailed {
                    token,
                    error: e.to_fetch_error(),
                }
            }
        };

        if msg_tx.send(msg).await.is_err() {
            debug!("Message channel closed before lookup {} arrived", token);
        }
    });
}
