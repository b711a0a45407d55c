//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state, the message channel, the catalog provider
//! and the shutdown signal. It is the composition root: the [`ThemeStore`] is
//! created here from settings and injected into [`AppState`].

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, watch};
use tracing::{debug, info};

use atlas_client::CatalogProvider;
use atlas_core::FetchState;

use crate::config::Settings;
use crate::detail_view::DetailReadModel;
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;
use crate::theme::ThemeStore;

/// Lightweight snapshot of state for change detection.
#[derive(Debug, Clone, PartialEq, Eq)]
struct StateSnapshot {
    list_phase: &'static str,
    detail_phase: &'static str,
    detail_route: Option<String>,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            list_phase: state.list.fetch_state().label(),
            detail_phase: state.detail.fetch_state().label(),
            detail_route: state.detail.route().map(str::to_string),
        }
    }
}

/// Orchestration engine for Atlas Explorer.
pub struct Engine<C> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the message channel.
    /// Clone this to give to input sources (signal handler, fetch tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Sender for the shutdown signal. Send `true` to stop background tasks.
    pub shutdown_tx: watch::Sender<bool>,

    /// Receiver for the shutdown signal. Clone for background tasks.
    pub shutdown_rx: watch::Receiver<bool>,

    provider: Arc<C>,

    event_tx: broadcast::Sender<EngineEvent>,
}

impl<C> Engine<C>
where
    C: CatalogProvider + Send + Sync + 'static,
{
    /// Create an engine around `provider`.
    ///
    /// Builds the theme store from settings, creates the message channel
    /// (capacity 256) and spawns the signal handler. Must be called inside a
    /// tokio runtime.
    pub fn new(provider: C, settings: Settings) -> Self {
        let theme = ThemeStore::new(settings.ui.theme);
        let state = AppState::new(settings, theme);

        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let (event_tx, _) = broadcast::channel(256);

        signals::spawn_signal_handler(msg_tx.clone());

        Self {
            state,
            msg_tx,
            msg_rx,
            shutdown_tx,
            shutdown_rx,
            provider: Arc::new(provider),
            event_tx,
        }
    }

    /// Mount the list view: start the catalog fetch
    pub fn mount(&mut self) {
        info!("Mounting catalog list");
        self.process_message(Message::LoadCatalog);
    }

    /// Subscribe to engine events emitted after each processed message.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(
            &mut self.state,
            msg,
            &self.msg_tx,
            &self.provider,
            &self.shutdown_rx,
        );

        let post = StateSnapshot::capture(&self.state);
        if pre != post {
            self.emit_events(&pre, &post);
        }
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message and process it.
    ///
    /// Returns false once the channel is closed.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Signal background fetches to stop.
    pub fn shutdown(&mut self) {
        self.emit(EngineEvent::Shutdown);
        let _ = self.shutdown_tx.send(true);
        debug!("Engine shut down");
    }

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if pre.list_phase != post.list_phase {
            match self.state.list.fetch_state() {
                FetchState::Loading => self.emit(EngineEvent::CatalogLoading),
                FetchState::Ready(catalog) => self.emit(EngineEvent::CatalogLoaded {
                    total: catalog.len(),
                    visible: self.state.list.visible_records().len(),
                }),
                FetchState::Error(e) => {
                    let message = self
                        .state
                        .list
                        .read_model()
                        .error_message
                        .unwrap_or_default()
                        .to_string();
                    self.emit(EngineEvent::CatalogFailed {
                        message,
                        cause: e.message.clone(),
                    })
                }
                FetchState::Idle => {}
            }
        }

        if pre.detail_phase != post.detail_phase || pre.detail_route != post.detail_route {
            match self.state.detail.read_model() {
                DetailReadModel::Loading { name } => self.emit(EngineEvent::DetailLoading {
                    name: name.to_string(),
                }),
                DetailReadModel::Ready(country) => self.emit(EngineEvent::DetailLoaded {
                    country: Box::new(country.clone()),
                }),
                DetailReadModel::NotFound { name } => self.emit(EngineEvent::DetailNotFound {
                    name: name.to_string(),
                }),
                DetailReadModel::Error { name, message } => {
                    self.emit(EngineEvent::DetailFailed {
                        name: name.to_string(),
                        message: message.to_string(),
                    })
                }
                DetailReadModel::Idle => {}
            }
        }
    }

    /// send() fails only when nobody is subscribed.
    fn emit(&self, event: EngineEvent) {
        let _ = self.event_tx.send(event);
    }
}
