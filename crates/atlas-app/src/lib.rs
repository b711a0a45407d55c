//! atlas-app - Application state and orchestration for Atlas Explorer
//!
//! This crate implements the TEA (The Elm Architecture) pattern: [`AppState`]
//! is the model, [`Message`] the input, [`handler::update`] the pure
//! transition function and [`UpdateAction`] the side effects, which
//! [`actions`] runs as tokio tasks whose results come back as messages.
//!
//! The two view controllers live here as well: [`ListViewController`] for
//! the catalog list and [`DetailViewController`] for the single-country
//! route. Both guard against stale responses with per-controller request
//! generations.

pub mod actions;
pub mod config;
pub mod detail_view;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod list_view;
pub mod message;
pub mod process;
pub mod request;
pub mod signals;
pub mod state;
pub mod theme;

// Re-export primary types
pub use detail_view::{DetailReadModel, DetailViewController};
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use list_view::{ListReadModel, ListViewController, LIST_ERROR_MESSAGE, NO_RESULTS_MESSAGE};
pub use message::Message;
pub use request::{RequestGeneration, RequestToken};
pub use state::{AppState, UiMode};
pub use theme::{ThemeMode, ThemeStore};
