//! Handler module - TEA update function and key handlers
//!
//! - `update`: main update() function and message dispatch
//! - `keys`: key event handlers per UI mode

pub(crate) mod keys;
pub(crate) mod update;


use crate::message::Message;
use crate::request::RequestToken;

pub use keys::handle_key;
pub use update::update;

/// Rows moved by PageUp/PageDown in the list
pub const PAGE_SIZE: usize = 10;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Fetch the full catalog for the list
    FetchCatalog { token: RequestToken },

    /// Look up a single country by display name for the detail route
    FetchCountry { token: RequestToken, name: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
