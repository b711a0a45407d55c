//! Fetch lifecycle for a single remote operation

use serde::Serialize;

/// Category of a failed remote operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchErrorKind {
    /// Transport failure or non-success HTTP status
    Network,
    /// The name lookup returned no matches
    NotFound,
    /// The response body was not the expected JSON
    MalformedResponse,
}

/// Cloneable summary of a failed fetch.
///
/// [`crate::Error`] owns non-cloneable sources (IO, serde), so results are
/// reduced to this before being posted back to the application loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchError {
    pub kind: FetchErrorKind,
    pub message: String,
}

impl FetchError {
    pub fn new(kind: FetchErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(FetchErrorKind::Network, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(FetchErrorKind::NotFound, message)
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == FetchErrorKind::NotFound
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// State of one remote operation.
///
/// Exactly one variant holds at a time. A request moves forward only
/// (`Loading` to `Error` or `Ready`); issuing a new request restarts at
/// `Loading`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Error(FetchError),
    Ready(T),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

impl<T> FetchState<T> {
    /// Restart at `Loading`, dropping any previous data or error
    pub fn begin(&mut self) {
        *self = FetchState::Loading;
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, FetchState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, FetchState::Ready(_))
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            FetchState::Error(e) => Some(e),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Ready(data) => Some(data),
            _ => None,
        }
    }

    /// Settle an in-flight request with its outcome
    pub fn settle(&mut self, outcome: std::result::Result<T, FetchError>) {
        *self = match outcome {
            Ok(data) => FetchState::Ready(data),
            Err(e) => FetchState::Error(e),
        };
    }

    /// Short lifecycle label for logs and headless output
    pub fn label(&self) -> &'static str {
        match self {
            FetchState::Idle => "idle",
            FetchState::Loading => "loading",
            FetchState::Error(_) => "error",
            FetchState::Ready(_) => "ready",
        }
    }
}
