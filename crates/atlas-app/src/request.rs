//! Request generations for stale-response protection
//!
//! Each controller that issues remote requests owns a [`RequestGeneration`].
//! Every new request gets a fresh [`RequestToken`]; a response is applied only
//! if it carries the latest token. In-flight requests are never cancelled,
//! they are simply ignored once superseded.

use std::fmt;

/// Identifies one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic request counter for one controller
#[derive(Debug, Default)]
pub struct RequestGeneration {
    latest: u64,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token for a new request, superseding all earlier ones
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    /// Supersede every outstanding token without issuing a new request
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    /// True only for the most recently issued token
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest != 0 && token.0 == self.latest
    }
}
