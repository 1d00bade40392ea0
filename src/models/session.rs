//! Authenticated user session.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A session obtained through the auth flow.
///
/// The key does not expire unless the user revokes the application, so it
/// is usually stored and reused.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// Username the session belongs to.
    pub name: String,

    /// Session key, sent as `sk`.
    pub key: String,

    /// 1 if the user is a subscriber, else 0.
    pub subscriber: i32,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("name", &self.name)
            .field("key", &"[REDACTED]")
            .field("subscriber", &self.subscriber)
            .finish()
    }
}

impl Session {
    /// Rebuild a session from a stored name and key.
    pub fn new<S1: Into<String>, S2: Into<String>>(name: S1, key: S2, subscriber: i32) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            subscriber,
        }
    }

    /// Whether the user has a paid subscription.
    pub fn is_subscriber(&self) -> bool {
        self.subscriber != 0
    }
}
