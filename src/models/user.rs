//! User model.

use serde::{Deserialize, Serialize};

use super::common::Image;

/// A Last.fm user profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Username.
    pub name: String,

    /// Display name, if set.
    pub realname: Option<String>,

    /// Profile URL.
    pub url: Option<String>,

    /// Country, if public.
    pub country: Option<String>,

    /// Age, 0 when hidden.
    pub age: u32,

    /// Total scrobbles.
    pub playcount: u64,

    /// Number of playlists.
    pub playlists: u32,

    /// Whether the user has a paid subscription.
    pub subscriber: bool,

    /// Registration time as a Unix timestamp.
    pub registered: Option<i64>,

    /// Avatar images.
    #[serde(default)]
    pub images: Vec<Image>,
}

impl User {
    /// Create a user with only a name.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}
