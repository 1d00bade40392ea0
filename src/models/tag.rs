//! Tag model.

use serde::{Deserialize, Serialize};

use super::common::Wiki;

/// A user-applied tag (genre, mood, descriptor).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Tag {
    /// Tag name.
    pub name: String,

    /// Last.fm page URL.
    pub url: Option<String>,

    /// Weight or usage count, depending on the method.
    pub count: u64,

    /// Number of users who used the tag.
    pub reach: u64,

    /// Number of times the tag was applied.
    pub taggings: u64,

    /// Description.
    pub wiki: Option<Wiki>,
}

impl Tag {
    /// Create a tag with only a name.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}
