//! Artist model.

use serde::{Deserialize, Serialize};

use super::common::{largest_image, Image, Wiki};
use super::tag::Tag;

/// An artist, as returned by `artist.*` methods or nested in other
/// payloads.
///
/// Nested occurrences usually carry only a name and sometimes an mbid;
/// every other field is then empty or zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Artist {
    /// Artist name.
    pub name: String,

    /// MusicBrainz ID, if known.
    pub mbid: Option<String>,

    /// Last.fm page URL.
    pub url: Option<String>,

    /// Artist images in various sizes.
    #[serde(default)]
    pub images: Vec<Image>,

    /// Number of distinct listeners.
    pub listeners: u64,

    /// Total scrobbles.
    pub playcount: u64,

    /// Similarity score in `[0, 1]`, only set in `getSimilar` results.
    pub match_score: Option<f64>,

    /// Whether a full-track stream is available.
    pub streamable: bool,

    /// Top tags.
    #[serde(default)]
    pub tags: Vec<Tag>,

    /// Similar artists embedded in `getInfo` results.
    #[serde(default)]
    pub similar: Vec<Artist>,

    /// Biography.
    pub bio: Option<Wiki>,
}

impl Artist {
    /// Create an artist with only a name.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Get the largest image available.
    pub fn largest_image(&self) -> Option<&Image> {
        largest_image(&self.images)
    }

    /// Tag names, in the order given by the service.
    pub fn tag_names(&self) -> Vec<&str> {
        self.tags.iter().map(|t| t.name.as_str()).collect()
    }
}
