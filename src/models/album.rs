//! Album model.

use serde::{Deserialize, Serialize};

use super::artist::Artist;
use super::common::{largest_image, Image, Wiki};
use super::tag::Tag;
use super::track::Track;

/// An album.
///
/// `album.getInfo` gives the artist as a bare name while chart and search
/// payloads nest an object; both end up in [`Album::artist`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Album {
    /// Album title.
    pub name: String,

    /// Album artist.
    pub artist: Option<Artist>,

    /// MusicBrainz ID, if known.
    pub mbid: Option<String>,

    /// Last.fm page URL.
    pub url: Option<String>,

    /// Cover art in various sizes.
    #[serde(default)]
    pub images: Vec<Image>,

    /// Number of distinct listeners.
    pub listeners: u64,

    /// Total scrobbles.
    pub playcount: u64,

    /// Track listing, when the payload has one.
    #[serde(default)]
    pub tracks: Vec<Track>,

    /// Top tags.
    #[serde(default)]
    pub tags: Vec<Tag>,

    /// Album description.
    pub wiki: Option<Wiki>,
}

impl Album {
    /// Create an album with a title and artist name.
    pub fn new<S1: Into<String>, S2: Into<String>>(name: S1, artist: S2) -> Self {
        Self {
            name: name.into(),
            artist: Some(Artist::new(artist)),
            ..Default::default()
        }
    }

    /// Name of the album artist, if any.
    pub fn artist_name(&self) -> Option<&str> {
        self.artist.as_ref().map(|a| a.name.as_str())
    }

    /// Get the largest cover available.
    pub fn largest_image(&self) -> Option<&Image> {
        largest_image(&self.images)
    }

    /// Sum of known track durations, in seconds.
    pub fn duration(&self) -> u64 {
        self.tracks.iter().map(|t| u64::from(t.duration)).sum()
    }
}
