//! Track model.

use serde::{Deserialize, Serialize};

use super::album::Album;
use super::artist::Artist;
use super::common::{largest_image, Image, Wiki};
use super::tag::Tag;

/// A track (song).
///
/// The same type is used for catalogue lookups and for listening-history
/// entries; the latter fill in [`played_at`](Track::played_at) or
/// [`now_playing`](Track::now_playing).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Track {
    /// Track title.
    pub name: String,

    /// Performing artist.
    pub artist: Option<Artist>,

    /// Album the track appears on.
    pub album: Option<Box<Album>>,

    /// MusicBrainz ID, if known.
    pub mbid: Option<String>,

    /// Last.fm page URL.
    pub url: Option<String>,

    /// Duration in seconds; 0 when unknown.
    pub duration: u32,

    /// Number of distinct listeners.
    pub listeners: u64,

    /// Total scrobbles.
    pub playcount: u64,

    /// Scrobbles by the requesting user, when known.
    pub user_playcount: Option<u64>,

    /// Whether the requesting user loved the track.
    pub loved: bool,

    /// Position in a chart or album listing.
    pub rank: Option<u32>,

    /// Unix timestamp of the play, for history entries.
    pub played_at: Option<i64>,

    /// Whether this entry is the track playing right now.
    pub now_playing: bool,

    /// Images (album art) attached to the entry.
    #[serde(default)]
    pub images: Vec<Image>,

    /// Top tags.
    #[serde(default)]
    pub tags: Vec<Tag>,

    /// Track description.
    pub wiki: Option<Wiki>,
}

impl Track {
    /// Create a track with a title and artist name.
    pub fn new<S1: Into<String>, S2: Into<String>>(name: S1, artist: S2) -> Self {
        Self {
            name: name.into(),
            artist: Some(Artist::new(artist)),
            ..Default::default()
        }
    }

    /// Name of the performing artist, if any.
    pub fn artist_name(&self) -> Option<&str> {
        self.artist.as_ref().map(|a| a.name.as_str())
    }

    /// Title of the album, if any.
    pub fn album_name(&self) -> Option<&str> {
        self.album.as_ref().map(|a| a.name.as_str())
    }

    /// Get the largest image available, falling back to the album cover.
    pub fn largest_image(&self) -> Option<&Image> {
        largest_image(&self.images).or_else(|| self.album.as_ref()?.largest_image())
    }

    /// Duration formatted as `m:ss`.
    pub fn duration_string(&self) -> String {
        format!("{}:{:02}", self.duration / 60, self.duration % 60)
    }
}

/// Outcome of a scrobble submission.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScrobbleResult {
    /// Plays the service recorded.
    pub accepted: u32,

    /// Plays the service dropped (too old, duplicate, filtered).
    pub ignored: u32,
}

impl ScrobbleResult {
    /// Total plays submitted, capped at `u32::MAX`.
    pub fn total(&self) -> u32 {
        self.accepted.saturating_add(self.ignored)
    }
}
