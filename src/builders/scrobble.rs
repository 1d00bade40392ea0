//! Scrobble submissions.
//!
//! `track.scrobble` accepts up to ten plays per call. Each play's fields
//! are sent with a positional suffix: `artist[0]`, `track[0]`,
//! `timestamp[0]`, `artist[1]`, ...

use crate::api::{ParamValue, Params};
use crate::error::{LastfmError, Result};

/// Maximum plays accepted by one `track.scrobble` call.
pub const MAX_SCROBBLES_PER_CALL: usize = 10;

/// One track play.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scrobble {
    /// Artist name.
    pub artist: String,
    /// Track title.
    pub track: String,
    /// When the play started, Unix timestamp (UTC).
    pub timestamp: i64,
    /// Album title.
    pub album: Option<String>,
    /// Album artist, when different from the track artist.
    pub album_artist: Option<String>,
    /// Position on the album.
    pub track_number: Option<u32>,
    /// Length in seconds.
    pub duration: Option<u32>,
    /// MusicBrainz track ID.
    pub mbid: Option<String>,
    /// Whether the user picked the track (as opposed to a radio stream).
    pub chosen_by_user: Option<bool>,
}

impl Scrobble {
    /// Create a play with the mandatory fields.
    pub fn new<S1: Into<String>, S2: Into<String>>(artist: S1, track: S2, timestamp: i64) -> Self {
        Self {
            artist: artist.into(),
            track: track.into(),
            timestamp,
            ..Default::default()
        }
    }

    /// Set album.
    pub fn with_album<S: Into<String>>(mut self, album: S) -> Self {
        self.album = Some(album.into());
        self
    }

    /// Set album artist.
    pub fn with_album_artist<S: Into<String>>(mut self, album_artist: S) -> Self {
        self.album_artist = Some(album_artist.into());
        self
    }

    /// Set track number.
    pub fn with_track_number(mut self, track_number: u32) -> Self {
        self.track_number = Some(track_number);
        self
    }

    /// Set duration in seconds.
    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Set MusicBrainz ID.
    pub fn with_mbid<S: Into<String>>(mut self, mbid: S) -> Self {
        self.mbid = Some(mbid.into());
        self
    }

    /// Set whether the user chose the track.
    pub fn with_chosen_by_user(mut self, chosen: bool) -> Self {
        self.chosen_by_user = Some(chosen);
        self
    }

    /// Fields shared by scrobbles and now-playing updates, without suffix.
    fn fields(&self) -> Vec<(&'static str, ParamValue)> {
        vec![
            ("artist", self.artist.as_str().into()),
            ("track", self.track.as_str().into()),
            ("album", self.album.clone().into()),
            ("albumArtist", self.album_artist.clone().into()),
            ("trackNumber", self.track_number.into()),
            ("duration", self.duration.into()),
            ("mbid", self.mbid.clone().into()),
        ]
    }

    /// Parameters for `track.updateNowPlaying`.
    pub fn now_playing_params(&self) -> Params {
        self.fields().into_iter().collect()
    }

    fn push_indexed(&self, index: usize, params: &mut Params) {
        let mut fields = self.fields();
        fields.insert(2, ("timestamp", self.timestamp.into()));
        fields.push(("chosenByUser", self.chosen_by_user.into()));

        for (name, value) in fields {
            params.insert(format!("{}[{}]", name, index), value);
        }
    }
}

/// Accumulates plays for a single `track.scrobble` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrobbleBatch {
    scrobbles: Vec<Scrobble>,
}

impl ScrobbleBatch {
    /// Create an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a batch from a list of plays.
    ///
    /// # Errors
    /// Returns `LastfmError::InvalidInput` for more than ten plays.
    pub fn from_scrobbles(scrobbles: Vec<Scrobble>) -> Result<Self> {
        check_len(scrobbles.len())?;
        Ok(Self { scrobbles })
    }

    /// Append a play.
    ///
    /// # Errors
    /// Returns `LastfmError::InvalidInput` if the batch is already full.
    pub fn add(&mut self, scrobble: Scrobble) -> Result<()> {
        check_len(self.scrobbles.len() + 1)?;
        self.scrobbles.push(scrobble);
        Ok(())
    }

    /// Append a play, returning the updated batch.
    pub fn with(mut self, scrobble: Scrobble) -> Result<Self> {
        self.add(scrobble)?;
        Ok(self)
    }

    /// Number of plays in the batch.
    pub fn count(&self) -> usize {
        self.scrobbles.len()
    }

    /// Whether the batch has no plays.
    pub fn is_empty(&self) -> bool {
        self.scrobbles.is_empty()
    }

    /// The plays, in submission order.
    pub fn scrobbles(&self) -> &[Scrobble] {
        &self.scrobbles
    }

    /// Flatten into indexed parameters. Unset optional fields are `Null`
    /// and disappear when the parameters are canonicalized.
    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        for (index, scrobble) in self.scrobbles.iter().enumerate() {
            scrobble.push_indexed(index, &mut params);
        }
        params
    }
}

fn check_len(len: usize) -> Result<()> {
    if len > MAX_SCROBBLES_PER_CALL {
        return Err(LastfmError::InvalidInput(format!(
            "at most {} scrobbles per call, got {}",
            MAX_SCROBBLES_PER_CALL, len
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(params: &Params) -> Vec<String> {
        params.canonicalize().into_iter().map(|(k, _)| k).collect()
    }

    #[test]
    fn test_two_tracks_flatten_with_indexes() {
        let mut batch = ScrobbleBatch::new();
        batch.add(Scrobble::new("Cher", "Believe", 1_300_000_000)).unwrap();
        batch.add(Scrobble::new("Madonna", "Vogue", 1_300_000_300)).unwrap();

        assert_eq!(batch.count(), 2);
        assert_eq!(
            keys(&batch.to_params()),
            vec![
                "artist[0]",
                "track[0]",
                "timestamp[0]",
                "artist[1]",
                "track[1]",
                "timestamp[1]"
            ]
        );
    }

    #[test]
    fn test_optional_fields_are_indexed() {
        let batch = ScrobbleBatch::new()
            .with(
                Scrobble::new("Cher", "Believe", 1)
                    .with_album("Believe")
                    .with_duration(239)
                    .with_chosen_by_user(false),
            )
            .unwrap();
        let canonical = batch.to_params().canonicalize();
        assert!(canonical.contains(&("album[0]".to_string(), "Believe".to_string())));
        assert!(canonical.contains(&("duration[0]".to_string(), "239".to_string())));
        assert!(canonical.contains(&("chosenByUser[0]".to_string(), "0".to_string())));
        assert_eq!(canonical.len(), 6);
    }

    #[test]
    fn test_eleventh_scrobble_rejected() {
        let mut batch = ScrobbleBatch::new();
        for i in 0..MAX_SCROBBLES_PER_CALL {
            batch.add(Scrobble::new("a", "t", i as i64)).unwrap();
        }
        let err = batch.add(Scrobble::new("a", "t", 99)).unwrap_err();
        assert!(matches!(err, LastfmError::InvalidInput(_)));
        assert_eq!(batch.count(), MAX_SCROBBLES_PER_CALL);

        let too_many = vec![Scrobble::new("a", "t", 0); 11];
        assert!(ScrobbleBatch::from_scrobbles(too_many).is_err());
    }

    #[test]
    fn test_empty_batch_has_no_params() {
        let batch = ScrobbleBatch::new();
        assert!(batch.is_empty());
        assert!(batch.to_params().canonicalize().is_empty());
    }

    #[test]
    fn test_now_playing_params_have_no_index_or_timestamp() {
        let params = Scrobble::new("Cher", "Believe", 5)
            .with_track_number(1)
            .now_playing_params();
        assert_eq!(keys(&params), vec!["artist", "track", "trackNumber"]);
    }
}
