//! `track.*` methods, including scrobbling.

use tracing::{debug, info};

use super::{required, Paging};
use crate::api::{ApiClient, HttpMethod, Params};
use crate::builders::{Scrobble, ScrobbleBatch, TagList};
use crate::converters::{parse_search_page, require, FromApi};
use crate::error::Result;
use crate::models::{Page, ScrobbleResult, Session, Track};

/// Track lookups, loves, tags and scrobbles.
#[derive(Debug, Clone, Copy)]
pub struct TrackService<'a> {
    client: &'a ApiClient,
}

impl<'a> TrackService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Get track metadata.
    ///
    /// With `username`, the user's play count and loved flag are included.
    pub async fn get_info(
        &self,
        artist: &str,
        track: &str,
        username: Option<&str>,
    ) -> Result<Track> {
        let params = Params::new()
            .with("artist", required("artist", artist)?)
            .with("track", required("track", track)?)
            .with("username", username);
        let body = self.client.call("track.getInfo", params).await?;

        let mut track = Track::from_api(require(&body, "track")?)?;
        // track.getInfo reports milliseconds
        track.duration /= 1000;
        Ok(track)
    }

    /// Search tracks by title, optionally narrowed to an artist.
    pub async fn search(
        &self,
        track: &str,
        artist: Option<&str>,
        paging: Paging,
    ) -> Result<Page<Track>> {
        let params = Params::new()
            .with("track", required("track", track)?)
            .with("artist", artist);
        let body = self.client.call("track.search", paging.apply(params)).await?;
        parse_search_page(require(&body, "results")?, "trackmatches", "track")
    }

    /// Mark a track as loved.
    pub async fn love(&self, artist: &str, track: &str, session: &Session) -> Result<()> {
        self.write("track.love", artist, track, session).await
    }

    /// Remove a track from the loved list.
    pub async fn unlove(&self, artist: &str, track: &str, session: &Session) -> Result<()> {
        self.write("track.unlove", artist, track, session).await
    }

    async fn write(
        &self,
        method: &str,
        artist: &str,
        track: &str,
        session: &Session,
    ) -> Result<()> {
        let params = Params::new()
            .with("artist", required("artist", artist)?)
            .with("track", required("track", track)?);
        self.client
            .signed_call(method, params, Some(session), HttpMethod::Post)
            .await?;
        Ok(())
    }

    /// Report the track the user started listening to.
    ///
    /// The timestamp of `scrobble` is not sent.
    pub async fn update_now_playing(&self, scrobble: &Scrobble, session: &Session) -> Result<()> {
        required("artist", &scrobble.artist)?;
        required("track", &scrobble.track)?;
        self.client
            .signed_call(
                "track.updateNowPlaying",
                scrobble.now_playing_params(),
                Some(session),
                HttpMethod::Post,
            )
            .await?;
        debug!(artist = %scrobble.artist, track = %scrobble.track, "Now playing updated");
        Ok(())
    }

    /// Submit a batch of plays.
    ///
    /// An empty batch is a no-op and returns zero counts.
    pub async fn scrobble(
        &self,
        batch: &ScrobbleBatch,
        session: &Session,
    ) -> Result<ScrobbleResult> {
        if batch.is_empty() {
            debug!("Empty scrobble batch, nothing to send");
            return Ok(ScrobbleResult::default());
        }

        let body = self
            .client
            .signed_call(
                "track.scrobble",
                batch.to_params(),
                Some(session),
                HttpMethod::Post,
            )
            .await?;

        let result = ScrobbleResult::from_api(require(&body, "scrobbles")?)?;
        info!(
            accepted = result.accepted,
            ignored = result.ignored,
            "Scrobble batch submitted"
        );
        Ok(result)
    }

    /// Tag a track. Up to ten tags per call.
    pub async fn add_tags<I, S>(
        &self,
        artist: &str,
        track: &str,
        tags: I,
        session: &Session,
    ) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags = TagList::new(tags)?;
        let params = Params::new()
            .with("artist", required("artist", artist)?)
            .with("track", required("track", track)?)
            .with("tags", tags.to_param());
        self.client
            .signed_call("track.addTags", params, Some(session), HttpMethod::Post)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::RecordingHttpClient;
    use crate::error::LastfmError;
    use crate::services::test_support::client;
    use serde_json::json;
    use std::sync::Arc;

    fn session() -> Session {
        Session::new("rj", "session-key", 0)
    }

    #[tokio::test]
    async fn test_get_info_duration_in_seconds() {
        let http = Arc::new(RecordingHttpClient::json(json!({
            "track": {
                "name": "Believe",
                "duration": "239000",
                "artist": {"name": "Cher"},
                "album": {"title": "Believe", "artist": "Cher"},
                "userloved": "1",
                "toptags": {"tag": {"name": "pop"}}
            }
        })));
        let client = client(http.clone());

        let track = client.track().get_info("Cher", "Believe", Some("rj")).await.unwrap();
        assert_eq!(track.duration, 239);
        assert_eq!(track.duration_string(), "3:59");
        assert!(track.loved);
        assert_eq!(track.album_name(), Some("Believe"));
        assert_eq!(track.tags.len(), 1);
        assert_eq!(http.last_request().unwrap().param("username"), Some("rj"));
    }

    #[tokio::test]
    async fn test_love_is_signed_post() {
        let http = Arc::new(RecordingHttpClient::json(json!({})));
        let client = client(http.clone());
        client.track().love("Cher", "Believe", &session()).await.unwrap();
        client.track().unlove("Cher", "Believe", &session()).await.unwrap();

        let requests = http.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].param("method"), Some("track.love"));
        assert_eq!(requests[1].param("method"), Some("track.unlove"));
        assert!(requests.iter().all(|r| r.method == HttpMethod::Post));
        assert!(requests.iter().all(|r| r.param("sk") == Some("session-key")));
    }

    #[tokio::test]
    async fn test_scrobble_batch() {
        let http = Arc::new(RecordingHttpClient::json(json!({
            "scrobbles": {
                "@attr": {"accepted": 2, "ignored": 0},
                "scrobble": []
            }
        })));
        let client = client(http.clone());
        let batch = ScrobbleBatch::new()
            .with(Scrobble::new("Cher", "Believe", 1_300_000_000))
            .unwrap()
            .with(Scrobble::new("Madonna", "Vogue", 1_300_000_300).with_album("I'm Breathless"))
            .unwrap();

        let result = client.track().scrobble(&batch, &session()).await.unwrap();
        assert_eq!(result.accepted, 2);
        assert_eq!(result.total(), 2);

        let request = http.last_request().unwrap();
        assert_eq!(request.param("artist[1]"), Some("Madonna"));
        assert_eq!(request.param("timestamp[0]"), Some("1300000000"));
        assert_eq!(request.param("album[1]"), Some("I'm Breathless"));
        assert!(request.param("album[0]").is_none());
    }

    #[test]
    fn test_empty_scrobble_batch_skips_network() {
        let http = Arc::new(RecordingHttpClient::json(json!({})));
        let client = client(http.clone());

        let batch = ScrobbleBatch::new();
        let result = tokio_test::block_on(client.track().scrobble(&batch, &session())).unwrap();
        assert_eq!(result, ScrobbleResult::default());
        assert_eq!(http.call_count(), 0);
    }

    #[tokio::test]
    async fn test_update_now_playing() {
        let http = Arc::new(RecordingHttpClient::json(json!({"nowplaying": {}})));
        let client = client(http.clone());
        let scrobble = Scrobble::new("Cher", "Believe", 42).with_duration(239);
        client.track().update_now_playing(&scrobble, &session()).await.unwrap();

        let request = http.last_request().unwrap();
        assert_eq!(request.param("method"), Some("track.updateNowPlaying"));
        assert_eq!(request.param("duration"), Some("239"));
        assert!(request.param("timestamp").is_none());
    }

    #[tokio::test]
    async fn test_invalid_session_key() {
        let http = Arc::new(RecordingHttpClient::with_response(
            403,
            r#"{"error": 9, "message": "Invalid session key - Please re-authenticate"}"#,
        ));
        let client = client(http);
        let err = client.track().love("Cher", "Believe", &session()).await.unwrap_err();
        assert!(err.is_auth_error());
        assert!(matches!(err, LastfmError::Api { code: 9, .. }));
    }

    #[tokio::test]
    async fn test_search() {
        let http = Arc::new(RecordingHttpClient::json(json!({
            "results": {
                "opensearch:totalResults": "1",
                "opensearch:startIndex": "0",
                "opensearch:itemsPerPage": "30",
                "trackmatches": {"track": {"name": "Believe", "artist": "Cher", "listeners": "100"}}
            }
        })));
        let client = client(http.clone());
        let page = client.track().search("Believe", Some("Cher"), Paging::default()).await.unwrap();
        assert_eq!(page.items[0].artist_name(), Some("Cher"));
        assert_eq!(page.items[0].listeners, 100);
        assert_eq!(page.page, 1);
        assert!(!page.has_next());
    }
}
