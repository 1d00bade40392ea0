//! `album.*` methods.

use super::{required, Paging};
use crate::api::{ApiClient, HttpMethod, Params};
use crate::builders::TagList;
use crate::converters::{parse_search_page, require, FromApi};
use crate::error::Result;
use crate::models::{Album, Page, Session};

/// Album lookups and tagging.
#[derive(Debug, Clone, Copy)]
pub struct AlbumService<'a> {
    client: &'a ApiClient,
}

impl<'a> AlbumService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Get album metadata and tracklist.
    ///
    /// With `username`, the user's play count is included.
    pub async fn get_info(
        &self,
        artist: &str,
        album: &str,
        username: Option<&str>,
    ) -> Result<Album> {
        let params = Params::new()
            .with("artist", required("artist", artist)?)
            .with("album", required("album", album)?)
            .with("username", username);
        let body = self.client.call("album.getInfo", params).await?;
        Album::from_api(require(&body, "album")?)
    }

    /// Search albums by title.
    pub async fn search(&self, album: &str, paging: Paging) -> Result<Page<Album>> {
        let album = required("album", album)?;
        let body = self
            .client
            .call("album.search", paging.apply(Params::new().with("album", album)))
            .await?;
        parse_search_page(require(&body, "results")?, "albummatches", "album")
    }

    /// Tag an album. Up to ten tags per call.
    pub async fn add_tags<I, S>(
        &self,
        artist: &str,
        album: &str,
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
            .with("album", required("album", album)?)
            .with("tags", tags.to_param());
        self.client
            .signed_call("album.addTags", params, Some(session), HttpMethod::Post)
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

    #[tokio::test]
    async fn test_get_info_with_tracks() {
        let http = Arc::new(RecordingHttpClient::json(json!({
            "album": {
                "name": "Believe",
                "artist": "Cher",
                "listeners": "",
                "playcount": "2202",
                "image": [{"#text": "http://img/s.png", "size": "small"}, {"#text": "http://img/xl.png", "size": "extralarge"}],
                "tracks": {"track": [
                    {"name": "Believe", "duration": "239", "@attr": {"rank": "1"}},
                    {"name": "The Power", "duration": "236", "@attr": {"rank": "2"}}
                ]}
            }
        })));
        let client = client(http.clone());

        let album = client.album().get_info("Cher", "Believe", None).await.unwrap();
        assert_eq!(album.name, "Believe");
        assert_eq!(album.artist_name(), Some("Cher"));
        assert_eq!(album.listeners, 0);
        assert_eq!(album.tracks.len(), 2);
        assert_eq!(album.duration(), 475);
        assert_eq!(album.largest_image().unwrap().url, "http://img/xl.png");
        assert!(http.last_request().unwrap().param("username").is_none());
    }

    #[tokio::test]
    async fn test_non_numeric_count_is_rejected() {
        let http = Arc::new(RecordingHttpClient::json(json!({
            "album": {"name": "Believe", "playcount": "lots"}
        })));
        let client = client(http);
        let err = client.album().get_info("Cher", "Believe", None).await.unwrap_err();
        assert!(matches!(err, LastfmError::InvalidPayload(_)));
    }

    #[tokio::test]
    async fn test_blank_album_rejected_locally() {
        let http = Arc::new(RecordingHttpClient::json(json!({})));
        let client = client(http.clone());
        assert!(client.album().get_info("Cher", " ", None).await.is_err());
        assert_eq!(http.call_count(), 0);
    }

    #[tokio::test]
    async fn test_add_tags() {
        let http = Arc::new(RecordingHttpClient::json(json!({})));
        let client = client(http.clone());
        let session = Session::new("rj", "session-key", 0);
        client
            .album()
            .add_tags("Cher", "Believe", vec!["pop".to_string()], &session)
            .await
            .unwrap();
        let request = http.last_request().unwrap();
        assert_eq!(request.param("method"), Some("album.addTags"));
        assert_eq!(request.param("album"), Some("Believe"));
        assert_eq!(request.param("tags"), Some("pop"));
    }
}
