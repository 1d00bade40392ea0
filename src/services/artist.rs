//! `artist.*` methods.

use super::{required, Paging};
use crate::api::{ApiClient, HttpMethod, Params};
use crate::builders::TagList;
use crate::converters::{nested_list, parse_list, parse_page, parse_search_page, require, FromApi};
use crate::error::Result;
use crate::models::{Artist, Page, Session, Tag, Track};

/// Artist lookups and tagging.
#[derive(Debug, Clone, Copy)]
pub struct ArtistService<'a> {
    client: &'a ApiClient,
}

impl<'a> ArtistService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Get artist metadata, including bio, tags and similar artists.
    pub async fn get_info(&self, artist: &str) -> Result<Artist> {
        let artist = required("artist", artist)?;
        let body = self
            .client
            .call("artist.getInfo", Params::new().with("artist", artist))
            .await?;
        Artist::from_api(require(&body, "artist")?)
    }

    /// Get artist metadata by MusicBrainz ID.
    pub async fn get_info_by_mbid(&self, mbid: &str) -> Result<Artist> {
        let mbid = required("mbid", mbid)?;
        let body = self
            .client
            .call("artist.getInfo", Params::new().with("mbid", mbid))
            .await?;
        Artist::from_api(require(&body, "artist")?)
    }

    /// Get similar artists, most similar first.
    pub async fn get_similar(&self, artist: &str, limit: Option<u32>) -> Result<Vec<Artist>> {
        let artist = required("artist", artist)?;
        let body = self
            .client
            .call(
                "artist.getSimilar",
                Params::new().with("artist", artist).with("limit", limit),
            )
            .await?;
        parse_list(nested_list(&body, "similarartists", "artist"))
    }

    /// Get the most applied tags.
    pub async fn get_top_tags(&self, artist: &str) -> Result<Vec<Tag>> {
        let artist = required("artist", artist)?;
        let body = self
            .client
            .call("artist.getTopTags", Params::new().with("artist", artist))
            .await?;
        parse_list(nested_list(&body, "toptags", "tag"))
    }

    /// Get the artist's most played tracks.
    pub async fn get_top_tracks(&self, artist: &str, paging: Paging) -> Result<Page<Track>> {
        let artist = required("artist", artist)?;
        let body = self
            .client
            .call(
                "artist.getTopTracks",
                paging.apply(Params::new().with("artist", artist)),
            )
            .await?;
        parse_page(require(&body, "toptracks")?, "track")
    }

    /// Search artists by name.
    pub async fn search(&self, artist: &str, paging: Paging) -> Result<Page<Artist>> {
        let artist = required("artist", artist)?;
        let body = self
            .client
            .call(
                "artist.search",
                paging.apply(Params::new().with("artist", artist)),
            )
            .await?;
        parse_search_page(require(&body, "results")?, "artistmatches", "artist")
    }

    /// Tag an artist. Up to ten tags per call.
    pub async fn add_tags<I, S>(&self, artist: &str, tags: I, session: &Session) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags = TagList::new(tags)?;
        let artist = required("artist", artist)?;
        self.client
            .signed_call(
                "artist.addTags",
                Params::new()
                    .with("artist", artist)
                    .with("tags", tags.to_param()),
                Some(session),
                HttpMethod::Post,
            )
            .await?;
        Ok(())
    }

    /// Remove one of the user's tags from an artist.
    pub async fn remove_tag(&self, artist: &str, tag: &str, session: &Session) -> Result<()> {
        let artist = required("artist", artist)?;
        let tag = required("tag", tag)?;
        self.client
            .signed_call(
                "artist.removeTag",
                Params::new().with("artist", artist).with("tag", tag),
                Some(session),
                HttpMethod::Post,
            )
            .await?;
        Ok(())
    }
}
