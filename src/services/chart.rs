//! `chart.*` methods: global charts.

use super::Paging;
use crate::api::{ApiClient, Params};
use crate::converters::{parse_page, require};
use crate::error::Result;
use crate::models::{Artist, Page, Tag, Track};

/// Global top lists.
#[derive(Debug, Clone, Copy)]
pub struct ChartService<'a> {
    client: &'a ApiClient,
}

impl<'a> ChartService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Most listened artists.
    pub async fn get_top_artists(&self, paging: Paging) -> Result<Page<Artist>> {
        let body = self
            .client
            .call("chart.getTopArtists", paging.apply(Params::new()))
            .await?;
        parse_page(require(&body, "artists")?, "artist")
    }

    /// Most listened tracks.
    pub async fn get_top_tracks(&self, paging: Paging) -> Result<Page<Track>> {
        let body = self
            .client
            .call("chart.getTopTracks", paging.apply(Params::new()))
            .await?;
        parse_page(require(&body, "tracks")?, "track")
    }

    /// Most used tags.
    pub async fn get_top_tags(&self, paging: Paging) -> Result<Page<Tag>> {
        let body = self
            .client
            .call("chart.getTopTags", paging.apply(Params::new()))
            .await?;
        parse_page(require(&body, "tags")?, "tag")
    }
}
