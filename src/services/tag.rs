//! `tag.*` methods.

use super::{required, Paging};
use crate::api::{ApiClient, Params};
use crate::converters::{nested_list, parse_list, parse_page, require, FromApi};
use crate::error::Result;
use crate::models::{Artist, Page, Tag};

/// Tag lookups.
#[derive(Debug, Clone, Copy)]
pub struct TagService<'a> {
    client: &'a ApiClient,
}

impl<'a> TagService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Get tag metadata and wiki.
    pub async fn get_info(&self, tag: &str) -> Result<Tag> {
        let tag = required("tag", tag)?;
        let body = self
            .client
            .call("tag.getInfo", Params::new().with("tag", tag))
            .await?;
        Tag::from_api(require(&body, "tag")?)
    }

    /// Get the artists most tagged with `tag`.
    pub async fn get_top_artists(&self, tag: &str, paging: Paging) -> Result<Page<Artist>> {
        let tag = required("tag", tag)?;
        let body = self
            .client
            .call("tag.getTopArtists", paging.apply(Params::new().with("tag", tag)))
            .await?;
        parse_page(require(&body, "topartists")?, "artist")
    }

    /// Get tags similar to `tag`.
    pub async fn get_similar(&self, tag: &str) -> Result<Vec<Tag>> {
        let tag = required("tag", tag)?;
        let body = self
            .client
            .call("tag.getSimilar", Params::new().with("tag", tag))
            .await?;
        parse_list(nested_list(&body, "similartags", "tag"))
    }
}
