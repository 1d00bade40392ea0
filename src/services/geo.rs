//! `geo.*` methods.

use super::{required, Paging};
use crate::api::{ApiClient, Params};
use crate::converters::{parse_page, require};
use crate::error::Result;
use crate::models::{Event, Page};

/// Location based lookups.
#[derive(Debug, Clone, Copy)]
pub struct GeoService<'a> {
    client: &'a ApiClient,
}

impl<'a> GeoService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Upcoming events near a location (city or country name).
    pub async fn get_events(&self, location: &str, paging: Paging) -> Result<Page<Event>> {
        let location = required("location", location)?;
        let body = self
            .client
            .call(
                "geo.getEvents",
                paging.apply(Params::new().with("location", location)),
            )
            .await?;
        parse_page(require(&body, "events")?, "event")
    }
}
