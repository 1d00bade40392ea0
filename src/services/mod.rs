//! Endpoint groups built on [`ApiClient`].
//!
//! Each service is a borrowed view over the client; every method is one
//! API call followed by normalization of the relevant part of the payload.
//!
//! ```rust,no_run
//! use rustfm::{ApiClient, Credentials};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::new(Credentials::from_env()?)?;
//! for artist in client.artist().get_similar("Cher", Some(5)).await? {
//!     println!("{} ({:.2})", artist.name, artist.match_score.unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```

pub mod album;
pub mod artist;
pub mod auth;
pub mod chart;
pub mod geo;
pub mod tag;
pub mod track;
pub mod user;

pub use album::AlbumService;
pub use artist::ArtistService;
pub use auth::AuthService;
pub use chart::ChartService;
pub use geo::GeoService;
pub use tag::TagService;
pub use track::TrackService;
pub use user::{Period, UserService};

use crate::api::{ApiClient, Params};
use crate::error::{LastfmError, Result};

/// Page selection for list endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Paging {
    /// 1-based page number; service default when `None`.
    pub page: Option<u32>,
    /// Items per page; service default when `None`.
    pub limit: Option<u32>,
}

impl Paging {
    /// Request a specific page.
    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            limit: None,
        }
    }

    /// Set the page size.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Add `page` and `limit` to a parameter set.
    pub(crate) fn apply(&self, params: Params) -> Params {
        params.with("page", self.page).with("limit", self.limit)
    }
}

/// Trim a required text argument and reject it if blank.
pub(crate) fn required<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LastfmError::InvalidInput(format!(
            "{} cannot be empty",
            field
        )));
    }
    Ok(trimmed)
}

impl ApiClient {
    /// `auth.*` methods.
    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(self)
    }

    /// `artist.*` methods.
    pub fn artist(&self) -> ArtistService<'_> {
        ArtistService::new(self)
    }

    /// `album.*` methods.
    pub fn album(&self) -> AlbumService<'_> {
        AlbumService::new(self)
    }

    /// `track.*` methods.
    pub fn track(&self) -> TrackService<'_> {
        TrackService::new(self)
    }

    /// `tag.*` methods.
    pub fn tag(&self) -> TagService<'_> {
        TagService::new(self)
    }

    /// `user.*` methods.
    pub fn user(&self) -> UserService<'_> {
        UserService::new(self)
    }

    /// `chart.*` methods.
    pub fn chart(&self) -> ChartService<'_> {
        ChartService::new(self)
    }

    /// `geo.*` methods.
    pub fn geo(&self) -> GeoService<'_> {
        GeoService::new(self)
    }
}
