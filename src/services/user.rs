//! `user.*` methods.

use std::fmt;

use super::{required, Paging};
use crate::api::{ApiClient, Params};
use crate::converters::{nested_list, parse_list, parse_page, require, FromApi};
use crate::error::Result;
use crate::models::{Artist, Page, Track, User, WeeklyChart};

/// Time range for user top lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    /// All time.
    #[default]
    Overall,
    /// Last 7 days.
    Week,
    /// Last month.
    Month,
    /// Last 3 months.
    Quarter,
    /// Last 6 months.
    HalfYear,
    /// Last 12 months.
    Year,
}

impl Period {
    /// Wire value of the `period` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Overall => "overall",
            Period::Week => "7day",
            Period::Month => "1month",
            Period::Quarter => "3month",
            Period::HalfYear => "6month",
            Period::Year => "12month",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User profiles and listening history.
#[derive(Debug, Clone, Copy)]
pub struct UserService<'a> {
    client: &'a ApiClient,
}

impl<'a> UserService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Get a user's profile.
    pub async fn get_info(&self, user: &str) -> Result<User> {
        let user = required("user", user)?;
        let body = self
            .client
            .call("user.getInfo", Params::new().with("user", user))
            .await?;
        User::from_api(require(&body, "user")?)
    }

    /// Get recently played tracks, newest first.
    ///
    /// The first item may be the track playing right now
    /// ([`Track::now_playing`]).
    pub async fn get_recent_tracks(&self, user: &str, paging: Paging) -> Result<Page<Track>> {
        let user = required("user", user)?;
        let body = self
            .client
            .call(
                "user.getRecentTracks",
                paging.apply(Params::new().with("user", user)),
            )
            .await?;
        parse_page(require(&body, "recenttracks")?, "track")
    }

    /// Get tracks the user loved.
    pub async fn get_loved_tracks(&self, user: &str, paging: Paging) -> Result<Page<Track>> {
        let user = required("user", user)?;
        let body = self
            .client
            .call(
                "user.getLovedTracks",
                paging.apply(Params::new().with("user", user)),
            )
            .await?;
        parse_page(require(&body, "lovedtracks")?, "track")
    }

    /// Get the user's most played artists over `period`.
    pub async fn get_top_artists(
        &self,
        user: &str,
        period: Period,
        paging: Paging,
    ) -> Result<Page<Artist>> {
        let user = required("user", user)?;
        let params = Params::new()
            .with("user", user)
            .with("period", period.as_str());
        let body = self
            .client
            .call("user.getTopArtists", paging.apply(params))
            .await?;
        parse_page(require(&body, "topartists")?, "artist")
    }

    /// Get the weekly chart ranges available for the user.
    pub async fn get_weekly_chart_list(&self, user: &str) -> Result<Vec<WeeklyChart>> {
        let user = required("user", user)?;
        let body = self
            .client
            .call("user.getWeeklyChartList", Params::new().with("user", user))
            .await?;
        parse_list(nested_list(&body, "weeklychartlist", "chart"))
    }
}
