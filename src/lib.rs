//! # rustfm
//!
//! A Rust client for the Last.fm web API.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rustfm::{ApiClient, Credentials, Paging};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads LASTFM_API_KEY and LASTFM_SHARED_SECRET
//!     let client = ApiClient::new(Credentials::from_env()?)?;
//!
//!     let artist = client.artist().get_info("Cher").await?;
//!     println!("{}: {} listeners", artist.name, artist.listeners);
//!
//!     let recent = client.user().get_recent_tracks("rj", Paging::page(1)).await?;
//!     for track in &recent.items {
//!         println!("{} - {}", track.artist_name().unwrap_or("?"), track.name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Write calls
//!
//! Loving, tagging and scrobbling need a [`Session`], obtained through
//! [`AuthService`](services::AuthService). Those calls are signed with the
//! shared secret and sent as POST.
//!
//! ## Low-Level APIs
//!
//! - [`ApiClient::signed_call`] / [`ApiClient::unsigned_call`] - any API method
//! - [`HttpClient`] - swap the HTTP layer (tests, proxies)
//! - [`crypto`] - request signing

pub mod api;
pub mod builders;
pub mod config;
pub mod converters;
pub mod crypto;
pub mod error;
pub mod models;
pub mod services;

// Main interface
pub use api::{ApiClient, ApiClientBuilder};
pub use config::{ClientConfig, Credentials};
pub use services::{Paging, Period};

// Low-level APIs
pub use api::{
    CallObserver, HttpClient, HttpMethod, HttpRequest, HttpResponse, NoopObserver, ParamValue,
    Params, ReqwestHttpClient, TracingObserver,
};
pub use builders::{Scrobble, ScrobbleBatch, TagList};
pub use error::{ApiErrorCode, LastfmError, Result, TransportError};
pub use models::{
    Album, Artist, Event, Image, ImageSize, Page, ScrobbleResult, Session, Tag, Track, User,
    WeeklyChart,
};
