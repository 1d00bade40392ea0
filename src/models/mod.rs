//! Data models for Last.fm API responses.
//!
//! These are plain value types. Turning raw payloads into them is the job
//! of [`converters`](crate::converters).

pub mod album;
pub mod artist;
pub mod chart;
pub mod common;
pub mod event;
pub mod session;
pub mod tag;
pub mod track;
pub mod user;

// Re-exports for convenience
pub use album::Album;
pub use artist::Artist;
pub use chart::WeeklyChart;
pub use common::{Image, ImageSize, Page, Wiki};
pub use event::{Event, Location, Venue};
pub use session::Session;
pub use tag::Tag;
pub use track::{ScrobbleResult, Track};
pub use user::User;
