//! Parameter builders that validate before anything is sent.

pub mod scrobble;
pub mod tags;

pub use scrobble::{Scrobble, ScrobbleBatch, MAX_SCROBBLES_PER_CALL};
pub use tags::{TagList, MAX_TAGS_PER_CALL};
