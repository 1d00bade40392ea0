//! Event (concert) models.
//!
//! Events come from `geo.getEvents` and friends. The artist list is a
//! plain list of names that the service may collapse to a single string.

use serde::{Deserialize, Serialize};

use super::common::{largest_image, Image};

/// Geographic location of a venue.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Location {
    /// City name.
    pub city: Option<String>,

    /// Country name.
    pub country: Option<String>,

    /// Street address.
    pub street: Option<String>,

    /// Postal code.
    pub postal_code: Option<String>,

    /// Latitude, if known.
    pub latitude: Option<f64>,

    /// Longitude, if known.
    pub longitude: Option<f64>,
}

/// A concert venue.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Venue {
    /// Last.fm venue ID.
    pub id: Option<String>,

    /// Venue name.
    pub name: String,

    /// Where the venue is.
    pub location: Location,

    /// Last.fm page URL.
    pub url: Option<String>,

    /// Venue website.
    pub website: Option<String>,
}

/// A concert or festival listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Event {
    /// Last.fm event ID.
    pub id: String,

    /// Event title.
    pub title: String,

    /// Performing artists.
    #[serde(default)]
    pub artists: Vec<String>,

    /// Headlining artist.
    pub headliner: Option<String>,

    /// Where it takes place.
    pub venue: Option<Venue>,

    /// Start date as sent by the service.
    pub start_date: Option<String>,

    /// Free-text description.
    pub description: Option<String>,

    /// Number of users attending.
    pub attendance: u32,

    /// Number of reviews.
    pub reviews: u32,

    /// Last.fm page URL.
    pub url: Option<String>,

    /// Event website.
    pub website: Option<String>,

    /// Whether the event was cancelled.
    pub cancelled: bool,

    /// Tags.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Poster images.
    #[serde(default)]
    pub images: Vec<Image>,
}

impl Event {
    /// Get the largest poster available.
    pub fn largest_image(&self) -> Option<&Image> {
        largest_image(&self.images)
    }

    /// Whether the given artist plays this event.
    pub fn features(&self, artist: &str) -> bool {
        self.artists.iter().any(|a| a.eq_ignore_ascii_case(artist))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_features_ignores_case() {
        let event = Event {
            artists: vec!["The Cure".to_string(), "Mogwai".to_string()],
            ..Default::default()
        };
        assert!(event.features("the cure"));
        assert!(!event.features("Cher"));
    }
}
