//! Common types shared across all models.

use serde::{Deserialize, Serialize};

/// Image sizes used by Last.fm, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    Small,
    Medium,
    Large,
    ExtraLarge,
    Mega,
    /// Size label not recognised, or missing.
    Unknown,
}

impl ImageSize {
    /// Parse the `size` attribute of an image entry.
    pub fn parse(label: &str) -> Self {
        match label {
            "small" => ImageSize::Small,
            "medium" => ImageSize::Medium,
            "large" => ImageSize::Large,
            "extralarge" => ImageSize::ExtraLarge,
            "mega" => ImageSize::Mega,
            _ => ImageSize::Unknown,
        }
    }
}

impl Default for ImageSize {
    fn default() -> Self {
        Self::Unknown
    }
}

/// Image with URL and size label.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Image {
    /// URL to the image.
    pub url: String,

    /// Size label.
    pub size: ImageSize,
}

impl Image {
    /// Create a new image.
    pub fn new<S: Into<String>>(url: S, size: ImageSize) -> Self {
        Self {
            url: url.into(),
            size,
        }
    }
}

/// Pick the largest image, ignoring unlabelled ones when possible.
pub fn largest_image(images: &[Image]) -> Option<&Image> {
    images
        .iter()
        .filter(|img| img.size != ImageSize::Unknown)
        .max_by_key(|img| img.size)
        .or_else(|| images.first())
}

/// Biography or description text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Wiki {
    /// Short summary, usually HTML.
    pub summary: Option<String>,

    /// Full text, usually HTML.
    pub content: Option<String>,

    /// Publication date as sent by the service.
    pub published: Option<String>,
}

/// One page of a paginated listing.
///
/// Pagination fields come from the `@attr` object of the list payload;
/// when it is missing they are zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,

    /// 1-based page number.
    pub page: u32,

    /// Items per page.
    pub per_page: u32,

    /// Number of pages available.
    pub total_pages: u32,

    /// Number of items across all pages.
    pub total: u64,
}

impl<T> Page<T> {
    /// Whether there is a page after this one.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
