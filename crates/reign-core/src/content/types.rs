//! Core content types.

use serde::{Deserialize, Serialize};

use crate::focal::{FocalPoint, DEFAULT_ZOOM};
use crate::ratio::AspectRatio;

/// Content type the editor writes image sections under.
pub const IMAGE_DETAILS: &str = "image_details";

/// A key/value record as served by the content API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub key: String,
    pub content_type: String,
    /// Raw string or a JSON-encoded object.
    pub content_value: String,
}

impl ContentRecord {
    pub fn new(
        key: impl Into<String>,
        content_type: impl Into<String>,
        content_value: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            content_type: content_type.into(),
            content_value: content_value.into(),
        }
    }
}

/// Normalized, fully-defaulted image section content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageContent {
    /// Image location, if one has been chosen.
    pub url: Option<String>,
    /// Focal point, percent on each axis.
    pub coords: FocalPoint,
    /// Scale factor, always positive and finite.
    pub zoom: f64,
    pub aspect_ratio: AspectRatio,
    /// Destination for sections that act as clickable promos.
    pub post_link: Option<String>,
}

impl Default for ImageContent {
    fn default() -> Self {
        Self::with_ratio(AspectRatio::default())
    }
}

impl ImageContent {
    /// Defaults with the given starting ratio.
    pub fn with_ratio(aspect_ratio: AspectRatio) -> Self {
        Self {
            url: None,
            coords: FocalPoint::CENTER,
            zoom: DEFAULT_ZOOM,
            aspect_ratio,
            post_link: None,
        }
    }

    pub fn has_url(&self) -> bool {
        self.url.as_deref().is_some_and(|u| !u.is_empty())
    }

    pub fn has_post_link(&self) -> bool {
        self.post_link.as_deref().is_some_and(|l| !l.is_empty())
    }
}
