//! Style values for displaying an image section.
//!
//! Sections render as two layers inside a container of fixed aspect ratio:
//! a sharp foreground cropped around the focal point and scaled by zoom,
//! and a blurred, darkened copy behind it filling any letterboxed space.

use serde::Serialize;

use crate::content::ImageContent;
use crate::focal::FocalPoint;
use crate::ratio::RatioPolicy;

/// Filter applied to the background layer.
pub const BACKGROUND_FILTER: &str = "blur(20px) brightness(0.7)";
/// Background is slightly enlarged so the blur has no visible edge.
pub const BACKGROUND_TRANSFORM: &str = "scale(1.1)";

/// CSS values for the container and both image layers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageLayers {
    /// `None` when the section has no image yet.
    pub src: Option<String>,
    pub container_aspect_ratio: String,
    pub object_position: String,
    pub transform: String,
    pub transform_origin: String,
    pub background_filter: String,
    pub background_transform: String,
}

/// `"x% y%"` for `object-position` and `transform-origin`.
pub fn position_css(point: FocalPoint) -> String {
    format!("{}% {}%", point.x, point.y)
}

pub fn scale_css(zoom: f64) -> String {
    format!("scale({})", zoom)
}

/// Compute the layer styles, honoring a fixed ratio over the stored one.
pub fn image_layers(content: &ImageContent, policy: &RatioPolicy) -> ImageLayers {
    let position = position_css(content.coords);
    ImageLayers {
        src: content.url.clone().filter(|u| !u.is_empty()),
        container_aspect_ratio: policy
            .effective(content.aspect_ratio.clone())
            .to_string(),
        object_position: position.clone(),
        transform: scale_css(content.zoom),
        transform_origin: position,
        background_filter: BACKGROUND_FILTER.to_string(),
        background_transform: BACKGROUND_TRANSFORM.to_string(),
    }
}
