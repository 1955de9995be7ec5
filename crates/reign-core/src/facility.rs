//! Content for the "Our Facility" section: two photos and a tour video.

use serde::Serialize;

use crate::api::ContentApi;
use crate::content::{normalize, ImageContent};
use crate::loader::{load_batch, BatchMode};
use crate::ratio::RatioPolicy;
use crate::video::{resolve_embed_url, DEFAULT_FACILITY_VIDEO};

pub const FACILITY_IMAGE_KEYS: [&str; 2] = ["facility_image_1", "facility_image_2"];
pub const FACILITY_VIDEO_KEY: &str = "facility_video";

const FACILITY_ALTS: [&str; 2] = [
    "Wide shot of facility interior",
    "Clean locker rooms / training equipment",
];

/// One facility photo slot. Slots without stored content render nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacilityImage {
    pub alt: String,
    pub content: Option<ImageContent>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityContent {
    pub images: Vec<FacilityImage>,
    /// Embeddable video URL.
    pub video_url: String,
}

impl Default for FacilityContent {
    fn default() -> Self {
        Self {
            images: FACILITY_ALTS
                .iter()
                .map(|alt| FacilityImage {
                    alt: alt.to_string(),
                    content: None,
                })
                .collect(),
            video_url: DEFAULT_FACILITY_VIDEO.to_string(),
        }
    }
}

impl FacilityContent {
    /// Build from raw values in `[image_1, image_2, video]` order.
    pub fn from_values(values: &[Option<String>]) -> Self {
        let policy = RatioPolicy::default();
        let mut facility = Self::default();

        for (slot, raw) in facility.images.iter_mut().zip(values) {
            slot.content = raw.as_deref().map(|raw| normalize(Some(raw), &policy));
        }
        if let Some(Some(video)) = values.get(FACILITY_IMAGE_KEYS.len()) {
            facility.video_url = resolve_embed_url(video);
        }
        facility
    }
}

/// Load the facility section. Failures leave the defaults in place.
pub async fn load_facility<A>(api: &A, mode: BatchMode) -> FacilityContent
where
    A: ContentApi + ?Sized,
{
    let keys = [FACILITY_IMAGE_KEYS[0], FACILITY_IMAGE_KEYS[1], FACILITY_VIDEO_KEY];
    match load_batch(api, &keys, mode).await {
        Ok(values) => FacilityContent::from_values(&values),
        Err(err) => {
            tracing::error!(error = %err, "failed to fetch facility content");
            FacilityContent::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focal::FocalPoint;
    use crate::test_support::MemoryApi;
    use futures::executor::block_on;

    #[test]
    fn test_defaults() {
        let facility = FacilityContent::default();
        assert_eq!(facility.images.len(), 2);
        assert!(facility.images.iter().all(|i| i.content.is_none()));
        assert_eq!(facility.video_url, DEFAULT_FACILITY_VIDEO);
    }

    #[test]
    fn test_load_all_values() {
        let api = MemoryApi::new()
            .with_value(
                "facility_image_1",
                r#"{"url":"/uploads/mats.jpg","zoom":1.2,"coords":{"x":40,"y":60}}"#,
            )
            .with_value("facility_image_2", "/uploads/lockers.jpg")
            .with_value("facility_video", "https://youtu.be/abcdefghijk");
        let facility = block_on(load_facility(&api, BatchMode::AllOrNothing));

        let first = facility.images[0].content.as_ref().unwrap();
        assert_eq!(first.url.as_deref(), Some("/uploads/mats.jpg"));
        assert_eq!(first.zoom, 1.2);
        assert_eq!(first.coords, FocalPoint::new(40.0, 60.0));

        let second = facility.images[1].content.as_ref().unwrap();
        assert_eq!(second.url.as_deref(), Some("/uploads/lockers.jpg"));
        assert_eq!(second.coords, FocalPoint::CENTER);

        assert_eq!(facility.video_url, "https://www.youtube.com/embed/abcdefghijk");
        assert_eq!(facility.images[0].alt, "Wide shot of facility interior");
    }

    #[test]
    fn test_unrecognized_video_used_as_is() {
        let api = MemoryApi::new().with_value("facility_video", "https://player.vimeo.com/video/1");
        let facility = block_on(load_facility(&api, BatchMode::AllOrNothing));
        assert_eq!(facility.video_url, "https://player.vimeo.com/video/1");
    }

    #[test]
    fn test_single_failure_discards_batch() {
        let api = MemoryApi::new().with_value("facility_image_1", "/uploads/mats.jpg");
        api.fail_key("facility_video");
        let facility = block_on(load_facility(&api, BatchMode::AllOrNothing));
        assert_eq!(facility, FacilityContent::default());
    }

    #[test]
    fn test_partial_mode_keeps_loaded_images() {
        let api = MemoryApi::new().with_value("facility_image_1", "/uploads/mats.jpg");
        api.fail_key("facility_video");
        let facility = block_on(load_facility(&api, BatchMode::Partial));
        assert!(facility.images[0].content.is_some());
        assert_eq!(facility.video_url, DEFAULT_FACILITY_VIDEO);
    }
}
