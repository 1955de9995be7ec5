//! Save payload assembly and persistence strategies.
//!
//! Saving an image section writes one JSON document describing the whole
//! editor state. Where it is written is up to a [`SaveStrategy`]: the default
//! writes the section's own key, while some sections mirror the same image
//! into related keys.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::{ApiError, ContentApi};
use crate::content::{ContentRecord, ImageContent, IMAGE_DETAILS};
use crate::focal::FocalPoint;
use crate::ratio::AspectRatio;

pub const MSG_SAVING: &str = "Saving...";
pub const MSG_UPLOADING: &str = "Uploading image...";
pub const MSG_MISSING_IMAGE: &str = "Please select an image.";
pub const MSG_SAVED: &str = "Image updated successfully!";
pub const MSG_SAVE_FAILED: &str = "Error saving image.";

/// Error types for the save workflow.
#[derive(Debug, Error)]
pub enum SaveError {
    /// Another save from the same editor has not finished.
    #[error("A save is already in progress")]
    Busy,

    /// Neither an image nor a destination link was provided.
    #[error("Nothing to save: no image or link")]
    MissingImage,

    /// The pending file could not be uploaded.
    #[error("Image upload failed: {0}")]
    Upload(#[source] ApiError),

    /// The payload could not be written.
    #[error("Failed to store content: {0}")]
    Store(#[source] ApiError),
}

/// The persisted form of an image section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavePayload {
    pub url: Option<String>,
    pub coords: FocalPoint,
    /// Empty when the section has no link.
    pub post_link: String,
    pub zoom: f64,
    pub aspect_ratio: AspectRatio,
}

impl SavePayload {
    /// Snapshot editor content; `url` is filled in once any upload resolves.
    pub fn from_content(content: &ImageContent) -> Self {
        Self {
            url: content.url.clone().filter(|u| !u.is_empty()),
            coords: content.coords,
            post_link: content.post_link.clone().unwrap_or_default(),
            zoom: content.zoom,
            aspect_ratio: content.aspect_ratio.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Where and how an assembled payload is persisted.
#[async_trait(?Send)]
pub trait SaveStrategy<A: ContentApi + ?Sized> {
    /// Persist `payload` for the section `key`. `url` is the resolved image
    /// location (after any upload), also present in the payload.
    async fn persist(
        &self,
        api: &A,
        key: &str,
        url: Option<&str>,
        payload: &SavePayload,
    ) -> Result<(), ApiError>;
}

/// Default strategy: one record under the section's own key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleKeySave {
    content_type: String,
}

impl Default for SingleKeySave {
    fn default() -> Self {
        Self::new(IMAGE_DETAILS)
    }
}

impl SingleKeySave {
    pub fn new(content_type: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
        }
    }
}

#[async_trait(?Send)]
impl<A: ContentApi + ?Sized> SaveStrategy<A> for SingleKeySave {
    async fn persist(
        &self,
        api: &A,
        key: &str,
        _url: Option<&str>,
        payload: &SavePayload,
    ) -> Result<(), ApiError> {
        let value = payload
            .to_json()
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        api.store(&ContentRecord::new(key, &self.content_type, value))
            .await
    }
}

/// Write the section's own key, then the same payload under each mirror key.
///
/// Used where one image is shown in several places, e.g. a program card and
/// the program's detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirroredSave {
    content_type: String,
    mirrors: Vec<String>,
}

impl MirroredSave {
    pub fn new<I, S>(mirrors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            content_type: IMAGE_DETAILS.to_string(),
            mirrors: mirrors.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }
}

#[async_trait(?Send)]
impl<A: ContentApi + ?Sized> SaveStrategy<A> for MirroredSave {
    async fn persist(
        &self,
        api: &A,
        key: &str,
        _url: Option<&str>,
        payload: &SavePayload,
    ) -> Result<(), ApiError> {
        let value = payload
            .to_json()
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        for target in std::iter::once(key).chain(self.mirrors.iter().map(String::as_str)) {
            api.store(&ContentRecord::new(target, &self.content_type, value.clone()))
                .await?;
        }
        Ok(())
    }
}
