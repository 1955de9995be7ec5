//! The content API the site reads from and the editor writes to.
//!
//! The API itself lives elsewhere; this module only names the operations the
//! editor relies on so that the browser client and test fakes can stand in
//! for it.

use async_trait::async_trait;
use thiserror::Error;

use crate::content::ContentRecord;

/// Error types for content API calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The API answered with a non-success status.
    #[error("Content API returned HTTP {status} for {path}")]
    Status { status: u16, path: String },

    /// The response body was not what the API promises.
    #[error("Malformed response: {0}")]
    Decode(String),

    /// The file could not be packaged or sent.
    #[error("Upload failed: {0}")]
    Upload(String),

    /// A caller-supplied save handler threw or rejected.
    #[error("Save handler failed: {0}")]
    Handler(String),
}

/// Key/value content store plus image upload.
///
/// Futures are not required to be `Send`: the editor runs on the browser's
/// single UI thread.
#[async_trait(?Send)]
pub trait ContentApi {
    /// Local file handle accepted by [`ContentApi::upload`].
    type Upload;

    /// Fetch the raw value stored under `key`. `Ok(None)` means nothing is
    /// stored, which is normal for sections nobody has edited yet.
    async fn fetch(&self, key: &str) -> Result<Option<String>, ApiError>;

    /// Write a record under its key, replacing any previous value.
    async fn store(&self, record: &ContentRecord) -> Result<(), ApiError>;

    /// Upload a file and return the location it is served from.
    async fn upload(&self, file: &Self::Upload) -> Result<String, ApiError>;
}
