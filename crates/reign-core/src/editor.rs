//! Image editor session state.
//!
//! One [`ImageEditor`] backs one admin panel for one image section. It holds
//! the normalized content being edited, a pending local file, the save busy
//! flag and the status line shown to staff.
//!
//! # Saving
//!
//! Saving runs in three phases so the state can live behind a `RefCell` in
//! the browser without being borrowed across an `await`:
//!
//! 1. [`ImageEditor::begin_save`] validates, sets the busy flag and returns a
//!    [`SaveTicket`] snapshot.
//! 2. [`SaveTicket::run`] uploads any pending file and persists the payload.
//!    Callers switch the status with [`ImageEditor::mark_uploading`] first
//!    when [`SaveTicket::uploads_file`] says an upload is coming.
//! 3. [`ImageEditor::finish_save`] applies the outcome and clears the flag.
//!
//! [`ImageEditor::save`] chains all three for callers that own the editor.

use crate::api::ContentApi;
use crate::content::{normalize, ImageContent};
use crate::focal::{clamp_zoom, DragDelta, FocalPoint, SurfaceSize};
use crate::ratio::{AspectRatio, RatioPolicy};
use crate::save::{
    SaveError, SavePayload, SaveStrategy, MSG_MISSING_IMAGE, MSG_SAVED, MSG_SAVE_FAILED,
    MSG_SAVING, MSG_UPLOADING,
};

/// Sections whose id contains one of these get a destination-link field.
const LINKABLE_SECTIONS: [&str; 3] = ["instagram", "program", "link"];

/// Tone of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    #[default]
    Neutral,
    Success,
    Error,
}

/// Transient message shown under the editor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Status {
    pub message: String,
    pub kind: StatusKind,
}

impl Status {
    fn neutral(message: &str) -> Self {
        Self {
            message: message.to_string(),
            kind: StatusKind::Neutral,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.message.is_empty()
    }
}

/// Editing state for one image section. `F` is the local file handle type.
#[derive(Debug, Clone)]
pub struct ImageEditor<F> {
    section_id: String,
    policy: RatioPolicy,
    content: ImageContent,
    pending_file: Option<F>,
    busy: bool,
    status: Status,
}

impl<F> ImageEditor<F> {
    /// Editor whose ratio policy follows the section naming convention.
    pub fn new(section_id: impl Into<String>) -> Self {
        let section_id = section_id.into();
        let policy = RatioPolicy::for_section(&section_id);
        Self::with_policy(section_id, policy)
    }

    /// Editor with an explicitly declared ratio policy.
    pub fn with_policy(section_id: impl Into<String>, policy: RatioPolicy) -> Self {
        Self {
            section_id: section_id.into(),
            content: ImageContent::with_ratio(policy.initial()),
            policy,
            pending_file: None,
            busy: false,
            status: Status::default(),
        }
    }

    pub fn section_id(&self) -> &str {
        &self.section_id
    }

    pub fn policy(&self) -> &RatioPolicy {
        &self.policy
    }

    pub fn content(&self) -> &ImageContent {
        &self.content
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn pending_file(&self) -> Option<&F> {
        self.pending_file.as_ref()
    }

    /// Apply a freshly fetched value. Nothing stored leaves the state as is.
    pub fn apply_loaded(&mut self, raw: Option<&str>) {
        if raw.is_some_and(|r| !r.is_empty()) {
            self.content = normalize(raw, &self.policy);
        }
    }

    /// Move the focal point for one pointer-drag event.
    pub fn drag(&mut self, delta: DragDelta, surface: SurfaceSize) {
        self.content.coords = self.content.coords.dragged(delta, surface);
    }

    pub fn reset_focus(&mut self) {
        self.content.coords = FocalPoint::CENTER;
    }

    /// Set zoom from the slider, clamped to its range.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.content.zoom = clamp_zoom(zoom);
    }

    /// Choose a ratio. Returns `false` (and changes nothing) for fixed sections.
    pub fn set_aspect_ratio(&mut self, ratio: AspectRatio) -> bool {
        if self.policy.is_fixed() {
            return false;
        }
        self.content.aspect_ratio = ratio;
        true
    }

    pub fn set_post_link(&mut self, link: impl Into<String>) {
        let link = link.into();
        self.content.post_link = (!link.is_empty()).then_some(link);
    }

    /// Stage a local file to upload on the next save.
    pub fn select_file(&mut self, file: F) {
        self.pending_file = Some(file);
        self.status = Status::default();
    }

    /// Use an already-hosted image from the library.
    pub fn select_from_library(&mut self, url: impl Into<String>) {
        self.content.url = Some(url.into());
    }

    pub fn shows_post_link_field(&self) -> bool {
        LINKABLE_SECTIONS
            .iter()
            .any(|marker| self.section_id.contains(marker))
    }

    /// Switch the status line to the upload phase of a running save.
    pub fn mark_uploading(&mut self) {
        if self.busy {
            self.status = Status::neutral(MSG_UPLOADING);
        }
    }

    /// Apply the outcome of a save started with [`ImageEditor::begin_save`].
    ///
    /// `Ok` carries the resolved image location.
    pub fn finish_save(
        &mut self,
        outcome: Result<Option<String>, SaveError>,
    ) -> Result<(), SaveError> {
        self.busy = false;
        match outcome {
            Ok(url) => {
                self.content.url = url;
                self.pending_file = None;
                self.status = Status {
                    message: MSG_SAVED.to_string(),
                    kind: StatusKind::Success,
                };
                tracing::debug!(section = %self.section_id, "image section saved");
                Ok(())
            }
            Err(SaveError::MissingImage) => {
                self.status = Status::neutral(MSG_MISSING_IMAGE);
                Err(SaveError::MissingImage)
            }
            Err(err) => {
                tracing::error!(
                    section = %self.section_id,
                    error = %err,
                    "failed to save image section"
                );
                self.status = Status {
                    message: MSG_SAVE_FAILED.to_string(),
                    kind: StatusKind::Error,
                };
                Err(err)
            }
        }
    }
}

impl<F: Clone> ImageEditor<F> {
    /// Validate and mark the editor busy.
    ///
    /// Fails with [`SaveError::Busy`] while another save is in flight, and
    /// with [`SaveError::MissingImage`] when there is no image, no pending
    /// file and no link. Neither failure makes a network call.
    pub fn begin_save(&mut self) -> Result<SaveTicket<F>, SaveError> {
        if self.busy {
            return Err(SaveError::Busy);
        }

        if !self.content.has_url()
            && self.pending_file.is_none()
            && !self.content.has_post_link()
        {
            self.status = Status::neutral(MSG_MISSING_IMAGE);
            return Err(SaveError::MissingImage);
        }

        self.busy = true;
        self.status = Status::neutral(MSG_SAVING);

        Ok(SaveTicket {
            key: self.section_id.clone(),
            file: self.pending_file.clone(),
            payload: SavePayload::from_content(&self.content),
        })
    }

    /// Run a complete save against `api` using `strategy`.
    pub async fn save<A, S>(&mut self, api: &A, strategy: &S) -> Result<(), SaveError>
    where
        A: ContentApi<Upload = F> + ?Sized,
        S: SaveStrategy<A> + ?Sized,
    {
        let ticket = self.begin_save()?;
        if ticket.uploads_file() {
            self.mark_uploading();
        }
        let outcome = ticket.run(api, strategy).await;
        self.finish_save(outcome)
    }
}

/// Snapshot of what to save, taken when the save began.
#[derive(Debug, Clone)]
pub struct SaveTicket<F> {
    key: String,
    file: Option<F>,
    payload: SavePayload,
}

impl<F> SaveTicket<F> {
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether [`SaveTicket::run`] will upload a file before persisting.
    pub fn uploads_file(&self) -> bool {
        self.file.is_some()
    }

    /// Upload the pending file if any, then persist. Returns the resolved
    /// image location. Nothing is written if the upload fails.
    pub async fn run<A, S>(mut self, api: &A, strategy: &S) -> Result<Option<String>, SaveError>
    where
        A: ContentApi<Upload = F> + ?Sized,
        S: SaveStrategy<A> + ?Sized,
    {
        if let Some(file) = &self.file {
            let url = api.upload(file).await.map_err(SaveError::Upload)?;
            self.payload.url = Some(url).filter(|u| !u.is_empty());
        }

        if self.payload.url.is_none() && self.payload.post_link.is_empty() {
            return Err(SaveError::MissingImage);
        }

        strategy
            .persist(api, &self.key, self.payload.url.as_deref(), &self.payload)
            .await
            .map_err(SaveError::Store)?;
        Ok(self.payload.url)
    }
}
