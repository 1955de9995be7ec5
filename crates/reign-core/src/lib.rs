//! Reign Core - site content and image editor logic
//!
//! This crate provides the content layer behind the gym's marketing site and
//! its admin image editor: decoding stored content, the per-section ratio
//! policy, focal-point drag geometry, video link resolution, and the save
//! workflow against the content API.
//!
//! # Module Structure
//!
//! - `api` - The content API the site reads and writes through
//! - `config` - Content API endpoint configuration
//! - `content` - Content records and permissive decoding into `ImageContent`
//! - `editor` - Image editor session state and the phased save
//! - `facility` - The facility section's photos and tour video
//! - `focal` - Drag-to-focal-point geometry and zoom limits
//! - `loader` - Single and batched content fetches
//! - `ratio` - Aspect ratio tokens and the fixed-ratio policy
//! - `render` - Style values for the dual-layer image display
//! - `save` - Save payload and persistence strategies
//! - `video` - Video link to embed URL resolution

pub mod api;
pub mod config;
pub mod content;
pub mod editor;
pub mod facility;
pub mod focal;
pub mod loader;
pub mod ratio;
pub mod render;
pub mod save;
pub mod video;

#[cfg(test)]
pub(crate) mod test_support;

pub use api::{ApiError, ContentApi};
pub use config::ApiConfig;
pub use content::{normalize, ContentRecord, DecodedContent, ImageContent};
pub use editor::{ImageEditor, SaveTicket, Status, StatusKind};
pub use facility::{load_facility, FacilityContent};
pub use focal::{DragDelta, FocalPoint, SurfaceSize};
pub use loader::{load_batch, load_section, BatchMode};
pub use ratio::{fixed_ratio, AspectRatio, RatioPolicy};
pub use render::{image_layers, ImageLayers};
pub use save::{MirroredSave, SaveError, SavePayload, SaveStrategy, SingleKeySave};
pub use video::resolve_embed_url;
