//! WASM bindings for content decoding and display helpers.
//!
//! These are the stateless pieces the public site needs: section pages call
//! `normalize_content` on fetched values and `image_layers` to style them.

use crate::types::{to_js, JsFocalPoint};
use reign_core::focal::{
    clamp_zoom as core_clamp_zoom, DragDelta, SurfaceSize, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP,
};
use reign_core::ratio::{fixed_ratio as core_fixed_ratio, RatioPolicy};
use reign_core::render::image_layers as core_image_layers;
use reign_core::{normalize, resolve_embed_url};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Bounds for the editor's zoom slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
struct ZoomSlider {
    min: f64,
    max: f64,
    step: f64,
}

const ZOOM_SLIDER: ZoomSlider = ZoomSlider {
    min: ZOOM_MIN,
    max: ZOOM_MAX,
    step: ZOOM_STEP,
};

/// Normalize a stored content value for a section.
///
/// Returns `{url, coords: {x, y}, zoom, aspectRatio, postLink}` with every
/// field filled in. Malformed values are treated as plain URLs.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const res = await fetch('/api/content/program_1');
/// const { content_value } = await res.json();
/// const image = normalize_content(content_value, 'program_1');
/// ```
#[wasm_bindgen]
pub fn normalize_content(raw: Option<String>, section_id: &str) -> Result<JsValue, JsValue> {
    let policy = RatioPolicy::for_section(section_id);
    to_js(&normalize(raw.as_deref(), &policy))
}

/// Normalize a stored value and compute its layer styles in one call.
#[wasm_bindgen]
pub fn image_layers(raw: Option<String>, section_id: &str) -> Result<JsValue, JsValue> {
    let policy = RatioPolicy::for_section(section_id);
    let content = normalize(raw.as_deref(), &policy);
    to_js(&core_image_layers(&content, &policy))
}

/// Aspect ratio dictated by a section id, e.g. `"16 / 9"` for programs.
#[wasm_bindgen]
pub fn fixed_ratio(section_id: &str) -> Option<String> {
    core_fixed_ratio(section_id).map(|r| r.to_string())
}

/// Turn a stored video link into an embeddable URL.
#[wasm_bindgen]
pub fn resolve_video_embed(raw: &str) -> String {
    resolve_embed_url(raw)
}

/// Apply one drag delta (pixels) to a focal point (percent).
///
/// An unmeasured surface (zero width or height) returns the point unchanged.
#[wasm_bindgen]
pub fn drag_focal_point(
    point: &JsFocalPoint,
    dx: f64,
    dy: f64,
    width: f64,
    height: f64,
) -> JsFocalPoint {
    point
        .to_core()
        .dragged(DragDelta::new(dx, dy), SurfaceSize::new(width, height))
        .into()
}

/// Clamp a zoom slider value into the supported range.
#[wasm_bindgen]
pub fn clamp_zoom(zoom: f64) -> f64 {
    core_clamp_zoom(zoom)
}

/// `{ min, max, step }` for the zoom `<input type="range">`.
#[wasm_bindgen]
pub fn zoom_slider() -> Result<JsValue, JsValue> {
    to_js(&ZOOM_SLIDER)
}
