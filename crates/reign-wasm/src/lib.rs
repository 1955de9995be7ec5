//! Reign WASM - WebAssembly bindings for the Reign site
//!
//! This crate exposes reign-core to the site's JavaScript: content
//! normalization for public sections and the admin image editor, with an
//! HTTP client for the content API.
//!
//! # Module Structure
//!
//! - `client` - Content API over the browser's fetch
//! - `content` - Stateless decoding, ratio, video and drag helpers
//! - `editor` - The admin image editor (`JsImageEditor`)
//! - `facility` - Facility section loader
//! - `strategy` - Page-supplied save handlers
//! - `types` - WASM-compatible wrapper types
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsImageEditor } from '@reign/wasm';
//!
//! await init();
//!
//! const editor = new JsImageEditor('program_1', { base_url: '' });
//! await editor.load();
//! editor.set_save_override(async (url, payload) => {
//!   await saveProgramImage(url, payload);
//! });
//! editor.drag(event.movementX, event.movementY, mask.clientWidth, mask.clientHeight);
//! if (await editor.save()) {
//!   console.log(editor.status_message);
//! }
//! ```

use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;
use wasm_bindgen::prelude::*;

mod client;
mod content;
mod editor;
mod facility;
mod strategy;
mod types;

#[cfg(all(test, target_arch = "wasm32"))]
mod test_fetch;

// Re-export public types
pub use client::HttpContentApi;
pub use content::{
    clamp_zoom, drag_focal_point, fixed_ratio, image_layers, normalize_content,
    resolve_video_embed, zoom_slider,
};
pub use editor::JsImageEditor;
pub use facility::load_facility_content;
pub use types::JsFocalPoint;

/// Initialize the WASM module (called automatically on load)
///
/// Routes `tracing` events from reign-core to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());
    // A host page that already installed a subscriber keeps it
    let _ = tracing_subscriber::registry().with(console_layer).try_init();

    web_sys::console::debug_1(&JsValue::from_str(&format!(
        "reign-wasm {} loaded",
        version()
    )));
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
