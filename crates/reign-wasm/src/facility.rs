//! WASM bindings for the facility section.

use crate::client::HttpContentApi;
use crate::types::{config_from_js, to_js};
use js_sys::Promise;
use reign_core::{load_facility, BatchMode};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

/// Load the facility photos and tour video.
///
/// Resolves to `{ images: [{ alt, content }], videoUrl }`. With `partial`
/// set, photos that loaded are kept even if another request failed;
/// otherwise any failure falls back to the defaults for the whole section.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const facility = await load_facility_content(undefined, false);
/// iframe.src = facility.videoUrl;
/// ```
#[wasm_bindgen]
pub fn load_facility_content(config: JsValue, partial: bool) -> Result<Promise, JsValue> {
    let api = HttpContentApi::new(config_from_js(config)?);
    let mode = if partial {
        BatchMode::Partial
    } else {
        BatchMode::AllOrNothing
    };

    Ok(future_to_promise(async move {
        let facility = load_facility(&api, mode).await;
        to_js(&facility)
    }))
}
