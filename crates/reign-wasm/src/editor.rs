//! Image editor WASM bindings.
//!
//! `JsImageEditor` backs one admin image panel. UI events (drag, slider,
//! dropdown, file pick) update it synchronously; `load` and `save` return
//! promises.

use std::cell::RefCell;
use std::rc::Rc;

use crate::client::HttpContentApi;
use crate::strategy::JsSaveHandler;
use crate::types::{config_from_js, console_error, to_js, JsFocalPoint};
use js_sys::{Function, Promise};
use reign_core::loader::fetch_value;
use reign_core::ratio::RATIO_CHOICES;
use reign_core::render::image_layers;
use reign_core::{
    AspectRatio, DragDelta, ImageEditor, MirroredSave, SaveError, SaveStrategy, SingleKeySave,
    StatusKind, SurfaceSize,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use web_sys::File;

/// One entry of the aspect-ratio dropdown.
#[derive(Debug, Serialize)]
struct RatioChoice<'a> {
    value: &'a str,
    label: &'a str,
}

/// Image editor for a single content section.
#[wasm_bindgen]
pub struct JsImageEditor {
    inner: Rc<RefCell<ImageEditor<File>>>,
    api: Rc<HttpContentApi>,
    mirrors: Vec<String>,
    save_handler: Option<JsSaveHandler>,
}

#[wasm_bindgen]
impl JsImageEditor {
    /// Create an editor for `section_id`.
    ///
    /// `config` is an optional `{ base_url, content_type }` object.
    #[wasm_bindgen(constructor)]
    pub fn new(section_id: &str, config: JsValue) -> Result<JsImageEditor, JsValue> {
        let config = config_from_js(config)?;
        Ok(Self {
            inner: Rc::new(RefCell::new(ImageEditor::new(section_id))),
            api: Rc::new(HttpContentApi::new(config)),
            mirrors: Vec::new(),
            save_handler: None,
        })
    }

    /// Also write every save to these keys (after the section's own key).
    pub fn set_mirror_keys(&mut self, keys: Vec<String>) {
        self.mirrors = keys;
    }

    /// Replace the default write with `handler(url, payload)`.
    ///
    /// `url` is the image location after any upload (`null` for link-only
    /// saves) and `payload` the `{url, coords, postLink, zoom, aspectRatio}`
    /// object. The handler may return a promise; a rejection fails the save.
    /// Pass `undefined` to restore the default. Takes precedence over mirror
    /// keys.
    pub fn set_save_override(&mut self, handler: Option<Function>) {
        self.save_handler = handler.map(JsSaveHandler::new);
    }

    /// Fetch the section's stored content.
    ///
    /// Resolves to `true` when the fetch succeeded (stored or not) and
    /// `false` when it failed; the editor keeps its defaults on failure.
    pub fn load(&self) -> Promise {
        let inner = Rc::clone(&self.inner);
        let api = Rc::clone(&self.api);
        let key = self.inner.borrow().section_id().to_string();

        future_to_promise(async move {
            match fetch_value(api.as_ref(), &key).await {
                Ok(raw) => {
                    inner.borrow_mut().apply_loaded(raw.as_deref());
                    Ok(JsValue::TRUE)
                }
                Err(err) => {
                    console_error(&format!("Error fetching content for {}: {}", key, err));
                    Ok(JsValue::FALSE)
                }
            }
        })
    }

    /// Apply one pointer-drag delta over the preview surface.
    pub fn drag(&self, dx: f64, dy: f64, width: f64, height: f64) {
        self.inner
            .borrow_mut()
            .drag(DragDelta::new(dx, dy), SurfaceSize::new(width, height));
    }

    pub fn reset_focus(&self) {
        self.inner.borrow_mut().reset_focus();
    }

    pub fn set_zoom(&self, zoom: f64) {
        self.inner.borrow_mut().set_zoom(zoom);
    }

    /// Returns `false` when the section's ratio is fixed.
    pub fn set_aspect_ratio(&self, ratio: &str) -> bool {
        self.inner
            .borrow_mut()
            .set_aspect_ratio(AspectRatio::new(ratio))
    }

    pub fn set_post_link(&self, link: &str) {
        self.inner.borrow_mut().set_post_link(link);
    }

    /// Stage a file to upload on the next save.
    pub fn select_file(&self, file: File) {
        self.inner.borrow_mut().select_file(file);
    }

    pub fn select_from_library(&self, url: &str) {
        self.inner.borrow_mut().select_from_library(url);
    }

    #[wasm_bindgen(getter)]
    pub fn url(&self) -> Option<String> {
        self.inner.borrow().content().url.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn focal_point(&self) -> JsFocalPoint {
        self.inner.borrow().content().coords.into()
    }

    #[wasm_bindgen(getter)]
    pub fn zoom(&self) -> f64 {
        self.inner.borrow().content().zoom
    }

    #[wasm_bindgen(getter)]
    pub fn aspect_ratio(&self) -> String {
        self.inner.borrow().content().aspect_ratio.to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn post_link(&self) -> String {
        self.inner
            .borrow()
            .content()
            .post_link
            .clone()
            .unwrap_or_default()
    }

    #[wasm_bindgen(getter)]
    pub fn status_message(&self) -> String {
        self.inner.borrow().status().message.clone()
    }

    /// `"neutral"`, `"success"` or `"error"`.
    #[wasm_bindgen(getter)]
    pub fn status_kind(&self) -> String {
        match self.inner.borrow().status().kind {
            StatusKind::Neutral => "neutral",
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
        .to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn is_busy(&self) -> bool {
        self.inner.borrow().is_busy()
    }

    #[wasm_bindgen(getter)]
    pub fn has_pending_file(&self) -> bool {
        self.inner.borrow().pending_file().is_some()
    }

    #[wasm_bindgen(getter)]
    pub fn shows_post_link_field(&self) -> bool {
        self.inner.borrow().shows_post_link_field()
    }

    /// `"Fixed 16:9"` style caption, or `undefined` when selectable.
    #[wasm_bindgen(getter)]
    pub fn fixed_ratio_label(&self) -> Option<String> {
        self.inner.borrow().policy().fixed_label()
    }

    /// Dropdown entries as `[{ value, label }]`.
    pub fn ratio_choices(&self) -> Result<JsValue, JsValue> {
        let choices: Vec<RatioChoice<'_>> = RATIO_CHOICES
            .iter()
            .map(|(ratio, label)| RatioChoice {
                value: ratio.as_str(),
                label: *label,
            })
            .collect();
        to_js(&choices)
    }

    /// Preview styles for the current state.
    pub fn layers(&self) -> Result<JsValue, JsValue> {
        let editor = self.inner.borrow();
        to_js(&image_layers(editor.content(), editor.policy()))
    }

    /// Upload any pending file and persist the section.
    ///
    /// Resolves to `true` on success and `false` otherwise; the status
    /// message says why. A save started while another is in flight is
    /// ignored. The status reads "Saving..." as soon as this returns and
    /// moves to "Uploading image..." once an upload starts.
    pub fn save(&self) -> Promise {
        let ticket = match self.inner.borrow_mut().begin_save() {
            Ok(ticket) => ticket,
            Err(SaveError::Busy) | Err(SaveError::MissingImage) => {
                return Promise::resolve(&JsValue::FALSE);
            }
            Err(err) => {
                console_error(&err.to_string());
                return Promise::resolve(&JsValue::FALSE);
            }
        };

        let inner = Rc::clone(&self.inner);
        let api = Rc::clone(&self.api);
        let content_type = api.config().content_type.clone();
        let strategy: Box<dyn SaveStrategy<HttpContentApi>> = match &self.save_handler {
            Some(handler) => Box::new(handler.clone()),
            None if self.mirrors.is_empty() => Box::new(SingleKeySave::new(content_type)),
            None => {
                Box::new(MirroredSave::new(self.mirrors.clone()).with_content_type(content_type))
            }
        };

        future_to_promise(async move {
            if ticket.uploads_file() {
                inner.borrow_mut().mark_uploading();
            }
            let outcome = ticket.run(api.as_ref(), strategy.as_ref()).await;
            match inner.borrow_mut().finish_save(outcome) {
                Ok(()) => Ok(JsValue::TRUE),
                Err(SaveError::MissingImage) => Ok(JsValue::FALSE),
                Err(err) => {
                    console_error(&err.to_string());
                    Ok(JsValue::FALSE)
                }
            }
        })
    }
}
