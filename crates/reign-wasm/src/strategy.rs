//! Page-supplied save handlers.
//!
//! Some admin pages persist an image section their own way (writing several
//! related records, refreshing a gallery). They register a JS function that
//! receives the resolved image URL and the assembled payload in place of the
//! default write.

use async_trait::async_trait;
use js_sys::{Function, Promise};
use reign_core::{ApiError, SavePayload, SaveStrategy};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::client::HttpContentApi;
use crate::types::to_js;

/// Calls `handler(url, payload)` and waits for the promise it returns.
///
/// `url` is `null` for link-only saves. A thrown error or rejected promise
/// fails the save.
#[derive(Debug, Clone)]
pub(crate) struct JsSaveHandler {
    handler: Function,
}

impl JsSaveHandler {
    pub(crate) fn new(handler: Function) -> Self {
        Self { handler }
    }
}

fn handler_error(err: JsValue) -> ApiError {
    ApiError::Handler(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

#[async_trait(?Send)]
impl SaveStrategy<HttpContentApi> for JsSaveHandler {
    async fn persist(
        &self,
        _api: &HttpContentApi,
        _key: &str,
        url: Option<&str>,
        payload: &SavePayload,
    ) -> Result<(), ApiError> {
        let url = url.map(JsValue::from_str).unwrap_or(JsValue::NULL);
        let payload = to_js(payload).map_err(handler_error)?;
        let returned = self
            .handler
            .call2(&JsValue::NULL, &url, &payload)
            .map_err(handler_error)?;

        // Plain return values resolve immediately
        JsFuture::from(Promise::resolve(&returned))
            .await
            .map_err(handler_error)?;
        Ok(())
    }
}
