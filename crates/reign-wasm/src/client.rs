//! HTTP content API client backed by the browser's fetch.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use reign_core::{ApiConfig, ApiError, ContentApi, ContentRecord};
use serde::{Deserialize, Serialize};
use web_sys::{File, FormData};
use wasm_bindgen::JsValue;

/// Body of `GET /api/content/{key}`.
#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    content_value: Option<String>,
}

/// Body of `PUT /api/content/{key}`.
#[derive(Debug, Serialize)]
struct ContentBody<'a> {
    content_type: &'a str,
    content_value: &'a str,
}

/// Body of `POST /api/upload`.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    url: String,
}

/// The site's content API, reached over HTTP.
#[derive(Debug, Clone, Default)]
pub struct HttpContentApi {
    config: ApiConfig,
}

impl HttpContentApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

fn js_error(err: JsValue) -> ApiError {
    ApiError::Upload(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

fn check_status(response: &Response, path: String) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::Status {
            status: response.status(),
            path,
        })
    }
}

#[async_trait(?Send)]
impl ContentApi for HttpContentApi {
    type Upload = File;

    async fn fetch(&self, key: &str) -> Result<Option<String>, ApiError> {
        let path = self.config.content_path(key);
        let response = Request::get(&path).send().await.map_err(network_error)?;
        if response.status() == 404 {
            return Ok(None);
        }
        check_status(&response, path)?;

        let body: ContentResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.content_value)
    }

    async fn store(&self, record: &ContentRecord) -> Result<(), ApiError> {
        let path = self.config.content_path(&record.key);
        let body = ContentBody {
            content_type: &record.content_type,
            content_value: &record.content_value,
        };
        let response = Request::put(&path)
            .json(&body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(network_error)?;
        check_status(&response, path)
    }

    async fn upload(&self, file: &Self::Upload) -> Result<String, ApiError> {
        let path = self.config.upload_path();
        let form = FormData::new().map_err(js_error)?;
        form.append_with_blob("image", file).map_err(js_error)?;

        let response = Request::post(&path)
            .body(form)
            .map_err(|e| ApiError::Upload(e.to_string()))?
            .send()
            .await
            .map_err(network_error)?;
        check_status(&response, path)?;

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.url)
    }
}
