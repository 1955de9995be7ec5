//! In-memory content API for unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use async_trait::async_trait;

use crate::api::{ApiError, ContentApi};
use crate::content::ContentRecord;

/// Records every call; keys can be primed with values or made to fail.
#[derive(Debug, Default)]
pub(crate) struct MemoryApi {
    values: RefCell<HashMap<String, String>>,
    failing: RefCell<HashSet<String>>,
    fail_uploads: Cell<bool>,
    blank_uploads: Cell<bool>,
    stored: RefCell<Vec<ContentRecord>>,
    calls: Cell<usize>,
}

impl MemoryApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_value(self, key: &str, value: &str) -> Self {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    pub(crate) fn fail_key(&self, key: &str) {
        self.failing.borrow_mut().insert(key.to_string());
    }

    pub(crate) fn fail_uploads(&self) {
        self.fail_uploads.set(true);
    }

    /// Uploads succeed but report an empty location.
    pub(crate) fn blank_uploads(&self) {
        self.blank_uploads.set(true);
    }

    pub(crate) fn stored(&self) -> Vec<ContentRecord> {
        self.stored.borrow().clone()
    }

    /// Total number of fetch, store and upload calls.
    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }
}

#[async_trait(?Send)]
impl ContentApi for MemoryApi {
    type Upload = String;

    async fn fetch(&self, key: &str) -> Result<Option<String>, ApiError> {
        self.calls.set(self.calls.get() + 1);
        if self.failing.borrow().contains(key) {
            return Err(ApiError::Status {
                status: 500,
                path: format!("/api/content/{key}"),
            });
        }
        Ok(self.values.borrow().get(key).cloned())
    }

    async fn store(&self, record: &ContentRecord) -> Result<(), ApiError> {
        self.calls.set(self.calls.get() + 1);
        if self.failing.borrow().contains(&record.key) {
            return Err(ApiError::Network("connection reset".into()));
        }
        self.values
            .borrow_mut()
            .insert(record.key.clone(), record.content_value.clone());
        self.stored.borrow_mut().push(record.clone());
        Ok(())
    }

    async fn upload(&self, file: &Self::Upload) -> Result<String, ApiError> {
        self.calls.set(self.calls.get() + 1);
        if self.fail_uploads.get() {
            return Err(ApiError::Upload("payload too large".into()));
        }
        if self.blank_uploads.get() {
            return Ok(String::new());
        }
        Ok(format!("/uploads/{file}"))
    }
}
