//! Fetch content records and turn them into page state.
//!
//! A missing record is normal (nobody has edited that section yet) and is
//! never logged. Other failures are logged and the caller keeps its
//! defaults; nothing here surfaces an error to site visitors.

use futures::future::join_all;

use crate::api::{ApiError, ContentApi};
use crate::content::{normalize, ImageContent};
use crate::ratio::RatioPolicy;

/// How a batch reacts when some of its requests fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchMode {
    /// Any failure discards the whole batch.
    #[default]
    AllOrNothing,
    /// Failed keys come back as `None`; the rest are kept.
    Partial,
}

/// Fetch a single raw value.
pub async fn fetch_value<A>(api: &A, key: &str) -> Result<Option<String>, ApiError>
where
    A: ContentApi + ?Sized,
{
    let value = api.fetch(key).await?;
    Ok(value.filter(|v| !v.is_empty()))
}

/// Load and normalize one image section, falling back to defaults.
pub async fn load_section<A>(api: &A, key: &str, policy: &RatioPolicy) -> ImageContent
where
    A: ContentApi + ?Sized,
{
    match fetch_value(api, key).await {
        Ok(raw) => normalize(raw.as_deref(), policy),
        Err(err) => {
            tracing::warn!(key, error = %err, "failed to fetch content");
            normalize(None, policy)
        }
    }
}

/// Fetch several keys concurrently and wait for all of them.
///
/// Results are in the same order as `keys`.
pub async fn load_batch<A>(
    api: &A,
    keys: &[&str],
    mode: BatchMode,
) -> Result<Vec<Option<String>>, ApiError>
where
    A: ContentApi + ?Sized,
{
    tracing::debug!(count = keys.len(), ?mode, "fetching content batch");
    let results = join_all(keys.iter().map(|key| fetch_value(api, key))).await;

    match mode {
        BatchMode::AllOrNothing => results.into_iter().collect(),
        BatchMode::Partial => Ok(keys
            .iter()
            .zip(results)
            .map(|(key, result)| {
                result.unwrap_or_else(|err| {
                    tracing::warn!(key, error = %err, "failed to fetch content");
                    None
                })
            })
            .collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focal::FocalPoint;
    use crate::ratio::AspectRatio;
    use crate::test_support::MemoryApi;
    use futures::executor::block_on;

    #[test]
    fn test_load_section_found() {
        let api = MemoryApi::new().with_value(
            "welcome_image",
            r#"{"url":"/uploads/w.jpg","coords":{"x":20,"y":30},"aspectRatio":"1 / 1"}"#,
        );
        let policy = RatioPolicy::for_section("welcome_image");
        let content = block_on(load_section(&api, "welcome_image", &policy));

        assert_eq!(content.url.as_deref(), Some("/uploads/w.jpg"));
        assert_eq!(content.coords, FocalPoint::new(20.0, 30.0));
        assert_eq!(content.aspect_ratio, AspectRatio::LANDSCAPE);
    }

    #[test]
    fn test_load_section_missing_is_default() {
        let api = MemoryApi::new();
        let content = block_on(load_section(&api, "hero", &RatioPolicy::default()));
        assert_eq!(content, ImageContent::default());
    }

    #[test]
    fn test_load_section_failure_is_default() {
        let api = MemoryApi::new();
        api.fail_key("hero");
        let content = block_on(load_section(&api, "hero", &RatioPolicy::default()));
        assert_eq!(content, ImageContent::default());
    }

    #[test]
    fn test_fetch_value_empty_is_none() {
        let api = MemoryApi::new().with_value("hero", "");
        assert_eq!(block_on(fetch_value(&api, "hero")).unwrap(), None);
    }

    #[test]
    fn test_batch_preserves_order() {
        let api = MemoryApi::new().with_value("a", "1").with_value("c", "3");
        let values = block_on(load_batch(&api, &["a", "b", "c"], BatchMode::AllOrNothing)).unwrap();
        assert_eq!(values, vec![Some("1".into()), None, Some("3".into())]);
    }

    #[test]
    fn test_batch_all_or_nothing_fails_whole_batch() {
        let api = MemoryApi::new().with_value("a", "1");
        api.fail_key("b");
        let result = block_on(load_batch(&api, &["a", "b"], BatchMode::AllOrNothing));
        assert!(matches!(result, Err(ApiError::Status { status: 500, .. })));
    }

    #[test]
    fn test_batch_partial_keeps_loaded() {
        let api = MemoryApi::new().with_value("a", "1");
        api.fail_key("b");
        let values = block_on(load_batch(&api, &["a", "b"], BatchMode::Partial)).unwrap();
        assert_eq!(values, vec![Some("1".into()), None]);
    }
}
