//! Permissive decoding of stored image content.

use serde_json::{Map, Value};

use super::types::ImageContent;
use crate::focal::{is_valid_zoom, FocalPoint, DEFAULT_ZOOM};
use crate::ratio::{AspectRatio, RatioPolicy};

/// Result of decoding a raw content value.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedContent {
    /// Not a JSON object: the whole value is the image location.
    PlainUrl(String),
    /// A JSON object; fields that were missing or unusable are `None`.
    Structured(StoredImage),
}

/// Fields recovered from a structured content value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoredImage {
    pub url: Option<String>,
    pub zoom: Option<f64>,
    pub coords: Option<FocalPoint>,
    pub aspect_ratio: Option<AspectRatio>,
    pub post_link: Option<String>,
}

impl StoredImage {
    fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            url: non_empty_str(map.get("url")),
            zoom: map.get("zoom").and_then(zoom_value).filter(|z| is_valid_zoom(*z)),
            coords: map.get("coords").and_then(coords_value),
            aspect_ratio: non_empty_str(map.get("aspectRatio")).map(AspectRatio::new),
            post_link: non_empty_str(map.get("postLink")),
        }
    }
}

/// Decode a raw content value. Never fails.
pub fn decode(raw: &str) -> DecodedContent {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => DecodedContent::Structured(StoredImage::from_map(&map)),
        _ => DecodedContent::PlainUrl(raw.to_string()),
    }
}

/// Normalize a fetched value into fully-defaulted [`ImageContent`].
///
/// A missing or empty value yields the defaults with no URL. A structured
/// value without a usable `url` keeps the raw string as its URL.
pub fn normalize(raw: Option<&str>, policy: &RatioPolicy) -> ImageContent {
    let mut content = ImageContent::with_ratio(policy.initial());
    let Some(raw) = raw.filter(|r| !r.is_empty()) else {
        return content;
    };

    match decode(raw) {
        DecodedContent::PlainUrl(url) => content.url = Some(url),
        DecodedContent::Structured(stored) => {
            content.url = Some(stored.url.unwrap_or_else(|| raw.to_string()));
            content.zoom = stored.zoom.unwrap_or(DEFAULT_ZOOM);
            content.coords = stored.coords.unwrap_or(FocalPoint::CENTER);
            content.post_link = stored.post_link;
            if let Some(ratio) = stored.aspect_ratio {
                content.aspect_ratio = policy.effective(ratio);
            }
        }
    }
    content
}

/// Parse the longest leading decimal number of `s`, ignoring leading
/// whitespace. `"2.5x"` parses as 2.5; `"x2"` does not parse.
pub fn parse_leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let end = s
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .unwrap_or(s.len());
    let candidate = &s[..end];
    (1..=candidate.len())
        .rev()
        .find_map(|len| candidate[..len].parse::<f64>().ok())
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn zoom_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_leading_float(s),
        _ => None,
    }
}

fn coords_value(value: &Value) -> Option<FocalPoint> {
    let x = value.get("x")?.as_f64()?;
    let y = value.get("y")?.as_f64()?;
    Some(FocalPoint::new(x, y))
}
