//! Stored content records and their normalized image form.
//!
//! Content records are opaque key/value pairs served by the site's content
//! API. An image section's value is either a bare URL or a JSON object
//! carrying `{url, zoom, coords, aspectRatio, postLink}`. Decoding is
//! permissive: anything that is not a JSON object is treated as a plain URL.
//!
//! # Examples
//!
//! ```ignore
//! use reign_core::content::normalize;
//! use reign_core::ratio::RatioPolicy;
//!
//! let content = normalize(Some("http://x/y.jpg"), &RatioPolicy::default());
//! assert_eq!(content.zoom, 1.0);
//! ```

mod decode;
mod types;

pub use decode::{decode, normalize, parse_leading_float, DecodedContent, StoredImage};
pub use types::{ContentRecord, ImageContent, IMAGE_DETAILS};
