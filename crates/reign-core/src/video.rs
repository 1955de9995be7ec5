//! Resolve stored video references into embeddable URLs.
//!
//! Staff paste whatever link they have: a share link, a watch page, an old
//! `/v/` link or an embed URL. Anything that yields an 11-character video id
//! becomes a canonical embed URL; everything else is used as given.

use std::sync::OnceLock;

use regex::Regex;

/// Prefix of canonical embed URLs.
pub const EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// Facility tour shown until a video is stored.
pub const DEFAULT_FACILITY_VIDEO: &str = "https://www.youtube.com/embed/0zh97sdP8-k";

const VIDEO_ID_LEN: usize = 11;

static VIDEO_ID_PATTERN: OnceLock<Regex> = OnceLock::new();

fn video_id_pattern() -> &'static Regex {
    VIDEO_ID_PATTERN.get_or_init(|| {
        Regex::new(r"^.*(youtu.be/|v/|u/(?-u:\w)/|embed/|watch\?v=|&v=)([^#&?]*).*")
            .expect("video id pattern is valid")
    })
}

/// Extract the video id from a link, if it carries an 11-character one.
pub fn extract_video_id(raw: &str) -> Option<&str> {
    let id = video_id_pattern().captures(raw)?.get(2)?.as_str();
    (id.chars().count() == VIDEO_ID_LEN).then_some(id)
}

/// Canonical embed URL for a video id.
pub fn embed_url(video_id: &str) -> String {
    format!("{EMBED_BASE}{video_id}")
}

/// Embeddable URL for a stored reference; unrecognized input passes through.
pub fn resolve_embed_url(raw: &str) -> String {
    match extract_video_id(raw) {
        Some(id) => embed_url(id),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_url() {
        assert_eq!(
            resolve_embed_url("https://www.youtube.com/watch?v=abcdefghijk"),
            "https://www.youtube.com/embed/abcdefghijk"
        );
    }

    #[test]
    fn test_watch_url_with_extra_params() {
        assert_eq!(
            resolve_embed_url("https://www.youtube.com/watch?v=abcdefghijk&t=42s"),
            "https://www.youtube.com/embed/abcdefghijk"
        );
        assert_eq!(
            resolve_embed_url("https://www.youtube.com/watch?feature=share&v=abcdefghijk"),
            "https://www.youtube.com/embed/abcdefghijk"
        );
    }

    #[test]
    fn test_short_link() {
        assert_eq!(
            extract_video_id("https://youtu.be/0zh97sdP8-k"),
            Some("0zh97sdP8-k")
        );
    }

    #[test]
    fn test_embed_and_v_paths() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/embed/0zh97sdP8-k?rel=0"),
            Some("0zh97sdP8-k")
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/v/0zh97sdP8-k"),
            Some("0zh97sdP8-k")
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/u/w/0zh97sdP8-k"),
            Some("0zh97sdP8-k")
        );
    }

    #[test]
    fn test_canonical_embed_is_stable() {
        assert_eq!(
            resolve_embed_url(DEFAULT_FACILITY_VIDEO),
            DEFAULT_FACILITY_VIDEO
        );
    }

    #[test]
    fn test_wrong_length_passes_through() {
        let raw = "https://www.youtube.com/watch?v=short";
        assert_eq!(resolve_embed_url(raw), raw);
    }

    #[test]
    fn test_non_matching_passes_through() {
        let raw = "https://player.vimeo.com/video/123456";
        assert_eq!(resolve_embed_url(raw), raw);
        assert_eq!(resolve_embed_url("not a video"), "not a video");
    }

    #[test]
    fn test_bare_id_passes_through() {
        // No marker to anchor on
        assert_eq!(resolve_embed_url("abcdefghijk"), "abcdefghijk");
    }
}
