//! Aspect ratios and the per-section ratio policy.
//!
//! Ratios are kept as the CSS token the page applies directly to the image
//! container (`"16 / 9"`, `"auto"`). Some sections dictate a ratio that the
//! editor must not let the user change.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A CSS `aspect-ratio` token such as `"16 / 9"` or `"auto"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AspectRatio(Cow<'static, str>);

impl AspectRatio {
    pub const LANDSCAPE: AspectRatio = AspectRatio(Cow::Borrowed("16 / 9"));
    pub const STANDARD: AspectRatio = AspectRatio(Cow::Borrowed("4 / 3"));
    pub const SQUARE: AspectRatio = AspectRatio(Cow::Borrowed("1 / 1"));
    pub const PORTRAIT: AspectRatio = AspectRatio(Cow::Borrowed("3 / 4"));
    pub const VERTICAL: AspectRatio = AspectRatio(Cow::Borrowed("9 / 16"));
    pub const AUTO: AspectRatio = AspectRatio(Cow::Borrowed("auto"));
    /// Used by instructor portraits.
    pub const PORTRAIT_TALL: AspectRatio = AspectRatio(Cow::Borrowed("4 / 5"));

    pub fn new(token: impl Into<String>) -> Self {
        Self(Cow::Owned(token.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compact `W:H` form, e.g. `"16:9"`.
    pub fn label(&self) -> String {
        self.0.replace(" / ", ":")
    }

    /// Width divided by height, or `None` for `auto` and unparseable tokens.
    pub fn value(&self) -> Option<f64> {
        let (w, h) = self.0.split_once('/')?;
        let w: f64 = w.trim().parse().ok()?;
        let h: f64 = h.trim().parse().ok()?;
        (w > 0.0 && h > 0.0 && w.is_finite() && h.is_finite()).then(|| w / h)
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::LANDSCAPE
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AspectRatio {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

/// Ratios offered by the editor's dropdown, with their display names.
pub static RATIO_CHOICES: [(AspectRatio, &str); 6] = [
    (AspectRatio::LANDSCAPE, "16:9 Landscape"),
    (AspectRatio::STANDARD, "4:3 Standard"),
    (AspectRatio::SQUARE, "1:1 Square"),
    (AspectRatio::PORTRAIT, "3:4 Portrait"),
    (AspectRatio::VERTICAL, "9:16 Vertical"),
    (AspectRatio::AUTO, "Auto"),
];

/// Ratio dictated by a section's identifier, if any.
///
/// Checked in order: `program`, `instructor`, `welcome`.
pub fn fixed_ratio(section_id: &str) -> Option<AspectRatio> {
    if section_id.contains("program") {
        return Some(AspectRatio::LANDSCAPE);
    }
    if section_id.contains("instructor") {
        return Some(AspectRatio::PORTRAIT_TALL);
    }
    if section_id.contains("welcome") {
        return Some(AspectRatio::LANDSCAPE);
    }
    None
}

/// How a section's aspect ratio is decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RatioPolicy {
    /// The section always renders at this ratio; stored values are ignored.
    Fixed(AspectRatio),
    /// The user picks the ratio, starting from `default`.
    Selectable { default: AspectRatio },
}

impl Default for RatioPolicy {
    fn default() -> Self {
        RatioPolicy::Selectable {
            default: AspectRatio::LANDSCAPE,
        }
    }
}

impl RatioPolicy {
    /// Policy implied by the site's section naming convention.
    pub fn for_section(section_id: &str) -> Self {
        match fixed_ratio(section_id) {
            Some(ratio) => RatioPolicy::Fixed(ratio),
            None => RatioPolicy::default(),
        }
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, RatioPolicy::Fixed(_))
    }

    /// Ratio a section starts with before any stored content is applied.
    pub fn initial(&self) -> AspectRatio {
        match self {
            RatioPolicy::Fixed(ratio) => ratio.clone(),
            RatioPolicy::Selectable { default } => default.clone(),
        }
    }

    /// Ratio to use given a stored or user-chosen one.
    pub fn effective(&self, chosen: AspectRatio) -> AspectRatio {
        match self {
            RatioPolicy::Fixed(ratio) => ratio.clone(),
            RatioPolicy::Selectable { .. } => chosen,
        }
    }

    /// Toolbar caption for fixed sections, e.g. `"Fixed 16:9"`.
    pub fn fixed_label(&self) -> Option<String> {
        match self {
            RatioPolicy::Fixed(ratio) => Some(format!("Fixed {}", ratio.label())),
            RatioPolicy::Selectable { .. } => None,
        }
    }
}
