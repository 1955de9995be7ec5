//! Focal-point geometry for the drag-to-position editor surface.
//!
//! The focal point is stored as percentages (0.0 to 100.0) on each axis,
//! which keeps it independent of both the image's pixel size and the size of
//! the surface it is previewed on.
//!
//! # Coordinate System
//!
//! - (0, 0) = top-left corner of the image
//! - (100, 100) = bottom-right corner
//! - (50, 50) = center, the default
//!
//! # Drag Direction
//!
//! Dragging the pointer by `+dx` moves the visible image by `+dx`, which
//! brings the image's left side into view. The focal point therefore moves
//! opposite to the pointer delta.

use serde::{Deserialize, Serialize};

/// Lowest zoom the editor slider allows.
pub const ZOOM_MIN: f64 = 0.5;
/// Highest zoom the editor slider allows.
pub const ZOOM_MAX: f64 = 3.0;
/// Slider increment.
pub const ZOOM_STEP: f64 = 0.05;
/// Zoom used when none is stored or the stored one is unusable.
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Normalized focal point within an image, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocalPoint {
    /// Horizontal position (0.0 to 100.0)
    pub x: f64,
    /// Vertical position (0.0 to 100.0)
    pub y: f64,
}

impl Default for FocalPoint {
    fn default() -> Self {
        Self::CENTER
    }
}

impl FocalPoint {
    /// Image center.
    pub const CENTER: FocalPoint = FocalPoint { x: 50.0, y: 50.0 };

    /// Create a focal point, clamping both axes into [0, 100].
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: clamp_percent(x),
            y: clamp_percent(y),
        }
    }

    /// Check that both axes are inside [0, 100].
    pub fn is_within_bounds(&self) -> bool {
        (0.0..=100.0).contains(&self.x) && (0.0..=100.0).contains(&self.y)
    }

    /// Apply one pointer-drag delta over a surface of the given size.
    ///
    /// ```text
    /// x' = clamp(x - (dx / W) * 100, 0, 100)
    /// y' = clamp(y - (dy / H) * 100, 0, 100)
    /// ```
    ///
    /// An unmeasured surface (zero or non-finite size) or a non-finite delta
    /// leaves the point unchanged.
    pub fn dragged(self, delta: DragDelta, surface: SurfaceSize) -> Self {
        if !surface.is_measured() || !delta.dx.is_finite() || !delta.dy.is_finite() {
            return self;
        }

        let dx_percent = (delta.dx / surface.width) * 100.0;
        let dy_percent = (delta.dy / surface.height) * 100.0;

        Self {
            x: (self.x - dx_percent).clamp(0.0, 100.0),
            y: (self.y - dy_percent).clamp(0.0, 100.0),
        }
    }
}

/// Pixel size of the surface the user drags over.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// False until layout has given the surface a positive size.
    pub fn is_measured(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Pointer movement since the previous drag event, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DragDelta {
    pub dx: f64,
    pub dy: f64,
}

impl DragDelta {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

/// Clamp a percentage into [0, 100]. NaN maps to the center.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return 50.0;
    }
    value.clamp(0.0, 100.0)
}

/// A zoom that may be stored: finite and strictly positive.
#[inline]
pub fn is_valid_zoom(zoom: f64) -> bool {
    zoom.is_finite() && zoom > 0.0
}

/// Clamp slider input into the editor's zoom range.
pub fn clamp_zoom(zoom: f64) -> f64 {
    if !zoom.is_finite() {
        return DEFAULT_ZOOM;
    }
    zoom.clamp(ZOOM_MIN, ZOOM_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> SurfaceSize {
        SurfaceSize::new(700.0, 393.75)
    }

    #[test]
    fn test_default_is_center() {
        assert_eq!(FocalPoint::default(), FocalPoint::new(50.0, 50.0));
    }

    #[test]
    fn test_new_clamps() {
        let p = FocalPoint::new(-10.0, 140.0);
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 100.0);
    }

    #[test]
    fn test_new_nan_is_center() {
        let p = FocalPoint::new(f64::NAN, 20.0);
        assert_eq!(p.x, 50.0);
        assert_eq!(p.y, 20.0);
    }

    #[test]
    fn test_drag_right_moves_focus_left() {
        let p = FocalPoint::CENTER.dragged(DragDelta::new(70.0, 0.0), surface());
        // 70 / 700 = 10%
        assert!((p.x - 40.0).abs() < 1e-9);
        assert_eq!(p.y, 50.0);
    }

    #[test]
    fn test_drag_down_moves_focus_up() {
        let s = SurfaceSize::new(200.0, 100.0);
        let p = FocalPoint::CENTER.dragged(DragDelta::new(0.0, 25.0), s);
        assert_eq!(p.x, 50.0);
        assert!((p.y - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_drag_clamps_at_edges() {
        let s = SurfaceSize::new(100.0, 100.0);
        let p = FocalPoint::new(5.0, 95.0).dragged(DragDelta::new(50.0, -50.0), s);
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 100.0);
    }

    #[test]
    fn test_zero_width_surface_is_noop() {
        let start = FocalPoint::new(30.0, 60.0);
        let p = start.dragged(DragDelta::new(10.0, 10.0), SurfaceSize::new(0.0, 400.0));
        assert_eq!(p, start);
    }

    #[test]
    fn test_zero_height_surface_is_noop() {
        let start = FocalPoint::new(30.0, 60.0);
        let p = start.dragged(DragDelta::new(10.0, 10.0), SurfaceSize::new(400.0, 0.0));
        assert_eq!(p, start);
    }

    #[test]
    fn test_nan_delta_is_noop() {
        let start = FocalPoint::new(30.0, 60.0);
        let p = start.dragged(DragDelta::new(f64::NAN, 1.0), surface());
        assert_eq!(p, start);
    }

    #[test]
    fn test_clamp_zoom() {
        assert_eq!(clamp_zoom(0.1), ZOOM_MIN);
        assert_eq!(clamp_zoom(5.0), ZOOM_MAX);
        assert_eq!(clamp_zoom(1.25), 1.25);
        assert_eq!(clamp_zoom(f64::NAN), DEFAULT_ZOOM);
    }

    #[test]
    fn test_is_valid_zoom() {
        assert!(is_valid_zoom(2.0));
        assert!(is_valid_zoom(4.0));
        assert!(!is_valid_zoom(0.0));
        assert!(!is_valid_zoom(-1.0));
        assert!(!is_valid_zoom(f64::INFINITY));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
