//! WASM-compatible wrapper types and boundary helpers.
//!
//! Small values cross the boundary as wasm-bindgen classes; larger ones are
//! serialized to plain JS objects with serde_wasm_bindgen.

use reign_core::{ApiConfig, FocalPoint};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// A focal point for JavaScript, in percent.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsFocalPoint {
    x: f64,
    y: f64,
}

#[wasm_bindgen]
impl JsFocalPoint {
    /// Create a focal point; both axes are clamped into [0, 100].
    #[wasm_bindgen(constructor)]
    pub fn new(x: f64, y: f64) -> JsFocalPoint {
        FocalPoint::new(x, y).into()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// CSS `object-position` value, e.g. `"50% 50%"`.
    pub fn css(&self) -> String {
        reign_core::render::position_css(self.to_core())
    }
}

impl JsFocalPoint {
    pub(crate) fn to_core(self) -> FocalPoint {
        FocalPoint {
            x: self.x,
            y: self.y,
        }
    }
}

impl From<FocalPoint> for JsFocalPoint {
    fn from(point: FocalPoint) -> Self {
        Self {
            x: point.x,
            y: point.y,
        }
    }
}

/// Read an optional config object passed from JavaScript.
pub(crate) fn config_from_js(value: JsValue) -> Result<ApiConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(ApiConfig::default());
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))
}

/// Serialize a value into a plain JS object.
pub(crate) fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

pub(crate) fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focal_point_clamps() {
        let p = JsFocalPoint::new(-5.0, 120.0);
        assert_eq!(p.x(), 0.0);
        assert_eq!(p.y(), 100.0);
    }

    #[test]
    fn test_focal_point_css() {
        assert_eq!(JsFocalPoint::new(25.0, 50.0).css(), "25% 50%");
    }

    #[test]
    fn test_round_trip_to_core() {
        let p: JsFocalPoint = FocalPoint::new(10.0, 90.0).into();
        assert_eq!(p.to_core(), FocalPoint::new(10.0, 90.0));
    }
}
