//! Geometry primitives and host event payloads
//!
//! All coordinates are f64 pixels. Target rects are viewport-relative;
//! scroll positions and stored target anchors are document-absolute.

use serde::{Deserialize, Serialize};

/// Edges of a rectangle, relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Rect {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Derive the rect after the viewport scrolled by the given deltas.
    ///
    /// Viewport-relative position moves exactly inversely to scroll, so every
    /// edge shifts by the negated delta.
    pub fn shifted_by_scroll(&self, x_difference: f64, y_difference: f64) -> Self {
        Self {
            top: self.top - y_difference,
            right: self.right - x_difference,
            bottom: self.bottom - y_difference,
            left: self.left - x_difference,
        }
    }
}

/// Viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Document scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollPosition {
    pub x: f64,
    pub y: f64,
}

/// Horizontal scroll direction as reported by the host event provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum XDirection {
    #[default]
    #[serde(rename = "")]
    None,
    Left,
    Right,
}

/// Vertical scroll direction as reported by the host event provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YDirection {
    #[default]
    #[serde(rename = "")]
    None,
    Up,
    Down,
}

/// One scroll sample from the host event provider.
///
/// `count` distinguishes the first-ever sample (1) from subsequent deltas:
/// only samples past the first carry a baseline valid for incremental
/// tracking. The engine consumes the differences and `count`; the direction
/// fields are carried for host fidelity.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrollInfo {
    pub x: f64,
    pub y: f64,
    pub x_difference: f64,
    pub y_difference: f64,
    pub x_direction: XDirection,
    pub y_direction: YDirection,
    pub count: u64,
}

/// Window dimensions from the host event provider.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowInfo {
    pub width: f64,
    pub height: f64,
}

impl WindowInfo {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
