//! Engine configuration

use serde::{Deserialize, Serialize};

/// Tuning for visibility and scroll-to behavior.
///
/// All fields are optional on the wire; defaults mean exact viewport edges
/// and unadjusted scroll coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JumplistConfig {
    /// Inward inset (pixels) applied to all four viewport edges before the
    /// overlap test. `None` means exact viewport edges.
    pub threshold: Option<f64>,
    /// Constant adjustment added to the horizontal scroll-to coordinate.
    pub h_scroll_offset: f64,
    /// Constant adjustment added to the vertical scroll-to coordinate.
    pub v_scroll_offset: f64,
}

impl JumplistConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn with_h_scroll_offset(mut self, offset: f64) -> Self {
        self.h_scroll_offset = offset;
        self
    }

    pub fn with_v_scroll_offset(mut self, offset: f64) -> Self {
        self.v_scroll_offset = offset;
        self
    }
}
