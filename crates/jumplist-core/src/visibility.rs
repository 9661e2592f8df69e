//! Visibility policy
//!
//! Pure overlap test between a target rect and the threshold-inset viewport.
//! Shared by the measurer and the tracker.

use crate::geometry::{Rect, ViewportSize};

/// Decide whether a viewport-relative rect overlaps the viewport after
/// insetting every edge by `threshold`.
///
/// Inequalities are inclusive: a rect exactly touching a boundary counts as
/// in frame. `None` means exact viewport edges; `Some(0.0)` computes the same
/// boundaries.
pub fn is_in_frame(rect: &Rect, viewport: ViewportSize, threshold: Option<f64>) -> bool {
    let inset = threshold.unwrap_or(0.0);

    let top_bound = inset;
    let left_bound = inset;
    let right_bound = viewport.width - inset;
    let bottom_bound = viewport.height - inset;

    (rect.top <= bottom_bound && rect.bottom >= top_bound)
        && (rect.right >= left_bound && rect.left <= right_bound)
}
