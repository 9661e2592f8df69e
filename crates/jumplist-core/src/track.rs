//! Incremental tracking
//!
//! Derives new geometry from the last measured baseline plus a scroll delta,
//! without touching the environment. Valid only while no layout change
//! intervened; the coordinator falls back to a full measurement otherwise.

use tracing::trace;

use crate::geometry::ViewportSize;
use crate::registry::{TargetGeometry, TargetRegistry};
use crate::visibility::is_in_frame;

/// Shift every registry entry by the scroll delta and recompute visibility.
///
/// Document-absolute anchors (`offset_left`/`offset_top`) are preserved
/// unchanged; only the viewport-relative rect and `is_in_frame` are derived.
/// An empty registry yields an empty registry.
pub fn track_all(
    registry: &TargetRegistry,
    x_difference: f64,
    y_difference: f64,
    viewport: ViewportSize,
    threshold: Option<f64>,
) -> TargetRegistry {
    let mut tracked = TargetRegistry::new();

    for (target_id, geometry) in registry.iter() {
        let rect = geometry.rect.shifted_by_scroll(x_difference, y_difference);
        tracked.insert(
            target_id.to_string(),
            TargetGeometry {
                rect,
                is_in_frame: is_in_frame(&rect, viewport, threshold),
                offset_left: geometry.offset_left,
                offset_top: geometry.offset_top,
            },
        );
    }

    trace!(
        tracked = tracked.len(),
        x_difference,
        y_difference,
        "tracked targets"
    );
    tracked
}
