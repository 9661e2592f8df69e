//! Full measurement
//!
//! Queries the environment for authoritative geometry of every target. This
//! is the expensive path; the tracker derives cheap updates from its output
//! until the next layout-affecting change.

use tracing::{debug, trace};

use crate::env::ViewportEnv;
use crate::registry::{TargetGeometry, TargetRegistry, TargetSpec};
use crate::visibility::is_in_frame;

/// Measure every target against the current viewport.
///
/// Targets whose id does not resolve are omitted from the result, not
/// reported as errors; a later measurement may pick them up. Reads
/// environment geometry only, nothing is mutated.
pub fn measure_all<E: ViewportEnv>(
    env: &E,
    specs: &[TargetSpec],
    threshold: Option<f64>,
) -> TargetRegistry {
    let viewport = env.viewport_size();
    let scroll = env.scroll_position();
    let mut registry = TargetRegistry::new();

    for spec in specs {
        let Some(handle) = env.resolve_element(&spec.target_id) else {
            debug!(target_id = %spec.target_id, "target did not resolve, omitting");
            continue;
        };

        let rect = env.bounding_rect(&handle);
        let geometry = TargetGeometry {
            rect,
            is_in_frame: is_in_frame(&rect, viewport, threshold),
            // Document-absolute anchors: viewport-relative position plus the
            // scroll offset at measurement time.
            offset_left: rect.left + scroll.x,
            offset_top: rect.top + scroll.y,
        };

        trace!(
            target_id = %spec.target_id,
            top = rect.top,
            left = rect.left,
            in_frame = geometry.is_in_frame,
            "measured target"
        );
        registry.insert(spec.target_id.clone(), geometry);
    }

    debug!(
        measured = registry.len(),
        requested = specs.len(),
        "full measurement complete"
    );
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::testenv::FakeEnv;

    fn specs(ids: &[&str]) -> Vec<TargetSpec> {
        ids.iter().map(|id| TargetSpec::new(*id)).collect()
    }

    #[test]
    fn test_measures_resolved_targets() {
        let env = FakeEnv::new(800.0, 600.0)
            .with_element("sec1", Rect::new(100.0, 50.0, 150.0, 0.0))
            .with_element("sec2", Rect::new(900.0, 50.0, 1100.0, 0.0));

        let registry = measure_all(&env, &specs(&["sec1", "sec2"]), Some(0.0));

        assert_eq!(registry.len(), 2);
        let sec1 = registry.get("sec1").unwrap();
        assert!(sec1.is_in_frame);
        let sec2 = registry.get("sec2").unwrap();
        assert!(!sec2.is_in_frame);
    }

    #[test]
    fn test_unresolved_target_is_omitted() {
        let env = FakeEnv::new(800.0, 600.0).with_element("sec1", Rect::new(0.0, 50.0, 50.0, 0.0));

        let registry = measure_all(&env, &specs(&["sec1", "ghost"]), None);

        assert_eq!(registry.len(), 1);
        assert!(!registry.contains("ghost"));
    }

    #[test]
    fn test_offsets_are_document_absolute() {
        // Element at document y 500..560, viewport scrolled down 300.
        let mut env =
            FakeEnv::new(800.0, 600.0).with_element("sec1", Rect::new(500.0, 50.0, 560.0, 20.0));
        env.scroll_by(10.0, 300.0);

        let registry = measure_all(&env, &specs(&["sec1"]), None);
        let sec1 = registry.get("sec1").unwrap();

        // Viewport-relative rect reflects the scroll.
        assert_eq!(sec1.rect.top, 200.0);
        assert_eq!(sec1.rect.left, 10.0);
        // Anchors are back in document coordinates.
        assert_eq!(sec1.offset_top, 500.0);
        assert_eq!(sec1.offset_left, 20.0);
    }

    #[test]
    fn test_measurement_is_idempotent() {
        let env = FakeEnv::new(800.0, 600.0)
            .with_element("a", Rect::new(10.0, 100.0, 90.0, 5.0))
            .with_element("b", Rect::new(700.0, 100.0, 790.0, 5.0));
        let list = specs(&["a", "b"]);

        let first = measure_all(&env, &list, Some(25.0));
        let second = measure_all(&env, &list, Some(25.0));

        assert_eq!(first, second);
    }
}
