//! Host environment capability
//!
//! All geometry access goes through this trait so the engine runs without a
//! real display surface. A browser host backs it with DOM queries; tests use
//! an in-memory fake.

use crate::geometry::{Rect, ScrollPosition, ViewportSize};

/// Environment the engine measures against and scrolls within.
pub trait ViewportEnv {
    /// Opaque element handle resolved from a target id.
    type Handle;

    /// Resolve a target id to an element, if one exists.
    fn resolve_element(&self, id: &str) -> Option<Self::Handle>;

    /// Viewport-relative bounding rect of a resolved element.
    fn bounding_rect(&self, handle: &Self::Handle) -> Rect;

    /// Current document scroll position.
    fn scroll_position(&self) -> ScrollPosition;

    /// Current viewport dimensions.
    fn viewport_size(&self) -> ViewportSize;

    /// Request an animated scroll to document coordinates.
    ///
    /// Fire-and-forget: the engine never awaits completion or cancels an
    /// in-flight animation. A later request on another target simply issues
    /// a new one; overlap behavior belongs to the host animator.
    fn animate_scroll_to(&mut self, x: f64, y: f64);
}
