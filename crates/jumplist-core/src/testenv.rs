//! In-memory environment for exercising the engine without a display surface.

use std::cell::Cell;
use std::collections::HashMap;

use crate::env::ViewportEnv;
use crate::geometry::{Rect, ScrollPosition, ViewportSize};

/// Fake host: elements live at fixed document-absolute rects, and the
/// viewport-relative view is derived from a settable scroll position.
pub(crate) struct FakeEnv {
    elements: HashMap<String, Rect>,
    scroll: ScrollPosition,
    viewport: ViewportSize,
    resolve_calls: Cell<usize>,
    animated_to: Vec<(f64, f64)>,
}

impl FakeEnv {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            elements: HashMap::new(),
            scroll: ScrollPosition::default(),
            viewport: ViewportSize::new(width, height),
            resolve_calls: Cell::new(0),
            animated_to: Vec::new(),
        }
    }

    /// Add an element at a document-absolute rect.
    pub fn with_element(mut self, id: &str, document_rect: Rect) -> Self {
        self.elements.insert(id.to_string(), document_rect);
        self
    }

    pub fn set_element(&mut self, id: &str, document_rect: Rect) {
        self.elements.insert(id.to_string(), document_rect);
    }

    pub fn scroll_by(&mut self, dx: f64, dy: f64) {
        self.scroll.x += dx;
        self.scroll.y += dy;
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = ViewportSize::new(width, height);
    }

    /// Number of element resolutions performed, i.e. measurement activity.
    pub fn resolve_calls(&self) -> usize {
        self.resolve_calls.get()
    }

    /// Coordinates of every animated scroll requested so far.
    pub fn animated_to(&self) -> &[(f64, f64)] {
        &self.animated_to
    }
}

impl ViewportEnv for FakeEnv {
    type Handle = Rect;

    fn resolve_element(&self, id: &str) -> Option<Rect> {
        self.resolve_calls.set(self.resolve_calls.get() + 1);
        self.elements.get(id).copied()
    }

    fn bounding_rect(&self, handle: &Rect) -> Rect {
        // Document-absolute handle viewed through the current scroll.
        handle.shifted_by_scroll(self.scroll.x, self.scroll.y)
    }

    fn scroll_position(&self) -> ScrollPosition {
        self.scroll
    }

    fn viewport_size(&self) -> ViewportSize {
        self.viewport
    }

    fn animate_scroll_to(&mut self, x: f64, y: f64) {
        self.animated_to.push((x, y));
    }
}
