//! Target registry
//!
//! Per-target measured geometry keyed by target id. The coordinator owns the
//! registry exclusively and replaces it atomically on every measurement or
//! tracking step; consumers only ever see a complete registry.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// A navigable page region, identified by a stable id.
///
/// Supplied fresh by the caller on every update and never mutated here. The
/// clickable markup associated with a target stays with the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetSpec {
    pub target_id: String,
}

impl TargetSpec {
    pub fn new(target_id: impl Into<String>) -> Self {
        Self {
            target_id: target_id.into(),
        }
    }
}

/// Measured geometry for one target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetGeometry {
    /// Viewport-relative rect as of the last measurement or tracking step.
    pub rect: Rect,
    /// Whether the rect overlaps the (threshold-inset) viewport.
    pub is_in_frame: bool,
    /// Document-absolute left anchor used for scroll-to. Set only at full
    /// measurement; tracking carries it through untouched.
    pub offset_left: f64,
    /// Document-absolute top anchor used for scroll-to. Set only at full
    /// measurement; tracking carries it through untouched.
    pub offset_top: f64,
}

/// Registry of measured targets.
///
/// A target missing from the registry is the error signal: it failed to
/// resolve at the last measurement and re-enters once a later measurement
/// finds it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetRegistry {
    entries: HashMap<String, TargetGeometry>,
}

impl TargetRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Look up a target's geometry.
    pub fn get(&self, target_id: &str) -> Option<&TargetGeometry> {
        self.entries.get(target_id)
    }

    /// Check whether a target resolved at the last measurement.
    pub fn contains(&self, target_id: &str) -> bool {
        self.entries.contains_key(target_id)
    }

    /// Iterate over all entries (arbitrary order).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TargetGeometry)> {
        self.entries.iter().map(|(id, g)| (id.as_str(), g))
    }

    pub(crate) fn insert(&mut self, target_id: String, geometry: TargetGeometry) {
        self.entries.insert(target_id, geometry);
    }
}
