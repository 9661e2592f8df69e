//! Jumplist Core - Viewport visibility tracking for in-page navigation
//!
//! Tracks a set of named page regions ("targets") and exposes which of them
//! are currently visible within the viewport:
//! - Full measurement of target geometry through an injected environment
//! - Incremental tracking from scroll deltas, without environment queries
//! - Threshold-inset visibility policy shared by both paths
//! - Scroll-to-target from document anchors stored at measurement time
//!
//! The crate is host-agnostic: rendering, CSS, scroll animation, and the
//! production of scroll/resize events all live with the host, which talks to
//! the engine through [`ViewportEnv`] and the coordinator's update calls.

pub mod config;
pub mod coordinator;
pub mod env;
pub mod geometry;
pub mod measure;
pub mod registry;
pub mod track;
pub mod visibility;

#[cfg(test)]
mod testenv;

// Re-exports for convenience
pub use config::JumplistConfig;
pub use coordinator::{Jumplist, JumplistItem};
pub use env::ViewportEnv;
pub use geometry::{
    Rect, ScrollInfo, ScrollPosition, ViewportSize, WindowInfo, XDirection, YDirection,
};
pub use measure::measure_all;
pub use registry::{TargetGeometry, TargetRegistry, TargetSpec};
pub use track::track_all;
pub use visibility::is_in_frame;
