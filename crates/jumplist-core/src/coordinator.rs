//! Scroll coordinator
//!
//! Owns the target registry and decides, per host update, whether a cheap
//! tracking step is valid or a full measurement is required. Also serves
//! scroll-to-target requests from the stored document anchors.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::JumplistConfig;
use crate::env::ViewportEnv;
use crate::geometry::{ScrollInfo, WindowInfo};
use crate::measure::measure_all;
use crate::registry::{TargetRegistry, TargetSpec};
use crate::track::track_all;

/// Per-target visibility produced for the rendering layer, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JumplistItem {
    pub target_id: String,
    pub is_in_frame: bool,
}

/// Coordinates measurement and tracking over the target registry.
///
/// Single-threaded and synchronous: every update replaces the registry as a
/// whole, so a consumer sees either the old registry or the new one, never a
/// partial rebuild. The registry is written from here only.
#[derive(Debug, Default)]
pub struct Jumplist {
    config: JumplistConfig,
    registry: TargetRegistry,
    last_scroll: Option<ScrollInfo>,
    last_window: Option<WindowInfo>,
}

impl Jumplist {
    pub fn new(config: JumplistConfig) -> Self {
        Self {
            config,
            registry: TargetRegistry::new(),
            last_scroll: None,
            last_window: None,
        }
    }

    pub fn config(&self) -> &JumplistConfig {
        &self.config
    }

    /// Read-only view of the current registry.
    pub fn registry(&self) -> &TargetRegistry {
        &self.registry
    }

    /// Initial measurement. Call once when the host mounts the jumplist.
    pub fn mount<E: ViewportEnv>(&mut self, env: &E, specs: &[TargetSpec]) {
        debug!(targets = specs.len(), "mounting, full measurement");
        self.registry = measure_all(env, specs, self.config.threshold);

        let viewport = env.viewport_size();
        self.last_window = Some(WindowInfo::new(viewport.width, viewport.height));
    }

    /// React to one host scroll/resize update.
    ///
    /// A window size change forces a full measurement: layout may have moved
    /// elements in ways a scroll delta cannot capture. A scroll change tracks
    /// incrementally, except on the first-ever scroll sample (`count == 1`),
    /// which measures instead of tracking from an uninitialized baseline.
    /// When a resize and a scroll land in the same update, measurement wins
    /// and tracking is skipped for that cycle: the measurement already
    /// reflects the latest layout and scroll position.
    pub fn update<E: ViewportEnv>(
        &mut self,
        env: &E,
        specs: &[TargetSpec],
        scroll: ScrollInfo,
        window: WindowInfo,
    ) {
        let window_changed = self.last_window.map_or(true, |w| w != window);
        // No stored sample yet counts as changed; the count gate below keeps
        // tracking off an unmeasured baseline either way.
        let scroll_changed = self
            .last_scroll
            .map_or(true, |s| s.x != scroll.x || s.y != scroll.y);

        if window_changed || (scroll_changed && scroll.count <= 1) {
            debug!(
                window_changed,
                scroll_changed,
                count = scroll.count,
                "update requires full measurement"
            );
            self.registry = measure_all(env, specs, self.config.threshold);
        } else if scroll_changed {
            debug!(
                x_difference = scroll.x_difference,
                y_difference = scroll.y_difference,
                "update tracks from baseline"
            );
            self.registry = track_all(
                &self.registry,
                scroll.x_difference,
                scroll.y_difference,
                env.viewport_size(),
                self.config.threshold,
            );
        }

        self.last_scroll = Some(scroll);
        self.last_window = Some(window);
    }

    /// Request an animated scroll to a target's stored document anchor.
    ///
    /// Unknown targets are ignored: a target absent from the registry never
    /// resolved at the last measurement.
    pub fn scroll_to<E: ViewportEnv>(&self, env: &mut E, target_id: &str) {
        let Some(geometry) = self.registry.get(target_id) else {
            debug!(target_id, "scroll_to on unknown target, ignoring");
            return;
        };

        let x = geometry.offset_left + self.config.h_scroll_offset;
        let y = geometry.offset_top + self.config.v_scroll_offset;
        debug!(target_id, x, y, "requesting animated scroll");
        env.animate_scroll_to(x, y);
    }

    /// Visibility for each input spec, in input order.
    ///
    /// Targets missing from the registry report out-of-frame.
    pub fn items(&self, specs: &[TargetSpec]) -> Vec<JumplistItem> {
        specs
            .iter()
            .map(|spec| JumplistItem {
                target_id: spec.target_id.clone(),
                is_in_frame: self
                    .registry
                    .get(&spec.target_id)
                    .is_some_and(|g| g.is_in_frame),
            })
            .collect()
    }
}
