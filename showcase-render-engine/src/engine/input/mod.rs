//! Continuous viewer input: scroll rotation and pointer position.

/// Pointer NDC tracking and view-plane metrics for grid-space conversion.
pub mod pointer;

/// Unbounded scroll-wheel rotation accumulator.
pub mod scroll;

use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;

use crate::engine::core::sets::{ShowcaseSet, configure_showcase_sets};
use pointer::{PointerState, ViewportMetrics, track_pointer, update_viewport_metrics};
use scroll::{ScrollAccumulator, accumulate_scroll};

// Registers scroll/pointer resources and the systems that feed them.
pub struct InputTrackingPlugin;

impl Plugin for InputTrackingPlugin {
    fn build(&self, app: &mut App) {
        configure_showcase_sets(app);

        app.add_event::<MouseWheel>()
            .init_resource::<ScrollAccumulator>()
            .init_resource::<PointerState>()
            .init_resource::<ViewportMetrics>()
            .add_systems(
                Update,
                (accumulate_scroll, track_pointer, update_viewport_metrics)
                    .in_set(ShowcaseSet::Input),
            );
    }
}
