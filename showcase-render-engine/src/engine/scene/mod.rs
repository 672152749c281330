//! Scene content: the grid, its instances, materials and stage dressing.
//!
//! ## Entity layout
//!
//! ```text
//! GridContainer (SpringTransform: intro fly-in)
//!   └─> cell "i-j" (GridCell, SpringTransform: grid slot <-> detail, HoverMotion)
//!         └─> ModelPivot (Transform written from HoverMotion, SceneRoot, Tint)
//!               └─> glTF scene meshes, materials swapped for tinted ceramic
//! ```

/// Grid layout, cell identifiers and the container intro.
pub mod grid;

/// Per-instance spawning, placement retargeting and hover update.
pub mod instance;

/// Tinted ceramic material cache keyed by scene and colour.
pub mod materials;

/// Camera, lights, background and the grid-mode shadow floor.
pub mod stage;

use bevy::prelude::*;

use crate::engine::animation::spring::step_spring_transforms;
use crate::engine::core::app_state::AppState;
use crate::engine::core::sets::{ShowcaseSet, configure_showcase_sets};
use crate::engine::loading::settings::ShowcaseSettings;
use crate::tools::access_gate::access_granted;
use crate::tools::selection::SelectionController;
use grid::{reveal_grid, spawn_grid};
use instance::{retarget_instances, update_hover_motion};
use materials::{TintedMaterialCache, tint_scene_on_ready};
use stage::{spawn_stage, sync_shadow_catcher};

// Frame-by-frame motion of the grid; needs no renderer, so it also runs headless.
pub struct GridMotionPlugin;

impl Plugin for GridMotionPlugin {
    fn build(&self, app: &mut App) {
        configure_showcase_sets(app);

        app.init_resource::<ShowcaseSettings>().add_systems(
            Update,
            (
                reveal_grid,
                retarget_instances.run_if(resource_changed::<SelectionController>),
                step_spring_transforms,
                update_hover_motion.run_if(access_granted),
                sync_shadow_catcher.run_if(resource_changed::<SelectionController>),
            )
                .chain()
                .in_set(ShowcaseSet::Motion),
        );
    }
}

// Renderer-facing setup: stage, grid spawn and material tinting.
pub struct ShowcaseScenePlugin;

impl Plugin for ShowcaseScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TintedMaterialCache>()
            .add_observer(tint_scene_on_ready)
            .add_systems(Startup, spawn_stage)
            .add_systems(OnEnter(AppState::Running), spawn_grid);
    }
}
