use bevy::prelude::*;
use constants::motion::MOLASSES;

use super::grid::GridCell;
use super::materials::Tint;
use crate::engine::animation::hover::{HoverMotion, InstanceRole, hover_targets};
use crate::engine::animation::spring::SpringTransform;
use crate::engine::input::pointer::{PointerState, ViewportMetrics};
use crate::engine::input::scroll::ScrollAccumulator;
use crate::engine::loading::settings::ShowcaseSettings;
use crate::tools::cursor::InstanceHover;
use crate::tools::selection::{SelectRequest, SelectionController};

/// Root of one grid instance. The root carries placement (`SpringTransform`),
/// the pivot child carries pointer response (`HoverMotion`) and the model.
#[derive(Component, Debug)]
pub struct ObjectInstance {
    pub pivot: Entity,
}

#[derive(Component)]
pub struct ModelPivot;

/// Placement target for an instance given its role.
///
/// Hidden instances keep their grid slot and only scale to zero.
pub fn coarse_target(
    role: InstanceRole,
    base_position: Vec3,
    settings: &ShowcaseSettings,
) -> (Vec3, f32) {
    match role {
        InstanceRole::Selected => (Vec3::ZERO, settings.detail_scale),
        InstanceRole::AnotherSelected => (base_position, 0.0),
        InstanceRole::Grid => (base_position, settings.base_scale),
    }
}

pub fn spawn_instance(
    commands: &mut Commands,
    container: Entity,
    cell: &GridCell,
    settings: &ShowcaseSettings,
    scene: Handle<Scene>,
) -> Entity {
    let motion = SpringTransform::at(cell.base_position, settings.base_scale, MOLASSES);
    let id = cell.id.clone();

    let root = commands
        .spawn((
            Name::new(format!("cell {}", cell.id)),
            cell.clone(),
            motion,
            motion.transform(),
            Visibility::default(),
            HoverMotion::default(),
            ChildOf(container),
        ))
        .observe(
            move |_: Trigger<Pointer<Click>>, mut requests: EventWriter<SelectRequest>| {
                requests.write(SelectRequest(id.clone()));
            },
        )
        .observe(|_: Trigger<Pointer<Over>>, mut hovers: EventWriter<InstanceHover>| {
            hovers.write(InstanceHover::Entered);
        })
        .observe(|_: Trigger<Pointer<Out>>, mut hovers: EventWriter<InstanceHover>| {
            hovers.write(InstanceHover::Left);
        })
        .id();

    let pivot = commands
        .spawn((
            ModelPivot,
            Transform::IDENTITY,
            Visibility::default(),
            SceneRoot(scene),
            Tint(cell.color),
            ChildOf(root),
        ))
        .id();

    commands.entity(root).insert(ObjectInstance { pivot });
    root
}

// Point every instance's placement spring at its new target after a selection change
pub fn retarget_instances(
    selection: Res<SelectionController>,
    settings: Res<ShowcaseSettings>,
    mut instances: Query<(&GridCell, &mut SpringTransform), With<ObjectInstance>>,
) {
    for (cell, mut motion) in &mut instances {
        let role = selection.role_of(&cell.id);
        let (translation, scale) = coarse_target(role, cell.base_position, &settings);
        motion.retarget(translation, scale);
    }
}

// Per-frame pointer/scroll response, written to each instance's pivot
pub fn update_hover_motion(
    selection: Res<SelectionController>,
    pointer: Res<PointerState>,
    viewport: Res<ViewportMetrics>,
    scroll: Res<ScrollAccumulator>,
    settings: Res<ShowcaseSettings>,
    mut instances: Query<(&GridCell, &ObjectInstance, &mut HoverMotion)>,
    mut pivots: Query<&mut Transform, With<ModelPivot>>,
) {
    let sample = viewport.sample(&pointer);
    let hover_ratio = settings.hover_ratio();

    for (cell, instance, mut motion) in &mut instances {
        let role = selection.role_of(&cell.id);
        let targets = hover_targets(
            role,
            sample,
            cell.base_position,
            scroll.value(),
            hover_ratio,
        );
        motion.step(targets);

        let Ok(mut transform) = pivots.get_mut(instance.pivot) else {
            continue;
        };
        *transform = motion.transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coarse_targets_per_role() {
        let settings = ShowcaseSettings::default();
        let base = Vec3::new(-12.0, 4.0, 0.0);

        assert_eq!(
            coarse_target(InstanceRole::Selected, base, &settings),
            (Vec3::ZERO, 100.0)
        );
        assert_eq!(
            coarse_target(InstanceRole::AnotherSelected, base, &settings),
            (base, 0.0)
        );
        assert_eq!(
            coarse_target(InstanceRole::Grid, base, &settings),
            (base, 20.0)
        );
    }
}
