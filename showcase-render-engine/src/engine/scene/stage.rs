use bevy::prelude::*;
use constants::render_settings::{
    AMBIENT_BRIGHTNESS, BACKGROUND_COLOR, CAMERA_FOV_DEGREES, CAMERA_TRANSLATION,
    POINT_LIGHT_INTENSITY, POINT_LIGHT_RANGE, POINT_LIGHT_TRANSLATION, SHADOW_CATCHER_HEIGHT,
    SHADOW_CATCHER_SIZE, SPOT_LIGHT_INTENSITY, SPOT_LIGHT_OUTER_ANGLE, SPOT_LIGHT_RANGE,
    SPOT_LIGHT_TRANSLATION,
};

use crate::tools::selection::SelectionController;

#[derive(Component)]
pub struct ShowcaseCamera;

/// Floor that only receives shadows while the grid is showing.
#[derive(Component)]
pub struct ShadowCatcher;

fn spawn_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            ..default()
        }),
        Transform::from_translation(CAMERA_TRANSLATION).looking_at(Vec3::ZERO, Vec3::Y),
        ShowcaseCamera,
    ));
}

fn spawn_lighting(commands: &mut Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });

    commands.spawn((
        SpotLight {
            intensity: SPOT_LIGHT_INTENSITY,
            range: SPOT_LIGHT_RANGE,
            outer_angle: SPOT_LIGHT_OUTER_ANGLE,
            // full penumbra: falloff starts at the cone axis
            inner_angle: 0.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(SPOT_LIGHT_TRANSLATION).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        PointLight {
            color: Color::WHITE,
            intensity: POINT_LIGHT_INTENSITY,
            range: POINT_LIGHT_RANGE,
            ..default()
        },
        Transform::from_translation(POINT_LIGHT_TRANSLATION),
    ));
}

fn spawn_shadow_catcher(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(SHADOW_CATCHER_SIZE, SHADOW_CATCHER_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: BACKGROUND_COLOR,
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::from_xyz(0.0, SHADOW_CATCHER_HEIGHT, 0.0),
        ShadowCatcher,
    ));
}

// Camera, lights, background and shadow floor
pub fn spawn_stage(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(ClearColor(BACKGROUND_COLOR));
    spawn_camera(&mut commands);
    spawn_lighting(&mut commands);
    spawn_shadow_catcher(&mut commands, &mut meshes, &mut materials);
}

pub fn sync_shadow_catcher(
    selection: Res<SelectionController>,
    mut catchers: Query<&mut Visibility, With<ShadowCatcher>>,
) {
    let visibility = if selection.is_grid_mode() {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
    for mut current in &mut catchers {
        *current = visibility;
    }
}
