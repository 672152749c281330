use std::collections::HashMap;

use bevy::color::ColorToPacked;
use bevy::prelude::*;
use bevy::scene::SceneInstanceReady;
use constants::render_settings::{
    CERAMIC_CLEARCOAT, CERAMIC_CLEARCOAT_ROUGHNESS, CERAMIC_METALLIC, CERAMIC_ROUGHNESS,
};

/// Colour applied to every mesh of the scene spawned under this entity.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Tint(pub Srgba);

/// Identity of a tinted material: which scene, which colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TintKey {
    scene: AssetId<Scene>,
    color: [u8; 4],
}

impl TintKey {
    pub fn new(scene: AssetId<Scene>, color: Srgba) -> Self {
        Self {
            scene,
            color: color.to_u8_array(),
        }
    }
}

/// Tinted ceramic materials, derived once per (scene, colour) and shared by
/// every instance with that pair.
#[derive(Resource, Default)]
pub struct TintedMaterialCache {
    entries: HashMap<TintKey, Handle<StandardMaterial>>,
}

impl TintedMaterialCache {
    pub fn get_or_insert_with(
        &mut self,
        key: TintKey,
        derive: impl FnOnce() -> Handle<StandardMaterial>,
    ) -> Handle<StandardMaterial> {
        self.entries.entry(key).or_insert_with(derive).clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Glossy white-based ceramic with the given tint.
pub fn ceramic_material(color: Srgba) -> StandardMaterial {
    StandardMaterial {
        base_color: color.into(),
        perceptual_roughness: CERAMIC_ROUGHNESS,
        metallic: CERAMIC_METALLIC,
        clearcoat: CERAMIC_CLEARCOAT,
        clearcoat_perceptual_roughness: CERAMIC_CLEARCOAT_ROUGHNESS,
        ..default()
    }
}

// Swap every mesh material in a freshly spawned model for the cached tinted ceramic
pub fn tint_scene_on_ready(
    trigger: Trigger<SceneInstanceReady>,
    pivots: Query<(&SceneRoot, &Tint)>,
    children: Query<&Children>,
    meshes: Query<(), With<MeshMaterial3d<StandardMaterial>>>,
    mut cache: ResMut<TintedMaterialCache>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut commands: Commands,
) {
    let root = trigger.target();
    let Ok((scene_root, tint)) = pivots.get(root) else {
        return;
    };

    let key = TintKey::new(scene_root.0.id(), tint.0);
    let material = cache.get_or_insert_with(key, || materials.add(ceramic_material(tint.0)));

    for entity in children.iter_descendants(root) {
        if meshes.contains(entity) {
            commands
                .entity(entity)
                .insert(MeshMaterial3d(material.clone()));
        }
    }
}
