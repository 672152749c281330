use bevy::prelude::*;

use super::progress::LoadingProgress;
use super::settings::ShowcaseSettings;

/// Shared scene every grid cell instantiates.
#[derive(Resource, Default, Clone)]
pub struct ModelAssets {
    pub scene: Handle<Scene>,
}

// Request the model scene once settings are known
pub fn request_model(
    settings: Res<ShowcaseSettings>,
    asset_server: Res<AssetServer>,
    mut progress: ResMut<LoadingProgress>,
    mut model: ResMut<ModelAssets>,
) {
    if !progress.settings_resolved || progress.model_requested {
        return;
    }

    info!("Loading model scene: {}", settings.model_path);
    model.scene =
        asset_server.load(GltfAssetLabel::Scene(0).from_asset(settings.model_path.clone()));
    progress.model_requested = true;
}
