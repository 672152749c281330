use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::grid::SETTINGS_PATH;

use super::progress::LoadingProgress;
use super::settings::ShowcaseSettings;

#[derive(Resource, Default)]
pub struct SettingsLoader {
    handle: Option<Handle<ShowcaseSettings>>,
}

impl SettingsLoader {
    pub fn new(handle: Handle<ShowcaseSettings>) -> Self {
        Self {
            handle: Some(handle),
        }
    }
}

// Start the settings load
pub fn start_loading(mut loader: ResMut<SettingsLoader>, asset_server: Res<AssetServer>) {
    *loader = SettingsLoader::new(asset_server.load(SETTINGS_PATH));
}

// Apply loaded settings, or fall back to defaults if the file is missing or malformed
pub fn resolve_settings(
    loader: Res<SettingsLoader>,
    asset_server: Res<AssetServer>,
    settings_assets: Res<Assets<ShowcaseSettings>>,
    mut progress: ResMut<LoadingProgress>,
    mut commands: Commands,
) {
    if progress.settings_resolved {
        return;
    }
    let Some(handle) = loader.handle.as_ref() else {
        return;
    };

    let settings = if let Some(loaded) = settings_assets.get(handle) {
        info!("✓ Settings loaded from {}", SETTINGS_PATH);
        loaded.clone().sanitised()
    } else if let Some(LoadState::Failed(err)) = asset_server.get_load_state(handle) {
        warn!("Could not load {}: {}; using defaults", SETTINGS_PATH, err);
        ShowcaseSettings::default()
    } else {
        return;
    };

    commands.insert_resource(settings);
    progress.settings_resolved = true;
}
