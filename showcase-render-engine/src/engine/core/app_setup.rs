use bevy::asset::AssetMetaCheck;
use bevy::picking::mesh_picking::MeshPickingPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use crate::engine::core::app_state::{AppState, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::input::InputTrackingPlugin;
use crate::engine::loading::model_loader::{ModelAssets, request_model};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::loading::settings::ShowcaseSettings;
use crate::engine::loading::settings_loader::{SettingsLoader, resolve_settings, start_loading};
use crate::engine::scene::{GridMotionPlugin, ShowcaseScenePlugin};
use crate::tools::{InteractionPlugin, InteractionUiPlugin};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(MeshPickingPlugin)
        // Registers ShowcaseSettings as a loadable asset type from *.settings.json files.
        .add_plugins(JsonAssetPlugin::<ShowcaseSettings>::new(&["settings.json"]))
        .init_state::<AppState>();

    // Headless-capable interaction and motion
    app.add_plugins((InputTrackingPlugin, InteractionPlugin, GridMotionPlugin));

    // Renderer and UI
    app.add_plugins((ShowcaseScenePlugin, InteractionUiPlugin));

    app.init_resource::<LoadingProgress>()
        .init_resource::<SettingsLoader>()
        .init_resource::<ModelAssets>();

    app.add_systems(Startup, start_loading).add_systems(
        Update,
        (resolve_settings, request_model, transition_to_running)
            .chain()
            .run_if(in_state(AppState::Loading)),
    );

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
