use std::time::Duration;

use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::access::UNLOCK_SECRET;

use showcase_render_engine::engine::core::sets::ShowcaseSet;
use showcase_render_engine::engine::loading::progress::LoadingProgress;
use showcase_render_engine::engine::loading::settings::ShowcaseSettings;
use showcase_render_engine::engine::loading::settings_loader::{
    SettingsLoader, resolve_settings, start_loading,
};
use showcase_render_engine::engine::scene::grid::CellId;
use showcase_render_engine::tools::InteractionPlugin;
use showcase_render_engine::tools::access_gate::AccessGate;
use showcase_render_engine::tools::close_button::close_on_escape;
use showcase_render_engine::tools::selection::{SelectRequest, SelectionController};

fn settings_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, AssetPlugin::default()))
        .add_plugins(JsonAssetPlugin::<ShowcaseSettings>::new(&["settings.json"]))
        .init_resource::<LoadingProgress>()
        .init_resource::<SettingsLoader>()
        .add_systems(Update, resolve_settings);
    app
}

/// Runs frames until settings resolve or the attempt budget runs out.
fn run_until_resolved(app: &mut App) -> bool {
    for _ in 0..1000 {
        app.update();
        if app.world().resource::<LoadingProgress>().settings_resolved {
            return true;
        }
        std::thread::sleep(Duration::from_millis(2));
    }
    false
}

#[test]
fn missing_settings_file_falls_back_to_defaults() {
    let mut app = settings_app();
    let handle = app
        .world()
        .resource::<AssetServer>()
        .load("does-not-exist.settings.json");
    app.insert_resource(SettingsLoader::new(handle));

    assert!(run_until_resolved(&mut app));
    assert_eq!(
        *app.world().resource::<ShowcaseSettings>(),
        ShowcaseSettings::default()
    );
    assert!(app.world().resource::<Assets<ShowcaseSettings>>().is_empty());
}

#[test]
fn shipped_settings_file_loads() {
    let mut app = settings_app();
    app.add_systems(Startup, start_loading);

    assert!(run_until_resolved(&mut app));
    assert_eq!(app.world().resource::<Assets<ShowcaseSettings>>().len(), 1);

    let settings = app.world().resource::<ShowcaseSettings>();
    assert_eq!((settings.columns, settings.rows), (9, 5));
    assert_eq!(settings.model_path, "models/cabal.glb");
}

fn escape_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, InteractionPlugin))
        .init_resource::<ButtonInput<KeyCode>>()
        .add_systems(Update, close_on_escape.in_set(ShowcaseSet::Input));
    app.world_mut()
        .resource_mut::<AccessGate>()
        .on_input(UNLOCK_SECRET);
    app
}

#[test]
fn escape_closes_the_open_cell() {
    let mut app = escape_app();

    app.world_mut()
        .send_event(SelectRequest(CellId::from_coords(3, 1)));
    app.update();
    assert!(
        app.world()
            .resource::<SelectionController>()
            .is_selected(&CellId::from_coords(3, 1))
    );

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::Escape);
    app.update();
    assert!(app.world().resource::<SelectionController>().is_grid_mode());
}

#[test]
fn escape_in_grid_mode_changes_nothing() {
    let mut app = escape_app();
    app.update();

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::Escape);
    app.update();
    assert_eq!(
        *app.world().resource::<SelectionController>(),
        SelectionController::default()
    );
}
