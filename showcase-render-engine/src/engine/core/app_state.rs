use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

// Settings resolved and model requested: the grid can be spawned
pub fn transition_to_running(
    progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if progress.settings_resolved && progress.model_requested {
        info!("→ Transitioning to Running state");
        next_state.set(AppState::Running);
    }
}
