use bevy::prelude::*;

/// Per-frame ordering: read input, apply selection/gate changes, then move.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShowcaseSet {
    Input,
    Interaction,
    Motion,
}

pub fn configure_showcase_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (
            ShowcaseSet::Input,
            ShowcaseSet::Interaction,
            ShowcaseSet::Motion,
        )
            .chain(),
    );
}
