use bevy::prelude::*;
use bevy::window::{PrimaryWindow, SystemCursorIcon};
use bevy::winit::cursor::CursorIcon;

use super::access_gate::AccessGate;
use super::selection::SelectionController;

/// Pointer entered or left an instance.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceHover {
    Entered,
    Left,
}

/// Cursor the window should show.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HoverCursor {
    #[default]
    Default,
    Pointer,
}

// Pointer cursor on hover only while instances are clickable; reset on leave or once they stop being clickable
pub fn resolve_hover_cursor(
    mut hovers: EventReader<InstanceHover>,
    gate: Res<AccessGate>,
    selection: Res<SelectionController>,
    mut cursor: ResMut<HoverCursor>,
) {
    for hover in hovers.read() {
        let next = match hover {
            InstanceHover::Entered if gate.is_unlocked() && selection.is_grid_mode() => {
                HoverCursor::Pointer
            }
            InstanceHover::Entered => continue,
            InstanceHover::Left => HoverCursor::Default,
        };
        if *cursor != next {
            *cursor = next;
        }
    }

    // opening a cell under the pointer sends no Out, so drop the pointer here
    let clickable = gate.is_unlocked() && selection.is_grid_mode();
    if !clickable && *cursor == HoverCursor::Pointer {
        *cursor = HoverCursor::Default;
    }
}

pub fn apply_hover_cursor(
    cursor: Res<HoverCursor>,
    windows: Query<Entity, With<PrimaryWindow>>,
    mut commands: Commands,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let icon = match *cursor {
        HoverCursor::Default => SystemCursorIcon::Default,
        HoverCursor::Pointer => SystemCursorIcon::Pointer,
    };
    commands.entity(window).insert(CursorIcon::from(icon));
}
