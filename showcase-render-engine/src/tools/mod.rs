//! Viewer-facing interaction: selection, the access gate and their UI.
//!
//! ## Flow
//!
//! ```text
//! GateOverlay keystrokes ──> AccessGate::on_input ──> unlocked (once, for good)
//!
//! Pointer<Click> on instance ──> SelectRequest ─┐
//! Close button / Escape ──────> CloseRequest ──┴─> apply_selection_requests
//!                                                   └─> SelectionController
//!
//! Pointer<Over>/<Out> ──> InstanceHover ──> HoverCursor ──> window cursor icon
//! ```
//!
//! Input handlers only queue events; gating (unlocked, grid mode) is decided in
//! one place when the queue is applied.

/// Plain-text unlock gate.
pub mod access_gate;

/// Close button shown while a cell is open.
pub mod close_button;

/// Hover cursor feedback over clickable instances.
pub mod cursor;

/// Full-screen code entry overlay (masked).
pub mod gate_overlay;

/// Single-selection controller and its request events.
pub mod selection;

use bevy::prelude::*;

use crate::engine::core::sets::{ShowcaseSet, configure_showcase_sets};
use access_gate::AccessGate;
use close_button::{
    close_button_interaction, close_on_escape, reflect_close_button, spawn_close_button,
};
use cursor::{HoverCursor, InstanceHover, apply_hover_cursor, resolve_hover_cursor};
use gate_overlay::{dismiss_gate_overlay, spawn_gate_overlay, type_into_gate};
use selection::{CloseRequest, SelectRequest, SelectionController, apply_selection_requests};

// Selection, gate and hover state; no UI, so it also runs headless.
pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        configure_showcase_sets(app);

        app.init_resource::<SelectionController>()
            .init_resource::<AccessGate>()
            .init_resource::<HoverCursor>()
            .add_event::<SelectRequest>()
            .add_event::<CloseRequest>()
            .add_event::<InstanceHover>()
            .add_systems(
                Update,
                (apply_selection_requests, resolve_hover_cursor)
                    .chain()
                    .in_set(ShowcaseSet::Interaction),
            );
    }
}

// Gate overlay, close button and cursor icon.
pub struct InteractionUiPlugin;

impl Plugin for InteractionUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_gate_overlay, spawn_close_button))
            .add_systems(
                Update,
                (type_into_gate, close_button_interaction, close_on_escape)
                    .in_set(ShowcaseSet::Input),
            )
            .add_systems(
                Update,
                (
                    dismiss_gate_overlay.run_if(resource_changed::<AccessGate>),
                    reflect_close_button.run_if(resource_changed::<SelectionController>),
                    apply_hover_cursor.run_if(resource_changed::<HoverCursor>),
                )
                    .in_set(ShowcaseSet::Motion),
            );
    }
}
