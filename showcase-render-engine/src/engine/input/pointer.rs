use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::motion::POINTER_WORLD_DIVISOR;

use crate::engine::animation::hover::PointerSample;
use crate::engine::scene::stage::ShowcaseCamera;

/// Last known pointer position in normalised device coordinates.
///
/// Kept as-is when the cursor leaves the window.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub ndc: Vec2,
}

/// World-space size of the camera's view plane through the origin.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct ViewportMetrics {
    pub width: f32,
    pub height: f32,
}

impl ViewportMetrics {
    /// Metrics for a perspective camera `distance` units from the origin.
    /// Degenerate inputs give a zero-sized viewport.
    pub fn from_perspective(fov_y: f32, aspect_ratio: f32, distance: f32) -> Self {
        let height = 2.0 * distance * (fov_y * 0.5).tan();
        let width = height * aspect_ratio;

        if height.is_finite() && width.is_finite() && height > 0.0 && width > 0.0 {
            Self { width, height }
        } else {
            Self::default()
        }
    }

    /// Pointer NDC mapped onto the grid plane.
    pub fn pointer_to_world(&self, ndc: Vec2) -> Vec2 {
        let world = Vec2::new(ndc.x * self.width, ndc.y * self.height) / POINTER_WORLD_DIVISOR;
        if world.is_finite() { world } else { Vec2::ZERO }
    }

    pub fn sample(&self, pointer: &PointerState) -> PointerSample {
        PointerSample {
            ndc: pointer.ndc,
            world: self.pointer_to_world(pointer.ndc),
        }
    }
}

/// Window cursor position (logical px, origin top-left) to NDC (y up).
pub fn cursor_to_ndc(cursor: Vec2, window_size: Vec2) -> Option<Vec2> {
    if window_size.x <= 0.0 || window_size.y <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        cursor.x / window_size.x * 2.0 - 1.0,
        1.0 - cursor.y / window_size.y * 2.0,
    ))
}

pub fn track_pointer(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut pointer: ResMut<PointerState>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Some(ndc) = cursor_to_ndc(cursor, window.size()) else {
        return;
    };

    if pointer.ndc != ndc {
        pointer.ndc = ndc;
    }
}

pub fn update_viewport_metrics(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Projection, &GlobalTransform), With<ShowcaseCamera>>,
    mut metrics: ResMut<ViewportMetrics>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((projection, camera_xf)) = cameras.single() else {
        return;
    };
    let Projection::Perspective(perspective) = projection else {
        return;
    };

    let size = window.size();
    let aspect_ratio = if size.y > 0.0 { size.x / size.y } else { 0.0 };
    let distance = camera_xf.translation().length();
    let next = ViewportMetrics::from_perspective(perspective.fov, aspect_ratio, distance);

    if *metrics != next {
        *metrics = next;
    }
}
