use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use constants::motion::{SCROLL_ROTATION_PER_DELTA, WHEEL_LINE_HEIGHT_PX};

/// Yaw offset driven by the scroll wheel. Starts at 0 and is never clamped.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct ScrollAccumulator {
    value: f32,
}

impl ScrollAccumulator {
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Add one browser-style wheel `deltaY` (pixels, positive = scroll down).
    pub fn accumulate(&mut self, delta_y: f32) {
        if delta_y.is_finite() {
            self.value += delta_y * SCROLL_ROTATION_PER_DELTA;
        }
    }
}

/// Converts a wheel event to a browser-style `deltaY`.
///
/// Bevy reports positive `y` for scrolling up, browsers report positive
/// `deltaY` for scrolling down.
pub fn wheel_delta_y(event: &MouseWheel) -> f32 {
    let pixels = match event.unit {
        MouseScrollUnit::Line => event.y * WHEEL_LINE_HEIGHT_PX,
        MouseScrollUnit::Pixel => event.y,
    };
    -pixels
}

pub fn accumulate_scroll(mut wheel: EventReader<MouseWheel>, mut scroll: ResMut<ScrollAccumulator>) {
    for event in wheel.read() {
        scroll.accumulate(wheel_delta_y(event));
    }
}
