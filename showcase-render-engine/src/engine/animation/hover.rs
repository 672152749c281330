use bevy::math::FloatExt;
use bevy::prelude::*;
use constants::motion::{
    DEPTH_SMOOTHING, DETAIL_INFLUENCE_RADIUS, DETAIL_PITCH_GAIN, DETAIL_YAW_GAIN,
    GRID_INFLUENCE_RADIUS, GRID_PITCH_GAIN, GRID_YAW_GAIN, HOVER_DEPTH, HOVER_SCALE_SMOOTHING,
    PITCH_SMOOTHING, YAW_SMOOTHING,
};

/// How an instance relates to the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceRole {
    /// Nothing is selected.
    Grid,
    /// This instance is open in the detail view.
    Selected,
    /// Some other instance is open.
    AnotherSelected,
}

impl InstanceRole {
    pub fn is_grid_mode(self) -> bool {
        self == Self::Grid
    }

    pub fn influence_radius(self) -> f32 {
        match self {
            Self::Selected => DETAIL_INFLUENCE_RADIUS,
            _ => GRID_INFLUENCE_RADIUS,
        }
    }

    /// Point the pointer distance is measured from.
    pub fn effective_position(self, base_position: Vec3) -> Vec3 {
        match self {
            Self::Selected => Vec3::ZERO,
            _ => base_position,
        }
    }
}

/// Pointer position for one frame, in NDC and in grid space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    pub ndc: Vec2,
    pub world: Vec2,
}

/// Strength of pointer influence on an instance, in `[0, 1]`.
///
/// Falls off linearly to zero at the role's radius. Forced to zero while a
/// different instance is open, and for any non-finite intermediate.
pub fn pointer_influence(role: InstanceRole, pointer_world: Vec2, base_position: Vec3) -> f32 {
    if role == InstanceRole::AnotherSelected {
        return 0.0;
    }

    let effective = role.effective_position(base_position).truncate();
    let distance = pointer_world.distance(effective);
    let influence = (1.0 - distance / role.influence_radius()).max(0.0);

    if influence.is_finite() { influence } else { 0.0 }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HoverScale {
    /// Ease toward this factor.
    Ease(f32),
    /// Hold at 1; scale changes belong to the placement spring.
    Pinned,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverTargets {
    pub rotation_y: f32,
    pub rotation_x: f32,
    pub depth: f32,
    pub scale: HoverScale,
}

/// Per-frame targets for one instance.
///
/// `hover_ratio` is hover scale over base scale.
pub fn hover_targets(
    role: InstanceRole,
    pointer: PointerSample,
    base_position: Vec3,
    scroll_rotation: f32,
    hover_ratio: f32,
) -> HoverTargets {
    let influence = pointer_influence(role, pointer.world, base_position);
    let selected = role == InstanceRole::Selected;

    let yaw_gain = if selected { DETAIL_YAW_GAIN } else { GRID_YAW_GAIN };
    let pitch_gain = if selected { DETAIL_PITCH_GAIN } else { GRID_PITCH_GAIN };

    HoverTargets {
        rotation_y: scroll_rotation + pointer.ndc.x * influence * yaw_gain,
        rotation_x: -pointer.ndc.y * influence * pitch_gain,
        depth: if selected { 0.0 } else { influence * HOVER_DEPTH },
        scale: if role.is_grid_mode() {
            HoverScale::Ease(1.0_f32.lerp(hover_ratio, influence))
        } else {
            HoverScale::Pinned
        },
    }
}

/// Live pointer-driven state of an instance's model pivot.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct HoverMotion {
    pub rotation_y: f32,
    pub rotation_x: f32,
    pub depth: f32,
    pub scale: f32,
}

impl Default for HoverMotion {
    fn default() -> Self {
        Self {
            rotation_y: 0.0,
            rotation_x: 0.0,
            depth: 0.0,
            scale: 1.0,
        }
    }
}

impl HoverMotion {
    /// One frame tick of exponential smoothing toward `targets`.
    pub fn step(&mut self, targets: HoverTargets) {
        self.rotation_y = self.rotation_y.lerp(targets.rotation_y, YAW_SMOOTHING);
        self.rotation_x = self.rotation_x.lerp(targets.rotation_x, PITCH_SMOOTHING);
        self.depth = self.depth.lerp(targets.depth, DEPTH_SMOOTHING);
        self.scale = match targets.scale {
            HoverScale::Ease(target) => self.scale.lerp(target, HOVER_SCALE_SMOOTHING),
            HoverScale::Pinned => 1.0,
        };
    }

    pub fn transform(&self) -> Transform {
        Transform {
            translation: Vec3::new(0.0, 0.0, self.depth),
            rotation: Quat::from_euler(EulerRot::XYZ, self.rotation_x, self.rotation_y, 0.0),
            scale: Vec3::splat(self.scale),
        }
    }
}
