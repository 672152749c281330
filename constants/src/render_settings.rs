use bevy::prelude::*;

/// Clear colour behind the grid (#F0F0F0)
pub const BACKGROUND_COLOR: Color = Color::srgb(0.941, 0.941, 0.941);

pub const CAMERA_TRANSLATION: Vec3 = Vec3::new(0.0, 0.0, 50.0);
/// Vertical field of view in degrees
pub const CAMERA_FOV_DEGREES: f32 = 25.0;

pub const AMBIENT_BRIGHTNESS: f32 = 600.0;

pub const SPOT_LIGHT_TRANSLATION: Vec3 = Vec3::new(15.0, 15.0, 15.0);
pub const SPOT_LIGHT_OUTER_ANGLE: f32 = 0.2;
pub const SPOT_LIGHT_INTENSITY: f32 = 6_000_000.0;
pub const SPOT_LIGHT_RANGE: f32 = 120.0;

pub const POINT_LIGHT_TRANSLATION: Vec3 = Vec3::new(-10.0, -5.0, -10.0);
pub const POINT_LIGHT_INTENSITY: f32 = 2_000_000.0;
pub const POINT_LIGHT_RANGE: f32 = 80.0;

/// Shadow-receiving floor shown in grid mode
pub const SHADOW_CATCHER_SIZE: f32 = 80.0;
pub const SHADOW_CATCHER_HEIGHT: f32 = -12.0;

// Ceramic base material, tinted per cell
pub const CERAMIC_ROUGHNESS: f32 = 0.15;
pub const CERAMIC_METALLIC: f32 = 0.0;
pub const CERAMIC_CLEARCOAT: f32 = 1.0;
pub const CERAMIC_CLEARCOAT_ROUGHNESS: f32 = 0.1;
