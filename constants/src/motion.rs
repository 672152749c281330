/// Mass/tension/friction triple for a damped spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringProfile {
    pub mass: f32,
    pub tension: f32,
    pub friction: f32,
}

/// Slow, heavily overdamped profile for grid/detail placement changes.
pub const MOLASSES: SpringProfile = SpringProfile {
    mass: 1.0,
    tension: 280.0,
    friction: 120.0,
};

/// Fly-in profile for the whole grid once access is granted.
pub const INTRO: SpringProfile = SpringProfile {
    mass: 2.0,
    tension: 100.0,
    friction: 30.0,
};

/// Delay between unlock and the start of the fly-in, in seconds
pub const INTRO_DELAY_SECS: f32 = 0.2;

/// Grid container translation while locked
pub const INTRO_HIDDEN_TRANSLATION: [f32; 3] = [0.0, -50.0, -20.0];

/// Rotation (radians) added per unit of browser-style wheel `deltaY`
pub const SCROLL_ROTATION_PER_DELTA: f32 = 0.001;

/// Pixels per wheel line when the platform reports line units
pub const WHEEL_LINE_HEIGHT_PX: f32 = 100.0;

/// Pointer NDC times viewport extent is divided by this to land in grid space
pub const POINTER_WORLD_DIVISOR: f32 = 1.5;

pub const GRID_INFLUENCE_RADIUS: f32 = 8.0;
pub const DETAIL_INFLUENCE_RADIUS: f32 = 15.0;

pub const GRID_YAW_GAIN: f32 = 1.5;
pub const DETAIL_YAW_GAIN: f32 = 0.8;
pub const GRID_PITCH_GAIN: f32 = 1.0;
pub const DETAIL_PITCH_GAIN: f32 = 0.5;

/// Depth a grid instance lifts toward the camera at full influence
pub const HOVER_DEPTH: f32 = 0.25;

// Per-frame exponential smoothing factors
pub const YAW_SMOOTHING: f32 = 0.08;
pub const PITCH_SMOOTHING: f32 = 0.1;
pub const DEPTH_SMOOTHING: f32 = 0.1;
pub const HOVER_SCALE_SMOOTHING: f32 = 0.1;
