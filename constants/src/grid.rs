/// Number of columns in the showcase grid
pub const GRID_COLUMNS: u32 = 9;

/// Number of rows in the showcase grid
pub const GRID_ROWS: u32 = 5;

/// Distance between neighbouring cell centres, in world units
pub const GRID_SPACING: f32 = 4.0;

/// Shared tint for every cell (sRGB hex)
pub const CELL_COLOR_HEX: &str = "#1a1a1a";

/// Resting uniform scale of a grid instance
pub const BASE_SCALE: f32 = 20.0;

/// Uniform scale an instance reaches at full pointer influence
pub const HOVER_SCALE: f32 = 22.0;

/// Uniform scale of the instance opened in the detail view
pub const DETAIL_SCALE: f32 = 100.0;

/// glTF scene cloned for every cell, relative to the asset root
pub const MODEL_PATH: &str = "models/cabal.glb";

/// Optional runtime overrides for the values above
pub const SETTINGS_PATH: &str = "showcase.settings.json";

/// Upper bound on columns and rows accepted from runtime settings
pub const MAX_GRID_AXIS: u32 = 64;
