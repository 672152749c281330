use bevy::prelude::*;
use constants::grid::{
    BASE_SCALE, CELL_COLOR_HEX, DETAIL_SCALE, GRID_COLUMNS, GRID_ROWS, GRID_SPACING, HOVER_SCALE,
    MAX_GRID_AXIS, MODEL_PATH,
};
use serde::Deserialize;

/// Runtime-tunable layout and scale settings.
///
/// Loaded from `showcase.settings.json`; any missing field takes its
/// compiled-in default, so a partial file is valid.
#[derive(Asset, TypePath, Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShowcaseSettings {
    pub columns: u32,
    pub rows: u32,
    pub spacing: f32,
    /// sRGB hex, with or without a leading `#`
    pub cell_color: String,
    pub base_scale: f32,
    pub hover_scale: f32,
    pub detail_scale: f32,
    pub model_path: String,
}

impl Default for ShowcaseSettings {
    fn default() -> Self {
        Self {
            columns: GRID_COLUMNS,
            rows: GRID_ROWS,
            spacing: GRID_SPACING,
            cell_color: CELL_COLOR_HEX.to_string(),
            base_scale: BASE_SCALE,
            hover_scale: HOVER_SCALE,
            detail_scale: DETAIL_SCALE,
            model_path: MODEL_PATH.to_string(),
        }
    }
}

fn axis_count(name: &str, value: u32) -> u32 {
    let clamped = value.clamp(1, MAX_GRID_AXIS);
    if clamped != value {
        warn!("Grid {} {} out of range, using {}", name, value, clamped);
    }
    clamped
}

fn positive_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 { value } else { fallback }
}

impl ShowcaseSettings {
    /// Replace unusable values with defaults.
    pub fn sanitised(self) -> Self {
        let defaults = Self::default();
        let cell_color = if Srgba::hex(&self.cell_color).is_ok() {
            self.cell_color
        } else {
            warn!("Invalid cell colour {:?}, using {}", self.cell_color, defaults.cell_color);
            defaults.cell_color
        };
        let model_path = if self.model_path.trim().is_empty() {
            defaults.model_path
        } else {
            self.model_path
        };

        Self {
            columns: axis_count("columns", self.columns),
            rows: axis_count("rows", self.rows),
            spacing: positive_or(self.spacing, defaults.spacing),
            cell_color,
            base_scale: positive_or(self.base_scale, defaults.base_scale),
            hover_scale: positive_or(self.hover_scale, defaults.hover_scale),
            detail_scale: positive_or(self.detail_scale, defaults.detail_scale),
            model_path,
        }
    }

    pub fn cell_srgba(&self) -> Srgba {
        Srgba::hex(&self.cell_color)
            .or_else(|_| Srgba::hex(CELL_COLOR_HEX))
            .unwrap_or(Srgba::BLACK)
    }

    /// Hover scale relative to base scale, the hover layer's full-influence factor.
    pub fn hover_ratio(&self) -> f32 {
        self.hover_scale / self.base_scale
    }
}
