use std::fmt;

use bevy::prelude::*;
use constants::motion::{INTRO, INTRO_DELAY_SECS, INTRO_HIDDEN_TRANSLATION};

use super::instance::spawn_instance;
use crate::engine::animation::spring::SpringTransform;
use crate::engine::loading::model_loader::ModelAssets;
use crate::engine::loading::settings::ShowcaseSettings;
use crate::tools::access_gate::AccessGate;

/// Cell identifier in `column-row` form, e.g. `"3-1"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellId(String);

impl CellId {
    pub fn from_coords(column: u32, row: u32) -> Self {
        Self(format!("{column}-{row}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Static placement of one grid cell. Never mutated after layout.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct GridCell {
    pub id: CellId,
    pub base_position: Vec3,
    pub color: Srgba,
}

/// First cell centre along an axis so `count` cells are centred on the origin.
pub fn start_axis(count: u32, spacing: f32) -> f32 {
    -(count.saturating_sub(1) as f32 * spacing) / 2.0
}

/// Cell positions for the whole grid, computed once.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    columns: u32,
    rows: u32,
    cells: Vec<GridCell>,
}

impl GridLayout {
    pub fn new(columns: u32, rows: u32, spacing: f32, color: Srgba) -> Self {
        let start_x = start_axis(columns, spacing);
        let start_y = start_axis(rows, spacing);

        let mut cells = Vec::with_capacity((columns as usize).saturating_mul(rows as usize));
        for i in 0..columns {
            for j in 0..rows {
                cells.push(GridCell {
                    id: CellId::from_coords(i, j),
                    base_position: Vec3::new(
                        start_x + i as f32 * spacing,
                        start_y + j as f32 * spacing,
                        0.0,
                    ),
                    color,
                });
            }
        }

        Self {
            columns,
            rows,
            cells,
        }
    }

    pub fn from_settings(settings: &ShowcaseSettings) -> Self {
        Self::new(
            settings.columns,
            settings.rows,
            settings.spacing,
            settings.cell_srgba(),
        )
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn get(&self, id: &CellId) -> Option<&GridCell> {
        self.cells.iter().find(|cell| cell.id == *id)
    }
}

/// Parent of every instance; carries the intro fly-in.
#[derive(Component)]
pub struct GridContainer;

/// Marks a container whose fly-in has been started.
#[derive(Component)]
pub struct GridRevealed;

/// Container motion while locked: below and behind the view, scaled to nothing.
pub fn hidden_container_motion() -> SpringTransform {
    SpringTransform::at(Vec3::from_array(INTRO_HIDDEN_TRANSLATION), 0.0, INTRO)
}

/// Spawn the container and one instance per cell. Returns the container.
pub fn spawn_grid_entities(
    commands: &mut Commands,
    layout: &GridLayout,
    settings: &ShowcaseSettings,
    scene: Handle<Scene>,
) -> Entity {
    let motion = hidden_container_motion();
    let container = commands
        .spawn((
            Name::new("showcase grid"),
            GridContainer,
            motion,
            motion.transform(),
            Visibility::default(),
        ))
        .id();

    for cell in layout.cells() {
        spawn_instance(commands, container, cell, settings, scene.clone());
    }

    container
}

// Lay out and spawn the grid on entering Running
pub fn spawn_grid(
    mut commands: Commands,
    settings: Res<ShowcaseSettings>,
    model: Res<ModelAssets>,
) {
    let layout = GridLayout::from_settings(&settings);
    spawn_grid_entities(&mut commands, &layout, &settings, model.scene.clone());
    info!(
        "Spawned {}x{} grid ({} cells)",
        layout.columns(),
        layout.rows(),
        layout.cells().len()
    );
}

// Start the delayed fly-in once the gate is open
pub fn reveal_grid(
    gate: Res<AccessGate>,
    mut containers: Query<(Entity, &mut SpringTransform), (With<GridContainer>, Without<GridRevealed>)>,
    mut commands: Commands,
) {
    if !gate.is_unlocked() {
        return;
    }

    for (entity, mut motion) in &mut containers {
        motion.retarget_after(Vec3::ZERO, 1.0, INTRO_DELAY_SECS);
        commands.entity(entity).insert(GridRevealed);
        info!("Grid fly-in scheduled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_follow_centring_formula() {
        let layout = GridLayout::new(9, 5, 4.0, Srgba::BLACK);
        assert_eq!(layout.cells().len(), 45);

        let start_x = -((9 - 1) as f32 * 4.0) / 2.0;
        let start_y = -((5 - 1) as f32 * 4.0) / 2.0;
        for i in 0..9 {
            for j in 0..5 {
                let cell = layout.get(&CellId::from_coords(i, j)).unwrap();
                assert_eq!(cell.base_position.x, start_x + i as f32 * 4.0);
                assert_eq!(cell.base_position.y, start_y + j as f32 * 4.0);
                assert_eq!(cell.base_position.z, 0.0);
            }
        }
    }

    #[test]
    fn grid_is_centred_on_origin() {
        let layout = GridLayout::new(9, 5, 4.0, Srgba::BLACK);
        let sum: Vec3 = layout.cells().iter().map(|c| c.base_position).sum();
        assert!(sum.length() < 1e-4);

        let first = &layout.cells()[0];
        assert_eq!(first.base_position, Vec3::new(-16.0, -8.0, 0.0));
        let last = layout.cells().last().unwrap();
        assert_eq!(last.base_position, Vec3::new(16.0, 8.0, 0.0));
    }

    #[test]
    fn ids_are_unique_column_row_strings() {
        let layout = GridLayout::new(9, 5, 4.0, Srgba::BLACK);
        let mut ids: Vec<&str> = layout.cells().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids[0], "0-0");
        assert_eq!(ids[1], "0-1");
        assert!(ids.contains(&"8-4"));
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 45);
    }

    #[test]
    fn every_cell_shares_the_configured_colour() {
        let color = Srgba::hex("#1a1a1a").unwrap();
        let layout = GridLayout::new(3, 2, 4.0, color);
        assert!(layout.cells().iter().all(|c| c.color == color));
    }

    #[test]
    fn single_cell_sits_at_origin() {
        assert_eq!(start_axis(1, 4.0), 0.0);
        assert_eq!(start_axis(0, 4.0), 0.0);
        let layout = GridLayout::new(1, 1, 4.0, Srgba::BLACK);
        assert_eq!(layout.cells()[0].base_position, Vec3::ZERO);
    }

    #[test]
    fn hidden_container_starts_below_with_zero_scale() {
        let motion = hidden_container_motion();
        assert_eq!(motion.translation.value(), Vec3::new(0.0, -50.0, -20.0));
        assert_eq!(motion.scale.value(), 0.0);
        assert!(motion.is_resting());
    }
}
