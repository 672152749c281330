use bevy::prelude::*;

use super::access_gate::AccessGate;
use crate::engine::animation::hover::InstanceRole;
use crate::engine::scene::grid::CellId;

/// Which instance, if any, is open in the detail view.
///
/// `select` and `clear` are the only mutators; at most one cell is selected.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct SelectionController {
    selected_id: Option<CellId>,
}

impl SelectionController {
    pub fn selected(&self) -> Option<&CellId> {
        self.selected_id.as_ref()
    }

    pub fn is_grid_mode(&self) -> bool {
        self.selected_id.is_none()
    }

    pub fn is_selected(&self, id: &CellId) -> bool {
        self.selected_id.as_ref() == Some(id)
    }

    pub fn role_of(&self, id: &CellId) -> InstanceRole {
        match &self.selected_id {
            None => InstanceRole::Grid,
            Some(selected) if selected == id => InstanceRole::Selected,
            Some(_) => InstanceRole::AnotherSelected,
        }
    }

    /// Open `id` in the detail view. Refused while another cell is open.
    pub fn select(&mut self, id: CellId) -> bool {
        if self.selected_id.is_some() {
            return false;
        }
        self.selected_id = Some(id);
        true
    }

    /// Return to grid mode, handing back the previous selection.
    pub fn clear(&mut self) -> Option<CellId> {
        self.selected_id.take()
    }
}

/// Click on an instance.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct SelectRequest(pub CellId);

/// Close button or Escape.
#[derive(Event, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CloseRequest;

// Applies queued close/select requests. Selection needs grid mode and an open gate.
pub fn apply_selection_requests(
    mut selects: EventReader<SelectRequest>,
    mut closes: EventReader<CloseRequest>,
    gate: Res<AccessGate>,
    mut selection: ResMut<SelectionController>,
) {
    if closes.read().count() > 0 && !selection.is_grid_mode() {
        if let Some(previous) = selection.clear() {
            info!("Closed detail view for cell {}", previous);
        }
    }

    for SelectRequest(id) in selects.read() {
        if !gate.is_unlocked() {
            debug!("Ignoring selection of {} while locked", id);
            continue;
        }
        // check through Deref first so a refused request leaves change detection untouched
        if let Some(open) = selection.selected() {
            debug!("Ignoring selection of {}: {} is open", id, open);
            continue;
        }
        if selection.select(id.clone()) {
            info!("Selected cell {}", id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(column: u32, row: u32) -> CellId {
        CellId::from_coords(column, row)
    }

    #[test]
    fn select_then_other_is_refused_until_cleared() {
        let mut selection = SelectionController::default();
        assert!(selection.is_grid_mode());

        assert!(selection.select(id(1, 1)));
        assert!(selection.is_selected(&id(1, 1)));

        assert!(!selection.select(id(2, 2)));
        assert!(selection.is_selected(&id(1, 1)));
        assert!(!selection.is_selected(&id(2, 2)));

        assert_eq!(selection.clear(), Some(id(1, 1)));
        assert!(selection.select(id(2, 2)));
        assert!(selection.is_selected(&id(2, 2)));
    }

    #[test]
    fn at_most_one_cell_is_selected_over_a_sequence() {
        let cells: Vec<CellId> = (0..9).flat_map(|i| (0..5).map(move |j| id(i, j))).collect();
        let mut selection = SelectionController::default();

        for (step, cell) in cells.iter().enumerate() {
            if step % 3 == 0 {
                selection.clear();
            }
            selection.select(cell.clone());
            let selected = cells.iter().filter(|c| selection.is_selected(c)).count();
            assert!(selected <= 1);
        }
    }

    #[test]
    fn clear_without_selection_is_a_no_op() {
        let mut selection = SelectionController::default();
        let before = selection.clone();
        assert_eq!(selection.clear(), None);
        assert_eq!(selection, before);
    }

    #[test]
    fn roles_follow_selection() {
        let mut selection = SelectionController::default();
        assert_eq!(selection.role_of(&id(0, 0)), InstanceRole::Grid);

        selection.select(id(0, 0));
        assert_eq!(selection.role_of(&id(0, 0)), InstanceRole::Selected);
        assert_eq!(selection.role_of(&id(0, 1)), InstanceRole::AnotherSelected);
    }
}
