//! Use-Cases: Undo/Redo auf dem Editor-Zustand.

use crate::app::EditorState;

/// Macht den jüngsten Command rückgängig.
///
/// Eine noch offene Drag-Geste wird zuvor versiegelt, sodass das Undo
/// die komplette Geste in einem Schritt zurücknimmt. Die Selektion wird
/// anschließend gegen den Layer abgeglichen, damit sie nie auf
/// verschwundene Ids zeigt.
pub fn undo(state: &mut EditorState) -> bool {
    let EditorState {
        layer,
        selection,
        history,
        ..
    } = state;
    let applied = history.undo(layer);
    if applied {
        selection.reconcile(layer);
        log::debug!("Undo ausgeführt, {} Entities im Layer", layer.entity_count());
    }
    applied
}

/// Wendet den zuletzt rückgängig gemachten Command erneut an.
pub fn redo(state: &mut EditorState) -> bool {
    let EditorState {
        layer,
        selection,
        history,
        ..
    } = state;
    let applied = history.redo(layer);
    if applied {
        selection.reconcile(layer);
        log::debug!("Redo ausgeführt, {} Entities im Layer", layer.entity_count());
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::{create_point, delete_entity, select_hit};
    use crate::app::use_cases::pick::Hit;
    use crate::app::PresetStyle;
    use glam::Vec2;

    #[test]
    fn undo_redo_on_empty_history_are_noops() {
        let mut state = EditorState::new();
        assert!(!undo(&mut state));
        assert!(!redo(&mut state));
    }

    #[test]
    fn undo_reconciles_stale_selection() {
        let mut state = EditorState::new();
        let id = create_point(
            &mut state,
            Vec2::ZERO,
            PresetStyle::default(),
            "p",
            None,
            None,
        )
        .expect("create_point");
        select_hit(&mut state, Some(Hit::Entity { entity_id: id }));

        // Undo der Erzeugung entfernt die Entity — Selektion darf nicht
        // auf die tote Id zeigen
        assert!(undo(&mut state));
        assert_eq!(state.selection.selected_entity_id, None);

        assert!(redo(&mut state));
        assert!(state.layer.entity(id).is_some());
    }

    #[test]
    fn new_mutation_clears_redo_stack() {
        let mut state = EditorState::new();
        let first = create_point(
            &mut state,
            Vec2::ZERO,
            PresetStyle::default(),
            "a",
            None,
            None,
        )
        .expect("create");
        assert!(undo(&mut state));
        assert!(state.can_redo());

        let _second = create_point(
            &mut state,
            Vec2::ONE,
            PresetStyle::default(),
            "b",
            None,
            None,
        )
        .expect("create");
        assert!(!state.can_redo());
        assert!(state.layer.entity(first).is_none());
    }

    #[test]
    fn delete_then_undo_then_redo_is_stable() {
        let mut state = EditorState::new();
        let id = create_point(
            &mut state,
            Vec2::ZERO,
            PresetStyle::default(),
            "p",
            None,
            None,
        )
        .expect("create");
        delete_entity(&mut state, id).expect("delete");

        assert!(undo(&mut state));
        assert!(state.layer.entity(id).is_some());
        assert!(redo(&mut state));
        assert!(state.layer.entity(id).is_none());
        assert!(undo(&mut state));
        assert!(state.layer.entity(id).is_some());
    }
}
