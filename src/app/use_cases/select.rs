//! Use-Case: Selektion aus einem Hit-Test-Ergebnis setzen.

use crate::app::EditorState;
use crate::app::use_cases::pick::Hit;

/// Übernimmt ein Hit-Test-Ergebnis in die Selektion.
///
/// Ein Dot-Treffer selektiert Dot und Entity, ein Entity-Treffer nur die
/// Entity, `None` leert die Selektion. Selektion ist kein Edit und
/// landet nie in der Undo-History.
pub fn select_hit(state: &mut EditorState, hit: Option<Hit>) {
    match hit {
        Some(Hit::Dot { entity_id, dot_id }) => state.selection.select_dot(entity_id, dot_id),
        Some(Hit::Entity { entity_id }) => state.selection.select_entity(entity_id),
        None => state.selection.clear(),
    }
}

/// Leert die Selektion.
pub fn clear_selection(state: &mut EditorState) {
    state.selection.clear();
}
