//! Use-Case: Entity komplett löschen.

use crate::app::EditorState;
use crate::app::history::EditCommand;
use crate::error::{EngineError, Result};

/// Entfernt eine Entity mitsamt aller Dots aus dem Layer.
pub fn delete_entity(state: &mut EditorState, entity_id: u64) -> Result<()> {
    let index = state
        .layer
        .entity_index(entity_id)
        .ok_or_else(|| EngineError::NotFound(format!("entity {entity_id}")))?;

    let entity = state.layer.remove_entity_at(index);
    let dot_count = entity.dots.len();
    state.history.record(EditCommand::RemoveEntity {
        index,
        entity: Some(Box::new(entity)),
    });

    if state.selection.selected_entity_id == Some(entity_id) {
        state.selection.clear();
    }
    log::info!("Entity {} gelöscht ({} Dots)", entity_id, dot_count);
    Ok(())
}
