//! Use-Case: Dot löschen, mit Kaskade auf die Entity bei Minimum-Bruch.

use crate::app::EditorState;
use crate::app::history::EditCommand;
use crate::error::{EngineError, Result};

/// Entfernt einen Dot aus seiner Entity.
///
/// Fällt die Dot-Anzahl dadurch unter das Minimum der Art (Point 1,
/// Line 2, Polygon 3), wird die gesamte Entity als Teil derselben
/// logischen Operation mit entfernt — aufgezeichnet als ein
/// Composite-Command, dessen Undo Dot und Entity atomar wiederherstellt.
///
/// Rückgabe: `true` wenn die Kaskade die Entity entfernt hat (Aufrufer
/// können damit z.B. Widgets aktualisieren; die Selektion pflegt die
/// Engine selbst).
pub fn delete_dot(state: &mut EditorState, entity_id: u64, dot_id: u64) -> Result<bool> {
    let entity_index = state
        .layer
        .entity_index(entity_id)
        .ok_or_else(|| EngineError::NotFound(format!("entity {entity_id}")))?;
    let (dot_index, min_dots, dot_count) = {
        let entity = state
            .layer
            .entity(entity_id)
            .ok_or_else(|| EngineError::NotFound(format!("entity {entity_id}")))?;
        let dot_index = entity
            .dot_index(dot_id)
            .ok_or_else(|| EngineError::NotFound(format!("dot {dot_id} in entity {entity_id}")))?;
        (dot_index, entity.kind.min_dots(), entity.dots.len())
    };

    let cascades = dot_count - 1 < min_dots;

    if cascades {
        // Dot raus, dann Entity raus — beides ein atomarer Composite
        let mut removed_dot = None;
        if let Some(entity) = state.layer.entity_mut(entity_id) {
            removed_dot = Some(entity.dots.remove(dot_index));
        }
        let entity = state.layer.remove_entity_at(entity_index);
        state.history.record(EditCommand::Composite {
            commands: vec![
                EditCommand::RemoveDot {
                    entity_id,
                    index: dot_index,
                    dot: removed_dot,
                },
                EditCommand::RemoveEntity {
                    index: entity_index,
                    entity: Some(Box::new(entity)),
                },
            ],
        });

        if state.selection.selected_entity_id == Some(entity_id) {
            state.selection.clear();
        }
        log::info!(
            "Dot {} gelöscht, Entity {} kaskadiert entfernt",
            dot_id,
            entity_id
        );
        return Ok(true);
    }

    let mut removed_dot = None;
    if let Some(entity) = state.layer.entity_mut(entity_id) {
        removed_dot = Some(entity.dots.remove(dot_index));
    }
    state.history.record(EditCommand::RemoveDot {
        entity_id,
        index: dot_index,
        dot: removed_dot,
    });

    // Selektion auf Entity reduzieren, wenn der selektierte Dot starb
    if state.selection.selected_entity_id == Some(entity_id)
        && state.selection.selected_dot_id == Some(dot_id)
    {
        state.selection.selected_dot_id = None;
    }
    log::info!("Dot {} aus Entity {} gelöscht", dot_id, entity_id);
    Ok(false)
}
