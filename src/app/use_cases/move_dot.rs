//! Use-Cases: Dot-Position ändern, inkl. Drag-Gesten-Koaleszenz.

use crate::app::EditorState;
use crate::app::history::EditCommand;
use crate::error::{EngineError, Result};
use glam::Vec2;

fn find_dot_position(state: &EditorState, entity_id: u64, dot_id: u64) -> Result<Vec2> {
    let entity = state
        .layer
        .entity(entity_id)
        .ok_or_else(|| EngineError::NotFound(format!("entity {entity_id}")))?;
    let dot = entity
        .dot(dot_id)
        .ok_or_else(|| EngineError::NotFound(format!("dot {dot_id} in entity {entity_id}")))?;
    Ok(dot.position)
}

/// Öffnet eine Drag-Geste für einen Dot.
///
/// Alle `move_dot`-Aufrufe auf denselben Dot bis [`end_drag`] werden zu
/// einem einzigen Undo-Command koalesziert; das Undo springt in einem
/// Schritt auf die Vor-Drag-Position zurück.
pub fn begin_drag(state: &mut EditorState, entity_id: u64, dot_id: u64) -> Result<()> {
    let position = find_dot_position(state, entity_id, dot_id)?;
    state.history.open_drag(entity_id, dot_id, position);
    log::debug!("Drag auf Dot {} (Entity {}) begonnen", dot_id, entity_id);
    Ok(())
}

/// Beendet die offene Drag-Geste und versiegelt ihren Command.
pub fn end_drag(state: &mut EditorState) {
    state.history.seal_drag();
}

/// Setzt die Position eines Dots.
///
/// Innerhalb einer offenen Drag-Geste auf denselben Dot wird nur die
/// finale Position des schwebenden Commands aktualisiert; außerhalb
/// entsteht ein eigenständiger MoveDot-Command. Kardinalität und übrige
/// Invarianten sind nicht berührt.
pub fn move_dot(
    state: &mut EditorState,
    entity_id: u64,
    dot_id: u64,
    new_position: Vec2,
) -> Result<()> {
    let old_position = find_dot_position(state, entity_id, dot_id)?;

    if let Some(dot) = state
        .layer
        .entity_mut(entity_id)
        .and_then(|entity| entity.dot_mut(dot_id))
    {
        dot.position = new_position;
    }

    if state.history.drag_target() == Some((entity_id, dot_id)) {
        state.history.update_drag(new_position);
        return Ok(());
    }

    if old_position != new_position {
        state.history.record(EditCommand::MoveDot {
            entity_id,
            dot_id,
            from: old_position,
            to: new_position,
        });
    }
    Ok(())
}
