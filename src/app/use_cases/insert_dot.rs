//! Use-Case: Dot hinter einem bestehenden Dot einfügen.

use crate::app::EditorState;
use crate::app::history::EditCommand;
use crate::core::{Dot, EntityKind};
use crate::error::{EngineError, Result};
use glam::Vec2;

/// Fügt direkt hinter `dot_id` einen neuen Dot ein.
///
/// Nur für Line/Polygon zulässig — eine Point-Entity kann nicht wachsen.
/// Der neue Dot erbt Radius und data vom Anker-Dot (interaktive
/// Unterteilung eines Segments behält dessen Stil).
pub fn insert_dot_after(
    state: &mut EditorState,
    entity_id: u64,
    dot_id: u64,
    point: Vec2,
) -> Result<u64> {
    let entity = state
        .layer
        .entity(entity_id)
        .ok_or_else(|| EngineError::NotFound(format!("entity {entity_id}")))?;
    if entity.kind == EntityKind::Point {
        return Err(EngineError::InvalidState(
            "cannot insert a dot into a point entity".to_string(),
        ));
    }
    let anchor_index = entity
        .dot_index(dot_id)
        .ok_or_else(|| EngineError::NotFound(format!("dot {dot_id} in entity {entity_id}")))?;

    let anchor = &entity.dots[anchor_index];
    let (radius, data) = (anchor.radius, anchor.data.clone());
    let new_id = state.layer.alloc_id();
    let dot = Dot::with_data(new_id, point, radius, data);

    let insert_index = anchor_index + 1;
    if let Some(entity) = state.layer.entity_mut(entity_id) {
        entity.dots.insert(insert_index, dot);
    }

    state.history.record(EditCommand::InsertDot {
        entity_id,
        index: insert_index,
        dot: None,
    });

    log::info!(
        "Dot {} hinter {} in Entity {} eingefügt",
        new_id,
        dot_id,
        entity_id
    );
    Ok(new_id)
}
