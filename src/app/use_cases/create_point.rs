//! Use-Case: Point-Entity in einem Schritt committen.

use crate::app::history::EditCommand;
use crate::app::{EditorState, PresetStyle};
use crate::core::{default_dot_data, Dot, Entity, EntityKind};
use crate::error::{EngineError, Result};
use glam::Vec2;
use serde_json::{Map, Value};

/// Erstellt eine komplette Point-Entity an `position`.
///
/// Ein Point hat keine Draft-Phase: über die Dialog-Attribute hinaus ist
/// nichts zu akkumulieren. Der Dot erhält Radius und Default-Farbe aus dem
/// Preset; `data` ist die optionale Entity-Map aus dem Dialog.
pub fn create_point(
    state: &mut EditorState,
    position: Vec2,
    preset: PresetStyle,
    name: &str,
    description: Option<String>,
    data: Option<Map<String, Value>>,
) -> Result<u64> {
    if name.is_empty() {
        return Err(EngineError::Validation(
            "entity name must not be empty".to_string(),
        ));
    }

    let dot_id = state.layer.alloc_id();
    let entity_id = state.layer.alloc_id();
    let dot = Dot::with_data(dot_id, position, preset.radius, default_dot_data(preset.rgba));

    let entity = Entity::new(
        entity_id,
        EntityKind::Point,
        name.to_string(),
        description,
        data,
        vec![dot],
    );
    let index = state.layer.entity_count();
    state.layer.push_entity(entity);

    state.history.record(EditCommand::CreateEntity {
        index,
        entity: None,
    });
    state.selection.select_entity(entity_id);

    log::info!(
        "Point '{}' ({}) bei ({:.1}, {:.1}) erstellt",
        name,
        entity_id,
        position.x,
        position.y
    );
    Ok(entity_id)
}
