//! Use-Cases: reine Attribut-Updates ohne Kardinalitätswirkung.

use crate::app::EditorState;
use crate::app::history::{DotStyleAttrs, EditCommand, EntityMeta};
use crate::error::{EngineError, Result};
use serde_json::{Map, Value};

/// Setzt Radius und/oder data-Map eines Dots.
///
/// `None` lässt das jeweilige Attribut unverändert. Ein negativer Radius
/// ist `Validation`; ein Aufruf ohne effektive Änderung zeichnet keinen
/// Command auf.
pub fn set_dot_style(
    state: &mut EditorState,
    entity_id: u64,
    dot_id: u64,
    radius: Option<f32>,
    data: Option<Map<String, Value>>,
) -> Result<()> {
    if let Some(radius) = radius {
        if radius < 0.0 {
            return Err(EngineError::Validation(format!(
                "dot radius must be >= 0, got {radius}"
            )));
        }
    }
    let dot = state
        .layer
        .entity(entity_id)
        .ok_or_else(|| EngineError::NotFound(format!("entity {entity_id}")))?
        .dot(dot_id)
        .ok_or_else(|| EngineError::NotFound(format!("dot {dot_id} in entity {entity_id}")))?;

    let before = DotStyleAttrs {
        radius: dot.radius,
        data: dot.data.clone(),
    };
    let after = DotStyleAttrs {
        radius: radius.unwrap_or(before.radius),
        data: data.unwrap_or_else(|| before.data.clone()),
    };
    if after == before {
        return Ok(());
    }

    if let Some(dot) = state
        .layer
        .entity_mut(entity_id)
        .and_then(|entity| entity.dot_mut(dot_id))
    {
        dot.radius = after.radius;
        dot.data = after.data.clone();
    }
    state.history.record(EditCommand::SetDotStyle {
        entity_id,
        dot_id,
        before,
        after,
    });
    log::debug!("Stil von Dot {} (Entity {}) geändert", dot_id, entity_id);
    Ok(())
}

/// Setzt Name, Beschreibung und/oder data-Map einer Entity.
///
/// `None` lässt das jeweilige Attribut unverändert. Ein leerer Name ist
/// `Validation`.
pub fn set_entity_meta(
    state: &mut EditorState,
    entity_id: u64,
    name: Option<String>,
    description: Option<String>,
    data: Option<Map<String, Value>>,
) -> Result<()> {
    if let Some(name) = &name {
        if name.is_empty() {
            return Err(EngineError::Validation(
                "entity name must not be empty".to_string(),
            ));
        }
    }
    let entity = state
        .layer
        .entity(entity_id)
        .ok_or_else(|| EngineError::NotFound(format!("entity {entity_id}")))?;

    let before = EntityMeta {
        name: entity.name.clone(),
        description: entity.description.clone(),
        data: entity.data.clone(),
    };
    let after = EntityMeta {
        name: name.unwrap_or_else(|| before.name.clone()),
        description: description.or_else(|| before.description.clone()),
        data: data.or_else(|| before.data.clone()),
    };
    if after == before {
        return Ok(());
    }

    if let Some(entity) = state.layer.entity_mut(entity_id) {
        entity.name = after.name.clone();
        entity.description = after.description.clone();
        entity.data = after.data.clone();
    }
    state.history.record(EditCommand::SetEntityMeta {
        entity_id,
        before,
        after,
    });
    log::debug!("Meta von Entity {} geändert", entity_id);
    Ok(())
}
