//! Reader: persistiertes JSON → Layer, mit voller Validierung.

use super::{DotRecord, EntityRecord};
use crate::core::{default_dot_data, Dot, Entity, EntityKind, Layer, DEFAULT_RGBA};
use crate::error::{EngineError, Result};
use glam::Vec2;
use std::collections::HashSet;

fn parse_id(raw: &str, context: &str) -> Result<u64> {
    raw.parse::<u64>()
        .map_err(|_| EngineError::Validation(format!("{context} has a non-numeric id '{raw}'")))
}

fn decode_dot(record: DotRecord, entity_id: u64) -> Result<Dot> {
    let id = parse_id(&record.id, &format!("dot of entity {entity_id}"))?;
    let data = record.data.unwrap_or_else(|| default_dot_data(DEFAULT_RGBA));
    let mut dot = Dot::with_data(id, Vec2::new(record.x, record.y), record.radius, data);
    dot.name = record.name.unwrap_or_default();
    Ok(dot)
}

fn decode_entity(record: EntityRecord) -> Result<Entity> {
    let kind = EntityKind::from_tag(&record.kind).ok_or_else(|| {
        EngineError::Validation(format!("unknown entity type tag '{}'", record.kind))
    })?;
    let id = parse_id(&record.id, "entity")?;

    // closed ist nur für Polygone legal; fehlt das Flag bei einem
    // Polygon, gilt es als geschlossen
    match (kind, record.closed) {
        (EntityKind::Polygon, Some(false)) => {
            return Err(EngineError::Validation(format!(
                "polygon entity {id} is marked closed=false"
            )));
        }
        (EntityKind::Point | EntityKind::Line, Some(true)) => {
            return Err(EngineError::Validation(format!(
                "{} entity {id} is marked closed=true",
                kind.tag()
            )));
        }
        _ => {}
    }

    let dots = record
        .dots
        .into_iter()
        .map(|d| decode_dot(d, id))
        .collect::<Result<Vec<_>>>()?;

    let entity = Entity::new(id, kind, record.name, record.description, record.data, dots);
    entity.validate()?;
    Ok(entity)
}

/// Parst einen Layer aus persistiertem JSON.
///
/// Voll validierend: fehlerhafte Syntax, unbekanntes Art-Tag,
/// nicht-numerische oder doppelte IDs, leerer Name, negativer Radius
/// und Kardinalitätsverstöße sind alle `Validation`. Entweder kommt ein
/// vollständiger Layer zurück oder gar keiner — ein halb importierter
/// Layer ist nie beobachtbar. Der ID-Allocator setzt hinter der
/// höchsten gelesenen ID wieder auf.
pub fn parse_layer(json: &str) -> Result<Layer> {
    let records: Vec<EntityRecord> = serde_json::from_str(json)
        .map_err(|e| EngineError::Validation(format!("malformed layer JSON: {e}")))?;

    let mut layer = Layer::new();
    let mut seen_ids: HashSet<u64> = HashSet::new();

    for record in records {
        let entity = decode_entity(record)?;
        if !seen_ids.insert(entity.id) {
            return Err(EngineError::Validation(format!(
                "duplicate id {} in layer",
                entity.id
            )));
        }
        for dot in &entity.dots {
            if !seen_ids.insert(dot.id) {
                return Err(EngineError::Validation(format!(
                    "duplicate id {} in layer",
                    dot.id
                )));
            }
        }
        layer.bump_id_floor(entity.id);
        if let Some(max_dot_id) = entity.dots.iter().map(|d| d.id).max() {
            layer.bump_id_floor(max_dot_id);
        }
        layer.push_entity(entity);
    }

    log::info!("Layer geladen: {} Entities", layer.entity_count());
    Ok(layer)
}
