//! Writer: Layer → persistiertes JSON.

use super::{DotRecord, EntityRecord};
use crate::core::Layer;
use crate::error::{EngineError, Result};

/// Serialisiert einen Layer als pretty-printed JSON-Array.
///
/// Entities in Listenreihenfolge, Dots in Sequenzreihenfolge; die
/// Ausgabe ist für gleichen Input deterministisch (data-Maps behalten
/// ihre Einfügereihenfolge).
pub fn write_layer(layer: &Layer) -> Result<String> {
    let records: Vec<EntityRecord> = layer
        .entities()
        .map(|entity| EntityRecord {
            kind: entity.kind.tag().to_string(),
            id: entity.id.to_string(),
            name: entity.name.clone(),
            description: entity.description.clone(),
            data: entity.data.clone(),
            closed: entity.closed.then_some(true),
            dots: entity
                .dots
                .iter()
                .map(|dot| DotRecord {
                    id: dot.id.to_string(),
                    x: dot.position.x,
                    y: dot.position.y,
                    radius: dot.radius,
                    name: (!dot.name.is_empty()).then(|| dot.name.clone()),
                    data: Some(dot.data.clone()),
                })
                .collect(),
        })
        .collect();

    serde_json::to_string_pretty(&records)
        .map_err(|e| EngineError::Validation(format!("failed to serialize layer: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dot, Entity, EntityKind};
    use glam::Vec2;

    #[test]
    fn point_record_has_no_closed_flag() {
        let mut layer = Layer::new();
        let dot_id = layer.alloc_id();
        let entity_id = layer.alloc_id();
        layer.push_entity(Entity::new(
            entity_id,
            EntityKind::Point,
            "p".to_string(),
            None,
            None,
            vec![Dot::new(dot_id, Vec2::new(5.0, 5.0), 2.0)],
        ));

        let json = write_layer(&layer).expect("write");
        let value: serde_json::Value = serde_json::from_str(&json).expect("gültiges JSON");
        let record = &value.as_array().expect("Array")[0];
        assert_eq!(record["type"], "point");
        assert_eq!(record["id"], entity_id.to_string());
        assert!(record.get("closed").is_none());
        assert!(record.get("description").is_none());
        assert_eq!(record["dots"][0]["data"]["rgba"], serde_json::json!([0, 0, 0, 255]));
    }

    #[test]
    fn polygon_record_carries_closed_true() {
        let mut layer = Layer::new();
        let dots: Vec<Dot> = (0..3)
            .map(|i| Dot::new(i + 1, Vec2::new(i as f32, 0.0), 0.0))
            .collect();
        layer.push_entity(Entity::new(
            10,
            EntityKind::Polygon,
            "poly".to_string(),
            None,
            None,
            dots,
        ));

        let json = write_layer(&layer).expect("write");
        let value: serde_json::Value = serde_json::from_str(&json).expect("gültiges JSON");
        assert_eq!(value[0]["closed"], true);
        assert_eq!(value[0]["dots"].as_array().expect("Array").len(), 3);
    }
}
