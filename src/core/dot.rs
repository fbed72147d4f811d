//! Ein Dot ist ein einzelner, gestylter Vertex einer Entity.

use glam::Vec2;
use serde_json::{Map, Value};

/// Default-Farbe eines Dots (deckendes Schwarz).
pub const DEFAULT_RGBA: [u8; 4] = [0, 0, 0, 255];

/// Erstellt die Default-`data`-Map `{"rgba": [r,g,b,a]}`.
pub fn default_dot_data(rgba: [u8; 4]) -> Map<String, Value> {
    let mut data = Map::new();
    data.insert(
        "rgba".to_string(),
        Value::Array(rgba.iter().map(|&c| Value::from(c)).collect()),
    );
    data
}

/// Ein einzelner Vertex mit Position, Radius und offener data-Map.
///
/// Ein Dot gehört exklusiv genau einer Entity (bzw. einem Draft vor dem
/// Finalize) und hat außerhalb davon keine Identität.
#[derive(Debug, Clone, PartialEq)]
pub struct Dot {
    /// Eindeutige ID, stabil für die Lebensdauer des Dots
    pub id: u64,
    /// Position in Bildkoordinaten (Sub-Pixel, unbegrenzt)
    pub position: Vec2,
    /// Radius in Bild-Einheiten; 0 = kosmetischer Punkt
    pub radius: f32,
    /// Optionaler Name (leer = unbenannt)
    pub name: String,
    /// Offene Key-Value-Map (JSON-artige Werte), enthält mindestens "rgba"
    pub data: Map<String, Value>,
}

impl Dot {
    /// Erstellt einen Dot mit Default-data (`{"rgba": [0,0,0,255]}`).
    pub fn new(id: u64, position: Vec2, radius: f32) -> Self {
        Self {
            id,
            position,
            radius,
            name: String::new(),
            data: default_dot_data(DEFAULT_RGBA),
        }
    }

    /// Erstellt einen Dot mit expliziter data-Map.
    pub fn with_data(id: u64, position: Vec2, radius: f32, data: Map<String, Value>) -> Self {
        Self {
            id,
            position,
            radius,
            name: String::new(),
            data,
        }
    }

    /// Liest die `rgba`-Farbe aus der data-Map.
    ///
    /// Fallback ist [`DEFAULT_RGBA`], wenn der Eintrag fehlt oder kein
    /// 4-Element-Zahlenarray ist. Werte werden auf 0..=255 geklemmt.
    pub fn rgba(&self) -> [u8; 4] {
        let Some(Value::Array(values)) = self.data.get("rgba") else {
            return DEFAULT_RGBA;
        };
        if values.len() != 4 {
            return DEFAULT_RGBA;
        }
        let mut rgba = [0u8; 4];
        for (slot, value) in rgba.iter_mut().zip(values) {
            let Some(channel) = value.as_f64() else {
                return DEFAULT_RGBA;
            };
            *slot = channel.clamp(0.0, 255.0) as u8;
        }
        rgba
    }
}
