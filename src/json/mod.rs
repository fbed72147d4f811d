//! JSON-Codec für Layer: Wire-Records, Reader und Writer.
//!
//! Das persistierte Format ist ein Array von Entity-Records. IDs stehen
//! als Dezimal-Strings im JSON, intern sind sie `u64`.

mod reader;
mod writer;

pub use reader::parse_layer;
pub use writer::write_layer;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Wire-Record eines Dots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct DotRecord {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
}

/// Wire-Record einer Entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct EntityRecord {
    /// Art-Tag: "point" | "line" | "polygon"
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
    /// Nur für Polygone emittiert, dann `true`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,
    pub dots: Vec<DotRecord>,
}
