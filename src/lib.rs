//! Vektor-Entity-Engine zum Annotieren von Rasterbildern.
//! Datenmodell, Mutations-Engine, Hit-Test, Stil-Resolver und
//! JSON-Codec als Library exportiert; Rendering und Eingabe bleiben
//! beim Host.

pub mod app;
pub mod core;
pub mod error;
pub mod json;
pub mod shared;

pub use app::{
    use_cases, Draft, DotStyleAttrs, EditCommand, EditHistory, EditorState, EntityMeta,
    PresetStyle, SelectionState,
};
pub use core::{default_dot_data, Dot, Entity, EntityKind, Layer, ViewTransform, DEFAULT_RGBA};
pub use error::{EngineError, Result};
pub use json::{parse_layer, write_layer};
pub use shared::{DotStyle, DrawScene, MarkerKind, SegmentStyle};
