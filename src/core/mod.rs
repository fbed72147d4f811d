//! Core-Domänentypen: Dots, Entities, Layer und View-Transformation.

pub mod dot;
pub mod entity;
pub mod layer;
pub mod view;

pub use dot::{default_dot_data, Dot, DEFAULT_RGBA};
pub use entity::{Entity, EntityKind};
pub use layer::Layer;
pub use view::ViewTransform;
