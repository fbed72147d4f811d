//! Geteilte Typen für den Vertrag zwischen Engine und Renderer.
//!
//! Enthält den Stil-Resolver und die Draw-Szene, die `app` baut und ein
//! externer Renderer konsumiert, ohne das Entity-Modell zu kennen.

pub mod scene;
pub mod style;

pub use scene::DrawScene;
pub use style::{
    resolve_dot, resolve_draft_dot, resolve_segment, DotStyle, MarkerKind, Rgba, SegmentStyle,
    MARKER_COLOR, MARKER_SIZE_PX, MIN_SEGMENT_WIDTH, STROKE_DEFAULT, STROKE_SELECTED_DOT,
    STROKE_SELECTED_ENTITY,
};
