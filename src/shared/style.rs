//! Stil-Resolver: reiner Übergang von Modell- und Selektionszustand zu
//! zeichenbaren Deskriptoren.
//!
//! Die `const`-Werte sind die Render-Defaults der Engine; ein Host kann
//! die Deskriptoren vor dem Zeichnen noch umfärben, die Engine selbst
//! liest keine Laufzeit-Optionen.

use crate::app::SelectionState;
use crate::core::{Dot, Entity};
use glam::Vec2;

/// RGBA-Farbe, 8 Bit pro Kanal.
pub type Rgba = [u8; 4];

/// Standard-Strichfarbe (Schwarz).
pub const STROKE_DEFAULT: Rgba = [0, 0, 0, 255];
/// Strichfarbe, wenn die Entity des Dots selektiert ist (Blau).
pub const STROKE_SELECTED_ENTITY: Rgba = [40, 90, 255, 255];
/// Strichfarbe, wenn der Dot selbst selektiert ist (Rot).
pub const STROKE_SELECTED_DOT: Rgba = [230, 40, 40, 255];
/// Marker-Größe in Bildschirm-Pixeln, zoom-unabhängig.
pub const MARKER_SIZE_PX: f32 = 5.0;
/// Blasse Marker-Farbe, damit Dots bei jedem Zoom auffindbar bleiben.
pub const MARKER_COLOR: Rgba = [128, 128, 128, 96];
/// Untergrenze der Segmentbreite in Bild-Einheiten.
pub const MIN_SEGMENT_WIDTH: f32 = 0.75;

/// Marker-Form eines Dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// Alleinstehender Punkt (Point-Entity)
    Point,
    /// Vertex eines Pfads (Line/Polygon)
    Vertex,
}

/// Zeichenbarer Deskriptor eines Dots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotStyle {
    /// Zentrum in Bildkoordinaten
    pub center: Vec2,
    /// Füllfarbe aus `data.rgba` (Fallback Schwarz)
    pub fill: Rgba,
    /// Strichfarbe nach Selektionsregel
    pub stroke: Rgba,
    /// Marker: fixe Bildschirmgröße [`MARKER_SIZE_PX`], Farbe [`MARKER_COLOR`]
    pub marker: MarkerKind,
    /// Echter Kreis in Bild-Einheiten, nur wenn `dot.radius > 0`.
    /// Skaliert mit dem Zoom, im Gegensatz zum Marker.
    pub true_radius: Option<f32>,
}

/// Zeichenbarer Deskriptor eines Segments zwischen zwei Dots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentStyle {
    /// Startpunkt in Bildkoordinaten
    pub start: Vec2,
    /// Endpunkt in Bildkoordinaten
    pub end: Vec2,
    /// Breite in Bild-Einheiten, nie unter [`MIN_SEGMENT_WIDTH`]
    pub width: f32,
    /// Farbe nach Selektionsregel der Entity
    pub color: Rgba,
}

fn entity_stroke(entity: &Entity, selection: &SelectionState) -> Rgba {
    if selection.selected_entity_id == Some(entity.id) {
        STROKE_SELECTED_ENTITY
    } else {
        STROKE_DEFAULT
    }
}

/// Löst den Stil eines committeten Dots auf.
///
/// Strich: Schwarz, Blau wenn die Entity selektiert ist, Rot wenn der
/// Dot selbst selektiert ist. `true_radius` nur bei `radius > 0`.
pub fn resolve_dot(dot: &Dot, entity: &Entity, selection: &SelectionState) -> DotStyle {
    let stroke = if selection.selected_entity_id == Some(entity.id)
        && selection.selected_dot_id == Some(dot.id)
    {
        STROKE_SELECTED_DOT
    } else {
        entity_stroke(entity, selection)
    };
    DotStyle {
        center: dot.position,
        fill: dot.rgba(),
        stroke,
        marker: if entity.kind == crate::core::EntityKind::Point {
            MarkerKind::Point
        } else {
            MarkerKind::Vertex
        },
        true_radius: (dot.radius > 0.0).then_some(dot.radius),
    }
}

/// Löst den Stil des Segments von `a` nach `b` auf.
///
/// Die Breite kommt vom Radius des Startdots, gefloort auf
/// [`MIN_SEGMENT_WIDTH`], damit kosmetische Pfade sichtbar bleiben.
pub fn resolve_segment(
    a: &Dot,
    b: &Dot,
    entity: &Entity,
    selection: &SelectionState,
) -> SegmentStyle {
    SegmentStyle {
        start: a.position,
        end: b.position,
        width: a.radius.max(MIN_SEGMENT_WIDTH),
        color: entity_stroke(entity, selection),
    }
}

/// Löst den Stil eines Draft-Dots auf (Vorschau, nie selektiert).
pub fn resolve_draft_dot(dot: &Dot) -> DotStyle {
    DotStyle {
        center: dot.position,
        fill: dot.rgba(),
        stroke: STROKE_DEFAULT,
        marker: MarkerKind::Vertex,
        true_radius: (dot.radius > 0.0).then_some(dot.radius),
    }
}
