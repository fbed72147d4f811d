//! Use-Case: Hit-Test vom Bildschirm in den Layer.

use crate::core::{Layer, ViewTransform};
use glam::Vec2;

/// Greifradius für Dots, in Bildschirm-Pixeln.
pub const DOT_GRAB_RADIUS_PX: f32 = 8.0;
/// Greifradius für Segmente, in Bildschirm-Pixeln.
pub const SEGMENT_GRAB_RADIUS_PX: f32 = 12.0;

/// Toleranzen des Hit-Tests, in Bildschirm-Pixeln.
///
/// Die Umrechnung in Bildkoordinaten passiert im Test selbst; damit
/// fühlt sich das Greifen bei jedem Zoom gleich an.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickTolerance {
    pub dot_px: f32,
    pub segment_px: f32,
}

impl Default for PickTolerance {
    fn default() -> Self {
        Self {
            dot_px: DOT_GRAB_RADIUS_PX,
            segment_px: SEGMENT_GRAB_RADIUS_PX,
        }
    }
}

/// Ergebnis eines Hit-Tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// Ein Dot wurde getroffen (impliziert seine Entity).
    Dot { entity_id: u64, dot_id: u64 },
    /// Ein Segment wurde getroffen; adressiert nur die Entity.
    Entity { entity_id: u64 },
}

/// Kürzester Abstand von `p` zur Strecke `a`-`b`.
fn point_segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Sucht das oberste Element unter einer Bildschirmposition.
///
/// Dots haben Vorrang vor Segmenten. Innerhalb eines Durchgangs gewinnt
/// das näheste Element; bei exakt gleichem Abstand das zuerst
/// durchlaufene (Entity-Reihenfolge im Layer, Dot-Reihenfolge in der
/// Entity). Bei Polygonen zählt auch das Schluss-Segment zurück zum
/// ersten Dot.
pub fn hit_test(
    layer: &Layer,
    screen_pos: Vec2,
    view: &ViewTransform,
    tolerance: PickTolerance,
) -> Option<Hit> {
    let image_pos = view.screen_to_image(screen_pos);
    let dot_tolerance = view.pixels_to_image(tolerance.dot_px);
    let segment_tolerance = view.pixels_to_image(tolerance.segment_px);

    // Erster Durchgang: Dots
    let mut best: Option<(f32, Hit)> = None;
    for entity in layer.entities() {
        for dot in &entity.dots {
            let distance = image_pos.distance(dot.position);
            if distance > dot_tolerance {
                continue;
            }
            // Striktes `<` hält bei Gleichstand den früheren Treffer
            if best.map_or(true, |(d, _)| distance < d) {
                best = Some((
                    distance,
                    Hit::Dot {
                        entity_id: entity.id,
                        dot_id: dot.id,
                    },
                ));
            }
        }
    }
    if best.is_some() {
        return best.map(|(_, hit)| hit);
    }

    // Zweiter Durchgang: Segmente
    for entity in layer.entities() {
        for (i, j) in entity.segments() {
            let distance = point_segment_distance(
                image_pos,
                entity.dots[i].position,
                entity.dots[j].position,
            );
            if distance > segment_tolerance {
                continue;
            }
            if best.map_or(true, |(d, _)| distance < d) {
                best = Some((
                    distance,
                    Hit::Entity {
                        entity_id: entity.id,
                    },
                ));
            }
        }
    }
    best.map(|(_, hit)| hit)
}
