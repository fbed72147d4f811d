//! Draw-Szene als expliziter Übergabevertrag zwischen Engine und Renderer.
//!
//! Der Renderer sieht nie Modell-Objekte, nur fertige Stil-Deskriptoren
//! in Zeichenreihenfolge.

use super::style::{resolve_dot, resolve_draft_dot, resolve_segment, DotStyle, SegmentStyle};
use crate::app::{Draft, SelectionState};
use crate::core::Layer;

/// Zeichenliste für einen Frame.
///
/// Segmente zuerst, Dots darüber; innerhalb jeder Liste gilt die
/// Layer-Reihenfolge, der Draft-Preview kommt zuletzt.
#[derive(Debug, Clone, Default)]
pub struct DrawScene {
    /// Alle Segmente in Zeichenreihenfolge
    pub segments: Vec<SegmentStyle>,
    /// Alle Dots in Zeichenreihenfolge
    pub dots: Vec<DotStyle>,
}

impl DrawScene {
    /// Baut die Szene aus Layer, Selektion und optionalem Draft.
    pub fn build(layer: &Layer, selection: &SelectionState, draft: Option<&Draft>) -> Self {
        let mut scene = DrawScene::default();

        for entity in layer.entities() {
            for (i, j) in entity.segments() {
                scene.segments.push(resolve_segment(
                    &entity.dots[i],
                    &entity.dots[j],
                    entity,
                    selection,
                ));
            }
            for dot in &entity.dots {
                scene.dots.push(resolve_dot(dot, entity, selection));
            }
        }

        // Draft-Preview: offener Pfad, die Schließung entsteht erst beim
        // Finalisieren
        if let Some(draft) = draft {
            for pair in draft.dots.windows(2) {
                scene.segments.push(SegmentStyle {
                    start: pair[0].position,
                    end: pair[1].position,
                    width: pair[0].radius.max(super::style::MIN_SEGMENT_WIDTH),
                    color: super::style::STROKE_DEFAULT,
                });
            }
            for dot in &draft.dots {
                scene.dots.push(resolve_draft_dot(dot));
            }
        }

        scene
    }
}
