//! Zentraler Editor-Zustand: Layer, Selektion, Draft und History.

use crate::app::history::EditHistory;
use crate::core::{Dot, EntityKind, Layer, DEFAULT_RGBA};

/// Toolbox-Voreinstellung für neu erzeugte Dots.
///
/// Wird vom Aufrufer (Toolbox/Presets des Hosts) explizit in
/// `begin_draft`/`create_point` hereingereicht; die Engine liest keine
/// globale Konfiguration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetStyle {
    /// Radius neuer Dots in Bild-Einheiten (0 = kosmetischer Punkt)
    pub radius: f32,
    /// Default-Farbe neuer Dots
    pub rgba: [u8; 4],
}

impl Default for PresetStyle {
    fn default() -> Self {
        Self {
            radius: 0.0,
            rgba: DEFAULT_RGBA,
        }
    }
}

/// Auswahlzustand. Transient, wird nie persistiert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Aktuell selektierte Entity
    pub selected_entity_id: Option<u64>,
    /// Selektierter Dot; nur gültig innerhalb der selektierten Entity
    pub selected_dot_id: Option<u64>,
}

impl SelectionState {
    /// Löscht die Selektion vollständig.
    pub fn clear(&mut self) {
        self.selected_entity_id = None;
        self.selected_dot_id = None;
    }

    /// Selektiert eine Entity (ohne Dot).
    pub fn select_entity(&mut self, entity_id: u64) {
        self.selected_entity_id = Some(entity_id);
        self.selected_dot_id = None;
    }

    /// Selektiert einen Dot innerhalb seiner Entity.
    pub fn select_dot(&mut self, entity_id: u64, dot_id: u64) {
        self.selected_entity_id = Some(entity_id);
        self.selected_dot_id = Some(dot_id);
    }

    /// Gleicht die Selektion mit dem Layer ab (nach Undo/Redo).
    ///
    /// Verschwundene Entity → Selektion leer; verschwundener Dot →
    /// Reduktion auf Entity-Selektion.
    pub fn reconcile(&mut self, layer: &Layer) {
        let Some(entity_id) = self.selected_entity_id else {
            self.selected_dot_id = None;
            return;
        };
        let Some(entity) = layer.entity(entity_id) else {
            self.clear();
            return;
        };
        if let Some(dot_id) = self.selected_dot_id {
            if entity.dot(dot_id).is_none() {
                self.selected_dot_id = None;
            }
        }
    }
}

/// Eine in Erstellung befindliche Line/Polygon, die Dots sammelt.
///
/// Erst `finalize_draft` macht daraus eine committete Entity; bis dahin
/// taucht der Draft nicht in der Entity-Liste des Layers auf.
#[derive(Debug, Clone)]
pub struct Draft {
    /// Draft-ID (aus demselben Session-Allocator wie Entity-IDs)
    pub id: u64,
    /// Ziel-Art (Line oder Polygon, nie Point)
    pub kind: EntityKind,
    /// Preset für alle während des Drafts erzeugten Dots
    pub preset: PresetStyle,
    /// Bisher gesammelte Dots in Klickreihenfolge
    pub dots: Vec<Dot>,
}

/// Gesamtzustand der Engine: Entity-Modell, Selektion, Draft, History.
///
/// Single-Writer-Modell: alle Mutationen laufen synchron über die
/// Use-Case-Funktionen; Einbettung in einen Multi-Thread-Host muss den
/// Zugriff extern serialisieren.
pub struct EditorState {
    /// Der bearbeitete Layer (Entity-Modell)
    pub layer: Layer,
    /// Transiente Selektion
    pub selection: SelectionState,
    /// Höchstens ein Draft gleichzeitig
    pub draft: Option<Draft>,
    /// Undo/Redo-History (inverse Delta-Commands)
    pub history: EditHistory,
}

impl EditorState {
    /// Erstellt einen leeren Editor-Zustand.
    pub fn new() -> Self {
        Self {
            layer: Layer::new(),
            selection: SelectionState::default(),
            draft: None,
            history: EditHistory::new(),
        }
    }

    /// Erstellt einen Editor-Zustand über einem geladenen Layer.
    pub fn with_layer(layer: Layer) -> Self {
        Self {
            layer,
            selection: SelectionState::default(),
            draft: None,
            history: EditHistory::new(),
        }
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Entity, EntityKind};
    use glam::Vec2;

    #[test]
    fn reconcile_clears_selection_of_missing_entity() {
        let layer = Layer::new();
        let mut selection = SelectionState::default();
        selection.select_dot(7, 8);
        selection.reconcile(&layer);
        assert_eq!(selection, SelectionState::default());
    }

    #[test]
    fn reconcile_reduces_to_entity_selection_when_dot_is_gone() {
        let mut layer = Layer::new();
        let dot_id = layer.alloc_id();
        let entity_id = layer.alloc_id();
        layer.push_entity(Entity::new(
            entity_id,
            EntityKind::Point,
            "p".to_string(),
            None,
            None,
            vec![Dot::new(dot_id, Vec2::ZERO, 0.0)],
        ));

        let mut selection = SelectionState::default();
        selection.select_dot(entity_id, 999);
        selection.reconcile(&layer);
        assert_eq!(selection.selected_entity_id, Some(entity_id));
        assert_eq!(selection.selected_dot_id, None);
    }
}
