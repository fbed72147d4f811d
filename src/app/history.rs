//! Undo/Redo-Manager auf Basis inverser Delta-Commands.
//!
//! Statt Snapshots des gesamten Modells hält jeder Command nur den
//! minimalen Zustand, um genau eine Mutation umzukehren — bei langen
//! Edit-Sessions auf großen Layern der deutlich günstigere Weg.
//! Apply-dann-Invert-dann-Apply ist idempotent mit dem Original
//! (paarweise getestet, siehe unten).

use crate::core::{Dot, Entity, Layer};
use glam::Vec2;
use serde_json::{Map, Value};

/// Stil-Attribute eines Dots für Attribut-Commands.
#[derive(Debug, Clone, PartialEq)]
pub struct DotStyleAttrs {
    /// Radius in Bild-Einheiten
    pub radius: f32,
    /// Offene data-Map
    pub data: Map<String, Value>,
}

/// Meta-Attribute einer Entity für Attribut-Commands.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityMeta {
    /// Name (nie leer)
    pub name: String,
    /// Optionale Beschreibung
    pub description: Option<String>,
    /// Optionale data-Map
    pub data: Option<Map<String, Value>>,
}

/// Ein invertierbarer Edit-Command.
///
/// "Slot"-Commands (`entity`/`dot` als `Option`) verstauen den entfernten
/// Wert beim Undo im Command und geben ihn beim Redo zurück — so wandert
/// der Wert zwischen Layer und Command, ohne je doppelt zu existieren.
#[derive(Debug)]
pub enum EditCommand {
    /// Entity wurde am Index angehängt (create_point / finalize_draft)
    CreateEntity {
        /// Listenindex der erzeugten Entity
        index: usize,
        /// Slot: belegt solange die Entity NICHT im Layer ist
        entity: Option<Box<Entity>>,
    },
    /// Entity wurde am Index entfernt (delete_entity / Kaskade)
    RemoveEntity {
        /// Listenindex vor der Entfernung
        index: usize,
        /// Slot: belegt solange die Entity nicht im Layer ist
        entity: Option<Box<Entity>>,
    },
    /// Dot-Position geändert (ggf. koalesziert über eine Drag-Geste)
    MoveDot {
        /// Entity des Dots
        entity_id: u64,
        /// Betroffener Dot
        dot_id: u64,
        /// Position vor der Geste
        from: Vec2,
        /// Finale Position
        to: Vec2,
    },
    /// Dot wurde an Sequenz-Index eingefügt
    InsertDot {
        /// Entity des Dots
        entity_id: u64,
        /// Sequenz-Index des Einfügens
        index: usize,
        /// Slot: belegt solange der Dot nicht in der Entity ist
        dot: Option<Dot>,
    },
    /// Dot wurde an Sequenz-Index entfernt
    RemoveDot {
        /// Entity des Dots
        entity_id: u64,
        /// Sequenz-Index vor der Entfernung
        index: usize,
        /// Slot: belegt solange der Dot nicht in der Entity ist
        dot: Option<Dot>,
    },
    /// Stil-Attribute eines Dots geändert
    SetDotStyle {
        /// Entity des Dots
        entity_id: u64,
        /// Betroffener Dot
        dot_id: u64,
        /// Attribute vor der Änderung
        before: DotStyleAttrs,
        /// Attribute nach der Änderung
        after: DotStyleAttrs,
    },
    /// Meta-Attribute einer Entity geändert
    SetEntityMeta {
        /// Betroffene Entity
        entity_id: u64,
        /// Attribute vor der Änderung
        before: EntityMeta,
        /// Attribute nach der Änderung
        after: EntityMeta,
    },
    /// Mehrere Commands als eine atomare Einheit (Kaskaden-Delete)
    Composite {
        /// Teil-Commands in Redo-Reihenfolge
        commands: Vec<EditCommand>,
    },
}

impl EditCommand {
    /// Kehrt den Command um, direkt auf dem Layer.
    ///
    /// Umgeht die Invarianten-Prüfung der Mutations-Engine: der inverse
    /// Zustand war bereits ein gültiger früherer Zustand.
    pub fn undo(&mut self, layer: &mut Layer) {
        match self {
            EditCommand::CreateEntity { index, entity } => {
                *entity = Some(Box::new(layer.remove_entity_at(*index)));
            }
            EditCommand::RemoveEntity { index, entity } => {
                if let Some(entity) = entity.take() {
                    layer.insert_entity_at(*index, *entity);
                }
            }
            EditCommand::MoveDot {
                entity_id,
                dot_id,
                from,
                ..
            } => {
                set_dot_position(layer, *entity_id, *dot_id, *from);
            }
            EditCommand::InsertDot {
                entity_id,
                index,
                dot,
            } => {
                if let Some(entity) = layer.entity_mut(*entity_id) {
                    *dot = Some(entity.dots.remove(*index));
                }
            }
            EditCommand::RemoveDot {
                entity_id,
                index,
                dot,
            } => {
                if let (Some(entity), Some(dot)) = (layer.entity_mut(*entity_id), dot.take()) {
                    let index = (*index).min(entity.dots.len());
                    entity.dots.insert(index, dot);
                }
            }
            EditCommand::SetDotStyle {
                entity_id,
                dot_id,
                before,
                ..
            } => {
                apply_dot_style(layer, *entity_id, *dot_id, before);
            }
            EditCommand::SetEntityMeta {
                entity_id, before, ..
            } => {
                apply_entity_meta(layer, *entity_id, before);
            }
            EditCommand::Composite { commands } => {
                for command in commands.iter_mut().rev() {
                    command.undo(layer);
                }
            }
        }
    }

    /// Wendet den Command erneut an (symmetrisch zu [`EditCommand::undo`]).
    pub fn redo(&mut self, layer: &mut Layer) {
        match self {
            EditCommand::CreateEntity { index, entity } => {
                if let Some(entity) = entity.take() {
                    layer.insert_entity_at(*index, *entity);
                }
            }
            EditCommand::RemoveEntity { index, entity } => {
                *entity = Some(Box::new(layer.remove_entity_at(*index)));
            }
            EditCommand::MoveDot {
                entity_id,
                dot_id,
                to,
                ..
            } => {
                set_dot_position(layer, *entity_id, *dot_id, *to);
            }
            EditCommand::InsertDot {
                entity_id,
                index,
                dot,
            } => {
                if let (Some(entity), Some(dot)) = (layer.entity_mut(*entity_id), dot.take()) {
                    let index = (*index).min(entity.dots.len());
                    entity.dots.insert(index, dot);
                }
            }
            EditCommand::RemoveDot {
                entity_id,
                index,
                dot,
            } => {
                if let Some(entity) = layer.entity_mut(*entity_id) {
                    *dot = Some(entity.dots.remove(*index));
                }
            }
            EditCommand::SetDotStyle {
                entity_id,
                dot_id,
                after,
                ..
            } => {
                apply_dot_style(layer, *entity_id, *dot_id, after);
            }
            EditCommand::SetEntityMeta {
                entity_id, after, ..
            } => {
                apply_entity_meta(layer, *entity_id, after);
            }
            EditCommand::Composite { commands } => {
                for command in commands.iter_mut() {
                    command.redo(layer);
                }
            }
        }
    }
}

fn set_dot_position(layer: &mut Layer, entity_id: u64, dot_id: u64, position: Vec2) {
    if let Some(dot) = layer
        .entity_mut(entity_id)
        .and_then(|entity| entity.dot_mut(dot_id))
    {
        dot.position = position;
    }
}

fn apply_dot_style(layer: &mut Layer, entity_id: u64, dot_id: u64, attrs: &DotStyleAttrs) {
    if let Some(dot) = layer
        .entity_mut(entity_id)
        .and_then(|entity| entity.dot_mut(dot_id))
    {
        dot.radius = attrs.radius;
        dot.data = attrs.data.clone();
    }
}

fn apply_entity_meta(layer: &mut Layer, entity_id: u64, meta: &EntityMeta) {
    if let Some(entity) = layer.entity_mut(entity_id) {
        entity.name = meta.name.clone();
        entity.description = meta.description.clone();
        entity.data = meta.data.clone();
    }
}

/// Offene Drag-Geste: ein schwebender MoveDot-Command.
#[derive(Debug, Clone, Copy)]
struct PendingDrag {
    entity_id: u64,
    dot_id: u64,
    from: Vec2,
    to: Vec2,
}

/// Undo/Redo-Manager mit zwei Command-Stacks.
///
/// Die Stacks sind hier unbegrenzt; eine Tiefenbegrenzung ist Policy des
/// Hosts. Eine offene Drag-Geste liegt als schwebender Command neben den
/// Stacks und wird beim Loslassen (oder spätestens beim nächsten Undo /
/// der nächsten anderen Mutation) versiegelt.
#[derive(Debug, Default)]
pub struct EditHistory {
    undo_stack: Vec<EditCommand>,
    redo_stack: Vec<EditCommand>,
    pending_drag: Option<PendingDrag>,
}

impl EditHistory {
    /// Erstellt eine leere History.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prüft ob Undo möglich ist (inkl. offener, bewegter Drag-Geste).
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
            || self
                .pending_drag
                .map(|drag| drag.from != drag.to)
                .unwrap_or(false)
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Zeichnet einen abgeschlossenen Command auf.
    ///
    /// Versiegelt zuvor eine offene Drag-Geste; jede erfolgreiche Mutation
    /// löscht den Redo-Stack.
    pub fn record(&mut self, command: EditCommand) {
        self.seal_drag();
        self.undo_stack.push(command);
        self.redo_stack.clear();
    }

    /// Öffnet eine Drag-Geste für einen Dot (Position vor der Geste).
    pub fn open_drag(&mut self, entity_id: u64, dot_id: u64, from: Vec2) {
        self.seal_drag();
        self.pending_drag = Some(PendingDrag {
            entity_id,
            dot_id,
            from,
            to: from,
        });
    }

    /// Ziel der offenen Drag-Geste, falls vorhanden.
    pub fn drag_target(&self) -> Option<(u64, u64)> {
        self.pending_drag.map(|drag| (drag.entity_id, drag.dot_id))
    }

    /// Aktualisiert die finale Position der offenen Geste.
    ///
    /// Jeder Zwischenframe mutiert das Modell, daher wird der Redo-Stack
    /// bereits hier gelöscht, nicht erst beim Versiegeln.
    pub fn update_drag(&mut self, to: Vec2) {
        if let Some(drag) = self.pending_drag.as_mut() {
            drag.to = to;
            self.redo_stack.clear();
        }
    }

    /// Versiegelt die offene Drag-Geste zu genau einem MoveDot-Command.
    ///
    /// Eine Geste ohne Netto-Bewegung (`from == to`) zeichnet nichts auf.
    pub fn seal_drag(&mut self) {
        if let Some(drag) = self.pending_drag.take() {
            if drag.from != drag.to {
                self.undo_stack.push(EditCommand::MoveDot {
                    entity_id: drag.entity_id,
                    dot_id: drag.dot_id,
                    from: drag.from,
                    to: drag.to,
                });
            }
        }
    }

    /// Macht den jüngsten Command rückgängig.
    ///
    /// Eine offene Drag-Geste wird zuerst versiegelt, sodass ein Undo
    /// mitten in der Geste die Vor-Drag-Position in einem Schritt
    /// wiederherstellt.
    pub fn undo(&mut self, layer: &mut Layer) -> bool {
        self.seal_drag();
        let Some(mut command) = self.undo_stack.pop() else {
            return false;
        };
        command.undo(layer);
        self.redo_stack.push(command);
        true
    }

    /// Wendet den jüngsten rückgängig gemachten Command erneut an.
    pub fn redo(&mut self, layer: &mut Layer) -> bool {
        self.seal_drag();
        let Some(mut command) = self.redo_stack.pop() else {
            return false;
        };
        command.redo(layer);
        self.undo_stack.push(command);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EntityKind;

    fn layer_with_line() -> (Layer, u64, Vec<u64>) {
        let mut layer = Layer::new();
        let dot_ids: Vec<u64> = (0..3).map(|_| layer.alloc_id()).collect();
        let entity_id = layer.alloc_id();
        let dots = dot_ids
            .iter()
            .enumerate()
            .map(|(i, &id)| Dot::new(id, Vec2::new(i as f32 * 10.0, 0.0), 1.0))
            .collect();
        layer.push_entity(Entity::new(
            entity_id,
            EntityKind::Line,
            "linie".to_string(),
            None,
            None,
            dots,
        ));
        (layer, entity_id, dot_ids)
    }

    #[test]
    fn empty_history_cannot_undo_or_redo() {
        let history = EditHistory::new();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn move_dot_undo_redo_is_pairwise_idempotent() {
        let (mut layer, entity_id, dot_ids) = layer_with_line();
        let original = layer.entity(entity_id).expect("entity vorhanden").clone();

        let mut command = EditCommand::MoveDot {
            entity_id,
            dot_id: dot_ids[1],
            from: Vec2::new(10.0, 0.0),
            to: Vec2::new(42.0, 7.0),
        };
        command.redo(&mut layer);
        assert_eq!(
            layer.dot(entity_id, dot_ids[1]).map(|d| d.position),
            Some(Vec2::new(42.0, 7.0))
        );

        command.undo(&mut layer);
        assert_eq!(layer.entity(entity_id), Some(&original));

        // Apply → Invert → Apply entspricht einfachem Apply
        command.redo(&mut layer);
        assert_eq!(
            layer.dot(entity_id, dot_ids[1]).map(|d| d.position),
            Some(Vec2::new(42.0, 7.0))
        );
    }

    #[test]
    fn remove_dot_undo_restores_sequence_order() {
        let (mut layer, entity_id, dot_ids) = layer_with_line();
        let original = layer.entity(entity_id).expect("entity vorhanden").clone();

        let mut command = EditCommand::RemoveDot {
            entity_id,
            index: 1,
            dot: None,
        };
        command.redo(&mut layer);
        assert_eq!(
            layer.entity(entity_id).map(|e| e.dots.len()),
            Some(2)
        );

        command.undo(&mut layer);
        let restored = layer.entity(entity_id).expect("entity vorhanden");
        assert_eq!(restored, &original);
        let order: Vec<u64> = restored.dots.iter().map(|d| d.id).collect();
        assert_eq!(order, dot_ids);
    }

    #[test]
    fn composite_cascade_undoes_atomically() {
        let (mut layer, entity_id, _dot_ids) = layer_with_line();
        let original = layer.entity(entity_id).expect("entity vorhanden").clone();

        // Kaskade wie bei delete_dot: Dot raus, dann Entity raus
        let mut command = EditCommand::Composite {
            commands: vec![
                EditCommand::RemoveDot {
                    entity_id,
                    index: 0,
                    dot: None,
                },
                EditCommand::RemoveEntity {
                    index: 0,
                    entity: None,
                },
            ],
        };
        command.redo(&mut layer);
        assert_eq!(layer.entity_count(), 0);

        command.undo(&mut layer);
        assert_eq!(layer.entity_count(), 1);
        assert_eq!(layer.entity(entity_id), Some(&original));

        command.redo(&mut layer);
        assert_eq!(layer.entity_count(), 0);
    }

    #[test]
    fn record_clears_redo_stack() {
        let (mut layer, entity_id, dot_ids) = layer_with_line();
        let mut history = EditHistory::new();

        history.record(EditCommand::MoveDot {
            entity_id,
            dot_id: dot_ids[0],
            from: Vec2::ZERO,
            to: Vec2::new(1.0, 1.0),
        });
        assert!(history.undo(&mut layer));
        assert!(history.can_redo());

        history.record(EditCommand::MoveDot {
            entity_id,
            dot_id: dot_ids[0],
            from: Vec2::ZERO,
            to: Vec2::new(2.0, 2.0),
        });
        assert!(!history.can_redo());
    }

    #[test]
    fn drag_gesture_coalesces_into_one_command() {
        let (mut layer, entity_id, dot_ids) = layer_with_line();
        let mut history = EditHistory::new();
        let dot_id = dot_ids[0];

        history.open_drag(entity_id, dot_id, Vec2::ZERO);
        for step in [
            Vec2::new(5.0, 5.0),
            Vec2::new(6.0, 6.0),
            Vec2::new(7.0, 7.0),
        ] {
            if let Some(dot) = layer
                .entity_mut(entity_id)
                .and_then(|e| e.dot_mut(dot_id))
            {
                dot.position = step;
            }
            history.update_drag(step);
        }
        history.seal_drag();

        // Ein einziges Undo stellt die Vor-Drag-Position wieder her
        assert!(history.undo(&mut layer));
        assert_eq!(
            layer.dot(entity_id, dot_id).map(|d| d.position),
            Some(Vec2::ZERO)
        );
        assert!(!history.can_undo());

        assert!(history.redo(&mut layer));
        assert_eq!(
            layer.dot(entity_id, dot_id).map(|d| d.position),
            Some(Vec2::new(7.0, 7.0))
        );
    }

    #[test]
    fn undo_seals_open_drag_first() {
        let (mut layer, entity_id, dot_ids) = layer_with_line();
        let mut history = EditHistory::new();
        let dot_id = dot_ids[0];

        history.open_drag(entity_id, dot_id, Vec2::ZERO);
        if let Some(dot) = layer
            .entity_mut(entity_id)
            .and_then(|e| e.dot_mut(dot_id))
        {
            dot.position = Vec2::new(9.0, 9.0);
        }
        history.update_drag(Vec2::new(9.0, 9.0));

        // Kein explizites end_drag: undo versiegelt selbst
        assert!(history.undo(&mut layer));
        assert_eq!(
            layer.dot(entity_id, dot_id).map(|d| d.position),
            Some(Vec2::ZERO)
        );
    }

    #[test]
    fn empty_drag_records_nothing() {
        let (mut layer, entity_id, dot_ids) = layer_with_line();
        let mut history = EditHistory::new();

        history.open_drag(entity_id, dot_ids[0], Vec2::ZERO);
        history.seal_drag();
        assert!(!history.can_undo());
        assert!(!history.undo(&mut layer));
    }
}
