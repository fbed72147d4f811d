//! Der Layer: geordnete Entity-Liste plus Session-ID-Vergabe.

use super::{Dot, Entity};

/// Geordnete Entity-Liste eines Layers.
///
/// Die Reihenfolge ist Anzeige-/Listenreihenfolge (Append-Order), nicht
/// geometrisch bedeutsam. IDs für Entities, Drafts und Dots kommen aus
/// einem monotonen Session-Allocator und werden nie wiederverwendet.
#[derive(Debug, Clone)]
pub struct Layer {
    entities: Vec<Entity>,
    next_id: u64,
}

impl Layer {
    /// Erstellt einen leeren Layer.
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            next_id: 1,
        }
    }

    /// Vergibt die nächste freie ID.
    pub fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Hebt den Allocator über `id` an (nach einem Decode).
    pub fn bump_id_floor(&mut self, id: u64) {
        if id >= self.next_id {
            self.next_id = id + 1;
        }
    }

    /// Anzahl der Entities.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Iterator über alle Entities in Listenreihenfolge.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Findet eine Entity per ID.
    pub fn entity(&self, entity_id: u64) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == entity_id)
    }

    /// Findet eine Entity per ID (mutable).
    pub fn entity_mut(&mut self, entity_id: u64) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == entity_id)
    }

    /// Listenindex einer Entity.
    pub fn entity_index(&self, entity_id: u64) -> Option<usize> {
        self.entities.iter().position(|e| e.id == entity_id)
    }

    /// Findet einen Dot innerhalb einer Entity.
    pub fn dot(&self, entity_id: u64, dot_id: u64) -> Option<&Dot> {
        self.entity(entity_id)?.dot(dot_id)
    }

    /// Hängt eine Entity ans Listenende an.
    pub fn push_entity(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Fügt eine Entity an einem Listenindex ein (Undo-Wiederherstellung).
    pub fn insert_entity_at(&mut self, index: usize, entity: Entity) {
        let index = index.min(self.entities.len());
        self.entities.insert(index, entity);
    }

    /// Entfernt die Entity an einem Listenindex.
    pub fn remove_entity_at(&mut self, index: usize) -> Entity {
        self.entities.remove(index)
    }
}

impl Default for Layer {
    fn default() -> Self {
        Self::new()
    }
}
