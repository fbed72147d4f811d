//! Entities: benannte Geometrie-Objekte aus geordneten Dot-Sequenzen.

use super::Dot;
use crate::error::{EngineError, Result};
use serde_json::{Map, Value};

/// Art einer Entity. Bestimmt Dot-Minimum und Schließung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// Einzelner Punkt (genau 1 Dot)
    Point,
    /// Offener Pfad (≥ 2 Dots, erster = Start, letzter = Ende)
    Line,
    /// Geschlossener Pfad (≥ 3 Dots, letzter verbindet zurück zum ersten)
    Polygon,
}

impl EntityKind {
    /// Minimale Dot-Anzahl der Art (siehe Kardinalitätstabelle).
    pub fn min_dots(self) -> usize {
        match self {
            EntityKind::Point => 1,
            EntityKind::Line => 2,
            EntityKind::Polygon => 3,
        }
    }

    /// Ob die Art nach Fertigstellung geschlossen ist.
    pub fn closes(self) -> bool {
        matches!(self, EntityKind::Polygon)
    }

    /// Persistenz-Tag der Art ("point" | "line" | "polygon").
    pub fn tag(self) -> &'static str {
        match self {
            EntityKind::Point => "point",
            EntityKind::Line => "line",
            EntityKind::Polygon => "polygon",
        }
    }

    /// Art aus Persistenz-Tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "point" => Some(EntityKind::Point),
            "line" => Some(EntityKind::Line),
            "polygon" => Some(EntityKind::Polygon),
            _ => None,
        }
    }
}

/// Eine benannte Geometrie-Entity mit geordneter Dot-Sequenz.
///
/// Die Dot-Reihenfolge ist semantisch: sie definiert Pfad bzw. Winding.
/// Bei Polygonen wird der erste Vertex nie am Ende dupliziert — die
/// Schließung ist `closed = true` plus Wrap auf Index 0 in
/// [`Entity::segments`].
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Eindeutige ID
    pub id: u64,
    /// Art (Point/Line/Polygon)
    pub kind: EntityKind,
    /// Pflichtname, nie leer
    pub name: String,
    /// Optionale Beschreibung
    pub description: Option<String>,
    /// Optionale offene Key-Value-Map
    pub data: Option<Map<String, Value>>,
    /// Geordnete Dot-Sequenz
    pub dots: Vec<Dot>,
    /// true genau für fertiggestellte Polygone
    pub closed: bool,
}

impl Entity {
    /// Erstellt eine Entity. `closed` ergibt sich aus der Art.
    pub fn new(
        id: u64,
        kind: EntityKind,
        name: String,
        description: Option<String>,
        data: Option<Map<String, Value>>,
        dots: Vec<Dot>,
    ) -> Self {
        Self {
            id,
            kind,
            name,
            description,
            data,
            dots,
            closed: kind.closes(),
        }
    }

    /// Findet einen Dot per ID.
    pub fn dot(&self, dot_id: u64) -> Option<&Dot> {
        self.dots.iter().find(|d| d.id == dot_id)
    }

    /// Findet einen Dot per ID (mutable).
    pub fn dot_mut(&mut self, dot_id: u64) -> Option<&mut Dot> {
        self.dots.iter_mut().find(|d| d.id == dot_id)
    }

    /// Sequenz-Index eines Dots.
    pub fn dot_index(&self, dot_id: u64) -> Option<usize> {
        self.dots.iter().position(|d| d.id == dot_id)
    }

    /// Iteriert alle Segmente als Index-Paare `(i, j)` in Pfadreihenfolge.
    ///
    /// Für Polygone enthält das letzte Paar den Wrap `(len-1, 0)`.
    /// Points und Sequenzen unter 2 Dots liefern keine Segmente.
    pub fn segments(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.dots.len();
        let count = if self.closed && n >= 3 {
            n
        } else {
            n.saturating_sub(1)
        };
        (0..count).map(move |i| (i, (i + 1) % n))
    }

    /// Prüft die strukturellen Invarianten der Art.
    ///
    /// Wird vom Codec nach dem Decode aufgerufen; Mutationen halten die
    /// Invarianten konstruktiv ein.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(EngineError::Validation(format!(
                "entity {} has an empty name",
                self.id
            )));
        }
        if self.dots.len() < self.kind.min_dots() {
            return Err(EngineError::Validation(format!(
                "{} entity {} has {} dots, minimum is {}",
                self.kind.tag(),
                self.id,
                self.dots.len(),
                self.kind.min_dots()
            )));
        }
        if self.kind == EntityKind::Point && self.dots.len() != 1 {
            return Err(EngineError::Validation(format!(
                "point entity {} must have exactly 1 dot, has {}",
                self.id,
                self.dots.len()
            )));
        }
        if self.closed != self.kind.closes() {
            return Err(EngineError::Validation(format!(
                "{} entity {} has closed={}",
                self.kind.tag(),
                self.id,
                self.closed
            )));
        }
        for dot in &self.dots {
            if dot.radius < 0.0 {
                return Err(EngineError::Validation(format!(
                    "dot {} of entity {} has a negative radius",
                    dot.id, self.id
                )));
            }
        }
        Ok(())
    }
}
