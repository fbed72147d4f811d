//! Use-Cases: Line/Polygon-Erstellung über einen Draft.
//!
//! Draft-Akkumulation berührt nur transienten Zustand außerhalb des
//! Entity-Modells und zeichnet deshalb keine Undo-Commands auf; erst das
//! Finalize erzeugt den einen CreateEntity-Command.

use crate::app::history::EditCommand;
use crate::app::{Draft, EditorState, PresetStyle};
use crate::core::{default_dot_data, Dot, Entity, EntityKind};
use crate::error::{EngineError, Result};
use glam::Vec2;
use serde_json::{Map, Value};

fn draft_dot(state: &mut EditorState, preset: PresetStyle, position: Vec2) -> Dot {
    let id = state.layer.alloc_id();
    Dot::with_data(id, position, preset.radius, default_dot_data(preset.rgba))
}

/// Beginnt einen Draft mit einem ersten Dot.
///
/// Nur Line und Polygon haben eine Draft-Phase; `Point` scheitert mit
/// `InvalidState`, ebenso ein zweiter Draft während einer laufen.
pub fn begin_draft(
    state: &mut EditorState,
    kind: EntityKind,
    first_point: Vec2,
    preset: PresetStyle,
) -> Result<u64> {
    if kind == EntityKind::Point {
        return Err(EngineError::InvalidState(
            "a point has no multi-step draft phase".to_string(),
        ));
    }
    if state.draft.is_some() {
        return Err(EngineError::InvalidState(
            "another draft is already in progress".to_string(),
        ));
    }

    let first = draft_dot(state, preset, first_point);
    let draft_id = state.layer.alloc_id();
    state.draft = Some(Draft {
        id: draft_id,
        kind,
        preset,
        dots: vec![first],
    });

    log::info!("Draft {} ({:?}) begonnen", draft_id, kind);
    Ok(draft_id)
}

/// Hängt einen Dot an einen laufenden Draft an.
pub fn append_draft_dot(state: &mut EditorState, draft_id: u64, point: Vec2) -> Result<u64> {
    let preset = match &state.draft {
        Some(draft) if draft.id == draft_id => draft.preset,
        _ => {
            return Err(EngineError::NotFound(format!("draft {draft_id}")));
        }
    };

    let dot = draft_dot(state, preset, point);
    let dot_id = dot.id;
    if let Some(draft) = state.draft.as_mut() {
        draft.dots.push(dot);
        log::debug!("Draft {}: Dot {} angehängt", draft_id, dot_id);
    }
    Ok(dot_id)
}

/// Verwirft den laufenden Draft (Escape). Kein Undo-Command.
pub fn cancel_draft(state: &mut EditorState) -> bool {
    match state.draft.take() {
        Some(draft) => {
            log::info!("Draft {} verworfen ({} Dots)", draft.id, draft.dots.len());
            true
        }
        None => false,
    }
}

/// Finalisiert den Draft zu einer committeten Entity.
///
/// Line braucht ≥ 2 Dots, Polygon ≥ 3; darunter `InvalidState`. Beim
/// Polygon wird `closed = true` gesetzt — der letzte Dot verbindet zurück
/// zum ersten, ohne dass ein Vertex dupliziert wird. Die Entity wird ans
/// Layer-Ende angehängt und selektiert.
pub fn finalize_draft(
    state: &mut EditorState,
    draft_id: u64,
    name: &str,
    description: Option<String>,
    data: Option<Map<String, Value>>,
) -> Result<u64> {
    let (kind, dot_count) = match &state.draft {
        Some(draft) if draft.id == draft_id => (draft.kind, draft.dots.len()),
        _ => {
            return Err(EngineError::NotFound(format!("draft {draft_id}")));
        }
    };
    if name.is_empty() {
        return Err(EngineError::Validation(
            "entity name must not be empty".to_string(),
        ));
    }
    if dot_count < kind.min_dots() {
        return Err(EngineError::InvalidState(format!(
            "{} draft needs at least {} dots, has {}",
            kind.tag(),
            kind.min_dots(),
            dot_count
        )));
    }

    // Nach den Prüfungen kann nichts mehr scheitern → Draft entnehmen
    let Some(draft) = state.draft.take() else {
        return Err(EngineError::NotFound(format!("draft {draft_id}")));
    };
    let entity_id = state.layer.alloc_id();
    let entity = Entity::new(
        entity_id,
        draft.kind,
        name.to_string(),
        description,
        data,
        draft.dots,
    );
    let index = state.layer.entity_count();
    state.layer.push_entity(entity);

    state.history.record(EditCommand::CreateEntity {
        index,
        entity: None,
    });
    state.selection.select_entity(entity_id);

    log::info!(
        "Draft {} zu Entity '{}' ({}) finalisiert",
        draft_id,
        name,
        entity_id
    );
    Ok(entity_id)
}
