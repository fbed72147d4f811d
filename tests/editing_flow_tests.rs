//! Integrationstests für die Editing-Use-Cases:
//! - Draft-Lebenszyklus (begin/append/finalize) für Line und Polygon
//! - Drag-Koaleszenz im Undo
//! - Kaskadierendes Löschen mit atomarem Undo
//! - Hit-Test und Selektion über die View-Transformation

use glam::Vec2;
use pixtag_vector_engine::use_cases::{
    append_draft_dot, begin_drag, begin_draft, create_point, delete_dot, end_drag, finalize_draft,
    hit_test, insert_dot_after, move_dot, redo, select_hit, undo, Hit, PickTolerance,
};
use pixtag_vector_engine::{EditorState, EntityKind, PresetStyle, ViewTransform};

/// Baut ein Dreieck-Polygon bei (0,0), (10,0), (10,10).
fn state_with_triangle() -> (EditorState, u64) {
    let mut state = EditorState::new();
    let draft_id = begin_draft(
        &mut state,
        EntityKind::Polygon,
        Vec2::ZERO,
        PresetStyle::default(),
    )
    .expect("begin_draft sollte für Polygon gelingen");
    append_draft_dot(&mut state, draft_id, Vec2::new(10.0, 0.0)).expect("append");
    append_draft_dot(&mut state, draft_id, Vec2::new(10.0, 10.0)).expect("append");
    let entity_id = finalize_draft(&mut state, draft_id, "dreieck", None, None)
        .expect("finalize sollte mit 3 Dots gelingen");
    (state, entity_id)
}

#[test]
fn test_polygon_draft_finalizes_closed_without_duplicate_vertex() {
    let (state, entity_id) = state_with_triangle();
    let entity = state
        .layer
        .entity(entity_id)
        .expect("Entity sollte im Layer stehen");

    assert!(entity.closed);
    assert_eq!(entity.dots.len(), 3);
    // Das Schluss-Segment läuft zurück auf Index 0, ohne Duplikat
    let segments: Vec<_> = entity.segments().collect();
    assert_eq!(segments.last(), Some(&(2, 0)));
    // Draft ist verbraucht, genau ein Undo-Schritt entstand
    assert!(state.draft.is_none());
    assert!(state.can_undo());
}

#[test]
fn test_point_creation_with_default_data() {
    let mut state = EditorState::new();
    let entity_id = create_point(
        &mut state,
        Vec2::new(5.0, 5.0),
        PresetStyle {
            radius: 2.0,
            rgba: [0, 0, 0, 255],
        },
        "marke",
        None,
        None,
    )
    .expect("create_point sollte gelingen");

    let entity = state
        .layer
        .entity(entity_id)
        .expect("Entity sollte im Layer stehen");
    assert_eq!(entity.kind, EntityKind::Point);
    assert_eq!(entity.dots.len(), 1);
    assert_eq!(entity.dots[0].radius, 2.0);
    assert_eq!(entity.dots[0].rgba(), [0, 0, 0, 255]);
}

#[test]
fn test_drag_gesture_coalesces_into_single_undo_step() {
    let (mut state, entity_id) = state_with_triangle();
    let dot_id = state
        .layer
        .entity(entity_id)
        .expect("Entity sollte im Layer stehen")
        .dots[0]
        .id;

    begin_drag(&mut state, entity_id, dot_id).expect("begin_drag");
    move_dot(&mut state, entity_id, dot_id, Vec2::new(5.0, 5.0)).expect("move");
    move_dot(&mut state, entity_id, dot_id, Vec2::new(6.0, 6.0)).expect("move");
    move_dot(&mut state, entity_id, dot_id, Vec2::new(7.0, 7.0)).expect("move");
    end_drag(&mut state);

    assert!(undo(&mut state));
    assert_eq!(
        state.layer.dot(entity_id, dot_id).map(|d| d.position),
        Some(Vec2::ZERO),
        "Undo der Geste muss auf die Vor-Drag-Position springen"
    );

    assert!(redo(&mut state));
    assert_eq!(
        state.layer.dot(entity_id, dot_id).map(|d| d.position),
        Some(Vec2::new(7.0, 7.0))
    );
}

#[test]
fn test_cascading_delete_restores_atomically_on_undo() {
    let (mut state, entity_id) = state_with_triangle();
    let original = state
        .layer
        .entity(entity_id)
        .expect("Entity sollte im Layer stehen")
        .clone();
    let dot_id = original.dots[1].id;

    let cascaded = delete_dot(&mut state, entity_id, dot_id).expect("delete_dot");
    assert!(cascaded, "3-Dot-Polygon minus 1 muss kaskadieren");
    assert_eq!(state.layer.entity_count(), 0);

    assert!(undo(&mut state));
    assert_eq!(
        state.layer.entity(entity_id),
        Some(&original),
        "Ein Undo-Schritt muss Dot und Entity gemeinsam wiederherstellen"
    );
}

#[test]
fn test_insert_then_delete_keeps_polygon_above_minimum() {
    let (mut state, entity_id) = state_with_triangle();
    let anchor = state
        .layer
        .entity(entity_id)
        .expect("Entity sollte im Layer stehen")
        .dots[2]
        .id;

    let extra =
        insert_dot_after(&mut state, entity_id, anchor, Vec2::new(0.0, 10.0)).expect("insert");
    assert_eq!(
        state
            .layer
            .entity(entity_id)
            .expect("Entity sollte im Layer stehen")
            .dots
            .len(),
        4
    );

    let cascaded = delete_dot(&mut state, entity_id, extra).expect("delete");
    assert!(!cascaded);
    let entity = state
        .layer
        .entity(entity_id)
        .expect("Entity sollte im Layer stehen");
    assert_eq!(entity.dots.len(), 3);
    assert!(entity.closed);
}

#[test]
fn test_hit_test_routes_click_to_selection_across_zoom() {
    let (mut state, entity_id) = state_with_triangle();
    let dot_id = state
        .layer
        .entity(entity_id)
        .expect("Entity sollte im Layer stehen")
        .dots[0]
        .id;

    for scale in [1.0_f32, 4.0] {
        let view = ViewTransform::new(scale, Vec2::new(30.0, 40.0));
        // 3 Pixel neben dem Dot, in Bildschirmkoordinaten
        let screen = view.image_to_screen(Vec2::ZERO) + Vec2::new(3.0, 0.0);
        let hit = hit_test(&state.layer, screen, &view, PickTolerance::default());
        assert_eq!(
            hit,
            Some(Hit::Dot { entity_id, dot_id }),
            "Treffer muss bei Zoom {scale} identisch ausfallen"
        );
        select_hit(&mut state, hit);
        assert_eq!(state.selection.selected_dot_id, Some(dot_id));
    }
}

#[test]
fn test_line_draft_below_minimum_cannot_finalize() {
    let mut state = EditorState::new();
    let draft_id = begin_draft(
        &mut state,
        EntityKind::Line,
        Vec2::ZERO,
        PresetStyle::default(),
    )
    .expect("begin_draft");

    assert!(
        finalize_draft(&mut state, draft_id, "l", None, None).is_err(),
        "Line mit 1 Dot darf nicht finalisieren"
    );
    // Draft lebt weiter und kann vervollständigt werden
    append_draft_dot(&mut state, draft_id, Vec2::new(10.0, 0.0)).expect("append");
    let entity_id = finalize_draft(&mut state, draft_id, "l", None, None).expect("finalize");
    assert_eq!(state.layer.entity_index(entity_id), Some(0));
}
