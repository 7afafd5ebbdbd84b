use planmark_geometry::{ContainerBounds, PercentRect};

use super::*;
use crate::interaction::{Interaction, ResizeHandle};
use crate::model::{Outline, ShapeKind, Tool};

#[test]
fn test_draw_commits_and_selects() {
    let (mut engine, _) = engine_with(Tool::Shape(ShapeKind::Ellipse), &[]);
    drag(&mut engine, (100.0, 100.0), (300.0, 400.0));

    assert_eq!(engine.shapes().len(), 1);
    let shape = &engine.shapes()[0];
    assert_eq!(shape.kind, ShapeKind::Ellipse);
    assert!(approx_rect(shape.bounds, PercentRect::new(10.0, 10.0, 20.0, 30.0)));
    assert_eq!(engine.selection().to_vec(), vec![shape.id.clone()]);
    assert!(engine.interaction().is_none());
}

#[test]
fn test_draw_up_left_is_normalized() {
    let (mut engine, _) = engine_with(Tool::Shape(ShapeKind::Box), &[]);
    engine.pointer_down(at(400.0, 400.0));
    engine.pointer_move(at(200.0, 100.0));

    // Draft keeps signed extents; the ghost query normalizes
    match engine.interaction() {
        Interaction::Drawing { draft, .. } => {
            assert!(draft.width < 0.0 && draft.height < 0.0);
        }
        other => panic!("expected drawing, got {other:?}"),
    }
    let (_, ghost) = engine.draft().unwrap();
    assert!(approx_rect(ghost, PercentRect::new(20.0, 10.0, 20.0, 30.0)));

    engine.pointer_up(at(200.0, 100.0));
    let bounds = engine.shapes()[0].bounds;
    assert!(bounds.is_normalized());
    assert!(approx_rect(bounds, PercentRect::new(20.0, 10.0, 20.0, 30.0)));
}

#[test]
fn test_minimum_size_rejection() {
    let (mut engine, _) = engine_with(Tool::Shape(ShapeKind::Box), &[]);
    // 0.5% x 0.5%
    drag(&mut engine, (100.0, 100.0), (105.0, 105.0));
    assert!(engine.shapes().is_empty());
    assert!(engine.selection().is_empty());

    // 2% x 2%
    drag(&mut engine, (100.0, 100.0), (120.0, 120.0));
    assert_eq!(engine.shapes().len(), 1);
}

#[test]
fn test_minimum_size_needs_both_extents() {
    let (mut engine, _) = engine_with(Tool::Shape(ShapeKind::Box), &[]);
    // Wide but flat
    drag(&mut engine, (100.0, 100.0), (500.0, 105.0));
    assert!(engine.shapes().is_empty());
}

#[test]
fn test_move_single_shape_from_snapshot() {
    let (mut engine, ids) = engine_with(Tool::Select, &[PercentRect::new(10.0, 10.0, 10.0, 10.0)]);
    engine.pointer_down(at(150.0, 150.0));
    engine.pointer_move(at(200.0, 170.0));
    engine.pointer_move(at(250.0, 200.0));
    engine.pointer_up(at(250.0, 200.0));

    let bounds = engine.store().shape(&ids[0]).unwrap().bounds;
    assert!(approx_rect(bounds, PercentRect::new(20.0, 15.0, 10.0, 10.0)));
    assert_eq!(engine.selection().to_vec(), vec![ids[0].clone()]);
}

#[test]
fn test_multi_move_applies_same_delta() {
    let (mut engine, ids) = engine_with(
        Tool::Select,
        &[
            PercentRect::new(10.0, 10.0, 10.0, 10.0),
            PercentRect::new(50.0, 60.0, 5.0, 5.0),
        ],
    );
    engine.select(ids.clone());

    // Press on an already-selected shape keeps the multi-selection
    drag(&mut engine, (150.0, 150.0), (200.0, 100.0));

    let a = engine.store().shape(&ids[0]).unwrap().bounds;
    let b = engine.store().shape(&ids[1]).unwrap().bounds;
    assert!(approx_rect(a, PercentRect::new(15.0, 5.0, 10.0, 10.0)));
    assert!(approx_rect(b, PercentRect::new(55.0, 55.0, 5.0, 5.0)));
    assert_eq!(engine.selection().len(), 2);
}

#[test]
fn test_shape_tool_press_on_shape_moves_it() {
    let (mut engine, ids) = engine_with(
        Tool::Shape(ShapeKind::Cloud),
        &[
            PercentRect::new(10.0, 10.0, 10.0, 10.0),
            PercentRect::new(50.0, 50.0, 10.0, 10.0),
        ],
    );
    engine.select(ids.clone());
    drag(&mut engine, (150.0, 150.0), (160.0, 250.0));

    assert_eq!(engine.shapes().len(), 2);
    assert_eq!(engine.selection().to_vec(), vec![ids[0].clone()]);
    let moved = engine.store().shape(&ids[0]).unwrap().bounds;
    assert!(approx_rect(moved, PercentRect::new(11.0, 20.0, 10.0, 10.0)));
    let still = engine.store().shape(&ids[1]).unwrap().bounds;
    assert!(approx_rect(still, PercentRect::new(50.0, 50.0, 10.0, 10.0)));
}

#[test]
fn test_resize_handle_isolation() {
    let rect = PercentRect::new(10.0, 10.0, 20.0, 20.0);

    let (mut engine, ids) = engine_with(Tool::Select, &[rect]);
    engine.select([ids[0].clone()]);
    engine.pointer_down(at(100.0, 100.0));
    assert!(matches!(
        engine.interaction(),
        Interaction::Resizing {
            handle: ResizeHandle::TopLeft,
            ..
        }
    ));
    engine.pointer_move(at(150.0, 150.0));
    engine.pointer_up(at(150.0, 150.0));
    let tl = engine.store().shape(&ids[0]).unwrap().bounds;
    assert!(approx_rect(tl, PercentRect::new(15.0, 15.0, 15.0, 15.0)));

    let (mut engine, ids) = engine_with(Tool::Select, &[rect]);
    engine.select([ids[0].clone()]);
    drag(&mut engine, (300.0, 300.0), (350.0, 350.0));
    let br = engine.store().shape(&ids[0]).unwrap().bounds;
    assert!(approx_rect(br, PercentRect::new(10.0, 10.0, 25.0, 25.0)));
}

#[test]
fn test_resize_is_relative_to_gesture_start() {
    let (mut engine, ids) = engine_with(Tool::Select, &[PercentRect::new(10.0, 10.0, 20.0, 20.0)]);
    engine.select([ids[0].clone()]);
    engine.pointer_down(at(300.0, 300.0));
    for step in 1..=10 {
        let p = 300.0 + step as f32 * 5.0;
        engine.pointer_move(at(p, p));
    }
    engine.pointer_up(at(350.0, 350.0));
    let bounds = engine.store().shape(&ids[0]).unwrap().bounds;
    assert!(approx_rect(bounds, PercentRect::new(10.0, 10.0, 25.0, 25.0)));
}

#[test]
fn test_resize_past_opposite_edge_normalizes_on_release() {
    let (mut engine, ids) = engine_with(Tool::Select, &[PercentRect::new(10.0, 10.0, 20.0, 20.0)]);
    engine.select([ids[0].clone()]);
    engine.pointer_down(at(100.0, 100.0));
    engine.pointer_move(at(400.0, 400.0));
    assert!(engine.store().shape(&ids[0]).unwrap().bounds.width < 0.0);

    engine.pointer_up(at(400.0, 400.0));
    let bounds = engine.store().shape(&ids[0]).unwrap().bounds;
    assert!(approx_rect(bounds, PercentRect::new(30.0, 30.0, 10.0, 10.0)));
}

#[test]
fn test_handles_only_for_single_selection() {
    let (mut engine, ids) = engine_with(
        Tool::Select,
        &[
            PercentRect::new(10.0, 10.0, 20.0, 20.0),
            PercentRect::new(50.0, 50.0, 10.0, 10.0),
        ],
    );
    assert!(engine.resize_handles().is_empty());

    engine.select([ids[0].clone()]);
    let handles = engine.resize_handles();
    assert_eq!(handles.len(), 4);
    let (handle, rect) = handles[0];
    assert_eq!(handle, ResizeHandle::TopLeft);
    assert!(approx_eq(rect.left, 93.0));
    assert!(approx_eq(rect.width, 14.0));

    engine.select(ids.clone());
    assert!(engine.resize_handles().is_empty());
    // Pressing the former handle position now moves the multi-selection
    engine.pointer_down(at(101.0, 101.0));
    assert!(matches!(engine.interaction(), Interaction::Moving { .. }));
}

#[test]
fn test_gesture_exclusivity() {
    let (mut engine, _) = engine_with(Tool::Shape(ShapeKind::Box), &[PercentRect::new(60.0, 60.0, 10.0, 10.0)]);
    engine.pointer_down(at(100.0, 100.0));
    engine.pointer_move(at(200.0, 200.0));

    let interaction = engine.interaction().clone();
    let selection = engine.selection().clone();
    let viewport = engine.viewport();
    engine.clear_dirty();

    engine.pointer_down(middle_at(650.0, 650.0));
    engine.pointer_down(at(650.0, 650.0));

    assert_eq!(engine.interaction(), &interaction);
    assert_eq!(engine.selection(), &selection);
    assert_eq!(engine.viewport(), viewport);
    assert!(!engine.is_dirty());
}

#[test]
fn test_pointer_leave_commits_draft() {
    let (mut engine, _) = engine_with(Tool::Shape(ShapeKind::Cloud), &[]);
    engine.pointer_down(at(100.0, 100.0));
    engine.pointer_move(at(300.0, 300.0));
    engine.pointer_leave();

    assert!(engine.interaction().is_none());
    assert_eq!(engine.shapes().len(), 1);
    assert_eq!(engine.shapes()[0].kind, ShapeKind::Cloud);
}

#[test]
fn test_drawing_start_clears_selection() {
    let (mut engine, ids) = engine_with(Tool::Shape(ShapeKind::Box), &[PercentRect::new(60.0, 60.0, 10.0, 10.0)]);
    engine.select([ids[0].clone()]);
    engine.pointer_down(at(100.0, 100.0));
    assert!(engine.selection().is_empty());
    assert!(engine.draft().is_some());
}

#[test]
fn test_no_layout_ignores_primary_gestures() {
    let (mut engine, _) = engine_with(Tool::Shape(ShapeKind::Box), &[]);
    engine.set_container(Some(ContainerBounds::new(0.0, 0.0, 0.0, 0.0)));
    drag(&mut engine, (100.0, 100.0), (300.0, 300.0));
    assert!(engine.shapes().is_empty());
    assert!(engine.interaction().is_none());
}

#[test]
fn test_shape_outline_follows_kind() {
    let (mut engine, _) = engine_with(Tool::Shape(ShapeKind::Cloud), &[]);
    drag(&mut engine, (100.0, 100.0), (300.0, 200.0));
    let id = engine.shapes()[0].id.clone();
    match engine.shape_outline(&id).unwrap() {
        Outline::Cloud { origin, path } => {
            assert!(approx_eq(origin.x, 100.0));
            assert!(approx_eq(origin.y, 100.0));
            assert_eq!(path.arc_count(), 6);
        }
        other => panic!("expected cloud outline, got {other:?}"),
    }
}

#[test]
fn test_right_button_is_ignored() {
    let (mut engine, _) = engine_with(Tool::Shape(ShapeKind::Box), &[]);
    engine.pointer_down(at(100.0, 100.0).with_button(crate::event::MouseButton::Right));
    assert!(engine.interaction().is_none());
}
