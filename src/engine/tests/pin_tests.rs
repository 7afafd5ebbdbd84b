use planmark_geometry::{PercentPoint, PercentRect, Viewport};

use super::*;
use crate::image::ImagePayload;
use crate::interaction::Interaction;
use crate::model::{PinKind, RecordKind, ShapeKind, Tool};

#[test]
fn test_pin_tool_click_requests_placement() {
    let (mut engine, _) = engine_with(Tool::Pin(PinKind::Safety), &[]);
    let request = click(&mut engine, 300.0, 400.0);
    match request {
        Some(EngineRequest::PlacePin { kind, at }) => {
            assert_eq!(kind, PinKind::Safety);
            assert!(approx_eq(at.x, 30.0));
            assert!(approx_eq(at.y, 40.0));
        }
        other => panic!("expected placement request, got {other:?}"),
    }
    assert!(engine.pins().is_empty());

    let id = engine.create_pin(PinKind::Safety, PercentPoint::new(30.0, 40.0), "SAFE-12");
    let point = engine.screen_point(&id).unwrap();
    assert!(approx_eq(point.x, 300.0));
    assert!(approx_eq(point.y, 400.0));
}

#[test]
fn test_pin_tool_drag_is_not_a_click() {
    let (mut engine, _) = engine_with(Tool::Pin(PinKind::Photo), &[]);
    assert!(drag(&mut engine, (300.0, 300.0), (310.0, 300.0)).is_none());
    assert!(engine.interaction().is_none());
}

#[test]
fn test_click_on_pin_opens_details_instead_of_placing() {
    let (mut engine, _) = engine_with(Tool::Pin(PinKind::Photo), &[]);
    let id = engine.create_pin(PinKind::Photo, PercentPoint::new(50.0, 50.0), "PHOTO-3");
    let request = click(&mut engine, 500.0, 480.0);
    assert_eq!(request, Some(EngineRequest::OpenPinDetails { pin_id: id }));
    assert_eq!(engine.pins().len(), 1);
}

#[test]
fn test_select_tool_drags_pin() {
    let (mut engine, ids) = engine_with(Tool::Select, &[PercentRect::new(0.0, 0.0, 10.0, 10.0)]);
    engine.select([ids[0].clone()]);
    let id = engine.create_pin(PinKind::Punch, PercentPoint::new(50.0, 50.0), "PUNCH-1");

    engine.pointer_down(at(500.0, 490.0));
    assert_eq!(engine.dragging_pin(), Some(&id));
    assert_eq!(engine.cursor(), crate::cursor::CursorStyle::Grabbing);

    engine.pointer_move(at(600.0, 590.0));
    let pin = engine.store().pin(&id).unwrap();
    assert!(approx_eq(pin.position.x, 60.0));
    assert!(approx_eq(pin.position.y, 59.0));

    assert!(engine.pointer_up(at(600.0, 590.0)).is_none());
    assert!(engine.dragging_pin().is_none());
    assert!(engine.interaction().is_none());
    assert_eq!(engine.selection().to_vec(), vec![ids[0].clone()]);
}

#[test]
fn test_pin_drag_preempts_other_gestures() {
    let (mut engine, _) = engine_with(Tool::Select, &[]);
    let id = engine.create_pin(PinKind::Punch, PercentPoint::new(50.0, 50.0), "PUNCH-1");
    engine.pointer_down(at(500.0, 490.0));

    engine.pointer_down(middle_at(100.0, 100.0));
    assert!(engine.interaction().is_none());
    assert_eq!(engine.dragging_pin(), Some(&id));

    engine.pointer_move(at(200.0, 200.0));
    assert!(engine.viewport().is_identity());
}

#[test]
fn test_select_tool_click_on_pin_clears_selection() {
    let (mut engine, ids) = engine_with(Tool::Select, &[PercentRect::new(0.0, 0.0, 10.0, 10.0)]);
    engine.select([ids[0].clone()]);
    let id = engine.create_pin(PinKind::Photo, PercentPoint::new(50.0, 50.0), "PHOTO-1");

    let request = click(&mut engine, 502.0, 470.0);
    assert_eq!(request, Some(EngineRequest::OpenPinDetails { pin_id: id }));
    assert!(engine.selection().is_empty());
    assert!(engine.dragging_pin().is_none());
}

#[test]
fn test_pin_press_never_starts_shape_gesture() {
    let (mut engine, _) = engine_with(Tool::Shape(ShapeKind::Box), &[PercentRect::new(40.0, 40.0, 20.0, 20.0)]);
    engine.create_pin(PinKind::Safety, PercentPoint::new(50.0, 50.0), "SAFE-1");

    engine.pointer_down(at(500.0, 490.0));
    assert!(engine.interaction().is_none());
    assert!(engine.dragging_pin().is_none());
    engine.pointer_move(at(700.0, 700.0));
    engine.pointer_up(at(700.0, 700.0));

    assert_eq!(engine.shapes().len(), 1);
    assert!(approx_rect(engine.shapes()[0].bounds, PercentRect::new(40.0, 40.0, 20.0, 20.0)));
}

#[test]
fn test_topmost_pin_wins() {
    let (mut engine, _) = engine_with(Tool::Pin(PinKind::Photo), &[]);
    engine.create_pin(PinKind::Photo, PercentPoint::new(50.0, 50.0), "PHOTO-1");
    let top = engine.create_pin(PinKind::Photo, PercentPoint::new(51.0, 50.0), "PHOTO-2");
    let request = click(&mut engine, 505.0, 480.0);
    assert_eq!(request, Some(EngineRequest::OpenPinDetails { pin_id: top }));
}

#[test]
fn test_pointer_leave_ends_pin_drag() {
    let (mut engine, _) = engine_with(Tool::Select, &[]);
    let id = engine.create_pin(PinKind::Photo, PercentPoint::new(50.0, 50.0), "PHOTO-1");
    engine.pointer_down(at(500.0, 490.0));
    engine.pointer_move(at(520.0, 500.0));
    engine.pointer_leave();
    assert!(engine.dragging_pin().is_none());
    assert!(engine.store().pin(&id).is_some());
}

#[test]
fn test_delete_pin_only_removes_that_pin() {
    let (mut engine, ids) = engine_with(Tool::Select, &[PercentRect::new(0.0, 0.0, 10.0, 10.0)]);
    engine.select([ids[0].clone()]);
    let a = engine.create_pin(PinKind::Photo, PercentPoint::new(50.0, 50.0), "PHOTO-1");
    let b = engine.create_pin(PinKind::Safety, PercentPoint::new(70.0, 70.0), "SAFE-1");
    assert!(engine.open_edit_panel(RecordKind::Safety, crate::engine::PanelTarget::Pin(a.clone())));

    assert!(engine.delete_pin(&a));
    assert!(!engine.delete_pin(&a));
    assert_eq!(engine.pins().len(), 1);
    assert_eq!(engine.pins()[0].id, b);
    assert_eq!(engine.shapes().len(), 1);
    assert_eq!(engine.selection().len(), 1);
    assert!(engine.edit_panel().is_none());
}

#[test]
fn test_clear_all() {
    let (mut engine, ids) = engine_with(Tool::Select, &[PercentRect::new(0.0, 0.0, 10.0, 10.0)]);
    engine.select([ids[0].clone()]);
    engine.create_pin(PinKind::Photo, PercentPoint::new(50.0, 50.0), "PHOTO-1");
    engine.clear_all();
    assert!(engine.shapes().is_empty());
    assert!(engine.pins().is_empty());
    assert!(engine.selection().is_empty());
}

#[test]
fn test_load_image_resets_state() {
    let (mut engine, ids) = engine_with(Tool::Select, &[PercentRect::new(0.0, 0.0, 10.0, 10.0)]);
    engine.select([ids[0].clone()]);
    engine.create_pin(PinKind::Photo, PercentPoint::new(50.0, 50.0), "PHOTO-1");
    engine.viewport = Viewport::new(2.0, 10.0, 10.0);
    engine.pointer_down(at(900.0, 900.0));
    assert!(!engine.interaction().is_none());

    let payload = ImagePayload::from_data_uri("data:image/jpeg;base64,/9j/4AAQ").unwrap();
    engine.load_image(payload);

    assert!(engine.shapes().is_empty());
    assert!(engine.pins().is_empty());
    assert!(engine.selection().is_empty());
    assert!(engine.hovered_shape().is_none());
    assert!(matches!(engine.interaction(), Interaction::None));
    assert!(engine.viewport().is_identity());
    assert_eq!(engine.image().unwrap().media_type(), "image/jpeg");
    assert_eq!(engine.tool(), Tool::Select);
}

#[test]
fn test_dirty_flag_tracks_changes() {
    let (mut engine, _) = engine_with(Tool::Shape(ShapeKind::Box), &[]);
    assert!(engine.is_dirty());
    engine.clear_dirty();
    assert!(!engine.is_dirty());

    // Hovering empty canvas changes nothing
    engine.pointer_move(at(100.0, 100.0));
    assert!(!engine.is_dirty());

    drag(&mut engine, (100.0, 100.0), (300.0, 300.0));
    assert!(engine.is_dirty());
}
