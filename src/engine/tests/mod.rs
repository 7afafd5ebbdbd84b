//! Scenario tests for the annotation engine.
//!
//! The container is 1000x1000 px at the client origin, so at scale 1 one
//! percent is ten pixels.

mod gesture_tests;
mod pin_tests;

use planmark_geometry::{ContainerBounds, PercentRect};

use crate::config::EngineConfig;
use crate::event::{Modifiers, MouseButton, PointerEvent};
use crate::model::{ShapeId, ShapeKind, Tool};

use super::{AnnotationEngine, EngineRequest};

pub(super) const EPSILON: f32 = 0.001;

pub(super) fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

pub(super) fn approx_rect(a: PercentRect, b: PercentRect) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.width, b.width) && approx_eq(a.height, b.height)
}

/// Engine with a mounted 1000x1000 container.
pub(super) fn engine() -> AnnotationEngine {
    let mut engine = AnnotationEngine::new(EngineConfig::default());
    engine.set_container(Some(ContainerBounds::new(0.0, 0.0, 1000.0, 1000.0)));
    engine
}

/// Engine with the given tool and shapes already committed.
pub(super) fn engine_with(tool: Tool, shapes: &[PercentRect]) -> (AnnotationEngine, Vec<ShapeId>) {
    let mut engine = engine();
    engine.set_tool(tool);
    let ids = shapes
        .iter()
        .map(|rect| engine.store.add_shape(ShapeKind::Box, *rect))
        .collect();
    (engine, ids)
}

pub(super) fn at(x: f32, y: f32) -> PointerEvent {
    PointerEvent::primary(x, y)
}

pub(super) fn shift_at(x: f32, y: f32) -> PointerEvent {
    PointerEvent::primary(x, y).with_modifiers(Modifiers::shift())
}

pub(super) fn middle_at(x: f32, y: f32) -> PointerEvent {
    PointerEvent::primary(x, y).with_button(MouseButton::Middle)
}

/// Press at `from`, move to `to`, release at `to`.
pub(super) fn drag(engine: &mut AnnotationEngine, from: (f32, f32), to: (f32, f32)) -> Option<EngineRequest> {
    engine.pointer_down(at(from.0, from.1));
    engine.pointer_move(at(to.0, to.1));
    engine.pointer_up(at(to.0, to.1))
}

/// Press and release at the same point.
pub(super) fn click(engine: &mut AnnotationEngine, x: f32, y: f32) -> Option<EngineRequest> {
    engine.pointer_down(at(x, y));
    engine.pointer_up(at(x, y))
}
