//! Pointer and wheel handling: the gesture state machine.

use planmark_geometry::{PercentPoint, PercentRect, ScreenPoint};

use crate::event::{MouseButton, PointerEvent, WheelEvent};
use crate::interaction::{apply_resize, moved_positions, Interaction};
use crate::model::{ShapeKind, Tool};

use super::{AnnotationEngine, EngineRequest};

impl AnnotationEngine {
    /// Client pixels to percentage space under the current viewport.
    pub(super) fn to_percent(&self, client: ScreenPoint) -> Option<PercentPoint> {
        self.viewport.to_image_percent(client, self.container.as_ref())
    }

    /// Pointer pressed over the canvas.
    ///
    /// Rejected without any state change while another gesture (or a pin
    /// drag) is active.
    pub fn pointer_down(&mut self, event: PointerEvent) {
        if !self.interaction.is_none() || self.dragging_pin.is_some() {
            log::trace!("Ignoring pointer-down during {} gesture", self.interaction.name());
            return;
        }

        self.press.latch(event.position);

        if event.button == MouseButton::Middle {
            self.start_panning(event.position);
            return;
        }
        if !event.button.is_primary() {
            return;
        }

        if let Some((shape_id, handle)) = self.handle_at(event.position) {
            let Some(start) = self.to_percent(event.position) else {
                return;
            };
            let Some(initial) = self.store.shape(&shape_id).map(|s| s.bounds) else {
                return;
            };
            log::debug!("Resize start on shape {} via {:?}", shape_id, handle);
            self.link_menu = None;
            self.interaction = Interaction::Resizing {
                start,
                shape_id,
                initial,
                handle,
            };
            self.mark_dirty();
            return;
        }

        if let Some(pin_id) = self.pin_at(event.position) {
            if self.tool == Tool::Select {
                log::debug!("Pin drag start on {}", pin_id);
                self.dragging_pin = Some(pin_id.clone());
                self.mark_dirty();
            }
            self.pressed_pin = Some(pin_id);
            return;
        }

        let Some(point) = self.to_percent(event.position) else {
            log::debug!("Ignoring pointer-down: container has no layout");
            return;
        };

        match self.tool {
            Tool::Select => self.press_with_select(point, event),
            Tool::Shape(kind) => self.press_with_shape(point, kind),
            Tool::Pin(_) => {}
        }
    }

    fn start_panning(&mut self, start: ScreenPoint) {
        log::debug!("Pan start at ({:.1}, {:.1})", start.x, start.y);
        self.interaction = Interaction::Panning {
            start,
            initial: self.viewport,
        };
        self.mark_dirty();
    }

    fn press_with_select(&mut self, point: PercentPoint, event: PointerEvent) {
        self.link_menu = None;

        if let Some(hit) = self.store.hit_test(point).cloned() {
            self.selection.click(hit, event.modifiers.shift);
            let initial: Vec<_> = self
                .selection
                .iter()
                .filter_map(|id| self.store.shape(id).map(|s| (id.clone(), s.bounds)))
                .collect();
            log::debug!("Move start with {} shapes", initial.len());
            self.interaction = Interaction::Moving { start: point, initial };
        } else if self.viewport.scale > 1.0 {
            self.start_panning(event.position);
        } else {
            log::debug!("Marquee start at ({:.2}, {:.2})", point.x, point.y);
            self.selection.clear();
            self.interaction = Interaction::start_marquee(point);
        }
        self.mark_dirty();
    }

    fn press_with_shape(&mut self, point: PercentPoint, kind: ShapeKind) {
        if let Some(hit) = self.store.hit_test(point).cloned() {
            let Some(bounds) = self.store.shape(&hit).map(|s| s.bounds) else {
                return;
            };
            log::debug!("Move start on shape {}", hit);
            self.selection.replace(hit.clone());
            self.interaction = Interaction::Moving {
                start: point,
                initial: vec![(hit, bounds)],
            };
        } else {
            log::debug!("{} draw start at ({:.2}, {:.2})", kind.name(), point.x, point.y);
            self.edit_panel = None;
            self.link_menu = None;
            self.selection.clear();
            self.interaction = Interaction::start_drawing(point, kind);
        }
        self.mark_dirty();
    }

    /// Pointer moved over the canvas.
    pub fn pointer_move(&mut self, event: PointerEvent) {
        let point = self.to_percent(event.position);

        if let Some(pin_id) = &self.dragging_pin {
            if let Some(point) = point {
                log::trace!("Pin {} -> ({:.2}, {:.2})", pin_id, point.x, point.y);
                self.store.move_pin(pin_id, point);
            }
            return;
        }

        match &mut self.interaction {
            Interaction::None => {
                let hovered = if self.tool.tracks_hover() {
                    point.and_then(|p| self.store.hit_test(p)).cloned()
                } else {
                    None
                };
                if hovered != self.hovered {
                    self.hovered = hovered;
                    self.dirty = true;
                }
            }
            Interaction::Panning { start, initial } => {
                let (dx, dy) = event.position.delta_from(*start);
                self.viewport = initial.pan_by(dx, dy);
                self.dirty = true;
            }
            Interaction::Drawing { start, draft, .. } => {
                let Some(point) = point else { return };
                *draft = PercentRect::from_drag(*start, point);
                self.dirty = true;
            }
            Interaction::Marquee { start, rect } => {
                let Some(point) = point else { return };
                *rect = PercentRect::from_drag(*start, point);
                self.dirty = true;
            }
            Interaction::Moving { start, initial } => {
                let Some(point) = point else { return };
                let (dx, dy) = point.delta_from(*start);
                for (id, rect) in moved_positions(initial, dx, dy) {
                    self.store.set_shape_bounds(id, rect);
                }
            }
            Interaction::Resizing {
                start,
                shape_id,
                initial,
                handle,
            } => {
                let Some(point) = point else { return };
                let (dx, dy) = point.delta_from(*start);
                let rect = apply_resize(initial, *handle, dx, dy);
                log::trace!("Resize {} -> {:?}", shape_id, rect);
                self.store.set_shape_bounds(shape_id, rect);
            }
        }
    }

    /// Pointer released. Commits the active gesture.
    pub fn pointer_up(&mut self, event: PointerEvent) -> Option<EngineRequest> {
        self.finish_gesture(Some(event.position))
    }

    /// Pointer left the canvas.
    ///
    /// An active gesture goes through its normal commit, as if released
    /// where it was last moved; a leave is never a click.
    pub fn pointer_leave(&mut self) {
        if self.hovered.take().is_some() {
            self.mark_dirty();
        }
        if !self.interaction.is_none() || self.dragging_pin.is_some() || self.pressed_pin.is_some() {
            self.finish_gesture(None);
        } else {
            self.press.clear();
        }
    }

    fn finish_gesture(&mut self, at: Option<ScreenPoint>) -> Option<EngineRequest> {
        let is_click = self.press.release(at, self.config.click_threshold_px);
        let pressed_pin = self.pressed_pin.take();

        if let Some(pin_id) = self.dragging_pin.take() {
            log::debug!("Pin drag end on {}", pin_id);
            self.mark_dirty();
        }
        if let Some(pin_id) = pressed_pin {
            if !is_click {
                return None;
            }
            log::debug!("Pin {} clicked", pin_id);
            self.selection.clear();
            self.mark_dirty();
            return Some(EngineRequest::OpenPinDetails { pin_id });
        }

        let interaction = std::mem::take(&mut self.interaction);
        if !interaction.is_none() {
            self.mark_dirty();
        }

        match interaction {
            Interaction::None => {
                if let (Tool::Pin(kind), true) = (self.tool, is_click) {
                    let at = self.to_percent(at?)?;
                    log::debug!("{} pin placement requested at ({:.2}, {:.2})", kind.name(), at.x, at.y);
                    return Some(EngineRequest::PlacePin { kind, at });
                }
            }
            Interaction::Drawing { kind, draft, .. } => self.commit_draft(kind, draft),
            Interaction::Marquee { rect, .. } => {
                let hits = self.store.intersecting(&rect);
                log::debug!("Marquee selected {} shapes", hits.len());
                self.selection.set(hits);
            }
            Interaction::Resizing { shape_id, .. } => {
                self.store.normalize_shape(&shape_id);
                log::debug!("Resize end on shape {}", shape_id);
            }
            Interaction::Moving { initial, .. } => {
                log::debug!("Move end with {} shapes", initial.len());
            }
            Interaction::Panning { .. } => {
                log::debug!(
                    "Pan end at translate ({:.1}, {:.1})",
                    self.viewport.translate_x,
                    self.viewport.translate_y
                );
            }
        }
        None
    }

    fn commit_draft(&mut self, kind: ShapeKind, draft: PercentRect) {
        let rect = draft.normalized();
        let min = self.config.min_commit_size;
        if rect.width > min && rect.height > min {
            let id = self.store.add_shape(kind, rect);
            log::debug!(
                "Committed {} {} at ({:.2}, {:.2}) size {:.2}x{:.2}",
                kind.name(),
                id,
                rect.x,
                rect.y,
                rect.width,
                rect.height
            );
            self.selection.replace(id);
        } else {
            log::debug!("Discarded {:.2}x{:.2} draft below minimum size", rect.width, rect.height);
        }
    }

    /// Mouse wheel over the canvas: zoom anchored at the cursor.
    pub fn wheel(&mut self, event: WheelEvent) {
        let Some(container) = self.container.filter(|c| c.has_layout()) else {
            return;
        };
        let anchor = container.to_local(event.position);
        let next = self
            .viewport
            .wheel_zoom(event.delta_y, self.config.wheel_zoom_speed, anchor, &self.limits);
        log::trace!("Wheel zoom {:.3} -> {:.3}", self.viewport.scale, next.scale);
        self.set_viewport(next);
    }
}
