//! Render queries and screen-space hit-testing.
//!
//! All screen results are container-local pixels.

use planmark_geometry::{PercentRect, ScreenPoint, ScreenRect};

use crate::interaction::{Interaction, ResizeHandle};
use crate::model::{pin_marker_rect, Outline, PinId, ShapeId, ShapeKind};

use super::AnnotationEngine;

impl AnnotationEngine {
    /// Screen box of a shape, or `None` if it does not exist.
    ///
    /// Returns a zero rect while the container has no layout.
    pub fn screen_rect(&self, id: &ShapeId) -> Option<ScreenRect> {
        let shape = self.store.shape(id)?;
        Some(self.viewport.to_screen_rect(&shape.bounds, self.container.as_ref()))
    }

    /// Screen position of a pin's anchor point.
    pub fn screen_point(&self, id: &PinId) -> Option<ScreenPoint> {
        let pin = self.store.pin(id)?;
        self.viewport.to_screen_point(pin.position, self.container.as_ref())
    }

    /// Marker box of a pin, anchored bottom-centre on its point.
    pub fn pin_marker(&self, id: &PinId) -> Option<ScreenRect> {
        let anchor = self.screen_point(id)?;
        Some(pin_marker_rect(
            anchor,
            self.config.pin_hit_width_px,
            self.config.pin_hit_height_px,
        ))
    }

    /// Outline to draw for a shape.
    pub fn shape_outline(&self, id: &ShapeId) -> Option<Outline> {
        let shape = self.store.shape(id)?;
        let rect = self.viewport.to_screen_rect(&shape.bounds.normalized(), self.container.as_ref());
        Some(shape.kind.outline(rect))
    }

    /// Normalized ghost of the shape being drawn.
    pub fn draft(&self) -> Option<(ShapeKind, PercentRect)> {
        match &self.interaction {
            Interaction::Drawing { kind, draft, .. } => Some((*kind, draft.normalized())),
            _ => None,
        }
    }

    /// Outline of the shape being drawn, in screen pixels.
    pub fn draft_outline(&self) -> Option<Outline> {
        let (kind, rect) = self.draft()?;
        Some(kind.outline(self.viewport.to_screen_rect(&rect, self.container.as_ref())))
    }

    /// Normalized marquee rectangle while a marquee is dragged.
    pub fn marquee(&self) -> Option<PercentRect> {
        match &self.interaction {
            Interaction::Marquee { rect, .. } => Some(rect.normalized()),
            _ => None,
        }
    }

    /// Hit boxes of the resize handles.
    ///
    /// Only a single selection gets handles.
    pub fn resize_handles(&self) -> Vec<(ResizeHandle, ScreenRect)> {
        let Some(container) = self.container.as_ref().filter(|c| c.has_layout()) else {
            return Vec::new();
        };
        let Some(shape) = self.selection.single().and_then(|id| self.store.shape(id)) else {
            return Vec::new();
        };
        let size = self.config.handle_hit_size_px;
        ResizeHandle::all()
            .into_iter()
            .filter_map(|handle| {
                let corner = handle.corner_of(&shape.bounds);
                let center = self.viewport.to_screen_point(corner, Some(container))?;
                Some((handle, ScreenRect::centered_square(center, size)))
            })
            .collect()
    }

    /// Where to anchor the selection toolbar: the single selected shape, or
    /// the last-selected one of a multi-selection.
    pub fn selection_anchor(&self) -> Option<ScreenRect> {
        let id = self.selection.last()?;
        self.screen_rect(id)
    }

    /// Resize handle under a client point.
    pub(super) fn handle_at(&self, client: ScreenPoint) -> Option<(ShapeId, ResizeHandle)> {
        let container = self.container.filter(|c| c.has_layout())?;
        let shape_id = self.selection.single()?;
        let local = container.to_local(client);
        self.resize_handles()
            .into_iter()
            .find(|(_, rect)| rect.contains(local))
            .map(|(handle, _)| (shape_id.clone(), handle))
    }

    /// Topmost pin whose marker contains a client point.
    pub(super) fn pin_at(&self, client: ScreenPoint) -> Option<PinId> {
        let container = self.container.filter(|c| c.has_layout())?;
        let local = container.to_local(client);
        self.store
            .pins()
            .iter()
            .rev()
            .find(|pin| self.pin_marker(&pin.id).is_some_and(|marker| marker.contains(local)))
            .map(|pin| pin.id.clone())
    }
}
