//! The annotation engine: store, selection, viewport and the active gesture
//! wired together behind one observable state container.
//!
//! The rendering layer feeds pointer and wheel events in, reads state and
//! render queries out, and redraws when [`AnnotationEngine::is_dirty`] is set.

mod pointer;
mod view;

#[cfg(test)]
mod tests;

use serde::Serialize;

use planmark_geometry::{ContainerBounds, PercentPoint, ScreenPoint, Viewport, ZoomLimits};

use crate::config::EngineConfig;
use crate::cursor::{cursor_for, CursorContext, CursorStyle};
use crate::image::ImagePayload;
use crate::interaction::{Interaction, PressLatch};
use crate::model::{LinkedRecord, Pin, PinId, PinKind, RecordKind, RfiData, Shape, ShapeId, Tool};
use crate::selection::Selection;
use crate::store::AnnotationStore;

/// Something the engine asks a collaborator to do after a gesture.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "request", rename_all = "snake_case")]
pub enum EngineRequest {
    /// A pin was clicked; show its linked record.
    OpenPinDetails { pin_id: PinId },
    /// The pin tool clicked empty canvas; pick or create a record, then
    /// call [`AnnotationEngine::create_pin`].
    PlacePin { kind: PinKind, at: PercentPoint },
}

/// What an edit panel is editing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "target", content = "id", rename_all = "snake_case")]
pub enum PanelTarget {
    Shape(ShapeId),
    Pin(PinId),
    /// A pin that does not exist yet, to be placed at this point.
    Location(PercentPoint),
}

/// The single record-editing side panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditPanel {
    pub kind: RecordKind,
    pub target: PanelTarget,
}

/// Interactive annotation state for one image.
#[derive(Debug)]
pub struct AnnotationEngine {
    config: EngineConfig,
    limits: ZoomLimits,
    store: AnnotationStore,
    selection: Selection,
    viewport: Viewport,
    interaction: Interaction,
    /// Pin being dragged; pre-empts `interaction` while set.
    dragging_pin: Option<PinId>,
    /// Pin under the last pointer-down, for click detection.
    pressed_pin: Option<PinId>,
    press: PressLatch,
    container: Option<ContainerBounds>,
    tool: Tool,
    hovered: Option<ShapeId>,
    link_menu: Option<ShapeId>,
    edit_panel: Option<EditPanel>,
    image: Option<ImagePayload>,
    /// Set when selection, viewport, gesture or UI state changes.
    dirty: bool,
}

impl AnnotationEngine {
    /// Create an engine. Unusable zoom bounds in `config` fall back to the
    /// defaults; see [`EngineConfig::zoom_limits`].
    pub fn new(config: EngineConfig) -> Self {
        if let Err(e) = config.validate() {
            log::warn!("Engine created with invalid configuration: {}", e);
        }
        let limits = config.zoom_limits();
        Self {
            config,
            limits,
            store: AnnotationStore::new(),
            selection: Selection::new(),
            viewport: Viewport::identity(),
            interaction: Interaction::None,
            dragging_pin: None,
            pressed_pin: None,
            press: PressLatch::default(),
            container: None,
            tool: Tool::default(),
            hovered: None,
            link_menu: None,
            edit_panel: None,
            image: None,
            dirty: true,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ========================================================================
    // Change tracking
    // ========================================================================

    /// Whether anything observable changed since the last `clear_dirty()`.
    pub fn is_dirty(&self) -> bool {
        self.dirty || self.store.is_dirty()
    }

    /// Clear the dirty flag. Call after redrawing.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
        self.store.clear_dirty();
    }

    #[inline]
    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    // ========================================================================
    // State reads
    // ========================================================================

    pub fn store(&self) -> &AnnotationStore {
        &self.store
    }

    /// Shapes in z-order.
    pub fn shapes(&self) -> &[Shape] {
        self.store.shapes()
    }

    pub fn pins(&self) -> &[Pin] {
        self.store.pins()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn dragging_pin(&self) -> Option<&PinId> {
        self.dragging_pin.as_ref()
    }

    /// Shape under the cursor while no gesture is active.
    pub fn hovered_shape(&self) -> Option<&ShapeId> {
        self.hovered.as_ref()
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn image(&self) -> Option<&ImagePayload> {
        self.image.as_ref()
    }

    pub fn container(&self) -> Option<&ContainerBounds> {
        self.container.as_ref()
    }

    pub fn cursor(&self) -> CursorStyle {
        cursor_for(CursorContext {
            interaction: &self.interaction,
            dragging_pin: self.dragging_pin.is_some(),
            tool: self.tool,
            hovering_shape: self.hovered.is_some(),
            scale: self.viewport.scale,
        })
    }

    // ========================================================================
    // Setup
    // ========================================================================

    /// Update the container's client-space box. `None` while unmounted.
    pub fn set_container(&mut self, container: Option<ContainerBounds>) {
        if self.container != container {
            self.container = container;
            self.mark_dirty();
        }
    }

    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool == tool {
            return;
        }
        log::debug!("Tool changed: {} -> {}", self.tool.name(), tool.name());
        self.tool = tool;
        if !tool.tracks_hover() {
            self.hovered = None;
        }
        self.mark_dirty();
    }

    /// Swap in a new image and reset everything that belonged to the old one.
    ///
    /// Shapes, pins, selection, hover, menus, the active gesture and the
    /// viewport all return to their initial values.
    pub fn load_image(&mut self, payload: ImagePayload) {
        log::info!(
            "Loading {} image, discarding {} shapes and {} pins",
            payload.media_type(),
            self.store.shape_count(),
            self.store.pin_count()
        );
        self.store.clear();
        self.selection.clear();
        self.hovered = None;
        self.link_menu = None;
        self.edit_panel = None;
        self.interaction = Interaction::None;
        self.dragging_pin = None;
        self.pressed_pin = None;
        self.press.clear();
        self.viewport = Viewport::identity();
        self.image = Some(payload);
        self.mark_dirty();
    }

    // ========================================================================
    // Viewport
    // ========================================================================

    /// Zoom in by the button factor, anchored at the container centre.
    pub fn zoom_in(&mut self) {
        let factor = self.config.button_zoom_factor;
        self.zoom_about_center(|v, anchor, limits| v.zoom_in(factor, anchor, limits));
    }

    /// Zoom out by the button factor, anchored at the container centre.
    pub fn zoom_out(&mut self) {
        let factor = self.config.button_zoom_factor;
        self.zoom_about_center(|v, anchor, limits| v.zoom_out(factor, anchor, limits));
    }

    fn zoom_about_center(&mut self, zoom: impl FnOnce(&Viewport, ScreenPoint, &ZoomLimits) -> Viewport) {
        let Some(container) = self.container.filter(|c| c.has_layout()) else {
            log::debug!("Ignoring zoom: container has no layout");
            return;
        };
        let next = zoom(&self.viewport, container.local_center(), &self.limits);
        self.set_viewport(next);
    }

    /// Restore the identity transform.
    pub fn reset_view(&mut self) {
        log::debug!("Viewport reset");
        self.set_viewport(Viewport::identity());
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        if self.viewport != viewport {
            self.viewport = viewport;
            self.mark_dirty();
        }
    }

    // ========================================================================
    // Selection, menus and panels
    // ========================================================================

    /// Replace the selection, ignoring ids of shapes that do not exist.
    pub fn select(&mut self, ids: impl IntoIterator<Item = ShapeId>) {
        let ids: Vec<ShapeId> = ids.into_iter().filter(|id| self.store.contains_shape(id)).collect();
        self.selection.set(ids);
        self.mark_dirty();
    }

    pub fn clear_selection(&mut self) {
        if !self.selection.is_empty() {
            self.selection.clear();
            self.mark_dirty();
        }
    }

    /// Shape whose link menu is open.
    pub fn link_menu(&self) -> Option<&ShapeId> {
        self.link_menu.as_ref()
    }

    /// Open the link menu for a shape, or close it if it is already open.
    ///
    /// Returns `false` if the shape does not exist.
    pub fn toggle_link_menu(&mut self, shape_id: &ShapeId) -> bool {
        if !self.store.contains_shape(shape_id) {
            return false;
        }
        if self.link_menu.as_ref() == Some(shape_id) {
            self.link_menu = None;
        } else {
            self.link_menu = Some(shape_id.clone());
        }
        self.mark_dirty();
        true
    }

    pub fn close_link_menu(&mut self) {
        if self.link_menu.take().is_some() {
            self.mark_dirty();
        }
    }

    pub fn edit_panel(&self) -> Option<&EditPanel> {
        self.edit_panel.as_ref()
    }

    /// Open the edit panel. Returns `false` if the target does not exist.
    pub fn open_edit_panel(&mut self, kind: RecordKind, target: PanelTarget) -> bool {
        let exists = match &target {
            PanelTarget::Shape(id) => self.store.contains_shape(id),
            PanelTarget::Pin(id) => self.store.pin(id).is_some(),
            PanelTarget::Location(_) => true,
        };
        if !exists {
            log::debug!("Not opening {} panel: target {:?} is gone", kind.name(), target);
            return false;
        }
        self.edit_panel = Some(EditPanel { kind, target });
        self.mark_dirty();
        true
    }

    pub fn close_edit_panel(&mut self) {
        if self.edit_panel.take().is_some() {
            self.mark_dirty();
        }
    }

    // ========================================================================
    // Deletion
    // ========================================================================

    /// Delete every selected shape and clear the selection.
    pub fn delete_selected(&mut self) -> usize {
        let ids = self.selection.to_vec();
        let removed = self.store.remove_shapes(&ids);
        self.selection.clear();
        self.link_menu = None;
        self.forget_missing_shapes();
        log::info!("Deleted {} selected shapes", removed);
        self.mark_dirty();
        removed
    }

    /// Delete one shape, pruning it from the selection.
    pub fn delete_shape(&mut self, id: &ShapeId) -> bool {
        if self.store.remove_shape(id).is_none() {
            return false;
        }
        self.selection.retain(|s| s != id);
        self.forget_missing_shapes();
        log::info!("Deleted shape {}", id);
        self.mark_dirty();
        true
    }

    /// Delete one pin. Shapes and selection are untouched.
    pub fn delete_pin(&mut self, id: &PinId) -> bool {
        if self.store.remove_pin(id).is_none() {
            return false;
        }
        if self.dragging_pin.as_ref() == Some(id) {
            self.dragging_pin = None;
        }
        if self.pressed_pin.as_ref() == Some(id) {
            self.pressed_pin = None;
        }
        if matches!(&self.edit_panel, Some(EditPanel { target: PanelTarget::Pin(p), .. }) if p == id) {
            self.edit_panel = None;
        }
        log::info!("Deleted pin {}", id);
        self.mark_dirty();
        true
    }

    /// Remove all shapes and pins and clear the selection.
    pub fn clear_all(&mut self) {
        log::info!(
            "Clearing {} shapes and {} pins",
            self.store.shape_count(),
            self.store.pin_count()
        );
        self.store.clear();
        self.selection.clear();
        self.hovered = None;
        self.link_menu = None;
        self.edit_panel = None;
        self.dragging_pin = None;
        self.pressed_pin = None;
        self.mark_dirty();
    }

    /// Drop references to shapes that no longer exist.
    fn forget_missing_shapes(&mut self) {
        let store = &self.store;
        self.selection.retain(|id| store.contains_shape(id));
        if self.hovered.as_ref().is_some_and(|id| !store.contains_shape(id)) {
            self.hovered = None;
        }
        if self.link_menu.as_ref().is_some_and(|id| !store.contains_shape(id)) {
            self.link_menu = None;
        }
        if matches!(&self.edit_panel, Some(EditPanel { target: PanelTarget::Shape(id), .. }) if !store.contains_shape(id)) {
            self.edit_panel = None;
        }
    }

    // ========================================================================
    // Record collaborator contract
    // ========================================================================

    /// Create a pin for a record picked after an [`EngineRequest::PlacePin`].
    pub fn create_pin(&mut self, kind: PinKind, at: PercentPoint, linked_id: impl Into<String>) -> PinId {
        let linked_id = linked_id.into();
        let id = self.store.add_pin(kind, at, linked_id.clone());
        log::debug!(
            "Created {} pin {} at ({:.2}, {:.2}) linked to {}",
            kind.name(),
            id,
            at.x,
            at.y,
            linked_id
        );
        id
    }

    /// Link a record to a shape. Duplicates by id are ignored.
    pub fn attach_record(&mut self, shape_id: &ShapeId, record: LinkedRecord) -> bool {
        let kind = record.kind();
        let record_id = record.record_id();
        let attached = self.store.attach_record(shape_id, record);
        if attached {
            log::debug!("Attached {} {} to shape {}", kind.name(), record_id, shape_id);
            self.link_menu = None;
            self.mark_dirty();
        } else {
            log::debug!("Not attaching {} {} to shape {}", kind.name(), record_id, shape_id);
        }
        attached
    }

    /// Replace an RFI already linked to a shape.
    pub fn update_rfi(&mut self, shape_id: &ShapeId, rfi: RfiData) -> bool {
        self.store.update_rfi(shape_id, rfi)
    }

    /// Number for the next RFI across all shapes.
    pub fn next_rfi_id(&self) -> u32 {
        self.store.next_rfi_id()
    }
}

impl Default for AnnotationEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
