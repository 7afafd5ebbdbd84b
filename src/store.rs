//! Shape and pin storage for the current image.
//!
//! Shapes are kept in z-order (first drawn first). The store is the single
//! source of truth for committed geometry; gestures write through it.

use planmark_geometry::{hit_test, intersecting, PercentPoint, PercentRect};

use crate::model::{LinkedRecord, Pin, PinId, PinKind, RfiData, Shape, ShapeId, ShapeKind};

/// Storage for the annotations on a single image.
#[derive(Debug, Clone)]
pub struct AnnotationStore {
    /// Shapes in z-order.
    shapes: Vec<Shape>,
    /// Pins in creation order.
    pins: Vec<Pin>,
    /// Counter for generating unique shape ids.
    next_shape_id: u64,
    /// Counter for generating unique pin ids.
    next_pin_id: u64,
    /// Set when shapes or pins change.
    dirty: bool,
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            pins: Vec::new(),
            next_shape_id: 1,
            next_pin_id: 1,
            dirty: true,
        }
    }

    /// Check if the store has been modified since last clear_dirty().
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[inline]
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    #[inline]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    // ========================================================================
    // Shapes
    // ========================================================================

    /// Append a shape on top of the z-order and return its id.
    ///
    /// The bounds are normalized before storing.
    pub fn add_shape(&mut self, kind: ShapeKind, bounds: PercentRect) -> ShapeId {
        let id = ShapeId::new(format!("shape-{}", self.next_shape_id));
        self.next_shape_id += 1;
        self.shapes.push(Shape::new(id.clone(), kind, bounds.normalized()));
        self.mark_dirty();
        id
    }

    pub fn shape(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| &s.id == id)
    }

    pub fn shape_mut(&mut self, id: &ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| &s.id == id)
    }

    /// All shapes in z-order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn contains_shape(&self, id: &ShapeId) -> bool {
        self.shape(id).is_some()
    }

    /// Overwrite a shape's bounds without normalizing.
    ///
    /// Used during gestures, where extents may be transiently negative.
    /// Returns `false` if the shape no longer exists.
    pub fn set_shape_bounds(&mut self, id: &ShapeId, bounds: PercentRect) -> bool {
        let Some(shape) = self.shape_mut(id) else {
            return false;
        };
        if shape.bounds != bounds {
            shape.bounds = bounds;
            self.mark_dirty();
        }
        true
    }

    /// Normalize a shape's bounds in place.
    pub fn normalize_shape(&mut self, id: &ShapeId) -> bool {
        let Some(shape) = self.shape_mut(id) else {
            return false;
        };
        let normalized = shape.bounds.normalized();
        if shape.bounds != normalized {
            shape.bounds = normalized;
            self.mark_dirty();
        }
        true
    }

    /// Remove a shape by id.
    pub fn remove_shape(&mut self, id: &ShapeId) -> Option<Shape> {
        let index = self.shapes.iter().position(|s| &s.id == id)?;
        self.mark_dirty();
        Some(self.shapes.remove(index))
    }

    /// Remove every shape whose id is in `ids`. Returns how many were removed.
    pub fn remove_shapes(&mut self, ids: &[ShapeId]) -> usize {
        let before = self.shapes.len();
        self.shapes.retain(|s| !ids.contains(&s.id));
        let removed = before - self.shapes.len();
        if removed > 0 {
            self.mark_dirty();
        }
        removed
    }

    /// Topmost shape containing `point`.
    pub fn hit_test(&self, point: PercentPoint) -> Option<&ShapeId> {
        hit_test(point, &self.shapes).map(|s| &s.id)
    }

    /// Ids of shapes overlapping `area`, in z-order.
    pub fn intersecting(&self, area: &PercentRect) -> Vec<ShapeId> {
        intersecting(area, &self.shapes).map(|s| s.id.clone()).collect()
    }

    // ========================================================================
    // Linked records
    // ========================================================================

    /// Attach a record to a shape, ignoring duplicates by id.
    ///
    /// Returns `false` if the shape does not exist or the record is already
    /// linked.
    pub fn attach_record(&mut self, shape_id: &ShapeId, record: LinkedRecord) -> bool {
        let Some(shape) = self.shape_mut(shape_id) else {
            return false;
        };
        let attached = shape.links.attach(record);
        if attached {
            self.mark_dirty();
        }
        attached
    }

    /// Replace an RFI already linked to a shape.
    pub fn update_rfi(&mut self, shape_id: &ShapeId, rfi: RfiData) -> bool {
        let Some(shape) = self.shape_mut(shape_id) else {
            return false;
        };
        let updated = shape.links.update_rfi(rfi);
        if updated {
            self.mark_dirty();
        }
        updated
    }

    /// Number for the next RFI: one more than the largest linked RFI id.
    pub fn next_rfi_id(&self) -> u32 {
        self.shapes
            .iter()
            .flat_map(|s| s.links.rfis.iter())
            .map(|rfi| rfi.id)
            .max()
            .map_or(1, |max| max + 1)
    }

    // ========================================================================
    // Pins
    // ========================================================================

    /// Create a pin and return its id.
    pub fn add_pin(&mut self, kind: PinKind, position: PercentPoint, linked_id: impl Into<String>) -> PinId {
        let id = PinId::new(format!("pin-{}", self.next_pin_id));
        self.next_pin_id += 1;
        self.pins.push(Pin::new(id.clone(), kind, position, linked_id));
        self.mark_dirty();
        id
    }

    pub fn pin(&self, id: &PinId) -> Option<&Pin> {
        self.pins.iter().find(|p| &p.id == id)
    }

    /// All pins in creation order.
    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    /// Move a pin. Returns `false` if it no longer exists.
    pub fn move_pin(&mut self, id: &PinId, position: PercentPoint) -> bool {
        let Some(pin) = self.pins.iter_mut().find(|p| &p.id == id) else {
            return false;
        };
        if pin.position != position {
            pin.position = position;
            self.mark_dirty();
        }
        true
    }

    pub fn remove_pin(&mut self, id: &PinId) -> Option<Pin> {
        let index = self.pins.iter().position(|p| &p.id == id)?;
        self.mark_dirty();
        Some(self.pins.remove(index))
    }

    // ========================================================================
    // Bulk
    // ========================================================================

    /// Remove all shapes and pins.
    pub fn clear(&mut self) {
        if !self.is_empty() {
            self.mark_dirty();
        }
        self.shapes.clear();
        self.pins.clear();
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn pin_count(&self) -> usize {
        self.pins.len()
    }

    /// Whether there are no shapes and no pins.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty() && self.pins.is_empty()
    }
}

impl Default for AnnotationStore {
    fn default() -> Self {
        Self::new()
    }
}
