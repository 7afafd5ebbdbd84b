//! Ordered set of selected shape ids.
//!
//! Order matters: the last selected shape anchors the toolbar of a
//! multi-selection.

use serde::Serialize;

use crate::model::ShapeId;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Selection {
    ids: Vec<ShapeId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &ShapeId) -> bool {
        self.ids.contains(id)
    }

    /// Replace the selection with a single shape.
    pub fn replace(&mut self, id: ShapeId) {
        self.ids.clear();
        self.ids.push(id);
    }

    /// Replace the selection with `ids`, dropping duplicates.
    pub fn set(&mut self, ids: impl IntoIterator<Item = ShapeId>) {
        self.ids.clear();
        for id in ids {
            if !self.ids.contains(&id) {
                self.ids.push(id);
            }
        }
    }

    /// Add or remove a shape.
    pub fn toggle(&mut self, id: ShapeId) {
        if let Some(index) = self.ids.iter().position(|i| *i == id) {
            self.ids.remove(index);
        } else {
            self.ids.push(id);
        }
    }

    /// Apply a primary click on a shape.
    ///
    /// Shift toggles membership. Without shift, clicking a shape that is
    /// already selected keeps the whole selection so it can be dragged;
    /// clicking any other shape selects it alone.
    pub fn click(&mut self, id: ShapeId, shift: bool) {
        if shift {
            self.toggle(id);
        } else if !self.contains(&id) {
            self.replace(id);
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drop ids for which `keep` returns false. Returns whether anything changed.
    pub fn retain(&mut self, mut keep: impl FnMut(&ShapeId) -> bool) -> bool {
        let before = self.ids.len();
        self.ids.retain(|id| keep(id));
        before != self.ids.len()
    }

    /// Most recently selected shape.
    pub fn last(&self) -> Option<&ShapeId> {
        self.ids.last()
    }

    /// The selected shape, when exactly one is selected.
    pub fn single(&self) -> Option<&ShapeId> {
        match self.ids.as_slice() {
            [id] => Some(id),
            _ => None,
        }
    }

    pub fn is_multi(&self) -> bool {
        self.ids.len() > 1
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShapeId> {
        self.ids.iter()
    }

    pub fn to_vec(&self) -> Vec<ShapeId> {
        self.ids.clone()
    }
}
