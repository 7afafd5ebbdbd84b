//! Rectangle markup on a photo.
//!
//! A reduced drawing gesture in the photo's own percentage space: no zoom,
//! no selection, no move or resize. Markups are created or deleted, and every
//! change hands the full collection back to the owning photo.

use serde::Serialize;

use planmark_geometry::{ContainerBounds, PercentPoint, PercentRect, ScreenRect, Viewport};

use crate::config::EngineConfig;
use crate::event::PointerEvent;
use crate::model::{PhotoData, PhotoMarkup};

/// The full markup collection of a photo after a change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkupUpdate {
    pub photo_id: String,
    pub markups: Vec<PhotoMarkup>,
}

/// Markup editor for one open photo.
#[derive(Debug, Clone)]
pub struct MarkupCanvas {
    photo_id: String,
    markups: Vec<PhotoMarkup>,
    container: Option<ContainerBounds>,
    /// Start point and signed draft while drawing.
    drawing: Option<(PercentPoint, PercentRect)>,
    next_id: u64,
    min_commit_size: f32,
}

impl MarkupCanvas {
    /// Open the editor seeded with the photo's existing markups.
    pub fn open(photo: &PhotoData, config: &EngineConfig) -> Self {
        Self {
            photo_id: photo.id.clone(),
            markups: photo.markups.clone(),
            container: None,
            drawing: None,
            next_id: photo.markups.len() as u64 + 1,
            min_commit_size: config.min_commit_size,
        }
    }

    pub fn photo_id(&self) -> &str {
        &self.photo_id
    }

    pub fn markups(&self) -> &[PhotoMarkup] {
        &self.markups
    }

    pub fn set_container(&mut self, container: Option<ContainerBounds>) {
        self.container = container;
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing.is_some()
    }

    /// Normalized ghost of the markup being drawn.
    pub fn draft(&self) -> Option<PercentRect> {
        self.drawing.map(|(_, draft)| draft.normalized())
    }

    /// Screen box of a markup, relative to the photo container.
    pub fn screen_rect(&self, markup: &PhotoMarkup) -> ScreenRect {
        Viewport::identity().to_screen_rect(&markup.bounds, self.container.as_ref())
    }

    fn to_percent(&self, event: &PointerEvent) -> Option<PercentPoint> {
        Viewport::identity().to_image_percent(event.position, self.container.as_ref())
    }

    /// Start a markup. Only the primary button draws.
    pub fn pointer_down(&mut self, event: PointerEvent) {
        if self.drawing.is_some() || !event.button.is_primary() {
            return;
        }
        let Some(start) = self.to_percent(&event) else {
            return;
        };
        log::debug!("Markup draw start on photo {}", self.photo_id);
        self.drawing = Some((start, PercentRect::at(start)));
    }

    pub fn pointer_move(&mut self, event: PointerEvent) {
        let Some(point) = self.to_percent(&event) else {
            return;
        };
        if let Some((start, draft)) = &mut self.drawing {
            *draft = PercentRect::from_drag(*start, point);
        }
    }

    /// Finish the markup. Returns the new collection if one was committed.
    pub fn pointer_up(&mut self, _event: PointerEvent) -> Option<MarkupUpdate> {
        self.commit()
    }

    /// Leaving the photo commits like a release.
    pub fn pointer_leave(&mut self) -> Option<MarkupUpdate> {
        self.commit()
    }

    fn commit(&mut self) -> Option<MarkupUpdate> {
        let (_, draft) = self.drawing.take()?;
        let bounds = draft.normalized();
        if !(bounds.width > self.min_commit_size && bounds.height > self.min_commit_size) {
            log::debug!("Discarded {:.2}x{:.2} markup below minimum size", bounds.width, bounds.height);
            return None;
        }

        let id = self.fresh_id();
        log::debug!("Committed markup {} on photo {}", id, self.photo_id);
        self.markups.push(PhotoMarkup { id, bounds });
        Some(self.update())
    }

    /// Delete a markup. Returns the new collection if it existed.
    pub fn delete_markup(&mut self, id: &str) -> Option<MarkupUpdate> {
        let index = self.markups.iter().position(|m| m.id == id)?;
        self.markups.remove(index);
        log::info!("Deleted markup {} on photo {}", id, self.photo_id);
        Some(self.update())
    }

    fn fresh_id(&mut self) -> String {
        loop {
            let id = format!("markup-{}", self.next_id);
            self.next_id += 1;
            if !self.markups.iter().any(|m| m.id == id) {
                return id;
            }
        }
    }

    fn update(&self) -> MarkupUpdate {
        MarkupUpdate {
            photo_id: self.photo_id.clone(),
            markups: self.markups.clone(),
        }
    }
}
