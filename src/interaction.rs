//! The active pointer gesture and the math each gesture applies.
//!
//! Every gesture keeps a snapshot of what it edits, taken at pointer-down,
//! and recomputes from that snapshot on each move. Deltas never accumulate
//! across moves, so long drags do not drift.

use serde::{Deserialize, Serialize};

use planmark_geometry::{PercentPoint, PercentRect, ScreenPoint, Viewport};

use crate::model::{ShapeId, ShapeKind};

/// One of the four corner handles of a selected shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeHandle {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeHandle {
    /// All handles, in the order they are hit-tested.
    pub fn all() -> [ResizeHandle; 4] {
        [
            ResizeHandle::TopLeft,
            ResizeHandle::TopRight,
            ResizeHandle::BottomLeft,
            ResizeHandle::BottomRight,
        ]
    }

    pub fn edits_left(&self) -> bool {
        matches!(self, ResizeHandle::TopLeft | ResizeHandle::BottomLeft)
    }

    pub fn edits_right(&self) -> bool {
        matches!(self, ResizeHandle::TopRight | ResizeHandle::BottomRight)
    }

    pub fn edits_top(&self) -> bool {
        matches!(self, ResizeHandle::TopLeft | ResizeHandle::TopRight)
    }

    pub fn edits_bottom(&self) -> bool {
        matches!(self, ResizeHandle::BottomLeft | ResizeHandle::BottomRight)
    }

    /// The corner of `rect` this handle sits on.
    pub fn corner_of(&self, rect: &PercentRect) -> PercentPoint {
        let x = if self.edits_left() { rect.x } else { rect.x + rect.width };
        let y = if self.edits_top() { rect.y } else { rect.y + rect.height };
        PercentPoint::new(x, y)
    }

    /// Whether the handle sits on the top-left/bottom-right diagonal.
    pub fn is_nwse(&self) -> bool {
        matches!(self, ResizeHandle::TopLeft | ResizeHandle::BottomRight)
    }
}

/// Resize `initial` by dragging `handle` by `(dx, dy)` percent.
///
/// Each handle edits only its two edges. The result may have negative
/// extents when dragged past the opposite edge; it is normalized on commit.
pub fn apply_resize(initial: &PercentRect, handle: ResizeHandle, dx: f32, dy: f32) -> PercentRect {
    let mut rect = *initial;
    if handle.edits_left() {
        rect.x = initial.x + dx;
        rect.width = initial.width - dx;
    }
    if handle.edits_right() {
        rect.width = initial.width + dx;
    }
    if handle.edits_top() {
        rect.y = initial.y + dy;
        rect.height = initial.height - dy;
    }
    if handle.edits_bottom() {
        rect.height = initial.height + dy;
    }
    rect
}

/// The single active pointer gesture.
///
/// Percentage-space gestures record their start in [`PercentPoint`];
/// panning records raw client pixels in [`ScreenPoint`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Interaction {
    /// No gesture in progress.
    #[default]
    None,
    /// Drawing a new shape; `draft` keeps signed extents.
    Drawing {
        start: PercentPoint,
        kind: ShapeKind,
        draft: PercentRect,
    },
    /// Moving one or more shapes from their snapshot positions.
    Moving {
        start: PercentPoint,
        initial: Vec<(ShapeId, PercentRect)>,
    },
    /// Resizing a single shape by one corner handle.
    Resizing {
        start: PercentPoint,
        shape_id: ShapeId,
        initial: PercentRect,
        handle: ResizeHandle,
    },
    /// Dragging a selection rectangle; `rect` keeps signed extents.
    Marquee { start: PercentPoint, rect: PercentRect },
    /// Panning the viewport.
    Panning { start: ScreenPoint, initial: Viewport },
}

impl Interaction {
    pub fn is_none(&self) -> bool {
        matches!(self, Interaction::None)
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Interaction::None => "none",
            Interaction::Drawing { .. } => "drawing",
            Interaction::Moving { .. } => "moving",
            Interaction::Resizing { .. } => "resizing",
            Interaction::Marquee { .. } => "marquee",
            Interaction::Panning { .. } => "panning",
        }
    }

    pub fn start_drawing(start: PercentPoint, kind: ShapeKind) -> Self {
        Interaction::Drawing {
            start,
            kind,
            draft: PercentRect::at(start),
        }
    }

    pub fn start_marquee(start: PercentPoint) -> Self {
        Interaction::Marquee {
            start,
            rect: PercentRect::at(start),
        }
    }
}

/// Position of each moved shape: its snapshot shifted by the raw delta.
pub fn moved_positions(
    initial: &[(ShapeId, PercentRect)],
    dx: f32,
    dy: f32,
) -> impl Iterator<Item = (&ShapeId, PercentRect)> {
    initial.iter().map(move |(id, rect)| (id, rect.translated(dx, dy)))
}

/// Pointer-down position latched for click-vs-drag disambiguation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PressLatch {
    origin: Option<ScreenPoint>,
}

impl PressLatch {
    pub fn latch(&mut self, at: ScreenPoint) {
        self.origin = Some(at);
    }

    /// Consume the latch, reporting whether the release at `at` was a click.
    ///
    /// A release without a position (pointer left the canvas) or without a
    /// latched press is never a click.
    pub fn release(&mut self, at: Option<ScreenPoint>, threshold: f32) -> bool {
        let origin = self.origin.take();
        match (origin, at) {
            (Some(origin), Some(at)) => origin.distance_to(at) < threshold,
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.origin = None;
    }

    pub fn is_latched(&self) -> bool {
        self.origin.is_some()
    }
}
