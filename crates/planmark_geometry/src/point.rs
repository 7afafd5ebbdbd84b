//! Point types for the two coordinate spaces, and the container box that
//! links them.

use serde::{Deserialize, Serialize};

/// A point in percentage space (0-100 of the image's width/height).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PercentPoint {
    pub x: f32,
    pub y: f32,
}

impl PercentPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Offset from `origin` to `self`, in percentage units.
    pub fn delta_from(&self, origin: PercentPoint) -> (f32, f32) {
        (self.x - origin.x, self.y - origin.y)
    }
}

/// A point in pixels.
///
/// Pointer events carry client pixels; render queries return pixels relative
/// to the container's top-left. Both are pixel quantities and share this type.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: ScreenPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Offset from `origin` to `self`, in pixels.
    pub fn delta_from(&self, origin: ScreenPoint) -> (f32, f32) {
        (self.x - origin.x, self.y - origin.y)
    }
}

/// Client-space bounding box of the image container.
///
/// Percentages are resolved against `width`/`height`; `left`/`top` are
/// subtracted from client pointer positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerBounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ContainerBounds {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Whether the container has a usable layout (non-zero, finite size).
    pub fn has_layout(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Convert a client-space point to container-local pixels.
    pub fn to_local(&self, client: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(client.x - self.left, client.y - self.top)
    }

    /// Geometric centre in container-local pixels.
    pub fn local_center(&self) -> ScreenPoint {
        ScreenPoint::new(self.width / 2.0, self.height / 2.0)
    }
}
