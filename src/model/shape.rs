//! Area annotations: boxes, ellipses and revision clouds.

use std::fmt;

use serde::{Deserialize, Serialize};

use planmark_geometry::{generate_cloud_outline, Bounded, CloudPath, PercentRect, ScreenPoint, ScreenRect};

use super::records::LinkedRecords;

/// Opaque identifier of a shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(String);

impl ShapeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ShapeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// How a shape's bounds are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Box,
    Ellipse,
    Cloud,
}

impl ShapeKind {
    /// Get the display name for this shape kind.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Box => "Box",
            ShapeKind::Ellipse => "Ellipse",
            ShapeKind::Cloud => "Cloud",
        }
    }

    /// Get all shape kinds.
    pub fn all() -> &'static [ShapeKind] {
        &[ShapeKind::Box, ShapeKind::Ellipse, ShapeKind::Cloud]
    }

    /// Renderable outline of this kind for a box in screen pixels.
    pub fn outline(&self, rect: ScreenRect) -> Outline {
        match self {
            ShapeKind::Box => Outline::Rect(rect),
            ShapeKind::Ellipse => Outline::Ellipse {
                center: rect.center(),
                rx: rect.width / 2.0,
                ry: rect.height / 2.0,
            },
            ShapeKind::Cloud => Outline::Cloud {
                origin: ScreenPoint::new(rect.left, rect.top),
                path: generate_cloud_outline(rect.width, rect.height),
            },
        }
    }
}

/// What the renderer should draw for a shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    Rect(ScreenRect),
    Ellipse { center: ScreenPoint, rx: f32, ry: f32 },
    /// Path coordinates are relative to `origin`.
    Cloud { origin: ScreenPoint, path: CloudPath },
}

/// A committed area annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: ShapeId,
    pub kind: ShapeKind,
    /// Bounds in percentage space. Normalized whenever no gesture is active.
    pub bounds: PercentRect,
    #[serde(default)]
    pub links: LinkedRecords,
}

impl Shape {
    pub fn new(id: ShapeId, kind: ShapeKind, bounds: PercentRect) -> Self {
        Self {
            id,
            kind,
            bounds,
            links: LinkedRecords::default(),
        }
    }
}

impl Bounded for Shape {
    fn bounds(&self) -> PercentRect {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_outline_is_the_rect() {
        let rect = ScreenRect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(ShapeKind::Box.outline(rect), Outline::Rect(rect));
    }

    #[test]
    fn test_ellipse_outline_is_inscribed() {
        let rect = ScreenRect::new(10.0, 20.0, 100.0, 50.0);
        match ShapeKind::Ellipse.outline(rect) {
            Outline::Ellipse { center, rx, ry } => {
                assert_eq!(center, ScreenPoint::new(60.0, 45.0));
                assert_eq!(rx, 50.0);
                assert_eq!(ry, 25.0);
            }
            other => panic!("expected ellipse, got {other:?}"),
        }
    }

    #[test]
    fn test_cloud_outline_for_zero_rect_is_empty() {
        match ShapeKind::Cloud.outline(ScreenRect::ZERO) {
            Outline::Cloud { path, .. } => assert!(path.is_empty()),
            other => panic!("expected cloud, got {other:?}"),
        }
    }

    #[test]
    fn test_shape_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&ShapeId::new("shape-7")).unwrap();
        assert_eq!(json, "\"shape-7\"");
    }
}
