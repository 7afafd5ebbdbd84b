//! Axis-aligned rectangles in percentage and screen space.

use serde::{Deserialize, Serialize};

use crate::point::{PercentPoint, ScreenPoint};

/// An axis-aligned rectangle in percentage space.
///
/// At rest `width` and `height` are non-negative and `(x, y)` is the top-left
/// corner. While a draw or resize gesture is in progress either extent may be
/// negative; [`PercentRect::normalized`] restores the canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PercentRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PercentRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A zero-sized rectangle anchored at `point`.
    pub fn at(point: PercentPoint) -> Self {
        Self::new(point.x, point.y, 0.0, 0.0)
    }

    /// The rectangle spanned by a drag from `start` to `current`.
    ///
    /// The extents keep their sign, so dragging up or left yields a negative
    /// width or height anchored at `start`.
    pub fn from_drag(start: PercentPoint, current: PercentPoint) -> Self {
        Self::new(start.x, start.y, current.x - start.x, current.y - start.y)
    }

    /// Canonical form: non-negative extents with `(x, y)` at the top-left.
    ///
    /// Idempotent.
    pub fn normalized(&self) -> Self {
        let mut rect = *self;
        if rect.width < 0.0 {
            rect.x += rect.width;
            rect.width = rect.width.abs();
        }
        if rect.height < 0.0 {
            rect.y += rect.height;
            rect.height = rect.height.abs();
        }
        rect
    }

    /// Whether both extents are non-negative.
    pub fn is_normalized(&self) -> bool {
        self.width >= 0.0 && self.height >= 0.0
    }

    /// Inclusive containment test on the normalized bounds.
    pub fn contains(&self, point: PercentPoint) -> bool {
        let r = self.normalized();
        point.x >= r.x && point.x <= r.x + r.width && point.y >= r.y && point.y <= r.y + r.height
    }

    /// Strict axis-aligned overlap test on the normalized bounds.
    ///
    /// Rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &PercentRect) -> bool {
        let a = self.normalized();
        let b = other.normalized();
        a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
    }

    /// The same rectangle shifted by `(dx, dy)`.
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    pub fn top_left(&self) -> PercentPoint {
        PercentPoint::new(self.x, self.y)
    }
}

/// An axis-aligned rectangle in container-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ScreenRect {
    /// Neutral result for transforms queried before the container has a layout.
    pub const ZERO: ScreenRect = ScreenRect {
        left: 0.0,
        top: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A square of side `size` centred on `center`.
    pub fn centered_square(center: ScreenPoint, size: f32) -> Self {
        let half = size / 2.0;
        Self::new(center.x - half, center.y - half, size, size)
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn center(&self) -> ScreenPoint {
        ScreenPoint::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Inclusive containment test.
    pub fn contains(&self, point: ScreenPoint) -> bool {
        point.x >= self.left && point.x <= self.right() && point.y >= self.top && point.y <= self.bottom()
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_negative_extents() {
        let r = PercentRect::new(30.0, 40.0, -10.0, -20.0).normalized();
        assert_eq!(r, PercentRect::new(20.0, 20.0, 10.0, 20.0));
        assert!(r.is_normalized());
    }

    #[test]
    fn test_normalize_is_noop_on_canonical_rect() {
        let r = PercentRect::new(5.0, 6.0, 7.0, 8.0);
        assert_eq!(r.normalized(), r);
    }

    #[test]
    fn test_from_drag_keeps_sign() {
        let r = PercentRect::from_drag(PercentPoint::new(50.0, 50.0), PercentPoint::new(40.0, 70.0));
        assert_eq!(r, PercentRect::new(50.0, 50.0, -10.0, 20.0));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let r = PercentRect::new(10.0, 10.0, 20.0, 20.0);
        assert!(r.contains(PercentPoint::new(10.0, 10.0)));
        assert!(r.contains(PercentPoint::new(30.0, 30.0)));
        assert!(!r.contains(PercentPoint::new(30.1, 20.0)));
    }

    #[test]
    fn test_contains_uses_normalized_bounds() {
        let r = PercentRect::new(30.0, 30.0, -20.0, -20.0);
        assert!(r.contains(PercentPoint::new(15.0, 15.0)));
    }

    #[test]
    fn test_intersects_is_strict() {
        let a = PercentRect::new(0.0, 0.0, 10.0, 10.0);
        let touching = PercentRect::new(10.0, 0.0, 10.0, 10.0);
        let overlapping = PercentRect::new(9.0, 9.0, 10.0, 10.0);
        assert!(!a.intersects(&touching));
        assert!(a.intersects(&overlapping));
    }

    #[test]
    fn test_screen_rect_contains() {
        let r = ScreenRect::centered_square(ScreenPoint::new(100.0, 100.0), 14.0);
        assert!(r.contains(ScreenPoint::new(93.0, 107.0)));
        assert!(!r.contains(ScreenPoint::new(92.0, 100.0)));
    }

    #[test]
    fn test_zero_rect_is_empty() {
        assert!(ScreenRect::ZERO.is_empty());
        assert!(!ScreenRect::new(0.0, 0.0, 1.0, 1.0).is_empty());
    }

    proptest::proptest! {
        #[test]
        fn prop_normalize_is_idempotent(
            x in -100.0f32..200.0,
            y in -100.0f32..200.0,
            w in -100.0f32..100.0,
            h in -100.0f32..100.0,
        ) {
            let once = PercentRect::new(x, y, w, h).normalized();
            proptest::prop_assert!(once.is_normalized());
            proptest::prop_assert_eq!(once.normalized(), once);
        }
    }
}
