//! Pan/zoom viewport and the percentage <-> pixel transforms.
//!
//! The viewport maps percentage space to container-local pixels:
//! `pixel = (percent / 100 * container_size) * scale + translate`.

use serde::{Deserialize, Serialize};

use crate::point::{ContainerBounds, PercentPoint, ScreenPoint};
use crate::rect::{PercentRect, ScreenRect};

/// Smallest allowed zoom scale.
pub const MIN_ZOOM: f32 = 0.2;

/// Largest allowed zoom scale.
pub const MAX_ZOOM: f32 = 8.0;

/// Inclusive bounds for the zoom scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomLimits {
    pub min: f32,
    pub max: f32,
}

impl ZoomLimits {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Clamp a scale into range. Out-of-range input is clamped, never rejected;
    /// NaN maps to `min`.
    pub fn clamp(&self, scale: f32) -> f32 {
        scale.max(self.min).min(self.max)
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self::new(MIN_ZOOM, MAX_ZOOM)
    }
}

/// Current zoom scale and pan translation (pixels).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub scale: f32,
    pub translate_x: f32,
    pub translate_y: f32,
}

impl Viewport {
    pub fn new(scale: f32, translate_x: f32, translate_y: f32) -> Self {
        Self {
            scale,
            translate_x,
            translate_y,
        }
    }

    /// Identity transform (scale 1, no translation).
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// Map a percentage point to container-local pixels.
    ///
    /// Returns `None` while the container has no layout.
    pub fn to_screen_point(
        &self,
        point: PercentPoint,
        container: Option<&ContainerBounds>,
    ) -> Option<ScreenPoint> {
        let container = container.filter(|c| c.has_layout())?;
        let pixel_x = point.x / 100.0 * container.width;
        let pixel_y = point.y / 100.0 * container.height;
        Some(ScreenPoint::new(
            pixel_x * self.scale + self.translate_x,
            pixel_y * self.scale + self.translate_y,
        ))
    }

    /// Map a percentage rectangle to container-local pixels.
    ///
    /// The origin gets scale and translate; the size gets scale only.
    /// Returns [`ScreenRect::ZERO`] while the container has no layout.
    pub fn to_screen_rect(&self, rect: &PercentRect, container: Option<&ContainerBounds>) -> ScreenRect {
        let Some(container) = container.filter(|c| c.has_layout()) else {
            return ScreenRect::ZERO;
        };
        let pixel_x = rect.x / 100.0 * container.width;
        let pixel_y = rect.y / 100.0 * container.height;
        let pixel_w = rect.width / 100.0 * container.width;
        let pixel_h = rect.height / 100.0 * container.height;
        ScreenRect::new(
            pixel_x * self.scale + self.translate_x,
            pixel_y * self.scale + self.translate_y,
            pixel_w * self.scale,
            pixel_h * self.scale,
        )
    }

    /// Inverse map: client pixels to percentage space.
    ///
    /// Subtracts the container origin, then the translation, divides by the
    /// scale and by the container size. Returns `None` while the container
    /// has no layout or the scale is degenerate.
    pub fn to_image_percent(
        &self,
        client: ScreenPoint,
        container: Option<&ContainerBounds>,
    ) -> Option<PercentPoint> {
        let container = container.filter(|c| c.has_layout())?;
        if !(self.scale > 0.0) {
            return None;
        }
        let local = container.to_local(client);
        let (image_x, image_y) = self.image_pixel_at(local);
        Some(PercentPoint::new(
            image_x / container.width * 100.0,
            image_y / container.height * 100.0,
        ))
    }

    /// Unscaled image pixel under a container-local point.
    fn image_pixel_at(&self, local: ScreenPoint) -> (f32, f32) {
        (
            (local.x - self.translate_x) / self.scale,
            (local.y - self.translate_y) / self.scale,
        )
    }

    /// Zoom to `new_scale` keeping the image point under `anchor`
    /// (container-local pixels) visually fixed.
    ///
    /// 1. Find the image pixel under the anchor at the current scale
    /// 2. Solve the translation that maps it back to the anchor at the new scale
    pub fn zoom_to(&self, new_scale: f32, anchor: ScreenPoint, limits: &ZoomLimits) -> Viewport {
        let new_scale = limits.clamp(new_scale);
        let (image_x, image_y) = self.image_pixel_at(anchor);
        Viewport {
            scale: new_scale,
            translate_x: anchor.x - image_x * new_scale,
            translate_y: anchor.y - image_y * new_scale,
        }
    }

    /// Additive wheel zoom anchored at the cursor.
    ///
    /// A positive `delta_y` (scrolling down) zooms out.
    pub fn wheel_zoom(&self, delta_y: f32, speed: f32, anchor: ScreenPoint, limits: &ZoomLimits) -> Viewport {
        self.zoom_to(self.scale - delta_y * speed, anchor, limits)
    }

    /// Multiplicative zoom in anchored at `anchor`.
    pub fn zoom_in(&self, factor: f32, anchor: ScreenPoint, limits: &ZoomLimits) -> Viewport {
        self.zoom_to(self.scale * factor, anchor, limits)
    }

    /// Multiplicative zoom out anchored at `anchor`.
    pub fn zoom_out(&self, factor: f32, anchor: ScreenPoint, limits: &ZoomLimits) -> Viewport {
        self.zoom_to(self.scale / factor, anchor, limits)
    }

    /// Apply a pan delta in pixels.
    ///
    /// Panning gestures call this on the viewport captured at gesture start
    /// with the total pointer displacement, so repeated moves do not drift.
    pub fn pan_by(&self, dx: f32, dy: f32) -> Viewport {
        Viewport {
            scale: self.scale,
            translate_x: self.translate_x + dx,
            translate_y: self.translate_y + dy,
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::identity()
    }
}
