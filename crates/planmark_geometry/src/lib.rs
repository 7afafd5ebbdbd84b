//! Planmark geometry
//!
//! Stateless math behind the annotation engine: percentage-space and
//! screen-space points and rectangles, the pan/zoom viewport transform,
//! hit-testing, and the procedural cloud outline.
//!
//! Percentage space is the image-relative, zoom-independent space in which
//! annotations are stored (0-100 on each axis). Screen space is pixels
//! relative to the image container's top-left after the viewport's scale and
//! translate have been applied.

mod cloud;
mod point;
mod rect;
mod viewport;

pub use cloud::{
    generate_cloud_outline, CloudArc, CloudPath, PathCommand, CLOUD_ARCS, CLOUD_START,
};
pub use hit_test::{hit_test, intersecting, Bounded};
pub use point::{ContainerBounds, PercentPoint, ScreenPoint};
pub use rect::{PercentRect, ScreenRect};
pub use viewport::{Viewport, ZoomLimits, MAX_ZOOM, MIN_ZOOM};
