//! Planmark - interactive annotation engine for blueprints and photos.
//!
//! Boxes, ellipses, revision clouds and pins are kept in image-relative
//! percentage space and mapped through a pan/zoom viewport for rendering and
//! pointer input. The geometry itself lives in the `planmark_geometry` crate;
//! this crate adds the shape store, selection, the pointer gesture state
//! machine and the photo markup editor.

pub mod config;
pub mod constants;
pub mod cursor;
pub mod engine;
pub mod error;
pub mod event;
pub mod image;
pub mod interaction;
pub mod markup;
pub mod model;
pub mod replay;
pub mod selection;
pub mod store;

pub use planmark_geometry as geometry;

pub use config::{EngineConfig, LogLevel};
pub use cursor::CursorStyle;
pub use engine::{AnnotationEngine, EditPanel, EngineRequest, PanelTarget};
pub use error::{ConfigError, PayloadError, ReplayError};
pub use event::{Modifiers, MouseButton, PointerEvent, WheelEvent};
pub use image::ImagePayload;
pub use interaction::{Interaction, ResizeHandle};
pub use markup::{MarkupCanvas, MarkupUpdate};
pub use model::{Outline, Pin, PinId, PinKind, Shape, ShapeId, ShapeKind, Tool};
