//! Pointer and wheel input delivered by the rendering layer.
//!
//! Positions are client pixels; the engine subtracts the container origin.

use serde::{Deserialize, Serialize};

use planmark_geometry::ScreenPoint;

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
    Other(u16),
}

impl MouseButton {
    /// The primary (left) button drives tools.
    pub fn is_primary(&self) -> bool {
        matches!(self, MouseButton::Left)
    }
}

/// Keyboard modifiers held during a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub meta: bool,
}

impl Modifiers {
    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }
}

/// A pointer press, move or release.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub position: ScreenPoint,
    #[serde(default)]
    pub button: MouseButton,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Primary-button event without modifiers.
    pub fn primary(x: f32, y: f32) -> Self {
        Self {
            position: ScreenPoint::new(x, y),
            button: MouseButton::Left,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = button;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Mouse wheel scrolled over the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelEvent {
    pub position: ScreenPoint,
    /// Positive when scrolling down (zoom out).
    pub delta_y: f32,
}

impl WheelEvent {
    pub fn new(x: f32, y: f32, delta_y: f32) -> Self {
        Self {
            position: ScreenPoint::new(x, y),
            delta_y,
        }
    }
}
