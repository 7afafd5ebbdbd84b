//! Pointer cursor affordance derived from the engine state.

use serde::{Deserialize, Serialize};

use crate::interaction::Interaction;
use crate::model::Tool;

/// Cursor the rendering layer should show over the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CursorStyle {
    #[default]
    Default,
    Crosshair,
    Move,
    Grab,
    Grabbing,
    NwseResize,
    NeswResize,
}

impl CursorStyle {
    /// CSS cursor keyword.
    pub fn css_name(&self) -> &'static str {
        match self {
            CursorStyle::Default => "default",
            CursorStyle::Crosshair => "crosshair",
            CursorStyle::Move => "move",
            CursorStyle::Grab => "grab",
            CursorStyle::Grabbing => "grabbing",
            CursorStyle::NwseResize => "nwse-resize",
            CursorStyle::NeswResize => "nesw-resize",
        }
    }
}

/// Everything the cursor depends on.
#[derive(Debug, Clone, Copy)]
pub struct CursorContext<'a> {
    pub interaction: &'a Interaction,
    pub dragging_pin: bool,
    pub tool: Tool,
    pub hovering_shape: bool,
    pub scale: f32,
}

/// Pick the cursor: active gestures first, then the tool.
pub fn cursor_for(ctx: CursorContext<'_>) -> CursorStyle {
    if ctx.dragging_pin {
        return CursorStyle::Grabbing;
    }
    match ctx.interaction {
        Interaction::Panning { .. } | Interaction::Moving { .. } => return CursorStyle::Grabbing,
        Interaction::Resizing { handle, .. } => {
            return if handle.is_nwse() {
                CursorStyle::NwseResize
            } else {
                CursorStyle::NeswResize
            };
        }
        Interaction::Drawing { .. } | Interaction::Marquee { .. } => return CursorStyle::Crosshair,
        Interaction::None => {}
    }

    match ctx.tool {
        Tool::Pin(_) => CursorStyle::Crosshair,
        Tool::Shape(_) if ctx.hovering_shape => CursorStyle::Move,
        Tool::Shape(_) => CursorStyle::Crosshair,
        Tool::Select if ctx.hovering_shape => CursorStyle::Move,
        Tool::Select if ctx.scale > 1.0 => CursorStyle::Grab,
        Tool::Select => CursorStyle::Default,
    }
}
