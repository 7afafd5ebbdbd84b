//! Active editing tool.

use serde::{Deserialize, Serialize};

use super::pin::PinKind;
use super::shape::ShapeKind;

/// What a primary-button press on the canvas does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "tool", content = "kind", rename_all = "lowercase")]
pub enum Tool {
    /// Select, move and marquee; pans when zoomed in
    #[default]
    Select,
    /// Draw new shapes of the given kind
    Shape(ShapeKind),
    /// Place pins of the given kind
    Pin(PinKind),
}

impl Tool {
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Select => "Select",
            Tool::Shape(kind) => kind.name(),
            Tool::Pin(_) => "Pin",
        }
    }

    /// Whether hovering over shapes is tracked for this tool.
    pub fn tracks_hover(&self) -> bool {
        matches!(self, Tool::Select | Tool::Shape(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_serde_shape() {
        let json = serde_json::to_string(&Tool::Shape(ShapeKind::Cloud)).unwrap();
        assert_eq!(json, r#"{"tool":"shape","kind":"cloud"}"#);
        let tool: Tool = serde_json::from_str(r#"{"tool":"select"}"#).unwrap();
        assert_eq!(tool, Tool::Select);
    }

    #[test]
    fn test_hover_tracking() {
        assert!(Tool::Select.tracks_hover());
        assert!(Tool::Shape(ShapeKind::Box).tracks_hover());
        assert!(!Tool::Pin(PinKind::Safety).tracks_hover());
    }
}
