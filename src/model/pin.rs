//! Point annotations linked to an external record.

use std::fmt;

use serde::{Deserialize, Serialize};

use planmark_geometry::{PercentPoint, ScreenPoint, ScreenRect};

use super::records::RecordKind;

/// Opaque identifier of a pin.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PinId(String);

impl PinId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PinId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// What a pin points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinKind {
    #[default]
    Photo,
    Safety,
    Punch,
}

impl PinKind {
    pub fn name(&self) -> &'static str {
        match self {
            PinKind::Photo => "Photo",
            PinKind::Safety => "Safety",
            PinKind::Punch => "Punch",
        }
    }

    /// The record kind a pin of this kind links to.
    pub fn record_kind(&self) -> RecordKind {
        match self {
            PinKind::Photo => RecordKind::Photo,
            PinKind::Safety => RecordKind::Safety,
            PinKind::Punch => RecordKind::Punch,
        }
    }
}

/// A point marker anchored in percentage space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    pub id: PinId,
    pub kind: PinKind,
    pub position: PercentPoint,
    /// Id of the linked record, owned by the record collaborator.
    pub linked_id: String,
}

impl Pin {
    pub fn new(id: PinId, kind: PinKind, position: PercentPoint, linked_id: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            position,
            linked_id: linked_id.into(),
        }
    }
}

/// Marker box for a pin drawn at `anchor`, with the anchor at its bottom centre.
pub fn pin_marker_rect(anchor: ScreenPoint, width: f32, height: f32) -> ScreenRect {
    ScreenRect::new(anchor.x - width / 2.0, anchor.y - height, width, height)
}
