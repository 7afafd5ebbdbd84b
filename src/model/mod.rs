//! Data models for annotations and the records linked to them.

mod pin;
mod records;
mod shape;
mod tool;

pub use pin::{pin_marker_rect, Pin, PinId, PinKind};
pub use records::{
    DrawingData, LinkedRecord, LinkedRecords, PhotoData, PhotoMarkup, PhotoSource, PunchData, PunchStatus,
    RecordKind, RfiData, SafetyIssueData, SafetyStatus, Severity, SubmittalData, SubmittalStatus,
};
pub use shape::{Outline, Shape, ShapeId, ShapeKind};
pub use tool::Tool;
