//! Linked records attached to shapes and pins.
//!
//! Records are owned by the record-management collaborator. The engine only
//! stores them in per-kind collections and enforces that an id appears at
//! most once per collection.

use serde::{Deserialize, Serialize};

use planmark_geometry::PercentRect;

/// Request for information linked to a shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RfiData {
    pub id: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub rfi_type: String,
    pub question: String,
}

/// Review status of a submittal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmittalStatus {
    Open,
    Closed,
    #[serde(rename = "In Review")]
    InReview,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmittalData {
    pub id: String,
    pub title: String,
    pub spec_section: String,
    pub status: SubmittalStatus,
}

/// Status of a punch list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PunchStatus {
    Open,
    #[serde(rename = "Ready for Review")]
    ReadyForReview,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PunchData {
    pub id: String,
    pub title: String,
    pub status: PunchStatus,
    pub assignee: String,
}

/// A reference to another sheet of the drawing set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingData {
    pub id: String,
    pub title: String,
    pub thumbnail_url: String,
}

/// Where a photo came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoSource {
    /// Picked from the project's photo library
    Library,
    /// Uploaded by the user
    Upload,
}

/// A rectangle drawn on a photo, in the photo's percentage space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoMarkup {
    pub id: String,
    #[serde(flatten)]
    pub bounds: PercentRect,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoData {
    pub id: String,
    pub title: String,
    pub url: String,
    pub source: PhotoSource,
    #[serde(default)]
    pub markups: Vec<PhotoMarkup>,
}

impl PhotoData {
    /// Replace the markup collection with the one carried by `update`.
    ///
    /// Returns `false` if the update belongs to another photo.
    pub fn apply_markups(&mut self, update: &crate::markup::MarkupUpdate) -> bool {
        if update.photo_id != self.id {
            return false;
        }
        self.markups = update.markups.clone();
        true
    }
}

/// Workflow state of a safety issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SafetyStatus {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    High,
    Medium,
    Low,
}

/// A safety issue, linked to the blueprint through a safety pin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyIssueData {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: SafetyStatus,
    pub severity: Severity,
}

/// The kinds of record a shape can carry, plus safety issues (pin-only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Rfi,
    Submittal,
    Punch,
    Drawing,
    Photo,
    Safety,
}

impl RecordKind {
    /// Get the display name for this record kind.
    pub fn name(&self) -> &'static str {
        match self {
            RecordKind::Rfi => "RFI",
            RecordKind::Submittal => "Submittal",
            RecordKind::Punch => "Punch",
            RecordKind::Drawing => "Drawing",
            RecordKind::Photo => "Photo",
            RecordKind::Safety => "Safety",
        }
    }
}

/// A record that can be attached to a shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "record", rename_all = "lowercase")]
pub enum LinkedRecord {
    Rfi(RfiData),
    Submittal(SubmittalData),
    Punch(PunchData),
    Drawing(DrawingData),
    Photo(PhotoData),
}

impl LinkedRecord {
    pub fn kind(&self) -> RecordKind {
        match self {
            LinkedRecord::Rfi(_) => RecordKind::Rfi,
            LinkedRecord::Submittal(_) => RecordKind::Submittal,
            LinkedRecord::Punch(_) => RecordKind::Punch,
            LinkedRecord::Drawing(_) => RecordKind::Drawing,
            LinkedRecord::Photo(_) => RecordKind::Photo,
        }
    }

    /// The record's id, rendered as a string for display and logging.
    pub fn record_id(&self) -> String {
        match self {
            LinkedRecord::Rfi(r) => r.id.to_string(),
            LinkedRecord::Submittal(r) => r.id.clone(),
            LinkedRecord::Punch(r) => r.id.clone(),
            LinkedRecord::Drawing(r) => r.id.clone(),
            LinkedRecord::Photo(r) => r.id.clone(),
        }
    }
}

/// Ordered per-kind collections of records linked to one shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LinkedRecords {
    #[serde(default)]
    pub rfis: Vec<RfiData>,
    #[serde(default)]
    pub submittals: Vec<SubmittalData>,
    #[serde(default)]
    pub punches: Vec<PunchData>,
    #[serde(default)]
    pub drawings: Vec<DrawingData>,
    #[serde(default)]
    pub photos: Vec<PhotoData>,
}

/// Append unless a record with the same id is already present.
fn push_unique<T, K: PartialEq>(items: &mut Vec<T>, item: T, key: impl Fn(&T) -> K) -> bool {
    let id = key(&item);
    if items.iter().any(|existing| key(existing) == id) {
        return false;
    }
    items.push(item);
    true
}

impl LinkedRecords {
    /// Attach a record to its collection.
    ///
    /// Returns `false` (and leaves the collection untouched) if a record with
    /// the same id is already linked.
    pub fn attach(&mut self, record: LinkedRecord) -> bool {
        match record {
            LinkedRecord::Rfi(r) => push_unique(&mut self.rfis, r, |r| r.id),
            LinkedRecord::Submittal(r) => push_unique(&mut self.submittals, r, |r| r.id.clone()),
            LinkedRecord::Punch(r) => push_unique(&mut self.punches, r, |r| r.id.clone()),
            LinkedRecord::Drawing(r) => push_unique(&mut self.drawings, r, |r| r.id.clone()),
            LinkedRecord::Photo(r) => push_unique(&mut self.photos, r, |r| r.id.clone()),
        }
    }

    /// Replace a linked RFI in place. Returns `false` if it is not linked.
    pub fn update_rfi(&mut self, rfi: RfiData) -> bool {
        match self.rfis.iter_mut().find(|r| r.id == rfi.id) {
            Some(existing) => {
                *existing = rfi;
                true
            }
            None => false,
        }
    }

    /// Total number of linked records across all kinds.
    pub fn len(&self) -> usize {
        self.rfis.len() + self.submittals.len() + self.punches.len() + self.drawings.len() + self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
