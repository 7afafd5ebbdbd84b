//! Scripted input replay.
//!
//! A script is a JSON document with a container box and a list of input
//! steps. Running it drives an [`AnnotationEngine`] and reports the resulting
//! geometry. Used for debugging gesture sequences, not as a storage format.

use std::path::Path;

use serde::{Deserialize, Serialize};

use planmark_geometry::{ContainerBounds, PercentPoint, Viewport};

use crate::config::EngineConfig;
use crate::engine::{AnnotationEngine, EngineRequest};
use crate::error::ReplayError;
use crate::event::{PointerEvent, WheelEvent};
use crate::image::ImagePayload;
use crate::model::{LinkedRecord, Pin, PinKind, Shape, ShapeId, Tool};

/// One input step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ReplayStep {
    PointerDown(PointerEvent),
    PointerMove(PointerEvent),
    PointerUp(PointerEvent),
    PointerLeave,
    Wheel(WheelEvent),
    ZoomIn,
    ZoomOut,
    ResetView,
    SetTool { tool: Tool },
    SetContainer { container: ContainerBounds },
    DeleteSelected,
    ClearAll,
    CreatePin {
        kind: PinKind,
        at: PercentPoint,
        linked_id: String,
    },
    AttachRecord { shape_id: ShapeId, record: LinkedRecord },
    LoadImage { data_uri: String },
}

/// A replay script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    /// Engine configuration; defaults apply when absent.
    #[serde(default)]
    pub config: Option<EngineConfig>,
    pub container: ContainerBounds,
    pub steps: Vec<ReplayStep>,
}

/// State of the engine after a replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplaySummary {
    pub shapes: Vec<Shape>,
    pub pins: Vec<Pin>,
    pub selection: Vec<ShapeId>,
    pub viewport: Viewport,
    /// Requests the engine raised, in order.
    pub requests: Vec<EngineRequest>,
}

impl ReplayScript {
    pub fn from_json(json: &str) -> Result<Self, ReplayError> {
        let script: Self = serde_json::from_str(json)?;
        if let Some(config) = &script.config {
            config.validate()?;
        }
        Ok(script)
    }

    pub fn load(path: &Path) -> Result<Self, ReplayError> {
        let json = std::fs::read_to_string(path).map_err(|e| ReplayError::io(path, e))?;
        Self::from_json(&json)
    }

    /// Run the script. `config` overrides the script's own configuration.
    pub fn run(&self, config: Option<EngineConfig>) -> Result<ReplaySummary, ReplayError> {
        let config = config.or_else(|| self.config.clone()).unwrap_or_default();
        let mut engine = AnnotationEngine::new(config);
        engine.set_container(Some(self.container));

        let mut requests = Vec::new();
        for (index, step) in self.steps.iter().enumerate() {
            log::trace!("Step {}: {:?}", index, step);
            if let Some(request) = apply_step(&mut engine, step)? {
                requests.push(request);
            }
        }

        log::info!(
            "Replayed {} steps: {} shapes, {} pins, {} selected",
            self.steps.len(),
            engine.shapes().len(),
            engine.pins().len(),
            engine.selection().len()
        );

        Ok(ReplaySummary {
            shapes: engine.shapes().to_vec(),
            pins: engine.pins().to_vec(),
            selection: engine.selection().to_vec(),
            viewport: engine.viewport(),
            requests,
        })
    }
}

fn apply_step(engine: &mut AnnotationEngine, step: &ReplayStep) -> Result<Option<EngineRequest>, ReplayError> {
    match step {
        ReplayStep::PointerDown(event) => engine.pointer_down(*event),
        ReplayStep::PointerMove(event) => engine.pointer_move(*event),
        ReplayStep::PointerUp(event) => return Ok(engine.pointer_up(*event)),
        ReplayStep::PointerLeave => engine.pointer_leave(),
        ReplayStep::Wheel(event) => engine.wheel(*event),
        ReplayStep::ZoomIn => engine.zoom_in(),
        ReplayStep::ZoomOut => engine.zoom_out(),
        ReplayStep::ResetView => engine.reset_view(),
        ReplayStep::SetTool { tool } => engine.set_tool(*tool),
        ReplayStep::SetContainer { container } => engine.set_container(Some(*container)),
        ReplayStep::DeleteSelected => {
            engine.delete_selected();
        }
        ReplayStep::ClearAll => engine.clear_all(),
        ReplayStep::CreatePin { kind, at, linked_id } => {
            engine.create_pin(*kind, *at, linked_id.clone());
        }
        ReplayStep::AttachRecord { shape_id, record } => {
            engine.attach_record(shape_id, record.clone());
        }
        ReplayStep::LoadImage { data_uri } => {
            let payload = ImagePayload::from_data_uri(data_uri.as_str()).inspect_err(|e| {
                log::warn!("Rejected image payload: {}", e);
            })?;
            engine.load_image(payload);
        }
    }
    Ok(None)
}
