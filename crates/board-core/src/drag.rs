// crates/board-core/src/drag.rs
// Drag-and-drop protocol between item views and list views
//
// Source and target never reference each other. The only channel is the drag
// payload, which carries nothing but the project id as plain text.

use std::collections::BTreeMap;

use log::debug;

use crate::error::{BoardError, Result};
use crate::model::{ProjectId, ProjectStatus};
use crate::store::ProjectStore;

/// Payload kind written by drag sources and accepted by drop targets
pub const DRAG_FORMAT: &str = "text/plain";

/// Effect a drag source allows. Projects are only ever moved between columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEffect {
    Move,
}

impl DragEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Move => "move",
        }
    }
}

/// Minimal view of a drag context, implemented over the browser's DataTransfer
pub trait DragData {
    /// Payload kinds currently attached, in attachment order
    fn types(&self) -> Vec<String>;
    fn get_data(&self, format: &str) -> Option<String>;
    fn set_data(&mut self, format: &str, data: &str) -> Result<()>;
    fn set_effect_allowed(&mut self, effect: DragEffect);

    /// Whether the first attached kind is the one drop targets accept
    fn carries_payload(&self) -> bool {
        self.types().first().map(String::as_str) == Some(DRAG_FORMAT)
    }
}

/// The id of the project being dragged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload(ProjectId);

impl DragPayload {
    pub fn new(id: ProjectId) -> Self {
        Self(id)
    }

    pub fn id(&self) -> &ProjectId {
        &self.0
    }

    pub fn to_wire(&self) -> &str {
        self.0.as_str()
    }

    pub fn from_wire(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Err(BoardError::EmptyPayload);
        }
        Ok(Self(ProjectId::new(raw)))
    }

    /// Attach this payload to a drag that is starting
    pub fn write_to(&self, data: &mut dyn DragData) -> Result<()> {
        data.set_data(DRAG_FORMAT, self.to_wire())?;
        data.set_effect_allowed(DragEffect::Move);
        Ok(())
    }

    /// Read the payload back out at drop time
    pub fn read_from(data: &dyn DragData) -> Result<Self> {
        let raw = data.get_data(DRAG_FORMAT).unwrap_or_default();
        Self::from_wire(&raw)
    }
}

/// Something that can be picked up
pub trait Draggable {
    fn drag_start(&self, data: &mut dyn DragData) -> Result<()>;

    fn drag_end(&self) {}
}

/// Something a dragged project can be dropped on
pub trait DragTarget {
    /// Returns true when the target accepts the drag, so the caller should
    /// suppress the browser's default "no drop" handling
    fn drag_over(&mut self, data: &dyn DragData) -> bool;

    fn drag_leave(&mut self);

    /// Move the dropped project into this target. Returns whether the store changed.
    fn accept_drop(&mut self, data: &dyn DragData, store: &mut ProjectStore) -> bool;
}

/// Where a single drag gesture is, from one target's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    OverValid,
    OverInvalid,
    Dropped,
    Cancelled,
}

/// Drop target bound to a fixed status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropZone {
    status: ProjectStatus,
    phase: DragPhase,
}

impl DropZone {
    pub fn new(status: ProjectStatus) -> Self {
        Self {
            status,
            phase: DragPhase::Idle,
        }
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Whether the zone should be highlighted as a valid target
    pub fn is_droppable(&self) -> bool {
        self.phase == DragPhase::OverValid
    }
}

impl DragTarget for DropZone {
    fn drag_over(&mut self, data: &dyn DragData) -> bool {
        if data.carries_payload() {
            self.phase = DragPhase::OverValid;
            true
        } else {
            self.phase = DragPhase::OverInvalid;
            false
        }
    }

    fn drag_leave(&mut self) {
        self.phase = DragPhase::Cancelled;
    }

    fn accept_drop(&mut self, data: &dyn DragData, store: &mut ProjectStore) -> bool {
        if !data.carries_payload() {
            self.phase = DragPhase::Cancelled;
            return false;
        }
        self.phase = DragPhase::Dropped;

        match DragPayload::read_from(data) {
            Ok(payload) => {
                debug!("Dropped {} on {} zone", payload.id(), self.status.as_str());
                store.move_project(payload.id(), self.status)
            }
            Err(e) => {
                debug!("Ignoring drop: {}", e);
                false
            }
        }
    }
}

/// In-memory drag context for tests and non-browser hosts
#[derive(Debug, Clone, Default)]
pub struct MemoryTransfer {
    order: Vec<String>,
    data: BTreeMap<String, String>,
    effect_allowed: Option<DragEffect>,
}

impl MemoryTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn effect_allowed(&self) -> Option<DragEffect> {
        self.effect_allowed
    }
}

impl DragData for MemoryTransfer {
    fn types(&self) -> Vec<String> {
        self.order.clone()
    }

    fn get_data(&self, format: &str) -> Option<String> {
        self.data.get(format).cloned()
    }

    fn set_data(&mut self, format: &str, data: &str) -> Result<()> {
        if !self.data.contains_key(format) {
            self.order.push(format.to_string());
        }
        self.data.insert(format.to_string(), data.to_string());
        Ok(())
    }

    fn set_effect_allowed(&mut self, effect: DragEffect) {
        self.effect_allowed = Some(effect);
    }
}
