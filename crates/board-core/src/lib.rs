// crates/board-core/src/lib.rs
// ProjectBoard core: state, validation and drag protocol (native + WASM compatible)
// No browser-only dependencies allowed here

//! Platform-independent half of ProjectBoard.
//!
//! - [`ProjectStore`] owns the projects and pushes a [`Snapshot`] to every
//!   subscriber after each mutation.
//! - [`validation`] checks raw form values against fixed constraints.
//! - [`drag`] is the drag-and-drop contract: [`Draggable`] sources write a
//!   project id under `text/plain`, [`DragTarget`]s read it back and move the
//!   project. The browser's DataTransfer is hidden behind [`DragData`].
//! - [`form`] and [`view`] hold the logic of the input form and the list/item
//!   components, so the UI crate only wires events to them.

pub mod config;
pub mod drag;
pub mod error;
pub mod form;
pub mod model;
pub mod store;
pub mod validation;
pub mod view;

pub use config::{BoardConfig, FormRules};
pub use drag::{
    DRAG_FORMAT, DragData, DragEffect, DragPayload, DragPhase, DragTarget, Draggable, DropZone,
    MemoryTransfer,
};
pub use error::{BoardError, Result};
pub use form::{FormInput, NewProject};
pub use model::{Project, ProjectId, ProjectStatus};
pub use store::{IdSource, ProjectStore, Snapshot};
pub use validation::{FieldValue, Rule, Validatable, validate};
pub use view::{ProjectItem, ProjectList, persons_label};
