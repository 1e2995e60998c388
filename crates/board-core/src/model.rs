// crates/board-core/src/model.rs
// Project entity and its status

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque project identifier, assigned once by the store
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Which column a project lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Active,
    Finished,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 2] = [ProjectStatus::Active, ProjectStatus::Finished];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }

    /// Upper-case label used in list headings
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Finished => "FINISHED",
        }
    }
}

/// A single work item on the board.
///
/// Everything except `status` is fixed at creation. The fields are private so
/// the only way to change a project is through `ProjectStore::move_project`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    title: String,
    description: String,
    people: u32,
    status: ProjectStatus,
}

impl Project {
    pub(crate) fn new(id: ProjectId, title: String, description: String, people: u32) -> Self {
        Self {
            id,
            title,
            description,
            people,
            status: ProjectStatus::Active,
        }
    }

    pub fn id(&self) -> &ProjectId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn people(&self) -> u32 {
        self.people
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    pub(crate) fn set_status(&mut self, status: ProjectStatus) {
        self.status = status;
    }
}
