// crates/board-core/src/store.rs
// The project store: single owner of board state, broadcasting snapshots

use std::sync::Arc;

use log::{debug, trace};
use uuid::Uuid;

use crate::model::{Project, ProjectId, ProjectStatus};

/// Immutable copy of every project, taken at notification time
pub type Snapshot = Arc<[Project]>;

type Subscriber = Box<dyn FnMut(Snapshot)>;

/// Where new project ids come from
#[derive(Debug, Clone)]
pub enum IdSource {
    /// Random UUID v4. Collisions are negligible but not ruled out.
    Random,
    /// Monotonic counter ("p1", "p2", ...). Unique for the lifetime of the store.
    Sequential { next: u64 },
}

impl IdSource {
    pub fn sequential() -> Self {
        IdSource::Sequential { next: 1 }
    }

    fn next_id(&mut self) -> ProjectId {
        match self {
            IdSource::Random => ProjectId::new(Uuid::new_v4().to_string()),
            IdSource::Sequential { next } => {
                let id = ProjectId::new(format!("p{}", next));
                *next += 1;
                id
            }
        }
    }
}

/// Ordered list of projects plus the callbacks that watch it.
///
/// Every successful mutation hands each subscriber a fresh [`Snapshot`],
/// synchronously and in registration order, before the mutating call returns.
/// Subscribers cannot reach the store's own list through a snapshot.
pub struct ProjectStore {
    projects: Vec<Project>,
    subscribers: Vec<Subscriber>,
    ids: IdSource,
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::with_id_source(IdSource::Random)
    }

    pub fn with_id_source(ids: IdSource) -> Self {
        Self {
            projects: Vec::new(),
            subscribers: Vec::new(),
            ids,
        }
    }

    /// Register a callback for every future mutation. There is no unsubscribe.
    pub fn subscribe(&mut self, callback: impl FnMut(Snapshot) + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    /// Append a new active project and notify subscribers
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let id = self.ids.next_id();
        let project = Project::new(id.clone(), title.into(), description.into(), people);
        debug!("Added project {} ({:?})", id, project.title());
        self.projects.push(project);
        self.notify();
        id
    }

    /// Change a project's status. Unknown ids and unchanged statuses are ignored
    /// without notifying anyone. Returns whether anything changed.
    pub fn move_project(&mut self, id: &ProjectId, status: ProjectStatus) -> bool {
        let Some(project) = self.projects.iter_mut().find(|p| p.id() == id) else {
            trace!("Ignoring move of unknown project {}", id);
            return false;
        };

        if project.status() == status {
            trace!("Project {} already {}", id, status.as_str());
            return false;
        }

        project.set_status(status);
        debug!("Moved project {} to {}", id, status.as_str());
        self.notify();
        true
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id() == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.projects.iter().cloned().collect()
    }

    fn notify(&mut self) {
        let snapshot = self.snapshot();
        for subscriber in self.subscribers.iter_mut() {
            subscriber(Arc::clone(&snapshot));
        }
    }
}
