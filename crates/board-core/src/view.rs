// crates/board-core/src/view.rs
// View models behind the list and item components

use crate::drag::{DragData, DragPayload, Draggable};
use crate::error::Result;
use crate::model::{Project, ProjectStatus};

/// "1 person" or "N persons"
pub fn persons_label(people: u32) -> String {
    if people == 1 {
        "1 person".to_string()
    } else {
        format!("{} persons", people)
    }
}

/// One column of the board: the projects of a single status
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectList {
    status: ProjectStatus,
    projects: Vec<Project>,
}

impl ProjectList {
    pub fn new(status: ProjectStatus) -> Self {
        Self {
            status,
            projects: Vec::new(),
        }
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// The subset of a snapshot belonging in this column, in store order
    pub fn filter(status: ProjectStatus, snapshot: &[Project]) -> Vec<Project> {
        snapshot
            .iter()
            .filter(|p| p.status() == status)
            .cloned()
            .collect()
    }

    /// Replace the render list from a fresh snapshot
    pub fn assign(&mut self, snapshot: &[Project]) {
        self.projects = Self::filter(self.status, snapshot);
    }

    pub fn heading(&self) -> String {
        format!("{} PROJECTS", self.status.label())
    }

    pub fn element_id(&self) -> String {
        format!("{}-projects", self.status.as_str())
    }

    pub fn list_id(&self) -> String {
        format!("{}-projects-list", self.status.as_str())
    }
}

/// A single rendered project; the drag source of the protocol
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectItem {
    project: Project,
}

impl ProjectItem {
    pub fn new(project: Project) -> Self {
        Self { project }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn persons(&self) -> String {
        persons_label(self.project.people())
    }

    /// Line shown under the title, e.g. "3 persons assigned"
    pub fn assigned(&self) -> String {
        format!("{} assigned", self.persons())
    }
}

impl Draggable for ProjectItem {
    fn drag_start(&self, data: &mut dyn DragData) -> Result<()> {
        DragPayload::new(self.project.id().clone()).write_to(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drag::{DRAG_FORMAT, DragEffect, MemoryTransfer};
    use crate::store::{IdSource, ProjectStore};

    #[test]
    fn test_persons_label() {
        assert_eq!(persons_label(1), "1 person");
        assert_eq!(persons_label(2), "2 persons");
        assert_eq!(persons_label(5), "5 persons");
    }

    #[test]
    fn test_list_ids_and_heading() {
        let list = ProjectList::new(ProjectStatus::Active);
        assert_eq!(list.heading(), "ACTIVE PROJECTS");
        assert_eq!(list.element_id(), "active-projects");
        assert_eq!(list.list_id(), "active-projects-list");

        let list = ProjectList::new(ProjectStatus::Finished);
        assert_eq!(list.heading(), "FINISHED PROJECTS");
        assert_eq!(list.list_id(), "finished-projects-list");
    }

    #[test]
    fn test_assign_filters_by_status() {
        let mut store = ProjectStore::with_id_source(IdSource::sequential());
        let a = store.add_project("a", "first one", 1);
        store.add_project("b", "second one", 2);
        store.move_project(&a, ProjectStatus::Finished);

        let mut active = ProjectList::new(ProjectStatus::Active);
        let mut finished = ProjectList::new(ProjectStatus::Finished);
        active.assign(store.projects());
        finished.assign(store.projects());

        assert_eq!(active.projects().len(), 1);
        assert_eq!(active.projects()[0].title(), "b");
        assert_eq!(finished.projects().len(), 1);
        assert_eq!(finished.projects()[0].title(), "a");
    }

    #[test]
    fn test_assign_replaces_previous_list() {
        let mut store = ProjectStore::with_id_source(IdSource::sequential());
        let a = store.add_project("a", "first one", 1);
        let mut active = ProjectList::new(ProjectStatus::Active);
        active.assign(store.projects());
        assert_eq!(active.projects().len(), 1);

        store.move_project(&a, ProjectStatus::Finished);
        active.assign(store.projects());
        assert!(active.projects().is_empty());
    }

    #[test]
    fn test_item_labels() {
        let mut store = ProjectStore::with_id_source(IdSource::sequential());
        store.add_project("Solo", "one person job", 1);
        let item = ProjectItem::new(store.projects()[0].clone());
        assert_eq!(item.assigned(), "1 person assigned");
    }

    #[test]
    fn test_item_drag_start_writes_id() {
        let mut store = ProjectStore::with_id_source(IdSource::sequential());
        let id = store.add_project("a", "first one", 4);
        let item = ProjectItem::new(store.projects()[0].clone());

        let mut data = MemoryTransfer::new();
        item.drag_start(&mut data).unwrap();
        item.drag_end();

        assert_eq!(data.get_data(DRAG_FORMAT), Some(id.to_string()));
        assert_eq!(data.effect_allowed(), Some(DragEffect::Move));
    }
}
