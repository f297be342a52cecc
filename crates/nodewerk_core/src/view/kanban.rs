//! Kanban board drag-and-drop state.
//!
//! # Invariants
//! - Dropping a project onto its current column changes nothing.
//! - Entering `completed` from another column forces `progress` to 100 and
//!   reports a one-shot `Completed` outcome.
//! - Unknown project ids leave the board untouched.

use crate::model::project::{Project, ProjectStatus};
use crate::search::sort::{group_projects_by_status, Group};
use log::debug;

/// Result of one drop gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KanbanOutcome {
    /// No project with the dropped id is on the board.
    UnknownProject,
    /// Source and target column are the same.
    Unchanged,
    /// Project moved between two columns.
    Moved {
        from: ProjectStatus,
        to: ProjectStatus,
    },
    /// Project entered the completed column; the board celebrates once.
    Completed { from: ProjectStatus },
}

impl KanbanOutcome {
    pub fn changed(self) -> bool {
        matches!(self, Self::Moved { .. } | Self::Completed { .. })
    }

    pub fn should_celebrate(self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

/// Board-local copy of the project list.
#[derive(Debug, Clone, PartialEq)]
pub struct KanbanBoard {
    projects: Vec<Project>,
}

impl KanbanBoard {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Columns in board order, each with its projects.
    pub fn columns(&self) -> Vec<Group<'_, ProjectStatus, Project>> {
        group_projects_by_status(&self.projects)
    }

    /// Applies a drop of project `id` onto the `target` column.
    pub fn drop_project(&mut self, id: &str, target: ProjectStatus) -> KanbanOutcome {
        let Some(project) = self.projects.iter_mut().find(|p| p.id == id) else {
            debug!(
                "event=kanban_drop module=view status=skipped reason=unknown_project project_id={id}"
            );
            return KanbanOutcome::UnknownProject;
        };

        let from = project.status;
        let outcome = transition(project, target);
        if outcome.changed() {
            debug!(
                "event=kanban_drop module=view status=ok project_id={} from={} to={}",
                id,
                from.as_str(),
                target.as_str()
            );
        }
        outcome
    }
}

/// Moves one project to `target`, returning what happened.
pub fn transition(project: &mut Project, target: ProjectStatus) -> KanbanOutcome {
    let from = project.status;
    if from == target {
        return KanbanOutcome::Unchanged;
    }

    project.status = target;
    if target == ProjectStatus::Completed {
        project.progress = 100;
        return KanbanOutcome::Completed { from };
    }
    KanbanOutcome::Moved { from, to: target }
}
