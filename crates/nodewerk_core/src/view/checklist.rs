//! Project task checklist with phase groups.
//!
//! # Invariants
//! - Group order is the order in which a group label first appears.
//! - Group progress is derived from the current task list on every call.

use crate::model::project::ProjectTask;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// Completed/total counters for one phase group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupProgress {
    pub group: String,
    pub completed: usize,
    pub total: usize,
}

impl GroupProgress {
    pub fn is_done(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

/// Checklist-local copy of a project's tasks.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskChecklist {
    tasks: Vec<ProjectTask>,
    collapsed: BTreeSet<String>,
}

impl TaskChecklist {
    /// Starts with every group expanded.
    pub fn new(tasks: Vec<ProjectTask>) -> Self {
        Self {
            tasks,
            collapsed: BTreeSet::new(),
        }
    }

    pub fn tasks(&self) -> &[ProjectTask] {
        &self.tasks
    }

    /// Flips the completion flag of task `id`.
    ///
    /// Returns the new flag, or `None` if no task has that id.
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.completed = !task.completed;
        debug!(
            "event=task_toggle module=view status=ok task_id={} completed={}",
            id, task.completed
        );
        Some(task.completed)
    }

    /// Distinct group labels in first-appearance order.
    pub fn groups(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.tasks
            .iter()
            .map(|task| task.group.as_str())
            .filter(|group| seen.insert(*group))
            .collect()
    }

    pub fn tasks_in_group<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a ProjectTask> {
        self.tasks.iter().filter(move |t| t.group == group)
    }

    pub fn group_progress(&self) -> Vec<GroupProgress> {
        self.groups()
            .into_iter()
            .map(|group| {
                let (completed, total) = self
                    .tasks_in_group(group)
                    .fold((0, 0), |(done, all), task| {
                        (done + usize::from(task.completed), all + 1)
                    });
                GroupProgress {
                    group: group.to_string(),
                    completed,
                    total,
                }
            })
            .collect()
    }

    pub fn is_expanded(&self, group: &str) -> bool {
        !self.collapsed.contains(group)
    }

    /// Collapses an expanded group or expands a collapsed one.
    ///
    /// Returns whether the group is expanded afterwards.
    pub fn toggle_group(&mut self, group: &str) -> bool {
        if self.collapsed.remove(group) {
            return true;
        }
        self.collapsed.insert(group.to_string());
        false
    }
}
