//! Project, task and milestone records.
//!
//! # Invariants
//! - `progress` is a percentage in `0..=100`.
//! - Task ids are unique within their project.
//! - `client_id` is a weak reference; resolution is checked by the store.

use crate::model::validation::{ensure_id, ModelValidationError};
use crate::model::{Entity, EntityKind};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Kanban column of a project.
///
/// Variant order is the board's left-to-right column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Backlog,
    InProgress,
    Review,
    Completed,
}

impl ProjectStatus {
    /// All columns in board order.
    pub const ALL: [ProjectStatus; 4] = [
        Self::Backlog,
        Self::InProgress,
        Self::Review,
        Self::Completed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::InProgress => "in-progress",
            Self::Review => "review",
            Self::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "backlog" => Some(Self::Backlog),
            "in-progress" => Some(Self::InProgress),
            "review" => Some(Self::Review),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Column heading shown on the board.
    pub fn title(self) -> &'static str {
        match self {
            Self::Backlog => "Backlog",
            Self::InProgress => "In Progress",
            Self::Review => "Review",
            Self::Completed => "Completed",
        }
    }
}

/// Project priority, ordered from least to most pressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "urgent" => Some(Self::Urgent),
            _ => None,
        }
    }
}

/// Task priority. Tasks never use the `urgent` level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// Timeline state of a milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MilestoneStatus {
    Completed,
    Active,
    Pending,
}

impl MilestoneStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Active => "active",
            Self::Pending => "pending",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "completed" => Some(Self::Completed),
            "active" => Some(Self::Active),
            "pending" => Some(Self::Pending),
            _ => None,
        }
    }
}

/// Checklist entry inside a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTask {
    pub id: String,
    pub title: String,
    pub completed: bool,
    pub due_date: Option<NaiveDate>,
    pub assignee: Option<String>,
    pub priority: Option<TaskPriority>,
    /// Free-text phase label, e.g. `SETUP`.
    pub group: String,
}

impl ProjectTask {
    pub fn new(id: impl Into<String>, title: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            completed: false,
            due_date: None,
            assignee: None,
            priority: None,
            group: group.into(),
        }
    }
}

impl Entity for ProjectTask {
    const KIND: EntityKind = EntityKind::Task;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Dated checkpoint on a project timeline, independent of the task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
    pub status: MilestoneStatus,
}

/// Client project tracked on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub client_id: String,
    /// Denormalised client display name used by search and list views.
    pub client_name: String,
    pub client_avatar: Option<String>,
    pub status: ProjectStatus,
    pub priority: Priority,
    /// Completion percentage in `0..=100`.
    pub progress: u8,
    pub due_date: NaiveDate,
    pub value: f64,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub comments_count: u32,
    pub attachments_count: u32,
    pub tasks: Vec<ProjectTask>,
    pub milestones: Vec<Milestone>,
}

impl Project {
    /// Creates a project with empty task/milestone lists and zero progress.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        client_id: impl Into<String>,
        client_name: impl Into<String>,
        status: ProjectStatus,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            client_id: client_id.into(),
            client_name: client_name.into(),
            client_avatar: None,
            status,
            priority: Priority::Medium,
            progress: 0,
            due_date,
            value: 0.0,
            description: None,
            tags: Vec::new(),
            comments_count: 0,
            attachments_count: 0,
            tasks: Vec::new(),
            milestones: Vec::new(),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == ProjectStatus::Completed
    }

    /// Share of completed milestones in `0.0..=1.0`.
    ///
    /// Returns `None` for projects without milestones.
    pub fn milestone_completion(&self) -> Option<f64> {
        if self.milestones.is_empty() {
            return None;
        }
        let done = self
            .milestones
            .iter()
            .filter(|m| m.status == MilestoneStatus::Completed)
            .count();
        Some(done as f64 / self.milestones.len() as f64)
    }

    /// Signed whole days from `today` until the due date.
    pub fn days_until_due(&self, today: NaiveDate) -> i64 {
        (self.due_date - today).num_days()
    }

    pub fn validate(&self) -> Result<(), ModelValidationError> {
        ensure_id(EntityKind::Project, &self.id)?;
        if self.progress > 100 {
            return Err(ModelValidationError::ProgressOutOfRange {
                project_id: self.id.clone(),
                progress: self.progress,
            });
        }

        let mut seen = HashSet::new();
        for task in &self.tasks {
            ensure_id(EntityKind::Task, &task.id)?;
            if !seen.insert(task.id.as_str()) {
                return Err(ModelValidationError::DuplicateTaskId {
                    project_id: self.id.clone(),
                    task_id: task.id.clone(),
                });
            }
        }
        Ok(())
    }
}

impl Entity for Project {
    const KIND: EntityKind = EntityKind::Project;

    fn id(&self) -> &str {
        &self.id
    }
}
