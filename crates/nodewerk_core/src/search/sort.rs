//! Sort and group operators for project and invoice lists.
//!
//! # Invariants
//! - Text fields compare lexicographically, numeric fields numerically and
//!   date fields chronologically.
//! - Enumerated fields (status, priority) compare by their declared rank,
//!   not by their wire string.
//! - Descending order reverses the comparator, so ties keep input order in
//!   both directions.

use crate::model::client::{Client, ClientStatus};
use crate::model::finance::Invoice;
use crate::model::project::{Project, ProjectStatus};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Sortable columns of the project list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectSortField {
    Name,
    ClientName,
    Status,
    Priority,
    Progress,
    #[default]
    DueDate,
    Value,
}

pub fn compare_projects(a: &Project, b: &Project, field: ProjectSortField) -> Ordering {
    match field {
        ProjectSortField::Name => a.name.cmp(&b.name),
        ProjectSortField::ClientName => a.client_name.cmp(&b.client_name),
        ProjectSortField::Status => a.status.cmp(&b.status),
        ProjectSortField::Priority => a.priority.cmp(&b.priority),
        ProjectSortField::Progress => a.progress.cmp(&b.progress),
        ProjectSortField::DueDate => a.due_date.cmp(&b.due_date),
        ProjectSortField::Value => a.value.total_cmp(&b.value),
    }
}

/// Returns `projects` as a new vector ordered by `field`.
pub fn sort_projects<'a, I>(
    projects: I,
    field: ProjectSortField,
    direction: SortDirection,
) -> Vec<&'a Project>
where
    I: IntoIterator<Item = &'a Project>,
{
    let mut sorted: Vec<&Project> = projects.into_iter().collect();
    sorted.sort_by(|a, b| direction.apply(compare_projects(a, b, field)));
    sorted
}

/// Header-click sort state of the project list view.
///
/// Starts at due date ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub field: ProjectSortField,
    pub direction: SortDirection,
}

impl SortState {
    /// Selecting the active field flips the direction; selecting another
    /// field switches to it in ascending order.
    pub fn select(&mut self, field: ProjectSortField) {
        if self.field == field {
            self.direction = self.direction.reversed();
        } else {
            self.field = field;
            self.direction = SortDirection::Ascending;
        }
    }

    pub fn sort<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        sort_projects(projects, self.field, self.direction)
    }
}

/// Sortable columns of the invoice table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceSortField {
    Number,
    ClientName,
    Status,
    Total,
    DueDate,
}

pub fn compare_invoices(a: &Invoice, b: &Invoice, field: InvoiceSortField) -> Ordering {
    match field {
        InvoiceSortField::Number => a.invoice_number.cmp(&b.invoice_number),
        InvoiceSortField::ClientName => a.client_name.cmp(&b.client_name),
        InvoiceSortField::Status => a.status.cmp(&b.status),
        InvoiceSortField::Total => a.total.total_cmp(&b.total),
        InvoiceSortField::DueDate => a.due_date.cmp(&b.due_date),
    }
}

pub fn sort_invoices<'a, I>(
    invoices: I,
    field: InvoiceSortField,
    direction: SortDirection,
) -> Vec<&'a Invoice>
where
    I: IntoIterator<Item = &'a Invoice>,
{
    let mut sorted: Vec<&Invoice> = invoices.into_iter().collect();
    sorted.sort_by(|a, b| direction.apply(compare_invoices(a, b, field)));
    sorted
}

/// Records sharing one key, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Group<'a, K, T> {
    pub key: K,
    pub items: Vec<&'a T>,
}

impl<K, T> Group<'_, K, T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Groups projects into Kanban columns in board order.
///
/// Every column is present, including empty ones.
pub fn group_projects_by_status(projects: &[Project]) -> Vec<Group<'_, ProjectStatus, Project>> {
    ProjectStatus::ALL
        .into_iter()
        .map(|status| Group {
            key: status,
            items: projects.iter().filter(|p| p.status == status).collect(),
        })
        .collect()
}

/// Groups clients into the given pipeline `stages`, in stage order.
pub fn group_clients_by_status<'a>(
    clients: &'a [Client],
    stages: &[ClientStatus],
) -> Vec<Group<'a, ClientStatus, Client>> {
    stages
        .iter()
        .map(|stage| Group {
            key: *stage,
            items: clients.iter().filter(|c| c.status == *stage).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{ProjectSortField, SortDirection, SortState};

    #[test]
    fn sort_state_toggles_direction_on_same_field() {
        let mut state = SortState::default();
        assert_eq!(state.field, ProjectSortField::DueDate);
        assert_eq!(state.direction, SortDirection::Ascending);

        state.select(ProjectSortField::DueDate);
        assert_eq!(state.direction, SortDirection::Descending);

        state.select(ProjectSortField::Name);
        assert_eq!(state.field, ProjectSortField::Name);
        assert_eq!(state.direction, SortDirection::Ascending);
    }
}
