//! Dashboard home aggregates.
//!
//! # Responsibility
//! - Derive the counters, pipeline value and deadline list of the home view.
//! - Provide time-relative helpers (greeting, days until a date).
//!
//! # Invariants
//! - Completed projects never appear in the deadline list.
//! - Deadline order is due date ascending; ties keep collection order.

use crate::model::client::ClientStatus;
use crate::model::project::Project;
use crate::repo::entity_store::EntityRepository;
use crate::search::sort::{sort_projects, ProjectSortField, SortDirection};
use crate::service::finance_service::FinanceService;
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

/// Number of entries in the home view deadline list.
pub const DEFAULT_DEADLINE_LIMIT: usize = 4;
/// Pipeline value floor before prospects are added.
pub const PIPELINE_BASELINE: f64 = 4500.0;
/// Assumed value of a prospect that has no recurring revenue yet.
pub const DEFAULT_PROSPECT_VALUE: f64 = 1500.0;

/// Time-of-day greeting for the home header.
pub fn greeting_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "Guten Morgen"
    } else if hour < 18 {
        "Guten Tag"
    } else {
        "Guten Abend"
    }
}

/// Signed whole days from `today` until `date`.
pub fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    (date - today).num_days()
}

/// One row of the deadline list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeadlineEntry {
    pub project_id: String,
    pub project_name: String,
    pub client_name: String,
    pub due_date: NaiveDate,
    /// Negative when the due date has passed.
    pub days_until: i64,
}

/// Home view roll-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub greeting: String,
    pub total_clients: usize,
    pub active_clients: usize,
    pub running_projects: usize,
    pub mrr: f64,
    pub pipeline_value: f64,
    pub outstanding_amount: f64,
    pub deadlines: Vec<DeadlineEntry>,
}

/// Dashboard aggregate service over a repository implementation.
pub struct DashboardService<R: EntityRepository> {
    repo: R,
}

impl<R: EntityRepository> DashboardService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn active_clients_count(&self) -> usize {
        self.repo
            .clients()
            .iter()
            .filter(|c| c.status == ClientStatus::Active)
            .count()
    }

    /// Estimated value of the sales pipeline.
    ///
    /// Starts at [`PIPELINE_BASELINE`] and adds, for every lead or proposal
    /// client, its MRR or [`DEFAULT_PROSPECT_VALUE`] when the MRR is zero.
    pub fn pipeline_value(&self) -> f64 {
        self.repo
            .clients()
            .iter()
            .filter(|c| c.status.is_prospect())
            .fold(PIPELINE_BASELINE, |sum, c| {
                let value = if c.mrr > 0.0 {
                    c.mrr
                } else {
                    DEFAULT_PROSPECT_VALUE
                };
                sum + value
            })
    }

    /// Projects not yet completed.
    pub fn running_projects_count(&self) -> usize {
        self.repo
            .projects()
            .iter()
            .filter(|p| !p.is_completed())
            .count()
    }

    /// The `limit` open projects due soonest.
    pub fn upcoming_deadlines(&self, limit: usize) -> Vec<&Project> {
        let open = self.repo.projects().iter().filter(|p| !p.is_completed());
        let mut sorted = sort_projects(open, ProjectSortField::DueDate, SortDirection::Ascending);
        sorted.truncate(limit);
        sorted
    }

    /// Builds the home view summary as seen on `today` at `hour`.
    pub fn summary(&self, today: NaiveDate, hour: u32) -> DashboardSummary {
        let finance = FinanceService::new(&self.repo);
        let deadlines: Vec<DeadlineEntry> = self
            .upcoming_deadlines(DEFAULT_DEADLINE_LIMIT)
            .into_iter()
            .map(|p| DeadlineEntry {
                project_id: p.id.clone(),
                project_name: p.name.clone(),
                client_name: p.client_name.clone(),
                due_date: p.due_date,
                days_until: days_until(p.due_date, today),
            })
            .collect();

        debug!(
            "event=dashboard_summary module=service status=ok today={} deadlines={}",
            today,
            deadlines.len()
        );

        DashboardSummary {
            greeting: greeting_for_hour(hour).to_string(),
            total_clients: self.repo.clients().len(),
            active_clients: self.active_clients_count(),
            running_projects: self.running_projects_count(),
            mrr: finance.total_mrr(),
            pipeline_value: self.pipeline_value(),
            outstanding_amount: finance.outstanding_amount(),
            deadlines,
        }
    }
}
