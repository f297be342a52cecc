//! Core domain logic for the Nodewerk client dashboard.
//! This crate owns the entity records, their invariants and every derived
//! figure the dashboard shows.

pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status, LogSettings};
pub use model::activity::{Activity, ActivityKind, Credential};
pub use model::client::{Client, ClientStatus, PaymentStatus};
pub use model::finance::{
    Invoice, InvoiceLineItem, InvoiceStatus, Proposal, ProposalStatus, Retainer, RetainerStatus,
    RevenuePoint,
};
pub use model::project::{Milestone, Priority, Project, ProjectStatus, ProjectTask};
pub use model::validation::ModelValidationError;
pub use model::{Entity, EntityKind};
pub use repo::entity_store::{
    EntityCollections, EntityRepository, EntityStore, RepoError, RepoResult,
};
pub use repo::sample::{sample_collections, sample_store};
pub use search::filter::{ClientFilter, ProjectFilter, StatusFilter, TextQuery};
pub use search::sort::{ProjectSortField, SortDirection, SortState};
pub use service::dashboard_service::{DashboardService, DashboardSummary};
pub use service::finance_service::{FinanceOverview, FinanceService};
pub use view::checklist::{GroupProgress, TaskChecklist};
pub use view::credential::CredentialReveal;
pub use view::kanban::{KanbanBoard, KanbanOutcome};
pub use view::selection::InvoiceSelection;

/// Minimal health-check API for host wiring.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
