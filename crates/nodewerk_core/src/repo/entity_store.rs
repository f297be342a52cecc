//! Immutable entity store snapshot.
//!
//! # Responsibility
//! - Validate collections once at construction.
//! - Serve read-only lookups by id and by relation.
//!
//! # Invariants
//! - Ids are unique per collection.
//! - Every `client_id`/`project_id` reference resolves inside the snapshot.
//! - Update operations never mutate `self`; they validate and return a new
//!   snapshot.

use crate::model::activity::{Activity, Credential};
use crate::model::client::{Client, ClientStatus};
use crate::model::finance::{
    Invoice, InvoiceStatus, Proposal, Retainer, RetainerStatus, RevenuePoint,
};
use crate::model::project::{Project, ProjectStatus};
use crate::model::validation::{ensure_id, ModelValidationError};
use crate::model::{find_by_id, Entity, EntityKind};
use chrono::NaiveDate;
use log::{debug, info};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Errors raised while building or updating a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum RepoError {
    /// No record of `kind` with `id`.
    NotFound { kind: EntityKind, id: String },
    /// Two records of the same kind share an id.
    DuplicateId { kind: EntityKind, id: String },
    /// A reference field points at a record that does not exist.
    DanglingReference {
        kind: EntityKind,
        id: String,
        field: &'static str,
        target: EntityKind,
        target_id: String,
    },
    Validation(ModelValidationError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
            Self::DuplicateId { kind, id } => write!(f, "duplicate {kind} id: {id}"),
            Self::DanglingReference {
                kind,
                id,
                field,
                target,
                target_id,
            } => write!(
                f,
                "{kind} {id} field `{field}` references missing {target} {target_id}"
            ),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ModelValidationError> for RepoError {
    fn from(value: ModelValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Raw collections used to build an [`EntityStore`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityCollections {
    pub clients: Vec<Client>,
    pub projects: Vec<Project>,
    pub invoices: Vec<Invoice>,
    pub retainers: Vec<Retainer>,
    pub proposals: Vec<Proposal>,
    pub activities: Vec<Activity>,
    pub credentials: Vec<Credential>,
    pub revenue: Vec<RevenuePoint>,
}

/// Read access to entity collections, consumed by the services.
pub trait EntityRepository {
    fn clients(&self) -> &[Client];
    fn projects(&self) -> &[Project];
    fn invoices(&self) -> &[Invoice];
    fn retainers(&self) -> &[Retainer];
    fn proposals(&self) -> &[Proposal];
    fn revenue(&self) -> &[RevenuePoint];
}

impl<R: EntityRepository + ?Sized> EntityRepository for &R {
    fn clients(&self) -> &[Client] {
        (**self).clients()
    }

    fn projects(&self) -> &[Project] {
        (**self).projects()
    }

    fn invoices(&self) -> &[Invoice] {
        (**self).invoices()
    }

    fn retainers(&self) -> &[Retainer] {
        (**self).retainers()
    }

    fn proposals(&self) -> &[Proposal] {
        (**self).proposals()
    }

    fn revenue(&self) -> &[RevenuePoint] {
        (**self).revenue()
    }
}

/// Validated, read-only snapshot of all dashboard entities.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityStore {
    data: EntityCollections,
}

impl EntityStore {
    /// Validates `collections` and wraps them into a snapshot.
    ///
    /// # Errors
    /// - `DuplicateId` when two records of one kind share an id.
    /// - `DanglingReference` when a client/project reference does not resolve.
    /// - `Validation` when a record breaks its own invariants.
    pub fn new(collections: EntityCollections) -> RepoResult<Self> {
        validate_collections(&collections)?;
        info!(
            "event=store_build module=repo status=ok clients={} projects={} invoices={} retainers={} proposals={}",
            collections.clients.len(),
            collections.projects.len(),
            collections.invoices.len(),
            collections.retainers.len(),
            collections.proposals.len()
        );
        Ok(Self { data: collections })
    }

    /// An empty snapshot.
    pub fn empty() -> Self {
        Self {
            data: EntityCollections::default(),
        }
    }

    pub fn activities(&self) -> &[Activity] {
        &self.data.activities
    }

    pub fn credentials(&self) -> &[Credential] {
        &self.data.credentials
    }

    pub fn client_by_id(&self, id: &str) -> Option<&Client> {
        find_by_id(&self.data.clients, id)
    }

    pub fn project_by_id(&self, id: &str) -> Option<&Project> {
        find_by_id(&self.data.projects, id)
    }

    pub fn invoice_by_id(&self, id: &str) -> Option<&Invoice> {
        find_by_id(&self.data.invoices, id)
    }

    pub fn retainer_by_id(&self, id: &str) -> Option<&Retainer> {
        find_by_id(&self.data.retainers, id)
    }

    pub fn proposal_by_id(&self, id: &str) -> Option<&Proposal> {
        find_by_id(&self.data.proposals, id)
    }

    pub fn credential_by_id(&self, id: &str) -> Option<&Credential> {
        find_by_id(&self.data.credentials, id)
    }

    /// Like [`Self::client_by_id`] but reports a missing client as error.
    pub fn require_client(&self, id: &str) -> RepoResult<&Client> {
        require(&self.data.clients, id)
    }

    /// Like [`Self::project_by_id`] but reports a missing project as error.
    pub fn require_project(&self, id: &str) -> RepoResult<&Project> {
        require(&self.data.projects, id)
    }

    /// Like [`Self::invoice_by_id`] but reports a missing invoice as error.
    pub fn require_invoice(&self, id: &str) -> RepoResult<&Invoice> {
        require(&self.data.invoices, id)
    }

    /// Project → client navigation.
    pub fn client_of_project(&self, project: &Project) -> Option<&Client> {
        self.client_by_id(&project.client_id)
    }

    /// Projects owned by `client_id`, in collection order.
    pub fn projects_by_client(&self, client_id: &str) -> Vec<&Project> {
        self.data
            .projects
            .iter()
            .filter(|p| p.client_id == client_id)
            .collect()
    }

    pub fn invoices_by_client(&self, client_id: &str) -> Vec<&Invoice> {
        self.data
            .invoices
            .iter()
            .filter(|i| i.client_id == client_id)
            .collect()
    }

    pub fn invoices_by_project(&self, project_id: &str) -> Vec<&Invoice> {
        self.data
            .invoices
            .iter()
            .filter(|i| i.project_id.as_deref() == Some(project_id))
            .collect()
    }

    pub fn retainers_by_client(&self, client_id: &str) -> Vec<&Retainer> {
        self.data
            .retainers
            .iter()
            .filter(|r| r.client_id == client_id)
            .collect()
    }

    pub fn proposals_by_client(&self, client_id: &str) -> Vec<&Proposal> {
        self.data
            .proposals
            .iter()
            .filter(|p| p.client_id == client_id)
            .collect()
    }

    pub fn clients_by_status(&self, status: ClientStatus) -> Vec<&Client> {
        self.data
            .clients
            .iter()
            .filter(|c| c.status == status)
            .collect()
    }

    pub fn projects_by_status(&self, status: ProjectStatus) -> Vec<&Project> {
        self.data
            .projects
            .iter()
            .filter(|p| p.status == status)
            .collect()
    }

    /// Returns a snapshot where invoice `id` has `status`.
    ///
    /// Moving to `Paid` records `paid_date` when given; moving away from
    /// `Paid` clears it.
    pub fn with_invoice_status(
        &self,
        id: &str,
        status: InvoiceStatus,
        paid_date: Option<NaiveDate>,
    ) -> RepoResult<Self> {
        let mut data = self.data.clone();
        let invoice = data
            .invoices
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| not_found::<Invoice>(id))?;
        let previous = invoice.status;
        invoice.status = status;
        invoice.paid_date = if status == InvoiceStatus::Paid {
            paid_date.or(invoice.paid_date)
        } else {
            None
        };
        debug!(
            "event=invoice_status module=repo status=ok invoice_id={} from={} to={}",
            id,
            previous.as_str(),
            status.as_str()
        );
        Self::new(data)
    }

    /// Shorthand for [`Self::with_invoice_status`] with `Paid`.
    pub fn mark_invoice_paid(&self, id: &str, paid_date: NaiveDate) -> RepoResult<Self> {
        self.with_invoice_status(id, InvoiceStatus::Paid, Some(paid_date))
    }

    /// Returns a snapshot with `retainer` appended.
    pub fn with_retainer(&self, retainer: Retainer) -> RepoResult<Self> {
        let mut data = self.data.clone();
        debug!(
            "event=retainer_add module=repo status=ok retainer_id={} client_id={} retainer_status={}",
            retainer.id,
            retainer.client_id,
            retainer.status.as_str()
        );
        data.retainers.push(retainer);
        Self::new(data)
    }

    /// Returns a snapshot where retainer `id` has `status`.
    pub fn with_retainer_status(&self, id: &str, status: RetainerStatus) -> RepoResult<Self> {
        let mut data = self.data.clone();
        let retainer = data
            .retainers
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| not_found::<Retainer>(id))?;
        retainer.status = status;
        Self::new(data)
    }

    /// Consumes the snapshot and returns its collections.
    pub fn into_collections(self) -> EntityCollections {
        self.data
    }
}

impl EntityRepository for EntityStore {
    fn clients(&self) -> &[Client] {
        &self.data.clients
    }

    fn projects(&self) -> &[Project] {
        &self.data.projects
    }

    fn invoices(&self) -> &[Invoice] {
        &self.data.invoices
    }

    fn retainers(&self) -> &[Retainer] {
        &self.data.retainers
    }

    fn proposals(&self) -> &[Proposal] {
        &self.data.proposals
    }

    fn revenue(&self) -> &[RevenuePoint] {
        &self.data.revenue
    }
}

fn not_found<T: Entity>(id: &str) -> RepoError {
    RepoError::NotFound {
        kind: T::KIND,
        id: id.to_string(),
    }
}

fn require<'a, T: Entity>(items: &'a [T], id: &str) -> RepoResult<&'a T> {
    find_by_id(items, id).ok_or_else(|| not_found::<T>(id))
}

fn ensure_unique_ids<T: Entity>(items: &[T]) -> RepoResult<HashSet<&str>> {
    let mut ids = HashSet::with_capacity(items.len());
    for item in items {
        ensure_id(T::KIND, item.id())?;
        if !ids.insert(item.id()) {
            return Err(RepoError::DuplicateId {
                kind: T::KIND,
                id: item.id().to_string(),
            });
        }
    }
    Ok(ids)
}

fn ensure_reference(
    known: &HashSet<&str>,
    kind: EntityKind,
    id: &str,
    field: &'static str,
    target: EntityKind,
    target_id: &str,
) -> RepoResult<()> {
    if known.contains(target_id) {
        return Ok(());
    }
    Err(RepoError::DanglingReference {
        kind,
        id: id.to_string(),
        field,
        target,
        target_id: target_id.to_string(),
    })
}

fn validate_collections(data: &EntityCollections) -> RepoResult<()> {
    let client_ids = ensure_unique_ids(&data.clients)?;
    let project_ids = ensure_unique_ids(&data.projects)?;
    ensure_unique_ids(&data.invoices)?;
    ensure_unique_ids(&data.retainers)?;
    ensure_unique_ids(&data.proposals)?;
    ensure_unique_ids(&data.activities)?;
    ensure_unique_ids(&data.credentials)?;

    for client in &data.clients {
        client.validate()?;
    }

    for project in &data.projects {
        project.validate()?;
        ensure_reference(
            &client_ids,
            EntityKind::Project,
            &project.id,
            "clientId",
            EntityKind::Client,
            &project.client_id,
        )?;
    }

    for invoice in &data.invoices {
        invoice.validate()?;
        ensure_reference(
            &client_ids,
            EntityKind::Invoice,
            &invoice.id,
            "clientId",
            EntityKind::Client,
            &invoice.client_id,
        )?;
        if let Some(project_id) = invoice.project_id.as_deref() {
            ensure_reference(
                &project_ids,
                EntityKind::Invoice,
                &invoice.id,
                "projectId",
                EntityKind::Project,
                project_id,
            )?;
        }
    }

    for retainer in &data.retainers {
        retainer.validate()?;
        ensure_reference(
            &client_ids,
            EntityKind::Retainer,
            &retainer.id,
            "clientId",
            EntityKind::Client,
            &retainer.client_id,
        )?;
    }

    for proposal in &data.proposals {
        proposal.validate()?;
        ensure_reference(
            &client_ids,
            EntityKind::Proposal,
            &proposal.id,
            "clientId",
            EntityKind::Client,
            &proposal.client_id,
        )?;
    }

    Ok(())
}
