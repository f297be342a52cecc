//! Client records and pipeline status.

use crate::model::validation::{ensure_id, ModelValidationError};
use crate::model::{Entity, EntityKind};
use serde::{Deserialize, Serialize};

/// Sales pipeline stage of a client.
///
/// Variant order follows the pipeline from first contact to finished work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClientStatus {
    Lead,
    Proposal,
    Active,
    Paused,
    Completed,
}

impl ClientStatus {
    /// All stages in pipeline order.
    pub const ALL: [ClientStatus; 5] = [
        Self::Lead,
        Self::Proposal,
        Self::Active,
        Self::Paused,
        Self::Completed,
    ];

    /// Stages shown on the dashboard pipeline; paused clients are hidden.
    pub const PIPELINE_STAGES: [ClientStatus; 4] =
        [Self::Lead, Self::Proposal, Self::Active, Self::Completed];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lead => "lead",
            Self::Proposal => "proposal",
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "lead" => Some(Self::Lead),
            "proposal" => Some(Self::Proposal),
            "active" => Some(Self::Active),
            "paused" => Some(Self::Paused),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Whether the client is still being acquired (lead or proposal stage).
    pub fn is_prospect(self) -> bool {
        matches!(self, Self::Lead | Self::Proposal)
    }
}

/// Payment standing shown on client cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Overdue,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Pending => "pending",
            Self::Overdue => "overdue",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "paid" => Some(Self::Paid),
            "pending" => Some(Self::Pending),
            "overdue" => Some(Self::Overdue),
            _ => None,
        }
    }
}

/// Agency client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    /// Contact person.
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub status: ClientStatus,
    /// Monthly recurring revenue attributed to this client.
    pub mrr: f64,
    /// Number of projects as displayed on the card; not derived.
    #[serde(rename = "projects")]
    pub project_count: u32,
    pub tags: Vec<String>,
    /// Free-text start label such as `Jan 2025`, or `-` for prospects.
    #[serde(rename = "startDate")]
    pub start_label: String,
    pub lifetime_value: f64,
    /// Relative, human-readable label (`vor 2 Stunden`).
    pub last_contact: String,
    pub avatar: Option<String>,
    pub contract_model: Option<String>,
    pub contract_terms: Option<String>,
    pub next_invoice: Option<String>,
    pub payment_status: Option<PaymentStatus>,
}

impl Client {
    /// Creates a client with the required fields; optional metadata is unset.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        company: impl Into<String>,
        status: ClientStatus,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            company: company.into(),
            email: String::new(),
            phone: String::new(),
            status,
            mrr: 0.0,
            project_count: 0,
            tags: Vec::new(),
            start_label: "-".to_string(),
            lifetime_value: 0.0,
            last_contact: String::new(),
            avatar: None,
            contract_model: None,
            contract_terms: None,
            next_invoice: None,
            payment_status: None,
        }
    }

    /// Two-letter initials used as avatar fallback.
    pub fn initials(&self) -> String {
        self.name.chars().take(2).collect::<String>().to_uppercase()
    }

    pub fn validate(&self) -> Result<(), ModelValidationError> {
        ensure_id(EntityKind::Client, &self.id)
    }
}

impl Entity for Client {
    const KIND: EntityKind = EntityKind::Client;

    fn id(&self) -> &str {
        &self.id
    }
}
