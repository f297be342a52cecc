//! Invoice, retainer, proposal and revenue records.
//!
//! # Invariants
//! - Invoice `total == subtotal + tax_amount`.
//! - Invoice `subtotal` is the sum of its line item totals.
//! - Invoice numbers follow `INV-<digits>`.

use crate::model::validation::{amounts_match, ensure_id, ModelValidationError};
use crate::model::{Entity, EntityKind};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Length of one retainer billing cycle in days.
pub const BILLING_CYCLE_DAYS: i64 = 30;

static INVOICE_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^INV-\d+$").expect("valid invoice number regex"));

/// Invoice lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Pending,
    Paid,
    Overdue,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 5] = [
        Self::Draft,
        Self::Sent,
        Self::Pending,
        Self::Paid,
        Self::Overdue,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Sent => "sent",
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "draft" => Some(Self::Draft),
            "sent" => Some(Self::Sent),
            "pending" => Some(Self::Pending),
            "paid" => Some(Self::Paid),
            "overdue" => Some(Self::Overdue),
            _ => None,
        }
    }

    /// Pending and overdue invoices count towards the outstanding amount.
    pub fn is_outstanding(self) -> bool {
        matches!(self, Self::Pending | Self::Overdue)
    }
}

/// One billed position on an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLineItem {
    pub id: String,
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total: f64,
}

impl InvoiceLineItem {
    /// Creates a line item with `total = quantity * unit_price`.
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        quantity: f64,
        unit_price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            quantity,
            unit_price,
            total: quantity * unit_price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub invoice_number: String,
    pub client_id: String,
    pub client_name: String,
    pub project_id: Option<String>,
    pub status: InvoiceStatus,
    pub line_items: Vec<InvoiceLineItem>,
    pub subtotal: f64,
    /// Tax rate in percent, e.g. `19.0`.
    pub tax_rate: f64,
    pub tax_amount: f64,
    pub total: f64,
    pub due_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
    pub created_at: NaiveDate,
    pub sent_at: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl Invoice {
    /// Builds an invoice and computes subtotal, tax amount and total from
    /// the line items.
    #[allow(clippy::too_many_arguments)]
    pub fn from_line_items(
        id: impl Into<String>,
        invoice_number: impl Into<String>,
        client_id: impl Into<String>,
        client_name: impl Into<String>,
        status: InvoiceStatus,
        line_items: Vec<InvoiceLineItem>,
        tax_rate: f64,
        created_at: NaiveDate,
        due_date: NaiveDate,
    ) -> Self {
        let subtotal: f64 = line_items.iter().map(|item| item.total).sum();
        let tax_amount = subtotal * tax_rate / 100.0;
        Self {
            id: id.into(),
            invoice_number: invoice_number.into(),
            client_id: client_id.into(),
            client_name: client_name.into(),
            project_id: None,
            status,
            line_items,
            subtotal,
            tax_rate,
            tax_amount,
            total: subtotal + tax_amount,
            due_date,
            paid_date: None,
            created_at,
            sent_at: None,
            notes: None,
        }
    }

    pub fn is_outstanding(&self) -> bool {
        self.status.is_outstanding()
    }

    pub fn validate(&self) -> Result<(), ModelValidationError> {
        ensure_id(EntityKind::Invoice, &self.id)?;
        if !INVOICE_NUMBER_RE.is_match(&self.invoice_number) {
            return Err(ModelValidationError::InvalidInvoiceNumber {
                invoice_id: self.id.clone(),
                number: self.invoice_number.clone(),
            });
        }

        for item in &self.line_items {
            let expected = item.quantity * item.unit_price;
            if !amounts_match(item.total, expected) {
                return Err(ModelValidationError::LineItemTotalMismatch {
                    invoice_id: self.id.clone(),
                    line_item_id: item.id.clone(),
                    expected,
                    actual: item.total,
                });
            }
        }

        let expected_subtotal: f64 = self.line_items.iter().map(|item| item.total).sum();
        if !amounts_match(self.subtotal, expected_subtotal) {
            return Err(ModelValidationError::SubtotalMismatch {
                invoice_id: self.id.clone(),
                expected: expected_subtotal,
                actual: self.subtotal,
            });
        }

        let expected_tax = self.subtotal * self.tax_rate / 100.0;
        if !amounts_match(self.tax_amount, expected_tax) {
            return Err(ModelValidationError::TaxAmountMismatch {
                invoice_id: self.id.clone(),
                expected: expected_tax,
                actual: self.tax_amount,
            });
        }

        let expected_total = self.subtotal + self.tax_amount;
        if !amounts_match(self.total, expected_total) {
            return Err(ModelValidationError::TotalMismatch {
                invoice_id: self.id.clone(),
                expected: expected_total,
                actual: self.total,
            });
        }
        Ok(())
    }
}

impl Entity for Invoice {
    const KIND: EntityKind = EntityKind::Invoice;

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RetainerStatus {
    Active,
    Paused,
    Cancelled,
}

impl RetainerStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "active" => Some(Self::Active),
            "paused" => Some(Self::Paused),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RetainerPaymentStatus {
    Paid,
    Pending,
    Upcoming,
}

impl RetainerPaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Pending => "pending",
            Self::Upcoming => "upcoming",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "paid" => Some(Self::Paid),
            "pending" => Some(Self::Pending),
            "upcoming" => Some(Self::Upcoming),
            _ => None,
        }
    }
}

/// One month in a retainer's payment history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetainerPayment {
    /// Month label such as `Jan 2025`.
    pub month: String,
    pub amount: f64,
    pub status: RetainerPaymentStatus,
}

/// Recurring monthly billing agreement with a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Retainer {
    pub id: String,
    pub client_id: String,
    pub client_name: String,
    /// Monthly amount.
    pub amount: f64,
    pub start_date: NaiveDate,
    pub minimum_term_months: u32,
    /// 1-based index of the running month.
    pub current_month: u32,
    pub status: RetainerStatus,
    pub next_billing_date: NaiveDate,
    pub payment_history: Vec<RetainerPayment>,
}

impl Retainer {
    pub fn is_active(&self) -> bool {
        self.status == RetainerStatus::Active
    }

    pub fn days_until_billing(&self, today: NaiveDate) -> i64 {
        (self.next_billing_date - today).num_days()
    }

    /// Elapsed share of the current billing cycle in percent, clamped to
    /// `0.0..=100.0`.
    pub fn billing_cycle_progress(&self, today: NaiveDate) -> f64 {
        let remaining = self.days_until_billing(today);
        let elapsed = (BILLING_CYCLE_DAYS - remaining) as f64 / BILLING_CYCLE_DAYS as f64;
        (elapsed * 100.0).clamp(0.0, 100.0)
    }

    /// Share of the minimum term already served, clamped to `0.0..=1.0`.
    ///
    /// A retainer without minimum term counts as fully served.
    pub fn term_progress(&self) -> f64 {
        if self.minimum_term_months == 0 {
            return 1.0;
        }
        (f64::from(self.current_month) / f64::from(self.minimum_term_months)).clamp(0.0, 1.0)
    }

    pub fn validate(&self) -> Result<(), ModelValidationError> {
        ensure_id(EntityKind::Retainer, &self.id)
    }
}

impl Entity for Retainer {
    const KIND: EntityKind = EntityKind::Retainer;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Pre-sale document lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProposalStatus {
    Draft,
    Sent,
    Viewed,
    Accepted,
    Declined,
    Expired,
}

impl ProposalStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Sent => "sent",
            Self::Viewed => "viewed",
            Self::Accepted => "accepted",
            Self::Declined => "declined",
            Self::Expired => "expired",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "draft" => Some(Self::Draft),
            "sent" => Some(Self::Sent),
            "viewed" => Some(Self::Viewed),
            "accepted" => Some(Self::Accepted),
            "declined" => Some(Self::Declined),
            "expired" => Some(Self::Expired),
            _ => None,
        }
    }

    /// Sent or viewed proposals are awaiting a client decision.
    pub fn is_open(self) -> bool {
        matches!(self, Self::Sent | Self::Viewed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub id: String,
    pub client_id: String,
    pub client_name: String,
    pub title: String,
    pub status: ProposalStatus,
    /// One-time value.
    pub value: f64,
    pub recurring_value: Option<f64>,
    pub sent_date: Option<NaiveDate>,
    pub accepted_date: Option<NaiveDate>,
    pub created_at: NaiveDate,
}

impl Proposal {
    pub fn validate(&self) -> Result<(), ModelValidationError> {
        ensure_id(EntityKind::Proposal, &self.id)
    }
}

impl Entity for Proposal {
    const KIND: EntityKind = EntityKind::Proposal;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Monthly revenue chart point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenuePoint {
    pub month: String,
    pub one_time: f64,
    pub recurring: f64,
}

impl RevenuePoint {
    pub fn total(&self) -> f64 {
        self.one_time + self.recurring
    }
}
