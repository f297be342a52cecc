//! Record-level validation errors.

use crate::model::EntityKind;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Absolute tolerance for comparing monetary amounts.
pub const AMOUNT_TOLERANCE: f64 = 0.005;

/// Validation failure for a single record.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelValidationError {
    /// Id is empty or whitespace only.
    BlankId { kind: EntityKind },
    /// Project progress exceeds 100 percent.
    ProgressOutOfRange { project_id: String, progress: u8 },
    /// Two tasks inside one project share an id.
    DuplicateTaskId { project_id: String, task_id: String },
    /// Invoice number does not follow `INV-<digits>`.
    InvalidInvoiceNumber { invoice_id: String, number: String },
    /// Line item total differs from `quantity * unit_price`.
    LineItemTotalMismatch {
        invoice_id: String,
        line_item_id: String,
        expected: f64,
        actual: f64,
    },
    /// Invoice subtotal differs from the sum of line item totals.
    SubtotalMismatch {
        invoice_id: String,
        expected: f64,
        actual: f64,
    },
    /// Tax amount differs from `subtotal * tax_rate / 100`.
    TaxAmountMismatch {
        invoice_id: String,
        expected: f64,
        actual: f64,
    },
    /// Invoice total differs from `subtotal + tax_amount`.
    TotalMismatch {
        invoice_id: String,
        expected: f64,
        actual: f64,
    },
}

impl Display for ModelValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankId { kind } => write!(f, "{kind} id must not be blank"),
            Self::ProgressOutOfRange {
                project_id,
                progress,
            } => write!(
                f,
                "project {project_id} progress {progress} is outside 0..=100"
            ),
            Self::DuplicateTaskId {
                project_id,
                task_id,
            } => write!(f, "project {project_id} has duplicate task id {task_id}"),
            Self::InvalidInvoiceNumber { invoice_id, number } => write!(
                f,
                "invoice {invoice_id} has invalid number `{number}`; expected INV-<digits>"
            ),
            Self::LineItemTotalMismatch {
                invoice_id,
                line_item_id,
                expected,
                actual,
            } => write!(
                f,
                "invoice {invoice_id} line {line_item_id} total {actual} != {expected}"
            ),
            Self::SubtotalMismatch {
                invoice_id,
                expected,
                actual,
            } => write!(f, "invoice {invoice_id} subtotal {actual} != {expected}"),
            Self::TaxAmountMismatch {
                invoice_id,
                expected,
                actual,
            } => write!(f, "invoice {invoice_id} tax amount {actual} != {expected}"),
            Self::TotalMismatch {
                invoice_id,
                expected,
                actual,
            } => write!(f, "invoice {invoice_id} total {actual} != {expected}"),
        }
    }
}

impl Error for ModelValidationError {}

pub(crate) fn ensure_id(kind: EntityKind, id: &str) -> Result<(), ModelValidationError> {
    if id.trim().is_empty() {
        return Err(ModelValidationError::BlankId { kind });
    }
    Ok(())
}

pub(crate) fn amounts_match(left: f64, right: f64) -> bool {
    (left - right).abs() <= AMOUNT_TOLERANCE
}
