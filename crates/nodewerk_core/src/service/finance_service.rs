//! Finance aggregates: recurring revenue, receivables, proposals.
//!
//! # Invariants
//! - MRR only counts retainers with status `active`.
//! - Outstanding amount only counts invoices with status `pending|overdue`.
//! - Averages over empty sets are `None`, never NaN.

use crate::model::finance::InvoiceStatus;
use crate::repo::entity_store::EntityRepository;
use serde::{Deserialize, Serialize};

/// Sum of the revenue chart series.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueTotals {
    pub one_time: f64,
    pub recurring: f64,
}

impl RevenueTotals {
    pub fn total(&self) -> f64 {
        self.one_time + self.recurring
    }
}

/// Finance page roll-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceOverview {
    pub mrr: f64,
    pub outstanding_amount: f64,
    pub revenue_mtd: f64,
    pub average_project_value: Option<f64>,
    pub open_invoice_count: usize,
    pub overdue_invoice_count: usize,
    pub paid_invoice_count: usize,
    pub active_retainer_count: usize,
    pub open_proposal_count: usize,
    pub open_proposals_value: f64,
    pub revenue_totals: RevenueTotals,
}

/// Finance aggregate service over a repository implementation.
pub struct FinanceService<R: EntityRepository> {
    repo: R,
}

impl<R: EntityRepository> FinanceService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Monthly recurring revenue: sum of active retainer amounts.
    pub fn total_mrr(&self) -> f64 {
        self.repo
            .retainers()
            .iter()
            .filter(|r| r.is_active())
            .map(|r| r.amount)
            .sum()
    }

    /// Sum of invoice totals still awaiting payment.
    pub fn outstanding_amount(&self) -> f64 {
        self.repo
            .invoices()
            .iter()
            .filter(|i| i.is_outstanding())
            .map(|i| i.total)
            .sum()
    }

    /// Revenue to date: sum of paid invoice totals.
    pub fn revenue_mtd(&self) -> f64 {
        self.paid_totals().sum()
    }

    /// Mean paid invoice total.
    ///
    /// Returns `None` when no invoice is paid yet.
    pub fn average_project_value(&self) -> Option<f64> {
        let count = self.paid_invoice_count();
        if count == 0 {
            return None;
        }
        Some(self.revenue_mtd() / count as f64)
    }

    pub fn paid_invoice_count(&self) -> usize {
        self.paid_totals().count()
    }

    pub fn open_invoice_count(&self) -> usize {
        self.repo
            .invoices()
            .iter()
            .filter(|i| i.is_outstanding())
            .count()
    }

    pub fn overdue_invoice_count(&self) -> usize {
        self.repo
            .invoices()
            .iter()
            .filter(|i| i.status == InvoiceStatus::Overdue)
            .count()
    }

    pub fn active_retainer_count(&self) -> usize {
        self.repo
            .retainers()
            .iter()
            .filter(|r| r.is_active())
            .count()
    }

    /// Number of proposals sent or viewed and awaiting a decision.
    pub fn open_proposal_count(&self) -> usize {
        self.repo
            .proposals()
            .iter()
            .filter(|p| p.status.is_open())
            .count()
    }

    /// One-time value of proposals awaiting a decision.
    pub fn open_proposals_value(&self) -> f64 {
        self.repo
            .proposals()
            .iter()
            .filter(|p| p.status.is_open())
            .map(|p| p.value)
            .sum()
    }

    pub fn revenue_totals(&self) -> RevenueTotals {
        self.repo
            .revenue()
            .iter()
            .fold(RevenueTotals::default(), |acc, point| RevenueTotals {
                one_time: acc.one_time + point.one_time,
                recurring: acc.recurring + point.recurring,
            })
    }

    pub fn overview(&self) -> FinanceOverview {
        FinanceOverview {
            mrr: self.total_mrr(),
            outstanding_amount: self.outstanding_amount(),
            revenue_mtd: self.revenue_mtd(),
            average_project_value: self.average_project_value(),
            open_invoice_count: self.open_invoice_count(),
            overdue_invoice_count: self.overdue_invoice_count(),
            paid_invoice_count: self.paid_invoice_count(),
            active_retainer_count: self.active_retainer_count(),
            open_proposal_count: self.open_proposal_count(),
            open_proposals_value: self.open_proposals_value(),
            revenue_totals: self.revenue_totals(),
        }
    }

    fn paid_totals(&self) -> impl Iterator<Item = f64> + '_ {
        self.repo
            .invoices()
            .iter()
            .filter(|i| i.status == InvoiceStatus::Paid)
            .map(|i| i.total)
    }
}

#[cfg(test)]
mod tests {
    use super::FinanceService;
    use crate::repo::entity_store::EntityStore;

    #[test]
    fn empty_store_yields_zero_sums_and_no_average() {
        let store = EntityStore::empty();
        let service = FinanceService::new(&store);

        assert_eq!(service.total_mrr(), 0.0);
        assert_eq!(service.outstanding_amount(), 0.0);
        assert_eq!(service.revenue_mtd(), 0.0);
        assert_eq!(service.average_project_value(), None);
        assert_eq!(service.revenue_totals().total(), 0.0);
    }
}
