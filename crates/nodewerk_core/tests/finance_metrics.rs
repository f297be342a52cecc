use chrono::NaiveDate;
use nodewerk_core::model::finance::{Retainer, RetainerStatus};
use nodewerk_core::{
    sample_store, DashboardService, EntityCollections, EntityRepository, EntityStore,
    FinanceService,
};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn paused_retainer() -> Retainer {
    Retainer {
        id: "ret-paused".to_string(),
        client_id: "5".to_string(),
        client_name: "Anna Schmidt".to_string(),
        amount: 500.0,
        start_date: ymd(2024, 12, 1),
        minimum_term_months: 3,
        current_month: 2,
        status: RetainerStatus::Paused,
        next_billing_date: ymd(2025, 2, 1),
        payment_history: Vec::new(),
    }
}

#[test]
fn mrr_sums_only_active_retainers() {
    let store = sample_store();
    let finance = FinanceService::new(store);
    let expected: f64 = store
        .retainers()
        .iter()
        .filter(|r| r.status == RetainerStatus::Active)
        .map(|r| r.amount)
        .sum();

    assert_eq!(finance.total_mrr(), expected);
    assert_eq!(finance.total_mrr(), 2050.0);
}

#[test]
fn adding_paused_retainer_keeps_mrr() {
    let store = sample_store();
    let with_paused = store.with_retainer(paused_retainer()).unwrap();

    assert_eq!(FinanceService::new(&with_paused).total_mrr(), 2050.0);
    assert_eq!(FinanceService::new(&with_paused).active_retainer_count(), 2);
}

#[test]
fn pausing_retainer_drops_it_from_mrr() {
    let paused = sample_store()
        .with_retainer_status("ret2", RetainerStatus::Paused)
        .unwrap();
    assert_eq!(FinanceService::new(&paused).total_mrr(), 850.0);
}

#[test]
fn outstanding_amount_counts_pending_and_overdue() {
    let finance = FinanceService::new(sample_store());
    assert!((finance.outstanding_amount() - 1547.0).abs() < 1e-9);
    assert_eq!(finance.open_invoice_count(), 2);
    assert_eq!(finance.overdue_invoice_count(), 1);
}

#[test]
fn marking_invoice_paid_removes_it_from_outstanding() {
    let store = sample_store();
    let before = FinanceService::new(store).outstanding_amount();
    let pending_total = store.invoice_by_id("inv2").unwrap().total;

    let updated = store.mark_invoice_paid("inv2", ymd(2025, 1, 24)).unwrap();
    let after = FinanceService::new(&updated).outstanding_amount();

    assert!((before - pending_total - after).abs() < 1e-9);
}

#[test]
fn revenue_and_average_cover_paid_invoices() {
    let finance = FinanceService::new(sample_store());
    assert!((finance.revenue_mtd() - 1963.5).abs() < 1e-9);
    assert_eq!(finance.paid_invoice_count(), 2);

    let average = finance.average_project_value().unwrap();
    assert!((average - 981.75).abs() < 1e-9);
}

#[test]
fn average_is_none_without_paid_invoices() {
    let store = EntityStore::new(EntityCollections::default()).unwrap();
    assert_eq!(FinanceService::new(&store).average_project_value(), None);
}

#[test]
fn proposals_and_revenue_series_roll_up() {
    let overview = FinanceService::new(sample_store()).overview();
    assert_eq!(overview.open_proposal_count, 1);
    assert_eq!(overview.open_proposals_value, 2400.0);
    assert_eq!(overview.revenue_totals.one_time, 34100.0);
    assert_eq!(overview.revenue_totals.recurring, 27200.0);
}

#[test]
fn dashboard_summary_reflects_sample_data() {
    let dashboard = DashboardService::new(sample_store());
    let summary = dashboard.summary(ymd(2025, 1, 20), 9);

    assert_eq!(summary.greeting, "Guten Morgen");
    assert_eq!(summary.total_clients, 5);
    assert_eq!(summary.active_clients, 3);
    assert_eq!(summary.running_projects, 4);
    assert_eq!(summary.mrr, 2050.0);
    assert_eq!(summary.pipeline_value, 7500.0);

    let names: Vec<&str> = summary
        .deadlines
        .iter()
        .map(|d| d.project_name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "Support AI Setup",
            "Brand Identity",
            "E-Commerce Relaunch",
            "Mobile App MVP"
        ]
    );
    assert_eq!(summary.deadlines[0].days_until, 5);
}

#[test]
fn deadline_limit_truncates_list() {
    let dashboard = DashboardService::new(sample_store());
    assert_eq!(dashboard.upcoming_deadlines(2).len(), 2);
    assert!(dashboard.upcoming_deadlines(10).iter().all(|p| !p.is_completed()));
}

#[test]
fn retainer_progress_helpers() {
    let store = sample_store();
    let retainer = store.retainer_by_id("ret2").unwrap();

    assert_eq!(retainer.days_until_billing(ymd(2025, 1, 17)), 15);
    assert!((retainer.billing_cycle_progress(ymd(2025, 1, 17)) - 50.0).abs() < 1e-9);
    assert_eq!(retainer.billing_cycle_progress(ymd(2024, 12, 1)), 0.0);
    assert!((retainer.term_progress() - 4.0 / 12.0).abs() < 1e-9);
}

#[test]
fn milestone_completion_of_sample_project() {
    let project = sample_store().project_by_id("1").unwrap();
    assert_eq!(project.milestone_completion(), Some(0.4));
    assert_eq!(sample_store().project_by_id("2").unwrap().milestone_completion(), None);
}
