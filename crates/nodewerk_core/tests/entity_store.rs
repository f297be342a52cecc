use chrono::NaiveDate;
use nodewerk_core::model::finance::{RetainerStatus, Retainer};
use nodewerk_core::{
    sample_collections, sample_store, EntityKind, EntityRepository, EntityStore, InvoiceStatus,
    ModelValidationError, RepoError,
};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn every_client_is_found_by_its_own_id() {
    let store = sample_store();
    for client in store.clients() {
        assert_eq!(store.client_by_id(&client.id), Some(client));
    }
    assert_eq!(store.client_by_id("does-not-exist"), None);
    assert_eq!(store.client_by_id(""), None);
}

#[test]
fn projects_by_client_contains_each_project_and_nothing_foreign() {
    let store = sample_store();
    for project in store.projects() {
        let owned = store.projects_by_client(&project.client_id);
        assert!(owned.iter().any(|p| p.id == project.id));
        assert!(owned.iter().all(|p| p.client_id == project.client_id));
    }
    assert!(store.projects_by_client("2").is_empty());
}

#[test]
fn require_reports_missing_records_with_kind() {
    let store = sample_store();
    assert_eq!(
        store.require_project("42").unwrap_err(),
        RepoError::NotFound {
            kind: EntityKind::Project,
            id: "42".to_string(),
        }
    );
    assert_eq!(store.require_invoice("inv2").unwrap().invoice_number, "INV-006");
}

#[test]
fn relation_lookups_follow_client_and_project_ids() {
    let store = sample_store();
    let project = store.project_by_id("3").unwrap();
    assert_eq!(
        store.client_of_project(project).map(|c| c.company.as_str()),
        Some("DesignStudio Berlin")
    );

    let invoice_ids: Vec<&str> = store
        .invoices_by_project("1")
        .into_iter()
        .map(|i| i.id.as_str())
        .collect();
    assert_eq!(invoice_ids, vec!["inv1", "inv2"]);
    assert_eq!(store.retainers_by_client("3").len(), 1);
    assert_eq!(store.proposals_by_client("4")[0].id, "prop2");
}

#[test]
fn duplicate_client_ids_are_rejected() {
    let mut collections = sample_collections();
    let copy = collections.clients[0].clone();
    collections.clients.push(copy);

    assert_eq!(
        EntityStore::new(collections).unwrap_err(),
        RepoError::DuplicateId {
            kind: EntityKind::Client,
            id: "1".to_string(),
        }
    );
}

#[test]
fn dangling_project_client_reference_is_rejected() {
    let mut collections = sample_collections();
    collections.projects[1].client_id = "99".to_string();

    let err = EntityStore::new(collections).unwrap_err();
    assert_eq!(
        err,
        RepoError::DanglingReference {
            kind: EntityKind::Project,
            id: "2".to_string(),
            field: "clientId",
            target: EntityKind::Client,
            target_id: "99".to_string(),
        }
    );
    assert!(err.to_string().contains("missing client 99"));
}

#[test]
fn dangling_invoice_project_reference_is_rejected() {
    let mut collections = sample_collections();
    collections.invoices[0].project_id = Some("404".to_string());

    assert_eq!(
        EntityStore::new(collections).unwrap_err(),
        RepoError::DanglingReference {
            kind: EntityKind::Invoice,
            id: "inv1".to_string(),
            field: "projectId",
            target: EntityKind::Project,
            target_id: "404".to_string(),
        }
    );
}

#[test]
fn dangling_invoice_and_proposal_client_references_are_rejected() {
    let mut collections = sample_collections();
    collections.invoices[2].client_id = "99".to_string();
    let err = EntityStore::new(collections).unwrap_err();
    assert!(matches!(
        err,
        RepoError::DanglingReference { kind: EntityKind::Invoice, field: "clientId", .. }
    ));

    let mut collections = sample_collections();
    collections.proposals[1].client_id = "99".to_string();
    let err = EntityStore::new(collections).unwrap_err();
    assert!(matches!(
        err,
        RepoError::DanglingReference { kind: EntityKind::Proposal, field: "clientId", .. }
    ));
}

#[test]
fn out_of_range_progress_is_rejected() {
    let mut collections = sample_collections();
    collections.projects[0].progress = 101;

    assert_eq!(
        EntityStore::new(collections).unwrap_err(),
        RepoError::Validation(ModelValidationError::ProgressOutOfRange {
            project_id: "1".to_string(),
            progress: 101,
        })
    );
}

#[test]
fn tampered_invoice_total_is_rejected() {
    let mut collections = sample_collections();
    collections.invoices[0].total += 10.0;

    let err = EntityStore::new(collections).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ModelValidationError::TotalMismatch { ref invoice_id, .. })
            if invoice_id == "inv1"
    ));
}

#[test]
fn marking_invoice_paid_returns_new_snapshot() {
    let store = sample_store();
    let updated = store.mark_invoice_paid("inv2", ymd(2025, 1, 24)).unwrap();

    let invoice = updated.invoice_by_id("inv2").unwrap();
    assert_eq!(invoice.status, InvoiceStatus::Paid);
    assert_eq!(invoice.paid_date, Some(ymd(2025, 1, 24)));
    assert_eq!(
        store.invoice_by_id("inv2").unwrap().status,
        InvoiceStatus::Pending
    );
}

#[test]
fn reopening_invoice_clears_paid_date() {
    let updated = sample_store()
        .with_invoice_status("inv1", InvoiceStatus::Overdue, None)
        .unwrap();
    assert_eq!(updated.invoice_by_id("inv1").unwrap().paid_date, None);
}

#[test]
fn updating_unknown_invoice_fails() {
    let err = sample_store()
        .mark_invoice_paid("inv99", ymd(2025, 1, 24))
        .unwrap_err();
    assert_eq!(
        err,
        RepoError::NotFound {
            kind: EntityKind::Invoice,
            id: "inv99".to_string(),
        }
    );
}

#[test]
fn added_retainer_must_reference_known_client() {
    let retainer = Retainer {
        id: "ret3".to_string(),
        client_id: "77".to_string(),
        client_name: "Ghost".to_string(),
        amount: 400.0,
        start_date: ymd(2025, 1, 1),
        minimum_term_months: 3,
        current_month: 1,
        status: RetainerStatus::Paused,
        next_billing_date: ymd(2025, 2, 1),
        payment_history: Vec::new(),
    };

    let err = sample_store().with_retainer(retainer).unwrap_err();
    assert!(matches!(err, RepoError::DanglingReference { field: "clientId", .. }));
}
