use nodewerk_core::model::activity::ActivityKind;
use nodewerk_core::{
    sample_store, Client, ClientStatus, FinanceService, InvoiceStatus, Priority, ProjectStatus,
};
use serde_json::{json, Value};

#[test]
fn enums_use_kebab_case_wire_strings() {
    assert_eq!(
        serde_json::to_value(ProjectStatus::InProgress).unwrap(),
        json!("in-progress")
    );
    assert_eq!(serde_json::to_value(Priority::Urgent).unwrap(), json!("urgent"));
    assert_eq!(
        serde_json::from_value::<InvoiceStatus>(json!("overdue")).unwrap(),
        InvoiceStatus::Overdue
    );
    assert!(serde_json::from_value::<ClientStatus>(json!("Active")).is_err());
}

#[test]
fn as_str_matches_serde_wire_string() {
    for status in ProjectStatus::ALL {
        assert_eq!(serde_json::to_value(status).unwrap(), json!(status.as_str()));
        assert_eq!(ProjectStatus::parse(status.as_str()), Some(status));
    }
    for status in ClientStatus::ALL {
        assert_eq!(serde_json::to_value(status).unwrap(), json!(status.as_str()));
    }
}

#[test]
fn client_uses_original_field_names() {
    let client = sample_store().client_by_id("1").unwrap();
    let value = serde_json::to_value(client).unwrap();

    assert_eq!(value["company"], json!("Aktimed GmbH"));
    assert_eq!(value["status"], json!("active"));
    assert_eq!(value["projects"], json!(2));
    assert_eq!(value["startDate"], json!("Jan 2025"));
    assert_eq!(value["mrr"], json!(850.0));
    assert!(value.get("projectCount").is_none());
}

#[test]
fn invoice_serializes_camel_case_and_iso_dates() {
    let invoice = sample_store().invoice_by_id("inv1").unwrap();
    let value = serde_json::to_value(invoice).unwrap();

    assert_eq!(value["invoiceNumber"], json!("INV-007"));
    assert_eq!(value["taxRate"], json!(19.0));
    assert_eq!(value["dueDate"], json!("2025-01-15"));
    assert_eq!(value["paidDate"], json!("2025-01-14"));
    assert_eq!(value["lineItems"][0]["unitPrice"], json!(450.0));
}

#[test]
fn activity_kind_is_written_as_type() {
    let activity = &sample_store().activities()[2];
    let value = serde_json::to_value(activity).unwrap();
    assert_eq!(value["type"], json!("success"));
    assert_eq!(activity.kind, ActivityKind::Success);
}

#[test]
fn client_deserializes_from_wire_shape() {
    let mut value = serde_json::to_value(sample_store().client_by_id("2").unwrap()).unwrap();
    value["status"] = json!("proposal");

    let client: Client = serde_json::from_value(value).unwrap();
    assert_eq!(client.status, ClientStatus::Proposal);
    assert_eq!(client.name, "Max Müller");
}

#[test]
fn finance_overview_uses_camel_case_keys() {
    let overview = FinanceService::new(sample_store()).overview();
    let value: Value = serde_json::to_value(&overview).unwrap();
    assert_eq!(value["averageProjectValue"], json!(981.75));
    assert_eq!(value["revenueTotals"]["oneTime"], json!(34100.0));
    assert_eq!(value["openProposalCount"], json!(1));
}
