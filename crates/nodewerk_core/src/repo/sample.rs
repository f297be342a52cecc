//! Built-in sample dataset for the dashboard.
//!
//! The data is fixed at compile time, so the shared store is built lazily
//! on first access and reused for the process lifetime.

use crate::model::activity::{Activity, ActivityKind, Credential};
use crate::model::client::{Client, ClientStatus, PaymentStatus};
use crate::model::finance::{
    Invoice, InvoiceLineItem, InvoiceStatus, Proposal, ProposalStatus, Retainer,
    RetainerPayment, RetainerPaymentStatus, RetainerStatus, RevenuePoint,
};
use crate::model::project::{
    Milestone, MilestoneStatus, Priority, Project, ProjectStatus, ProjectTask, TaskPriority,
};
use crate::repo::entity_store::{EntityCollections, EntityStore};
use chrono::NaiveDate;
use once_cell::sync::Lazy;

static SAMPLE_STORE: Lazy<EntityStore> = Lazy::new(|| {
    EntityStore::new(sample_collections()).expect("built-in sample data satisfies invariants")
});

/// Shared snapshot of the built-in sample data.
pub fn sample_store() -> &'static EntityStore {
    &SAMPLE_STORE
}

/// Fresh copy of the built-in sample collections.
pub fn sample_collections() -> EntityCollections {
    EntityCollections {
        clients: clients(),
        projects: projects(),
        invoices: invoices(),
        retainers: retainers(),
        proposals: proposals(),
        activities: activities(),
        credentials: credentials(),
        revenue: revenue(),
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid sample date")
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn client(
    id: &str,
    name: &str,
    company: &str,
    email: &str,
    phone: &str,
    status: ClientStatus,
    mrr: f64,
    project_count: u32,
    tag_list: &[&str],
    start_label: &str,
    lifetime_value: f64,
    last_contact: &str,
) -> Client {
    let mut client = Client::new(id, name, company, status);
    client.email = email.to_string();
    client.phone = phone.to_string();
    client.mrr = mrr;
    client.project_count = project_count;
    client.tags = tags(tag_list);
    client.start_label = start_label.to_string();
    client.lifetime_value = lifetime_value;
    client.last_contact = last_contact.to_string();
    client
}

fn with_contract(
    mut client: Client,
    model: &str,
    terms: &str,
    next_invoice: &str,
    payment: PaymentStatus,
) -> Client {
    client.contract_model = Some(model.to_string());
    client.contract_terms = Some(terms.to_string());
    client.next_invoice = Some(next_invoice.to_string());
    client.payment_status = Some(payment);
    client
}

fn clients() -> Vec<Client> {
    vec![
        with_contract(
            client(
                "1",
                "Johannes",
                "Aktimed GmbH",
                "johannes@aktimed.de",
                "+49 171 1234567",
                ClientStatus::Active,
                850.0,
                2,
                &["E-Commerce", "Support AI", "Retainer"],
                "Jan 2025",
                5400.0,
                "vor 2 Stunden",
            ),
            "Kickstart + Retainer",
            "6 Monate Mindestlaufzeit",
            "15. Feb",
            PaymentStatus::Paid,
        ),
        client(
            "2",
            "Max Müller",
            "TechStart UG",
            "max@techstart.io",
            "+49 172 9876543",
            ClientStatus::Lead,
            0.0,
            0,
            &["SaaS", "MVP"],
            "-",
            0.0,
            "vor 5 Stunden",
        ),
        with_contract(
            client(
                "3",
                "Sarah Klein",
                "DesignStudio Berlin",
                "sarah@designstudio.berlin",
                "+49 173 5551234",
                ClientStatus::Active,
                1200.0,
                3,
                &["Branding", "Website", "Retainer"],
                "Okt 2024",
                8400.0,
                "gestern",
            ),
            "Full Service",
            "12 Monate",
            "1. Feb",
            PaymentStatus::Paid,
        ),
        client(
            "4",
            "Thomas Weber",
            "Weber Consulting",
            "thomas@weber-consulting.de",
            "+49 174 8887766",
            ClientStatus::Proposal,
            0.0,
            0,
            &["Consulting", "Automation"],
            "-",
            0.0,
            "vor 3 Tagen",
        ),
        with_contract(
            client(
                "5",
                "Anna Schmidt",
                "HealthTech Solutions",
                "anna@healthtech.solutions",
                "+49 175 2223344",
                ClientStatus::Active,
                500.0,
                1,
                &["Healthcare", "App"],
                "Dez 2024",
                1500.0,
                "vor 1 Woche",
            ),
            "Project-based",
            "3 Monate",
            "20. Feb",
            PaymentStatus::Pending,
        ),
    ]
}

fn task(
    id: &str,
    title: &str,
    completed: bool,
    group: &str,
    assignee: &str,
    due_date: Option<NaiveDate>,
    priority: Option<TaskPriority>,
) -> ProjectTask {
    let mut task = ProjectTask::new(id, title, group);
    task.completed = completed;
    task.assignee = Some(assignee.to_string());
    task.due_date = due_date;
    task.priority = priority;
    task
}

fn milestone(id: &str, name: &str, date: NaiveDate, status: MilestoneStatus) -> Milestone {
    Milestone {
        id: id.to_string(),
        name: name.to_string(),
        date,
        status,
    }
}

#[allow(clippy::too_many_arguments)]
fn project(
    id: &str,
    name: &str,
    client_id: &str,
    client_name: &str,
    avatar: &str,
    status: ProjectStatus,
    priority: Priority,
    progress: u8,
    due_date: NaiveDate,
    value: f64,
    description: &str,
    tag_list: &[&str],
    comments_count: u32,
    attachments_count: u32,
) -> Project {
    let mut project = Project::new(id, name, client_id, client_name, status, due_date);
    project.client_avatar = Some(avatar.to_string());
    project.priority = priority;
    project.progress = progress;
    project.value = value;
    project.description = Some(description.to_string());
    project.tags = tags(tag_list);
    project.comments_count = comments_count;
    project.attachments_count = attachments_count;
    project
}

fn support_ai_tasks() -> Vec<ProjectTask> {
    vec![
        task("t1", "Zugänge von Johannes erhalten", true, "SETUP", "Aurell", None, None),
        task("t2", "Shopify API verbunden", true, "SETUP", "Aurell", None, None),
        task("t3", "EasyBill API verbunden", true, "SETUP", "Aurell", None, None),
        task(
            "t4",
            "Gmail IMAP einrichten",
            false,
            "SETUP",
            "Aurell",
            Some(ymd(2025, 1, 18)),
            Some(TaskPriority::High),
        ),
        task(
            "t5",
            "DHL Tracking API",
            false,
            "SETUP",
            "Partner",
            Some(ymd(2025, 1, 19)),
            None,
        ),
        task("t6", "n8n Workflow Grundstruktur", true, "DEVELOPMENT", "Aurell", None, None),
        task(
            "t7",
            "Intent Recognition trainieren",
            false,
            "DEVELOPMENT",
            "Aurell",
            Some(ymd(2025, 1, 20)),
            None,
        ),
        task(
            "t8",
            "Response Templates erstellen",
            false,
            "DEVELOPMENT",
            "Aurell",
            Some(ymd(2025, 1, 21)),
            None,
        ),
        task(
            "t9",
            "Error Handling",
            false,
            "DEVELOPMENT",
            "Aurell",
            Some(ymd(2025, 1, 22)),
            None,
        ),
        task("t10", "Internal Testing", false, "TESTING", "Aurell", None, None),
        task("t11", "Johannes Beta Access", false, "TESTING", "Aurell", None, None),
        task("t12", "Bug Fixes", false, "TESTING", "Aurell", None, None),
        task("t13", "Production Deployment", false, "GO-LIVE", "Aurell", None, None),
        task("t14", "Handover Documentation", false, "GO-LIVE", "Aurell", None, None),
    ]
}

fn projects() -> Vec<Project> {
    let mut support_ai = project(
        "1",
        "Support AI Setup",
        "1",
        "Johannes",
        "JA",
        ProjectStatus::InProgress,
        Priority::High,
        65,
        ymd(2025, 1, 25),
        900.0,
        "Komplettes Support AI System mit n8n Workflow, Intent Recognition und automatischen Antworten für E-Commerce Kundenanfragen.",
        &["Bot", "API", "Setup"],
        3,
        2,
    );
    support_ai.tasks = support_ai_tasks();
    support_ai.milestones = vec![
        milestone("m1", "Kickoff", ymd(2025, 1, 10), MilestoneStatus::Completed),
        milestone("m2", "Setup", ymd(2025, 1, 15), MilestoneStatus::Completed),
        milestone("m3", "Testing", ymd(2025, 1, 20), MilestoneStatus::Active),
        milestone("m4", "Go-Live", ymd(2025, 1, 25), MilestoneStatus::Pending),
        milestone("m5", "Retainer", ymd(2025, 2, 1), MilestoneStatus::Pending),
    ];

    vec![
        support_ai,
        project(
            "2",
            "E-Commerce Relaunch",
            "1",
            "Johannes",
            "JA",
            ProjectStatus::Backlog,
            Priority::Medium,
            15,
            ymd(2025, 2, 28),
            4500.0,
            "Kompletter Relaunch des Shopify Stores mit neuem Design und optimierter UX.",
            &["Shopify", "Design", "UX"],
            1,
            0,
        ),
        project(
            "3",
            "Brand Identity",
            "3",
            "Sarah Klein",
            "SK",
            ProjectStatus::Review,
            Priority::Medium,
            90,
            ymd(2025, 2, 10),
            3200.0,
            "Entwicklung einer neuen Brand Identity inkl. Logo, Farben und Styleguide.",
            &["Branding", "Logo", "Design"],
            5,
            8,
        ),
        project(
            "4",
            "Mobile App MVP",
            "5",
            "Anna Schmidt",
            "AS",
            ProjectStatus::InProgress,
            Priority::High,
            40,
            ymd(2025, 4, 1),
            8500.0,
            "MVP für Healthcare App mit Patientenverwaltung und Terminbuchung.",
            &["App", "React Native", "Healthcare"],
            12,
            4,
        ),
        project(
            "5",
            "Automation Workflow",
            "3",
            "Sarah Klein",
            "SK",
            ProjectStatus::Completed,
            Priority::Low,
            100,
            ymd(2025, 1, 5),
            1200.0,
            "Automatisierung der Buchhaltung mit n8n und EasyBill.",
            &["n8n", "Automation"],
            2,
            1,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn invoice(
    id: &str,
    number: &str,
    client_id: &str,
    client_name: &str,
    status: InvoiceStatus,
    line_item: InvoiceLineItem,
    created_at: NaiveDate,
    due_date: NaiveDate,
) -> Invoice {
    let mut invoice = Invoice::from_line_items(
        id,
        number,
        client_id,
        client_name,
        status,
        vec![line_item],
        19.0,
        created_at,
        due_date,
    );
    invoice.sent_at = Some(created_at);
    invoice
}

fn invoices() -> Vec<Invoice> {
    let mut inv1 = invoice(
        "inv1",
        "INV-007",
        "1",
        "Johannes",
        InvoiceStatus::Paid,
        InvoiceLineItem::new("li1", "Kickstart: Support AI Setup - Anzahlung", 1.0, 450.0),
        ymd(2025, 1, 10),
        ymd(2025, 1, 15),
    );
    inv1.project_id = Some("1".to_string());
    inv1.paid_date = Some(ymd(2025, 1, 14));
    inv1.notes = Some("Vielen Dank für Ihr Vertrauen!".to_string());

    let mut inv2 = invoice(
        "inv2",
        "INV-006",
        "1",
        "Johannes",
        InvoiceStatus::Pending,
        InvoiceLineItem::new("li2", "Kickstart: Support AI Setup - Restzahlung", 1.0, 450.0),
        ymd(2025, 1, 15),
        ymd(2025, 1, 25),
    );
    inv2.project_id = Some("1".to_string());

    let mut inv3 = invoice(
        "inv3",
        "INV-005",
        "2",
        "Max Müller",
        InvoiceStatus::Paid,
        InvoiceLineItem::new("li3", "Consulting: Strategieberatung", 4.0, 300.0),
        ymd(2025, 1, 2),
        ymd(2025, 1, 10),
    );
    inv3.paid_date = Some(ymd(2025, 1, 9));

    let inv4 = invoice(
        "inv4",
        "INV-004",
        "3",
        "Sarah Klein",
        InvoiceStatus::Overdue,
        InvoiceLineItem::new("li4", "Brand Identity - Konzeptphase", 1.0, 850.0),
        ymd(2024, 12, 20),
        ymd(2025, 1, 1),
    );

    vec![inv1, inv2, inv3, inv4]
}

fn payments(amount: f64, history: &[(&str, RetainerPaymentStatus)]) -> Vec<RetainerPayment> {
    history
        .iter()
        .map(|(month, status)| RetainerPayment {
            month: (*month).to_string(),
            amount,
            status: *status,
        })
        .collect()
}

fn retainers() -> Vec<Retainer> {
    use RetainerPaymentStatus::{Paid, Upcoming};

    vec![
        Retainer {
            id: "ret1".to_string(),
            client_id: "1".to_string(),
            client_name: "Johannes".to_string(),
            amount: 850.0,
            start_date: ymd(2025, 1, 1),
            minimum_term_months: 6,
            current_month: 1,
            status: RetainerStatus::Active,
            next_billing_date: ymd(2025, 2, 1),
            payment_history: payments(
                850.0,
                &[("Jan 2025", Paid), ("Feb 2025", Upcoming), ("Mär 2025", Upcoming)],
            ),
        },
        Retainer {
            id: "ret2".to_string(),
            client_id: "3".to_string(),
            client_name: "Sarah Klein".to_string(),
            amount: 1200.0,
            start_date: ymd(2024, 10, 1),
            minimum_term_months: 12,
            current_month: 4,
            status: RetainerStatus::Active,
            next_billing_date: ymd(2025, 2, 1),
            payment_history: payments(
                1200.0,
                &[
                    ("Okt 2024", Paid),
                    ("Nov 2024", Paid),
                    ("Dez 2024", Paid),
                    ("Jan 2025", Paid),
                    ("Feb 2025", Upcoming),
                ],
            ),
        },
    ]
}

fn proposals() -> Vec<Proposal> {
    vec![
        Proposal {
            id: "prop1".to_string(),
            client_id: "1".to_string(),
            client_name: "Johannes".to_string(),
            title: "Kickstart + Partnerschaft".to_string(),
            status: ProposalStatus::Accepted,
            value: 900.0,
            recurring_value: Some(850.0),
            sent_date: Some(ymd(2025, 1, 8)),
            accepted_date: Some(ymd(2025, 1, 11)),
            created_at: ymd(2025, 1, 7),
        },
        Proposal {
            id: "prop2".to_string(),
            client_id: "4".to_string(),
            client_name: "Thomas Weber".to_string(),
            title: "Automation Consulting".to_string(),
            status: ProposalStatus::Sent,
            value: 2400.0,
            recurring_value: None,
            sent_date: Some(ymd(2025, 1, 12)),
            accepted_date: None,
            created_at: ymd(2025, 1, 10),
        },
        Proposal {
            id: "prop3".to_string(),
            client_id: "2".to_string(),
            client_name: "Max Müller".to_string(),
            title: "SaaS MVP Development".to_string(),
            status: ProposalStatus::Draft,
            value: 8500.0,
            recurring_value: Some(500.0),
            sent_date: None,
            accepted_date: None,
            created_at: ymd(2025, 1, 14),
        },
    ]
}

fn revenue() -> Vec<RevenuePoint> {
    [
        ("Jan", 1800.0, 850.0),
        ("Feb", 2200.0, 1700.0),
        ("Mär", 1500.0, 1700.0),
        ("Apr", 3200.0, 2050.0),
        ("Mai", 2800.0, 2050.0),
        ("Jun", 1900.0, 2050.0),
        ("Jul", 4100.0, 2550.0),
        ("Aug", 3500.0, 2550.0),
        ("Sep", 2700.0, 2550.0),
        ("Okt", 3800.0, 3050.0),
        ("Nov", 2100.0, 3050.0),
        ("Dez", 4500.0, 3050.0),
    ]
    .into_iter()
    .map(|(month, one_time, recurring)| RevenuePoint {
        month: month.to_string(),
        one_time,
        recurring,
    })
    .collect()
}

fn activities() -> Vec<Activity> {
    [
        ("1", "Johannes hat Proposal angenommen", "vor 2 Stunden", ActivityKind::Success),
        ("2", "Neue Anfrage von Max Müller", "vor 5 Stunden", ActivityKind::Info),
        ("3", "Rechnung #004 bezahlt", "gestern", ActivityKind::Success),
        (
            "4",
            "Projekt \"Brand Identity\" wartet auf Review",
            "vor 2 Tagen",
            ActivityKind::Warning,
        ),
        (
            "5",
            "Neuer Retainer-Vertrag mit DesignStudio",
            "vor 3 Tagen",
            ActivityKind::Success,
        ),
    ]
    .into_iter()
    .map(|(id, message, timestamp, kind)| Activity {
        id: id.to_string(),
        message: message.to_string(),
        timestamp: timestamp.to_string(),
        kind,
    })
    .collect()
}

fn credentials() -> Vec<Credential> {
    vec![
        Credential {
            id: "1".to_string(),
            system: "Shopify".to_string(),
            icon: "ShoppingBag".to_string(),
            username: "aktimed-admin".to_string(),
            password: "Aktimed2025!Secure".to_string(),
            api_key: Some("shpat_1234567890abcdef".to_string()),
            notes: Some("Hauptadmin-Account für E-Commerce".to_string()),
            last_updated: "12. Jan 2025".to_string(),
        },
        Credential {
            id: "2".to_string(),
            system: "Gmail".to_string(),
            icon: "Mail".to_string(),
            username: "support@aktimed.de".to_string(),
            password: "GmailSecure!2025".to_string(),
            api_key: None,
            notes: Some("Support-Postfach".to_string()),
            last_updated: "10. Jan 2025".to_string(),
        },
        Credential {
            id: "3".to_string(),
            system: "Stripe".to_string(),
            icon: "CreditCard".to_string(),
            username: "johannes@aktimed.de".to_string(),
            password: "StripeSecure!2025".to_string(),
            api_key: Some("sk_live_abcdef1234567890".to_string()),
            notes: Some("Live API Key - Vorsicht!".to_string()),
            last_updated: "8. Jan 2025".to_string(),
        },
    ]
}
