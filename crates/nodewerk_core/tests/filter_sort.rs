use nodewerk_core::search::sort::{
    group_clients_by_status, group_projects_by_status, sort_invoices, sort_projects,
    InvoiceSortField,
};
use nodewerk_core::{
    sample_store, ClientFilter, ClientStatus, EntityRepository, ProjectFilter, ProjectSortField,
    ProjectStatus, SortDirection, SortState, StatusFilter,
};

#[test]
fn active_filter_with_empty_query_returns_three_clients() {
    let filter = ClientFilter::new(StatusFilter::Only(ClientStatus::Active), "");
    let matched: Vec<(&str, &str)> = filter
        .apply(sample_store().clients())
        .into_iter()
        .map(|c| (c.name.as_str(), c.company.as_str()))
        .collect();

    assert_eq!(
        matched,
        vec![
            ("Johannes", "Aktimed GmbH"),
            ("Sarah Klein", "DesignStudio Berlin"),
            ("Anna Schmidt", "HealthTech Solutions"),
        ]
    );
}

#[test]
fn client_query_searches_name_and_company() {
    let clients = sample_store().clients();
    let by_company = ClientFilter::new(StatusFilter::All, "consulting").apply(clients);
    assert_eq!(by_company.len(), 1);
    assert_eq!(by_company[0].name, "Thomas Weber");

    let none = ClientFilter::new(StatusFilter::Only(ClientStatus::Lead), "weber").apply(clients);
    assert!(none.is_empty());
}

#[test]
fn client_query_keeps_surrounding_spaces() {
    let clients = sample_store().clients();
    let trailing = ClientFilter::new(StatusFilter::All, "Klein ").apply(clients);
    assert!(trailing.is_empty());

    let trailing_company = ClientFilter::new(StatusFilter::All, "gmbh ").apply(clients);
    assert!(trailing_company.is_empty());

    let blank = ClientFilter::new(StatusFilter::All, " ");
    assert!(!blank.query.is_empty());

    let empty = ClientFilter::new(StatusFilter::All, "").apply(clients);
    assert_eq!(empty.len(), clients.len());
}

#[test]
fn default_filter_keeps_everything() {
    let projects = sample_store().projects();
    assert_eq!(ProjectFilter::default().apply(projects).len(), projects.len());
}

#[test]
fn project_query_matches_client_name() {
    let filter = ProjectFilter::new(StatusFilter::Only(ProjectStatus::InProgress), "anna");
    let matched = filter.apply(sample_store().projects());
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].name, "Mobile App MVP");
}

#[test]
fn due_date_ascending_order_on_sample_projects() {
    let sorted = sort_projects(
        sample_store().projects(),
        ProjectSortField::DueDate,
        SortDirection::Ascending,
    );
    let names: Vec<&str> = sorted.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Automation Workflow",
            "Support AI Setup",
            "Brand Identity",
            "E-Commerce Relaunch",
            "Mobile App MVP",
        ]
    );
}

#[test]
fn priority_sorts_by_rank_not_by_label() {
    let sorted = sort_projects(
        sample_store().projects(),
        ProjectSortField::Priority,
        SortDirection::Descending,
    );
    let ids: Vec<&str> = sorted.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "4", "2", "3", "5"]);
}

#[test]
fn sort_state_header_clicks() {
    let mut state = SortState::default();
    assert_eq!(state.field, ProjectSortField::DueDate);
    assert_eq!(state.direction, SortDirection::Ascending);

    state.select(ProjectSortField::DueDate);
    assert_eq!(state.direction, SortDirection::Descending);
    let sorted = state.sort(sample_store().projects());
    assert_eq!(sorted[0].name, "Mobile App MVP");

    state.select(ProjectSortField::Value);
    assert_eq!(state.field, ProjectSortField::Value);
    assert_eq!(state.direction, SortDirection::Ascending);
    assert_eq!(state.sort(sample_store().projects())[0].name, "Support AI Setup");
}

#[test]
fn invoices_sort_by_total() {
    let sorted = sort_invoices(
        sample_store().invoices(),
        InvoiceSortField::Total,
        SortDirection::Descending,
    );
    assert_eq!(sorted[0].invoice_number, "INV-005");
    assert_eq!(sorted[3].client_name, "Johannes");
}

#[test]
fn kanban_columns_include_empty_ones() {
    let columns = group_projects_by_status(sample_store().projects());
    let counts: Vec<(ProjectStatus, usize)> = columns.iter().map(|g| (g.key, g.len())).collect();
    assert_eq!(
        counts,
        vec![
            (ProjectStatus::Backlog, 1),
            (ProjectStatus::InProgress, 2),
            (ProjectStatus::Review, 1),
            (ProjectStatus::Completed, 1),
        ]
    );

    let empty = group_projects_by_status(&[]);
    assert_eq!(empty.len(), 4);
    assert!(empty.iter().all(|g| g.is_empty()));
}

#[test]
fn pipeline_groups_follow_stage_order() {
    let groups = group_clients_by_status(sample_store().clients(), &ClientStatus::PIPELINE_STAGES);
    let keys: Vec<ClientStatus> = groups.iter().map(|g| g.key).collect();
    assert_eq!(keys, ClientStatus::PIPELINE_STAGES.to_vec());
    assert_eq!(groups[2].len(), 3);
    assert!(groups[3].is_empty());
}
