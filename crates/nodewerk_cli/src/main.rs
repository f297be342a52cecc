//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `nodewerk_core` linkage with a small executable.
//! - Print the dashboard summary of the built-in sample data.
//!
//! Logging starts only when `NODEWERK_LOG_DIR` is set.

use chrono::{Local, Timelike};
use log::info;
use nodewerk_core::{sample_store, DashboardService, FinanceService, LogSettings};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("nodewerk_cli error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    if let Some(settings) = LogSettings::from_env() {
        settings.init()?;
    }

    println!("nodewerk_core ping={}", nodewerk_core::ping());
    println!("nodewerk_core version={}", nodewerk_core::core_version());

    let store = sample_store();
    let now = Local::now();
    let summary = DashboardService::new(store).summary(now.date_naive(), now.hour());
    let finance = FinanceService::new(store).overview();

    println!("{}", summary.greeting);
    println!(
        "clients={} active={} running_projects={}",
        summary.total_clients, summary.active_clients, summary.running_projects
    );
    println!(
        "mrr={:.2} pipeline={:.2} outstanding={:.2} revenue_mtd={:.2}",
        summary.mrr, summary.pipeline_value, summary.outstanding_amount, finance.revenue_mtd
    );
    for deadline in &summary.deadlines {
        println!(
            "deadline project={} client={} due={} days={}",
            deadline.project_name, deadline.client_name, deadline.due_date, deadline.days_until
        );
    }

    info!(
        "event=cli_summary module=cli status=ok deadlines={}",
        summary.deadlines.len()
    );
    Ok(())
}
