pub mod procedures;
pub mod state;

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::driver::traits::PageDriver;
use crate::report;

pub use state::{ResultRecord, RunResults, Status};

/// Execute the six test procedures in fixed order
///
/// A fault inside a procedure is caught at its boundary and recorded as a
/// single Error entry for that category; records appended before the fault
/// are kept and the run always continues to the next procedure.
pub async fn execute(page: &dyn PageDriver, base_url: &str) -> RunResults {
    let mut results = RunResults::default();

    println!("\n{} Testing user management...", "▶".green().bold());
    if let Err(e) = procedures::user_management(page, base_url, &mut results.user_management).await
    {
        results
            .user_management
            .push(ResultRecord::error("User Management", format!("{:#}", e)));
    }

    println!("{} Checking district labels...", "▶".green().bold());
    if let Err(e) =
        procedures::district_changes(page, base_url, &mut results.district_changes).await
    {
        results
            .district_changes
            .push(ResultRecord::error("District Changes", format!("{:#}", e)));
    }

    println!("{} Testing calendar district filter...", "▶".green().bold());
    if let Err(e) = procedures::calendar_filter(page, base_url, &mut results.calendar_filter).await
    {
        results.calendar_filter.push(ResultRecord::error(
            "Calendar District Filter",
            format!("{:#}", e),
        ));
    }

    println!("{} Testing dashboard panel removal...", "▶".green().bold());
    if let Err(e) =
        procedures::dashboard_panels(page, base_url, &mut results.dashboard_panels).await
    {
        results
            .dashboard_panels
            .push(ResultRecord::error("Dashboard Panels", format!("{:#}", e)));
    }

    println!("{} Testing dashboard customization...", "▶".green().bold());
    if let Err(e) =
        procedures::dashboard_customization(page, base_url, &mut results.dashboard_customization)
            .await
    {
        results.dashboard_customization.push(ResultRecord::error(
            "Dashboard Customization",
            format!("{:#}", e),
        ));
    }

    println!("{} Testing CSV import...", "▶".green().bold());
    if let Err(e) = procedures::csv_import(page, base_url, &mut results.csv_import).await {
        results
            .csv_import
            .push(ResultRecord::error("CSV Import", format!("{:#}", e)));
    }

    results
}

/// Run everything, write the report and release the session
///
/// The session is released even when the report cannot be written; a
/// report-write fault is logged and never turns into a process failure.
pub async fn run_all_tests(page: &dyn PageDriver, base_url: &str, output: &Path) -> Result<()> {
    let results = execute(page, base_url).await;

    println!("\nAll tests completed.");
    report::print_summary(&results);

    if let Err(e) = report::json::write(&results, output) {
        log::error!("could not write report: {:#}", e);
    }

    page.quit().await
}
