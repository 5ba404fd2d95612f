pub mod json;

use colored::Colorize;

use crate::runner::state::RunResults;

/// Print the human-readable summary block
///
/// Advisory output only; the counts mirror what a consumer derives by
/// scanning the written JSON file.
pub fn print_summary(results: &RunResults) {
    let summary = results.summary();

    println!("\n--- Test Results Summary ---");
    println!("Total tests: {}", summary.total);
    println!("Passed: {}", summary.passed.to_string().green());
    println!("Failed: {}", summary.failed.to_string().red());
    println!("Errors: {}", summary.errors.to_string().yellow());
}
