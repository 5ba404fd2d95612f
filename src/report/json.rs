use std::path::Path;

use anyhow::{Context, Result};

use crate::runner::state::RunResults;

/// Write the pretty-printed JSON report, overwriting any existing file
pub fn write(results: &RunResults, output: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(results)?;
    std::fs::write(output, json)
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!("\nDetailed test results saved to {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::state::ResultRecord;

    #[test]
    fn test_written_report_round_trips() {
        let mut results = RunResults::default();
        results.dashboard_panels.push(ResultRecord::pass(
            "Panel removal",
            "Panels before: 6, after: 5",
        ));
        results
            .csv_import
            .push(ResultRecord::fail("Import section presence", "CSV import section not found in settings"));

        let path = std::env::temp_dir().join(format!("timeoff_report_{}.json", std::process::id()));
        write(&results, &path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        // Pretty-printed with the fixed shape
        assert!(raw.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["dashboard_panels"][0]["status"], "Pass");
        assert_eq!(
            value["dashboard_panels"][0]["details"],
            "Panels before: 6, after: 5"
        );
        assert_eq!(value["csv_import"][0]["status"], "Fail");
        assert_eq!(value.as_object().unwrap().len(), 6);

        let parsed: RunResults = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, results);
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let path = std::env::temp_dir().join(format!("timeoff_prev_{}.json", std::process::id()));
        std::fs::write(&path, "{\"stale\": true}").unwrap();

        write(&RunResults::default(), &path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(!raw.contains("stale"));
        let parsed: RunResults = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, RunResults::default());
    }
}
