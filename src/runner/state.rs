use serde::{Deserialize, Serialize};

/// Outcome of one check
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Status {
    Pass,
    Fail,
    Skip,
    Error,
}

/// One outcome entry appended during a procedure. Immutable once appended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultRecord {
    pub test: String,
    pub status: Status,
    pub details: String,
}

impl ResultRecord {
    pub fn new(test: impl Into<String>, status: Status, details: impl Into<String>) -> Self {
        Self {
            test: test.into(),
            status,
            details: details.into(),
        }
    }

    pub fn pass(test: impl Into<String>, details: impl Into<String>) -> Self {
        Self::new(test, Status::Pass, details)
    }

    pub fn fail(test: impl Into<String>, details: impl Into<String>) -> Self {
        Self::new(test, Status::Fail, details)
    }

    pub fn skip(test: impl Into<String>, details: impl Into<String>) -> Self {
        Self::new(test, Status::Skip, details)
    }

    pub fn error(test: impl Into<String>, details: impl Into<String>) -> Self {
        Self::new(test, Status::Error, details)
    }
}

/// Results of one run, keyed by the six fixed category names
///
/// Field order matches execution order and is the order of keys in the
/// written report. Per-category insertion order is append order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunResults {
    pub user_management: Vec<ResultRecord>,
    pub district_changes: Vec<ResultRecord>,
    pub calendar_filter: Vec<ResultRecord>,
    pub dashboard_panels: Vec<ResultRecord>,
    pub dashboard_customization: Vec<ResultRecord>,
    pub csv_import: Vec<ResultRecord>,
}

impl RunResults {
    /// Category names and records in execution order
    pub fn categories(&self) -> [(&'static str, &Vec<ResultRecord>); 6] {
        [
            ("user_management", &self.user_management),
            ("district_changes", &self.district_changes),
            ("calendar_filter", &self.calendar_filter),
            ("dashboard_panels", &self.dashboard_panels),
            ("dashboard_customization", &self.dashboard_customization),
            ("csv_import", &self.csv_import),
        ]
    }

    pub fn summary(&self) -> RunSummary {
        let mut summary = RunSummary::default();
        for (_, records) in self.categories() {
            for record in records {
                summary.total += 1;
                match record.status {
                    Status::Pass => summary.passed += 1,
                    Status::Fail => summary.failed += 1,
                    Status::Skip => summary.skipped += 1,
                    Status::Error => summary.errors += 1,
                }
            }
        }
        summary
    }
}

/// Aggregate counts over all categories
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: u32,
    pub passed: u32,
    pub failed: u32,
    pub skipped: u32,
    pub errors: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_capitalized() {
        assert_eq!(serde_json::to_string(&Status::Pass).unwrap(), "\"Pass\"");
        assert_eq!(serde_json::to_string(&Status::Fail).unwrap(), "\"Fail\"");
        assert_eq!(serde_json::to_string(&Status::Skip).unwrap(), "\"Skip\"");
        assert_eq!(serde_json::to_string(&Status::Error).unwrap(), "\"Error\"");
    }

    #[test]
    fn test_record_shape() {
        let record = ResultRecord::pass("Search functionality", "Found 3 results");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "test": "Search functionality",
                "status": "Pass",
                "details": "Found 3 results"
            })
        );
    }

    #[test]
    fn test_report_has_six_fixed_keys_in_order() {
        let json = serde_json::to_string(&RunResults::default()).unwrap();
        let expected_order = [
            "user_management",
            "district_changes",
            "calendar_filter",
            "dashboard_panels",
            "dashboard_customization",
            "csv_import",
        ];
        let mut last = 0;
        for key in expected_order {
            let pos = json.find(&format!("\"{}\"", key)).unwrap();
            assert!(pos >= last, "key {} out of order", key);
            last = pos;
        }
    }

    #[test]
    fn test_summary_counts_match_records() {
        let mut results = RunResults::default();
        results.user_management.push(ResultRecord::pass("a", ""));
        results.user_management.push(ResultRecord::skip("b", ""));
        results.district_changes.push(ResultRecord::fail("c", ""));
        results.csv_import.push(ResultRecord::error("d", ""));
        results.csv_import.push(ResultRecord::pass("e", ""));

        let summary = results.summary();
        assert_eq!(summary.total, 5);
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.errors, 1);
    }

    #[test]
    fn test_summary_matches_serialized_report() {
        // Counts printed at the end must equal what a consumer derives by
        // scanning the JSON file.
        let mut results = RunResults::default();
        results.dashboard_panels.push(ResultRecord::pass(
            "Panel removal",
            "Panels before: 6, after: 5",
        ));
        results
            .dashboard_customization
            .push(ResultRecord::fail("Theme switching", "Theme did not change"));

        let json = serde_json::to_string_pretty(&results).unwrap();
        let parsed: RunResults = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.summary(), results.summary());
        assert_eq!(parsed, results);
    }
}
