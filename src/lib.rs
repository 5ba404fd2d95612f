pub mod driver;
pub mod report;
pub mod runner;

// Re-export common items
pub use driver::traits::{PageDriver, Selector};
pub use runner::run_all_tests;
pub use runner::state::{ResultRecord, RunResults, Status};
