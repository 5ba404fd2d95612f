pub mod traits;
pub mod web;

pub use traits::{DriverError, PageDriver, Selector};
pub use web::{WebDriver, WebDriverConfig};
