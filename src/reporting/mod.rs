//! Run reporting
//!
//! Aggregation of check results into a verdict, and structured logging.

pub mod logging;
pub mod report;

// Re-export commonly used items
pub use logging::init_logger;
pub use report::{FailureReason, ReportPolicy, RunReport, Verdict, aggregate};
