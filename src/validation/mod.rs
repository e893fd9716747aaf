//! URL validation logic
//!
//! Status classification, duplicate and white-list handling, HTTP checks
//! and the worker pool that runs them.

pub mod checker;
pub mod pool;
pub mod registry;
pub mod status;

// Re-export commonly used items
pub use checker::{CheckUrl, CheckerSettings, HttpChecker, RetryPolicy};
pub use pool::WorkerPool;
pub use registry::{Classification, Duplicate, UrlRegistry, WhiteList, classify};
pub use status::StatusCategory;
