//! urlook finds http(s) URLs in text and checks that they still resolve.
//!
//! URLs are deduplicated and white-list filtered, checked concurrently by a
//! fixed pool of workers without following redirects, and aggregated into a
//! single verdict.

pub mod auditor;
pub mod config;
pub mod core;
pub mod discovery;
pub mod reporting;
pub mod ui;
pub mod validation;

// Re-export commonly used items
pub use crate::auditor::Auditor;
pub use crate::config::{CliConfig, Config};
pub use crate::core::{CheckResult, CheckTask, Result, UrlookError};
pub use crate::discovery::{Finder, InputSource, UrlFinder};
pub use crate::reporting::{FailureReason, ReportPolicy, RunReport, Verdict};
pub use crate::validation::{CheckUrl, StatusCategory};
