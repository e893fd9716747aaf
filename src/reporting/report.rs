//! Aggregation of check results into a run verdict

use serde::{Serialize, Serializer};
use std::fmt;

use crate::core::types::CheckResult;
use crate::validation::registry::Duplicate;
use crate::validation::status::StatusCategory;

/// Which outcomes fail a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportPolicy {
    /// Repeated URLs fail the run when nothing else did
    pub fail_on_duplicates: bool,
    /// Redirect responses are not reported as issues
    pub allow_redirects: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// Number of checked URLs that did not succeed
    Issues(usize),
    /// Number of distinct URLs occurring more than once
    Duplicates(usize),
    /// Nothing to check was found in the input
    NoUrls,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Issues(count) => write!(f, "issues found: {count}"),
            FailureReason::Duplicates(count) => write!(f, "duplicates found: {count}"),
            FailureReason::NoUrls => write!(f, "no URLs found"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Success,
    Failure(FailureReason),
}

impl Verdict {
    /// Verdict for input in which no URLs were found at all
    pub fn for_empty_input(fail_on_empty: bool) -> Self {
        if fail_on_empty {
            Verdict::Failure(FailureReason::NoUrls)
        } else {
            Verdict::Success
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Verdict::Success)
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Verdict::Success => 0,
            Verdict::Failure(_) => 1,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Success => write!(f, "no issues found"),
            Verdict::Failure(reason) => write!(f, "{reason}"),
        }
    }
}

impl Serialize for Verdict {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Everything the CLI needs to render a finished run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub checked: usize,
    pub white_listed: Vec<String>,
    pub duplicates: Vec<Duplicate>,
    pub issues: Vec<CheckResult>,
    pub verdict: Verdict,
}

impl RunReport {
    /// Report for a run where nothing was found to check
    pub fn empty(fail_on_empty: bool) -> Self {
        Self {
            checked: 0,
            white_listed: Vec::new(),
            duplicates: Vec::new(),
            issues: Vec::new(),
            verdict: Verdict::for_empty_input(fail_on_empty),
        }
    }

    pub fn is_success(&self) -> bool {
        self.verdict.is_success()
    }

    /// Duplicates are listed only when they decided the verdict
    pub fn duplicates_failed(&self) -> bool {
        matches!(
            self.verdict,
            Verdict::Failure(FailureReason::Duplicates(_))
        )
    }
}

/// Combine results, duplicates and white-listed URLs into a report.
///
/// Issues take precedence over duplicates; white-listed URLs never fail
/// a run. The function is pure.
pub fn aggregate(
    results: &[CheckResult],
    duplicates: &[Duplicate],
    white_listed: &[String],
    policy: ReportPolicy,
) -> RunReport {
    let issues: Vec<CheckResult> = results
        .iter()
        .filter(|result| is_issue(result, policy))
        .cloned()
        .collect();

    let verdict = if !issues.is_empty() {
        Verdict::Failure(FailureReason::Issues(issues.len()))
    } else if policy.fail_on_duplicates && !duplicates.is_empty() {
        Verdict::Failure(FailureReason::Duplicates(duplicates.len()))
    } else {
        Verdict::Success
    };

    RunReport {
        checked: results.len(),
        white_listed: white_listed.to_vec(),
        duplicates: duplicates.to_vec(),
        issues,
        verdict,
    }
}

fn is_issue(result: &CheckResult, policy: ReportPolicy) -> bool {
    match result.category {
        StatusCategory::Success => false,
        StatusCategory::Redirect => !policy.allow_redirects,
        _ => true,
    }
}
