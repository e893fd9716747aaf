use serde::Serialize;
use std::fmt;

use crate::validation::status::{self, StatusCategory};

/// A URL waiting to be checked together with the result slot it owns.
///
/// The index is the URL's position in the dispatch order, so the worker
/// that takes the task is the only writer of that slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckTask {
    pub index: usize,
    pub url: String,
}

impl CheckTask {
    pub fn new(index: usize, url: impl Into<String>) -> Self {
        Self {
            index,
            url: url.into(),
        }
    }
}

/// Outcome of checking a single URL.
///
/// A status code of `0` means no response was obtained at all; the
/// message then carries the request error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub url: String,
    pub category: StatusCategory,
    pub status_code: u16,
    pub message: String,
}

impl CheckResult {
    /// Create a result for a response that was received.
    pub fn from_status(url: impl Into<String>, status_code: u16) -> Self {
        Self {
            url: url.into(),
            category: StatusCategory::classify(status_code),
            status_code,
            message: String::new(),
        }
    }

    /// Create a result for a request that never produced a response.
    pub fn failed(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            category: StatusCategory::Unknown,
            status_code: 0,
            message: message.into(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn is_success(&self) -> bool {
        self.category == StatusCategory::Success
    }

    pub fn is_redirect(&self) -> bool {
        self.category == StatusCategory::Redirect
    }

    /// Progress glyph for this result
    pub fn sign(&self) -> char {
        self.category.sign()
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.url)?;
        if self.status_code != 0 {
            match status::reason(self.status_code) {
                Some(reason) => write!(f, " [{}, {}]", self.status_code, reason)?,
                None => write!(f, " [{}]", self.status_code)?,
            }
        }
        if self.message.is_empty() {
            Ok(())
        } else if self.is_redirect() {
            write!(f, " -> {}", self.message)
        } else {
            write!(f, ": {}", self.message)
        }
    }
}
