//! HTTP status classification and progress glyphs

use serde::Serialize;
use std::fmt;

/// Semantic classification of an HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCategory {
    /// No response obtained, or a code outside the known bands
    Unknown,
    Informational,
    Success,
    Redirect,
    ClientError,
    ServerError,
}

impl StatusCategory {
    /// Map a raw status code to its category. Bands are closed intervals;
    /// everything outside 100-599 (including 0) is `Unknown`.
    pub fn classify(code: u16) -> Self {
        match code {
            100..=199 => Self::Informational,
            200..=299 => Self::Success,
            300..=399 => Self::Redirect,
            400..=499 => Self::ClientError,
            500..=599 => Self::ServerError,
            _ => Self::Unknown,
        }
    }

    /// One-character glyph used in the live progress stream.
    pub fn sign(self) -> char {
        match self {
            Self::Informational => 'i',
            Self::Success => '✓',
            Self::Redirect => '→',
            Self::ClientError => 'x',
            Self::ServerError => 'X',
            Self::Unknown => '?',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Informational => "informational",
            Self::Success => "success",
            Self::Redirect => "redirect",
            Self::ClientError => "client error",
            Self::ServerError => "server error",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Canonical reason phrase for a status code, if it has one.
pub fn reason(code: u16) -> Option<&'static str> {
    reqwest::StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason())
}
