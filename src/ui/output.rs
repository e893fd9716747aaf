//! Output formatting and display logic for urlook

use std::io::{self, Write};

use crate::core::constants::output_formats;
use crate::core::error::Result;
use crate::core::types::CheckResult;
use crate::reporting::report::RunReport;
use crate::ui::color::{Colors, colorize};
use crate::validation::status::StatusCategory;

/// How a finished run is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Minimal,
    Json,
}

impl OutputFormat {
    /// Unknown names fall back to text; config validation rejects them earlier
    pub fn from_name(name: &str) -> Self {
        match name {
            output_formats::MINIMAL => OutputFormat::Minimal,
            output_formats::JSON => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }

    pub fn is_colored(self) -> bool {
        self == OutputFormat::Text
    }

    /// Whether progress and the URL list belong on stdout
    pub fn is_human(self) -> bool {
        self != OutputFormat::Json
    }
}

fn paint(text: &str, color: &str, colored: bool) -> String {
    if colored {
        colorize(text, color)
    } else {
        text.to_string()
    }
}

/// `URLs to check: N` followed by the numbered list
pub fn display_url_list<W: Write>(out: &mut W, urls: &[String], colored: bool) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        paint(&format!("URLs to check: {}", urls.len()), Colors::BOLD, colored)
    )?;
    for (i, url) in urls.iter().enumerate() {
        writeln!(out, "{:>4}. {}", i + 1, url)?;
    }
    writeln!(out)
}

/// White list, issues and duplicates blocks of a finished run
pub fn display_report<W: Write>(out: &mut W, report: &RunReport, colored: bool) -> io::Result<()> {
    if !report.white_listed.is_empty() {
        writeln!(
            out,
            "\n{}",
            paint(
                &format!("White listed URLs ({}):", report.white_listed.len()),
                Colors::CYAN,
                colored
            )
        )?;
        for url in &report.white_listed {
            writeln!(out, " - {url}")?;
        }
    }

    if !report.issues.is_empty() {
        writeln!(
            out,
            "\n{}",
            paint(
                &format!("Issues ({}):", report.issues.len()),
                Colors::BOLD,
                colored
            )
        )?;
        for (i, issue) in report.issues.iter().enumerate() {
            writeln!(out, "{:>4}. {}", i + 1, display_issue(issue, colored))?;
        }
    }

    if report.duplicates_failed() {
        writeln!(out, "\n{}", paint("Duplicates:", Colors::BOLD, colored))?;
        for duplicate in &report.duplicates {
            writeln!(out, " - {} ({})", duplicate.url, duplicate.count)?;
        }
    }

    Ok(())
}

fn display_issue(issue: &CheckResult, colored: bool) -> String {
    let color = match issue.category {
        StatusCategory::Redirect | StatusCategory::Informational => Colors::YELLOW,
        StatusCategory::Unknown => Colors::BRIGHT_BLACK,
        _ => Colors::RED,
    };
    paint(&issue.to_string(), color, colored)
}

/// Final line: success on `out`, the failure reason on `err`
pub fn display_verdict<W: Write, E: Write>(
    out: &mut W,
    err: &mut E,
    report: &RunReport,
    colored: bool,
) -> io::Result<()> {
    if report.is_success() {
        writeln!(out, "\n{}", paint(&report.verdict.to_string(), Colors::GREEN, colored))
    } else {
        writeln!(err, "\n{}", paint(&report.verdict.to_string(), Colors::RED, colored))
    }
}

/// The whole report as pretty-printed JSON
pub fn display_json<W: Write>(out: &mut W, report: &RunReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report).map_err(io::Error::from)?;
    writeln!(out)?;
    Ok(())
}
