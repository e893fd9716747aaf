use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::sync::Mutex;
use std::time::Duration;

use crate::core::types::CheckResult;

/// Receives one notification per completed check, in completion order.
///
/// Called concurrently from every worker.
pub trait ProgressSink: Send + Sync {
    fn start(&self, _total: usize) {}

    fn record(&self, result: &CheckResult);

    fn finish(&self) {}
}

/// Discards all progress.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn record(&self, _result: &CheckResult) {}
}

/// Writes one status glyph per completed check.
pub struct GlyphStream<W: Write + Send> {
    out: Mutex<W>,
}

impl GlyphStream<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> GlyphStream<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write(&self, text: &str) {
        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        // Progress is best effort; a closed stdout must not stop the checks
        let _ = out.write_all(text.as_bytes()).and_then(|_| out.flush());
    }
}

impl<W: Write + Send> ProgressSink for GlyphStream<W> {
    fn record(&self, result: &CheckResult) {
        let mut buf = [0u8; 4];
        self.write(result.sign().encode_utf8(&mut buf));
    }

    fn finish(&self) {
        self.write("\n");
    }
}

/// Progress bar showing checked/total with the glyph trail as message.
pub struct ProgressReporter {
    bar: ProgressBar,
    trail: Mutex<String>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self::with_bar(ProgressBar::new(0))
    }

    /// Reporter that renders nowhere, for tests and non-terminal output
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::hidden())
    }

    fn with_bar(bar: ProgressBar) -> Self {
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.yellow/red}] {pos}/{len} URLs checked {msg}")
        {
            bar.set_style(style.progress_chars("#>-"));
        }
        Self {
            bar,
            trail: Mutex::new(String::new()),
        }
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn trail(&self) -> String {
        match self.trail.lock() {
            Ok(trail) => trail.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for ProgressReporter {
    fn start(&self, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.enable_steady_tick(Duration::from_millis(120));
    }

    fn record(&self, result: &CheckResult) {
        let message = {
            let mut trail = match self.trail.lock() {
                Ok(trail) => trail,
                Err(poisoned) => poisoned.into_inner(),
            };
            trail.push(result.sign());
            trail.clone()
        };
        self.bar.set_message(message);
        self.bar.inc(1);
    }

    fn finish(&self) {
        self.bar.finish();
    }
}
