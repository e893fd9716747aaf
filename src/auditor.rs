use log::{debug, info};
use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, invalid_timeout};
use crate::core::error::Result;
use crate::reporting::report::{ReportPolicy, RunReport, aggregate};
use crate::ui::progress::ProgressSink;
use crate::validation::checker::{CheckUrl, CheckerSettings, HttpChecker, RetryPolicy};
use crate::validation::pool::WorkerPool;
use crate::validation::registry::{UrlRegistry, WhiteList, classify};

/// One run over a set of candidate URLs.
///
/// Holds the URL registry and every setting the run uses; nothing is
/// shared with other runs.
#[derive(Debug, Clone)]
pub struct Auditor {
    registry: UrlRegistry,
    checker: CheckerSettings,
    pool: WorkerPool,
    white_list: WhiteList,
    policy: ReportPolicy,
}

impl Auditor {
    pub fn new<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            registry: UrlRegistry::new(urls),
            checker: CheckerSettings::default(),
            pool: WorkerPool::default(),
            white_list: WhiteList::default(),
            policy: ReportPolicy::default(),
        }
    }

    /// Build an auditor and apply a merged configuration to it.
    pub fn from_config<I, S>(urls: I, config: &Config) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        config.validate()?;

        let mut auditor = Self::new(urls);
        if let Some(timeout) = config.timeout {
            auditor.set_timeout(timeout)?;
        }
        if let Some(workers) = config.workers {
            auditor.set_worker_count(workers);
        }
        auditor.set_fail_on_duplicates(config.fail_on_duplicates.unwrap_or(false));
        auditor.set_allow_redirects(config.allow_redirects.unwrap_or(false));
        if let Some(ref white_list) = config.white_list {
            auditor.set_white_list(white_list.as_slice());
        }

        let defaults = RetryPolicy::default();
        auditor.set_retry(RetryPolicy {
            attempts: config.retry_attempts.unwrap_or(defaults.attempts),
            delay: config
                .retry_delay
                .map(Duration::from_millis)
                .unwrap_or(defaults.delay),
            status_codes: config
                .retry_status_codes
                .clone()
                .unwrap_or(defaults.status_codes),
        });
        if let Some(ref user_agent) = config.user_agent {
            auditor.set_user_agent(user_agent.clone());
        }

        Ok(auditor)
    }

    /// Set the request timeout in seconds; `0` disables it.
    pub fn set_timeout(&mut self, seconds: i64) -> Result<()> {
        if seconds < 0 {
            return Err(invalid_timeout(seconds));
        }
        self.checker.timeout = match seconds {
            0 => None,
            secs => Some(Duration::from_secs(secs as u64)),
        };
        Ok(())
    }

    /// Set the number of workers. There must be at least one, so smaller
    /// values leave the current count in place.
    pub fn set_worker_count(&mut self, count: i64) {
        if count < 1 {
            debug!("Ignoring worker count {count}, keeping {}", self.pool.worker_count());
            return;
        }
        self.pool = WorkerPool::new(count as usize);
    }

    pub fn set_fail_on_duplicates(&mut self, fail: bool) {
        self.policy.fail_on_duplicates = fail;
    }

    pub fn set_allow_redirects(&mut self, allow: bool) {
        self.policy.allow_redirects = allow;
    }

    pub fn set_white_list<S: AsRef<str>>(&mut self, patterns: &[S]) {
        self.white_list = WhiteList::new(patterns);
    }

    pub fn set_retry(&mut self, retry: RetryPolicy) {
        self.checker.retry = retry;
    }

    pub fn set_user_agent(&mut self, user_agent: String) {
        self.checker.user_agent = user_agent;
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.checker.timeout
    }

    pub fn worker_count(&self) -> usize {
        self.pool.worker_count()
    }

    pub fn white_list(&self) -> &WhiteList {
        &self.white_list
    }

    pub fn policy(&self) -> ReportPolicy {
        self.policy
    }

    pub fn checker_settings(&self) -> &CheckerSettings {
        &self.checker
    }

    pub fn registry(&self) -> &UrlRegistry {
        &self.registry
    }

    /// URLs that will be checked, in dispatch order
    pub fn urls_to_check(&self) -> Vec<String> {
        classify(&self.registry, &self.white_list).unique
    }

    /// Check all URLs over HTTP and build the report.
    ///
    /// Fails only if the HTTP client cannot be built.
    pub async fn audit(&self, progress: Arc<dyn ProgressSink>) -> Result<RunReport> {
        let checker = HttpChecker::new(&self.checker)?;
        Ok(self.audit_with(Arc::new(checker), progress).await)
    }

    /// Check all URLs with the given checker and build the report.
    pub async fn audit_with(
        &self,
        checker: Arc<dyn CheckUrl>,
        progress: Arc<dyn ProgressSink>,
    ) -> RunReport {
        let classification = classify(&self.registry, &self.white_list);
        info!(
            "Checking {} URL(s), {} white listed, {} duplicated",
            classification.unique.len(),
            classification.white_listed.len(),
            classification.duplicates.len()
        );

        let results = self
            .pool
            .run(&classification.unique, checker, progress)
            .await;

        aggregate(
            &results,
            &classification.duplicates,
            &classification.white_listed,
            self.policy,
        )
    }
}
