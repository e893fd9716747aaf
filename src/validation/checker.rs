use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderValue, LOCATION};
use reqwest::redirect::Policy;
use tokio::time::{Duration, sleep};

use crate::core::constants::{default_user_agent, defaults, messages, timeouts};
use crate::core::error::Result;
use crate::core::types::CheckResult;

/// Checks a single URL. Implementations never fail: every problem is
/// recorded in the returned [`CheckResult`].
#[async_trait]
pub trait CheckUrl: Send + Sync {
    async fn check(&self, url: &str) -> CheckResult;
}

/// When and how often a check is repeated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Additional attempts after the first one
    pub attempts: u8,
    /// Fixed pause between attempts
    pub delay: Duration,
    /// Response codes considered transient
    pub status_codes: Vec<u16>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: defaults::RETRY_ATTEMPTS,
            delay: Duration::from_millis(timeouts::DEFAULT_RETRY_DELAY_MS),
            status_codes: defaults::RETRY_STATUS_CODES.to_vec(),
        }
    }
}

impl RetryPolicy {
    pub fn none() -> Self {
        Self {
            attempts: 0,
            ..Default::default()
        }
    }

    /// A request that got no response at all is always retried.
    pub fn is_retryable(&self, result: &CheckResult) -> bool {
        result.status_code == 0 || self.status_codes.contains(&result.status_code)
    }
}

/// Settings the HTTP checker is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerSettings {
    /// `None` disables the request timeout
    pub timeout: Option<Duration>,
    pub user_agent: String,
    pub retry: RetryPolicy,
}

impl Default for CheckerSettings {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(timeouts::DEFAULT_TIMEOUT_SECONDS as u64)),
            user_agent: default_user_agent(),
            retry: RetryPolicy::default(),
        }
    }
}

/// Checks URLs with GET requests that never follow redirects.
#[derive(Debug)]
pub struct HttpChecker {
    client: reqwest::Client,
    retry: RetryPolicy,
}

impl HttpChecker {
    pub fn new(settings: &CheckerSettings) -> Result<Self> {
        let mut client_builder = reqwest::Client::builder()
            .redirect(Policy::none())
            .user_agent(settings.user_agent.as_str());

        if let Some(timeout) = settings.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        Ok(Self {
            client: client_builder.build()?,
            retry: settings.retry.clone(),
        })
    }

    /// One request. The response is dropped before returning, which releases
    /// its connection without reading the body.
    async fn attempt(&self, url: &str) -> CheckResult {
        match self.client.get(url).send().await {
            Ok(response) => {
                let result = CheckResult::from_status(url, response.status().as_u16());
                if !result.is_redirect() {
                    return result;
                }
                let location = redirect_location(response.headers().get(LOCATION));
                result.with_message(location)
            }
            Err(err) => CheckResult::failed(url, describe_error(&err)),
        }
    }
}

#[async_trait]
impl CheckUrl for HttpChecker {
    async fn check(&self, url: &str) -> CheckResult {
        let mut attempt = 0;
        loop {
            let result = self.attempt(url).await;
            if attempt >= self.retry.attempts || !self.retry.is_retryable(&result) {
                return result;
            }
            attempt += 1;
            debug!(
                "Retrying {url} ({attempt}/{}) after {}",
                self.retry.attempts,
                describe_result(&result)
            );
            sleep(self.retry.delay).await;
        }
    }
}

/// Redirect target as text. Non-ASCII bytes are decoded lossily; only a
/// missing or blank header is reported as such.
fn redirect_location(value: Option<&HeaderValue>) -> String {
    let Some(value) = value else {
        return messages::NO_REDIRECT_LOCATION.to_string();
    };
    let location = String::from_utf8_lossy(value.as_bytes());
    if location.trim().is_empty() {
        messages::UNREADABLE_REDIRECT_LOCATION.to_string()
    } else {
        location.into_owned()
    }
}

/// Innermost useful description of a request error
fn describe_error(err: &reqwest::Error) -> String {
    std::error::Error::source(err)
        .map(|e| e.to_string())
        .unwrap_or_else(|| err.to_string())
}

fn describe_result(result: &CheckResult) -> String {
    if result.status_code == 0 {
        result.message.clone()
    } else {
        format!("status {}", result.status_code)
    }
}
