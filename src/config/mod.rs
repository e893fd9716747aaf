//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::constants::{defaults, http_status, output_formats, timeouts};
use crate::core::error::{Result, UrlookError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Timeout in seconds for HTTP requests (0 disables it)
    pub timeout: Option<i64>,

    /// Number of parallel workers; values below 1 are ignored
    pub workers: Option<i64>,

    /// Fail the run when a URL occurs more than once
    pub fail_on_duplicates: Option<bool>,

    /// Substrings of URLs that are not checked
    pub white_list: Option<Vec<String>>,

    /// Retry attempts after a transient failure
    pub retry_attempts: Option<u8>,

    /// Delay between retries in milliseconds
    pub retry_delay: Option<u64>,

    /// Response codes that trigger a retry
    pub retry_status_codes: Option<Vec<u16>>,

    /// Custom User-Agent header
    pub user_agent: Option<String>,

    /// Do not report redirect responses as issues
    pub allow_redirects: Option<bool>,

    /// Fail when the input contains no URLs at all
    pub fail_on_empty: Option<bool>,

    /// Output format (text, minimal, json)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: Some(timeouts::DEFAULT_TIMEOUT_SECONDS),
            workers: None, // Will default to twice the CPU core count
            fail_on_duplicates: Some(false),
            white_list: None,
            retry_attempts: Some(defaults::RETRY_ATTEMPTS),
            retry_delay: Some(timeouts::DEFAULT_RETRY_DELAY_MS),
            retry_status_codes: None,
            user_agent: None,
            allow_redirects: Some(false),
            fail_on_empty: Some(false),
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            UrlookError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            UrlookError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        if let Ok(config) = Self::load_from_file(defaults::CONFIG_FILE_NAME) {
            return config;
        }

        // Check parent directories (up to 3 levels)
        for i in 1..=3 {
            let path = format!("{}{}", "../".repeat(i), defaults::CONFIG_FILE_NAME);
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        // Core options
        if let Some(timeout) = cli_config.timeout {
            self.timeout = Some(timeout);
        }
        if let Some(workers) = cli_config.workers {
            self.workers = Some(workers);
        }
        if cli_config.fail_on_duplicates {
            self.fail_on_duplicates = Some(true);
        }
        if let Some(ref white_list) = cli_config.white_list {
            self.white_list = Some(white_list.clone());
        }

        // Retry & policy
        if let Some(retry_attempts) = cli_config.retry_attempts {
            self.retry_attempts = Some(retry_attempts);
        }
        if let Some(retry_delay) = cli_config.retry_delay {
            self.retry_delay = Some(retry_delay);
        }
        if cli_config.allow_redirects {
            self.allow_redirects = Some(true);
        }
        if cli_config.fail_on_empty {
            self.fail_on_empty = Some(true);
        }

        // Output & network
        if let Some(ref user_agent) = cli_config.user_agent {
            self.user_agent = Some(user_agent.clone());
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    pub fn output_format(&self) -> &str {
        self.output_format
            .as_deref()
            .unwrap_or(output_formats::DEFAULT)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.timeout
            && timeout < 0
        {
            return Err(invalid_timeout(timeout));
        }

        if let Some(retry) = self.retry_attempts
            && retry > defaults::MAX_RETRY_ATTEMPTS
        {
            return Err(UrlookError::Config(format!(
                "Retry attempts of {retry} is very high and may cause long delays. Consider using a smaller value."
            )));
        }

        if let Some(ref codes) = self.retry_status_codes {
            for &code in codes {
                if !(http_status::MIN..=http_status::MAX).contains(&code) {
                    return Err(UrlookError::Config(format!(
                        "Status code {code} is not a valid HTTP status code. Expected a number between 100-599."
                    )));
                }
            }
        }

        if let Some(ref format) = self.output_format
            && !output_formats::ALL.contains(&format.as_str())
        {
            return Err(UrlookError::Config(format!(
                "Invalid output format '{format}'. Expected one of: {}.",
                output_formats::ALL.join(", ")
            )));
        }

        Ok(())
    }
}

/// Error for a negative request timeout
pub fn invalid_timeout(timeout: i64) -> UrlookError {
    UrlookError::Config(format!("invalid timeout value: {timeout}"))
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    // Core options
    pub timeout: Option<i64>,          // --timeout
    pub workers: Option<i64>,          // --workers
    pub fail_on_duplicates: bool,      // --fail-on-duplicate
    pub white_list: Option<Vec<String>>, // --white

    // Retry & policy
    pub retry_attempts: Option<u8>, // --retry
    pub retry_delay: Option<u64>,   // --retry-delay
    pub allow_redirects: bool,      // --allow-redirects
    pub fail_on_empty: bool,        // --fail-on-empty

    // Output & format
    pub quiet: bool,                   // --quiet
    pub verbose: bool,                 // --verbose
    pub output_format: Option<String>, // --format
    pub no_progress: bool,             // --no-progress
    pub progress_bar: bool,            // --progress-bar

    // Network
    pub user_agent: Option<String>, // --user-agent

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}
