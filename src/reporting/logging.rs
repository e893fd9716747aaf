use crate::config::Config;
use crate::core::types::CheckResult;
use log::{debug, error, info, warn};

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    // try_init: a second initialization in the same process is a no-op
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config, workers: usize) {
    let timeout = config.timeout.unwrap_or(0);
    let retry_attempts = config.retry_attempts.unwrap_or(0);
    let retry_delay = config.retry_delay.unwrap_or(0);
    let allow_redirects = config.allow_redirects.unwrap_or(false);
    let fail_on_duplicates = config.fail_on_duplicates.unwrap_or(false);

    info!("Configuration: workers={workers}, timeout={timeout}s");
    info!("Retry: attempts={retry_attempts}, delay={retry_delay}ms");
    info!("Policy: allow_redirects={allow_redirects}, fail_on_duplicates={fail_on_duplicates}");
    if let Some(ref white_list) = config.white_list {
        debug!("White list: {white_list:?}");
    }
}

/// Log URL discovery information
pub fn log_url_discovery(unique_urls: usize, total_found: usize) {
    info!("Found {unique_urls} unique URLs (from {total_found} total)");
}

pub fn log_check_start(url_count: usize, workers: usize) {
    info!("Checking {url_count} URLs with {workers} workers");
}

pub fn log_check_complete(url_count: usize, issues: usize, duration_ms: u128) {
    if issues == 0 {
        info!("Check complete: {url_count}/{url_count} URLs fine ({duration_ms}ms)");
    } else {
        warn!(
            "Check complete: {}/{} URLs fine, {} issues found ({}ms)",
            url_count.saturating_sub(issues),
            url_count,
            issues,
            duration_ms
        );
    }
}

/// Log individual check results for debugging
pub fn log_check_result(result: &CheckResult) {
    debug!("{} {result}", result.sign());
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}
