/// Application-wide constants to avoid magic values throughout the codebase.
///
/// Output format constants
pub mod output_formats {
    /// Text output format - coloured output with live progress glyphs
    pub const TEXT: &str = "text";
    /// Minimal output format - plain text without colours or progress
    pub const MINIMAL: &str = "minimal";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 3] = [TEXT, MINIMAL, JSON];
}

/// HTTP status code constants
pub mod http_status {
    /// HTTP 400 Bad Request
    pub const BAD_REQUEST: u16 = 400;
    /// HTTP 500 Internal Server Error
    pub const INTERNAL_SERVER_ERROR: u16 = 500;

    /// Lowest valid HTTP status code
    pub const MIN: u16 = 100;
    /// Highest valid HTTP status code
    pub const MAX: u16 = 599;
}

/// Timeout and duration constants
pub mod timeouts {
    /// Default request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECONDS: i64 = 10;
    /// Default delay between retries in milliseconds
    pub const DEFAULT_RETRY_DELAY_MS: u64 = 1000;
}

/// Default configuration values
pub mod defaults {
    use super::http_status;

    /// Additional attempts after the first failed one
    pub const RETRY_ATTEMPTS: u8 = 2;
    /// Upper bound accepted for retry attempts
    pub const MAX_RETRY_ATTEMPTS: u8 = 20;
    /// Status codes that trigger a retry
    pub const RETRY_STATUS_CODES: [u16; 2] =
        [http_status::BAD_REQUEST, http_status::INTERNAL_SERVER_ERROR];
    /// Workers per available CPU core
    pub const WORKERS_PER_CPU: usize = 2;
    /// Configuration file looked up in the working directory and its parents
    pub const CONFIG_FILE_NAME: &str = ".urlook.toml";
}

/// Messages recorded in check results
pub mod messages {
    /// Redirect response without a Location header
    pub const NO_REDIRECT_LOCATION: &str = "could not retrieve redirect location";
    /// Redirect response with a blank Location header
    pub const UNREADABLE_REDIRECT_LOCATION: &str = "could not read redirect location";
    /// Slot left empty because its worker stopped before storing a result
    pub const CHECK_NOT_COMPLETED: &str = "check did not complete";
}

/// Identifying User-Agent sent with every request unless overridden
pub fn default_user_agent() -> String {
    format!(
        "{}_{}:{}:v{}",
        std::env::consts::OS,
        std::env::consts::ARCH,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )
}
