use std::fmt;

/// Error types for urlook operations.
///
/// Per-URL network failures are never represented here: they are recorded
/// as [`CheckResult`](crate::core::types::CheckResult) data instead.
#[derive(Debug)]
pub enum UrlookError {
    /// IO error (reading files, stdin, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Input could not be resolved or read
    Input(String),

    /// HTTP client error
    Http(reqwest::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),
}

impl fmt::Display for UrlookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlookError::Io(err) => write!(f, "IO error: {err}"),
            UrlookError::Config(msg) => write!(f, "Configuration error: {msg}"),
            UrlookError::Input(msg) => write!(f, "Input error: {msg}"),
            UrlookError::Http(err) => write!(f, "HTTP error: {err}"),
            UrlookError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
        }
    }
}

impl std::error::Error for UrlookError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UrlookError::Io(err) => Some(err),
            UrlookError::Http(err) => Some(err),
            UrlookError::TomlParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for UrlookError {
    fn from(err: std::io::Error) -> Self {
        UrlookError::Io(err)
    }
}

impl From<reqwest::Error> for UrlookError {
    fn from(err: reqwest::Error) -> Self {
        UrlookError::Http(err)
    }
}

impl From<toml::de::Error> for UrlookError {
    fn from(err: toml::de::Error) -> Self {
        UrlookError::TomlParsing(err)
    }
}

/// Type alias for Results using UrlookError
pub type Result<T> = std::result::Result<T, UrlookError>;
