// Command-line interface definitions and parsing for urlook

use crate::config::CliConfig;
use crate::core::constants::output_formats;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Files to check; omit when piping text on standard input
    pub files: Vec<String>,

    // Core Options
    /// Fail when a URL occurs more than once
    #[arg(long = "fail-on-duplicate", help_heading = "Core Options")]
    pub fail_on_duplicate: bool,

    /// Request timeout in seconds, 0 for none (default: 10)
    #[arg(
        short = 't',
        long,
        value_name = "SECONDS",
        allow_negative_numbers = true,
        help_heading = "Core Options"
    )]
    pub timeout: Option<i64>,

    /// URLs containing this text are not checked (repeatable, comma-separated)
    #[arg(
        short = 'w',
        long,
        value_name = "URL",
        value_delimiter = ',',
        help_heading = "Core Options"
    )]
    pub white: Vec<String>,

    /// Parallel workers (default: twice the CPU cores)
    #[arg(
        long,
        value_name = "COUNT",
        allow_negative_numbers = true,
        help_heading = "Core Options"
    )]
    pub workers: Option<i64>,

    // Retry & Policy
    /// Retries after a failed request or retryable status (default: 2)
    #[arg(long, value_name = "COUNT", help_heading = "Retry & Policy")]
    pub retry: Option<u8>,

    /// Delay between retries in ms (default: 1000)
    #[arg(long, value_name = "MS", help_heading = "Retry & Policy")]
    pub retry_delay: Option<u64>,

    /// Do not report redirects as issues
    #[arg(long, help_heading = "Retry & Policy")]
    pub allow_redirects: bool,

    /// Fail when the input contains no URLs
    #[arg(long, help_heading = "Retry & Policy")]
    pub fail_on_empty: bool,

    // Output & Verbosity
    /// Suppress progress output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Output format (default: text)
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    /// Disable progress output
    #[arg(long, help_heading = "Output & Verbosity")]
    pub no_progress: bool,

    /// Show a progress bar instead of status glyphs
    #[arg(long, help_heading = "Output & Verbosity")]
    pub progress_bar: bool,

    // Network
    /// Custom User-Agent header
    #[arg(long, value_name = "AGENT", help_heading = "Network")]
    pub user_agent: Option<String>,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

/// Convert derive-based CLI arguments directly to CliConfig structure
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    let white_list: Vec<String> = cli
        .white
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    CliConfig {
        timeout: cli.timeout,
        workers: cli.workers,
        fail_on_duplicates: cli.fail_on_duplicate,
        white_list: (!white_list.is_empty()).then_some(white_list),

        retry_attempts: cli.retry,
        retry_delay: cli.retry_delay,
        allow_redirects: cli.allow_redirects,
        fail_on_empty: cli.fail_on_empty,

        quiet: cli.quiet,
        verbose: cli.verbose,
        output_format: cli.format.clone(),
        no_progress: cli.no_progress,
        progress_bar: cli.progress_bar,

        user_agent: cli.user_agent.clone(),

        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("urlook").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn test_cli_to_config_default() {
        let cli = parse(&["README.md"]);
        let config = cli_to_config(&cli);

        assert_eq!(cli.files, vec!["README.md"]);
        assert_eq!(config.timeout, None);
        assert_eq!(config.workers, None);
        assert!(!config.fail_on_duplicates);
        assert_eq!(config.white_list, None);
        assert_eq!(config.output_format, None);
        assert!(!config.quiet);
        assert!(!config.no_config);
    }

    #[test]
    fn test_cli_to_config_all_options() {
        let cli = parse(&[
            "a.md",
            "b.md",
            "--fail-on-duplicate",
            "-t",
            "20",
            "-w",
            "example.com",
            "--workers",
            "8",
            "--retry",
            "1",
            "--retry-delay",
            "50",
            "--allow-redirects",
            "--fail-on-empty",
            "-q",
            "-v",
            "--format",
            "json",
            "--no-progress",
            "--progress-bar",
            "--user-agent",
            "agent/1",
            "--config",
            "custom.toml",
            "--no-config",
        ]);
        let config = cli_to_config(&cli);

        assert_eq!(cli.files, vec!["a.md", "b.md"]);
        assert!(config.fail_on_duplicates);
        assert_eq!(config.timeout, Some(20));
        assert_eq!(config.white_list, Some(vec!["example.com".to_string()]));
        assert_eq!(config.workers, Some(8));
        assert_eq!(config.retry_attempts, Some(1));
        assert_eq!(config.retry_delay, Some(50));
        assert!(config.allow_redirects);
        assert!(config.fail_on_empty);
        assert!(config.quiet);
        assert!(config.verbose);
        assert_eq!(config.output_format.as_deref(), Some("json"));
        assert!(config.no_progress);
        assert!(config.progress_bar);
        assert_eq!(config.user_agent.as_deref(), Some("agent/1"));
        assert_eq!(config.config_file.as_deref(), Some("custom.toml"));
        assert!(config.no_config);
    }

    #[test]
    fn test_cli_negative_numbers_are_parsed() {
        let cli = parse(&["a.md", "--timeout", "-1", "--workers", "-3"]);

        assert_eq!(cli.timeout, Some(-1));
        assert_eq!(cli.workers, Some(-3));
    }

    #[test]
    fn test_cli_white_list_repeat_and_comma() {
        let cli = parse(&["a.md", "-w", "a.com, b.com", "--white", "c.com", "-w", " "]);
        let config = cli_to_config(&cli);

        assert_eq!(
            config.white_list,
            Some(vec![
                "a.com".to_string(),
                "b.com".to_string(),
                "c.com".to_string()
            ])
        );
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        let result = Cli::try_parse_from(["urlook", "a.md", "--format", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_no_files() {
        let cli = parse(&[]);
        assert!(cli.files.is_empty());
    }
}
