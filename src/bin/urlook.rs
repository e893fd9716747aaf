use clap::Parser;
use urlook::config::{CliConfig, Config};
use urlook::discovery::{Finder, InputSource, UrlFinder};
use urlook::reporting::RunReport;
use urlook::reporting::logging;
use urlook::ui::output::{self, OutputFormat};
use urlook::ui::{Cli, GlyphStream, NoProgress, ProgressReporter, ProgressSink, cli_to_config};
use urlook::Auditor;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run_urlook_logic(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Main URL checking logic extracted from main() for testing
pub async fn run_urlook_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);

    // Load and merge configuration
    let config = load_and_merge_config(&cli_config)?;

    let output_settings = setup_output_settings(&cli_config, &config);
    logging::init_logger(output_settings.verbose, output_settings.quiet);

    // Read input and extract URLs
    let files: Vec<PathBuf> = cli.files.iter().map(PathBuf::from).collect();
    let text = InputSource::detect(&files)?.read_to_string()?;
    let urls = Finder::default().find_urls(&text);

    if urls.is_empty() {
        let report = RunReport::empty(config.fail_on_empty.unwrap_or(false));
        display_no_urls(&report, &output_settings)?;
        return Ok(report.verdict.exit_code());
    }

    let auditor = Auditor::from_config(urls, &config)?;
    logging::log_url_discovery(auditor.registry().len(), auditor.registry().total());
    logging::log_config_info(&config, auditor.worker_count());

    let to_check = auditor.urls_to_check();
    if output_settings.should_show_url_info() {
        output::display_url_list(&mut io::stdout().lock(), &to_check, output_settings.colored())?;
    }

    let progress = create_progress_sink(&output_settings);
    logging::log_check_start(to_check.len(), auditor.worker_count());
    let started = Instant::now();

    let report = auditor.audit(progress).await?;

    logging::log_check_complete(
        report.checked,
        report.issues.len(),
        started.elapsed().as_millis(),
    );

    display_final_results(&report, &output_settings)?;
    Ok(report.verdict.exit_code())
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

/// Settings for output formatting and display
pub struct OutputSettings {
    pub quiet: bool,
    pub verbose: bool,
    pub format: OutputFormat,
    pub show_progress: bool,
    pub progress_bar: bool,
}

impl OutputSettings {
    pub fn should_show_url_info(&self) -> bool {
        !self.quiet && self.format.is_human()
    }

    pub fn colored(&self) -> bool {
        self.format.is_colored()
    }
}

/// Setup output settings based on CLI and config
pub fn setup_output_settings(cli_config: &CliConfig, config: &Config) -> OutputSettings {
    let quiet = cli_config.quiet;
    let verbose = config.verbose.unwrap_or(false);
    let format = OutputFormat::from_name(config.output_format());
    let show_progress = !quiet && !cli_config.no_progress && format == OutputFormat::Text;

    OutputSettings {
        quiet,
        verbose,
        format,
        show_progress,
        progress_bar: cli_config.progress_bar,
    }
}

pub fn create_progress_sink(output_settings: &OutputSettings) -> Arc<dyn ProgressSink> {
    if !output_settings.show_progress {
        Arc::new(NoProgress)
    } else if output_settings.progress_bar {
        Arc::new(ProgressReporter::new())
    } else {
        Arc::new(GlyphStream::stdout())
    }
}

pub fn display_no_urls(
    report: &RunReport,
    output_settings: &OutputSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    if output_settings.format == OutputFormat::Json {
        output::display_json(&mut io::stdout().lock(), report)?;
    } else if report.is_success() {
        println!("no URLs found");
    } else {
        eprintln!("{}", report.verdict);
    }
    Ok(())
}

pub fn display_final_results(
    report: &RunReport,
    output_settings: &OutputSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    if output_settings.format == OutputFormat::Json {
        output::display_json(&mut io::stdout().lock(), report)?;
        return Ok(());
    }

    let colored = output_settings.colored();
    let mut stdout = io::stdout().lock();
    if !output_settings.quiet {
        output::display_report(&mut stdout, report, colored)?;
    }
    output::display_verdict(&mut stdout, &mut io::stderr().lock(), report, colored)?;
    Ok(())
}
