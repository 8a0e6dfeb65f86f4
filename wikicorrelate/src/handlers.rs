use clap::ArgMatches;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::Level;
use url::Url;
use wikicorrelate_core::report::{
    CorrelationReport, NO_CORRELATION, ReportFormat, format_path, render_report, save_report,
};
use wikicorrelate_core::{CorrelateOptions, SearchResult, execute_correlation};

fn lookup<T: Clone + Send + Sync + 'static>(matches: &ArgMatches, id: &str) -> Option<T> {
    matches.try_get_one::<T>(id).ok().flatten().cloned()
}

/// Build correlation options from the five positional arguments and flags.
///
/// Works for the `ui` subcommand too, where only `--base-url` is known and
/// everything else keeps the form defaults.
pub fn options_from_matches(matches: &ArgMatches) -> CorrelateOptions {
    let defaults = CorrelateOptions::default();
    let options = CorrelateOptions::new(
        lookup::<String>(matches, "SOURCE"),
        lookup::<String>(matches, "DESTINATION"),
        lookup::<usize>(matches, "HOPS").unwrap_or(defaults.max_hops),
        lookup::<usize>(matches, "MSG_LEVEL").unwrap_or(defaults.msg_level),
        lookup::<u64>(matches, "TIMEOUT").unwrap_or(defaults.timeout_secs),
    );

    match lookup::<Url>(matches, "base-url") {
        Some(base_url) => options.with_base_url(base_url.as_str()),
        None => options,
    }
}

/// Stderr writer that hides the spinner while a log line is printed.
#[derive(Clone, Default)]
pub struct SpinnerWriter {
    spinner: Option<ProgressBar>,
}

impl SpinnerWriter {
    pub fn new(spinner: Option<ProgressBar>) -> Self {
        Self { spinner }
    }
}

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &self.spinner {
            Some(spinner) => spinner.suspend(|| io::stderr().write_all(buf))?,
            None => io::stderr().write_all(buf)?,
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

/// Install the fmt subscriber. Expansion logging only shows up when asked for.
pub fn init_tracing(msg_level: usize, spinner: Option<ProgressBar>) {
    let level = if msg_level > 0 { Level::INFO } else { Level::WARN };
    let writer = SpinnerWriter::new(spinner);
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(move || writer.clone())
        .try_init();
}

/// One-line outcome: the hop chain, or the no-correlation message.
pub fn format_outcome(result: &SearchResult) -> String {
    if result.is_found() {
        format_path(&result.path)
    } else {
        NO_CORRELATION.to_string()
    }
}

pub fn resolve_output_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

/// Render the report and, when a path is given, save it there.
pub fn write_report(
    report: &CorrelationReport,
    format: ReportFormat,
    output: Option<&Path>,
) -> wikicorrelate_core::Result<String> {
    let content = render_report(report, format)?;
    if let Some(path) = output {
        save_report(&content, path)?;
    }
    Ok(content)
}

fn search_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

pub async fn handle_correlate(matches: &ArgMatches) {
    let quiet = matches.get_flag("quiet");
    let options = options_from_matches(matches);

    let format = matches
        .get_one::<String>("format")
        .and_then(|f| ReportFormat::parse(f))
        .unwrap_or(ReportFormat::Text);
    let output = matches
        .get_one::<String>("output")
        .map(|raw| resolve_output_path(raw));

    let spinner = if quiet {
        None
    } else {
        let spinner = search_spinner();
        spinner.set_message(format!(
            "Searching up to {} hop(s) from {}...",
            options.max_hops,
            options.source.as_deref().unwrap_or("")
        ));
        Some(spinner)
    };
    init_tracing(options.msg_level, spinner.clone());

    let search_options = options.clone();
    let outcome =
        tokio::task::spawn_blocking(move || execute_correlation(&search_options, None)).await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let result = match outcome {
        Ok(Ok(result)) => result,
        Ok(Err(e)) => {
            eprintln!("{} Correlation failed: {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{} Search worker failed: {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    };

    let report = CorrelationReport::new(
        options.source.as_deref(),
        options.destination.as_deref(),
        options.max_hops,
        result,
    );

    match write_report(&report, format, output.as_deref()) {
        Ok(content) => {
            if let Some(path) = output {
                if !quiet {
                    println!("{}", format_outcome(&report.result));
                }
                println!(
                    "{} Report saved to {}",
                    "✓".green().bold(),
                    path.display().to_string().bright_white()
                );
            } else {
                print!("{}", content);
            }
        }
        Err(e) => {
            eprintln!("{} Failed to write report: {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    }
}
