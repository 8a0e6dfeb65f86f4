// Report generation for correlation results

use crate::result::SearchResult;
use crate::title::normalize_title;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub const HOP_SEPARATOR: &str = " >> ";
pub const NO_CORRELATION: &str = "Unable to find correlation!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationReport {
    pub source: String,
    pub destination: String,
    pub max_hops: usize,
    pub result: SearchResult,
}

impl CorrelationReport {
    pub fn new(
        source: Option<&str>,
        destination: Option<&str>,
        max_hops: usize,
        result: SearchResult,
    ) -> Self {
        Self {
            source: normalize_title(source),
            destination: normalize_title(destination),
            max_hops,
            result,
        }
    }
}

/// Join a path with the hop separator, `a >> b >> c`.
pub fn format_path(path: &[String]) -> String {
    path.join(HOP_SEPARATOR)
}

pub fn generate_text_report(report: &CorrelationReport) -> String {
    let mut text = String::new();

    if report.result.is_found() {
        text.push_str(&format_path(&report.result.path));
    } else if report.result.cancelled {
        text.push_str("Search cancelled before a correlation was found.");
    } else {
        text.push_str(NO_CORRELATION);
    }
    text.push('\n');

    text.push_str(&format!(
        "\n{} -> {} | max hops: {} | hops taken: {} | child nodes traversed: {}\n",
        report.source,
        report.destination,
        report.max_hops,
        report.result.hops(),
        report.result.expansions
    ));

    text
}

pub fn generate_json_report(report: &CorrelationReport) -> Result<String, serde_json::Error> {
    let json_report = serde_json::json!({
        "report": {
            "metadata": {
                "generator": "WikiCorrelate",
                "version": env!("CARGO_PKG_VERSION"),
                "generated_at": chrono::Utc::now().to_rfc3339(),
                "format": "json"
            },
            "query": {
                "source": report.source,
                "destination": report.destination,
                "max_hops": report.max_hops
            },
            "found": report.result.is_found(),
            "cancelled": report.result.cancelled,
            "hops": report.result.hops(),
            "expansions": report.result.expansions,
            "path": report.result.path
        }
    });

    serde_json::to_string_pretty(&json_report)
}

pub fn render_report(
    report: &CorrelationReport,
    format: ReportFormat,
) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Text => Ok(generate_text_report(report)),
        ReportFormat::Json => generate_json_report(report),
    }
}

pub fn save_report(content: &str, path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
