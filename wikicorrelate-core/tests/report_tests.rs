// Tests for correlation report rendering

use std::fs;
use tempfile::TempDir;
use wikicorrelate_core::SearchResult;
use wikicorrelate_core::report::{
    CorrelationReport, NO_CORRELATION, ReportFormat, format_path, generate_json_report,
    generate_text_report, render_report, save_report,
};

fn found_report() -> CorrelationReport {
    CorrelationReport::new(
        Some("We Were Gentlemen"),
        Some("Foothills"),
        1,
        SearchResult {
            path: vec![
                "/wiki/We_Were_Gentlemen".to_string(),
                "/wiki/Virginia".to_string(),
                "/wiki/Foothills".to_string(),
            ],
            expansions: 12,
            cancelled: false,
        },
    )
}

fn empty_report() -> CorrelationReport {
    CorrelationReport::new(
        Some("We_Were_Gentlemen"),
        Some("huivwbawr"),
        1,
        SearchResult::default(),
    )
}

#[test]
fn test_format_path_joins_with_separator() {
    let path = vec!["/wiki/A".to_string(), "/wiki/B".to_string()];
    assert_eq!(format_path(&path), "/wiki/A >> /wiki/B");
}

#[test]
fn test_format_path_single_and_empty() {
    assert_eq!(format_path(&["/wiki/A".to_string()]), "/wiki/A");
    assert_eq!(format_path(&[]), "");
}

#[test]
fn test_report_format_parse() {
    assert_eq!(ReportFormat::parse("text"), Some(ReportFormat::Text));
    assert_eq!(ReportFormat::parse("JSON"), Some(ReportFormat::Json));
    assert_eq!(ReportFormat::parse("csv"), None);
}

#[test]
fn test_report_normalizes_titles() {
    let report = found_report();
    assert_eq!(report.source, "/wiki/We_Were_Gentlemen");
    assert_eq!(report.destination, "/wiki/Foothills");
}

#[test]
fn test_text_report_found() {
    let text = generate_text_report(&found_report());
    let first_line = text.lines().next().unwrap();
    assert_eq!(
        first_line,
        "/wiki/We_Were_Gentlemen >> /wiki/Virginia >> /wiki/Foothills"
    );
    assert!(text.contains("hops taken: 2"));
    assert!(text.contains("child nodes traversed: 12"));
}

#[test]
fn test_text_report_not_found() {
    let text = generate_text_report(&empty_report());
    assert!(text.starts_with(NO_CORRELATION));
    assert!(text.contains("hops taken: 0"));
}

#[test]
fn test_text_report_cancelled() {
    let mut report = empty_report();
    report.result.cancelled = true;
    let text = generate_text_report(&report);
    assert!(text.starts_with("Search cancelled"));
}

#[test]
fn test_json_report_structure() {
    let json = generate_json_report(&found_report()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let report = &value["report"];
    assert_eq!(report["metadata"]["generator"], "WikiCorrelate");
    assert!(report["metadata"]["generated_at"].is_string());
    assert_eq!(report["query"]["destination"], "/wiki/Foothills");
    assert_eq!(report["query"]["max_hops"], 1);
    assert_eq!(report["found"], true);
    assert_eq!(report["hops"], 2);
    assert_eq!(report["expansions"], 12);
    assert_eq!(report["path"].as_array().unwrap().len(), 3);
}

#[test]
fn test_json_report_not_found() {
    let json = generate_json_report(&empty_report()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["report"]["found"], false);
    assert!(value["report"]["path"].as_array().unwrap().is_empty());
}

#[test]
fn test_render_report_dispatches_on_format() {
    let report = found_report();
    assert_eq!(
        render_report(&report, ReportFormat::Text).unwrap(),
        generate_text_report(&report)
    );
    assert!(render_report(&report, ReportFormat::Json).unwrap().starts_with('{'));
}

#[test]
fn test_save_report() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.txt");

    let content = generate_text_report(&found_report());
    save_report(&content, &path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), content);
}
