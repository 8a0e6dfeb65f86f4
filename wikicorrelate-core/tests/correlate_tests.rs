// End-to-end correlation runs against a mock wiki host

use std::time::Duration;
use wikicorrelate_core::{CorrelateError, CorrelateOptions, SearchResult, execute_correlation};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

async fn mount_page(server: &MockServer, page: &str, links: &[&str]) {
    let mut html = String::from("<html><body>");
    for link in links {
        html.push_str(&format!(r#"<a href="{}">{}</a>"#, link, link));
    }
    html.push_str("</body></html>");

    Mock::given(method("GET"))
        .and(path(page))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html")
                .set_body_string(html),
        )
        .mount(server)
        .await;
}

async fn correlate(options: CorrelateOptions) -> Result<SearchResult, CorrelateError> {
    tokio::task::spawn_blocking(move || execute_correlation(&options, None))
        .await
        .unwrap()
}

// ============================================================================
// Options Tests
// ============================================================================

#[test]
fn test_timeout_is_converted_from_seconds() {
    let options = CorrelateOptions::new(None, None, 1, 0, 20);
    assert_eq!(options.timeout(), Duration::from_millis(20_000));
}

#[test]
fn test_default_options_match_front_end() {
    let options = CorrelateOptions::default();
    assert_eq!(options.max_hops, 3);
    assert_eq!(options.msg_level, 0);
    assert_eq!(options.timeout_secs, 5);
    assert_eq!(options.base_url, "https://en.wikipedia.org");
}

#[test]
fn test_invalid_base_url_is_a_setup_error() {
    let options = CorrelateOptions::default().with_base_url("::not a url::");
    let result = execute_correlation(&options, None);
    assert!(matches!(result, Err(CorrelateError::Source(_))));
}

// ============================================================================
// Correlation Tests
// ============================================================================

#[tokio::test]
async fn test_correlation_over_http() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/wiki/We_Were_Gentlemen",
        &["/wiki/Main_Page", "/wiki/Special:Random", "/wiki/Virginia"],
    )
    .await;
    mount_page(&server, "/wiki/Virginia", &["/wiki/Foothills"]).await;

    let options = CorrelateOptions::new(
        Some("We Were Gentlemen".to_string()),
        Some("foothills".to_string()),
        1,
        1,
        5,
    )
    .with_base_url(server.uri());

    let result = correlate(options).await.unwrap();
    assert_eq!(
        result.path,
        vec!["/wiki/We_Were_Gentlemen", "/wiki/Virginia", "/wiki/Foothills"]
    );
    assert_eq!(result.expansions, 1);
}

#[tokio::test]
async fn test_correlation_survives_missing_pages() {
    let server = MockServer::start().await;
    // Gone is not mounted, so the mock server answers 404 for it
    mount_page(&server, "/wiki/Seattle", &["/wiki/Gone", "/wiki/Coffee"]).await;
    mount_page(&server, "/wiki/Coffee", &["/wiki/Starbucks"]).await;

    let options = CorrelateOptions::new(
        Some("Seattle".to_string()),
        Some("Starbucks".to_string()),
        2,
        0,
        5,
    )
    .with_base_url(server.uri());

    let result = correlate(options).await.unwrap();
    assert_eq!(
        result.path,
        vec!["/wiki/Seattle", "/wiki/Coffee", "/wiki/Starbucks"]
    );
}

#[tokio::test]
async fn test_no_correlation_returns_empty_path() {
    let server = MockServer::start().await;
    mount_page(&server, "/wiki/We_Were_Gentlemen", &["/wiki/Virginia"]).await;
    mount_page(&server, "/wiki/Virginia", &["/wiki/Foothills"]).await;

    let options = CorrelateOptions::new(
        Some("We_Were_Gentlemen".to_string()),
        Some("huivwbawr".to_string()),
        1,
        0,
        5,
    )
    .with_base_url(server.uri());

    let result = correlate(options).await.unwrap();
    assert!(result.path.is_empty());
    assert!(!result.cancelled);
}
