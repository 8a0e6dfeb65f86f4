use crate::error::{FetchError, Result};
use crate::source::PageSource;
use reqwest::blocking::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::debug;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org";

/// Page source backed by a blocking HTTP client against a single host.
///
/// The client owns its own runtime, so it has to be built, used and dropped
/// outside of an async context (inside `spawn_blocking` or a plain thread).
pub struct HttpPageSource {
    client: Client,
    base_url: Url,
}

impl HttpPageSource {
    /// A zero timeout disables the per-request deadline.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        let mut builder = Client::builder()
            .user_agent(concat!("WikiCorrelate/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(5))
            .tcp_keepalive(Duration::from_secs(60));
        if !timeout.is_zero() {
            builder = builder.timeout(timeout).connect_timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, base_url })
    }

    fn page_url(&self, node: &str) -> Result<Url> {
        self.base_url
            .join(node)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", node, e)))
    }
}

impl PageSource for HttpPageSource {
    fn fetch(&self, node: &str) -> Result<Vec<String>> {
        let url = self.page_url(node)?;
        debug!("Fetching {}", url);

        let response = self.client.get(url).send()?.error_for_status()?;
        let body = response.text()?;

        let links = extract_links(&body)?;
        debug!("{} - {} links", node, links.len());
        Ok(links)
    }
}

/// Raw `href` of every anchor in the document, in document order.
pub fn extract_links(html: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let link_selector = Selector::parse("a[href]")
        .map_err(|e| FetchError::Other(format!("bad link selector: {:?}", e)))?;

    Ok(document
        .select(&link_selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect())
}
