use crate::error::Result;
use crate::finder::PathFinder;
use crate::result::SearchResult;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Duration;
use tracing::info;
use wikicorrelate_scanner::{DEFAULT_BASE_URL, HttpPageSource};

/// Options for configuring a correlation run
#[derive(Debug, Clone)]
pub struct CorrelateOptions {
    pub source: Option<String>,
    pub destination: Option<String>,
    pub max_hops: usize,
    /// Expanded nodes at this depth or shallower are logged; 0 disables.
    pub msg_level: usize,
    pub timeout_secs: u64,
    pub base_url: String,
}

impl CorrelateOptions {
    pub fn new(
        source: Option<String>,
        destination: Option<String>,
        max_hops: usize,
        msg_level: usize,
        timeout_secs: u64,
    ) -> Self {
        Self {
            source,
            destination,
            max_hops,
            msg_level,
            timeout_secs,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_secs.saturating_mul(1000))
    }
}

impl Default for CorrelateOptions {
    fn default() -> Self {
        Self::new(None, None, 3, 0, 5)
    }
}

/// Run a correlation against the configured host.
///
/// Blocks for the whole search. From async code call it through
/// `tokio::task::spawn_blocking`.
pub fn execute_correlation(
    options: &CorrelateOptions,
    cancel_flag: Option<Arc<AtomicBool>>,
) -> Result<SearchResult> {
    let source = HttpPageSource::new(&options.base_url, options.timeout())?;

    let mut finder = PathFinder::new(
        source,
        options.source.as_deref(),
        options.destination.as_deref(),
        options.max_hops,
    )
    .with_msg_level(options.msg_level);
    if let Some(flag) = cancel_flag {
        finder = finder.with_cancel_flag(flag);
    }

    info!(
        "Correlating {} -> {} within {} hop(s)",
        finder.origin(),
        finder.destination(),
        options.max_hops
    );

    Ok(finder.search())
}
