use crate::error::{FetchError, Result};
use crate::source::PageSource;
use std::collections::HashMap;
use std::sync::Mutex;

/// Fixed link graph held in memory. Nodes without a page fail to fetch.
///
/// Every fetch is counted per node, which makes it easy to check how often
/// a search expanded a given page.
#[derive(Debug, Default)]
pub struct MemoryPageSource {
    pages: HashMap<String, Vec<String>>,
    fetches: Mutex<HashMap<String, usize>>,
}

impl MemoryPageSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page<I, L>(mut self, node: &str, links: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        self.insert_page(node, links);
        self
    }

    pub fn insert_page<I, L>(&mut self, node: &str, links: I)
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        self.pages
            .insert(node.to_string(), links.into_iter().map(Into::into).collect());
    }

    /// Number of fetch attempts made for `node`, failed ones included.
    pub fn fetch_count(&self, node: &str) -> usize {
        self.fetches
            .lock()
            .map(|fetches| fetches.get(node).copied().unwrap_or(0))
            .unwrap_or(0)
    }

    pub fn total_fetches(&self) -> usize {
        self.fetches
            .lock()
            .map(|fetches| fetches.values().sum())
            .unwrap_or(0)
    }
}

impl PageSource for MemoryPageSource {
    fn fetch(&self, node: &str) -> Result<Vec<String>> {
        if let Ok(mut fetches) = self.fetches.lock() {
            *fetches.entry(node.to_string()).or_insert(0) += 1;
        }

        self.pages
            .get(node)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(node.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_page_returns_links() {
        let source = MemoryPageSource::new().with_page("/wiki/S", ["/wiki/M", "/wiki/D"]);
        assert_eq!(source.fetch("/wiki/S").unwrap(), vec!["/wiki/M", "/wiki/D"]);
    }

    #[test]
    fn test_unknown_page_fails() {
        let source = MemoryPageSource::new();
        assert!(matches!(source.fetch("/wiki/Nowhere"), Err(FetchError::NotFound(_))));
    }

    #[test]
    fn test_fetches_are_counted() {
        let source = MemoryPageSource::new().with_page("/wiki/S", Vec::<String>::new());
        let _ = source.fetch("/wiki/S");
        let _ = source.fetch("/wiki/S");
        let _ = source.fetch("/wiki/Missing");

        assert_eq!(source.fetch_count("/wiki/S"), 2);
        assert_eq!(source.fetch_count("/wiki/Missing"), 1);
        assert_eq!(source.fetch_count("/wiki/Other"), 0);
        assert_eq!(source.total_fetches(), 3);
    }
}
