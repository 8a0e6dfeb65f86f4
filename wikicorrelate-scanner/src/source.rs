use crate::error::Result;
use std::sync::Arc;

/// Anything that can reveal the outbound links of a node.
///
/// `fetch` returns every raw `href` on the page in document order. Callers are
/// expected to do their own filtering; an `Err` means the node could not be
/// expanded and should be treated as having no edges.
pub trait PageSource {
    fn fetch(&self, node: &str) -> Result<Vec<String>>;
}

impl<S: PageSource + ?Sized> PageSource for &S {
    fn fetch(&self, node: &str) -> Result<Vec<String>> {
        (**self).fetch(node)
    }
}

impl<S: PageSource + ?Sized> PageSource for Box<S> {
    fn fetch(&self, node: &str) -> Result<Vec<String>> {
        (**self).fetch(node)
    }
}

impl<S: PageSource + ?Sized> PageSource for Arc<S> {
    fn fetch(&self, node: &str) -> Result<Vec<String>> {
        (**self).fetch(node)
    }
}
