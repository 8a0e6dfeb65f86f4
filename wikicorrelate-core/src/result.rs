use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Source to destination inclusive; empty when nothing was found.
    pub path: Vec<String>,
    /// Candidate child nodes handed to the recursion.
    pub expansions: usize,
    pub cancelled: bool,
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}
