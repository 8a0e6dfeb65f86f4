use crate::result::SearchResult;
use crate::title::normalize_title;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{info, warn};
use wikicorrelate_scanner::{PageSource, is_relevant};

/// Greedy, depth-bounded DFS from one article to another.
///
/// The graph is discovered as the search goes: each expanded node is fetched
/// through the [`PageSource`] and its links become the next candidates. Two
/// rules decide which path comes back:
///
/// * a node that links straight to the destination finishes the search, even
///   if an earlier link on the same page would also have led there;
/// * otherwise candidates are tried in document order and the first branch that
///   reaches the destination wins. There is no backtracking for shorter paths.
///
/// `visited` remembers the shallowest depth each node was expanded at. A node
/// is only expanded again when reached at a strictly smaller depth, which
/// together with the hop limit keeps the search finite.
pub struct PathFinder<S> {
    source: S,
    origin: String,
    destination: String,
    destination_key: String,
    max_hops: usize,
    msg_level: usize,
    visited: HashMap<String, usize>,
    expansions: usize,
    path: Vec<String>,
    cancel_flag: Option<Arc<AtomicBool>>,
    cancelled: bool,
}

impl<S: PageSource> PathFinder<S> {
    pub fn new(source: S, origin: Option<&str>, destination: Option<&str>, max_hops: usize) -> Self {
        let destination = normalize_title(destination);
        Self {
            source,
            origin: normalize_title(origin),
            destination_key: destination.to_lowercase(),
            destination,
            max_hops,
            msg_level: 0,
            visited: HashMap::new(),
            expansions: 0,
            path: Vec::new(),
            cancel_flag: None,
            cancelled: false,
        }
    }

    /// Log expanded nodes up to this depth. Zero keeps the search quiet.
    pub fn with_msg_level(mut self, msg_level: usize) -> Self {
        self.msg_level = msg_level;
        self
    }

    /// Stop the search as soon as the flag is raised.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel_flag = Some(flag);
        self
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn max_hops(&self) -> usize {
        self.max_hops
    }

    /// Children handed to the recursion by the last search, zero before any.
    pub fn expansion_count(&self) -> usize {
        self.expansions
    }

    /// Shallowest depth `node` was reached at during the last search.
    pub fn visited_depth(&self, node: &str) -> Option<usize> {
        self.visited.get(node).copied()
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn find(&mut self) -> Vec<String> {
        self.search().path
    }

    pub fn search(&mut self) -> SearchResult {
        self.visited.clear();
        self.expansions = 0;
        self.path.clear();
        self.cancelled = false;

        let origin = self.origin.clone();
        if let Some(found) = self.explore(Vec::new(), &origin, 0) {
            self.path = found;
        }

        if self.msg_level > 0 {
            info!("Determined traversing {} child article nodes", self.expansions);
        }

        SearchResult {
            path: self.path.clone(),
            expansions: self.expansions,
            cancelled: self.cancelled,
        }
    }

    fn explore(&mut self, mut current: Vec<String>, node: &str, hops: usize) -> Option<Vec<String>> {
        if hops == 0 {
            current.push(node.to_string());
        }
        if hops > self.max_hops || self.is_cancelled() {
            return None;
        }

        match self.visited.get(node) {
            Some(&seen) if seen <= hops => return None,
            _ => {
                self.visited.insert(node.to_string(), hops);
            }
        }

        let links = match self.source.fetch(node) {
            Ok(links) => links,
            Err(e) => {
                warn!("{} - Unable to fetch: {}", node, e);
                return None;
            }
        };

        // A fetch can take a while, the flag may have gone up meanwhile
        if self.is_cancelled() {
            return None;
        }

        if self.msg_level != 0 && hops <= self.msg_level {
            info!("{} - {} hop(s)", node, hops);
        }

        if let Some(hit) = links.iter().find(|link| self.is_destination(link)) {
            self.visited.insert(hit.clone(), hops);
            current.push(hit.clone());
            return Some(current);
        }

        for link in links.iter().filter(|link| is_relevant(link)) {
            if self.is_cancelled() {
                break;
            }
            self.expansions += 1;
            let mut next = current.clone();
            next.push(link.clone());
            if let Some(found) = self.explore(next, link, hops + 1) {
                return Some(found);
            }
        }

        None
    }

    fn is_destination(&self, link: &str) -> bool {
        link.to_lowercase() == self.destination_key
    }

    fn is_cancelled(&mut self) -> bool {
        let raised = self
            .cancel_flag
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed));
        if raised {
            self.cancelled = true;
        }
        raised
    }
}
