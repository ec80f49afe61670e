//! Read-only descent: exact match and longest-prefix match.
//!
//! Both walks consume each node label with [`match_literal`] and pick the next child
//! by the first remaining byte. They differ only in what counts as success.

use super::node::Node;
use super::prefix::match_literal;

/// Returns `true` if `query` is consumed exactly at a leaf reachable from `root`.
pub(crate) fn visit(root: &Node, query: &[u8]) -> bool {
    let mut node = root;
    let mut query = query;

    loop {
        let Some(tail) = match_literal(&node.label, query) else {
            return false;
        };
        let Some(&first) = tail.first() else {
            // An empty tail at a non-leaf names a split point, not a key.
            return node.is_leaf;
        };
        match node.child(first) {
            Some(child) => {
                node = child;
                query = tail;
            }
            None => return false,
        }
    }
}

/// Returns the unconsumed tail after the deepest leaf below `root` whose path is a
/// literal prefix of `query`.
///
/// A deeper match always wins: every leaf passed on the way down overwrites the
/// answer, and the last one standing when the descent stops is returned.
pub(crate) fn traverse<'q>(root: &Node, query: &'q [u8]) -> Option<&'q [u8]> {
    let mut node = root;
    let mut query = query;
    let mut best = None;

    loop {
        let Some(tail) = match_literal(&node.label, query) else {
            return best;
        };
        if node.is_leaf {
            best = Some(tail);
        }
        match tail.first().and_then(|&first| node.child(first)) {
            Some(child) => {
                node = child;
                query = tail;
            }
            None => return best,
        }
    }
}
