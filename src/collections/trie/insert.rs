//! Insertion into an owned node tree.
//!
//! One loop with a `&mut Node` cursor, one prefix computation per level, and a
//! five-way branch on where that prefix ends relative to the node label and the
//! remaining key. Depth costs no stack.

use std::mem;

use super::node::Node;
use super::prefix::common_prefix_len;

/// How a node label relates to the remainder of the key being inserted.
///
/// `index` below is the length of their common prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MatchKind {
    /// `index == 0` with a non-empty label. Only reachable if a child was chosen
    /// whose first byte does not match.
    NoMatch,
    /// Label and key end together: the key is already on this path.
    FullMatch,
    /// The key ends inside the label: split and make the front half a leaf.
    StringMatch,
    /// The label is consumed and the key continues: descend or attach a new leaf.
    NodeMatch,
    /// Label and key diverge after a shared prefix: factor the prefix out.
    PartialMatch,
}

impl MatchKind {
    /// Selects the case for a common prefix of `index` bytes between a label of
    /// `label_len` bytes and a key remainder of `key_len` bytes.
    pub(crate) fn classify(index: usize, label_len: usize, key_len: usize) -> Self {
        debug_assert!(index <= label_len && index <= key_len);
        if index == 0 && label_len != 0 {
            MatchKind::NoMatch
        } else if index == label_len && index == key_len {
            MatchKind::FullMatch
        } else if index == key_len {
            MatchKind::StringMatch
        } else if index == label_len {
            MatchKind::NodeMatch
        } else {
            MatchKind::PartialMatch
        }
    }
}

/// Inserts `key` below `root`, the node at which `key` starts.
///
/// Returns `true` if the key was not stored before. Every step is a total structural
/// transformation: the only path that leaves the tree untouched besides a repeated
/// key is [`MatchKind::NoMatch`].
pub(crate) fn insert(root: &mut Node, key: &[u8]) -> bool {
    let mut node = root;
    let mut key = key;

    loop {
        let index = common_prefix_len(&node.label, key);

        match MatchKind::classify(index, node.label.len(), key.len()) {
            MatchKind::NoMatch => {
                trace_event!(
                    warn,
                    label = %node.label.escape_ascii(),
                    key = %key.escape_ascii(),
                    "insertion reached a node sharing no prefix with the key; left unchanged"
                );
                return false;
            }
            MatchKind::FullMatch => return !mem::replace(&mut node.is_leaf, true),
            MatchKind::StringMatch => {
                // `key` equals the first `index` bytes of the label.
                let mut old = mem::replace(node, Node::leaf(key));
                old.relabel(index);
                trace_event!(
                    trace,
                    prefix = %key.escape_ascii(),
                    suffix = %old.label.escape_ascii(),
                    "split node where key ends"
                );
                node.children.push(old);
                return true;
            }
            MatchKind::NodeMatch => {
                let tail = &key[index..];
                let Some(&first) = tail.first() else {
                    return false;
                };
                match node.position(first) {
                    Ok(pos) => {
                        node = &mut node.children[pos];
                        key = tail;
                    }
                    Err(pos) => {
                        trace_event!(trace, label = %tail.escape_ascii(), pos, "attach leaf");
                        node.children.insert(pos, Node::leaf(tail));
                        return true;
                    }
                }
            }
            MatchKind::PartialMatch => {
                let mut old = mem::replace(node, Node::branch(&key[..index]));
                old.relabel(index);
                let added = Node::leaf(&key[index..]);
                trace_event!(
                    trace,
                    prefix = %key[..index].escape_ascii(),
                    existing = %old.label.escape_ascii(),
                    added = %added.label.escape_ascii(),
                    "split node at diverging byte"
                );
                // Both labels are non-empty and differ in their first byte.
                if old.first_byte() < added.first_byte() {
                    node.children.extend([old, added]);
                } else {
                    node.children.extend([added, old]);
                }
                return true;
            }
        }
    }
}
