//! Ordered key enumeration.

use std::iter::FusedIterator;
use std::vec::Vec;

use super::node::Node;
use super::tree::RadixTree;

/// Iterator over the keys of a `RadixTree`, in ascending byte order.
/// Yields owned `Vec<u8>` keys rebuilt from node labels.
pub struct Keys<'a> {
    // Stack of (node, action): action 0 yields the node itself, action i > 0 descends
    // into child i - 1.
    stack: Vec<(&'a Node, usize)>,
    // Labels concatenated from the root down to the top of the stack.
    key_buf: Vec<u8>,
    remaining: usize,
}

impl<'a> Keys<'a> {
    pub(crate) fn new(tree: &'a RadixTree) -> Self {
        let root = tree.root();
        Self {
            stack: vec![(root, 0)],
            key_buf: root.label().to_vec(),
            remaining: tree.len(),
        }
    }
}

impl<'a> Iterator for Keys<'a> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let last_idx = self.stack.len().checked_sub(1)?;
            let (node, action) = self.stack[last_idx];

            if action == 0 {
                self.stack[last_idx].1 += 1;
                if node.is_leaf() {
                    self.remaining = self.remaining.saturating_sub(1);
                    return Some(self.key_buf.clone());
                }
                continue;
            }

            if let Some(child) = node.children().get(action - 1) {
                // Advance parent so next time we visit the next child
                self.stack[last_idx].1 += 1;
                self.key_buf.extend_from_slice(child.label());
                self.stack.push((child, 0));
            } else {
                self.stack.pop();
                let new_len = self.key_buf.len().saturating_sub(node.label().len());
                self.key_buf.truncate(new_len);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Keys<'_> {}

impl FusedIterator for Keys<'_> {}
