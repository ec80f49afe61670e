//! Node data model.

use std::boxed::Box;
use std::mem;
use std::vec::Vec;

/// A node in the radix tree.
///
/// Each node contains:
/// - A label: the byte segment contributed by the edge from its parent.
/// - A leaf flag: set when the labels from the root down to this node spell a stored key.
/// - A list of children, sorted by the first byte of their labels.
///
/// Children own their subtrees outright; there are no parent links. Every child label
/// is non-empty and no two children of one node start with the same byte, so child
/// selection by first byte is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Node {
    /// The segment of key bytes this node adds to its parent's path.
    pub(crate) label: Box<[u8]>,
    /// Children, sorted by the first byte of their label.
    pub(crate) children: Vec<Node>,
    /// Whether the path ending here is a stored key.
    pub(crate) is_leaf: bool,
}

impl Node {
    /// Creates the root of an empty tree: empty label, no children, not a leaf.
    pub(crate) fn root() -> Self {
        Self::default()
    }

    /// Creates a childless leaf labeled with `label`.
    pub(crate) fn leaf(label: &[u8]) -> Self {
        Self {
            label: Box::from(label),
            children: Vec::new(),
            is_leaf: true,
        }
    }

    /// Creates a non-leaf node labeled with `label`, to be populated by the caller.
    pub(crate) fn branch(label: &[u8]) -> Self {
        Self {
            label: Box::from(label),
            children: Vec::with_capacity(2),
            is_leaf: false,
        }
    }

    /// Returns the label bytes of this node.
    pub fn label(&self) -> &[u8] {
        &self.label
    }

    /// Returns the children of this node in ascending first-byte order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Returns `true` if the path from the root to this node is a stored key.
    pub fn is_leaf(&self) -> bool {
        self.is_leaf
    }

    /// Finds the child whose label starts with `byte`.
    pub fn child(&self, byte: u8) -> Option<&Node> {
        self.position(byte).ok().map(|pos| &self.children[pos])
    }

    /// Returns the number of nodes in this subtree, including this node.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }

    /// First byte of the label, `None` only for an empty label.
    #[inline]
    pub(crate) fn first_byte(&self) -> Option<u8> {
        self.label.first().copied()
    }

    /// Binary search over the children by first label byte.
    ///
    /// `Ok` holds the index of the matching child, `Err` the index at which a child
    /// starting with `byte` would have to be inserted to keep the order.
    #[inline]
    pub(crate) fn position(&self, byte: u8) -> Result<usize, usize> {
        self.children.binary_search_by_key(&Some(byte), Node::first_byte)
    }

    /// Drops the first `consumed` bytes of the label.
    pub(crate) fn relabel(&mut self, consumed: usize) {
        self.label = Box::from(&self.label[consumed..]);
    }

    /// Detaches and frees every descendant, leaving this node childless.
    ///
    /// Subtrees are moved onto a work stack and freed one node at a time.
    pub(crate) fn dismantle(&mut self) {
        let mut stack = mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}
