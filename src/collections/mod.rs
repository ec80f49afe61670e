//! Collections.
//!
//! - `trie`: compressed radix tree for fixed key sets

pub mod trie;

pub use trie::{Keys, Node, NodeSnapshot, PrefixMatch, RadixTree};
