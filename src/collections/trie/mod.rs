//! Compressed radix tree (Patricia-style trie) over byte-string keys.
//!
//! Nodes own their children directly and keep them sorted by the first byte of
//! their labels, so each step of a lookup is a binary search over at most 256
//! entries. A tree is built once from a fixed key set and then answers two kinds of
//! query:
//!
//! - exact match (`lookup_exact`, `visit`): the query must end exactly at a stored key;
//! - longest-prefix match (`lookup_prefix`, `traverse`): the longest stored key that
//!   is a prefix of the query, plus the unconsumed tail.

pub mod iter;
pub mod node;
pub mod prefix;
pub mod print;
pub mod tree;

pub(crate) mod insert;
pub(crate) mod query;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use iter::Keys;
pub use node::Node;
pub use prefix::{common_prefix_len, match_literal};
pub use print::NodeSnapshot;
pub use tree::{PrefixMatch, RadixTree};
