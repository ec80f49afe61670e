//! # `radix-lookup` - Compressed Prefix Tree for Fixed Key Sets
//!
//! A radix tree (compressed trie) that stores a set of byte-string keys known in
//! advance, such as command names or option flags, and answers two queries against
//! it: exact-match lookup and longest-prefix lookup with the remaining tail.
//!
//! ## Lifecycle
//!
//! - **Build phase**: keys are inserted one by one by a single owner. Insertion is
//!   total and idempotent; it never fails and a repeated key changes nothing.
//! - **Query phase**: the finished tree is read-only. Lookups take `&self`, never
//!   allocate on the match path, never block, and are bounded by the length of the
//!   longest key, so the tree can be shared across threads without locks.
//!
//! ## Invariants
//!
//! 1. The children of a node start with pairwise distinct bytes.
//! 2. Shared prefixes are always factored into one node, so every node other than
//!    the root either is a leaf or has at least two children.
//! 3. The root-to-leaf label paths are exactly the inserted keys.
//! 4. Children are sorted by first byte, which makes the tree shape independent of
//!    insertion order.
//! 5. The root label is always empty; the root is a leaf iff the empty key is stored.
//!
//! ## Features
//!
//! - `parallel`: batch lookups on the rayon pool.
//! - `tracing`: structured `tracing` events for node splits and builds.
//!
//! ## Example
//!
//! ```rust
//! use radix_lookup::RadixTree;
//!
//! let commands = RadixTree::build(["help", "hel", "version"]);
//!
//! // Exact match
//! assert!(commands.contains("help"));
//! assert_eq!(commands.lookup_exact("he"), None);
//!
//! // Longest prefix match, deepest key wins
//! let found = commands.lookup_prefix("help=all").unwrap();
//! assert_eq!(found.key, b"help");
//! assert_eq!(found.tail, b"=all");
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;

pub mod collections;

pub use collections::{Keys, Node, NodeSnapshot, PrefixMatch, RadixTree};

// A finished tree is handed across threads for lock-free reads.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RadixTree>();
    assert_send_sync::<Node>();
    assert_send_sync::<PrefixMatch<'static>>();
};
